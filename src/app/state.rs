// ==========================================
// 员工花名册导入系统 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和API实例
// ==========================================

use rusqlite::Connection;
use std::sync::{Arc, Mutex};

use crate::api::{CompanyApi, EmployeeApi, UploadApi};
use crate::db;
use crate::repository::{CompanyRepository, EmployeeRepository, RosterImportRepositoryImpl};

/// 应用状态
///
/// 包含所有API实例和共享资源
pub struct AppState {
    /// 数据库路径
    pub db_path: String,

    /// 花名册上传API
    pub upload_api: Arc<UploadApi>,

    /// 公司查询API
    pub company_api: Arc<CompanyApi>,

    /// 员工查询API
    pub employee_api: Arc<EmployeeApi>,
}

impl AppState {
    /// 创建新的AppState实例
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    ///
    /// # 返回
    /// - Ok(AppState): 应用状态实例
    /// - Err(String): 初始化错误
    ///
    /// # 说明
    /// 该方法会：
    /// 1. 打开共享数据库连接并应用统一 PRAGMA
    /// 2. 建表（幂等）
    /// 3. 初始化所有Repository与API实例
    pub fn new(db_path: String) -> Result<Self, String> {
        tracing::info!("初始化AppState，数据库路径: {}", db_path);

        // 创建数据库连接（共享连接）
        let conn = db::open_sqlite_connection(&db_path)
            .map_err(|e| format!("无法打开数据库: {}", e))?;

        // 首次启动建表
        db::ensure_schema(&conn).map_err(|e| format!("无法初始化数据库表: {}", e))?;

        let conn = Arc::new(Mutex::new(conn));

        // ==========================================
        // 初始化Repository层
        // ==========================================
        let import_repo = Arc::new(RosterImportRepositoryImpl::from_connection(conn.clone()));
        let company_repo = CompanyRepository::from_connection(conn.clone());
        let employee_repo = EmployeeRepository::from_connection(conn.clone());

        // ==========================================
        // 初始化API层
        // ==========================================
        let upload_api = Arc::new(UploadApi::new(import_repo));
        let company_api = Arc::new(CompanyApi::new(company_repo));
        let employee_api = Arc::new(EmployeeApi::new(employee_repo));

        tracing::info!("AppState初始化完成");

        Ok(Self {
            db_path,
            upload_api,
            company_api,
            employee_api,
        })
    }

    /// 获取数据库路径
    pub fn get_db_path(&self) -> &str {
        &self.db_path
    }
}

// ==========================================
// 默认数据库路径辅助函数
// ==========================================

/// 获取默认数据库路径
///
/// # 返回
/// - 开发环境: 用户数据目录/roster-import-dev/roster_import.db
/// - 生产环境: 用户数据目录/roster-import/roster_import.db
pub fn get_default_db_path() -> String {
    use std::path::PathBuf;

    // 允许通过环境变量显式指定 DB 路径（便于调试/测试/CI）
    if let Ok(path) = std::env::var("ROSTER_IMPORT_DB_PATH") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    // 先给一个默认回退值，后续如果能拿到 data_dir 再覆盖
    let mut path = PathBuf::from("./roster_import.db");

    // 尝试获取用户数据目录
    if let Some(data_dir) = dirs::data_dir() {
        // 开发环境使用独立目录，避免污染生产数据
        #[cfg(debug_assertions)]
        {
            path = data_dir.join("roster-import-dev");
        }

        #[cfg(not(debug_assertions))]
        {
            path = data_dir.join("roster-import");
        }

        // 确保目录存在
        std::fs::create_dir_all(&path).ok();
        path = path.join("roster_import.db");
    }

    path.to_string_lossy().to_string()
}
