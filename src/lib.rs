// ==========================================
// 员工花名册导入系统 - 核心库
// ==========================================
// 技术栈: Rust + SQLite
// 系统定位: 表格批量解析与入库 (公司/员工两级写入)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 数据访问
pub mod repository;

// 导入层 - 外部数据
pub mod importer;

// 数据库基础设施（连接初始化/PRAGMA 统一）
pub mod db;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// 应用层 - 状态装配
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域实体
pub use domain::{Company, Employee, ImportSummary, RawEmployeeRow};

// 导入层
pub use importer::{FileFormat, ImportError, RosterImporterImpl, REQUIRED_COLUMNS};

// API
pub use api::{CompanyApi, EmployeeApi, UploadApi};

// 应用状态
pub use app::AppState;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "员工花名册导入系统";

// 数据库版本
pub const DB_VERSION: &str = "v0.1";

// ==========================================
// 预编译检查
// ==========================================
