// ==========================================
// 员工花名册导入系统 - 花名册导入 Repository 实现
// ==========================================
// 职责: 实现导入相关数据访问（使用 rusqlite）
// 红线: Repository 不含业务规则，只做数据 CRUD
// ==========================================

use crate::domain::{Company, Employee};
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::roster_import_repo::RosterImportRepository;
use async_trait::async_trait;
use rusqlite::{params, Connection};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

// ==========================================
// RosterImportRepositoryImpl
// ==========================================
pub struct RosterImportRepositoryImpl {
    conn: Arc<Mutex<Connection>>,
}

impl RosterImportRepositoryImpl {
    /// 创建新的 Repository 实例
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = Connection::open(db_path)?;

        // 启用外键约束
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 从已有连接创建 Repository 实例
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// 获取数据库连接
    fn get_conn(&self) -> RepositoryResult<MutexGuard<Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }
}

#[async_trait]
impl RosterImportRepository for RosterImportRepositoryImpl {
    /// 按名称集合查询已存在的公司
    async fn find_companies_by_names(&self, names: &[String]) -> RepositoryResult<Vec<Company>> {
        // IN () 不是合法 SQL，空集合直接短路
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let conn = self.get_conn()?;

        // 构建 IN 子句的占位符
        let placeholders = names.iter().map(|_| "?").collect::<Vec<_>>().join(",");
        let query = format!(
            "SELECT id, company_name FROM company WHERE company_name IN ({})",
            placeholders
        );

        let mut stmt = conn.prepare(&query)?;

        // 绑定参数
        let params: Vec<&dyn rusqlite::ToSql> =
            names.iter().map(|n| n as &dyn rusqlite::ToSql).collect();

        let companies = stmt
            .query_map(params.as_slice(), |row| {
                Ok(Company {
                    id: row.get(0)?,
                    company_name: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(companies)
    }

    /// 批量插入公司（事务化）
    async fn bulk_insert_companies(&self, names: &[String]) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;
        let tx = conn.unchecked_transaction()?;

        let mut stmt = tx.prepare("INSERT INTO company (company_name) VALUES (?1)")?;

        let mut count = 0;
        for name in names {
            stmt.execute(params![name])?;
            count += 1;
        }

        // 显式释放 stmt 的借用,以便提交事务
        drop(stmt);

        tx.commit()?;
        debug!(count = count, "公司批量插入已提交");
        Ok(count)
    }

    /// 批量插入员工（事务化）
    async fn bulk_insert_employees(&self, employees: &[Employee]) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;
        let tx = conn.unchecked_transaction()?;

        let mut stmt = tx.prepare(
            r#"
            INSERT INTO employee (
                employee_id, first_name, last_name, phone_number,
                salary, manager_id, department_id, company_id
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
        )?;

        let mut count = 0;
        for employee in employees {
            stmt.execute(params![
                employee.employee_id,
                employee.first_name,
                employee.last_name,
                employee.phone_number,
                employee.salary,
                employee.manager_id,
                employee.department_id,
                employee.company_id,
            ])?;
            count += 1;
        }

        drop(stmt);

        tx.commit()?;
        debug!(count = count, "员工批量插入已提交");
        Ok(count)
    }
}
