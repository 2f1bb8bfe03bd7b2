// ==========================================
// 员工花名册导入系统 - 员工数据仓储
// ==========================================
// 红线: Repository 不含业务逻辑
// ==========================================

use crate::domain::Employee;
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::Connection;
use std::sync::{Arc, Mutex, MutexGuard};

// ==========================================
// EmployeeRepository - 员工仓储
// ==========================================

/// 员工仓储
/// 职责: 管理 employee 表的查询操作
pub struct EmployeeRepository {
    conn: Arc<Mutex<Connection>>,
}

impl EmployeeRepository {
    /// 创建新的员工仓储实例
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    pub fn new(db_path: String) -> RepositoryResult<Self> {
        let conn = Connection::open(&db_path)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 从已有连接创建仓储实例
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// 获取数据库连接
    fn get_conn(&self) -> RepositoryResult<MutexGuard<Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 查询全部员工，按员工编号升序
    ///
    /// employee_id 为不透明文本，排序按字典序（"10" < "9"）。
    pub fn list_all(&self) -> RepositoryResult<Vec<Employee>> {
        let conn = self.get_conn()?;

        let mut stmt = conn.prepare(
            r#"
            SELECT employee_id, first_name, last_name, phone_number,
                   salary, manager_id, department_id, company_id
            FROM employee
            ORDER BY employee_id ASC
            "#,
        )?;

        let employees = stmt
            .query_map([], |row| {
                Ok(Employee {
                    employee_id: row.get(0)?,
                    first_name: row.get(1)?,
                    last_name: row.get(2)?,
                    phone_number: row.get(3)?,
                    salary: row.get(4)?,
                    manager_id: row.get(5)?,
                    department_id: row.get(6)?,
                    company_id: row.get(7)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(employees)
    }
}
