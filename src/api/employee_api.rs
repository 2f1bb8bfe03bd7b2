// ==========================================
// 员工查询API
// ==========================================
// 职责: 封装员工列表查询
// ==========================================

use crate::api::error::ApiResult;
use crate::domain::Employee;
use crate::repository::EmployeeRepository;

/// 员工API
pub struct EmployeeApi {
    employee_repo: EmployeeRepository,
}

impl EmployeeApi {
    /// 创建新的EmployeeApi实例
    pub fn new(employee_repo: EmployeeRepository) -> Self {
        Self { employee_repo }
    }

    /// 查询全部员工（按员工编号字典序升序）
    ///
    /// # 返回
    /// - Ok(Vec<Employee>): 全部员工
    /// - Err(ApiError): 数据库错误
    pub fn list_employees(&self) -> ApiResult<Vec<Employee>> {
        let employees = self.employee_repo.list_all()?;
        Ok(employees)
    }
}
