// ==========================================
// 公司查询API
// ==========================================
// 职责: 封装公司列表查询
// ==========================================

use crate::api::error::ApiResult;
use crate::domain::Company;
use crate::repository::CompanyRepository;

/// 公司API
pub struct CompanyApi {
    company_repo: CompanyRepository,
}

impl CompanyApi {
    /// 创建新的CompanyApi实例
    pub fn new(company_repo: CompanyRepository) -> Self {
        Self { company_repo }
    }

    /// 查询全部公司
    ///
    /// # 返回
    /// - Ok(Vec<Company>): 全部公司，存储顺序
    /// - Err(ApiError): 数据库错误
    pub fn list_companies(&self) -> ApiResult<Vec<Company>> {
        let companies = self.company_repo.list_all()?;
        Ok(companies)
    }
}
