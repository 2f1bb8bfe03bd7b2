// ==========================================
// 员工花名册导入系统 - API 层
// ==========================================
// 职责: 提供业务 API 接口,供外层服务调用
// ==========================================

pub mod company_api;
pub mod employee_api;
pub mod error;
pub mod upload_api;

// 重导出核心类型
pub use company_api::CompanyApi;
pub use employee_api::EmployeeApi;
pub use error::{ApiError, ApiResult};
pub use upload_api::{UploadApi, UploadResponse};
