// ==========================================
// 员工花名册导入系统 - 数据仓储层
// ==========================================
// 红线: Repository 不含业务逻辑
// ==========================================
// 职责: 提供数据访问接口,屏蔽数据库细节
// 约束: 所有查询使用参数化,防止 SQL 注入
// ==========================================

pub mod company_repo;
pub mod employee_repo;
pub mod error;
pub mod roster_import_repo;
pub mod roster_import_repo_impl;

// 重导出核心仓储
pub use company_repo::CompanyRepository;
pub use employee_repo::EmployeeRepository;
pub use error::{RepositoryError, RepositoryResult};
pub use roster_import_repo::RosterImportRepository;
pub use roster_import_repo_impl::RosterImportRepositoryImpl;
