// ==========================================
// 员工花名册导入系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体与导入中间结构
// 红线: 不含数据访问逻辑,不含导入编排逻辑
// ==========================================

pub mod company;
pub mod employee;
pub mod import_summary;

// 重导出核心类型
pub use company::Company;
pub use employee::{Employee, RawEmployeeRow};
pub use import_summary::ImportSummary;
