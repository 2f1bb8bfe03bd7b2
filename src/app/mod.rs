// ==========================================
// 员工花名册导入系统 - 应用层
// ==========================================
// 职责: 应用状态管理与启动装配
// ==========================================

pub mod state;

// 重导出
pub use state::{AppState, get_default_db_path};
