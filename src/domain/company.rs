// ==========================================
// 员工花名册导入系统 - 公司领域模型
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Company - 公司主数据
// ==========================================
// 用途: 员工记录的父实体，按名称唯一
// 对齐: company 表
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub id: i64,              // 自增主键
    pub company_name: String, // 公司名称（唯一）
}
