// ==========================================
// 员工花名册导入系统 - 员工领域模型
// ==========================================
// 红线: 标识字段一律按不透明文本处理，不做数值解析
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Employee - 员工记录
// ==========================================
// 用途: 导入层写入，查询层只读
// 对齐: employee 表
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    // ===== 主键 =====
    pub employee_id: Option<String>,   // 员工编号（外部提供，可缺失）

    // ===== 基础信息 =====
    pub first_name: Option<String>,    // 名
    pub last_name: Option<String>,     // 姓
    pub phone_number: Option<String>,  // 电话号码
    pub salary: Option<String>,        // 薪资（不透明文本）
    pub manager_id: Option<String>,    // 主管编号（不透明文本）
    pub department_id: Option<String>, // 部门编号（不透明文本）

    // ===== 关联 =====
    pub company_id: i64,               // 所属公司（FK → company.id）
}

// ==========================================
// RawEmployeeRow - 导入中间结构体
// ==========================================
// 用途: 导入管道中间产物（文件解析 → 字段映射 → 此结构）
// 生命周期: 仅在导入流程内
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawEmployeeRow {
    // 源字段（已归一化，空白/NA 记号 → None）
    pub company_name: Option<String>,
    pub employee_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub salary: Option<String>,
    pub manager_id: Option<String>,
    pub department_id: Option<String>,

    // 元信息
    pub row_number: usize, // 原始文件数据行号（1 起，用于跳行日志）
}
