// ==========================================
// 员工花名册导入系统 - 表头模板定义
// ==========================================
// 职责: 必需列清单 + 表头校验
// ==========================================

/// 必需列（顺序即缺列报告顺序）
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "COMPANY_NAME",
    "EMPLOYEE_ID",
    "FIRST_NAME",
    "LAST_NAME",
    "PHONE_NUMBER",
    "SALARY",
    "MANAGER_ID",
    "DEPARTMENT_ID",
];

/// 校验表头，返回缺失的必需列
///
/// # 参数
/// - headers: 解析出的表头
///
/// # 返回
/// - Vec<String>: 缺失的列名，按 REQUIRED_COLUMNS 顺序；全部齐备时为空
pub fn missing_columns(headers: &[String]) -> Vec<String> {
    REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == *col))
        .map(|col| col.to_string())
        .collect()
}
