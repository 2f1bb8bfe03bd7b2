// ==========================================
// 员工花名册导入系统 - 导入汇总
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// ImportSummary - 导入结果汇总
// ==========================================
// 用途: 导入接口返回值（仅成功时产生）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportSummary {
    pub batch_id: String,           // 批次 ID（UUID）
    pub total_rows: usize,          // 解析出的数据行数
    pub imported_count: usize,      // 成功写入的员工数
    pub skipped_rows: usize,        // 因公司无法解析被跳过的行数
    pub new_companies: usize,       // 本次新建的公司数
    pub imported_at: DateTime<Utc>, // 导入时间
    pub elapsed_ms: i64,            // 导入耗时（毫秒）
}
