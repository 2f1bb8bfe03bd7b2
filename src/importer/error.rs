// ==========================================
// 员工花名册导入系统 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================
// 约束: 失败分类固定为五类，调用方按类映射 HTTP 状态码；
//       解析失败、查询失败、非唯一约束的写入失败一律归入 Unexpected
// ==========================================

use thiserror::Error;

/// 导入失败分类（稳定五类）
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 输入校验错误（400 类）=====
    #[error("导入数据为空: 文件未包含任何数据行")]
    EmptyInput,

    #[error("缺少必需列: {}", .columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    // ===== 公司阶段错误（400 类）=====
    #[error("公司数据写入失败: {reason}")]
    CompanyInsertFailed { reason: String },

    // ===== 员工阶段错误（400 类）=====
    #[error("员工记录重复: {reason}")]
    DuplicateEmployeeRecords { reason: String },

    // ===== 兜底错误（500 类）=====
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::Unexpected(anyhow::anyhow!("文件读取失败: {}", err))
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::Unexpected(anyhow::anyhow!("CSV 解析失败: {}", err))
    }
}

// 实现 From<calamine::Error>
impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::Unexpected(anyhow::anyhow!("Excel 解析失败: {}", err))
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
