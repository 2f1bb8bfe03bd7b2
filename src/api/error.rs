// ==========================================
// 员工花名册导入系统 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，转换下层错误为用户可读的错误消息，
//       并提供 HTTP 状态码映射
// ==========================================

use crate::importer::error::ImportError;
use crate::repository::error::RepositoryError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 输入错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("文件格式不支持: {0}（仅支持 .xlsx/.xls/.csv）")]
    UnsupportedFileFormat(String),

    #[error("资源未找到: {0}")]
    NotFound(String),

    #[error("业务规则违反: {0}")]
    BusinessRuleViolation(String),

    // ==========================================
    // 导入错误
    // ==========================================
    #[error("文件导入失败: {0}")]
    ImportFailed(#[from] ImportError),

    // ==========================================
    // 数据访问错误
    // ==========================================
    #[error("数据库错误: {0}")]
    DatabaseError(String),

    #[error("数据库连接失败: {0}")]
    DatabaseConnectionError(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ApiError {
    /// HTTP 状态码映射
    ///
    /// 导入失败按五类分类映射：空数据/缺列/公司写入失败/员工重复为 400，
    /// 其余（解析失败、查询失败、非唯一约束的写入失败）统一 500。
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::InvalidInput(_)
            | ApiError::UnsupportedFileFormat(_)
            | ApiError::BusinessRuleViolation(_) => 400,
            ApiError::NotFound(_) => 404,
            ApiError::ImportFailed(err) => match err {
                ImportError::EmptyInput
                | ImportError::MissingColumns { .. }
                | ImportError::CompanyInsertFailed { .. }
                | ImportError::DuplicateEmployeeRecords { .. } => 400,
                ImportError::Unexpected(_) => 500,
            },
            ApiError::DatabaseError(_)
            | ApiError::DatabaseConnectionError(_)
            | ApiError::Other(_) => 500,
        }
    }

    /// 稳定错误码（写入响应体，供前端分支判断）
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::InvalidInput(_) => "INVALID_INPUT",
            ApiError::UnsupportedFileFormat(_) => "UNSUPPORTED_FILE_FORMAT",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::BusinessRuleViolation(_) => "BUSINESS_RULE_VIOLATION",
            ApiError::ImportFailed(err) => match err {
                ImportError::EmptyInput => "EMPTY_INPUT",
                ImportError::MissingColumns { .. } => "MISSING_COLUMNS",
                ImportError::CompanyInsertFailed { .. } => "COMPANY_INSERT_FAILED",
                ImportError::DuplicateEmployeeRecords { .. } => "DUPLICATE_EMPLOYEE_RECORDS",
                ImportError::Unexpected(_) => "UNEXPECTED",
            },
            ApiError::DatabaseError(_) => "DATABASE_ERROR",
            ApiError::DatabaseConnectionError(_) => "DATABASE_CONNECTION_ERROR",
            ApiError::Other(_) => "INTERNAL_ERROR",
        }
    }
}

// ==========================================
// 从 RepositoryError 转换
// 目的: 将Repository层的技术错误转换为用户可读的业务错误
// ==========================================
impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { entity, id } => {
                ApiError::NotFound(format!("{}(id={})不存在", entity, id))
            }
            RepositoryError::LockError(msg) => {
                ApiError::DatabaseConnectionError(format!("数据库锁获取失败: {}", msg))
            }
            RepositoryError::DatabaseQueryError(msg) => ApiError::DatabaseError(msg),
            RepositoryError::UniqueConstraintViolation(msg) => {
                ApiError::BusinessRuleViolation(format!("唯一约束违反: {}", msg))
            }
            RepositoryError::ForeignKeyViolation(msg) => {
                ApiError::BusinessRuleViolation(format!("外键约束违反: {}", msg))
            }
            RepositoryError::Other(err) => ApiError::Other(err),
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
