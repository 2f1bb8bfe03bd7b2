// ==========================================
// 花名册上传API
// ==========================================
// 职责: 扩展名识别 → 导入管道 → 响应封装
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::ImportSummary;
use crate::importer::{
    DataCleanerImpl, FieldMapperImpl, FileFormat, RosterImporter, RosterImporterImpl,
    UniversalFileParser,
};
use crate::repository::RosterImportRepositoryImpl;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// 上传API响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    /// 是否成功
    pub success: bool,
    /// 结果说明
    pub message: String,
    /// 导入汇总（仅成功时返回）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<ImportSummary>,
}

/// 上传API
pub struct UploadApi {
    importer: RosterImporterImpl,
    store: Arc<RosterImportRepositoryImpl>,
}

impl UploadApi {
    /// 创建新的UploadApi实例
    pub fn new(store: Arc<RosterImportRepositoryImpl>) -> Self {
        Self {
            importer: Self::create_importer(),
            store,
        }
    }

    /// 组装导入器（解析 → 映射 → 清洗）
    fn create_importer() -> RosterImporterImpl {
        let file_parser = UniversalFileParser;
        let field_mapper = Box::new(FieldMapperImpl);
        let data_cleaner = Box::new(DataCleanerImpl);
        RosterImporterImpl::new(file_parser, field_mapper, data_cleaner)
    }

    /// 上传并导入一份花名册
    ///
    /// # 参数
    /// - file_name: 原始文件名（仅用于扩展名识别，不读取内容）
    /// - data: 文件字节流
    ///
    /// # 返回
    /// - Ok(UploadResponse): 导入成功
    /// - Err(ApiError): 格式不支持或五类导入失败之一
    pub async fn upload_roster(&self, file_name: &str, data: &[u8]) -> ApiResult<UploadResponse> {
        // 扩展名识别，不支持的格式直接拒绝
        let format = FileFormat::from_file_name(file_name)
            .ok_or_else(|| ApiError::UnsupportedFileFormat(file_name.to_string()))?;

        info!(file_name = %file_name, format = ?format, "接收花名册上传");

        let summary = self
            .importer
            .reconcile(data, format, self.store.as_ref())
            .await?;

        Ok(UploadResponse {
            success: true,
            message: format!("成功导入 {} 条员工记录", summary.imported_count),
            summary: Some(summary),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_response_serialization_omits_empty_summary() {
        let resp = UploadResponse {
            success: false,
            message: "导入失败".to_string(),
            summary: None,
        };

        let json = serde_json::to_string(&resp).unwrap();
        assert!(!json.contains("summary"), "空汇总不应出现在响应体中");
        assert!(json.contains("导入失败"));
    }
}
