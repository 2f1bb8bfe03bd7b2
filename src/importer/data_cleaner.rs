// ==========================================
// 员工花名册导入系统 - 数据清洗器实现
// ==========================================
// 职责: TRIM / NULL 标准化 / NA 记号归一
// ==========================================

use crate::importer::roster_importer_trait::DataCleaner as DataCleanerTrait;

/// pandas 风格 NA 记号（精确匹配，区分大小写）
///
/// 表格工具导出的"空值"经常以这些字面量出现，
/// 归一化后与真正的空单元格同等对待。
const NA_TOKENS: [&str; 10] = [
    "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null", "#N/A", "<NA>",
];

pub struct DataCleaner;

impl DataCleanerTrait for DataCleaner {
    fn normalize_null(&self, value: Option<String>) -> Option<String> {
        value.and_then(|v| {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
    }

    fn is_na_token(&self, value: &str) -> bool {
        NA_TOKENS.contains(&value)
    }

    fn normalize_cell(&self, value: Option<String>) -> Option<String> {
        self.normalize_null(value).filter(|v| !self.is_na_token(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_null() {
        let cleaner = DataCleaner;
        assert_eq!(cleaner.normalize_null(Some("  ".to_string())), None);
        assert_eq!(cleaner.normalize_null(Some("".to_string())), None);
        assert_eq!(
            cleaner.normalize_null(Some("  value  ".to_string())),
            Some("value".to_string())
        );
        assert_eq!(cleaner.normalize_null(None), None);
    }

    #[test]
    fn test_na_tokens_recognized() {
        let cleaner = DataCleaner;
        assert!(cleaner.is_na_token("N/A"));
        assert!(cleaner.is_na_token("NaN"));
        assert!(cleaner.is_na_token("<NA>"));
        assert!(cleaner.is_na_token("null"));
        // 精确匹配，不做大小写折叠
        assert!(!cleaner.is_na_token("Null"));
        assert!(!cleaner.is_na_token("N/A Corp"));
    }

    #[test]
    fn test_normalize_cell() {
        let cleaner = DataCleaner;
        assert_eq!(cleaner.normalize_cell(Some(" N/A ".to_string())), None);
        assert_eq!(cleaner.normalize_cell(Some("nan".to_string())), None);
        assert_eq!(
            cleaner.normalize_cell(Some(" Acme Corp ".to_string())),
            Some("Acme Corp".to_string())
        );
        // "0" 是合法值，不是 NA
        assert_eq!(
            cleaner.normalize_cell(Some("0".to_string())),
            Some("0".to_string())
        );
        assert_eq!(cleaner.normalize_cell(None), None);
    }
}
