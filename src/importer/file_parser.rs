// ==========================================
// 员工花名册导入系统 - 文件解析器实现
// ==========================================
// 支持: Excel (.xlsx/.xls) / CSV (.csv)
// 输入: 上传的字节流（不落盘）
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use crate::importer::roster_importer_trait::FileParser;
use calamine::{open_workbook_auto_from_rs, Reader};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::io::Cursor;
use std::path::Path;

// ==========================================
// FileFormat - 上传文件格式
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Csv,
    Excel,
}

impl FileFormat {
    /// 按文件名扩展名识别格式（不区分大小写）
    ///
    /// # 返回
    /// - Some(FileFormat): .csv / .xlsx / .xls
    /// - None: 其他扩展名，由调用方拒绝
    pub fn from_file_name(file_name: &str) -> Option<FileFormat> {
        let ext = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => Some(FileFormat::Csv),
            "xlsx" | "xls" => Some(FileFormat::Excel),
            _ => None,
        }
    }
}

// ==========================================
// RawTable - 解析结果
// ==========================================
/// 解析后的表格数据
///
/// 空文件（无表头、无数据行）解析为空 RawTable 而非错误，
/// 空与否的业务判定由导入编排层负责。
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub headers: Vec<String>,               // 表头（首行，已去空白）
    pub rows: Vec<HashMap<String, String>>, // 数据行（列名 → 单元格文本）
}

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser;

impl FileParser for CsvParser {
    fn parse_bytes(&self, data: &[u8]) -> ImportResult<RawTable> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(data);

        // 读取表头
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        // 读取所有行
        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            let mut row_map = HashMap::new();

            for (col_idx, value) in record.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    row_map.insert(header.clone(), value.trim().to_string());
                }
            }

            // 跳过完全空白的行
            if row_map.values().all(|v| v.is_empty()) {
                continue;
            }

            rows.push(row_map);
        }

        Ok(RawTable { headers, rows })
    }
}

// ==========================================
// Excel Parser 实现
// ==========================================
pub struct ExcelParser;

impl FileParser for ExcelParser {
    fn parse_bytes(&self, data: &[u8]) -> ImportResult<RawTable> {
        // open_workbook_auto_* 按内容探测 .xlsx/.xls
        let cursor = Cursor::new(data);
        let mut workbook = open_workbook_auto_from_rs(cursor)
            .map_err(|e| ImportError::Unexpected(anyhow::anyhow!("Excel 解析失败: {}", e)))?;

        // 读取第一个 sheet
        let sheet_names = workbook.sheet_names();
        if sheet_names.is_empty() {
            return Err(ImportError::Unexpected(anyhow::anyhow!(
                "Excel 文件无工作表"
            )));
        }

        let sheet_name = sheet_names[0].clone();
        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| ImportError::Unexpected(anyhow::anyhow!("Excel 解析失败: {}", e)))?;

        // 提取表头（第一行）；无首行视为空表
        let mut range_rows = range.rows();
        let header_row = match range_rows.next() {
            Some(row) => row,
            None => return Ok(RawTable::default()),
        };

        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect();

        // 读取数据行
        let mut rows = Vec::new();
        for data_row in range_rows {
            let mut row_map = HashMap::new();

            for (col_idx, cell) in data_row.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    let value = cell.to_string().trim().to_string();
                    row_map.insert(header.clone(), value);
                }
            }

            // 跳过完全空白的行
            if row_map.values().all(|v| v.is_empty()) {
                continue;
            }

            rows.push(row_map);
        }

        Ok(RawTable { headers, rows })
    }
}

// ==========================================
// 通用文件解析器（按格式分发）
// ==========================================
pub struct UniversalFileParser;

impl UniversalFileParser {
    pub fn parse(&self, data: &[u8], format: FileFormat) -> ImportResult<RawTable> {
        match format {
            FileFormat::Csv => CsvParser.parse_bytes(data),
            FileFormat::Excel => ExcelParser.parse_bytes(data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_format_from_file_name() {
        assert_eq!(
            FileFormat::from_file_name("roster.csv"),
            Some(FileFormat::Csv)
        );
        assert_eq!(
            FileFormat::from_file_name("roster.XLSX"),
            Some(FileFormat::Excel)
        );
        assert_eq!(
            FileFormat::from_file_name("roster.xls"),
            Some(FileFormat::Excel)
        );
        assert_eq!(FileFormat::from_file_name("roster.txt"), None);
        assert_eq!(FileFormat::from_file_name("roster"), None);
    }

    #[test]
    fn test_csv_parser_valid_bytes() {
        let data = b"COMPANY_NAME,EMPLOYEE_ID\nAcme Corp,E001\nGlobex,E002\n";

        let table = CsvParser.parse_bytes(data).unwrap();

        assert_eq!(table.headers, vec!["COMPANY_NAME", "EMPLOYEE_ID"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(
            table.rows[0].get("COMPANY_NAME"),
            Some(&"Acme Corp".to_string())
        );
        assert_eq!(table.rows[1].get("EMPLOYEE_ID"), Some(&"E002".to_string()));
    }

    #[test]
    fn test_csv_parser_skip_empty_rows() {
        let data = b"COMPANY_NAME,EMPLOYEE_ID\nAcme Corp,E001\n,\nGlobex,E002\n";

        let table = CsvParser.parse_bytes(data).unwrap();

        // 应跳过空行
        assert_eq!(table.rows.len(), 2);
    }

    #[test]
    fn test_csv_parser_header_only() {
        let data = b"COMPANY_NAME,EMPLOYEE_ID\n";

        let table = CsvParser.parse_bytes(data).unwrap();

        assert_eq!(table.headers.len(), 2);
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_csv_parser_short_row_keeps_present_cells() {
        // flexible 模式下短行只映射存在的列
        let data = b"COMPANY_NAME,EMPLOYEE_ID,FIRST_NAME\nAcme Corp,E001\n";

        let table = CsvParser.parse_bytes(data).unwrap();

        assert_eq!(table.rows.len(), 1);
        assert_eq!(
            table.rows[0].get("COMPANY_NAME"),
            Some(&"Acme Corp".to_string())
        );
        assert!(table.rows[0].get("FIRST_NAME").is_none());
    }

    #[test]
    fn test_excel_parser_rejects_garbage_bytes() {
        let result = ExcelParser.parse_bytes(b"not an excel file");

        assert!(matches!(result, Err(ImportError::Unexpected(_))));
    }
}
