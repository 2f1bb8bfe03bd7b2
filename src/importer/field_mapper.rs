// ==========================================
// 员工花名册导入系统 - 字段映射器实现
// ==========================================
// 职责: 原始行记录 → RawEmployeeRow
// 红线: 所有字段按不透明文本处理，映射不会失败
// ==========================================

use crate::domain::RawEmployeeRow;
use crate::importer::roster_importer_trait::FieldMapper as FieldMapperTrait;
use std::collections::HashMap;

pub struct FieldMapper;

impl FieldMapperTrait for FieldMapper {
    fn map_to_raw_row(&self, row: &HashMap<String, String>, row_number: usize) -> RawEmployeeRow {
        RawEmployeeRow {
            company_name: self.get_string(row, "COMPANY_NAME"),
            employee_id: self.get_string(row, "EMPLOYEE_ID"),
            first_name: self.get_string(row, "FIRST_NAME"),
            last_name: self.get_string(row, "LAST_NAME"),
            phone_number: self.get_string(row, "PHONE_NUMBER"),
            salary: self.get_string(row, "SALARY"),
            manager_id: self.get_string(row, "MANAGER_ID"),
            department_id: self.get_string(row, "DEPARTMENT_ID"),
            row_number,
        }
    }
}

impl FieldMapper {
    /// 提取字符串字段（TRIM 后为空 → None）
    fn get_string(&self, row: &HashMap<String, String>, key: &str) -> Option<String> {
        row.get(key).and_then(|v| {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> HashMap<String, String> {
        let mut row = HashMap::new();
        row.insert("COMPANY_NAME".to_string(), " Acme Corp ".to_string());
        row.insert("EMPLOYEE_ID".to_string(), "E001".to_string());
        row.insert("FIRST_NAME".to_string(), "John".to_string());
        row.insert("LAST_NAME".to_string(), "Doe".to_string());
        row.insert("PHONE_NUMBER".to_string(), "1234567890".to_string());
        row.insert("SALARY".to_string(), "50000".to_string());
        row.insert("MANAGER_ID".to_string(), "".to_string());
        row.insert("DEPARTMENT_ID".to_string(), "D01".to_string());
        row
    }

    #[test]
    fn test_map_basic_row() {
        let mapper = FieldMapper;
        let raw = mapper.map_to_raw_row(&sample_row(), 1);

        assert_eq!(raw.company_name, Some("Acme Corp".to_string()));
        assert_eq!(raw.employee_id, Some("E001".to_string()));
        assert_eq!(raw.salary, Some("50000".to_string()));
        assert_eq!(raw.manager_id, None);
        assert_eq!(raw.row_number, 1);
    }

    #[test]
    fn test_map_missing_key_becomes_none() {
        let mapper = FieldMapper;
        let mut row = sample_row();
        row.remove("PHONE_NUMBER");

        let raw = mapper.map_to_raw_row(&row, 3);

        assert_eq!(raw.phone_number, None);
        assert_eq!(raw.row_number, 3);
    }

    #[test]
    fn test_identifier_fields_stay_opaque() {
        // 前导零、非数字文本原样保留
        let mapper = FieldMapper;
        let mut row = sample_row();
        row.insert("EMPLOYEE_ID".to_string(), "007".to_string());
        row.insert("SALARY".to_string(), "negotiable".to_string());

        let raw = mapper.map_to_raw_row(&row, 1);

        assert_eq!(raw.employee_id, Some("007".to_string()));
        assert_eq!(raw.salary, Some("negotiable".to_string()));
    }
}
