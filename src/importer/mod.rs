// ==========================================
// 员工花名册导入系统 - 导入层
// ==========================================
// 职责: 解析上传表格,对账公司,批量写入员工
// 支持: Excel (.xlsx/.xls), CSV (.csv)
// ==========================================

// 模块声明
pub mod data_cleaner;
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod roster_importer_impl;
pub mod roster_importer_trait;
pub mod schema;

// 重导出核心类型
pub use data_cleaner::DataCleaner as DataCleanerImpl;
pub use error::{ImportError, ImportResult};
pub use field_mapper::FieldMapper as FieldMapperImpl;
pub use file_parser::{CsvParser, ExcelParser, FileFormat, RawTable, UniversalFileParser};
pub use roster_importer_impl::RosterImporterImpl;
pub use schema::REQUIRED_COLUMNS;

// 重导出 Trait 接口
pub use roster_importer_trait::{DataCleaner, FieldMapper, FileParser, RosterImporter};
