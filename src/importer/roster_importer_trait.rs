// ==========================================
// 员工花名册导入系统 - 花名册导入 Trait
// ==========================================
// 职责: 定义花名册导入接口（不包含实现）
// ==========================================

use crate::domain::{ImportSummary, RawEmployeeRow};
use crate::importer::error::ImportResult;
use crate::importer::file_parser::{FileFormat, RawTable};
use crate::repository::RosterImportRepository;
use async_trait::async_trait;
use std::collections::HashMap;

// ==========================================
// RosterImporter Trait
// ==========================================
// 用途: 花名册导入主接口
// 实现者: RosterImporterImpl
#[async_trait]
pub trait RosterImporter: Send + Sync {
    /// 导入一份花名册表格
    ///
    /// # 参数
    /// - data: 上传文件字节流
    /// - format: 文件格式（由上传层按扩展名识别）
    /// - store: 数据仓储（显式传入，导入器不持有数据库状态）
    ///
    /// # 返回
    /// - Ok(ImportSummary): 导入汇总
    /// - Err(ImportError): 五类失败之一
    ///
    /// # 导入流程
    /// 1. 文件解析（CSV / Excel）
    /// 2. 空数据检查
    /// 3. 必需列校验
    /// 4. 字段映射与单元格归一化
    /// 5. 提取公司名（去重，保持首见顺序）
    /// 6. 查询已有公司
    /// 7. 批量插入缺失公司（独立事务提交）
    /// 8. 回读公司名 → id 映射
    /// 9. 构造员工记录（公司无法解析的行静默跳过）
    /// 10. 批量插入员工（独立事务提交）
    /// 11. 生成汇总
    ///
    /// # 提交语义
    /// 公司阶段与员工阶段各自提交。员工阶段失败不回滚已提交的公司，
    /// 重复上传同一文件时新建公司可被复用。
    async fn reconcile(
        &self,
        data: &[u8],
        format: FileFormat,
        store: &dyn RosterImportRepository,
    ) -> ImportResult<ImportSummary>;
}

// ==========================================
// FileParser Trait
// ==========================================
// 用途: 文件解析接口（阶段 0）
// 实现者: CsvParser, ExcelParser
pub trait FileParser: Send + Sync {
    /// 解析字节流为表格数据
    ///
    /// # 参数
    /// - data: 文件字节流
    ///
    /// # 返回
    /// - Ok(RawTable): 表头 + 行记录
    /// - Err: 解析错误（归入 Unexpected）
    fn parse_bytes(&self, data: &[u8]) -> ImportResult<RawTable>;
}

// ==========================================
// FieldMapper Trait
// ==========================================
// 用途: 字段映射接口（阶段 1）
// 实现者: FieldMapperImpl
pub trait FieldMapper: Send + Sync {
    /// 将原始行记录映射为 RawEmployeeRow
    ///
    /// # 参数
    /// - row: 原始行记录（HashMap<列名, 值>）
    /// - row_number: 数据行号（1 起）
    ///
    /// # 返回
    /// - RawEmployeeRow: 映射后的中间结构体（映射不会失败）
    fn map_to_raw_row(&self, row: &HashMap<String, String>, row_number: usize) -> RawEmployeeRow;
}

// ==========================================
// DataCleaner Trait
// ==========================================
// 用途: 数据清洗接口（阶段 2）
// 实现者: DataCleanerImpl
pub trait DataCleaner: Send + Sync {
    /// 标准化 NULL 值（空字符串/空白 → None）
    ///
    /// # 参数
    /// - value: 原始值
    ///
    /// # 返回
    /// - Some(String): 非空值（已 TRIM）
    /// - None: 空值
    fn normalize_null(&self, value: Option<String>) -> Option<String>;

    /// 判断是否为 NA 记号（"N/A"、"NaN" 等）
    fn is_na_token(&self, value: &str) -> bool;

    /// 单元格归一化（TRIM + 空值/NA 记号 → None）
    ///
    /// # 参数
    /// - value: 原始单元格文本
    ///
    /// # 返回
    /// - Some(String): 有效值
    /// - None: 空白或 NA 记号
    fn normalize_cell(&self, value: Option<String>) -> Option<String>;
}
