// ==========================================
// 员工花名册导入系统 - 花名册导入器实现
// ==========================================
// 职责: 整合导入流程，从上传字节流到数据库
// 流程: 解析 → 校验 → 映射 → 公司对账 → 员工落库
// ==========================================

use crate::domain::{Employee, ImportSummary, RawEmployeeRow};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::{FileFormat, UniversalFileParser};
use crate::importer::roster_importer_trait::{DataCleaner, FieldMapper, RosterImporter};
use crate::importer::schema;
use crate::repository::{RepositoryError, RosterImportRepository};
use chrono::Utc;
use std::collections::{HashMap, HashSet};
use std::time::Instant;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

// ==========================================
// RosterImporterImpl - 花名册导入器实现
// ==========================================
pub struct RosterImporterImpl {
    // 导入组件
    file_parser: UniversalFileParser,
    field_mapper: Box<dyn FieldMapper>,
    data_cleaner: Box<dyn DataCleaner>,
}

impl RosterImporterImpl {
    /// 创建新的 RosterImporter 实例
    ///
    /// # 参数
    /// - file_parser: 文件解析器（按格式分发）
    /// - field_mapper: 字段映射器
    /// - data_cleaner: 数据清洗器
    pub fn new(
        file_parser: UniversalFileParser,
        field_mapper: Box<dyn FieldMapper>,
        data_cleaner: Box<dyn DataCleaner>,
    ) -> Self {
        Self {
            file_parser,
            field_mapper,
            data_cleaner,
        }
    }

    /// 对映射结果做单元格归一化（NA 记号 → None）
    fn clean_row(&self, mut row: RawEmployeeRow) -> RawEmployeeRow {
        row.company_name = self.data_cleaner.normalize_cell(row.company_name);
        row.employee_id = self.data_cleaner.normalize_cell(row.employee_id);
        row.first_name = self.data_cleaner.normalize_cell(row.first_name);
        row.last_name = self.data_cleaner.normalize_cell(row.last_name);
        row.phone_number = self.data_cleaner.normalize_cell(row.phone_number);
        row.salary = self.data_cleaner.normalize_cell(row.salary);
        row.manager_id = self.data_cleaner.normalize_cell(row.manager_id);
        row.department_id = self.data_cleaner.normalize_cell(row.department_id);
        row
    }
}

#[async_trait::async_trait]
impl RosterImporter for RosterImporterImpl {
    /// 导入一份花名册表格
    ///
    /// # 参数
    /// - data: 上传文件字节流
    /// - format: 文件格式
    /// - store: 数据仓储
    ///
    /// # 返回
    /// - Ok(ImportSummary): 导入汇总
    /// - Err(ImportError): 五类失败之一
    #[instrument(skip(self, data, store), fields(batch_id))]
    async fn reconcile(
        &self,
        data: &[u8],
        format: FileFormat,
        store: &dyn RosterImportRepository,
    ) -> ImportResult<ImportSummary> {
        let start_time = Instant::now();
        let batch_id = Uuid::new_v4().to_string();

        info!(
            batch_id = %batch_id,
            format = ?format,
            bytes = data.len(),
            "开始导入花名册"
        );

        // === 步骤 1: 解析文件 ===
        debug!("步骤 1: 解析文件");
        let table = self.file_parser.parse(data, format).map_err(|e| {
            error!(error = %e, "文件解析失败");
            e
        })?;
        let total_rows = table.rows.len();
        info!(total_rows = total_rows, "文件解析完成");

        // === 步骤 2: 空数据检查 ===
        // 先于列校验：零行文件一律按空数据处理
        if table.rows.is_empty() {
            warn!("上传文件不包含任何数据行");
            return Err(ImportError::EmptyInput);
        }

        // === 步骤 3: 必需列校验 ===
        debug!("步骤 3: 必需列校验");
        let missing = schema::missing_columns(&table.headers);
        if !missing.is_empty() {
            warn!(missing = ?missing, "表头缺少必需列");
            return Err(ImportError::MissingColumns { columns: missing });
        }

        // === 步骤 4: 字段映射与归一化 ===
        debug!("步骤 4: 字段映射与归一化");
        let rows: Vec<RawEmployeeRow> = table
            .rows
            .iter()
            .enumerate()
            .map(|(idx, row)| self.clean_row(self.field_mapper.map_to_raw_row(row, idx + 1)))
            .collect();

        // === 步骤 5: 提取公司名（去重，保持首见顺序）===
        let mut seen = HashSet::new();
        let mut company_names: Vec<String> = Vec::new();
        for row in &rows {
            if let Some(name) = &row.company_name {
                if seen.insert(name.clone()) {
                    company_names.push(name.clone());
                }
            }
        }
        info!(companies = company_names.len(), "公司名提取完成");

        // === 步骤 6: 查询已有公司 ===
        debug!("步骤 6: 查询已有公司");
        let existing = store
            .find_companies_by_names(&company_names)
            .await
            .map_err(|e| {
                error!(error = %e, "公司查询失败");
                ImportError::Unexpected(e.into())
            })?;
        let existing_names: HashSet<String> =
            existing.iter().map(|c| c.company_name.clone()).collect();

        // === 步骤 7: 批量插入缺失公司 ===
        let new_names: Vec<String> = company_names
            .iter()
            .filter(|n| !existing_names.contains(*n))
            .cloned()
            .collect();

        let new_companies = if new_names.is_empty() {
            0
        } else {
            debug!(count = new_names.len(), "步骤 7: 批量插入缺失公司");
            match store.bulk_insert_companies(&new_names).await {
                Ok(n) => {
                    info!(count = n, "公司插入完成");
                    n
                }
                Err(e) => {
                    error!(error = %e, "公司插入失败");
                    return Err(ImportError::CompanyInsertFailed {
                        reason: e.to_string(),
                    });
                }
            }
        };

        // === 步骤 8: 回读公司映射 ===
        debug!("步骤 8: 回读公司映射");
        let companies = store
            .find_companies_by_names(&company_names)
            .await
            .map_err(|e| {
                error!(error = %e, "公司映射回读失败");
                ImportError::Unexpected(e.into())
            })?;
        let company_map: HashMap<String, i64> = companies
            .into_iter()
            .map(|c| (c.company_name, c.id))
            .collect();

        // === 步骤 9: 构造员工记录 ===
        debug!("步骤 9: 构造员工记录");
        let mut employees = Vec::new();
        let mut skipped_rows = 0usize;
        for row in rows {
            let company_id = row
                .company_name
                .as_ref()
                .and_then(|name| company_map.get(name).copied());

            let company_id = match company_id {
                Some(id) => id,
                None => {
                    // 公司无法解析的行静默跳过，不计入失败
                    debug!(row_number = row.row_number, "公司无法解析，跳过该行");
                    skipped_rows += 1;
                    continue;
                }
            };

            employees.push(Employee {
                employee_id: row.employee_id,
                first_name: row.first_name,
                last_name: row.last_name,
                phone_number: row.phone_number,
                salary: row.salary,
                manager_id: row.manager_id,
                department_id: row.department_id,
                company_id,
            });
        }
        info!(
            employees = employees.len(),
            skipped = skipped_rows,
            "员工记录构造完成"
        );

        // === 步骤 10: 批量插入员工 ===
        // 即使构造结果为空也执行（保持"成功导入 0 条"语义）
        debug!("步骤 10: 批量插入员工");
        let imported_count = match store.bulk_insert_employees(&employees).await {
            Ok(n) => {
                info!(count = n, "员工插入完成");
                n
            }
            Err(RepositoryError::UniqueConstraintViolation(msg)) => {
                warn!(error = %msg, "员工记录重复，员工事务整批回滚");
                return Err(ImportError::DuplicateEmployeeRecords { reason: msg });
            }
            Err(e) => {
                error!(error = %e, "员工插入失败");
                return Err(ImportError::Unexpected(e.into()));
            }
        };

        let elapsed = start_time.elapsed();

        // === 步骤 11: 生成汇总 ===
        let summary = ImportSummary {
            batch_id: batch_id.clone(),
            total_rows,
            imported_count,
            skipped_rows,
            new_companies,
            imported_at: Utc::now(),
            elapsed_ms: elapsed.as_millis() as i64,
        };

        info!(
            batch_id = %batch_id,
            total = total_rows,
            imported = imported_count,
            skipped = skipped_rows,
            new_companies = new_companies,
            elapsed_ms = summary.elapsed_ms,
            "花名册导入完成"
        );

        Ok(summary)
    }
}
