// ==========================================
// 员工花名册导入系统 - 花名册导入 Repository Trait
// ==========================================
// 职责: 定义导入相关数据访问接口（不包含业务逻辑）
// 红线: Repository 不含业务规则，只做数据 CRUD
// ==========================================

use crate::domain::{Company, Employee};
use crate::repository::error::RepositoryResult;
use async_trait::async_trait;

// ==========================================
// RosterImportRepository Trait
// ==========================================
// 用途: 花名册导入相关数据访问
// 实现者: RosterImportRepositoryImpl（使用 rusqlite）
#[async_trait]
pub trait RosterImportRepository: Send + Sync {
    // ===== 公司阶段 =====

    /// 按名称集合查询已存在的公司
    ///
    /// # 参数
    /// - names: 公司名称列表（空列表直接返回空结果，不访问数据库）
    ///
    /// # 返回
    /// - Ok(Vec<Company>): 命中的公司记录
    /// - Err: 数据库错误
    async fn find_companies_by_names(&self, names: &[String]) -> RepositoryResult<Vec<Company>>;

    /// 批量插入公司（事务化，逐条 INSERT 后统一提交）
    ///
    /// # 参数
    /// - names: 待新建的公司名称列表
    ///
    /// # 返回
    /// - Ok(usize): 成功插入的记录数
    /// - Err: 数据库错误（整个事务回滚）
    async fn bulk_insert_companies(&self, names: &[String]) -> RepositoryResult<usize>;

    // ===== 员工阶段 =====

    /// 批量插入员工（事务化，逐条 INSERT 后统一提交）
    ///
    /// # 参数
    /// - employees: 员工记录列表
    ///
    /// # 返回
    /// - Ok(usize): 成功插入的记录数
    /// - Err: 数据库错误（整个事务回滚；唯一约束冲突以
    ///   UniqueConstraintViolation 返回，供调用方分类）
    async fn bulk_insert_employees(&self, employees: &[Employee]) -> RepositoryResult<usize>;
}
