// ==========================================
// 员工花名册导入系统 - SQLite 连接初始化
// ==========================================
// 目标:
// - 统一所有 Connection::open 的 PRAGMA 行为，避免“部分模块外键开启/部分不开启”
// - 统一 busy_timeout，减少并发写入时的偶发 busy 错误
// - 建表语句集中在此处，首次打开即可用
// ==========================================

use rusqlite::Connection;
use std::time::Duration;

/// 默认 busy_timeout（毫秒）
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// 建库 DDL
///
/// 说明：
/// - company.company_name 唯一约束承担“公司按名称去重”
/// - employee.employee_id 为 TEXT 主键：重复的非空 ID 触发唯一约束，
///   空 ID（导入时缺失）允许写入（SQLite 非 INTEGER 主键可为 NULL）
/// - employee.company_id 外键依赖 PRAGMA foreign_keys = ON 生效
const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS company (
    id            INTEGER PRIMARY KEY,
    company_name  TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS employee (
    employee_id    TEXT PRIMARY KEY,
    first_name     TEXT,
    last_name      TEXT,
    phone_number   TEXT,
    salary         TEXT,
    manager_id     TEXT,
    department_id  TEXT,
    company_id     INTEGER NOT NULL REFERENCES company(id)
);

CREATE INDEX IF NOT EXISTS idx_employee_first_name ON employee(first_name);
CREATE INDEX IF NOT EXISTS idx_employee_last_name  ON employee(last_name);
CREATE INDEX IF NOT EXISTS idx_employee_company_id ON employee(company_id);
"#;

/// 配置 SQLite 连接的统一 PRAGMA
///
/// 说明：
/// - foreign_keys 需要“每个连接”单独开启
/// - busy_timeout 需要“每个连接”单独配置
pub fn configure_sqlite_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// 打开 SQLite 连接并应用统一配置
pub fn open_sqlite_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_sqlite_connection(&conn)?;
    Ok(conn)
}

/// 确保业务表存在（幂等，可在每次启动时调用）
pub fn ensure_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA_SQL)
}
