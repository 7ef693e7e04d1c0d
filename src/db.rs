// ==========================================
// WoolTracer - SQLite 连接初始化
// ==========================================
// 目标:
// - 统一所有 Connection::open 的 PRAGMA 行为，避免"部分模块外键开启/部分不开启"
// - 统一 busy_timeout，减少偶发 busy 错误
// - 统一建表入口，测试与应用共用同一份 schema
// ==========================================

use rusqlite::Connection;
use std::time::Duration;

/// 默认 busy_timeout（毫秒）
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// 配置 SQLite 连接的统一 PRAGMA
///
/// 说明：
/// - foreign_keys 需要"每个连接"单独开启
/// - busy_timeout 需要"每个连接"单独配置
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

/// 初始化数据库 schema（幂等）
///
/// 表结构:
/// - farm: 牧场主数据
/// - wool_batch: 羊毛批次（current_status/current_location 为时间线尾部的反范式缓存）
/// - journey_step: 批次流转时间线（仅追加，seq_no 从 1 递增）
/// - processing_facility: 加工设施（利用率统一存原始 kg，百分比读取时派生）
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS farm (
            id                TEXT PRIMARY KEY,
            name              TEXT NOT NULL,
            location          TEXT NOT NULL,
            sheep_count       INTEGER NOT NULL DEFAULT 0,
            annual_production REAL NOT NULL DEFAULT 0,
            certifications    TEXT NOT NULL DEFAULT '[]',
            contact_person    TEXT NOT NULL,
            contact_email     TEXT NOT NULL,
            joined_date       TEXT NOT NULL,
            photo             TEXT NOT NULL,
            created_at        TEXT NOT NULL DEFAULT (datetime('now')),
            updated_at        TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS wool_batch (
            id               TEXT PRIMARY KEY,
            farm_id          TEXT NOT NULL REFERENCES farm(id),
            shear_date       TEXT NOT NULL,
            weight_kg        REAL NOT NULL,
            grade            TEXT NOT NULL,
            color            TEXT NOT NULL,
            quality_score    REAL NOT NULL,
            current_status   TEXT NOT NULL,
            current_location TEXT NOT NULL,
            created_at       TEXT NOT NULL DEFAULT (datetime('now')),
            updated_at       TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE INDEX IF NOT EXISTS idx_batch_farm ON wool_batch(farm_id);

        CREATE TABLE IF NOT EXISTS journey_step (
            batch_id   TEXT NOT NULL REFERENCES wool_batch(id),
            seq_no     INTEGER NOT NULL,
            status     TEXT NOT NULL,
            location   TEXT NOT NULL,
            step_ts    TEXT NOT NULL,
            handled_by TEXT NOT NULL,
            notes      TEXT,
            PRIMARY KEY (batch_id, seq_no)
        );

        CREATE TABLE IF NOT EXISTS processing_facility (
            id                     TEXT PRIMARY KEY,
            name                   TEXT NOT NULL,
            facility_type          TEXT NOT NULL,
            location               TEXT NOT NULL,
            capacity_kg            REAL NOT NULL,
            current_utilization_kg REAL NOT NULL DEFAULT 0
        );
        "#,
    )?;
    Ok(())
}
