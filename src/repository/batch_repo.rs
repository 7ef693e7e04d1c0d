// ==========================================
// WoolTracer - 羊毛批次数据仓储
// ==========================================
// 红线: Repository 不含业务逻辑
// 不变量维护: 时间线追加与 current_status/current_location 更新
//             在同一事务内完成（失败则整体不落库）
// 排序: 批次按 rowid（录入顺序），时间线按 seq_no（追加顺序）
// ==========================================

use crate::domain::batch::{JourneyStep, WoolBatch};
use crate::domain::types::{BatchStatus, WoolGrade};
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, Row, Transaction};
use std::sync::{Arc, Mutex};

/// 时间戳落库格式（与前端展示的 ISO 格式一致，截断亚秒）
const STEP_TS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

// ==========================================
// WoolBatchRepository - 批次仓储
// ==========================================
/// 批次仓储
/// 职责: 管理 wool_batch / journey_step 表的数据访问
pub struct WoolBatchRepository {
    conn: Arc<Mutex<Connection>>,
}

const BATCH_COLUMNS: &str = "id, farm_id, shear_date, weight_kg, grade, color, \
     quality_score, current_status, current_location";

impl WoolBatchRepository {
    /// 从共享连接创建仓储实例
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// 获取数据库连接
    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 创建批次（含初始时间线，单事务）
    ///
    /// 约束: batch.journey_history 非空，且尾部步骤与
    ///       current_status/current_location 一致（由引擎层保证）
    pub fn create(&self, batch: &WoolBatch) -> RepositoryResult<()> {
        let mut conn = self.get_conn()?;
        let tx = conn
            .transaction()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;

        tx.execute(
            r#"
            INSERT INTO wool_batch (
                id, farm_id, shear_date, weight_kg, grade, color,
                quality_score, current_status, current_location
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
            params![
                batch.id,
                batch.farm_id,
                batch.shear_date,
                batch.weight,
                batch.grade.to_db_str(),
                batch.color,
                batch.quality_score,
                batch.current_status.to_db_str(),
                batch.current_location,
            ],
        )?;

        for (idx, step) in batch.journey_history.iter().enumerate() {
            insert_step(&tx, &batch.id, (idx + 1) as i64, step)?;
        }

        tx.commit()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;
        Ok(())
    }

    /// 按主键查询（含完整时间线）
    pub fn find_by_id(&self, batch_id: &str) -> RepositoryResult<Option<WoolBatch>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM wool_batch WHERE id = ?1",
            BATCH_COLUMNS
        ))?;

        let result = stmt.query_row(params![batch_id], map_batch_row);
        let mut batch = match result {
            Ok(batch) => batch,
            Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        batch.journey_history = load_steps(&conn, batch_id)?;
        Ok(Some(batch))
    }

    /// 查询全部批次（录入顺序，含完整时间线）
    pub fn list_all(&self) -> RepositoryResult<Vec<WoolBatch>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM wool_batch ORDER BY rowid ASC",
            BATCH_COLUMNS
        ))?;

        let mut batches = stmt
            .query_map([], map_batch_row)?
            .collect::<Result<Vec<_>, _>>()?;

        for batch in &mut batches {
            batch.journey_history = load_steps(&conn, &batch.id)?;
        }
        Ok(batches)
    }

    /// 按牧场查询批次（录入顺序，不重排）
    pub fn find_by_farm(&self, farm_id: &str) -> RepositoryResult<Vec<WoolBatch>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM wool_batch WHERE farm_id = ?1 ORDER BY rowid ASC",
            BATCH_COLUMNS
        ))?;

        let mut batches = stmt
            .query_map(params![farm_id], map_batch_row)?
            .collect::<Result<Vec<_>, _>>()?;

        for batch in &mut batches {
            batch.journey_history = load_steps(&conn, &batch.id)?;
        }
        Ok(batches)
    }

    /// 最后录入的批次 ID（用于顺序 ID 派生）
    pub fn last_id(&self) -> RepositoryResult<Option<String>> {
        let conn = self.get_conn()?;
        let result = conn.query_row(
            "SELECT id FROM wool_batch ORDER BY rowid DESC LIMIT 1",
            [],
            |row| row.get::<_, String>(0),
        );
        match result {
            Ok(id) => Ok(Some(id)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// 主键是否已存在
    pub fn exists(&self, batch_id: &str) -> RepositoryResult<bool> {
        let conn = self.get_conn()?;
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM wool_batch WHERE id = ?1",
            params![batch_id],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// 追加时间线步骤并同步尾部缓存（单事务）
    ///
    /// 这是 current_status/current_location 的唯一变更路径。
    /// 批次不存在时返回 NotFound。
    pub fn append_step(&self, batch_id: &str, step: &JourneyStep) -> RepositoryResult<()> {
        let mut conn = self.get_conn()?;
        let tx = conn
            .transaction()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;

        let next_seq: Option<i64> = tx
            .query_row(
                r#"
                SELECT (SELECT COALESCE(MAX(seq_no), 0) FROM journey_step WHERE batch_id = ?1) + 1
                FROM wool_batch WHERE id = ?1
                "#,
                params![batch_id],
                |row| row.get(0),
            )
            .map(Some)
            .or_else(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => Ok(None),
                other => Err(other),
            })?;

        let next_seq = next_seq.ok_or_else(|| RepositoryError::NotFound {
            entity: "WoolBatch".to_string(),
            id: batch_id.to_string(),
        })?;

        insert_step(&tx, batch_id, next_seq, step)?;

        tx.execute(
            r#"
            UPDATE wool_batch
            SET current_status = ?2,
                current_location = ?3,
                updated_at = datetime('now')
            WHERE id = ?1
            "#,
            params![batch_id, step.status.to_db_str(), step.location],
        )?;

        tx.commit()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;
        Ok(())
    }
}

/// 在事务内插入单个时间线步骤
fn insert_step(
    tx: &Transaction<'_>,
    batch_id: &str,
    seq_no: i64,
    step: &JourneyStep,
) -> RepositoryResult<()> {
    tx.execute(
        r#"
        INSERT INTO journey_step (batch_id, seq_no, status, location, step_ts, handled_by, notes)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
        "#,
        params![
            batch_id,
            seq_no,
            step.status.to_db_str(),
            step.location,
            step.timestamp.format(STEP_TS_FORMAT).to_string(),
            step.handled_by,
            step.notes,
        ],
    )?;
    Ok(())
}

/// 加载批次的完整时间线（按追加顺序）
fn load_steps(conn: &Connection, batch_id: &str) -> RepositoryResult<Vec<JourneyStep>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT status, location, step_ts, handled_by, notes
        FROM journey_step
        WHERE batch_id = ?1
        ORDER BY seq_no ASC
        "#,
    )?;

    let steps = stmt
        .query_map(params![batch_id], |row| {
            Ok(JourneyStep {
                status: parse_batch_status(&row.get::<_, String>(0)?),
                location: row.get(1)?,
                timestamp: parse_step_ts(&row.get::<_, String>(2)?),
                handled_by: row.get(3)?,
                notes: row.get(4)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(steps)
}

/// 行映射: wool_batch 表 → WoolBatch（时间线另行加载）
fn map_batch_row(row: &Row<'_>) -> rusqlite::Result<WoolBatch> {
    Ok(WoolBatch {
        id: row.get(0)?,
        farm_id: row.get(1)?,
        shear_date: row.get(2)?,
        weight: row.get(3)?,
        grade: parse_wool_grade(&row.get::<_, String>(4)?),
        color: row.get(5)?,
        quality_score: row.get(6)?,
        current_status: parse_batch_status(&row.get::<_, String>(7)?),
        current_location: row.get(8)?,
        journey_history: Vec::new(),
    })
}

/// 解析批次状态（库内脏值回落到 Sheared 并告警）
fn parse_batch_status(s: &str) -> BatchStatus {
    BatchStatus::from_str(s).unwrap_or_else(|| {
        tracing::warn!("未知批次状态 '{}', 回落为 Sheared", s);
        BatchStatus::Sheared
    })
}

/// 解析羊毛等级（库内脏值回落到 Medium 并告警）
fn parse_wool_grade(s: &str) -> WoolGrade {
    WoolGrade::from_str(s).unwrap_or_else(|| {
        tracing::warn!("未知羊毛等级 '{}', 回落为 Medium", s);
        WoolGrade::Medium
    })
}

/// 解析时间戳（兼容含空格的历史格式）
fn parse_step_ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, STEP_TS_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S"))
        .unwrap_or_else(|_| {
            tracing::warn!("无法解析时间戳 '{}', 回落为 epoch", s);
            chrono::DateTime::from_timestamp(0, 0).unwrap().naive_utc()
        })
}
