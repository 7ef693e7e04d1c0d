// ==========================================
// WoolTracer - 加工设施数据仓储
// ==========================================
// 红线: Repository 不含业务逻辑
// 口径: current_utilization_kg 落库为原始 kg，百分比由领域层派生
// ==========================================

use crate::domain::facility::ProcessingFacility;
use crate::domain::types::FacilityType;
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, Row};
use std::sync::{Arc, Mutex};

// ==========================================
// ProcessingFacilityRepository - 设施仓储
// ==========================================
/// 设施仓储
/// 职责: 管理 processing_facility 表的数据访问
pub struct ProcessingFacilityRepository {
    conn: Arc<Mutex<Connection>>,
}

const FACILITY_COLUMNS: &str =
    "id, name, facility_type, location, capacity_kg, current_utilization_kg";

impl ProcessingFacilityRepository {
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

    /// 创建设施
    pub fn create(&self, facility: &ProcessingFacility) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO processing_facility (
                id, name, facility_type, location, capacity_kg, current_utilization_kg
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                facility.id,
                facility.name,
                facility.facility_type.to_db_str(),
                facility.location,
                facility.capacity_kg,
                facility.current_utilization_kg,
            ],
        )?;
        Ok(())
    }

    /// 按主键查询
    pub fn find_by_id(&self, facility_id: &str) -> RepositoryResult<Option<ProcessingFacility>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM processing_facility WHERE id = ?1",
            FACILITY_COLUMNS
        ))?;

        let result = stmt.query_row(params![facility_id], map_facility_row);
        match result {
            Ok(facility) => Ok(Some(facility)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// 查询全部设施（录入顺序）
    pub fn list_all(&self) -> RepositoryResult<Vec<ProcessingFacility>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM processing_facility ORDER BY rowid ASC",
            FACILITY_COLUMNS
        ))?;

        let facilities = stmt
            .query_map([], map_facility_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(facilities)
    }
}

/// 行映射: processing_facility 表 → ProcessingFacility
fn map_facility_row(row: &Row<'_>) -> rusqlite::Result<ProcessingFacility> {
    let type_str: String = row.get(2)?;
    Ok(ProcessingFacility {
        id: row.get(0)?,
        name: row.get(1)?,
        facility_type: FacilityType::from_str(&type_str).unwrap_or_else(|| {
            tracing::warn!("未知设施类型 '{}', 回落为 Processing", type_str);
            FacilityType::Processing
        }),
        location: row.get(3)?,
        capacity_kg: row.get(4)?,
        current_utilization_kg: row.get(5)?,
    })
}
