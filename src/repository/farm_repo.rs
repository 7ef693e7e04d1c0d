// ==========================================
// WoolTracer - 牧场数据仓储
// ==========================================
// 红线: Repository 不含业务逻辑
// 排序: 列表查询按 rowid（录入顺序），不重排
// ==========================================

use crate::domain::farm::Farm;
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};
use std::sync::{Arc, Mutex};

// ==========================================
// FarmRepository - 牧场仓储
// ==========================================
/// 牧场仓储
/// 职责: 管理 farm 表的数据访问
pub struct FarmRepository {
    conn: Arc<Mutex<Connection>>,
}

const FARM_COLUMNS: &str = "id, name, location, sheep_count, annual_production, \
     certifications, contact_person, contact_email, joined_date, photo";

impl FarmRepository {
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

    /// 创建牧场
    pub fn create(&self, farm: &Farm) -> RepositoryResult<()> {
        let certifications = serde_json::to_string(&farm.certifications)
            .map_err(|e| RepositoryError::InternalError(format!("认证列表序列化失败: {}", e)))?;
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO farm (
                id, name, location, sheep_count, annual_production,
                certifications, contact_person, contact_email, joined_date, photo
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            "#,
            params![
                farm.id,
                farm.name,
                farm.location,
                farm.sheep_count,
                farm.annual_production,
                certifications,
                farm.contact_person,
                farm.contact_email,
                farm.joined_date.to_string(),
                farm.photo,
            ],
        )?;
        Ok(())
    }

    /// 按主键查询
    pub fn find_by_id(&self, farm_id: &str) -> RepositoryResult<Option<Farm>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM farm WHERE id = ?1",
            FARM_COLUMNS
        ))?;

        let result = stmt.query_row(params![farm_id], map_farm_row);
        match result {
            Ok(farm) => Ok(Some(farm)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// 查询全部牧场（录入顺序）
    pub fn list_all(&self) -> RepositoryResult<Vec<Farm>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM farm ORDER BY rowid ASC",
            FARM_COLUMNS
        ))?;

        let farms = stmt
            .query_map([], map_farm_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(farms)
    }

    /// 最后录入的牧场 ID（用于顺序 ID 派生）
    pub fn last_id(&self) -> RepositoryResult<Option<String>> {
        let conn = self.get_conn()?;
        let result = conn.query_row(
            "SELECT id FROM farm ORDER BY rowid DESC LIMIT 1",
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
    pub fn exists(&self, farm_id: &str) -> RepositoryResult<bool> {
        let conn = self.get_conn()?;
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM farm WHERE id = ?1",
            params![farm_id],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }
}

/// 行映射: farm 表 → Farm
fn map_farm_row(row: &Row<'_>) -> rusqlite::Result<Farm> {
    let certifications: Vec<String> =
        serde_json::from_str(&row.get::<_, String>(5)?).unwrap_or_default();
    Ok(Farm {
        id: row.get(0)?,
        name: row.get(1)?,
        location: row.get(2)?,
        sheep_count: row.get(3)?,
        annual_production: row.get(4)?,
        certifications,
        contact_person: row.get(6)?,
        contact_email: row.get(7)?,
        joined_date: NaiveDate::parse_from_str(&row.get::<_, String>(8)?, "%Y-%m-%d")
            .unwrap_or_else(|_| NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()),
        photo: row.get(9)?,
    })
}
