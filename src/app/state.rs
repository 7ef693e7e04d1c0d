// ==========================================
// WoolTracer - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和 API 实例
// ==========================================

use rusqlite::Connection;
use std::sync::{Arc, Mutex};

use crate::api::{BatchApi, DashboardApi, FacilityApi, FarmApi};
use crate::db;
use crate::repository::{
    batch_repo::WoolBatchRepository, facility_repo::ProcessingFacilityRepository,
    farm_repo::FarmRepository,
};

/// 应用状态
///
/// 包含所有 API 实例和共享资源
/// 在 Tauri 应用中作为全局状态管理
pub struct AppState {
    /// 数据库路径
    pub db_path: String,

    /// 牧场 API
    pub farm_api: Arc<FarmApi>,

    /// 批次 API
    pub batch_api: Arc<BatchApi>,

    /// 设施 API
    pub facility_api: Arc<FacilityApi>,

    /// 看板 API
    pub dashboard_api: Arc<DashboardApi>,

    /// 仓储（供种子数据脚本与测试准备数据使用）
    pub farm_repo: Arc<FarmRepository>,
    pub batch_repo: Arc<WoolBatchRepository>,
    pub facility_repo: Arc<ProcessingFacilityRepository>,
}

impl AppState {
    /// 创建新的 AppState 实例
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    ///
    /// # 说明
    /// 该方法会：
    /// 1. 打开共享连接并应用统一 PRAGMA
    /// 2. 初始化 schema（幂等）
    /// 3. 初始化所有 Repository 与 API 实例
    pub fn new(db_path: String) -> Result<Self, String> {
        tracing::info!("初始化AppState，数据库路径: {}", db_path);

        // 创建数据库连接（共享连接）
        let conn = db::open_sqlite_connection(&db_path)
            .map_err(|e| format!("无法打开数据库: {}", e))?;
        db::init_schema(&conn).map_err(|e| format!("无法初始化schema: {}", e))?;
        let conn = Arc::new(Mutex::new(conn));

        // ==========================================
        // 初始化 Repository 层
        // ==========================================
        let farm_repo = Arc::new(FarmRepository::from_connection(conn.clone()));
        let batch_repo = Arc::new(WoolBatchRepository::from_connection(conn.clone()));
        let facility_repo = Arc::new(ProcessingFacilityRepository::from_connection(conn.clone()));

        // ==========================================
        // 初始化 API 层
        // ==========================================
        let farm_api = Arc::new(FarmApi::new(farm_repo.clone()));
        let batch_api = Arc::new(BatchApi::new(batch_repo.clone(), farm_repo.clone()));
        let facility_api = Arc::new(FacilityApi::new(facility_repo.clone()));
        let dashboard_api = Arc::new(DashboardApi::new(
            batch_repo.clone(),
            farm_repo.clone(),
            facility_repo.clone(),
        ));

        tracing::info!("AppState初始化成功");

        Ok(Self {
            db_path,
            farm_api,
            batch_api,
            facility_api,
            dashboard_api,
            farm_repo,
            batch_repo,
            facility_repo,
        })
    }

    /// 用于测试/脚本的内存数据库实例
    pub fn in_memory() -> Result<Self, String> {
        let conn = Connection::open_in_memory().map_err(|e| format!("无法打开内存数据库: {}", e))?;
        db::configure_sqlite_connection(&conn).map_err(|e| format!("无法配置连接: {}", e))?;
        db::init_schema(&conn).map_err(|e| format!("无法初始化schema: {}", e))?;
        let conn = Arc::new(Mutex::new(conn));

        let farm_repo = Arc::new(FarmRepository::from_connection(conn.clone()));
        let batch_repo = Arc::new(WoolBatchRepository::from_connection(conn.clone()));
        let facility_repo = Arc::new(ProcessingFacilityRepository::from_connection(conn.clone()));

        let farm_api = Arc::new(FarmApi::new(farm_repo.clone()));
        let batch_api = Arc::new(BatchApi::new(batch_repo.clone(), farm_repo.clone()));
        let facility_api = Arc::new(FacilityApi::new(facility_repo.clone()));
        let dashboard_api = Arc::new(DashboardApi::new(
            batch_repo.clone(),
            farm_repo.clone(),
            facility_repo.clone(),
        ));

        Ok(Self {
            db_path: ":memory:".to_string(),
            farm_api,
            batch_api,
            facility_api,
            dashboard_api,
            farm_repo,
            batch_repo,
            facility_repo,
        })
    }
}

// ==========================================
// 默认数据库路径辅助函数
// ==========================================

/// 获取默认数据库路径
///
/// # 返回
/// - 开发环境: 用户数据目录/wool-tracer-dev/wool_tracer.db
/// - 生产环境: 用户数据目录/wool-tracer/wool_tracer.db
pub fn get_default_db_path() -> String {
    use std::path::PathBuf;

    // 允许通过环境变量显式指定 DB 路径（便于调试/测试/CI）
    if let Ok(path) = std::env::var("WOOL_TRACER_DB_PATH") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    // 使用用户数据目录，避免开发期 DB 文件变化触发文件监控重启
    // 先给一个默认回退值，后续如果能拿到 data_dir 再覆盖
    let mut path = PathBuf::from("./wool_tracer.db");

    if let Some(data_dir) = dirs::data_dir() {
        // 开发环境使用独立目录，避免污染生产数据
        #[cfg(debug_assertions)]
        {
            path = data_dir.join("wool-tracer-dev");
        }

        #[cfg(not(debug_assertions))]
        {
            path = data_dir.join("wool-tracer");
        }

        // 确保目录存在
        std::fs::create_dir_all(&path).ok();
        path = path.join("wool_tracer.db");
    }

    path.to_string_lossy().to_string()
}
