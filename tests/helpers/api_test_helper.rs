// ==========================================
// API集成测试辅助工具
// ==========================================
// 职责: 提供API层集成测试的通用辅助函数
// ==========================================

#[path = "../test_helpers.rs"]
mod test_helpers;

use std::sync::{Arc, Mutex};
use tempfile::NamedTempFile;

use rusqlite::Connection;
use wool_tracer::api::{BatchApi, DashboardApi, FacilityApi, FarmApi};
use wool_tracer::repository::{
    batch_repo::WoolBatchRepository, facility_repo::ProcessingFacilityRepository,
    farm_repo::FarmRepository,
};

// ==========================================
// API测试环境
// ==========================================

/// API测试环境
///
/// 包含所有API实例和必要的依赖
pub struct ApiTestEnv {
    pub db_path: String,
    pub farm_api: Arc<FarmApi>,
    pub batch_api: Arc<BatchApi>,
    pub facility_api: Arc<FacilityApi>,
    pub dashboard_api: Arc<DashboardApi>,

    // Repository层（用于测试数据准备）
    pub farm_repo: Arc<FarmRepository>,
    pub batch_repo: Arc<WoolBatchRepository>,
    pub facility_repo: Arc<ProcessingFacilityRepository>,

    // 临时文件（确保生命周期）
    _temp_file: NamedTempFile,
}

impl ApiTestEnv {
    /// 创建新的API测试环境
    ///
    /// # 说明
    /// - 使用临时数据库文件
    /// - 初始化所有Repository和API
    /// - 自动初始化 schema
    pub fn new() -> Result<Self, String> {
        // 初始化测试日志（重复调用安全）
        wool_tracer::logging::init_test();

        // 创建临时数据库文件并初始化schema
        let (temp_file, db_path) =
            test_helpers::create_test_db().map_err(|e| format!("创建测试数据库失败: {}", e))?;

        // 初始化数据库连接（共享连接）
        let conn = Connection::open(&db_path).map_err(|e| format!("无法打开数据库: {}", e))?;
        wool_tracer::db::configure_sqlite_connection(&conn)
            .map_err(|e| format!("无法配置连接: {}", e))?;
        let conn = Arc::new(Mutex::new(conn));

        // ==========================================
        // 初始化Repository层
        // ==========================================
        let farm_repo = Arc::new(FarmRepository::from_connection(conn.clone()));
        let batch_repo = Arc::new(WoolBatchRepository::from_connection(conn.clone()));
        let facility_repo = Arc::new(ProcessingFacilityRepository::from_connection(conn.clone()));

        // ==========================================
        // 初始化API层
        // ==========================================
        let farm_api = Arc::new(FarmApi::new(farm_repo.clone()));
        let batch_api = Arc::new(BatchApi::new(batch_repo.clone(), farm_repo.clone()));
        let facility_api = Arc::new(FacilityApi::new(facility_repo.clone()));
        let dashboard_api = Arc::new(DashboardApi::new(
            batch_repo.clone(),
            farm_repo.clone(),
            facility_repo.clone(),
        ));

        Ok(Self {
            db_path,
            farm_api,
            batch_api,
            facility_api,
            dashboard_api,
            farm_repo,
            batch_repo,
            facility_repo,
            _temp_file: temp_file,
        })
    }
}
