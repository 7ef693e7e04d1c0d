// ==========================================
// WoolTracer - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、派生读模型
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod analytics;
pub mod batch;
pub mod facility;
pub mod farm;
pub mod types;

// 重导出核心类型
pub use analytics::{
    AnalyticsSummary, FacilityUtilization, FarmProduction, MonthlyProduction, RecentUpdate,
};
pub use batch::{JourneyStep, WoolBatch};
pub use facility::ProcessingFacility;
pub use farm::Farm;
pub use types::{BatchStatus, FacilityType, WoolGrade};
