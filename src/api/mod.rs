// ==========================================
// WoolTracer - API 层
// ==========================================
// 职责: 提供业务 API 接口,供 Tauri 命令调用
// 错误策略: 所有错误在触发动作的边界捕获并转为单条用户可见消息，
//           从不静默吞掉；失败的变更不落库（单事务）
// ==========================================

pub mod batch_api;
pub mod dashboard_api;
pub mod error;
pub mod facility_api;
pub mod farm_api;

// 重导出核心类型
pub use batch_api::{BatchApi, StatusUpdateRequest};
pub use dashboard_api::DashboardApi;
pub use error::{ApiError, ApiResult};
pub use facility_api::FacilityApi;
pub use farm_api::FarmApi;
