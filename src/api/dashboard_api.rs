// ==========================================
// WoolTracer - 看板 API
// ==========================================
// 职责: 聚合分析汇总与最近流转动态
// 依据: REST 契约 GET /analytics-summary
// 红线: 汇总为当前状态的纯派生，每次读取重算，无持久化缓存
// ==========================================

use std::sync::Arc;
use tracing::debug;

use crate::api::error::{ApiError, ApiResult};
use crate::domain::analytics::{AnalyticsSummary, RecentUpdate};
use crate::engine::analytics;
use crate::perf::PerfGuard;
use crate::repository::batch_repo::WoolBatchRepository;
use crate::repository::facility_repo::ProcessingFacilityRepository;
use crate::repository::farm_repo::FarmRepository;

/// 最近动态默认条数
pub const DEFAULT_RECENT_UPDATES_LIMIT: usize = 10;

// ==========================================
// DashboardApi - 看板 API
// ==========================================

/// 看板 API
///
/// 职责：
/// 1. 分析汇总（产量/质量分/分布/月度/设施利用率）
/// 2. 最近流转动态（跨批次时间线倒序）
pub struct DashboardApi {
    batch_repo: Arc<WoolBatchRepository>,
    farm_repo: Arc<FarmRepository>,
    facility_repo: Arc<ProcessingFacilityRepository>,
}

impl DashboardApi {
    /// 创建新的 DashboardApi 实例
    pub fn new(
        batch_repo: Arc<WoolBatchRepository>,
        farm_repo: Arc<FarmRepository>,
        facility_repo: Arc<ProcessingFacilityRepository>,
    ) -> Self {
        Self {
            batch_repo,
            farm_repo,
            facility_repo,
        }
    }

    /// 计算分析汇总（每次读取重算）
    pub fn get_analytics_summary(&self) -> ApiResult<AnalyticsSummary> {
        let _perf = PerfGuard::new("dashboard.get_analytics_summary");

        let batches = self.batch_repo.list_all()?;
        let farms = self.farm_repo.list_all()?;
        let facilities = self.facility_repo.list_all()?;

        debug!(
            batches = batches.len(),
            farms = farms.len(),
            facilities = facilities.len(),
            "重算分析汇总"
        );
        Ok(analytics::summarize(&batches, &farms, &facilities))
    }

    /// 最近流转动态（跨批次汇总，按时间戳倒序取前 limit 条）
    ///
    /// # 参数
    /// - limit: 条数上限；0 视为无效输入
    pub fn recent_updates(&self, limit: usize) -> ApiResult<Vec<RecentUpdate>> {
        if limit == 0 {
            return Err(ApiError::InvalidInput("条数上限必须大于 0".to_string()));
        }

        let batches = self.batch_repo.list_all()?;
        let mut updates: Vec<RecentUpdate> = batches
            .iter()
            .flat_map(|batch| {
                batch.journey_history.iter().map(|step| RecentUpdate {
                    batch_id: batch.id.clone(),
                    farm_id: batch.farm_id.clone(),
                    step: step.clone(),
                })
            })
            .collect();

        // 最近优先；时间戳相同则保持批次录入顺序（稳定排序）
        updates.sort_by(|a, b| b.step.timestamp.cmp(&a.step.timestamp));
        updates.truncate(limit);
        Ok(updates)
    }
}
