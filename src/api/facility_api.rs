// ==========================================
// WoolTracer - 加工设施 API
// ==========================================
// 职责: 设施查询
// 依据: REST 契约 GET /processing-facilities
// ==========================================

use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::domain::facility::ProcessingFacility;
use crate::repository::facility_repo::ProcessingFacilityRepository;

/// 设施 API
pub struct FacilityApi {
    facility_repo: Arc<ProcessingFacilityRepository>,
}

impl FacilityApi {
    /// 创建新的 FacilityApi 实例
    pub fn new(facility_repo: Arc<ProcessingFacilityRepository>) -> Self {
        Self { facility_repo }
    }

    /// 查询全部设施（录入顺序）
    pub fn list_facilities(&self) -> ApiResult<Vec<ProcessingFacility>> {
        Ok(self.facility_repo.list_all()?)
    }

    /// 按 ID 查询单个设施
    pub fn get_facility(&self, facility_id: &str) -> ApiResult<ProcessingFacility> {
        if facility_id.trim().is_empty() {
            return Err(ApiError::InvalidInput("设施 ID 不能为空".to_string()));
        }
        self.facility_repo
            .find_by_id(facility_id)?
            .ok_or_else(|| {
                ApiError::NotFound(format!("ProcessingFacility(id={})不存在", facility_id))
            })
    }
}
