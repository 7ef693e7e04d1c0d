// ==========================================
// WoolTracer - 批次 API
// ==========================================
// 职责: 批次查询/筛选、录入工作流、流转状态更新
// 依据: REST 契约 GET /wool-batches, POST /wool-batches,
//       PATCH /wool-batches/{id}/status
// ==========================================

use std::sync::Arc;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::api::error::{ApiError, ApiResult};
use crate::domain::batch::WoolBatch;
use crate::domain::types::BatchStatus;
use crate::engine::intake::{self, NewBatchInput};
use crate::engine::{query, timeline};
use crate::repository::batch_repo::WoolBatchRepository;
use crate::repository::farm_repo::FarmRepository;

// ==========================================
// StatusUpdateRequest - 状态更新请求
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdateRequest {
    pub status: BatchStatus,
    pub location: String,
    pub handled_by: String,
    #[serde(default)]
    pub notes: Option<String>,
}

// ==========================================
// BatchApi - 批次 API
// ==========================================

/// 批次 API
///
/// 职责：
/// 1. 批次查询（全集/单条/按牧场/文本筛选）
/// 2. 批次录入（校验 → 牧场引用检查 → ID 派生 → 附带初始步骤入库）
/// 3. 流转状态更新（时间线追加，唯一的尾部缓存变更路径）
pub struct BatchApi {
    batch_repo: Arc<WoolBatchRepository>,
    farm_repo: Arc<FarmRepository>,
}

impl BatchApi {
    /// 创建新的 BatchApi 实例
    pub fn new(batch_repo: Arc<WoolBatchRepository>, farm_repo: Arc<FarmRepository>) -> Self {
        Self {
            batch_repo,
            farm_repo,
        }
    }

    // ==========================================
    // 查询接口
    // ==========================================

    /// 查询全部批次（录入顺序，含完整时间线）
    pub fn list_batches(&self) -> ApiResult<Vec<WoolBatch>> {
        Ok(self.batch_repo.list_all()?)
    }

    /// 文本筛选批次（id/current_status/current_location；空词返回全集）
    pub fn search_batches(&self, term: &str) -> ApiResult<Vec<WoolBatch>> {
        let batches = self.batch_repo.list_all()?;
        Ok(query::filter_batches(&batches, term))
    }

    /// 按 ID 查询单个批次
    pub fn get_batch(&self, batch_id: &str) -> ApiResult<WoolBatch> {
        if batch_id.trim().is_empty() {
            return Err(ApiError::InvalidInput("批次 ID 不能为空".to_string()));
        }
        self.batch_repo
            .find_by_id(batch_id)?
            .ok_or_else(|| ApiError::NotFound(format!("WoolBatch(id={})不存在", batch_id)))
    }

    /// 查询牧场的全部批次（录入顺序，不重排）
    pub fn list_batches_by_farm(&self, farm_id: &str) -> ApiResult<Vec<WoolBatch>> {
        if farm_id.trim().is_empty() {
            return Err(ApiError::InvalidInput("牧场 ID 不能为空".to_string()));
        }
        Ok(self.batch_repo.find_by_farm(farm_id)?)
    }

    // ==========================================
    // 录入工作流
    // ==========================================

    /// 录入新批次
    ///
    /// # 流程
    /// 1. 字段级校验（重量 ≥ 1kg、质量分 1-100 等）
    /// 2. 牧场引用检查（farm_id 不存在报 NotFound）
    /// 3. ID 分配: 显式 ID 查重（冲突报 Conflict），缺省按顺序派生
    /// 4. 附带初始 Sheared 步骤入库（位置=牧场名，经手人=牧场联系人）
    pub fn create_batch(&self, input: NewBatchInput) -> ApiResult<WoolBatch> {
        intake::validate_batch(&input)?;

        let farm = self
            .farm_repo
            .find_by_id(input.farm_id.trim())?
            .ok_or_else(|| {
                ApiError::NotFound(format!("Farm(id={})不存在", input.farm_id.trim()))
            })?;

        let assigned_id = match input.id.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            Some(explicit) => {
                if self.batch_repo.exists(explicit)? {
                    return Err(ApiError::Conflict(format!("批次 ID '{}' 已存在", explicit)));
                }
                explicit.to_string()
            }
            None => {
                let last_id = self.batch_repo.last_id()?;
                intake::next_sequential_id("batch", last_id.as_deref())?
            }
        };

        let batch = intake::build_batch(&input, assigned_id, &farm);
        self.batch_repo.create(&batch)?;

        info!(batch_id = %batch.id, farm_id = %batch.farm_id, weight = batch.weight, "批次录入成功");
        Ok(batch)
    }

    // ==========================================
    // 流转状态更新
    // ==========================================

    /// 更新批次流转状态（时间线追加）
    ///
    /// # 规则
    /// - batch_id 必须存在（NotFound）
    /// - location/handled_by 非空（ValidationError）
    /// - 时间戳取追加时刻；追加与尾部缓存更新在同一事务
    /// - 不校验状态流转顺序（任意状态可衔接任意状态）
    ///
    /// # 返回
    /// - Ok(WoolBatch): 追加后的完整批次
    pub fn update_batch_status(
        &self,
        batch_id: &str,
        request: StatusUpdateRequest,
    ) -> ApiResult<WoolBatch> {
        if batch_id.trim().is_empty() {
            return Err(ApiError::InvalidInput("批次 ID 不能为空".to_string()));
        }

        let step = timeline::new_step(
            request.status,
            &request.location,
            &request.handled_by,
            request.notes,
        )?;

        self.batch_repo.append_step(batch_id, &step)?;

        let updated = self
            .batch_repo
            .find_by_id(batch_id)?
            .ok_or_else(|| ApiError::NotFound(format!("WoolBatch(id={})不存在", batch_id)))?;

        info!(
            batch_id = %batch_id,
            status = %step.status,
            location = %step.location,
            "批次状态更新成功"
        );
        Ok(updated)
    }
}
