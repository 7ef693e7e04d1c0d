// ==========================================
// WoolTracer - 牧场 API
// ==========================================
// 职责: 牧场查询、筛选与录入工作流
// 依据: REST 契约 GET /farms, GET /farms/{id}, POST /farms
// ==========================================

use std::sync::Arc;
use tracing::{debug, info};

use crate::api::error::{ApiError, ApiResult};
use crate::domain::farm::Farm;
use crate::engine::intake::{self, NewFarmInput};
use crate::engine::query;
use crate::repository::farm_repo::FarmRepository;

// ==========================================
// FarmApi - 牧场 API
// ==========================================

/// 牧场 API
///
/// 职责：
/// 1. 牧场查询（全集/单条/文本筛选）
/// 2. 牧场录入（校验 → ID 派生 → 入库）
pub struct FarmApi {
    farm_repo: Arc<FarmRepository>,
}

impl FarmApi {
    /// 创建新的 FarmApi 实例
    pub fn new(farm_repo: Arc<FarmRepository>) -> Self {
        Self { farm_repo }
    }

    // ==========================================
    // 查询接口
    // ==========================================

    /// 查询全部牧场（录入顺序）
    pub fn list_farms(&self) -> ApiResult<Vec<Farm>> {
        Ok(self.farm_repo.list_all()?)
    }

    /// 文本筛选牧场（name/location 大小写不敏感包含；空词返回全集）
    pub fn search_farms(&self, term: &str) -> ApiResult<Vec<Farm>> {
        let farms = self.farm_repo.list_all()?;
        Ok(query::filter_farms(&farms, term))
    }

    /// 按 ID 查询单个牧场
    pub fn get_farm(&self, farm_id: &str) -> ApiResult<Farm> {
        if farm_id.trim().is_empty() {
            return Err(ApiError::InvalidInput("牧场 ID 不能为空".to_string()));
        }
        self.farm_repo
            .find_by_id(farm_id)?
            .ok_or_else(|| ApiError::NotFound(format!("Farm(id={})不存在", farm_id)))
    }

    // ==========================================
    // 录入工作流
    // ==========================================

    /// 注册新牧场
    ///
    /// # 流程
    /// 1. 字段级校验（名称/所在地/联系人/邮箱/规模）
    /// 2. ID 分配: 显式 ID 查重（冲突报 Conflict），缺省时按末尾记录顺序派生
    /// 3. 入库并返回新记录
    ///
    /// 不会隐式触发分析重算（调用方按需另行读取）
    pub fn create_farm(&self, input: NewFarmInput) -> ApiResult<Farm> {
        intake::validate_farm(&input)?;

        let assigned_id = match input.id.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            Some(explicit) => {
                if self.farm_repo.exists(explicit)? {
                    return Err(ApiError::Conflict(format!("牧场 ID '{}' 已存在", explicit)));
                }
                explicit.to_string()
            }
            None => {
                let last_id = self.farm_repo.last_id()?;
                intake::next_sequential_id("farm", last_id.as_deref())?
            }
        };

        let farm = intake::build_farm(&input, assigned_id);
        self.farm_repo.create(&farm)?;

        info!(farm_id = %farm.id, name = %farm.name, "牧场注册成功");
        debug!(certifications = farm.certifications.len(), "认证数量");
        Ok(farm)
    }
}
