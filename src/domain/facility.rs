// ==========================================
// WoolTracer - 加工设施领域模型
// ==========================================
// 对齐: db.rs processing_facility 表
// 口径: 利用率统一存原始 kg（历史数据有 kg/百分比两套口径，
//       入库前折算为 kg），百分比在读取时派生并截断到 [0, 100]
// ==========================================

use crate::domain::types::FacilityType;
use serde::{Deserialize, Serialize};

// ==========================================
// ProcessingFacility - 加工设施
// ==========================================
// 不变量: 0 ≤ current_utilization_kg ≤ capacity_kg（kg 口径下）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingFacility {
    pub id: String,
    pub name: String,
    pub facility_type: FacilityType,
    pub location: String,
    pub capacity_kg: f64,            // 产能（kg，正数）
    pub current_utilization_kg: f64, // 当前占用（kg）
}

impl ProcessingFacility {
    /// 利用率百分比（读取时派生，截断到 [0, 100]）
    pub fn utilization_percent(&self) -> f64 {
        if self.capacity_kg <= 0.0 {
            return 0.0;
        }
        let pct = self.current_utilization_kg / self.capacity_kg * 100.0;
        pct.clamp(0.0, 100.0)
    }
}
