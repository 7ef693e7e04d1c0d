// ==========================================
// WoolTracer - 分析读模型
// ==========================================
// 纯派生数据，从不落库；每次读取由聚合引擎重新计算
// ==========================================

use crate::domain::batch::JourneyStep;
use crate::domain::types::BatchStatus;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// FarmProduction - 分牧场产量
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmProduction {
    pub farm_id: String,
    pub farm_name: String,
    pub production: f64, // 该牧场所有批次重量之和（kg），无批次为 0
}

// ==========================================
// MonthlyProduction - 月度产量
// ==========================================
// 固定 12 桶（Jan-Dec），按剪毛月份归桶，跨年合并
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyProduction {
    pub month: String, // "Jan".."Dec"
    pub amount: f64,   // kg
}

// ==========================================
// FacilityUtilization - 设施利用率
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityUtilization {
    pub facility_id: String,
    pub facility_name: String,
    pub utilization_percentage: f64, // 截断到 [0, 100]
}

// ==========================================
// AnalyticsSummary - 分析汇总
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    /// 所有批次重量之和（kg），空集为 0
    pub total_wool_produced: f64,

    /// 平均质量分（四舍五入取整）；批次集合为空时为 None（显式"无数据"而非 NaN）
    pub average_quality_score: Option<i64>,

    /// 每个牧场一条记录，无批次的牧场产量为 0 而非缺失
    pub production_by_farm: Vec<FarmProduction>,

    /// 9 个状态全量出现（默认 0），计数之和恒等于批次总数
    pub status_distribution: BTreeMap<BatchStatus, u64>,

    /// 固定 12 桶，未命中的月份为 0
    pub monthly_production: Vec<MonthlyProduction>,

    /// 每个设施的利用率百分比
    pub facility_utilization: Vec<FacilityUtilization>,
}

// ==========================================
// RecentUpdate - 最近流转动态
// ==========================================
// 跨批次汇总的时间线步骤，按时间戳倒序取前 N 条
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentUpdate {
    pub batch_id: String,
    pub farm_id: String,
    pub step: JourneyStep,
}
