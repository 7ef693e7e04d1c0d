// ==========================================
// WoolTracer - 羊毛批次领域模型
// ==========================================
// 对齐: db.rs wool_batch / journey_step 表
// 不变量: current_status/current_location 恒等于 journey_history 尾部的
//         status/location，两者只能经由时间线追加路径一起更新
// ==========================================

use crate::domain::types::{BatchStatus, WoolGrade};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ==========================================
// JourneyStep - 流转步骤
// ==========================================
// 追加后不可变；排序按追加顺序（与时间戳一致）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyStep {
    pub status: BatchStatus,
    pub location: String,
    pub timestamp: NaiveDateTime, // 追加时刻的本地时钟
    pub handled_by: String,
    pub notes: Option<String>,
}

// ==========================================
// WoolBatch - 羊毛批次
// ==========================================
// 生命周期: 录入工作流创建（附带初始 Sheared 步骤），
//           之后仅由时间线追加路径变更，无删除路径
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WoolBatch {
    // ===== 主键与关联 =====
    pub id: String,      // 批次唯一标识（batch-00N）
    pub farm_id: String, // 关联 farm（FK）

    // ===== 批次属性 =====
    // shear_date 保留 ISO 日期文本：月度聚合解析失败时跳过该批次而非整体失败
    pub shear_date: String,
    pub weight: f64, // kg，正数
    pub grade: WoolGrade,
    pub color: String,
    pub quality_score: f64, // 1-100

    // ===== 时间线尾部缓存（反范式，只读）=====
    pub current_status: BatchStatus,
    pub current_location: String,

    // ===== 流转时间线（按时间顺序，仅追加）=====
    pub journey_history: Vec<JourneyStep>,
}

impl WoolBatch {
    /// 时间线尾部步骤
    pub fn last_step(&self) -> Option<&JourneyStep> {
        self.journey_history.last()
    }

    /// 供应链进度百分比（仅展示用）
    pub fn progress_percent(&self) -> u32 {
        self.current_status.progress_percent()
    }
}
