// ==========================================
// WoolTracer - 流转时间线引擎
// ==========================================
// 契约: 构造状态更新步骤，维护批次时间线的尾部不变量
// 不变量: current_status/current_location 恒等于尾部步骤
// 红线: 仅追加，从不重排/删除；不做状态机校验（任意状态可衔接任意状态）
// ==========================================

use crate::domain::batch::{JourneyStep, WoolBatch};
use crate::domain::types::BatchStatus;
use chrono::NaiveDateTime;
use thiserror::Error;

/// 时间线错误类型
#[derive(Error, Debug)]
pub enum TimelineError {
    #[error("字段不能为空 (field={field})")]
    EmptyField { field: &'static str },
}

/// 构造新的时间线步骤
///
/// # 规则
/// - location/handled_by 非空（去除首尾空白后）
/// - 时间戳取追加时刻的本地时钟
/// - 不校验 status 是否符合规范流转顺序
pub fn new_step(
    status: BatchStatus,
    location: &str,
    handled_by: &str,
    notes: Option<String>,
) -> Result<JourneyStep, TimelineError> {
    let location = location.trim();
    if location.is_empty() {
        return Err(TimelineError::EmptyField { field: "location" });
    }
    let handled_by = handled_by.trim();
    if handled_by.is_empty() {
        return Err(TimelineError::EmptyField { field: "handledBy" });
    }

    Ok(JourneyStep {
        status,
        location: location.to_string(),
        timestamp: now(),
        handled_by: handled_by.to_string(),
        notes: notes.filter(|n| !n.trim().is_empty()),
    })
}

/// 将步骤追加到批次值并同步尾部缓存
///
/// 持久化路径见 WoolBatchRepository::append_step（同一事务）；
/// 此函数供引擎内构造返回值与测试使用。
pub fn apply_step(batch: &mut WoolBatch, step: JourneyStep) {
    batch.current_status = step.status;
    batch.current_location = step.location.clone();
    batch.journey_history.push(step);
}

/// 尾部不变量是否成立（诊断/测试用）
pub fn tail_invariant_holds(batch: &WoolBatch) -> bool {
    match batch.last_step() {
        Some(last) => {
            last.status == batch.current_status && last.location == batch.current_location
        }
        None => false,
    }
}

/// 当前本地时刻（截断到秒，与落库格式一致）
pub fn now() -> NaiveDateTime {
    use chrono::Timelike;
    let ts = chrono::Local::now().naive_local();
    ts.with_nanosecond(0).unwrap_or(ts)
}
