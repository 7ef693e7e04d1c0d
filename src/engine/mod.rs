// ==========================================
// WoolTracer - 引擎层
// ==========================================
// 职责: 业务规则（纯逻辑，不做数据访问）
// - analytics: 聚合分析（每次读取重算，无缓存）
// - timeline: 流转时间线（仅追加 + 尾部缓存同步）
// - intake: 录入校验与顺序 ID 派生
// - query: 文本筛选
// ==========================================

pub mod analytics;
pub mod intake;
pub mod query;
pub mod timeline;

// 重导出核心类型
pub use intake::{IntakeError, NewBatchInput, NewFarmInput};
pub use timeline::TimelineError;
