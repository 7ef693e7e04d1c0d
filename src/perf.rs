// ==========================================
// WoolTracer - 性能观测
// ==========================================
// 轻量计时 Guard：IPC 命令与聚合查询的耗时记录
// ==========================================

use std::time::Instant;

/// 慢操作告警阈值（毫秒），可通过环境变量覆盖
fn slow_threshold_ms() -> u64 {
    std::env::var("WOOL_TRACER_SLOW_OP_MS")
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(if cfg!(debug_assertions) { 50 } else { 200 })
}

/// 性能统计 Guard：Drop 时记录 elapsed_ms
///
/// 使用方式：
/// ```ignore
/// let _perf = wool_tracer::perf::PerfGuard::new("ipc.list_batches");
/// // do work...
/// ```
pub struct PerfGuard {
    op: &'static str,
    start: Instant,
}

impl PerfGuard {
    pub fn new(op: &'static str) -> Self {
        Self {
            op,
            start: Instant::now(),
        }
    }
}

impl Drop for PerfGuard {
    fn drop(&mut self) {
        let elapsed_ms = self.start.elapsed().as_millis() as u64;
        if elapsed_ms >= slow_threshold_ms() {
            tracing::warn!(target: "perf", op = self.op, elapsed_ms, "slow op");
        } else {
            tracing::info!(target: "perf", op = self.op, elapsed_ms, "done");
        }
    }
}
