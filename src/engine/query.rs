// ==========================================
// WoolTracer - 查询筛选引擎
// ==========================================
// 契约: 大小写不敏感的包含匹配；空搜索词恒等返回；保持原始顺序
// 性质: 幂等（同一搜索词二次筛选结果不变）
// ==========================================

use crate::domain::batch::WoolBatch;
use crate::domain::farm::Farm;

/// 筛选批次: id / current_status / current_location 任一包含搜索词
///
/// 空搜索词（含纯空白）返回全集，保持原始顺序。
/// 搜索词先去首尾空白再匹配：纯空白输入视为"未输入"而非按空格字面匹配。
pub fn filter_batches(batches: &[WoolBatch], term: &str) -> Vec<WoolBatch> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return batches.to_vec();
    }
    batches
        .iter()
        .filter(|b| {
            b.id.to_lowercase().contains(&term)
                || b.current_status.to_db_str().to_lowercase().contains(&term)
                || b.current_location.to_lowercase().contains(&term)
        })
        .cloned()
        .collect()
}

/// 筛选牧场: name / location 任一包含搜索词
pub fn filter_farms(farms: &[Farm], term: &str) -> Vec<Farm> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return farms.to_vec();
    }
    farms
        .iter()
        .filter(|f| {
            f.name.to_lowercase().contains(&term) || f.location.to_lowercase().contains(&term)
        })
        .cloned()
        .collect()
}
