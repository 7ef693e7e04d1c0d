// ==========================================
// WoolTracer - 聚合分析引擎
// ==========================================
// 契约: 给定批次/牧场/设施全集，产出 AnalyticsSummary
// 红线: 当前状态的纯函数，无持久化缓存，每次读取重算
// 边界: 剪毛日期解析失败 → 该批次跳过月度归桶，不中断整体计算
// ==========================================

use crate::domain::analytics::{
    AnalyticsSummary, FacilityUtilization, FarmProduction, MonthlyProduction,
};
use crate::domain::batch::WoolBatch;
use crate::domain::facility::ProcessingFacility;
use crate::domain::farm::Farm;
use crate::domain::types::BatchStatus;
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

/// 月度桶标签（Jan-Dec，跨年合并）
const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// 计算分析汇总
///
/// # 规则
/// - total_wool_produced: 全部批次重量求和，空集为 0
/// - average_quality_score: 平均质量分四舍五入取整；空集为 None（显式"无数据"）
/// - production_by_farm: 每个牧场一条，无批次的牧场产量为 0
/// - status_distribution: 9 个状态全量出现（默认 0）
/// - monthly_production: 固定 12 桶，按剪毛月份归桶
/// - facility_utilization: 占用 kg / 产能 kg，截断到 [0, 100]
pub fn summarize(
    batches: &[WoolBatch],
    farms: &[Farm],
    facilities: &[ProcessingFacility],
) -> AnalyticsSummary {
    AnalyticsSummary {
        total_wool_produced: total_wool_produced(batches),
        average_quality_score: average_quality_score(batches),
        production_by_farm: production_by_farm(batches, farms),
        status_distribution: status_distribution(batches),
        monthly_production: monthly_production(batches),
        facility_utilization: facility_utilization(facilities),
    }
}

/// 全部批次重量之和（kg）
pub fn total_wool_produced(batches: &[WoolBatch]) -> f64 {
    batches.iter().map(|b| b.weight).sum()
}

/// 平均质量分（四舍五入取整；空集为 None）
pub fn average_quality_score(batches: &[WoolBatch]) -> Option<i64> {
    if batches.is_empty() {
        return None;
    }
    let sum: f64 = batches.iter().map(|b| b.quality_score).sum();
    Some((sum / batches.len() as f64).round() as i64)
}

/// 分牧场产量（每个牧场一条记录，无批次为 0）
pub fn production_by_farm(batches: &[WoolBatch], farms: &[Farm]) -> Vec<FarmProduction> {
    farms
        .iter()
        .map(|farm| {
            let production = batches
                .iter()
                .filter(|b| b.farm_id == farm.id)
                .map(|b| b.weight)
                .sum();
            FarmProduction {
                farm_id: farm.id.clone(),
                farm_name: farm.name.clone(),
                production,
            }
        })
        .collect()
}

/// 状态分布（9 个状态全量出现，默认 0）
pub fn status_distribution(batches: &[WoolBatch]) -> BTreeMap<BatchStatus, u64> {
    let mut distribution: BTreeMap<BatchStatus, u64> =
        BatchStatus::ALL.iter().map(|s| (*s, 0)).collect();
    for batch in batches {
        *distribution.entry(batch.current_status).or_insert(0) += 1;
    }
    distribution
}

/// 月度产量（固定 12 桶；剪毛日期解析失败的批次跳过并记 debug 日志）
pub fn monthly_production(batches: &[WoolBatch]) -> Vec<MonthlyProduction> {
    let mut amounts = [0.0f64; 12];
    for batch in batches {
        match NaiveDate::parse_from_str(&batch.shear_date, "%Y-%m-%d") {
            Ok(date) => amounts[date.month0() as usize] += batch.weight,
            Err(_) => {
                tracing::debug!(
                    batch_id = %batch.id,
                    shear_date = %batch.shear_date,
                    "剪毛日期无法解析, 跳过月度归桶"
                );
            }
        }
    }
    MONTH_LABELS
        .iter()
        .zip(amounts)
        .map(|(month, amount)| MonthlyProduction {
            month: (*month).to_string(),
            amount,
        })
        .collect()
}

/// 设施利用率（百分比，截断到 [0, 100]）
pub fn facility_utilization(facilities: &[ProcessingFacility]) -> Vec<FacilityUtilization> {
    facilities
        .iter()
        .map(|f| FacilityUtilization {
            facility_id: f.id.clone(),
            facility_name: f.name.clone(),
            utilization_percentage: f.utilization_percent(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::WoolGrade;
    use chrono::NaiveDate;

    fn farm(id: &str, name: &str) -> Farm {
        Farm {
            id: id.to_string(),
            name: name.to_string(),
            location: "Scottish Highlands".to_string(),
            sheep_count: 1250,
            annual_production: 5600.0,
            certifications: vec!["Organic".to_string()],
            contact_person: "John MacLeod".to_string(),
            contact_email: "john@highlandsheep.com".to_string(),
            joined_date: NaiveDate::from_ymd_opt(2020, 4, 15).unwrap(),
            photo: "https://example.com/farm.jpg".to_string(),
        }
    }

    fn batch(id: &str, farm_id: &str, weight: f64, score: f64, shear_date: &str) -> WoolBatch {
        WoolBatch {
            id: id.to_string(),
            farm_id: farm_id.to_string(),
            shear_date: shear_date.to_string(),
            weight,
            grade: WoolGrade::Fine,
            color: "White".to_string(),
            quality_score: score,
            current_status: BatchStatus::Sheared,
            current_location: "Highland Sheep Ranch".to_string(),
            journey_history: Vec::new(),
        }
    }

    #[test]
    fn test_空集合_显式无数据() {
        let summary = summarize(&[], &[], &[]);
        assert_eq!(summary.total_wool_produced, 0.0);
        assert_eq!(summary.average_quality_score, None);
        assert!(summary.production_by_farm.is_empty());
        assert_eq!(summary.status_distribution.len(), 9);
        assert!(summary.status_distribution.values().all(|&c| c == 0));
        assert_eq!(summary.monthly_production.len(), 12);
        assert!(summary.monthly_production.iter().all(|m| m.amount == 0.0));
    }

    #[test]
    fn test_average_quality_score_四舍五入() {
        // (92 + 87 + 98 + 85) / 4 = 90.5 → 91
        let batches = vec![
            batch("batch-001", "farm-001", 450.0, 92.0, "2023-05-15"),
            batch("batch-002", "farm-002", 380.0, 87.0, "2023-04-30"),
            batch("batch-003", "farm-003", 720.0, 98.0, "2023-06-05"),
            batch("batch-004", "farm-001", 390.0, 85.0, "2023-05-16"),
        ];
        assert_eq!(average_quality_score(&batches), Some(91));
        assert_eq!(total_wool_produced(&batches), 1940.0);
    }

    #[test]
    fn test_production_by_farm_含零产量牧场() {
        let farms = vec![farm("farm-001", "Highland Sheep Ranch"), farm("farm-002", "Green Valley Wool")];
        let batches = vec![batch("batch-001", "farm-001", 450.0, 92.0, "2023-05-15")];

        let result = production_by_farm(&batches, &farms);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].production, 450.0);
        // 无批次的牧场报告 0，不缺失
        assert_eq!(result[1].farm_id, "farm-002");
        assert_eq!(result[1].production, 0.0);
    }

    #[test]
    fn test_production_by_farm_总和守恒() {
        let farms = vec![farm("farm-001", "A"), farm("farm-002", "B")];
        let batches = vec![
            batch("batch-001", "farm-001", 450.0, 92.0, "2023-05-15"),
            batch("batch-002", "farm-002", 380.0, 87.0, "2023-04-30"),
            batch("batch-003", "farm-001", 390.0, 85.0, "2023-05-16"),
        ];
        let per_farm: f64 = production_by_farm(&batches, &farms)
            .iter()
            .map(|p| p.production)
            .sum();
        assert_eq!(per_farm, total_wool_produced(&batches));
    }

    #[test]
    fn test_status_distribution_九键求和守恒() {
        let mut batches = vec![
            batch("batch-001", "farm-001", 450.0, 92.0, "2023-05-15"),
            batch("batch-002", "farm-001", 380.0, 87.0, "2023-04-30"),
            batch("batch-003", "farm-001", 720.0, 98.0, "2023-06-05"),
        ];
        batches[1].current_status = BatchStatus::Spun;
        batches[2].current_status = BatchStatus::Spun;

        let dist = status_distribution(&batches);
        assert_eq!(dist.len(), 9);
        assert_eq!(dist[&BatchStatus::Sheared], 1);
        assert_eq!(dist[&BatchStatus::Spun], 2);
        assert_eq!(dist[&BatchStatus::Delivered], 0);
        let total: u64 = dist.values().sum();
        assert_eq!(total as usize, batches.len());
    }

    #[test]
    fn test_monthly_production_按剪毛月份归桶() {
        let batches = vec![
            batch("batch-001", "farm-001", 450.0, 92.0, "2023-05-15"),
            batch("batch-002", "farm-002", 380.0, 87.0, "2023-04-30"),
            batch("batch-003", "farm-003", 720.0, 98.0, "2023-06-05"),
            batch("batch-004", "farm-001", 390.0, 85.0, "2023-05-16"),
        ];
        let monthly = monthly_production(&batches);
        assert_eq!(monthly.len(), 12);
        assert_eq!(monthly[3], MonthlyProduction { month: "Apr".to_string(), amount: 380.0 });
        assert_eq!(monthly[4].amount, 840.0); // May: 450 + 390
        assert_eq!(monthly[5].amount, 720.0); // Jun
        assert_eq!(monthly[0].amount, 0.0); // Jan
    }

    #[test]
    fn test_monthly_production_跨年合并() {
        let batches = vec![
            batch("batch-001", "farm-001", 100.0, 90.0, "2022-05-01"),
            batch("batch-002", "farm-001", 200.0, 90.0, "2023-05-20"),
        ];
        let monthly = monthly_production(&batches);
        assert_eq!(monthly[4].amount, 300.0);
    }

    #[test]
    fn test_monthly_production_脏日期跳过不中断() {
        let batches = vec![
            batch("batch-001", "farm-001", 450.0, 92.0, "2023-05-15"),
            batch("batch-002", "farm-001", 380.0, 87.0, "not-a-date"),
        ];
        let monthly = monthly_production(&batches);
        // 脏日期批次被跳过，其余正常归桶
        let total: f64 = monthly.iter().map(|m| m.amount).sum();
        assert_eq!(total, 450.0);
    }

    #[test]
    fn test_facility_utilization_折算与截断() {
        use crate::domain::types::FacilityType;
        let facilities = vec![
            ProcessingFacility {
                id: "facility-001".to_string(),
                name: "CleanWool Facility".to_string(),
                facility_type: FacilityType::Washing,
                location: "Leeds, UK".to_string(),
                capacity_kg: 2000.0,
                current_utilization_kg: 1300.0,
            },
            ProcessingFacility {
                id: "facility-002".to_string(),
                name: "Yorkshire Processing Co.".to_string(),
                facility_type: FacilityType::Processing,
                location: "Yorkshire, UK".to_string(),
                capacity_kg: 1800.0,
                current_utilization_kg: 2000.0,
            },
        ];
        let result = facility_utilization(&facilities);
        assert_eq!(result[0].utilization_percentage, 65.0);
        assert_eq!(result[1].utilization_percentage, 100.0); // 超产能截断
    }
}
