// ==========================================
// WoolTracer - 领域类型定义
// ==========================================
// 封闭枚举: 批次状态 / 羊毛等级 / 设施类型
// 序列化格式: 与前端展示一致的 PascalCase 字符串
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 批次状态 (Batch Status)
// ==========================================
// 按供应链流转的规范顺序排列:
// Sheared → Sorted → Cleaned → Processed → Spun → Dyed → Woven → Finished → Delivered
// 红线: 顺序仅用于进度百分比展示，不做状态机校验（允许跳跃/乱序流转）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BatchStatus {
    Sheared,   // 已剪毛
    Sorted,    // 已分拣
    Cleaned,   // 已清洗
    Processed, // 已加工
    Spun,      // 已纺纱
    Dyed,      // 已染色
    Woven,     // 已织造
    Finished,  // 已整理
    Delivered, // 已交付
}

impl BatchStatus {
    /// 全部状态（规范流转顺序）
    pub const ALL: [BatchStatus; 9] = [
        BatchStatus::Sheared,
        BatchStatus::Sorted,
        BatchStatus::Cleaned,
        BatchStatus::Processed,
        BatchStatus::Spun,
        BatchStatus::Dyed,
        BatchStatus::Woven,
        BatchStatus::Finished,
        BatchStatus::Delivered,
    ];

    /// 从字符串解析状态
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Sheared" => Some(BatchStatus::Sheared),
            "Sorted" => Some(BatchStatus::Sorted),
            "Cleaned" => Some(BatchStatus::Cleaned),
            "Processed" => Some(BatchStatus::Processed),
            "Spun" => Some(BatchStatus::Spun),
            "Dyed" => Some(BatchStatus::Dyed),
            "Woven" => Some(BatchStatus::Woven),
            "Finished" => Some(BatchStatus::Finished),
            "Delivered" => Some(BatchStatus::Delivered),
            _ => None,
        }
    }

    /// 转换为数据库存储的字符串
    pub fn to_db_str(&self) -> &'static str {
        match self {
            BatchStatus::Sheared => "Sheared",
            BatchStatus::Sorted => "Sorted",
            BatchStatus::Cleaned => "Cleaned",
            BatchStatus::Processed => "Processed",
            BatchStatus::Spun => "Spun",
            BatchStatus::Dyed => "Dyed",
            BatchStatus::Woven => "Woven",
            BatchStatus::Finished => "Finished",
            BatchStatus::Delivered => "Delivered",
        }
    }

    /// 在规范流转顺序中的下标（0 起）
    pub fn order_index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    /// 供应链进度百分比（仅用于进度条展示）
    ///
    /// 计算: round((index + 1) / 9 * 100)
    pub fn progress_percent(&self) -> u32 {
        let total = Self::ALL.len() as f64;
        (((self.order_index() as f64 + 1.0) / total) * 100.0).round() as u32
    }
}

impl fmt::Display for BatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_db_str())
    }
}

// ==========================================
// 羊毛等级 (Wool Grade)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WoolGrade {
    Fine,      // 细
    Medium,    // 中
    Coarse,    // 粗
    Superfine, // 超细
}

impl WoolGrade {
    /// 从字符串解析等级
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Fine" => Some(WoolGrade::Fine),
            "Medium" => Some(WoolGrade::Medium),
            "Coarse" => Some(WoolGrade::Coarse),
            "Superfine" => Some(WoolGrade::Superfine),
            _ => None,
        }
    }

    /// 转换为数据库存储的字符串
    pub fn to_db_str(&self) -> &'static str {
        match self {
            WoolGrade::Fine => "Fine",
            WoolGrade::Medium => "Medium",
            WoolGrade::Coarse => "Coarse",
            WoolGrade::Superfine => "Superfine",
        }
    }
}

impl fmt::Display for WoolGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_db_str())
    }
}

// ==========================================
// 设施类型 (Facility Type)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FacilityType {
    Sorting,    // 分拣
    Washing,    // 清洗
    Processing, // 加工
    Spinning,   // 纺纱
    Dyeing,     // 染色
    Weaving,    // 织造
}

impl FacilityType {
    /// 从字符串解析设施类型
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Sorting" => Some(FacilityType::Sorting),
            "Washing" => Some(FacilityType::Washing),
            "Processing" => Some(FacilityType::Processing),
            "Spinning" => Some(FacilityType::Spinning),
            "Dyeing" => Some(FacilityType::Dyeing),
            "Weaving" => Some(FacilityType::Weaving),
            _ => None,
        }
    }

    /// 转换为数据库存储的字符串
    pub fn to_db_str(&self) -> &'static str {
        match self {
            FacilityType::Sorting => "Sorting",
            FacilityType::Washing => "Washing",
            FacilityType::Processing => "Processing",
            FacilityType::Spinning => "Spinning",
            FacilityType::Dyeing => "Dyeing",
            FacilityType::Weaving => "Weaving",
        }
    }
}

impl fmt::Display for FacilityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_db_str())
    }
}
