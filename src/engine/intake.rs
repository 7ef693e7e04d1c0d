// ==========================================
// WoolTracer - 录入工作流引擎
// ==========================================
// 契约: 校验并构造新的 Farm/WoolBatch 记录
// - 字段级校验（对齐前端表单 schema: 重量 ≥ 1kg、质量分 1-100、邮箱格式等）
// - 顺序 ID 派生（解析末尾记录 ID 的数字后缀 +1，补零到 3 位）
// - 认证列表解析（逗号分隔 → 去空白、滤空）
// 副作用: 无（入库由 API 层经仓储完成）
// ==========================================

use crate::domain::batch::WoolBatch;
use crate::domain::farm::Farm;
use crate::domain::types::{BatchStatus, WoolGrade};
use crate::engine::timeline;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 录入校验错误（字段级，逐项回显给调用方）
#[derive(Error, Debug)]
pub enum IntakeError {
    #[error("字段校验失败 (field={field}): {message}")]
    FieldInvalid { field: &'static str, message: String },
}

impl IntakeError {
    fn field(field: &'static str, message: impl Into<String>) -> Self {
        IntakeError::FieldInvalid {
            field,
            message: message.into(),
        }
    }
}

/// 默认牧场照片 URL（表单未填写时回落）
pub const DEFAULT_FARM_PHOTO: &str =
    "https://images.unsplash.com/photo-1516466823543-f945a3732093";

// ==========================================
// NewFarmInput - 牧场录入表单
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFarmInput {
    /// 显式 ID（可选；缺省时按顺序派生）
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub location: String,
    pub sheep_count: i64,
    pub annual_production: f64,
    pub contact_person: String,
    pub contact_email: String,
    /// 逗号分隔的认证列表
    #[serde(default)]
    pub certifications: String,
    #[serde(default)]
    pub photo: Option<String>,
}

// ==========================================
// NewBatchInput - 批次录入表单
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBatchInput {
    /// 显式 ID（可选；缺省时按顺序派生）
    #[serde(default)]
    pub id: Option<String>,
    pub farm_id: String,
    pub weight: f64,
    pub grade: WoolGrade,
    pub color: String,
    pub quality_score: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

// ==========================================
// 校验
// ==========================================

/// 校验牧场录入表单（对齐前端 farmFormSchema）
pub fn validate_farm(input: &NewFarmInput) -> Result<(), IntakeError> {
    if input.name.trim().len() < 3 {
        return Err(IntakeError::field("name", "牧场名称至少 3 个字符"));
    }
    if input.location.trim().len() < 3 {
        return Err(IntakeError::field("location", "所在地至少 3 个字符"));
    }
    if input.sheep_count < 1 {
        return Err(IntakeError::field("sheepCount", "存栏羊只数至少为 1"));
    }
    if input.annual_production < 1.0 {
        return Err(IntakeError::field("annualProduction", "年产量至少 1kg"));
    }
    if input.contact_person.trim().len() < 3 {
        return Err(IntakeError::field("contactPerson", "联系人姓名至少 3 个字符"));
    }
    if !is_valid_email(input.contact_email.trim()) {
        return Err(IntakeError::field("contactEmail", "邮箱格式无效"));
    }
    Ok(())
}

/// 校验批次录入表单（对齐前端 batchFormSchema）
pub fn validate_batch(input: &NewBatchInput) -> Result<(), IntakeError> {
    if input.farm_id.trim().is_empty() {
        return Err(IntakeError::field("farmId", "必须选择牧场"));
    }
    if input.weight < 1.0 {
        return Err(IntakeError::field("weight", "重量至少 1kg"));
    }
    if input.quality_score < 1.0 || input.quality_score > 100.0 {
        return Err(IntakeError::field("qualityScore", "质量分必须在 1-100 之间"));
    }
    if input.color.trim().is_empty() {
        return Err(IntakeError::field("color", "颜色不能为空"));
    }
    Ok(())
}

/// 邮箱格式校验（local@domain 且 domain 含 '.'）
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || email.contains(char::is_whitespace) {
        return false;
    }
    // domain 须含非首尾的 '.'
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

// ==========================================
// ID 派生
// ==========================================

/// 派生下一个顺序 ID
///
/// 规则: 解析末尾记录 ID 的数字后缀并 +1，补零到 3 位
/// （farm-003 → farm-004；farm-009 → farm-010，不产生 farm-0010）。
///
/// 集合为空或后缀不可解析时返回字段级错误，提示调用方提供显式 ID
/// （历史实现此处直接数组越界崩溃，这里显式上浮）。
pub fn next_sequential_id(prefix: &str, last_id: Option<&str>) -> Result<String, IntakeError> {
    let last_id = last_id.ok_or_else(|| {
        IntakeError::field("id", "集合为空，无法派生顺序 ID，请提供显式 ID")
    })?;

    let suffix = last_id.rsplit('-').next().unwrap_or_default();
    let number: u64 = suffix.parse().map_err(|_| {
        IntakeError::field(
            "id",
            format!("末尾记录 ID '{}' 的数字后缀不可解析，请提供显式 ID", last_id),
        )
    })?;

    Ok(format!("{}-{:03}", prefix, number + 1))
}

/// 解析逗号分隔的认证列表（去空白、滤空，保持录入顺序）
pub fn parse_certifications(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .collect()
}

// ==========================================
// 构造
// ==========================================

/// 构造新牧场记录（校验通过后调用）
///
/// joined_date 取当天；photo 缺省回落到默认图
pub fn build_farm(input: &NewFarmInput, assigned_id: String) -> Farm {
    Farm {
        id: assigned_id,
        name: input.name.trim().to_string(),
        location: input.location.trim().to_string(),
        sheep_count: input.sheep_count,
        annual_production: input.annual_production,
        certifications: parse_certifications(&input.certifications),
        contact_person: input.contact_person.trim().to_string(),
        contact_email: input.contact_email.trim().to_string(),
        joined_date: chrono::Local::now().date_naive(),
        photo: input
            .photo
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .unwrap_or(DEFAULT_FARM_PHOTO)
            .to_string(),
    }
}

/// 构造新批次记录（校验通过后调用）
///
/// - 初始时间线为一条 Sheared 步骤：位置取牧场名称，
///   经手人取牧场联系人，备注取表单 notes
/// - shear_date 取当天
/// - current_status/current_location 由初始步骤初始化（尾部不变量成立）
pub fn build_batch(input: &NewBatchInput, assigned_id: String, farm: &Farm) -> WoolBatch {
    let initial_step = crate::domain::batch::JourneyStep {
        status: BatchStatus::Sheared,
        location: farm.name.clone(),
        timestamp: timeline::now(),
        handled_by: farm.contact_person.clone(),
        notes: input.notes.clone().filter(|n| !n.trim().is_empty()),
    };

    WoolBatch {
        id: assigned_id,
        farm_id: farm.id.clone(),
        shear_date: chrono::Local::now().date_naive().to_string(),
        weight: input.weight,
        grade: input.grade,
        color: input.color.trim().to_string(),
        quality_score: input.quality_score,
        current_status: initial_step.status,
        current_location: initial_step.location.clone(),
        journey_history: vec![initial_step],
    }
}
