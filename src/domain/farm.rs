// ==========================================
// WoolTracer - 牧场领域模型
// ==========================================
// 对齐: db.rs farm 表
// 字段命名: 内部 snake_case，边界序列化 camelCase（统一口径）
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// Farm - 牧场主数据
// ==========================================
// 生命周期: 录入工作流创建，创建后字段不再变更，无删除路径
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Farm {
    // ===== 主键 =====
    pub id: String, // 牧场唯一标识（farm-00N）

    // ===== 基础信息 =====
    pub name: String,     // 牧场名称
    pub location: String, // 所在地

    // ===== 生产规模 =====
    pub sheep_count: i64,       // 存栏羊只数（非负）
    pub annual_production: f64, // 年产量（kg，非负）

    // ===== 认证（按录入顺序展示）=====
    pub certifications: Vec<String>,

    // ===== 联系方式 =====
    pub contact_person: String,
    pub contact_email: String, // 已通过邮箱格式校验

    // ===== 其他 =====
    pub joined_date: NaiveDate, // 加入日期
    pub photo: String,          // 照片 URL
}
