// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use chrono::{NaiveDate, NaiveDateTime};
use wool_tracer::domain::batch::{JourneyStep, WoolBatch};
use wool_tracer::domain::facility::ProcessingFacility;
use wool_tracer::domain::farm::Farm;
use wool_tracer::domain::types::{BatchStatus, FacilityType, WoolGrade};

fn parse_ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").expect("时间戳格式非法")
}

// ==========================================
// Farm 构建器
// ==========================================

pub struct FarmBuilder {
    id: String,
    name: Option<String>,
    location: Option<String>,
    sheep_count: Option<i64>,
    annual_production: Option<f64>,
    certifications: Vec<String>,
    contact_person: Option<String>,
    contact_email: Option<String>,
    joined_date: Option<NaiveDate>,
}

impl FarmBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: None,
            location: None,
            sheep_count: None,
            annual_production: None,
            certifications: Vec::new(),
            contact_person: None,
            contact_email: None,
            joined_date: None,
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn location(mut self, location: &str) -> Self {
        self.location = Some(location.to_string());
        self
    }

    pub fn sheep_count(mut self, count: i64) -> Self {
        self.sheep_count = Some(count);
        self
    }

    pub fn annual_production(mut self, kg: f64) -> Self {
        self.annual_production = Some(kg);
        self
    }

    pub fn certification(mut self, cert: &str) -> Self {
        self.certifications.push(cert.to_string());
        self
    }

    pub fn contact_person(mut self, person: &str) -> Self {
        self.contact_person = Some(person.to_string());
        self
    }

    pub fn contact_email(mut self, email: &str) -> Self {
        self.contact_email = Some(email.to_string());
        self
    }

    pub fn joined_date(mut self, date: NaiveDate) -> Self {
        self.joined_date = Some(date);
        self
    }

    pub fn build(self) -> Farm {
        let name = self
            .name
            .unwrap_or_else(|| format!("Test Farm {}", self.id));
        Farm {
            id: self.id,
            name,
            location: self.location.unwrap_or_else(|| "Test Valley".to_string()),
            sheep_count: self.sheep_count.unwrap_or(100),
            annual_production: self.annual_production.unwrap_or(1000.0),
            certifications: self.certifications,
            contact_person: self
                .contact_person
                .unwrap_or_else(|| "Test Person".to_string()),
            contact_email: self
                .contact_email
                .unwrap_or_else(|| "test@example.com".to_string()),
            joined_date: self
                .joined_date
                .unwrap_or_else(|| NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()),
            photo: "https://example.com/farm.jpg".to_string(),
        }
    }
}

// ==========================================
// WoolBatch 构建器
// ==========================================

pub struct BatchBuilder {
    id: String,
    farm_id: String,
    shear_date: Option<String>,
    weight: Option<f64>,
    grade: Option<WoolGrade>,
    color: Option<String>,
    quality_score: Option<f64>,
    steps: Vec<JourneyStep>,
}

impl BatchBuilder {
    pub fn new(id: &str, farm_id: &str) -> Self {
        Self {
            id: id.to_string(),
            farm_id: farm_id.to_string(),
            shear_date: None,
            weight: None,
            grade: None,
            color: None,
            quality_score: None,
            steps: Vec::new(),
        }
    }

    pub fn shear_date(mut self, date: &str) -> Self {
        self.shear_date = Some(date.to_string());
        self
    }

    pub fn weight(mut self, kg: f64) -> Self {
        self.weight = Some(kg);
        self
    }

    pub fn grade(mut self, grade: WoolGrade) -> Self {
        self.grade = Some(grade);
        self
    }

    pub fn color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }

    pub fn quality_score(mut self, score: f64) -> Self {
        self.quality_score = Some(score);
        self
    }

    /// 追加一条时间线步骤（按调用顺序排列）
    pub fn step(mut self, status: BatchStatus, location: &str, timestamp: &str) -> Self {
        self.steps.push(JourneyStep {
            status,
            location: location.to_string(),
            timestamp: parse_ts(timestamp),
            handled_by: "Test Handler".to_string(),
            notes: None,
        });
        self
    }

    /// 构造批次；未显式添加步骤时生成一条初始 Sheared 步骤，
    /// 尾部缓存取最后一条步骤（保持尾部不变量成立）
    pub fn build(self) -> WoolBatch {
        let mut steps = self.steps;
        if steps.is_empty() {
            steps.push(JourneyStep {
                status: BatchStatus::Sheared,
                location: "Test Valley".to_string(),
                timestamp: parse_ts("2023-05-01T09:00:00"),
                handled_by: "Test Handler".to_string(),
                notes: None,
            });
        }
        let last = steps.last().expect("步骤列表非空").clone();

        WoolBatch {
            id: self.id,
            farm_id: self.farm_id,
            shear_date: self.shear_date.unwrap_or_else(|| "2023-05-01".to_string()),
            weight: self.weight.unwrap_or(100.0),
            grade: self.grade.unwrap_or(WoolGrade::Medium),
            color: self.color.unwrap_or_else(|| "White".to_string()),
            quality_score: self.quality_score.unwrap_or(80.0),
            current_status: last.status,
            current_location: last.location,
            journey_history: steps,
        }
    }
}

// ==========================================
// ProcessingFacility 构建器
// ==========================================

pub struct FacilityBuilder {
    id: String,
    name: Option<String>,
    facility_type: Option<FacilityType>,
    location: Option<String>,
    capacity_kg: Option<f64>,
    current_utilization_kg: Option<f64>,
}

impl FacilityBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: None,
            facility_type: None,
            location: None,
            capacity_kg: None,
            current_utilization_kg: None,
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn facility_type(mut self, facility_type: FacilityType) -> Self {
        self.facility_type = Some(facility_type);
        self
    }

    pub fn capacity(mut self, kg: f64) -> Self {
        self.capacity_kg = Some(kg);
        self
    }

    pub fn utilization(mut self, kg: f64) -> Self {
        self.current_utilization_kg = Some(kg);
        self
    }

    pub fn build(self) -> ProcessingFacility {
        let name = self
            .name
            .unwrap_or_else(|| format!("Test Facility {}", self.id));
        ProcessingFacility {
            id: self.id,
            name,
            facility_type: self.facility_type.unwrap_or(FacilityType::Washing),
            location: self.location.unwrap_or_else(|| "Leeds, UK".to_string()),
            capacity_kg: self.capacity_kg.unwrap_or(1000.0),
            current_utilization_kg: self.current_utilization_kg.unwrap_or(0.0),
        }
    }
}
