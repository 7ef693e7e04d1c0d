// Dev utility: reset the database and seed the demo supply-chain dataset
// (3 farms, 4 batches with full journey timelines, 5 processing facilities).
//
// Usage:
//   cargo run --bin seed_demo_db -- [db_path]
//
// This is intentionally lightweight and does not start the Tauri UI.

use chrono::{NaiveDate, NaiveDateTime};
use std::error::Error;
use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};

use wool_tracer::app::get_default_db_path;
use wool_tracer::db::{init_schema, open_sqlite_connection};
use wool_tracer::repository::{
    batch_repo::WoolBatchRepository, facility_repo::ProcessingFacilityRepository,
    farm_repo::FarmRepository,
};
use wool_tracer::{
    BatchStatus, FacilityType, Farm, JourneyStep, ProcessingFacility, WoolBatch, WoolGrade,
};

fn main() -> Result<(), Box<dyn Error>> {
    wool_tracer::logging::init();

    let db_path = std::env::args().nth(1).unwrap_or_else(get_default_db_path);

    // 覆盖式重建: 旧文件直接删除后重建 schema
    if Path::new(&db_path).exists() {
        fs::remove_file(&db_path)?;
        tracing::info!("已删除旧数据库: {}", db_path);
    }

    let conn = open_sqlite_connection(&db_path)?;
    init_schema(&conn)?;
    let conn = Arc::new(Mutex::new(conn));

    let farm_repo = FarmRepository::from_connection(conn.clone());
    let batch_repo = WoolBatchRepository::from_connection(conn.clone());
    let facility_repo = ProcessingFacilityRepository::from_connection(conn.clone());

    for farm in demo_farms() {
        farm_repo.create(&farm)?;
    }
    for batch in demo_batches() {
        batch_repo.create(&batch)?;
    }
    for facility in demo_facilities() {
        facility_repo.create(&facility)?;
    }

    tracing::info!(
        farms = farm_repo.list_all()?.len(),
        batches = batch_repo.list_all()?.len(),
        facilities = facility_repo.list_all()?.len(),
        "种子数据写入完成: {}",
        db_path
    );
    Ok(())
}

// ==========================================
// 演示数据
// ==========================================

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("演示日期格式非法")
}

fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").expect("演示时间戳格式非法")
}

fn step(
    status: BatchStatus,
    location: &str,
    timestamp: &str,
    handled_by: &str,
    notes: Option<&str>,
) -> JourneyStep {
    JourneyStep {
        status,
        location: location.to_string(),
        timestamp: ts(timestamp),
        handled_by: handled_by.to_string(),
        notes: notes.map(str::to_string),
    }
}

fn demo_farms() -> Vec<Farm> {
    vec![
        Farm {
            id: "farm-001".to_string(),
            name: "Highland Sheep Ranch".to_string(),
            location: "Scottish Highlands".to_string(),
            sheep_count: 1250,
            annual_production: 5600.0,
            certifications: vec!["Organic".to_string(), "Sustainable Farming".to_string()],
            contact_person: "John MacLeod".to_string(),
            contact_email: "john@highlandsheep.com".to_string(),
            joined_date: date("2020-04-15"),
            photo: "https://images.unsplash.com/photo-1516466823543-f945a3732093".to_string(),
        },
        Farm {
            id: "farm-002".to_string(),
            name: "Green Valley Wool".to_string(),
            location: "Wales".to_string(),
            sheep_count: 780,
            annual_production: 3200.0,
            certifications: vec![
                "Rainforest Alliance".to_string(),
                "Animal Welfare Approved".to_string(),
            ],
            contact_person: "Emma Davies".to_string(),
            contact_email: "emma@greenvalleywool.com".to_string(),
            joined_date: date("2019-09-23"),
            photo: "https://images.unsplash.com/photo-1500595046743-cd271d694d30".to_string(),
        },
        Farm {
            id: "farm-003".to_string(),
            name: "Alpine Merino Farm".to_string(),
            location: "Southern Alps, New Zealand".to_string(),
            sheep_count: 2100,
            annual_production: 9400.0,
            certifications: vec![
                "Organic".to_string(),
                "Sustainable Farming".to_string(),
                "ZQ Certified".to_string(),
            ],
            contact_person: "David Miller".to_string(),
            contact_email: "david@alpinemerino.co.nz".to_string(),
            joined_date: date("2018-06-10"),
            photo: "https://images.unsplash.com/photo-1446824505046-e43605ffb17f".to_string(),
        },
    ]
}

fn demo_batches() -> Vec<WoolBatch> {
    vec![
        WoolBatch {
            id: "batch-001".to_string(),
            farm_id: "farm-001".to_string(),
            shear_date: "2023-05-15".to_string(),
            weight: 450.0,
            grade: WoolGrade::Fine,
            color: "White".to_string(),
            quality_score: 92.0,
            current_status: BatchStatus::Processed,
            current_location: "Yorkshire Processing Co.".to_string(),
            journey_history: vec![
                step(
                    BatchStatus::Sheared,
                    "Highland Sheep Ranch",
                    "2023-05-15T09:30:00",
                    "John MacLeod",
                    Some("Spring shearing completed with good yield"),
                ),
                step(
                    BatchStatus::Sorted,
                    "Highland Sheep Ranch",
                    "2023-05-17T14:20:00",
                    "Sarah Johnson",
                    Some("Separated by grade and color"),
                ),
                step(
                    BatchStatus::Cleaned,
                    "CleanWool Facility",
                    "2023-05-25T10:15:00",
                    "Mike Thomson",
                    Some("Washed and dried using eco-friendly processes"),
                ),
                step(
                    BatchStatus::Processed,
                    "Yorkshire Processing Co.",
                    "2023-06-02T13:40:00",
                    "Yorkshire Team",
                    None,
                ),
            ],
        },
        WoolBatch {
            id: "batch-002".to_string(),
            farm_id: "farm-002".to_string(),
            shear_date: "2023-04-30".to_string(),
            weight: 380.0,
            grade: WoolGrade::Medium,
            color: "Cream".to_string(),
            quality_score: 87.0,
            current_status: BatchStatus::Spun,
            current_location: "Traditional Spinners Ltd.".to_string(),
            journey_history: vec![
                step(
                    BatchStatus::Sheared,
                    "Green Valley Wool",
                    "2023-04-30T08:45:00",
                    "Robert Davies",
                    None,
                ),
                step(
                    BatchStatus::Sorted,
                    "Green Valley Wool",
                    "2023-05-01T16:30:00",
                    "Emma Davies",
                    None,
                ),
                step(
                    BatchStatus::Cleaned,
                    "CleanWool Facility",
                    "2023-05-07T11:20:00",
                    "Mike Thomson",
                    None,
                ),
                step(
                    BatchStatus::Processed,
                    "Yorkshire Processing Co.",
                    "2023-05-18T14:10:00",
                    "Yorkshire Team",
                    None,
                ),
                step(
                    BatchStatus::Spun,
                    "Traditional Spinners Ltd.",
                    "2023-05-30T09:50:00",
                    "Traditional Spinners Team",
                    Some("Spun into medium-weight yarn"),
                ),
            ],
        },
        WoolBatch {
            id: "batch-003".to_string(),
            farm_id: "farm-003".to_string(),
            shear_date: "2023-06-05".to_string(),
            weight: 720.0,
            grade: WoolGrade::Superfine,
            color: "White".to_string(),
            quality_score: 98.0,
            current_status: BatchStatus::Cleaned,
            current_location: "EcoClean Wool Services".to_string(),
            journey_history: vec![
                step(
                    BatchStatus::Sheared,
                    "Alpine Merino Farm",
                    "2023-06-05T07:30:00",
                    "Alpine Shearing Team",
                    Some("Premium merino wool from winter coats"),
                ),
                step(
                    BatchStatus::Sorted,
                    "Alpine Merino Farm",
                    "2023-06-06T15:45:00",
                    "Quality Control Team",
                    Some("Grade A classification - premium quality"),
                ),
                step(
                    BatchStatus::Cleaned,
                    "EcoClean Wool Services",
                    "2023-06-12T10:30:00",
                    "EcoClean Team",
                    Some("Gentle washing to preserve fiber quality"),
                ),
            ],
        },
        WoolBatch {
            id: "batch-004".to_string(),
            farm_id: "farm-001".to_string(),
            shear_date: "2023-05-16".to_string(),
            weight: 390.0,
            grade: WoolGrade::Medium,
            color: "Light Gray".to_string(),
            quality_score: 85.0,
            current_status: BatchStatus::Dyed,
            current_location: "Natural Dyes Workshop".to_string(),
            journey_history: vec![
                step(
                    BatchStatus::Sheared,
                    "Highland Sheep Ranch",
                    "2023-05-16T11:20:00",
                    "John MacLeod",
                    None,
                ),
                step(
                    BatchStatus::Sorted,
                    "Highland Sheep Ranch",
                    "2023-05-17T14:30:00",
                    "Sarah Johnson",
                    None,
                ),
                step(
                    BatchStatus::Cleaned,
                    "CleanWool Facility",
                    "2023-05-26T09:45:00",
                    "Mike Thomson",
                    None,
                ),
                step(
                    BatchStatus::Processed,
                    "Yorkshire Processing Co.",
                    "2023-06-03T15:20:00",
                    "Yorkshire Team",
                    None,
                ),
                step(
                    BatchStatus::Spun,
                    "Traditional Spinners Ltd.",
                    "2023-06-15T13:10:00",
                    "Traditional Spinners Team",
                    None,
                ),
                step(
                    BatchStatus::Dyed,
                    "Natural Dyes Workshop",
                    "2023-06-28T10:40:00",
                    "Artisan Dye Team",
                    Some("Dyed with plant-based indigo"),
                ),
            ],
        },
    ]
}

fn demo_facilities() -> Vec<ProcessingFacility> {
    // 利用率统一按 kg 口径入库（历史百分比 × 产能折算）
    vec![
        ProcessingFacility {
            id: "facility-001".to_string(),
            name: "CleanWool Facility".to_string(),
            facility_type: FacilityType::Washing,
            location: "Leeds, UK".to_string(),
            capacity_kg: 2000.0,
            current_utilization_kg: 1300.0, // 65%
        },
        ProcessingFacility {
            id: "facility-002".to_string(),
            name: "Yorkshire Processing Co.".to_string(),
            facility_type: FacilityType::Processing,
            location: "Yorkshire, UK".to_string(),
            capacity_kg: 1800.0,
            current_utilization_kg: 1440.0, // 80%
        },
        ProcessingFacility {
            id: "facility-003".to_string(),
            name: "Traditional Spinners Ltd.".to_string(),
            facility_type: FacilityType::Spinning,
            location: "Manchester, UK".to_string(),
            capacity_kg: 1500.0,
            current_utilization_kg: 1050.0, // 70%
        },
        ProcessingFacility {
            id: "facility-004".to_string(),
            name: "Natural Dyes Workshop".to_string(),
            facility_type: FacilityType::Dyeing,
            location: "Bristol, UK".to_string(),
            capacity_kg: 800.0,
            current_utilization_kg: 360.0, // 45%
        },
        ProcessingFacility {
            id: "facility-005".to_string(),
            name: "Heritage Weavers".to_string(),
            facility_type: FacilityType::Weaving,
            location: "Edinburgh, UK".to_string(),
            capacity_kg: 1200.0,
            current_utilization_kg: 720.0, // 60%
        },
    ]
}
