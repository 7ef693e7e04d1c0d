// ==========================================
// 查询筛选端到端测试
// ==========================================
// 测试范围:
// 1. 经仓储往返后的筛选行为（恒等/幂等/顺序保持）
// 2. 设施查询: list_facilities, get_facility
// ==========================================

mod helpers;

use helpers::api_test_helper::ApiTestEnv;
use helpers::test_data_builder::{BatchBuilder, FacilityBuilder, FarmBuilder};
use wool_tracer::api::ApiError;
use wool_tracer::domain::types::BatchStatus;

fn seed_farms_and_batches(env: &ApiTestEnv) {
    for (id, name, location) in [
        ("farm-001", "Highland Sheep Ranch", "Scottish Highlands"),
        ("farm-002", "Green Valley Wool", "Wales"),
        ("farm-003", "Alpine Merino Farm", "Southern Alps, New Zealand"),
    ] {
        env.farm_repo
            .create(&FarmBuilder::new(id).name(name).location(location).build())
            .expect("准备数据失败");
    }

    env.batch_repo
        .create(
            &BatchBuilder::new("batch-001", "farm-001")
                .step(BatchStatus::Processed, "Yorkshire Processing Co.", "2023-06-02T13:40:00")
                .build(),
        )
        .expect("准备数据失败");
    env.batch_repo
        .create(
            &BatchBuilder::new("batch-002", "farm-002")
                .step(BatchStatus::Spun, "Traditional Spinners Ltd.", "2023-05-30T09:50:00")
                .build(),
        )
        .expect("准备数据失败");
    env.batch_repo
        .create(
            &BatchBuilder::new("batch-003", "farm-003")
                .step(BatchStatus::Cleaned, "EcoClean Wool Services", "2023-06-12T10:30:00")
                .build(),
        )
        .expect("准备数据失败");
}

// ==========================================
// 筛选性质测试
// ==========================================

#[test]
fn test_空词筛选_恒等且顺序保持() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");
    seed_farms_and_batches(&env);

    let all = env.batch_api.list_batches().expect("查询失败");
    let filtered = env.batch_api.search_batches("").expect("筛选失败");
    assert_eq!(all.len(), filtered.len());
    let all_ids: Vec<_> = all.iter().map(|b| b.id.as_str()).collect();
    let filtered_ids: Vec<_> = filtered.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(all_ids, filtered_ids);
    assert_eq!(all_ids, vec!["batch-001", "batch-002", "batch-003"]);
}

#[test]
fn test_筛选_幂等() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");
    seed_farms_and_batches(&env);

    // 同一搜索词两次筛选结果一致
    let once = env.batch_api.search_batches("clean").expect("筛选失败");
    let twice = wool_tracer::filter_batches(&once, "clean");
    assert_eq!(once.len(), twice.len());
    for (a, b) in once.iter().zip(twice.iter()) {
        assert_eq!(a.id, b.id);
    }
}

#[test]
fn test_牧场筛选_名称与所在地() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");
    seed_farms_and_batches(&env);

    let result = env.farm_api.search_farms("merino").expect("筛选失败");
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, "farm-003");

    let result = env.farm_api.search_farms("new zealand").expect("筛选失败");
    assert_eq!(result.len(), 1);

    // 未命中返回空集而非错误
    let result = env.farm_api.search_farms("alpaca").expect("筛选失败");
    assert!(result.is_empty());
}

// ==========================================
// 设施查询测试
// ==========================================

#[test]
fn test_list_facilities_按录入顺序() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");

    for id in ["facility-001", "facility-002", "facility-003"] {
        env.facility_repo
            .create(&FacilityBuilder::new(id).build())
            .expect("准备数据失败");
    }

    let facilities = env.facility_api.list_facilities().expect("查询失败");
    let ids: Vec<&str> = facilities.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, vec!["facility-001", "facility-002", "facility-003"]);
}

#[test]
fn test_get_facility_利用率派生() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");

    env.facility_repo
        .create(
            &FacilityBuilder::new("facility-001")
                .capacity(2000.0)
                .utilization(1300.0)
                .build(),
        )
        .expect("准备数据失败");

    let facility = env
        .facility_api
        .get_facility("facility-001")
        .expect("查询失败");
    assert_eq!(facility.capacity_kg, 2000.0);
    assert_eq!(facility.utilization_percent(), 65.0);

    let err = env.facility_api.get_facility("facility-999").unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}
