// ==========================================
// FarmApi 集成测试
// ==========================================
// 测试范围:
// 1. 牧场录入工作流: create_farm（校验/ID 派生/显式 ID 冲突）
// 2. 牧场查询: list_farms, get_farm, search_farms
// ==========================================

mod helpers;

use helpers::api_test_helper::ApiTestEnv;
use helpers::test_data_builder::FarmBuilder;
use wool_tracer::api::ApiError;
use wool_tracer::engine::intake::{NewFarmInput, DEFAULT_FARM_PHOTO};

fn farm_input(name: &str, email: &str) -> NewFarmInput {
    NewFarmInput {
        id: None,
        name: name.to_string(),
        location: "Scottish Highlands".to_string(),
        sheep_count: 1250,
        annual_production: 5600.0,
        contact_person: "John MacLeod".to_string(),
        contact_email: email.to_string(),
        certifications: "Organic, Sustainable Farming".to_string(),
        photo: None,
    }
}

// ==========================================
// 录入工作流测试
// ==========================================

#[test]
fn test_create_farm_正常录入() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");

    // 先有一条已存在记录，派生 ID 从其后缀递增
    env.farm_repo
        .create(&FarmBuilder::new("farm-003").build())
        .expect("准备数据失败");

    let farm = env
        .farm_api
        .create_farm(farm_input("Highland Sheep Ranch", "john@highlandsheep.com"))
        .expect("录入失败");

    assert_eq!(farm.id, "farm-004");
    assert_eq!(farm.name, "Highland Sheep Ranch");
    assert_eq!(
        farm.certifications,
        vec!["Organic".to_string(), "Sustainable Farming".to_string()]
    );
    assert_eq!(farm.photo, DEFAULT_FARM_PHOTO);

    // 入库可查
    let found = env.farm_api.get_farm("farm-004").expect("查询失败");
    assert_eq!(found.contact_email, "john@highlandsheep.com");
}

#[test]
fn test_create_farm_空集合无法派生ID() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");

    // 集合为空且未提供显式 ID: 报字段级校验错误而非崩溃
    let err = env
        .farm_api
        .create_farm(farm_input("Highland Sheep Ranch", "john@highlandsheep.com"))
        .unwrap_err();
    assert!(matches!(err, ApiError::ValidationError { ref field, .. } if field == "id"));
}

#[test]
fn test_create_farm_显式ID与冲突() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");

    let mut input = farm_input("Highland Sheep Ranch", "john@highlandsheep.com");
    input.id = Some("farm-001".to_string());
    let farm = env.farm_api.create_farm(input.clone()).expect("录入失败");
    assert_eq!(farm.id, "farm-001");

    // 相同显式 ID 再次录入: Conflict
    let err = env.farm_api.create_farm(input).unwrap_err();
    assert!(matches!(err, ApiError::Conflict(_)));
}

#[test]
fn test_create_farm_字段校验拒绝() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");

    // 邮箱格式无效
    let err = env
        .farm_api
        .create_farm(farm_input("Highland Sheep Ranch", "not-an-email"))
        .unwrap_err();
    assert!(matches!(err, ApiError::ValidationError { ref field, .. } if field == "contactEmail"));

    // 名称过短
    let err = env
        .farm_api
        .create_farm(farm_input("AB", "john@highlandsheep.com"))
        .unwrap_err();
    assert!(matches!(err, ApiError::ValidationError { ref field, .. } if field == "name"));

    // 拒绝的录入不产生记录
    assert!(env.farm_api.list_farms().expect("查询失败").is_empty());
}

// ==========================================
// 查询测试
// ==========================================

#[test]
fn test_list_farms_按录入顺序() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");

    for id in ["farm-001", "farm-002", "farm-003"] {
        env.farm_repo
            .create(&FarmBuilder::new(id).build())
            .expect("准备数据失败");
    }

    let farms = env.farm_api.list_farms().expect("查询失败");
    let ids: Vec<&str> = farms.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, vec!["farm-001", "farm-002", "farm-003"]);
}

#[test]
fn test_get_farm_不存在() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");

    let err = env.farm_api.get_farm("farm-999").unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));

    let err = env.farm_api.get_farm("  ").unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput(_)));
}

#[test]
fn test_search_farms_大小写不敏感() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");

    env.farm_repo
        .create(
            &FarmBuilder::new("farm-001")
                .name("Highland Sheep Ranch")
                .location("Scottish Highlands")
                .build(),
        )
        .expect("准备数据失败");
    env.farm_repo
        .create(
            &FarmBuilder::new("farm-002")
                .name("Green Valley Wool")
                .location("Wales")
                .build(),
        )
        .expect("准备数据失败");

    // name 命中（大小写不敏感）
    let result = env.farm_api.search_farms("highland").expect("筛选失败");
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, "farm-001");

    // location 命中
    let result = env.farm_api.search_farms("WALES").expect("筛选失败");
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, "farm-002");

    // 空词返回全集
    let result = env.farm_api.search_farms("   ").expect("筛选失败");
    assert_eq!(result.len(), 2);
}
