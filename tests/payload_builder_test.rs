// ==========================================
// PayloadBuilder 请求装配集成测试
// ==========================================
// 测试目标: 固定顺序的就绪校验 / 按值拷贝隔离 / 序列化键名
// ==========================================

use rake_aps::{
    Constraints, DatasetKind, DatasetStore, PayloadBuilder, PayloadError, TableParser,
    WagonAvailability,
};

/// 构造一个全部槽位就绪的存储
fn ready_store() -> DatasetStore {
    let mut store = DatasetStore::new();
    store.load(
        DatasetKind::Orders,
        TableParser::parse(include_str!("fixtures/orders.csv")),
    );
    store.load(
        DatasetKind::Stockyards,
        TableParser::parse(include_str!("fixtures/stockyards.csv")),
    );
    store.load(
        DatasetKind::LoadingPoints,
        TableParser::parse(include_str!("fixtures/loading_points.csv")),
    );
    store.load(
        DatasetKind::Rakes,
        TableParser::parse(include_str!("fixtures/rakes.csv")),
    );
    store.load(
        DatasetKind::Costs,
        TableParser::parse(include_str!("fixtures/costs.csv")),
    );
    store
}

#[test]
fn test_build_success_copies_rows() {
    let store = ready_store();
    let request = PayloadBuilder::build(
        &store,
        &Constraints::default(),
        &WagonAvailability::default(),
    )
    .expect("全部就绪时应当装配成功");

    assert_eq!(request.orders.len(), 5);
    assert_eq!(request.stockyards.len(), 4);
    assert_eq!(request.loading_points.len(), 3);
    assert_eq!(request.rakes.len(), 3);
    assert_eq!(request.costs.len(), 5);
}

#[test]
fn test_missing_stockyards_named_specifically() {
    let mut store = ready_store();
    store.load(DatasetKind::Stockyards, rake_aps::Dataset::empty());

    let err = PayloadBuilder::build(
        &store,
        &Constraints::default(),
        &WagonAvailability::default(),
    )
    .expect_err("stockyards 为空时应当失败");

    assert_eq!(
        err,
        PayloadError::IncompleteDataset {
            missing: "stockyards"
        }
    );
    assert!(err.to_string().contains("stockyards"));
}

#[test]
fn test_empty_store_reports_orders_first() {
    let store = DatasetStore::new();
    let err = PayloadBuilder::build(
        &store,
        &Constraints::default(),
        &WagonAvailability::default(),
    )
    .expect_err("空存储应当失败");

    assert_eq!(err, PayloadError::IncompleteDataset { missing: "orders" });
}

#[test]
fn test_config_copied_by_value() {
    let store = ready_store();
    let mut constraints = Constraints::default();
    let mut availability = WagonAvailability::default();

    let request = PayloadBuilder::build(&store, &constraints, &availability)
        .expect("装配失败");

    // 在途请求不受后续配置修改影响
    constraints.min_rake_tonnage = 9999.0;
    availability.set("BOXN", false);

    assert_eq!(request.constraints.min_rake_tonnage, 1800.0);
    assert!(request.wagon_availability.is_available("BOXN"));
}

#[test]
fn test_request_serialization_keys() {
    let store = ready_store();
    let request = PayloadBuilder::build(
        &store,
        &Constraints::default(),
        &WagonAvailability::default(),
    )
    .expect("装配失败");

    let json = serde_json::to_value(&request).expect("序列化失败");
    assert!(json.get("loading_points").is_some());
    assert!(json.get("wagon_availability").is_some());
    // 约束字段使用前端约定的驼峰键名
    assert_eq!(
        json.pointer("/constraints/minRakeTonnage"),
        Some(&serde_json::json!(1800.0))
    );
    assert_eq!(
        json.pointer("/constraints/sidingCapacity"),
        Some(&serde_json::json!(600.0))
    );
}
