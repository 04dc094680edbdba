// ==========================================
// TableParser 解析器集成测试
// ==========================================
// 测试目标: 表头驱动解析 / 逐格数值判定 / 文件导入
// ==========================================

use rake_aps::{CellValue, TableParser};
use std::io::Write;

#[test]
fn test_row_count_matches_data_lines() {
    let text = include_str!("fixtures/orders.csv");
    let dataset = TableParser::parse(text);

    assert_eq!(dataset.rows.len(), 5);
    assert_eq!(
        dataset.columns,
        vec![
            "order_id",
            "material",
            "quantity",
            "due_date",
            "priority",
            "destination",
            "transport_mode"
        ]
    );
}

#[test]
fn test_header_cells_trimmed_in_original_order() {
    let dataset = TableParser::parse(" b , a ,b\n1,2,3\n");
    // 列序保留首次出现位置,重名列同键覆盖（后者生效）
    assert_eq!(dataset.columns, vec!["b", "a", "b"]);
    assert_eq!(dataset.rows[0].get("a"), Some(&CellValue::Num(2.0)));
    assert_eq!(dataset.rows[0].get("b"), Some(&CellValue::Num(3.0)));
}

#[test]
fn test_cell_coercion_rules() {
    let dataset = TableParser::parse("a,b,c\n42,4a2,\n");
    let row = &dataset.rows[0];

    assert_eq!(row.get("a"), Some(&CellValue::Num(42.0)));
    assert_eq!(row.get("b"), Some(&CellValue::Text("4a2".to_string())));
    assert_eq!(row.get("c"), Some(&CellValue::Text(String::new())));
}

#[test]
fn test_embedded_comma_splits_field() {
    // 朴素切分的已知限制: 字段内嵌逗号会被切开
    let dataset = TableParser::parse("a,b\nx,y,z\n");
    assert_eq!(dataset.rows.len(), 1);
    assert_eq!(
        dataset.rows[0].get("b"),
        Some(&CellValue::Text("y".to_string()))
    );
}

#[test]
fn test_parse_file_roundtrip() {
    let dir = tempfile::tempdir().expect("创建临时目录失败");
    let path = dir.path().join("orders.csv");
    let mut file = std::fs::File::create(&path).expect("创建临时文件失败");
    write!(file, "material,quantity\nHR Coil,420\n").expect("写入失败");

    let dataset = TableParser::parse_file(&path).expect("解析文件失败");
    assert_eq!(dataset.rows.len(), 1);
    assert_eq!(
        dataset.rows[0].get("quantity"),
        Some(&CellValue::Num(420.0))
    );
}

#[test]
fn test_parse_file_missing() {
    let err = TableParser::parse_file(std::path::Path::new("no_such_file.csv"))
        .expect_err("不存在的文件应当报错");
    assert!(err.to_string().contains("no_such_file.csv"));
}

#[test]
fn test_parse_file_wrong_extension() {
    let dir = tempfile::tempdir().expect("创建临时目录失败");
    let path = dir.path().join("orders.xlsx");
    std::fs::File::create(&path).expect("创建临时文件失败");

    assert!(TableParser::parse_file(&path).is_err());
}
