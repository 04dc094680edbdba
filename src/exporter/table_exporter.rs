// ==========================================
// 车皮编组优化系统 - 通用表格导出器
// ==========================================
// 职责: 宽松 JSON 行（或数据集行）-> CSV 文本
// 约定: wagons 数组以 | 拼接并整体加双引号
//       （唯一预期含内嵌分隔符的字段）,其余字段不加引号
// ==========================================

use crate::domain::dataset::format_number;
use crate::domain::Dataset;
use serde_json::Value;

/// 通用表格导出固定表头
pub const TABLE_EXPORT_HEADER: [&str; 5] =
    ["rake_id", "wagons", "destination", "material", "cost"];

/// 通用表格导出文件名约定
pub const TABLE_EXPORT_FILENAME: &str = "rake_plan.csv";

// ==========================================
// TableExporter - 通用表格导出器
// ==========================================
pub struct TableExporter;

impl TableExporter {
    /// 编码宽松 JSON 行为 CSV 文本
    ///
    /// 表头固定; 每条记录以 `\n` 结尾; 缺失字段编码为空串。
    /// wagons 的引号/拼接是单向变换,不保证回读还原;
    /// 其余标量列编码后重新解析可还原原值。
    pub fn encode(rows: &[Value]) -> String {
        let mut out = String::new();
        out.push_str(&TABLE_EXPORT_HEADER.join(","));
        out.push('\n');

        for row in rows {
            let wagons = match row.get("wagons") {
                Some(Value::Array(items)) => items
                    .iter()
                    .map(scalar_text)
                    .collect::<Vec<_>>()
                    .join("|"),
                Some(value) => scalar_text(value),
                None => String::new(),
            };

            let fields = [
                field_text(row, "rake_id"),
                format!("\"{}\"", wagons),
                field_text(row, "destination"),
                field_text(row, "material"),
                field_text(row, "cost"),
            ];

            out.push_str(&fields.join(","));
            out.push('\n');
        }

        out
    }

    /// 编码数据集行（标量单元格经 JSON 表示后走同一路径）
    pub fn encode_dataset(dataset: &Dataset) -> String {
        let rows: Vec<Value> = dataset
            .rows
            .iter()
            .map(|row| serde_json::to_value(row).unwrap_or(Value::Null))
            .collect();
        Self::encode(&rows)
    }
}

/// 按键取标量文本,缺失/null 编码为空串
fn field_text(row: &Value, key: &str) -> String {
    row.get(key).map(scalar_text).unwrap_or_default()
}

/// 标量值的导出文本化
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n
            .as_f64()
            .map(format_number)
            .unwrap_or_else(|| n.to_string()),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}
