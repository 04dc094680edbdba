// ==========================================
// 车皮编组优化系统 - 响应归一化引擎
// ==========================================
// 职责: 任意形态的优化服务 JSON -> 规范 PlanResult
// 背景: 上游响应形态历经多次变迁,同一逻辑字段可能出现在
//       多个键路径; 归一化必须容忍全部历史形态,永不失败
// 策略: 每个字段一条显式有序访问路径链,依序尝试,
//       首个命中即停,末位落到类型化默认值
// ==========================================

use crate::domain::{Destinations, PlanResult, PlanRow, PlanTotals, Suggestion, UtilizationEntry};
use serde_json::Value;
use std::collections::BTreeMap;

/// 字段解析路径链: 依序尝试的键路径列表
type FieldPaths = &'static [&'static [&'static str]];

// ===== 费用字段路径链 =====
const TOTAL_COST: FieldPaths = &[&["total_cost"], &["totals", "totalCost"]];
const BEFORE_COST: FieldPaths = &[&["before_cost"], &["totals", "beforeCost"]];

// ===== 分析字段路径链: 顶层 snake_case,其次 analytics 下同名键 =====
const COST_BY_DESTINATION: FieldPaths = &[
    &["cost_by_destination"],
    &["analytics", "cost_by_destination"],
];
const UTILIZATION: FieldPaths = &[&["utilization"], &["analytics", "utilization"]];
const DISPATCH_SCHEDULE: FieldPaths = &[
    &["dispatch_schedule"],
    &["analytics", "dispatch_schedule"],
];
const MATRIX: FieldPaths = &[&["matrix"], &["analytics", "matrix"]];
const SUGGESTIONS: FieldPaths = &[&["suggestions"], &["analytics", "suggestions"]];
const UNFULFILLED_ORDERS: FieldPaths = &[
    &["unfulfilled_orders"],
    &["analytics", "unfulfilled_orders"],
];

// ==========================================
// ResponseNormalizer - 响应归一化引擎
// ==========================================
pub struct ResponseNormalizer;

impl ResponseNormalizer {
    /// 归一化优化服务响应
    ///
    /// 全函数不失败: 缺失/改名/形态漂移一律吸收为默认值,
    /// 调用方永远拿到字段齐全的 PlanResult。
    pub fn normalize(raw: &Value) -> PlanResult {
        let plan = raw
            .get("plan")
            .and_then(Value::as_array)
            .map(|items| items.iter().map(Self::plan_row_from).collect())
            .unwrap_or_default();

        let total_cost = numeric_at(raw, TOTAL_COST).unwrap_or(0.0);
        // 无基线费用时视为零节省
        let before_cost = numeric_at(raw, BEFORE_COST).unwrap_or(total_cost);
        let savings = (before_cost - total_cost).max(0.0);
        let savings_percent = if before_cost != 0.0 {
            (savings / before_cost * 100.0).round()
        } else {
            0.0
        };

        PlanResult {
            plan,
            totals: PlanTotals {
                total_cost,
                before_cost,
                savings,
                savings_percent,
            },
            cost_by_destination: Self::cost_map_at(raw, COST_BY_DESTINATION),
            utilization: Self::utilization_at(raw, UTILIZATION),
            dispatch_schedule: lookup(raw, DISPATCH_SCHEDULE)
                .cloned()
                .unwrap_or_else(|| Value::Array(Vec::new())),
            matrix: lookup(raw, MATRIX)
                .cloned()
                .unwrap_or_else(|| Value::Object(serde_json::Map::new())),
            suggestions: Self::suggestions_at(raw, SUGGESTIONS),
            unfulfilled_orders: lookup(raw, UNFULFILLED_ORDERS)
                .cloned()
                .unwrap_or_else(|| Value::Array(Vec::new())),
        }
    }

    /// 宽松解析单个方案行
    ///
    /// 字段逐个降级: 不可用的字段落为 None,rake_id 落为空串,
    /// 永不使整行失败。
    fn plan_row_from(value: &Value) -> PlanRow {
        PlanRow {
            rake_id: text_field(value, "rake_id").unwrap_or_default(),
            wagon_type: text_field(value, "wagon_type"),
            loading_point: text_field(value, "loading_point"),
            destinations: Self::destinations_from(value.get("destinations")),
            materials: Self::materials_from(value.get("materials")),
            total_tonnage: value.get("total_tonnage").and_then(value_as_f64),
            total_cost: value.get("total_cost").and_then(value_as_f64),
            dispatch_date: text_field(value, "dispatch_date"),
            fill_percent: value.get("fill_percent").and_then(value_as_f64),
            meets_min_size: value.get("meets_min_size").and_then(Value::as_bool),
        }
    }

    /// destinations 既可能是字符串数组也可能是单个字符串
    fn destinations_from(value: Option<&Value>) -> Option<Destinations> {
        match value {
            Some(Value::Array(items)) => Some(Destinations::Many(
                items.iter().map(value_to_text).collect(),
            )),
            Some(Value::String(s)) => Some(Destinations::One(s.clone())),
            _ => None,
        }
    }

    /// materials: 物料 -> 吨位,非数值条目丢弃
    fn materials_from(value: Option<&Value>) -> Option<BTreeMap<String, f64>> {
        let map = value?.as_object()?;
        Some(
            map.iter()
                .filter_map(|(k, v)| value_as_f64(v).map(|n| (k.clone(), n)))
                .collect(),
        )
    }

    fn cost_map_at(raw: &Value, paths: FieldPaths) -> BTreeMap<String, f64> {
        lookup(raw, paths)
            .and_then(Value::as_object)
            .map(|map| {
                map.iter()
                    .filter_map(|(k, v)| value_as_f64(v).map(|n| (k.clone(), n)))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn utilization_at(raw: &Value, paths: FieldPaths) -> Vec<UtilizationEntry> {
        lookup(raw, paths)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .map(|item| UtilizationEntry {
                        rake_id: text_field(item, "rake_id").unwrap_or_default(),
                        fill_percent: item.get("fill_percent").and_then(value_as_f64).unwrap_or(0.0),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    fn suggestions_at(raw: &Value, paths: FieldPaths) -> Vec<Suggestion> {
        lookup(raw, paths)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .map(|item| Suggestion {
                        title: text_field(item, "title").unwrap_or_default(),
                        reason: text_field(item, "reason").unwrap_or_default(),
                        action: text_field(item, "action").unwrap_or_default(),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

// ==========================================
// 路径链解析辅助
// ==========================================

/// 依序尝试各键路径,返回第一个存在且非 null 的值
fn lookup<'a>(raw: &'a Value, paths: FieldPaths) -> Option<&'a Value> {
    for path in paths {
        let mut current = raw;
        let mut found = true;
        for key in *path {
            match current.get(key) {
                Some(next) => current = next,
                None => {
                    found = false;
                    break;
                }
            }
        }
        if found && !current.is_null() {
            return Some(current);
        }
    }
    None
}

/// 路径链上第一个可取数值的字段
fn numeric_at(raw: &Value, paths: FieldPaths) -> Option<f64> {
    for path in paths {
        let mut current = raw;
        let mut found = true;
        for key in *path {
            match current.get(key) {
                Some(next) => current = next,
                None => {
                    found = false;
                    break;
                }
            }
        }
        if found {
            if let Some(n) = value_as_f64(current) {
                return Some(n);
            }
        }
    }
    None
}

/// 宽松取数: JSON 数值或整串数值文本
fn value_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
        }
        _ => None,
    }
}

/// 宽松取文本: 字符串原样,数值转十进制文本,其余视为缺失
fn text_field(value: &Value, key: &str) -> Option<String> {
    match value.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// 数组元素的文本化（destinations 等字符串列表使用）
fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}
