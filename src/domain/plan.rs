// ==========================================
// 车皮编组优化系统 - 编组方案实体
// ==========================================
// 职责: 归一化后的优化结果表示
// 说明: 上游响应形态不受契约保证,除 rake_id 外字段皆可缺省
// ==========================================

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// 目的地字段
///
/// 历史上游响应既有字符串数组也有单个字符串,两种都接受。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Destinations {
    /// 多目的地
    Many(Vec<String>),
    /// 单目的地
    One(String),
}

impl Destinations {
    /// 按指定分隔符拼接为展示/导出文本
    pub fn joined(&self, sep: &str) -> String {
        match self {
            Destinations::Many(items) => items.join(sep),
            Destinations::One(s) => s.clone(),
        }
    }
}

/// 单个车皮编组的分派行
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanRow {
    /// 车皮编组编号（唯一必填字段,缺失时降级为空串）
    #[serde(default)]
    pub rake_id: String,
    /// 车辆类型
    #[serde(default)]
    pub wagon_type: Option<String>,
    /// 装车点
    #[serde(default)]
    pub loading_point: Option<String>,
    /// 目的地列表
    #[serde(default)]
    pub destinations: Option<Destinations>,
    /// 物料 -> 吨位
    #[serde(default)]
    pub materials: Option<BTreeMap<String, f64>>,
    /// 总吨位
    #[serde(default)]
    pub total_tonnage: Option<f64>,
    /// 总费用
    #[serde(default)]
    pub total_cost: Option<f64>,
    /// 发运日期（不透明文本,原样透传）
    #[serde(default)]
    pub dispatch_date: Option<String>,
    /// 装载率（百分比）
    #[serde(default)]
    pub fill_percent: Option<f64>,
    /// 是否满足最小编组吨位
    #[serde(default)]
    pub meets_min_size: Option<bool>,
}

/// 费用汇总
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanTotals {
    /// 优化后总费用
    pub total_cost: f64,
    /// 基线费用（缺省时等于优化后费用,即零节省）
    pub before_cost: f64,
    /// 节省额,永不为负
    pub savings: f64,
    /// 节省百分比（四舍五入取整）
    pub savings_percent: f64,
}

/// 车皮利用率条目
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UtilizationEntry {
    pub rake_id: String,
    pub fill_percent: f64,
}

/// 生产建议条目
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub title: String,
    pub reason: String,
    pub action: String,
}

// ==========================================
// PlanResult - 归一化后的优化结果
// ==========================================

/// 归一化后的优化结果（规范形态）
///
/// 每次优化成功构造一次,整体替换上一次结果; 重置时清空。
/// 所有字段必定在场,缺失的上游字段落到类型化默认值。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanResult {
    /// 编组方案行
    pub plan: Vec<PlanRow>,
    /// 费用汇总
    pub totals: PlanTotals,
    /// 目的地 -> 物流费用
    pub cost_by_destination: BTreeMap<String, f64>,
    /// 车皮利用率
    pub utilization: Vec<UtilizationEntry>,
    /// 发运排程（形态不定,原样保留,默认空数组）
    pub dispatch_schedule: Value,
    /// 分配矩阵（形态不定,原样保留,默认空对象）
    pub matrix: Value,
    /// 生产建议
    pub suggestions: Vec<Suggestion>,
    /// 未满足订单（形态不定,原样保留,默认空数组）
    pub unfulfilled_orders: Value,
}

impl Default for PlanResult {
    fn default() -> Self {
        Self {
            plan: Vec::new(),
            totals: PlanTotals::default(),
            cost_by_destination: BTreeMap::new(),
            utilization: Vec::new(),
            dispatch_schedule: Value::Array(Vec::new()),
            matrix: Value::Object(serde_json::Map::new()),
            suggestions: Vec::new(),
            unfulfilled_orders: Value::Array(Vec::new()),
        }
    }
}
