// ==========================================
// 车皮编组优化系统 - 指标聚合引擎
// ==========================================
// 职责: 跨数据集派生指标（物料平衡 / 库存汇总 / 平均装载率）
// 说明: 独立于优化调用,订单或堆场数据变化时整体重算
// ==========================================

use crate::domain::dataset::{row_num, row_text};
use crate::domain::{MaterialBalanceRow, PlanResult, Row};
use std::collections::HashMap;

// ==========================================
// AnalyticsAggregator - 指标聚合引擎
// ==========================================
pub struct AnalyticsAggregator;

impl AnalyticsAggregator {
    /// 物料平衡表
    ///
    /// 按 material 汇总订单 `quantity` 为需求、堆场
    /// `quantity_available` 为库存; 输出覆盖两侧键集的并集,
    /// 单侧缺失按 0 计。行序为并集插入序（先订单后堆场,
    /// 各按首次出现顺序）,对给定输入确定。
    pub fn material_balance(orders: &[Row], stockyards: &[Row]) -> Vec<MaterialBalanceRow> {
        let mut material_order: Vec<String> = Vec::new();
        let mut required: HashMap<String, f64> = HashMap::new();
        let mut available: HashMap<String, f64> = HashMap::new();

        for row in orders {
            let material = row_text(row, "material");
            if !required.contains_key(&material) {
                material_order.push(material.clone());
            }
            // 非数值/缺失的数量按 0 计
            *required.entry(material).or_insert(0.0) += row_num(row, "quantity");
        }

        for row in stockyards {
            let material = row_text(row, "material");
            if !required.contains_key(&material) && !available.contains_key(&material) {
                material_order.push(material.clone());
            }
            *available.entry(material).or_insert(0.0) += row_num(row, "quantity_available");
        }

        material_order
            .into_iter()
            .map(|material| {
                let required_t = required.get(&material).copied().unwrap_or(0.0);
                let available_t = available.get(&material).copied().unwrap_or(0.0);
                MaterialBalanceRow {
                    balance: available_t - required_t,
                    material,
                    required: required_t,
                    available: available_t,
                }
            })
            .collect()
    }

    /// 堆场库存总吨位
    pub fn total_stock_tonnage(stockyards: &[Row]) -> f64 {
        stockyards
            .iter()
            .map(|row| row_num(row, "quantity_available"))
            .sum()
    }

    /// 按物料汇总的可用吨位（首次出现顺序,供可视化使用）
    pub fn available_by_material(stockyards: &[Row]) -> Vec<(String, f64)> {
        let mut order: Vec<String> = Vec::new();
        let mut totals: HashMap<String, f64> = HashMap::new();

        for row in stockyards {
            let material = row_text(row, "material");
            if !totals.contains_key(&material) {
                order.push(material.clone());
            }
            *totals.entry(material).or_insert(0.0) += row_num(row, "quantity_available");
        }

        order
            .into_iter()
            .map(|material| {
                let tonnage = totals.get(&material).copied().unwrap_or(0.0);
                (material, tonnage)
            })
            .collect()
    }

    /// 平均车皮装载率（四舍五入取整,无数据时为 0）
    pub fn average_fill_percent(result: &PlanResult) -> f64 {
        if result.utilization.is_empty() {
            return 0.0;
        }
        let sum: f64 = result.utilization.iter().map(|u| u.fill_percent).sum();
        (sum / result.utilization.len() as f64).round()
    }
}
