// ==========================================
// 车皮编组优化系统 - 物料平衡实体
// ==========================================
// 职责: 需求与库存对照的派生结果
// 说明: 派生数据,订单或堆场变化时整体重算,不原地修改
// ==========================================

use serde::{Deserialize, Serialize};

/// 单物料的需求/库存平衡行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialBalanceRow {
    /// 物料名称
    pub material: String,
    /// 订单需求吨位
    pub required: f64,
    /// 堆场可用吨位
    pub available: f64,
    /// 平衡 = available - required
    pub balance: f64,
}
