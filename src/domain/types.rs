// ==========================================
// 车皮编组优化系统 - 基础类型定义
// ==========================================
// 职责: 枚举类型与固定顺序定义
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

/// 数据集槽位
///
/// 五个槽位的枚举顺序是固定契约: 校验按此顺序报告第一个
/// 缺失的数据集,保证错误信息跨运行可复现。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DatasetKind {
    /// 客户订单
    Orders,
    /// 堆场库存
    Stockyards,
    /// 装车点能力
    LoadingPoints,
    /// 车皮/车辆台账
    Rakes,
    /// 费用表
    Costs,
}

impl DatasetKind {
    /// 固定枚举顺序（校验顺序即此顺序）
    pub const ALL: [DatasetKind; 5] = [
        DatasetKind::Orders,
        DatasetKind::Stockyards,
        DatasetKind::LoadingPoints,
        DatasetKind::Rakes,
        DatasetKind::Costs,
    ];

    /// 槽位键名（与前端上传控件的 datasetKey 一致）
    pub fn key(&self) -> &'static str {
        match self {
            DatasetKind::Orders => "orders",
            DatasetKind::Stockyards => "stockyards",
            DatasetKind::LoadingPoints => "loadingPoints",
            DatasetKind::Rakes => "rakes",
            DatasetKind::Costs => "costs",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
