// ==========================================
// 车皮编组优化系统 - 请求装配引擎
// ==========================================
// 职责: 数据集存储 + 配置 -> 一次性优化请求
// 输入: DatasetStore / Constraints / WagonAvailability
// 输出: OptimizationRequest 或命名第一个缺失数据集的校验错误
// ==========================================

use crate::config::{Constraints, WagonAvailability};
use crate::domain::{DatasetKind, Row};
use crate::store::DatasetStore;
use serde::Serialize;
use thiserror::Error;

/// 请求装配错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PayloadError {
    /// 按固定枚举顺序报告的第一个未就绪数据集
    #[error("数据集 {missing} 没有可用数据,请先上传或加载样例数据")]
    IncompleteDataset { missing: &'static str },
}

/// 发往优化服务的请求体
///
/// 每次调用重新构建,不持久化; 行与配置均按值拷入,
/// 请求在途期间修改存储或配置不影响已发出的请求。
#[derive(Debug, Clone, Serialize)]
pub struct OptimizationRequest {
    pub orders: Vec<Row>,
    pub stockyards: Vec<Row>,
    pub loading_points: Vec<Row>,
    pub rakes: Vec<Row>,
    pub costs: Vec<Row>,
    pub constraints: Constraints,
    pub wagon_availability: WagonAvailability,
}

// ==========================================
// PayloadBuilder - 请求装配引擎
// ==========================================
pub struct PayloadBuilder;

impl PayloadBuilder {
    /// 装配优化请求
    ///
    /// 校验顺序固定为 orders, stockyards, loadingPoints, rakes, costs,
    /// 保证错误信息跨运行可复现。
    pub fn build(
        store: &DatasetStore,
        constraints: &Constraints,
        wagon_availability: &WagonAvailability,
    ) -> Result<OptimizationRequest, PayloadError> {
        if let Some(kind) = store.first_missing() {
            return Err(PayloadError::IncompleteDataset {
                missing: kind.key(),
            });
        }

        Ok(OptimizationRequest {
            orders: store.get(DatasetKind::Orders).rows.clone(),
            stockyards: store.get(DatasetKind::Stockyards).rows.clone(),
            loading_points: store.get(DatasetKind::LoadingPoints).rows.clone(),
            rakes: store.get(DatasetKind::Rakes).rows.clone(),
            costs: store.get(DatasetKind::Costs).rows.clone(),
            constraints: constraints.clone(),
            wagon_availability: wagon_availability.clone(),
        })
    }
}
