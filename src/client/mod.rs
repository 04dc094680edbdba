// ==========================================
// 车皮编组优化系统 - 优化服务客户端层
// ==========================================
// 职责: 与远端优化服务的全部交互
// 说明: 优化算法本身是外部协作方,这里只定义请求/响应契约
// ==========================================

pub mod error;
pub mod http_optimizer;

pub use error::OptimizerError;
pub use http_optimizer::HttpOptimizer;

use crate::engine::OptimizationRequest;
use async_trait::async_trait;
use serde_json::Value;

/// 优化服务抽象接口
///
/// 测试与离线场景可注入替身实现; 返回的 JSON 不做形态约束,
/// 由归一化引擎统一吸收。
#[async_trait]
pub trait PlanOptimizer: Send + Sync {
    /// 提交优化请求,返回原始响应 JSON
    async fn optimize(&self, request: &OptimizationRequest) -> Result<Value, OptimizerError>;
}

/// 样例数据源抽象接口
///
/// 拉取静态 CSV 样例资源; 非 2xx 或传输失败直接返回错误,
/// 调用方不得落入部分状态。
#[async_trait]
pub trait SampleSource: Send + Sync {
    /// 拉取样例 CSV 全文
    async fn fetch_sample_csv(&self, url: &str) -> Result<String, OptimizerError>;
}
