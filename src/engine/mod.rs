// ==========================================
// 车皮编组优化系统 - 引擎层
// ==========================================
// 职责: 请求装配 / 响应归一化 / 派生指标计算
// 红线: 引擎无状态、纯函数,不持有会话数据
// ==========================================

pub mod analytics;
pub mod payload_builder;
pub mod response_normalizer;

// 重导出核心引擎
pub use analytics::AnalyticsAggregator;
pub use payload_builder::{OptimizationRequest, PayloadBuilder, PayloadError};
pub use response_normalizer::ResponseNormalizer;
