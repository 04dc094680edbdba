// ==========================================
// 车皮编组优化系统 - 核心库
// ==========================================
// 系统定位: 决策支持系统 (优化算法在远端,人工最终控制权)
// 管线: 导入 -> 归一化 -> 聚合 -> 导出
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 导入层 - 外部表格数据
pub mod importer;

// 存储层 - 数据集槽位
pub mod store;

// 配置层 - 约束与端点
pub mod config;

// 引擎层 - 请求装配/响应归一化/指标聚合
pub mod engine;

// 导出层 - CSV 再编码
pub mod exporter;

// 客户端层 - 远端优化服务
pub mod client;

// 应用层 - 会话与编排
pub mod app;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    CellValue, Dataset, DatasetKind, MaterialBalanceRow, PlanResult, PlanRow, Row,
};

// 配置
pub use config::{Constraints, OptimizerSettings, WagonAvailability};

// 管线组件
pub use client::{HttpOptimizer, OptimizerError, PlanOptimizer, SampleSource};
pub use engine::{
    AnalyticsAggregator, OptimizationRequest, PayloadBuilder, PayloadError, ResponseNormalizer,
};
pub use exporter::{PlanExporter, TableExporter};
pub use importer::{ImportError, TableParser};
pub use store::DatasetStore;

// 会话
pub use app::SessionState;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "车皮编组优化系统";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
