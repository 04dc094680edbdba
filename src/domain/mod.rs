// ==========================================
// 车皮编组优化系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体与类型
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod balance;
pub mod dataset;
pub mod plan;
pub mod types;

// 重导出核心类型
pub use balance::MaterialBalanceRow;
pub use dataset::{CellValue, Dataset, Row};
pub use plan::{
    Destinations, PlanResult, PlanRow, PlanTotals, Suggestion, UtilizationEntry,
};
pub use types::DatasetKind;
