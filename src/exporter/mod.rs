// ==========================================
// 车皮编组优化系统 - 导出层
// ==========================================
// 职责: PlanResult 方案行 / 原始数据集 -> 下载用分隔文本
// 说明: 两个导出目标的引号与数组拼接约定历史上不一致,
//       按导出目标各自保留,不做统一
// ==========================================

pub mod plan_exporter;
pub mod table_exporter;

pub use plan_exporter::{PlanExporter, PLAN_EXPORT_FILENAME};
pub use table_exporter::{TableExporter, TABLE_EXPORT_FILENAME};
