// ==========================================
// 车皮编组优化系统 - 导入层
// ==========================================
// 职责: 外部表格数据导入,生成内部数据集
// 支持: CSV 文本 / CSV 文件
// ==========================================

// 模块声明
pub mod error;
pub mod table_parser;

// 重导出核心类型
pub use error::{ImportError, ImportResult};
pub use table_parser::TableParser;
