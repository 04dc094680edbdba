// ==========================================
// 车皮编组优化系统 - 数据集实体
// ==========================================
// 职责: 表格数据的内存表示
// 约定: 单元格类型在解析时逐格判定,同一列允许混合类型
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 单元格值
///
/// 数值判定按单元格独立进行: 整串可解析为有限浮点数的非空文本
/// 视为数值,其余保持文本。空串永远保持空串,不折算为 0。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// 数值单元格
    Num(f64),
    /// 文本单元格（含空串）
    Text(String),
}

impl CellValue {
    /// 取数值,文本单元格返回 None
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Num(n) => Some(*n),
            CellValue::Text(_) => None,
        }
    }

    /// 转为展示文本
    ///
    /// 整数值不带小数点（42.0 -> "42"）,与导出格式保持一致
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Num(n) => format_number(*n),
            CellValue::Text(s) => s.clone(),
        }
    }

}

/// 数值的导出格式化: 整数不带小数部分
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// 一行数据: 列名 -> 单元格值
pub type Row = HashMap<String, CellValue>;

/// 按列名取文本,缺失列返回空串
pub fn row_text(row: &Row, key: &str) -> String {
    row.get(key).map(CellValue::to_text).unwrap_or_default()
}

/// 按列名取数值,缺失或非数值按 0 处理
pub fn row_num(row: &Row, key: &str) -> f64 {
    row.get(key).and_then(CellValue::as_f64).unwrap_or(0.0)
}

// ==========================================
// Dataset - 数据集
// ==========================================

/// 数据集: 行集合 + 列顺序
///
/// `columns` 来自最近一次加载的表头顺序,决定展示与导出顺序。
/// 不变式: 每行的键都是 `columns` 的子集,缺失单元格视为空串。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    /// 数据行
    pub rows: Vec<Row>,
    /// 列顺序（表头首次出现顺序）
    pub columns: Vec<String>,
}

impl Dataset {
    /// 空数据集
    pub fn empty() -> Self {
        Self::default()
    }

    /// 就绪判定: 有至少一行数据
    pub fn is_ready(&self) -> bool {
        !self.rows.is_empty()
    }
}
