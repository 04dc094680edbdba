// ==========================================
// 车皮编组优化系统 - 表格解析器实现
// ==========================================
// 职责: 原始分隔文本 -> 类型化数据集
// 支持: CSV (.csv)
// 契约: 纯函数,任何输入都不失败,缺列/多列降级为稀疏行
// ==========================================

use crate::domain::{CellValue, Dataset, Row};
use crate::importer::error::{ImportError, ImportResult};
use csv::ReaderBuilder;
use std::fs;
use std::path::Path;

// ==========================================
// TableParser - 表格解析器
// ==========================================
pub struct TableParser;

impl TableParser {
    /// 解析原始文本为数据集
    ///
    /// 规则:
    /// - 按 `\r?\n` 分行,空行丢弃; 无内容返回空数据集
    /// - 首个非空行为表头,逐格 trim 后按原序作为列名
    ///   （允许重名列,重名时同键覆盖,列序保留首次出现位置）
    /// - 数据行按 `,` 朴素切分,不处理引号/转义
    ///   （字段内嵌逗号不受支持,这是已知限制,不在此层修补）
    /// - 行尾缺失的单元格落为空串,超出表头宽度的单元格丢弃
    pub fn parse(text: &str) -> Dataset {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .quoting(false) // 朴素切分,引号视为普通字符
            .from_reader(text.as_bytes());

        // 读取表头
        let columns: Vec<String> = match reader.headers() {
            Ok(headers) => headers.iter().map(|h| h.trim().to_string()).collect(),
            Err(_) => Vec::new(),
        };

        if columns.is_empty() {
            return Dataset::empty();
        }

        // 读取所有数据行
        let mut rows: Vec<Row> = Vec::new();
        for record in reader.records().flatten() {
            let mut row = Row::new();
            for (col_idx, column) in columns.iter().enumerate() {
                let raw = record.get(col_idx).unwrap_or("").trim();
                row.insert(column.clone(), Self::coerce_cell(raw));
            }
            rows.push(row);
        }

        Dataset { rows, columns }
    }

    /// 读取并解析 .csv 文件
    ///
    /// 仅文件层面可能失败（不存在/扩展名不符/读取失败）,
    /// 文本内容本身的解析永不失败。
    pub fn parse_file(file_path: &Path) -> ImportResult<Dataset> {
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(
                file_path.display().to_string(),
            ));
        }

        let ext = file_path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");
        if ext != "csv" {
            return Err(ImportError::UnsupportedFormat(ext.to_string()));
        }

        let text = fs::read_to_string(file_path)
            .map_err(|e| ImportError::FileReadError(e.to_string()))?;

        Ok(Self::parse(&text))
    }

    /// 逐格数值判定
    ///
    /// 非空且整串可解析为有限浮点数 -> 数值; 其余保持文本。
    /// 空串保持空串,永不折算为 0。
    fn coerce_cell(raw: &str) -> CellValue {
        if raw.is_empty() {
            return CellValue::Text(String::new());
        }
        match raw.parse::<f64>() {
            Ok(n) if n.is_finite() => CellValue::Num(n),
            _ => CellValue::Text(raw.to_string()),
        }
    }
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header_and_rows() {
        let text = "material, quantity ,due_date\nHR Coil,420,2025-10-14\nCR Sheet,280,2025-10-16\n";
        let dataset = TableParser::parse(text);

        assert_eq!(dataset.columns, vec!["material", "quantity", "due_date"]);
        assert_eq!(dataset.rows.len(), 2);
        assert_eq!(
            dataset.rows[0].get("quantity"),
            Some(&CellValue::Num(420.0))
        );
        assert_eq!(
            dataset.rows[1].get("material"),
            Some(&CellValue::Text("CR Sheet".to_string()))
        );
    }

    #[test]
    fn test_numeric_coercion_per_cell() {
        let text = "a,b,c\n42,4a2,\n";
        let dataset = TableParser::parse(text);

        let row = &dataset.rows[0];
        assert_eq!(row.get("a"), Some(&CellValue::Num(42.0)));
        assert_eq!(row.get("b"), Some(&CellValue::Text("4a2".to_string())));
        // 空串保持空串,不折算为 0
        assert_eq!(row.get("c"), Some(&CellValue::Text(String::new())));
    }

    #[test]
    fn test_mixed_types_in_one_column() {
        let text = "v\n10\nN/A\n2.5\n";
        let dataset = TableParser::parse(text);

        assert_eq!(dataset.rows[0].get("v"), Some(&CellValue::Num(10.0)));
        assert_eq!(
            dataset.rows[1].get("v"),
            Some(&CellValue::Text("N/A".to_string()))
        );
        assert_eq!(dataset.rows[2].get("v"), Some(&CellValue::Num(2.5)));
    }

    #[test]
    fn test_short_row_pads_empty() {
        let text = "a,b,c\n1,2\n";
        let dataset = TableParser::parse(text);

        assert_eq!(
            dataset.rows[0].get("c"),
            Some(&CellValue::Text(String::new()))
        );
    }

    #[test]
    fn test_empty_input() {
        let dataset = TableParser::parse("");
        assert!(dataset.rows.is_empty());
        assert!(dataset.columns.is_empty());
    }

    #[test]
    fn test_blank_lines_discarded() {
        let text = "a,b\n\n1,2\n\n3,4\n";
        let dataset = TableParser::parse(text);
        assert_eq!(dataset.rows.len(), 2);
    }

    #[test]
    fn test_crlf_lines() {
        let text = "a,b\r\n1,2\r\n";
        let dataset = TableParser::parse(text);
        assert_eq!(dataset.rows.len(), 1);
        assert_eq!(dataset.rows[0].get("b"), Some(&CellValue::Num(2.0)));
    }

    #[test]
    fn test_quotes_not_interpreted() {
        // 朴素切分: 引号是普通字符,内嵌逗号会切开字段
        let text = "a,b\n\"x|y\",3\n";
        let dataset = TableParser::parse(text);
        assert_eq!(
            dataset.rows[0].get("a"),
            Some(&CellValue::Text("\"x|y\"".to_string()))
        );
    }
}
