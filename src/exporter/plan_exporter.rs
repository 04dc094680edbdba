// ==========================================
// 车皮编组优化系统 - 方案导出器
// ==========================================
// 职责: 归一化后的方案行 -> CSV 文本
// 约定: destinations 以 " | " 拼接,materials 以
//       material:tonnage 形式按 | 拼接,均不加引号
// ==========================================

use crate::domain::dataset::format_number;
use crate::domain::PlanRow;

/// 方案导出固定表头
pub const PLAN_EXPORT_HEADER: [&str; 9] = [
    "rake_id",
    "wagon_type",
    "loading_point",
    "destinations",
    "materials",
    "total_tonnage",
    "total_cost",
    "dispatch_date",
    "fill_percent",
];

/// 方案导出文件名约定
pub const PLAN_EXPORT_FILENAME: &str = "optimized_rake_plan.csv";

// ==========================================
// PlanExporter - 方案导出器
// ==========================================
pub struct PlanExporter;

impl PlanExporter {
    /// 编码方案行为 CSV 文本
    ///
    /// 表头固定; 每条记录以 `\n` 结尾; 缺失字段编码为空串,
    /// 永不出现 "null" / "undefined" 字面量。
    pub fn encode(plan: &[PlanRow]) -> String {
        let mut out = String::new();
        out.push_str(&PLAN_EXPORT_HEADER.join(","));
        out.push('\n');

        for row in plan {
            let destinations = row
                .destinations
                .as_ref()
                .map(|d| d.joined(" | "))
                .unwrap_or_default();
            let materials = row
                .materials
                .as_ref()
                .map(|m| {
                    m.iter()
                        .map(|(material, tonnage)| {
                            format!("{}:{}", material, format_number(*tonnage))
                        })
                        .collect::<Vec<_>>()
                        .join("|")
                })
                .unwrap_or_default();

            let fields = [
                row.rake_id.clone(),
                row.wagon_type.clone().unwrap_or_default(),
                row.loading_point.clone().unwrap_or_default(),
                destinations,
                materials,
                row.total_tonnage.map(format_number).unwrap_or_default(),
                row.total_cost.map(format_number).unwrap_or_default(),
                row.dispatch_date.clone().unwrap_or_default(),
                row.fill_percent.map(format_number).unwrap_or_default(),
            ];

            out.push_str(&fields.join(","));
            out.push('\n');
        }

        out
    }
}
