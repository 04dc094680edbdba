// ==========================================
// 车皮编组优化系统 - 命令行入口
// ==========================================
// 用法: rake-aps <orders.csv> <stockyards.csv> <loading_points.csv>
//               <rakes.csv> <costs.csv> [输出文件]
// 端点: 环境变量 RAKE_APS_API_URL（默认远端地址）
// ==========================================

use anyhow::{bail, Context, Result};
use rake_aps::exporter::PLAN_EXPORT_FILENAME;
use rake_aps::{DatasetKind, HttpOptimizer, OptimizerSettings, SessionState};
use std::fs;
use std::path::Path;

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志系统
    rake_aps::logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} - 决策支持系统", rake_aps::APP_NAME);
    tracing::info!("系统版本: {}", rake_aps::VERSION);
    tracing::info!("==================================================");

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 5 || args.len() > 6 {
        bail!(
            "用法: rake-aps <orders.csv> <stockyards.csv> <loading_points.csv> \
             <rakes.csv> <costs.csv> [输出文件]"
        );
    }
    let output_path = args
        .get(5)
        .map(String::as_str)
        .unwrap_or(PLAN_EXPORT_FILENAME);

    // 按固定槽位顺序加载五个数据集
    let mut session = SessionState::new();
    for (kind, path) in DatasetKind::ALL.iter().zip(&args) {
        session
            .import_csv_file(*kind, Path::new(path))
            .with_context(|| format!("加载数据集 {} 失败: {}", kind, path))?;
        tracing::info!(
            "数据集 {} 已加载: {} 行",
            kind,
            session.store().get(*kind).rows.len()
        );
    }

    // 物料平衡预览
    for row in session.material_balance() {
        tracing::info!(
            "物料平衡 {}: 需求 {} / 可用 {} / 平衡 {}",
            row.material,
            row.required,
            row.available,
            row.balance
        );
    }

    // 调用远端优化服务
    let settings = OptimizerSettings::from_env();
    tracing::info!("优化服务端点: {}", settings.base_url);
    let optimizer = HttpOptimizer::new(&settings);

    if !session.run_optimization(&optimizer).await {
        bail!("{}", session.status_message());
    }

    // 导出方案
    let csv = session
        .export_plan_csv()
        .context("优化成功但没有可导出的方案")?;
    fs::write(output_path, &csv).with_context(|| format!("写入 {} 失败", output_path))?;

    if let Some(result) = session.plan_result() {
        tracing::info!(
            "优化后总费用 {} / 基线 {} / 节省 {} ({}%)",
            result.totals.total_cost,
            result.totals.before_cost,
            result.totals.savings,
            result.totals.savings_percent
        );
    }
    tracing::info!("方案已导出: {}", output_path);

    Ok(())
}
