// ==========================================
// 车皮编组优化系统 - 会话状态
// ==========================================
// 职责: 持有全部可变会话状态（数据集/配置/当前方案/状态消息）,
//       编排无状态管线组件
// 红线: 管线组件不持状态; 可变状态只在本层,整体替换不原地改
// ==========================================

use crate::client::{OptimizerError, PlanOptimizer, SampleSource};
use crate::config::{Constraints, WagonAvailability};
use crate::domain::{Dataset, DatasetKind, MaterialBalanceRow, PlanResult};
use crate::engine::{AnalyticsAggregator, PayloadBuilder, ResponseNormalizer};
use crate::exporter::{PlanExporter, TableExporter};
use crate::importer::{ImportResult, TableParser};
use crate::store::DatasetStore;
use std::path::Path;

// ==========================================
// SessionState - 会话状态持有者
// ==========================================
pub struct SessionState {
    store: DatasetStore,
    constraints: Constraints,
    wagon_availability: WagonAvailability,
    plan_result: Option<PlanResult>,
    status_message: String,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    /// 新会话（空存储 + 默认配置）
    pub fn new() -> Self {
        Self {
            store: DatasetStore::new(),
            constraints: Constraints::default(),
            wagon_availability: WagonAvailability::default(),
            plan_result: None,
            status_message: "欢迎使用,请先上传或加载数据。".to_string(),
        }
    }

    // ==========================================
    // 数据集加载
    // ==========================================

    /// 整体替换指定槽位
    pub fn load_dataset(&mut self, kind: DatasetKind, dataset: Dataset) {
        let rows = dataset.rows.len();
        self.store.load(kind, dataset);
        self.status_message = format!("数据集 {} 加载完成,共 {} 行。", kind, rows);
    }

    /// 解析 CSV 文本并加载
    pub fn load_csv_text(&mut self, kind: DatasetKind, text: &str) {
        self.load_dataset(kind, TableParser::parse(text));
    }

    /// 拉取远端样例 CSV 并加载
    ///
    /// 非 2xx 或传输失败: 失败记入状态消息,槽位保持不变
    /// （无部分状态）,错误原样向上返回。
    pub async fn load_sample_from(
        &mut self,
        kind: DatasetKind,
        source: &dyn SampleSource,
        url: &str,
    ) -> Result<(), OptimizerError> {
        match source.fetch_sample_csv(url).await {
            Ok(text) => {
                self.load_csv_text(kind, &text);
                Ok(())
            }
            Err(err) => {
                self.status_message = format!("数据集 {} 样例加载失败: {}", kind, err);
                Err(err)
            }
        }
    }

    /// 读取 .csv 文件并加载
    ///
    /// 文件层失败会记入状态消息并保持槽位不变（无部分状态）。
    pub fn import_csv_file(&mut self, kind: DatasetKind, path: &Path) -> ImportResult<()> {
        match TableParser::parse_file(path) {
            Ok(dataset) => {
                self.load_dataset(kind, dataset);
                Ok(())
            }
            Err(err) => {
                self.status_message = format!("数据集 {} 导入失败: {}", kind, err);
                Err(err)
            }
        }
    }

    // ==========================================
    // 配置
    // ==========================================

    /// 替换数值约束
    pub fn set_constraints(&mut self, constraints: Constraints) {
        self.constraints = constraints;
    }

    /// 设置车型可用性
    pub fn set_wagon_available(&mut self, wagon_type: impl Into<String>, available: bool) {
        self.wagon_availability.set(wagon_type, available);
    }

    // ==========================================
    // 优化流程
    // ==========================================

    /// 执行一次优化调用
    ///
    /// 校验失败: 请求不发出,清空当前方案,状态消息命名第一个
    /// 缺失的数据集。调用失败: 清空当前方案,失败消息原样呈现。
    /// 成功: 归一化结果整体替换上一次方案。
    ///
    /// 返回是否产出了新方案。任何分支都不会 panic。
    pub async fn run_optimization(&mut self, optimizer: &dyn PlanOptimizer) -> bool {
        let request = match PayloadBuilder::build(
            &self.store,
            &self.constraints,
            &self.wagon_availability,
        ) {
            Ok(request) => request,
            Err(err) => {
                self.plan_result = None;
                self.status_message = format!("错误: {}", err);
                return false;
            }
        };

        self.status_message = "正在调用优化服务...".to_string();

        match optimizer.optimize(&request).await {
            Ok(raw) => {
                let normalized = ResponseNormalizer::normalize(&raw);
                tracing::info!("优化完成,方案共 {} 条编组", normalized.plan.len());
                self.plan_result = Some(normalized);
                self.status_message = "优化完成,请查看各视图。".to_string();
                true
            }
            Err(err) => {
                tracing::warn!("优化调用失败: {}", err);
                self.plan_result = None;
                self.status_message = format!("优化失败: {}", err);
                false
            }
        }
    }

    /// 重置会话: 清空五个数据集与当前方案
    pub fn reset(&mut self) {
        self.store.reset();
        self.plan_result = None;
        self.status_message = "已重置,请重新加载数据。".to_string();
    }

    // ==========================================
    // 派生视图与导出
    // ==========================================

    /// 当前订单/堆场数据的物料平衡表
    pub fn material_balance(&self) -> Vec<MaterialBalanceRow> {
        AnalyticsAggregator::material_balance(
            &self.store.get(DatasetKind::Orders).rows,
            &self.store.get(DatasetKind::Stockyards).rows,
        )
    }

    /// 导出当前方案为 CSV 文本,无方案时返回 None
    pub fn export_plan_csv(&self) -> Option<String> {
        self.plan_result
            .as_ref()
            .map(|result| PlanExporter::encode(&result.plan))
    }

    /// 导出指定数据集为通用表格 CSV 文本
    pub fn export_dataset_csv(&self, kind: DatasetKind) -> String {
        TableExporter::encode_dataset(self.store.get(kind))
    }

    // ==========================================
    // 只读访问
    // ==========================================

    pub fn store(&self) -> &DatasetStore {
        &self.store
    }

    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    pub fn wagon_availability(&self) -> &WagonAvailability {
        &self.wagon_availability
    }

    pub fn plan_result(&self) -> Option<&PlanResult> {
        self.plan_result.as_ref()
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }
}
