// ==========================================
// 车皮编组优化系统 - 数据集存储层
// ==========================================
// 职责: 持有五个命名数据集槽位,独立加载/整体重置
// 说明: 槽位整体替换,无合并语义; 全内存,无持久化
// ==========================================

use crate::domain::{Dataset, DatasetKind};
use std::collections::HashMap;

// ==========================================
// DatasetStore - 数据集存储
// ==========================================

/// 五槽位数据集存储
///
/// 每个槽位独立替换,`reset` 一步清空全部。
/// 就绪判定（行数非零）供请求装配层消费。
#[derive(Debug, Clone, Default)]
pub struct DatasetStore {
    slots: HashMap<DatasetKind, Dataset>,
}

impl DatasetStore {
    /// 创建空存储（五个槽位均为空数据集）
    pub fn new() -> Self {
        Self::default()
    }

    /// 整体替换指定槽位,旧数据丢弃
    pub fn load(&mut self, kind: DatasetKind, dataset: Dataset) {
        self.slots.insert(kind, dataset);
    }

    /// 一步清空全部五个槽位
    pub fn reset(&mut self) {
        self.slots.clear();
    }

    /// 借用指定槽位（未加载过的槽位视为空数据集）
    pub fn get(&self, kind: DatasetKind) -> &Dataset {
        static EMPTY: Dataset = Dataset {
            rows: Vec::new(),
            columns: Vec::new(),
        };
        self.slots.get(&kind).unwrap_or(&EMPTY)
    }

    /// 槽位就绪判定: 有至少一行数据
    pub fn is_ready(&self, kind: DatasetKind) -> bool {
        self.get(kind).is_ready()
    }

    /// 按固定枚举顺序找出第一个未就绪的槽位
    pub fn first_missing(&self) -> Option<DatasetKind> {
        DatasetKind::ALL
            .iter()
            .copied()
            .find(|kind| !self.is_ready(*kind))
    }
}
