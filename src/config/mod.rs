// ==========================================
// 车皮编组优化系统 - 配置层
// ==========================================
// 职责: 运行约束 / 车辆可用性 / 优化服务端点配置
// 来源: 默认值 + 环境变量覆盖
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;

/// 优化服务端点环境变量
pub const API_URL_ENV: &str = "RAKE_APS_API_URL";

/// 优化服务默认端点
pub const DEFAULT_API_URL: &str = "https://rakeopt-backend.onrender.com";

/// 默认覆盖的车辆类型
pub const DEFAULT_WAGON_TYPES: [&str; 3] = ["BOXN", "BOXNHL", "BRN"];

// ==========================================
// Constraints - 运行约束
// ==========================================

/// 用户可调的数值约束
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    /// 最小编组吨位
    #[serde(rename = "minRakeTonnage")]
    pub min_rake_tonnage: f64,
    /// 专用线(装车点)日容量
    #[serde(rename = "sidingCapacity")]
    pub siding_capacity: f64,
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            min_rake_tonnage: 1800.0,
            siding_capacity: 600.0,
        }
    }
}

// ==========================================
// WagonAvailability - 车辆类型可用性
// ==========================================

/// 车辆类型 -> 是否可用
///
/// 键缺失视为可用; 默认覆盖常见的三种车型,均为可用。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WagonAvailability {
    flags: HashMap<String, bool>,
}

impl Default for WagonAvailability {
    fn default() -> Self {
        let flags = DEFAULT_WAGON_TYPES
            .iter()
            .map(|t| (t.to_string(), true))
            .collect();
        Self { flags }
    }
}

impl WagonAvailability {
    /// 查询车型可用性,未登记的车型视为可用
    pub fn is_available(&self, wagon_type: &str) -> bool {
        self.flags.get(wagon_type).copied().unwrap_or(true)
    }

    /// 设置车型可用性
    pub fn set(&mut self, wagon_type: impl Into<String>, available: bool) {
        self.flags.insert(wagon_type.into(), available);
    }
}

// ==========================================
// OptimizerSettings - 优化服务端点配置
// ==========================================

/// 优化服务连接配置
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizerSettings {
    /// 服务根地址（不带尾部斜杠）
    pub base_url: String,
}

impl OptimizerSettings {
    /// 从环境变量读取,缺省落到固定远端地址
    ///
    /// 环境变量: `RAKE_APS_API_URL`
    pub fn from_env() -> Self {
        let base_url = env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::with_base_url(base_url)
    }

    /// 指定根地址构造（统一去除尾部斜杠）
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraint_defaults() {
        let c = Constraints::default();
        assert_eq!(c.min_rake_tonnage, 1800.0);
        assert_eq!(c.siding_capacity, 600.0);
    }

    #[test]
    fn test_wagon_availability_default_true() {
        let mut avail = WagonAvailability::default();
        assert!(avail.is_available("BOXN"));
        // 未登记车型视为可用
        assert!(avail.is_available("BCNA"));

        avail.set("BOXN", false);
        assert!(!avail.is_available("BOXN"));
    }

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let settings = OptimizerSettings::with_base_url("http://localhost:8000/");
        assert_eq!(settings.base_url, "http://localhost:8000");
    }
}
