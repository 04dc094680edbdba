// ==========================================
// 车皮编组优化系统 - 优化服务 HTTP 客户端
// ==========================================
// 职责: POST {base_url}/optimize / 静态样例 CSV 拉取
// 并发: 单次在途请求,无重试/排队/取消
// ==========================================

use crate::client::error::OptimizerError;
use crate::client::PlanOptimizer;
use crate::config::OptimizerSettings;
use crate::engine::OptimizationRequest;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

// ==========================================
// HttpOptimizer - HTTP 客户端实现
// ==========================================
pub struct HttpOptimizer {
    client: reqwest::Client,
    base_url: String,
}

impl HttpOptimizer {
    /// 按端点配置构造客户端
    pub fn new(settings: &OptimizerSettings) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(120))
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
            base_url: settings.base_url.clone(),
        }
    }

    /// 失败消息提取: detail 优先,其次 error,兜底响应体全文
    fn failure_message(body_text: &str) -> String {
        match serde_json::from_str::<Value>(body_text) {
            Ok(body) => body
                .get("detail")
                .and_then(Value::as_str)
                .or_else(|| body.get("error").and_then(Value::as_str))
                .map(str::to_string)
                .unwrap_or_else(|| body.to_string()),
            Err(_) => body_text.to_string(),
        }
    }
}

#[async_trait]
impl crate::client::SampleSource for HttpOptimizer {
    async fn fetch_sample_csv(&self, url: &str) -> Result<String, OptimizerError> {
        tracing::info!("拉取样例数据: {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(OptimizerError::SampleFetchFailed(status.as_u16()));
        }
        Ok(response.text().await?)
    }
}

#[async_trait]
impl PlanOptimizer for HttpOptimizer {
    async fn optimize(&self, request: &OptimizationRequest) -> Result<Value, OptimizerError> {
        let url = format!("{}/optimize", self.base_url);
        tracing::info!("调用优化服务: {}", url);

        let response = self.client.post(&url).json(request).send().await?;
        let status = response.status();
        let body_text = response.text().await?;

        if !status.is_success() {
            return Err(OptimizerError::HttpStatus {
                status: status.as_u16(),
                message: Self::failure_message(&body_text),
            });
        }

        // 2xx 的非 JSON 响应体按空响应处理,由归一化层吸收
        let body: Value = serde_json::from_str(&body_text).unwrap_or(Value::Null);

        // HTTP 2xx 但响应体携带 error 字段,按逻辑失败处理
        if let Some(message) = body.get("error").and_then(Value::as_str) {
            return Err(OptimizerError::ServiceError(message.to_string()));
        }

        Ok(body)
    }
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_message_prefers_detail() {
        let msg = HttpOptimizer::failure_message(r#"{"detail":"容量超限","error":"次选"}"#);
        assert_eq!(msg, "容量超限");
    }

    #[test]
    fn test_failure_message_falls_back_to_error() {
        let msg = HttpOptimizer::failure_message(r#"{"error":"模型超时"}"#);
        assert_eq!(msg, "模型超时");
    }

    #[test]
    fn test_failure_message_stringifies_body() {
        let msg = HttpOptimizer::failure_message(r#"{"code":500}"#);
        assert_eq!(msg, r#"{"code":500}"#);
    }

    #[test]
    fn test_failure_message_non_json_body() {
        let msg = HttpOptimizer::failure_message("Bad Gateway");
        assert_eq!(msg, "Bad Gateway");
    }
}
