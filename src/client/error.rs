// ==========================================
// 车皮编组优化系统 - 优化服务客户端错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: 传输层错误原样向上传播,不做二次包装
// ==========================================

use thiserror::Error;

/// 优化服务客户端错误类型
#[derive(Error, Debug)]
pub enum OptimizerError {
    /// HTTP 2xx 但响应体携带 error 字段,按逻辑失败处理
    #[error("优化服务返回错误: {0}")]
    ServiceError(String),

    /// 非 2xx 响应,消息取响应体 detail / error / JSON 全文
    #[error("优化服务请求失败 (HTTP {status}): {message}")]
    HttpStatus { status: u16, message: String },

    /// 样例数据拉取返回非 2xx
    #[error("样例数据获取失败 (HTTP {0})")]
    SampleFetchFailed(u16),

    /// 传输层失败（无响应）
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}
