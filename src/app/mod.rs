// ==========================================
// 车皮编组优化系统 - 应用层
// ==========================================
// 职责: 会话状态与流程编排
// ==========================================

pub mod session;

pub use session::SessionState;
