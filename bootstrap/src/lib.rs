//! storefront-bootstrap - 统一服务启动骨架
//!
//! 所有 HTTP 服务复用的启动逻辑

mod health;
mod request_metrics;
mod runtime;
mod starter;

pub use health::*;
pub use request_metrics::*;
pub use runtime::*;
pub use starter::*;
