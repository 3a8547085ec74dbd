//! crud-core - 通用 CRUD 组件
//!
//! 控制器 → 服务 → 仓储 三层结构，按实体类型参数化，Order 与 Product 共用

mod controller;
mod error;
mod service;

pub use controller::*;
pub use error::*;
pub use service::*;
