//! domain-core - 跨服务共享的领域核心类型
//!
//! Order 与 Product 共用同一套实体抽象，差异只体现在 [`IdPolicy`] 上

mod entity;

pub use entity::*;
