//! 订单实体

use serde::{Deserialize, Serialize};
use storefront_domain_core::{Entity, EntityId, IdPolicy, UNSET_ID};

/// 订单
///
/// ID 总是由服务端分配。`product_id` 不校验对应商品是否存在。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default)]
    pub id: EntityId,
    pub product_id: EntityId,
    pub quantity: i32,
}

impl Order {
    pub fn new(product_id: EntityId, quantity: i32) -> Self {
        Self {
            id: UNSET_ID,
            product_id,
            quantity,
        }
    }

    pub fn with_id(mut self, id: EntityId) -> Self {
        self.id = id;
        self
    }
}

impl Entity for Order {
    const KIND: &'static str = "Order";
    const ID_POLICY: IdPolicy = IdPolicy::AlwaysAssign;

    fn id(&self) -> EntityId {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }

    fn apply_update(&mut self, changes: Self) {
        self.product_id = changes.product_id;
        self.quantity = changes.quantity;
    }
}
