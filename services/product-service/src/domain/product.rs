//! 商品实体

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use storefront_domain_core::{Entity, EntityId, IdPolicy, UNSET_ID};

/// 商品
///
/// ID 可由调用方指定；未指定（0）时由仓储分配。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default)]
    pub id: EntityId,
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Product {
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: UNSET_ID,
            name: name.into(),
            price,
            description: None,
            image_url: None,
        }
    }

    pub fn with_id(mut self, id: EntityId) -> Self {
        self.id = id;
        self
    }
}

impl Entity for Product {
    const KIND: &'static str = "Product";
    const ID_POLICY: IdPolicy = IdPolicy::AssignIfUnset;

    fn id(&self) -> EntityId {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }

    fn apply_update(&mut self, changes: Self) {
        self.name = changes.name;
        self.price = changes.price;
        self.description = changes.description;
        self.image_url = changes.image_url;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_without_id() {
        let product: Product =
            serde_json::from_value(json!({ "name": "Test", "price": 100 })).unwrap();

        assert_eq!(product.id, UNSET_ID);
        assert_eq!(product.price, Decimal::from(100));
        assert_eq!(product.description, None);
        assert_eq!(product.image_url, None);
    }

    #[test]
    fn test_serialize_camel_case() {
        let mut product = Product::new("Lamp", Decimal::new(1999, 2)).with_id(7);
        product.image_url = Some("https://img.example.com/lamp.png".to_string());

        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["name"], "Lamp");
        assert_eq!(value["price"], 19.99);
        assert_eq!(value["imageUrl"], "https://img.example.com/lamp.png");
        assert!(value["description"].is_null());
    }

    #[test]
    fn test_apply_update_overwrites_everything_but_id() {
        let mut product = Product::new("Old", Decimal::from(1)).with_id(3);
        let mut changes = Product::new("New", Decimal::from(2)).with_id(99);
        changes.description = Some("desc".to_string());

        product.apply_update(changes);

        assert_eq!(product.id, 3);
        assert_eq!(product.name, "New");
        assert_eq!(product.price, Decimal::from(2));
        assert_eq!(product.description.as_deref(), Some("desc"));
        assert_eq!(product.image_url, None);
    }
}
