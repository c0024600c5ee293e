//! Product data models.
//!
//! A product is an open document: apart from its identifier and creation
//! time, every field is whatever the caller supplied. The identifier is
//! either a server-generated object identifier or a raw string key chosen by
//! the caller; the two kinds never collide, even when their text is equal.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

const ID_FIELD: &str = "_id";
const CREATED_AT_FIELD: &str = "createdAt";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProductId {
    /// Native object identifier generated by the server
    Object(Uuid),
    /// Raw string key supplied by the caller
    Key(String),
}

impl ProductId {
    pub const OBJECT_KIND: &'static str = "object";
    pub const KEY_KIND: &'static str = "key";

    pub fn generate() -> Self {
        ProductId::Object(Uuid::new_v4())
    }

    /// Storage discriminator for the identifier kind.
    pub fn kind(&self) -> &'static str {
        match self {
            ProductId::Object(_) => Self::OBJECT_KIND,
            ProductId::Key(_) => Self::KEY_KIND,
        }
    }

    /// Rebuilds an identifier from its stored kind and text.
    pub fn from_parts(kind: &str, value: String) -> Option<Self> {
        match kind {
            Self::OBJECT_KIND => Uuid::parse_str(&value).ok().map(ProductId::Object),
            Self::KEY_KIND => Some(ProductId::Key(value)),
            _ => None,
        }
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Object(id) => write!(f, "{}", id),
            ProductId::Key(key) => f.write_str(key),
        }
    }
}

impl Serialize for ProductId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// A stored product.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Product {
    #[serde(rename = "_id")]
    #[schema(value_type = String)]
    pub id: ProductId,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub fields: Map<String, Value>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Product creation body: any JSON object, with an optional string `_id`
/// to store the product under a raw key.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateProductDto {
    #[serde(rename = "_id", default)]
    #[validate(length(min = 1, message = "_id must not be empty"))]
    pub id: Option<String>,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub fields: Map<String, Value>,
}

/// A product ready to be inserted, with its identifier and creation time
/// already decided.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub id: ProductId,
    pub fields: Map<String, Value>,
    pub created_at: DateTime<Utc>,
}

impl NewProduct {
    pub fn from_dto(dto: CreateProductDto, created_at: DateTime<Utc>) -> Self {
        let mut fields = dto.fields;
        fields.remove(ID_FIELD);
        fields.remove(CREATED_AT_FIELD);

        Self {
            id: dto.id.map(ProductId::Key).unwrap_or_else(ProductId::generate),
            fields,
            created_at,
        }
    }
}

impl From<NewProduct> for Product {
    fn from(product: NewProduct) -> Self {
        Self {
            id: product.id,
            fields: product.fields,
            created_at: product.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dto(value: Value) -> CreateProductDto {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_new_product_without_id_gets_object_id() {
        let product = NewProduct::from_dto(dto(json!({ "title": "Lamp" })), Utc::now());
        assert!(matches!(product.id, ProductId::Object(_)));
        assert_eq!(product.fields.get("title"), Some(&json!("Lamp")));
    }

    #[test]
    fn test_new_product_with_raw_key() {
        let product = NewProduct::from_dto(dto(json!({ "_id": "sku-42", "price": 10 })), Utc::now());
        assert_eq!(product.id, ProductId::Key("sku-42".to_string()));
        assert!(!product.fields.contains_key("_id"));
    }

    #[test]
    fn test_caller_created_at_is_discarded() {
        let now = Utc::now();
        let product = NewProduct::from_dto(
            dto(json!({ "title": "Lamp", "createdAt": "1999-01-01T00:00:00Z" })),
            now,
        );
        assert!(!product.fields.contains_key("createdAt"));
        assert_eq!(product.created_at, now);
    }

    #[test]
    fn test_non_string_id_is_rejected() {
        assert!(serde_json::from_value::<CreateProductDto>(json!({ "_id": 7 })).is_err());
    }

    #[test]
    fn test_empty_id_fails_validation() {
        assert!(dto(json!({ "_id": "" })).validate().is_err());
        assert!(dto(json!({ "title": "Lamp" })).validate().is_ok());
    }

    #[test]
    fn test_product_serialization() {
        let product = Product {
            id: ProductId::Key("sku-42".to_string()),
            fields: json!({ "title": "Lamp" }).as_object().cloned().unwrap(),
            created_at: Utc::now(),
        };

        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["_id"], "sku-42");
        assert_eq!(value["title"], "Lamp");
        assert!(value.get("createdAt").is_some());
    }

    #[test]
    fn test_product_id_from_parts() {
        let id = Uuid::new_v4();
        assert_eq!(
            ProductId::from_parts("object", id.to_string()),
            Some(ProductId::Object(id))
        );
        assert_eq!(
            ProductId::from_parts("key", "abc".to_string()),
            Some(ProductId::Key("abc".to_string()))
        );
        assert_eq!(ProductId::from_parts("other", "abc".to_string()), None);
    }
}
