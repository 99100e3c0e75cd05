use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::categories::repo_types::Category;
use crate::products::repo_types::Product;

/// Request body for creating a product. Presence of the required fields is
/// checked in the handler.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub stock: Option<i32>,
    pub category_id: Option<Uuid>,
}

/// Partial update. `None` means "leave the field alone"; an explicit zero
/// arrives as `Some(0)` and is applied as given.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub stock: Option<i32>,
    pub category_id: Option<Uuid>,
}

/// Product plus its category as resolved at read time. A product whose
/// category has been soft-deleted renders with `category: null`.
#[derive(Debug, Serialize)]
pub struct ProductWithCategory {
    #[serde(flatten)]
    pub product: Product,
    pub category: Option<Category>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn absent_fields_stay_distinct_from_zeros() {
        let empty: UpdateProductRequest = serde_json::from_str("{}").unwrap();
        assert!(empty.price.is_none());
        assert!(empty.stock.is_none());

        let zeroed: UpdateProductRequest =
            serde_json::from_str(r#"{"price":0,"stock":0}"#).unwrap();
        assert_eq!(zeroed.price, Some(Decimal::ZERO));
        assert_eq!(zeroed.stock, Some(0));
    }

    #[test]
    fn category_reference_uses_camel_case_key() {
        let payload: CreateProductRequest = serde_json::from_str(
            r#"{"name":"Tea","price":"4.50","categoryId":"00000000-0000-0000-0000-000000000000"}"#,
        )
        .unwrap();
        assert_eq!(payload.category_id, Some(Uuid::nil()));
        assert!(payload.stock.is_none());
    }

    #[test]
    fn orphaned_product_serializes_with_null_category() {
        let product = Product {
            id: Uuid::nil(),
            name: "Tea".into(),
            price: Decimal::new(450, 2),
            stock: 3,
            category_id: Uuid::nil(),
            created_at: datetime!(2024-05-01 12:00:00 UTC),
            updated_at: datetime!(2024-05-01 12:00:00 UTC),
        };

        let json = serde_json::to_value(&ProductWithCategory {
            product,
            category: None,
        })
        .unwrap();

        // Product fields flatten to the top level next to the join result.
        assert_eq!(json["name"], "Tea");
        assert!(json["categoryId"].is_string());
        assert!(json["category"].is_null());
    }
}
