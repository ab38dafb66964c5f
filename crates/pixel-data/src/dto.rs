//! Wire types for the storefront backend.
//!
//! The backend serializes prices as decimal numbers. These types mirror
//! that wire shape exactly and convert into the cents-based domain types
//! at the boundary, so no `f64` money leaks past this module.

use pixel_commerce::cart::{CartItem, CartSnapshot};
use pixel_commerce::catalog::Product;
use pixel_commerce::ids::{CartItemId, ProductId};
use pixel_commerce::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Product as returned by the catalog endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductDto {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub image: Option<String>,
}

impl ProductDto {
    /// Convert into the domain product. The backend prices in USD.
    pub fn into_product(self) -> Product {
        let mut product = Product::new(
            ProductId::new(self.id),
            self.name,
            Money::from_decimal(self.price, Currency::USD),
        );
        if let Some(description) = self.description {
            product = product.with_description(description);
        }
        if let Some(category) = self.category {
            product = product.with_category(category);
        }
        if let Some(image) = self.image {
            product = product.with_image(image);
        }
        product
    }
}

/// Cart line item as returned by the cart endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct CartItemDto {
    pub id: i64,
    pub product: ProductDto,
    pub quantity: i64,
    pub total: f64,
}

impl CartItemDto {
    pub fn into_item(self) -> CartItem {
        CartItem::new(
            CartItemId::new(self.id),
            self.product.into_product(),
            self.quantity,
            Money::from_decimal(self.total, Currency::USD),
        )
    }
}

/// Full cart payload from `get_cart`.
///
/// The payload also carries a server-side `sum_total`, which is ignored:
/// totals are recomputed locally from the line items.
#[derive(Debug, Clone, Deserialize)]
pub struct CartDto {
    pub items: Vec<CartItemDto>,
    #[serde(default)]
    pub tax: f64,
}

impl CartDto {
    pub fn into_snapshot(self) -> CartSnapshot {
        CartSnapshot::new(
            self.items.into_iter().map(CartItemDto::into_item).collect(),
            Money::from_decimal(self.tax, Currency::USD),
        )
    }
}

/// Badge count payload from `get_cart_stat`.
#[derive(Debug, Clone, Deserialize)]
pub struct CartStatDto {
    pub num_of_items: i64,
}

/// Membership payload from `product_in_cart`.
#[derive(Debug, Clone, Deserialize)]
pub struct InCartDto {
    pub product_in_cart: bool,
}

/// Envelope around the updated line item from `update_quantity`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatedItemDto {
    pub data: CartItemDto,
}

/// Authenticated user profile assembled from the account endpoints.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    pub username: String,
    #[serde(default)]
    pub is_staff: bool,
    #[serde(default)]
    pub role: Option<String>,
}

/// Body for `add_item`.
#[derive(Debug, Serialize)]
pub struct AddItemBody<'a> {
    pub cart_code: &'a str,
    pub product_id: i64,
}

/// Body for `update_quantity`.
#[derive(Debug, Serialize)]
pub struct UpdateQuantityBody {
    pub item_id: i64,
    pub quantity: i64,
}

/// Body for `delete_cartitem`.
#[derive(Debug, Serialize)]
pub struct DeleteItemBody {
    pub item_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_conversion_rounds_to_cents() {
        let dto: ProductDto = serde_json::from_str(
            r#"{
                "id": 4,
                "name": "God of War Ragnarok",
                "description": "Aventura nordica",
                "category": "Juegos",
                "price": 69.99,
                "image": "/media/products/gow.jpg"
            }"#,
        )
        .unwrap();

        let product = dto.into_product();
        assert_eq!(product.id, ProductId::new(4));
        assert_eq!(product.price.amount_cents, 6999);
        assert_eq!(product.category.as_deref(), Some("Juegos"));
        assert_eq!(product.image.as_deref(), Some("/media/products/gow.jpg"));
    }

    #[test]
    fn test_product_tolerates_missing_optionals() {
        let dto: ProductDto =
            serde_json::from_str(r#"{"id": 7, "name": "Cable HDMI", "price": 9.5}"#).unwrap();
        let product = dto.into_product();
        assert_eq!(product.price.amount_cents, 950);
        assert!(product.description.is_none());
        assert!(product.category.is_none());
    }

    #[test]
    fn test_cart_conversion_ignores_server_sum_total() {
        let dto: CartDto = serde_json::from_str(
            r#"{
                "id": 3,
                "cart_code": "k3J9vQ2xLm0",
                "items": [
                    {
                        "id": 21,
                        "product": {"id": 4, "name": "FIFA 24", "price": 59.99},
                        "quantity": 2,
                        "total": 119.98
                    }
                ],
                "sum_total": 129.58,
                "tax": 9.6
            }"#,
        )
        .unwrap();

        let snapshot = dto.into_snapshot();
        assert_eq!(snapshot.items.len(), 1);
        assert_eq!(snapshot.items[0].id, CartItemId::new(21));
        assert_eq!(snapshot.items[0].total.amount_cents, 11998);
        assert_eq!(snapshot.tax.amount_cents, 960);
    }

    #[test]
    fn test_updated_item_envelope() {
        let dto: UpdatedItemDto = serde_json::from_str(
            r#"{
                "data": {
                    "id": 21,
                    "product": {"id": 4, "name": "FIFA 24", "price": 59.99},
                    "quantity": 3,
                    "total": 179.97
                },
                "message": "Cartitem updated successfully!"
            }"#,
        )
        .unwrap();

        let item = dto.data.into_item();
        assert_eq!(item.quantity, 3);
        assert_eq!(item.total.amount_cents, 17997);
    }

    #[test]
    fn test_user_profile_defaults() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"username": "lucia"}"#).unwrap();
        assert_eq!(profile.username, "lucia");
        assert!(!profile.is_staff);
        assert!(profile.role.is_none());
    }

    #[test]
    fn test_request_bodies_serialize() {
        let body = AddItemBody {
            cart_code: "k3J9vQ2xLm0",
            product_id: 4,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"cart_code": "k3J9vQ2xLm0", "product_id": 4})
        );

        let body = UpdateQuantityBody {
            item_id: 21,
            quantity: 3,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"item_id": 21, "quantity": 3})
        );
    }
}
