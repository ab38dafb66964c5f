//! Storefront backend bindings.
//!
//! Implements the `pixel-commerce` service traits over the storefront's
//! REST endpoints and exposes the account profile fetch.

use crate::dto::{
    AddItemBody, CartDto, CartStatDto, DeleteItemBody, InCartDto, ProductDto, UpdateQuantityBody,
    UpdatedItemDto, UserProfile,
};
use crate::{ClientRequestBuilder, FetchError, StoreClient};
use async_trait::async_trait;
use pixel_commerce::cart::{CartItem, CartService, CartSnapshot};
use pixel_commerce::catalog::{Catalog, CatalogService};
use pixel_commerce::checkout::{CheckoutService, PaymentCallback, PaymentOutcome, PaymentProvider};
use pixel_commerce::ids::{CartCode, CartItemId, ProductId};
use pixel_commerce::CommerceError;
use serde::Deserialize;

// Backend endpoint paths. `delete_cartitem` is registered without a
// trailing slash; the rest carry one where the backend does.
const PRODUCTS: &str = "/products/";
const GET_CART: &str = "/get_cart";
const CART_STAT: &str = "/get_cart_stat";
const ADD_ITEM: &str = "/add_item/";
const UPDATE_QUANTITY: &str = "/update_quantity/";
const DELETE_CART_ITEM: &str = "/delete_cartitem";
const PRODUCT_IN_CART: &str = "/product_in_cart";
const PAYPAL_CALLBACK: &str = "/paypal_payment_callback/";
const FLUTTERWAVE_CALLBACK: &str = "/payment_callback/";
const GET_USERNAME: &str = "/get_username";
const USER_INFO: &str = "/user_info";

/// Wire shape of `get_username`.
#[derive(Debug, Deserialize)]
struct UsernameDto {
    username: String,
}

/// Wire shape of `user_info`.
#[derive(Debug, Deserialize)]
struct UserInfoDto {
    #[serde(default)]
    is_staff: bool,
    #[serde(default)]
    role: Option<String>,
}

/// The storefront backend API.
///
/// One instance per request context. Implements [`CatalogService`],
/// [`CartService`] and [`CheckoutService`] for the domain engines; the
/// access token, when present, travels on the client's default headers.
pub struct Storefront {
    client: StoreClient,
}

impl Storefront {
    /// Bind the storefront API to an HTTP client.
    pub fn new(client: StoreClient) -> Self {
        Self { client }
    }

    fn products_request(&self) -> ClientRequestBuilder {
        self.client.get(PRODUCTS)
    }

    fn cart_request(&self, cart_code: &CartCode) -> ClientRequestBuilder {
        self.client
            .get(GET_CART)
            .query("cart_code", cart_code.as_str())
    }

    fn cart_stat_request(&self, cart_code: &CartCode) -> ClientRequestBuilder {
        self.client
            .get(CART_STAT)
            .query("cart_code", cart_code.as_str())
    }

    fn add_item_request(
        &self,
        cart_code: &CartCode,
        product_id: &ProductId,
    ) -> Result<ClientRequestBuilder, FetchError> {
        self.client.post(ADD_ITEM).json(&AddItemBody {
            cart_code: cart_code.as_str(),
            product_id: product_id.value(),
        })
    }

    fn update_quantity_request(
        &self,
        item_id: &CartItemId,
        quantity: i64,
    ) -> Result<ClientRequestBuilder, FetchError> {
        self.client
            .patch(UPDATE_QUANTITY)
            .json(&UpdateQuantityBody {
                item_id: item_id.value(),
                quantity,
            })
    }

    fn delete_item_request(
        &self,
        item_id: &CartItemId,
    ) -> Result<ClientRequestBuilder, FetchError> {
        self.client.post(DELETE_CART_ITEM).json(&DeleteItemBody {
            item_id: item_id.value(),
        })
    }

    fn in_cart_request(
        &self,
        cart_code: &CartCode,
        product_id: &ProductId,
    ) -> ClientRequestBuilder {
        self.client
            .get(PRODUCT_IN_CART)
            .query("cart_code", cart_code.as_str())
            .query("product_id", product_id.value().to_string())
    }

    fn callback_request(&self, callback: &PaymentCallback) -> ClientRequestBuilder {
        let path = match callback.provider() {
            PaymentProvider::PayPal => PAYPAL_CALLBACK,
            PaymentProvider::Flutterwave => FLUTTERWAVE_CALLBACK,
        };
        self.client
            .post(format!("{}?{}", path, callback.query_string()))
    }

    fn username_request(&self) -> ClientRequestBuilder {
        self.client.get(GET_USERNAME)
    }

    fn user_info_request(&self) -> ClientRequestBuilder {
        self.client.get(USER_INFO)
    }

    /// Fetch the signed-in user's profile.
    ///
    /// Combines `get_username` with the staff and role flags from
    /// `user_info`. Requires an authenticated client.
    pub async fn fetch_profile(&self) -> Result<UserProfile, FetchError> {
        let username: UsernameDto = self
            .username_request()
            .send()
            .await?
            .error_for_status()?
            .json()?;
        let info: UserInfoDto = self
            .user_info_request()
            .send()
            .await?
            .error_for_status()?
            .json()?;

        Ok(UserProfile {
            username: username.username,
            is_staff: info.is_staff,
            role: info.role,
        })
    }
}

#[async_trait]
impl CatalogService for Storefront {
    async fn fetch_catalog(&self) -> Result<Catalog, CommerceError> {
        let products: Vec<ProductDto> = self
            .products_request()
            .send()
            .await?
            .error_for_status()?
            .json()?;

        Ok(Catalog::from_products(
            products.into_iter().map(ProductDto::into_product).collect(),
        ))
    }
}

#[async_trait]
impl CartService for Storefront {
    async fn fetch_cart(&self, cart_code: &CartCode) -> Result<CartSnapshot, CommerceError> {
        let cart: CartDto = self
            .cart_request(cart_code)
            .send()
            .await?
            .error_for_status()?
            .json()?;
        Ok(cart.into_snapshot())
    }

    async fn add_item(
        &self,
        cart_code: &CartCode,
        product_id: &ProductId,
    ) -> Result<(), CommerceError> {
        self.add_item_request(cart_code, product_id)?
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn update_quantity(
        &self,
        item_id: &CartItemId,
        quantity: i64,
    ) -> Result<CartItem, CommerceError> {
        let updated: UpdatedItemDto = self
            .update_quantity_request(item_id, quantity)?
            .send()
            .await?
            .error_for_status()?
            .json()?;
        Ok(updated.data.into_item())
    }

    async fn remove_item(&self, item_id: &CartItemId) -> Result<(), CommerceError> {
        self.delete_item_request(item_id)?
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn item_count(&self, cart_code: &CartCode) -> Result<i64, CommerceError> {
        let stat: CartStatDto = self
            .cart_stat_request(cart_code)
            .send()
            .await?
            .error_for_status()?
            .json()?;
        Ok(stat.num_of_items)
    }

    async fn contains_product(
        &self,
        cart_code: &CartCode,
        product_id: &ProductId,
    ) -> Result<bool, CommerceError> {
        let in_cart: InCartDto = self
            .in_cart_request(cart_code, product_id)
            .send()
            .await?
            .error_for_status()?
            .json()?;
        Ok(in_cart.product_in_cart)
    }
}

#[async_trait]
impl CheckoutService for Storefront {
    async fn confirm(&self, callback: &PaymentCallback) -> Result<PaymentOutcome, CommerceError> {
        let outcome: PaymentOutcome = self
            .callback_request(callback)
            .send()
            .await?
            .error_for_status()?
            .json()?;
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Method;

    fn storefront() -> Storefront {
        Storefront::new(StoreClient::new().with_base_url("https://api.pixelmarket.dev"))
    }

    fn code() -> CartCode {
        CartCode::new("k3J9vQ2xLm0")
    }

    #[test]
    fn test_catalog_request_shape() {
        let req = storefront().products_request();
        assert_eq!(req.builder.method, Method::Get);
        assert_eq!(req.builder.url, "https://api.pixelmarket.dev/products/");
    }

    #[test]
    fn test_cart_request_carries_cart_code() {
        let req = storefront().cart_request(&code());
        assert_eq!(req.builder.method, Method::Get);
        assert_eq!(
            req.builder.url,
            "https://api.pixelmarket.dev/get_cart?cart_code=k3J9vQ2xLm0"
        );
    }

    #[test]
    fn test_cart_stat_request_shape() {
        let req = storefront().cart_stat_request(&code());
        assert_eq!(
            req.builder.url,
            "https://api.pixelmarket.dev/get_cart_stat?cart_code=k3J9vQ2xLm0"
        );
    }

    #[test]
    fn test_add_item_posts_json_body() {
        let req = storefront()
            .add_item_request(&code(), &ProductId::new(4))
            .unwrap();
        assert_eq!(req.builder.method, Method::Post);
        assert_eq!(req.builder.url, "https://api.pixelmarket.dev/add_item/");

        let body: serde_json::Value =
            serde_json::from_slice(req.builder.body.as_deref().unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"cart_code": "k3J9vQ2xLm0", "product_id": 4})
        );
    }

    #[test]
    fn test_update_quantity_patches_item() {
        let req = storefront()
            .update_quantity_request(&CartItemId::new(21), 3)
            .unwrap();
        assert_eq!(req.builder.method, Method::Patch);
        assert_eq!(
            req.builder.url,
            "https://api.pixelmarket.dev/update_quantity/"
        );

        let body: serde_json::Value =
            serde_json::from_slice(req.builder.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"item_id": 21, "quantity": 3}));
    }

    #[test]
    fn test_delete_item_has_no_trailing_slash() {
        let req = storefront()
            .delete_item_request(&CartItemId::new(21))
            .unwrap();
        assert_eq!(req.builder.method, Method::Post);
        assert_eq!(
            req.builder.url,
            "https://api.pixelmarket.dev/delete_cartitem"
        );

        let body: serde_json::Value =
            serde_json::from_slice(req.builder.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"item_id": 21}));
    }

    #[test]
    fn test_in_cart_request_carries_both_params() {
        let req = storefront().in_cart_request(&code(), &ProductId::new(4));
        assert_eq!(
            req.builder.url,
            "https://api.pixelmarket.dev/product_in_cart?cart_code=k3J9vQ2xLm0&product_id=4"
        );
    }

    #[test]
    fn test_callback_request_routes_by_provider() {
        let paypal = PaymentCallback::PayPal {
            payment_id: "PAYID-NBX".to_string(),
            payer_id: "B7XKV2".to_string(),
            reference: "41".to_string(),
        };
        let req = storefront().callback_request(&paypal);
        assert_eq!(req.builder.method, Method::Post);
        assert_eq!(
            req.builder.url,
            "https://api.pixelmarket.dev/paypal_payment_callback/?paymentId=PAYID-NBX&PayerID=B7XKV2&ref=41"
        );

        let flutterwave = PaymentCallback::Flutterwave {
            status: "successful".to_string(),
            tx_ref: "ref-9".to_string(),
            transaction_id: "812".to_string(),
        };
        let req = storefront().callback_request(&flutterwave);
        assert_eq!(
            req.builder.url,
            "https://api.pixelmarket.dev/payment_callback/?status=successful&tx_ref=ref-9&transaction_id=812"
        );
    }

    #[test]
    fn test_profile_requests_target_account_endpoints() {
        let sf = storefront();
        assert_eq!(
            sf.username_request().builder.url,
            "https://api.pixelmarket.dev/get_username"
        );
        assert_eq!(
            sf.user_info_request().builder.url,
            "https://api.pixelmarket.dev/user_info"
        );
    }
}
