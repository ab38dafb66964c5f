//! Storefront domain types and client-side engines for PixelMarket.
//!
//! This crate provides the client-side core of a games and electronics
//! storefront:
//!
//! - **Catalog**: Products and the full catalog snapshot fetched from the
//!   backend
//! - **Cart**: Mirrored cart items, derived cart state, and the reconciler
//!   that keeps them synchronized with the server across mutations
//! - **Search**: Query classification, synonym expansion, and the weighted
//!   relevance ranker with related-product derivation
//! - **Checkout**: Payment-provider callback parsing and the completion flow
//!
//! The crate owns no I/O. Server access goes through the [`CartService`],
//! [`CatalogService`] and [`CheckoutService`] traits; an HTTP implementation
//! lives in `pixel-data`.
//!
//! # Example
//!
//! ```rust,ignore
//! use pixel_commerce::prelude::*;
//!
//! // Rank a search against the loaded catalog
//! let query = SearchQuery::classify("juegos de rockstar");
//! let ranker = SearchRanker::new(&catalog);
//! let outcome = ranker.search(&query, &mut rand::thread_rng());
//!
//! // Reconcile the cart through a service implementation
//! let mut cart = CartReconciler::new(client);
//! cart.load(Some(&cart_code)).await?;
//! cart.update_quantity(&item_id, 3).await?;
//! assert_eq!(cart.state().item_count(), 3);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod notify;
pub mod search;

pub use error::CommerceError;
pub use ids::{CartCode, CartItemId, ProductId};
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::{CartCode, CartItemId, ProductId};
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, CatalogService, Product};

    // Cart
    pub use crate::cart::{
        CartItem, CartReconciler, CartService, CartSnapshot, CartState, ConfirmGate, InCartHint,
        MIN_QUANTITY,
    };

    // Checkout
    pub use crate::checkout::{
        CheckoutCompletion, CheckoutService, CheckoutState, PaymentCallback, PaymentOutcome,
        PaymentProvider,
    };

    // Search
    pub use crate::search::{SearchKind, SearchOutcome, SearchQuery, SearchRanker, RELATED_LIMIT};

    // Notifications
    pub use crate::notify::{Notifier, NullNotifier, TracingNotifier};
}
