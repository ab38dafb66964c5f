//! Client-side session persistence for PixelMarket.
//!
//! Everything the storefront keeps on the shopper's device: the cart code
//! correlating them with a server-side cart, the access token with its
//! expiry gate, and the session identity state.
//!
//! # Example
//!
//! ```rust,ignore
//! use pixel_session::{CartCodeStore, ClientStore, TokenStore};
//!
//! let store = ClientStore::open_default()?;
//!
//! // First call generates and persists a code; later calls return it.
//! let cart_code = CartCodeStore::new(&store).obtain()?;
//!
//! // Attach the token only while it is valid.
//! let token = TokenStore::new(&store).valid_token()?;
//! ```

mod cart_code;
mod error;
mod state;
mod store;
mod token;

pub use cart_code::{retire_cart, CartCodeStore};
pub use error::SessionError;
pub use state::{sign_out, Role, SessionEvent, SessionState};
pub use store::ClientStore;
pub use token::{AccessToken, TokenStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        retire_cart, sign_out, AccessToken, CartCodeStore, ClientStore, Role, SessionError,
        SessionEvent, SessionState, TokenStore,
    };
}
