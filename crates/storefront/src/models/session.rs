//! Session-related types.
//!
//! The visitor's cart and cart panel state are stored in the session. Each
//! request loads them, applies one change, and writes the whole value back.

use shophub_core::{Cart, CartPanel};
use tower_sessions::Session;

/// Session keys for storefront state.
pub mod keys {
    /// Key for the visitor's cart.
    pub const CART: &str = "cart";

    /// Key for the cart panel open/closed flag.
    pub const CART_PANEL: &str = "cart_panel";
}

/// Load the cart, defaulting to an empty one for new visitors.
pub async fn load_cart(session: &Session) -> Result<Cart, tower_sessions::session::Error> {
    Ok(session.get::<Cart>(keys::CART).await?.unwrap_or_default())
}

/// Replace the stored cart.
pub async fn store_cart(
    session: &Session,
    cart: &Cart,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(keys::CART, cart).await
}

/// Load the panel state, defaulting to closed.
pub async fn load_panel(session: &Session) -> Result<CartPanel, tower_sessions::session::Error> {
    Ok(session
        .get::<CartPanel>(keys::CART_PANEL)
        .await?
        .unwrap_or_default())
}

/// Replace the stored panel state.
pub async fn store_panel(
    session: &Session,
    panel: CartPanel,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(keys::CART_PANEL, panel).await
}
