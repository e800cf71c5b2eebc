//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Storefront page (catalog grid + cart panel)
//! GET  /health                 - Health check
//!
//! # Cart (form posts, 303 back to /)
//! POST /cart/add               - Add one unit of a product
//! POST /cart/update            - Adjust a line's quantity by a delta
//! POST /cart/remove            - Remove a line
//! POST /cart/open              - Open the cart panel
//! POST /cart/close             - Close the cart panel
//! POST /cart/dismiss           - Overlay click outside the panel content
//! GET  /cart/count             - Cart count badge (fragment)
//!
//! # Checkout
//! POST /checkout               - Checkout trigger (logged, no further action)
//!
//! # API
//! GET  /api/cart               - Cart summary as JSON
//! ```

pub mod api;
pub mod cart;
pub mod home;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/open", post(cart::open))
        .route("/close", post(cart::close))
        .route("/dismiss", post(cart::dismiss))
        .route("/count", get(cart::count))
}

/// Create the JSON API routes router.
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/cart", get(api::cart::show))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .nest("/cart", cart_routes())
        .route("/checkout", post(cart::checkout))
        .nest("/api", api_routes())
}
