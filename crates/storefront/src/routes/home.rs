//! Storefront page.
//!
//! Renders the header with the cart badge, the catalog grid, and, when the
//! visitor has it open, the cart panel.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use shophub_core::Product;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::models::session::{load_cart, load_panel};
use crate::routes::cart::CartView;
use crate::state::AppState;

/// Product card display data for templates.
#[derive(Debug, Clone)]
pub struct ProductCardView {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: String,
    pub emoji: String,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i32(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.display(),
            emoji: product.emoji.clone(),
        }
    }
}

/// Storefront page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub products: Vec<ProductCardView>,
    pub cart: CartView,
    /// Badge count; shared with the `cart_count` partial.
    pub count: u64,
    pub panel_open: bool,
}

/// Display the storefront page.
#[instrument(skip(state, session))]
pub async fn home(State(state): State<AppState>, session: Session) -> Result<HomeTemplate> {
    let cart = load_cart(&session).await?;
    let panel = load_panel(&session).await?;

    let cart = CartView::from(&cart);
    Ok(HomeTemplate {
        products: state
            .catalog()
            .products()
            .iter()
            .map(ProductCardView::from)
            .collect(),
        count: cart.item_count,
        cart,
        panel_open: panel.is_open(),
    })
}
