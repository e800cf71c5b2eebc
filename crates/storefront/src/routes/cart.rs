//! Cart route handlers.
//!
//! Every control in the cart UI is a plain HTML form. Each handler loads the
//! visitor's cart from the session, applies one reducer operation, stores the
//! result, and redirects back to the storefront page (Post/Redirect/Get).
//!
//! The load-modify-store sequence is not atomic across requests. Two
//! overlapping requests from the same visitor race, and the last write wins,
//! dropping the other change. A visitor clicking one button at a time never
//! hits this.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use shophub_core::{Cart, CartItem, CurrencyCode, PanelEvent, ProductId};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::models::session::{load_cart, load_panel, store_cart, store_panel};
use crate::state::AppState;

/// Cart item display data for templates.
#[derive(Debug, Clone)]
pub struct CartItemView {
    pub product_id: i32,
    pub name: String,
    pub emoji: String,
    pub price: String,
    pub quantity: u32,
}

/// Cart display data for templates.
#[derive(Debug, Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total: String,
    pub item_count: u64,
}

impl From<&CartItem> for CartItemView {
    fn from(item: &CartItem) -> Self {
        Self {
            product_id: item.id().as_i32(),
            name: item.product.name.clone(),
            emoji: item.product.emoji.clone(),
            price: item.product.price.display(),
            quantity: item.quantity(),
        }
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        let currency = cart
            .items()
            .first()
            .map_or_else(CurrencyCode::default, |item| item.product.price.currency_code());

        Self {
            items: cart.items().iter().map(CartItemView::from).collect(),
            total: currency.format_fixed(cart.total_price()),
            item_count: cart.total_items(),
        }
    }
}

/// Form naming a single product.
#[derive(Debug, Deserialize)]
pub struct ProductForm {
    pub product_id: i32,
}

/// Quantity adjustment form data.
#[derive(Debug, Deserialize)]
pub struct UpdateQuantityForm {
    pub product_id: i32,
    pub delta: i64,
}

/// Cart count badge fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u64,
}

/// Add one unit of a catalog product to the cart.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<ProductForm>,
) -> Result<Redirect> {
    let product_id = ProductId::new(form.product_id);
    let product = state
        .catalog()
        .get(product_id)
        .ok_or_else(|| AppError::NotFound(format!("product {product_id}")))?;

    let mut cart = load_cart(&session).await?;
    cart.add(product);
    store_cart(&session, &cart).await?;

    let id = product_id.to_string();
    add_breadcrumb("cart", "Added to cart", Some(&[("product_id", id.as_str())]));
    tracing::info!(%product_id, total_items = cart.total_items(), "Added to cart");

    Ok(Redirect::to("/"))
}

/// Adjust the quantity of a cart line. Unknown products are ignored.
///
/// Any `i64` delta is accepted; the result is floored at 1. Like the other
/// cart handlers, a concurrent request from the same session can overwrite
/// this change (last write wins).
#[instrument(skip(session))]
pub async fn update(session: Session, Form(form): Form<UpdateQuantityForm>) -> Result<Redirect> {
    let product_id = ProductId::new(form.product_id);

    let mut cart = load_cart(&session).await?;
    match cart.update_quantity(product_id, form.delta) {
        Some(quantity) => {
            store_cart(&session, &cart).await?;
            tracing::info!(%product_id, quantity, "Updated cart quantity");
        }
        None => tracing::debug!(%product_id, "Quantity update for product not in cart"),
    }

    Ok(Redirect::to("/"))
}

/// Remove a cart line. Unknown products are ignored.
#[instrument(skip(session))]
pub async fn remove(session: Session, Form(form): Form<ProductForm>) -> Result<Redirect> {
    let product_id = ProductId::new(form.product_id);

    let mut cart = load_cart(&session).await?;
    if cart.remove(product_id) {
        store_cart(&session, &cart).await?;

        let id = product_id.to_string();
        add_breadcrumb("cart", "Removed from cart", Some(&[("product_id", id.as_str())]));
        tracing::info!(%product_id, "Removed from cart");
    } else {
        tracing::debug!(%product_id, "Remove for product not in cart");
    }

    Ok(Redirect::to("/"))
}

/// Apply a panel event and redirect back to the page.
async fn apply_panel_event(session: &Session, event: PanelEvent) -> Result<Redirect> {
    let panel = load_panel(session).await?.apply(event);
    store_panel(session, panel).await?;
    tracing::debug!(?event, ?panel, "Cart panel event");
    Ok(Redirect::to("/"))
}

/// Open the cart panel (header cart trigger).
#[instrument(skip(session))]
pub async fn open(session: Session) -> Result<Redirect> {
    apply_panel_event(&session, PanelEvent::Open).await
}

/// Close the cart panel (close control or "Continue Shopping").
#[instrument(skip(session))]
pub async fn close(session: Session) -> Result<Redirect> {
    apply_panel_event(&session, PanelEvent::Close).await
}

/// Close the cart panel from a click on the overlay outside its content.
#[instrument(skip(session))]
pub async fn dismiss(session: Session) -> Result<Redirect> {
    apply_panel_event(&session, PanelEvent::OverlayClick).await
}

/// Cart count badge fragment.
#[instrument(skip(session))]
pub async fn count(session: Session) -> Result<impl IntoResponse> {
    let cart = load_cart(&session).await?;
    Ok(CartCountTemplate {
        count: cart.total_items(),
    })
}

/// Checkout trigger.
///
/// Checkout has no behaviour yet: the request is logged and the visitor is
/// returned to the page with cart and panel untouched.
#[instrument(skip(session))]
pub async fn checkout(session: Session) -> Result<Redirect> {
    let cart = load_cart(&session).await?;

    add_breadcrumb("cart", "Checkout requested", None);
    tracing::info!(
        lines = cart.len(),
        total_items = cart.total_items(),
        total_price = %cart.total_price(),
        "Checkout requested"
    );

    Ok(Redirect::to("/"))
}
