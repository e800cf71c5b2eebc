//! Read-only JSON view of the visitor's cart.

use axum::Json;
use rust_decimal::Decimal;
use serde::Serialize;
use shophub_core::{Cart, CartItem, CartPanel};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::models::session::{load_cart, load_panel};

/// One cart line in the JSON summary.
#[derive(Debug, Serialize)]
pub struct CartLineSummary {
    pub product_id: i32,
    pub name: String,
    pub emoji: String,
    pub unit_price: Decimal,
    pub quantity: u32,
}

/// JSON summary of the cart and its derived totals.
#[derive(Debug, Serialize)]
pub struct CartSummary {
    pub items: Vec<CartLineSummary>,
    pub total_items: u64,
    pub total_price: Decimal,
    pub panel_open: bool,
}

impl From<&CartItem> for CartLineSummary {
    fn from(item: &CartItem) -> Self {
        Self {
            product_id: item.id().as_i32(),
            name: item.product.name.clone(),
            emoji: item.product.emoji.clone(),
            unit_price: item.product.price.amount(),
            quantity: item.quantity(),
        }
    }
}

impl CartSummary {
    #[must_use]
    pub fn new(cart: &Cart, panel: CartPanel) -> Self {
        Self {
            items: cart.items().iter().map(CartLineSummary::from).collect(),
            total_items: cart.total_items(),
            total_price: cart.total_price(),
            panel_open: panel.is_open(),
        }
    }
}

/// Return the cart summary as JSON.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<Json<CartSummary>> {
    let cart = load_cart(&session).await?;
    let panel = load_panel(&session).await?;
    Ok(Json(CartSummary::new(&cart, panel)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use shophub_core::{Catalog, ProductId};

    use super::*;

    #[test]
    fn test_empty_summary_json() {
        let summary = CartSummary::new(&Cart::new(), CartPanel::Closed);
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["items"], serde_json::json!([]));
        assert_eq!(json["total_items"], 0);
        assert_eq!(json["total_price"], "0.00");
        assert_eq!(json["panel_open"], false);
    }

    #[test]
    fn test_summary_json_lines() {
        let catalog = Catalog::builtin();
        let mut cart = Cart::new();
        let headphones = catalog.get(ProductId::new(1)).unwrap();
        cart.add(headphones);
        cart.add(headphones);

        let json = serde_json::to_value(CartSummary::new(&cart, CartPanel::Open)).unwrap();
        assert_eq!(json["items"][0]["product_id"], 1);
        assert_eq!(json["items"][0]["unit_price"], "99.99");
        assert_eq!(json["items"][0]["quantity"], 2);
        assert_eq!(json["total_items"], 2);
        assert_eq!(json["total_price"], "199.98");
        assert_eq!(json["panel_open"], true);
    }
}
