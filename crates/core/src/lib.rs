//! ShopHub Core - catalog, cart reducer, and shared types.
//!
//! # Architecture
//!
//! The core crate contains only types and pure state logic - no I/O, no
//! HTTP, no sessions. The storefront binary loads and stores these values;
//! everything here is synchronous and deterministic.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for product IDs and prices
//! - [`catalog`] - The read-only product catalog
//! - [`cart`] - The cart reducer and its derived totals
//! - [`panel`] - Cart panel open/closed state

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod panel;
pub mod types;

pub use cart::{Cart, CartItem};
pub use catalog::{Catalog, Product};
pub use panel::{CartPanel, PanelEvent};
pub use types::*;
