//! The product catalog.
//!
//! Products are immutable and supplied once at startup. The catalog never
//! changes while the server runs.

use serde::{Deserialize, Serialize};

use crate::types::{CurrencyCode, Price, ProductId};

/// A purchasable product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub description: String,
    /// Display glyph shown in place of a product image.
    pub emoji: String,
}

impl Product {
    #[must_use]
    pub fn new(
        id: i32,
        name: &str,
        price: Price,
        description: &str,
        emoji: &str,
    ) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.to_string(),
            price,
            description: description.to_string(),
            emoji: emoji.to_string(),
        }
    }
}

/// Ordered, read-only list of products.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from an ordered product list.
    ///
    /// Later duplicates of an id are dropped so every id stays unique.
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        let mut unique: Vec<Product> = Vec::with_capacity(products.len());
        for product in products {
            if !unique.iter().any(|p| p.id == product.id) {
                unique.push(product);
            }
        }
        Self { products: unique }
    }

    /// The built-in tech accessories catalog.
    #[must_use]
    pub fn builtin() -> Self {
        let usd = |cents| Price::from_cents(cents, CurrencyCode::USD);

        Self::new(vec![
            Product::new(
                1,
                "Wireless Headphones",
                usd(99_99),
                "Premium noise-cancelling headphones with 30-hour battery life",
                "🎧",
            ),
            Product::new(
                2,
                "Smart Watch",
                usd(299_99),
                "Fitness tracking, heart rate monitor, and smart notifications",
                "⌚",
            ),
            Product::new(
                3,
                "Laptop Stand",
                usd(49_99),
                "Ergonomic aluminum stand for better posture and comfort",
                "💻",
            ),
            Product::new(
                4,
                "Mechanical Keyboard",
                usd(149_99),
                "RGB backlit mechanical keyboard with custom switches",
                "⌨️",
            ),
            Product::new(
                5,
                "Wireless Mouse",
                usd(59_99),
                "Precision optical sensor with ergonomic design",
                "🖱️",
            ),
            Product::new(
                6,
                "USB-C Hub",
                usd(79_99),
                "7-in-1 hub with HDMI, USB 3.0, and SD card reader",
                "🔌",
            ),
            Product::new(
                7,
                "Portable Charger",
                usd(39_99),
                "20,000mAh power bank with fast charging support",
                "🔋",
            ),
            Product::new(
                8,
                "Bluetooth Speaker",
                usd(89_99),
                "Waterproof speaker with 360° sound and deep bass",
                "🔊",
            ),
            Product::new(
                9,
                "Webcam HD",
                usd(69_99),
                "1080p HD webcam with auto-focus and built-in microphone",
                "📷",
            ),
        ])
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
