//! Type-safe price representation using decimal arithmetic.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A non-negative amount in a single currency.
///
/// Only [`Price::from_cents`] constructs one, so the amount can never be
/// negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    amount: Decimal,
    /// ISO 4217 currency code.
    currency_code: CurrencyCode,
}

impl Price {
    /// Create a price from a whole number of minor units (cents for USD).
    #[must_use]
    pub fn from_cents(cents: u32, currency_code: CurrencyCode) -> Self {
        Self {
            amount: Decimal::new(i64::from(cents), 2),
            currency_code,
        }
    }

    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    #[must_use]
    pub const fn currency_code(&self) -> CurrencyCode {
        self.currency_code
    }

    /// Amount multiplied by a line quantity.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Decimal {
        self.amount * Decimal::from(quantity)
    }

    /// Format for a product card or cart row, e.g. `$99.99` or `$10.5`.
    ///
    /// Trailing fractional zeros are dropped; totals use
    /// [`CurrencyCode::format_fixed`] instead.
    #[must_use]
    pub fn display(&self) -> String {
        format!("{}{}", self.currency_code.symbol(), self.amount.normalize())
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display())
    }
}

/// ISO 4217 currency codes. The storefront sells in US dollars only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
}

impl CurrencyCode {
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::USD => "$",
        }
    }

    /// Format an amount with exactly two fractional digits, e.g. `$199.97`.
    #[must_use]
    pub fn format_fixed(&self, amount: Decimal) -> String {
        let rounded = round_money(amount);
        format!("{}{rounded:.2}", self.symbol())
    }
}

/// Round to cents, half away from zero. The result always carries two
/// fractional digits, so zero displays as `0.00`.
#[must_use]
pub fn round_money(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_cents_is_free() {
        let price = Price::from_cents(0, CurrencyCode::USD);
        assert_eq!(price.amount(), Decimal::ZERO);
        assert_eq!(price.display(), "$0");
    }

    #[test]
    fn test_display_drops_trailing_zeros() {
        assert_eq!(Price::from_cents(9999, CurrencyCode::USD).display(), "$99.99");
        assert_eq!(Price::from_cents(1050, CurrencyCode::USD).display(), "$10.5");
        assert_eq!(Price::from_cents(2000, CurrencyCode::USD).display(), "$20");
    }

    #[test]
    fn test_format_fixed_always_two_digits() {
        let usd = CurrencyCode::USD;
        assert_eq!(usd.format_fixed(Decimal::ZERO), "$0.00");
        assert_eq!(usd.format_fixed(Decimal::new(105, 1)), "$10.50");
        assert_eq!(usd.format_fixed(Decimal::new(199_97, 2)), "$199.97");
    }

    #[test]
    fn test_round_money_half_away_from_zero() {
        assert_eq!(round_money(Decimal::new(1005, 3)), Decimal::new(101, 2));
        assert_eq!(round_money(Decimal::new(1004, 3)), Decimal::new(100, 2));
        assert_eq!(round_money(Decimal::ZERO).to_string(), "0.00");
    }

    #[test]
    fn test_times_quantity() {
        let price = Price::from_cents(4999, CurrencyCode::USD);
        assert_eq!(price.times(2), Decimal::new(9998, 2));
        assert_eq!(price.times(0), Decimal::ZERO);
    }

    #[test]
    fn test_price_serde_keeps_decimal_as_string() {
        let price = Price::from_cents(6999, CurrencyCode::USD);
        let json = serde_json::to_value(price).unwrap();
        assert_eq!(json["amount"], "69.99");
        assert_eq!(json["currency_code"], "USD");

        let back: Price = serde_json::from_value(json).unwrap();
        assert_eq!(back, price);
    }
}
