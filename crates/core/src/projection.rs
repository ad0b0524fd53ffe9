use rust_decimal::Decimal;

use crate::domain::product::Product;

/// Prices of the currently selected products, in collection order. Pure;
/// recomputed from the catalog after every toggle rather than maintained
/// incrementally.
pub fn selected_prices(products: &[Product]) -> Vec<Decimal> {
    products.iter().filter(|product| product.selected).map(|product| product.price).collect()
}

/// Sum of the projected prices.
pub fn bill_total(prices: &[Decimal]) -> Decimal {
    prices.iter().copied().sum()
}
