use rust_decimal::Decimal;

use crate::domain::product::Product;
use crate::input::{Coerced, NumericField};

/// The add-item form. Three independently editable fields; numeric fields go
/// through coercion-as-validation, so a non-numeric entry becomes the
/// not-a-number sentinel and blocks submission the same way an empty field
/// does. Fields are not cleared after a successful submit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductForm {
    name: String,
    amount: NumericField,
    price_per_unit: NumericField,
}

impl ProductForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn amount(&self) -> &NumericField {
        &self.amount
    }

    pub fn price_per_unit(&self) -> &NumericField {
        &self.price_per_unit
    }

    pub fn set_name(&mut self, raw: &str) {
        self.name = raw.to_string();
    }

    pub fn set_amount(&mut self, raw: &str) {
        self.amount.set(raw);
    }

    pub fn set_price_per_unit(&mut self, raw: &str) {
        self.price_per_unit.set(raw);
    }

    /// Build the product when every field holds a usable value, or abort
    /// silently: `None`, no message, entered values intact. The product price
    /// is `amount × price_per_unit` and the new record starts unselected.
    pub fn submit(&self) -> Option<Product> {
        if self.name.is_empty() || self.amount.is_blank() || self.price_per_unit.is_blank() {
            return None;
        }

        let (Coerced::Number(amount), Coerced::Number(price_per_unit)) =
            (self.amount.coerced(), self.price_per_unit.coerced())
        else {
            return None;
        };

        Some(Product::generated(self.name.clone(), amount * price_per_unit))
    }
}
