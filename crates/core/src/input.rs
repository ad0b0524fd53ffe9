use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Result of coercing raw field text to a number. An empty field coerces to
/// zero; text that is not a number coerces to the `NotANumber` sentinel
/// instead of an error, and validation later treats the sentinel the same
/// way it treats zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Coerced {
    Number(Decimal),
    NotANumber,
}

impl Coerced {
    pub fn is_blank(self) -> bool {
        match self {
            Coerced::Number(value) => value == Decimal::ZERO,
            Coerced::NotANumber => true,
        }
    }
}

/// A numeric text field. Every edit replaces the whole raw text and re-coerces
/// it; there is no incremental parsing and no rejected keystroke.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumericField {
    raw: String,
    value: Coerced,
}

impl Default for NumericField {
    fn default() -> Self {
        Self { raw: String::new(), value: Coerced::Number(Decimal::ZERO) }
    }
}

impl NumericField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, raw: &str) {
        self.raw = raw.to_string();
        self.value = coerce(raw);
    }

    pub fn reset_to_zero(&mut self) {
        self.set("0");
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn coerced(&self) -> Coerced {
        self.value
    }

    /// Blank means zero, empty, or not-a-number. Used as the submit guard.
    pub fn is_blank(&self) -> bool {
        self.value.is_blank()
    }
}

fn coerce(raw: &str) -> Coerced {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Coerced::Number(Decimal::ZERO);
    }
    match trimmed.parse::<Decimal>() {
        Ok(value) => Coerced::Number(value),
        Err(_) => Coerced::NotANumber,
    }
}
