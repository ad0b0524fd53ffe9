use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub String);

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A catalog entry. Immutable after creation except for the `selected` flag,
/// which the catalog flips through its own toggle operation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub selected: bool,
    pub created_at: DateTime<Utc>,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: Decimal) -> Self {
        Self { id, name: name.into(), price, selected: false, created_at: Utc::now() }
    }

    /// Build a product with a freshly generated identifier. Generated ids are
    /// unique within the process lifetime, which is the only contract callers
    /// rely on.
    pub fn generated(name: impl Into<String>, price: Decimal) -> Self {
        Self::new(ProductId(Uuid::new_v4().to_string()), name, price)
    }
}
