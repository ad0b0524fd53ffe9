pub mod billing;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod form;
pub mod input;
pub mod projection;
pub mod session;

pub use billing::{BillEvaluator, BillOutcome};
pub use catalog::Catalog;
pub use domain::product::{Product, ProductId};
pub use form::ProductForm;
pub use input::{Coerced, NumericField};
pub use projection::{bill_total, selected_prices};
pub use session::Session;
