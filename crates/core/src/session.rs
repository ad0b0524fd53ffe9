use rust_decimal::Decimal;

use crate::billing::{BillEvaluator, BillOutcome};
use crate::catalog::Catalog;
use crate::domain::product::{Product, ProductId};
use crate::form::ProductForm;
use crate::projection::{bill_total, selected_prices};

/// All state of one interactive session, owned explicitly and passed to the
/// presentation layer by reference. Single-threaded: each operation runs to
/// completion per dispatched user action, so updates apply in dispatch order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    catalog: Catalog,
    selected_prices: Vec<Decimal>,
    form_open: bool,
    form: ProductForm,
    evaluator: BillEvaluator,
}

impl Session {
    /// Fresh session over the seed catalog, nothing selected, form closed.
    pub fn new() -> Self {
        Self::with_catalog(Catalog::seed())
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        let selected_prices = selected_prices(catalog.products());
        Self {
            catalog,
            selected_prices,
            form_open: false,
            form: ProductForm::new(),
            evaluator: BillEvaluator::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The snapshot rebuilt on the latest toggle, in collection order.
    pub fn selected_prices(&self) -> &[Decimal] {
        &self.selected_prices
    }

    pub fn bill(&self) -> Decimal {
        bill_total(&self.selected_prices)
    }

    pub fn form_open(&self) -> bool {
        self.form_open
    }

    pub fn form(&self) -> &ProductForm {
        &self.form
    }

    pub fn evaluator(&self) -> &BillEvaluator {
        &self.evaluator
    }

    /// Show or hide the add-item form. Touches nothing else.
    pub fn toggle_form(&mut self) {
        self.form_open = !self.form_open;
    }

    /// Toggle one product's selection and rebuild the projected snapshot.
    /// Unknown ids fall through silently.
    pub fn toggle_product(&mut self, product_id: &ProductId) {
        self.catalog = self.catalog.toggle_selection(product_id);
        self.selected_prices = selected_prices(self.catalog.products());
    }

    pub fn set_form_name(&mut self, raw: &str) {
        self.form.set_name(raw);
    }

    pub fn set_form_amount(&mut self, raw: &str) {
        self.form.set_amount(raw);
    }

    pub fn set_form_price(&mut self, raw: &str) {
        self.form.set_price_per_unit(raw);
    }

    pub fn set_balance(&mut self, raw: &str) {
        self.evaluator.set_balance(raw);
    }

    /// Submit the add-item form. On success the product is appended and the
    /// form force-closes (its field values stay as typed). On a silent
    /// rejection nothing changes and the form stays open.
    pub fn submit_form(&mut self) -> Option<ProductId> {
        let product = self.form.submit()?;
        let product_id = product.id.clone();
        self.append_product(product);
        self.form_open = false;
        Some(product_id)
    }

    pub fn append_product(&mut self, product: Product) {
        self.catalog.append(product);
    }

    /// Recompute the bill from the current snapshot and classify the typed-in
    /// balance against it.
    pub fn evaluate_bill(&mut self) -> Option<BillOutcome> {
        let bill = self.bill();
        self.evaluator.evaluate(bill)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::billing::BillOutcome;
    use crate::domain::product::ProductId;

    use super::Session;

    fn seed_id(session: &Session, index: usize) -> ProductId {
        session.catalog().products()[index].id.clone()
    }

    #[test]
    fn fresh_session_has_seed_catalog_and_closed_form() {
        let session = Session::new();
        assert_eq!(session.catalog().len(), 5);
        assert!(session.selected_prices().is_empty());
        assert!(!session.form_open());
        assert_eq!(session.bill(), Decimal::ZERO);
    }

    #[test]
    fn toggling_a_product_rebuilds_the_snapshot() {
        let mut session = Session::new();
        let tomato = seed_id(&session, 0);
        let coconut = seed_id(&session, 2);

        session.toggle_product(&coconut);
        session.toggle_product(&tomato);

        assert_eq!(session.selected_prices(), [Decimal::from(4), Decimal::from(7)]);
        assert_eq!(session.bill(), Decimal::from(11));
    }

    #[test]
    fn toggling_twice_restores_the_snapshot() {
        let mut session = Session::new();
        let carrot = seed_id(&session, 3);

        session.toggle_product(&carrot);
        session.toggle_product(&carrot);

        assert!(session.selected_prices().is_empty());
    }

    #[test]
    fn unknown_product_id_changes_nothing() {
        let mut session = Session::new();
        let before = session.clone();
        session.toggle_product(&ProductId("prod-missing".to_string()));
        assert_eq!(session, before);
    }

    #[test]
    fn form_toggle_only_flips_visibility() {
        let mut session = Session::new();
        let catalog_before = session.catalog().clone();

        session.toggle_form();
        assert!(session.form_open());
        assert_eq!(session.catalog(), &catalog_before);

        session.toggle_form();
        assert!(!session.form_open());
    }

    #[test]
    fn submitting_a_valid_form_appends_and_closes() {
        let mut session = Session::new();
        session.toggle_form();
        session.set_form_name("Rice");
        session.set_form_amount("2");
        session.set_form_price("3");

        let appended = session.submit_form().expect("valid form");

        assert!(!session.form_open());
        assert_eq!(session.catalog().len(), 6);
        let product = session.catalog().find(&appended).expect("appended product");
        assert_eq!(product.price, Decimal::from(6));
        assert!(!product.selected);
        // Field values are intentionally not cleared.
        assert_eq!(session.form().name(), "Rice");
    }

    #[test]
    fn submitting_an_incomplete_form_is_a_silent_noop() {
        let mut session = Session::new();
        session.toggle_form();
        session.set_form_name("");
        session.set_form_amount("3");
        session.set_form_price("5");

        assert!(session.submit_form().is_none());
        assert!(session.form_open());
        assert_eq!(session.catalog().len(), 5);
    }

    #[test]
    fn appended_products_can_be_selected_like_seeded_ones() {
        let mut session = Session::new();
        session.set_form_name("Rice");
        session.set_form_amount("2");
        session.set_form_price("3");
        let rice = session.submit_form().expect("valid form");

        session.toggle_product(&rice);

        assert_eq!(session.selected_prices(), [Decimal::from(6)]);
    }

    #[test]
    fn evaluate_uses_the_current_snapshot() {
        let mut session = Session::new();
        session.toggle_product(&seed_id(&session, 0));
        session.toggle_product(&seed_id(&session, 2));
        session.set_balance("15");

        let outcome = session.evaluate_bill();

        assert_eq!(outcome, Some(BillOutcome::Surplus(Decimal::from(4))));
        assert_eq!(session.evaluator().balance().raw(), "0");
    }

    #[test]
    fn surplus_leaves_the_selection_and_rendered_bill_unchanged() {
        let mut session = Session::new();
        session.toggle_product(&seed_id(&session, 0));
        session.set_balance("10");

        session.evaluate_bill();

        // The evaluator's local bill copy is zeroed, the real selection
        // state is not; the next render still shows the same bill.
        assert_eq!(session.evaluator().last_bill(), Decimal::ZERO);
        assert_eq!(session.bill(), Decimal::from(4));
        assert_eq!(session.selected_prices(), [Decimal::from(4)]);
    }
}
