use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::input::{Coerced, NumericField};

/// The three business outcomes of comparing the balance to the bill. These
/// are not failures; the presentation layer shows them as a blocking notice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BillOutcome {
    Surplus(Decimal),
    Shortfall(Decimal),
    Exact,
}

impl BillOutcome {
    /// User-facing notice text, with the configured currency symbol.
    pub fn notice(&self, currency_symbol: &str) -> String {
        match self {
            BillOutcome::Surplus(left) => {
                format!("You have {currency_symbol}{left} left on your balance to spend.")
            }
            BillOutcome::Shortfall(missing) => format!(
                "You don't have enough money. Delete items worth of {currency_symbol}{missing}."
            ),
            BillOutcome::Exact => "All good! You can now place your shopping.".to_string(),
        }
    }
}

/// Holds the typed-in balance and classifies it against the bill total.
///
/// `last_bill` is a local copy of the bill passed to the most recent
/// `evaluate` call. A surplus zeroes it together with the balance, but the
/// underlying selection state is not touched, so the rendered bill total does
/// not change afterwards. That mismatch is observed behavior and is kept.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BillEvaluator {
    balance: NumericField,
    last_bill: Decimal,
}

impl BillEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn balance(&self) -> &NumericField {
        &self.balance
    }

    pub fn last_bill(&self) -> Decimal {
        self.last_bill
    }

    pub fn set_balance(&mut self, raw: &str) {
        self.balance.set(raw);
    }

    /// Classify `balance - bill`. An empty balance coerces to zero. A balance
    /// stuck on the not-a-number sentinel matches none of the three
    /// comparisons and yields no outcome at all, mirroring the source
    /// behavior this tool reproduces.
    pub fn evaluate(&mut self, bill: Decimal) -> Option<BillOutcome> {
        self.last_bill = bill;

        let Coerced::Number(balance) = self.balance.coerced() else {
            return None;
        };

        let total = balance - bill;
        if total > Decimal::ZERO {
            self.balance.reset_to_zero();
            self.last_bill = Decimal::ZERO;
            return Some(BillOutcome::Surplus(total));
        }
        if total < Decimal::ZERO {
            return Some(BillOutcome::Shortfall(total.abs()));
        }
        Some(BillOutcome::Exact)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::{BillEvaluator, BillOutcome};

    fn bill_of_eleven() -> Decimal {
        // Selected prices [4, 7].
        Decimal::from(4) + Decimal::from(7)
    }

    #[test]
    fn surplus_reports_the_remaining_amount_and_resets_the_balance() {
        let mut evaluator = BillEvaluator::new();
        evaluator.set_balance("15");

        let outcome = evaluator.evaluate(bill_of_eleven());

        assert_eq!(outcome, Some(BillOutcome::Surplus(Decimal::from(4))));
        assert_eq!(evaluator.balance().raw(), "0");
        assert_eq!(evaluator.last_bill(), Decimal::ZERO);
    }

    #[test]
    fn exact_balance_matches_the_bill() {
        let mut evaluator = BillEvaluator::new();
        evaluator.set_balance("11");

        let outcome = evaluator.evaluate(bill_of_eleven());

        assert_eq!(outcome, Some(BillOutcome::Exact));
        assert_eq!(evaluator.balance().raw(), "11");
    }

    #[test]
    fn shortfall_reports_the_absolute_deficit_without_mutation() {
        let mut evaluator = BillEvaluator::new();
        evaluator.set_balance("5");

        let outcome = evaluator.evaluate(bill_of_eleven());

        assert_eq!(outcome, Some(BillOutcome::Shortfall(Decimal::from(6))));
        assert_eq!(evaluator.balance().raw(), "5");
        assert_eq!(evaluator.last_bill(), bill_of_eleven());
    }

    #[test]
    fn empty_balance_evaluates_as_zero() {
        let mut evaluator = BillEvaluator::new();

        let outcome = evaluator.evaluate(bill_of_eleven());

        assert_eq!(outcome, Some(BillOutcome::Shortfall(Decimal::from(11))));
    }

    #[test]
    fn empty_balance_against_empty_bill_is_exact() {
        let mut evaluator = BillEvaluator::new();
        assert_eq!(evaluator.evaluate(Decimal::ZERO), Some(BillOutcome::Exact));
    }

    #[test]
    fn non_numeric_balance_yields_no_outcome() {
        let mut evaluator = BillEvaluator::new();
        evaluator.set_balance("lots");
        assert_eq!(evaluator.evaluate(bill_of_eleven()), None);
    }

    #[test]
    fn surplus_notice_carries_the_currency_symbol() {
        let notice = BillOutcome::Surplus(Decimal::from(4)).notice("£");
        assert_eq!(notice, "You have £4 left on your balance to spend.");
    }

    #[test]
    fn shortfall_notice_names_the_missing_amount() {
        let notice = BillOutcome::Shortfall(Decimal::from(6)).notice("£");
        assert_eq!(notice, "You don't have enough money. Delete items worth of £6.");
    }

    #[test]
    fn exact_notice_confirms_the_shopping() {
        assert_eq!(BillOutcome::Exact.notice("£"), "All good! You can now place your shopping.");
    }
}
