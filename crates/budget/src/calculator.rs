//! Session budget calculator: direct budget operations and derived totals.

use chrono::Utc;
use serde::Serialize;

use plipshop_catalog::Product;
use plipshop_core::{Aggregate, AggregateRoot, SessionId};

use crate::budget::{
    Budget, BudgetCommand, BudgetHeader, BudgetLine, SelectTaxMode, UpdateHeader, UpsertLine,
};
use crate::quote::{QuoteDocument, QuoteIssuer, QuoteNumber};
use crate::tax::TaxMode;

/// Derived money figures of a budget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BudgetTotals {
    pub subtotal: f64,
    /// 10.5% VAT amount; zero unless that mode is selected.
    pub tax_reduced: f64,
    /// 21% VAT amount; zero unless that mode is selected.
    pub tax_standard: f64,
    pub total: f64,
}

/// Single-session budget builder. Every operation is total.
#[derive(Debug, Clone)]
pub struct BudgetCalculator {
    budget: Budget,
}

impl Default for BudgetCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl BudgetCalculator {
    pub fn new() -> Self {
        Self::with_header(SessionId::new(), BudgetHeader::default())
    }

    pub fn with_header(session: SessionId, header: BudgetHeader) -> Self {
        Self {
            budget: Budget::empty(session, header),
        }
    }

    pub fn budget(&self) -> &Budget {
        &self.budget
    }

    pub fn lines(&self) -> &[BudgetLine] {
        self.budget.lines()
    }

    pub fn header(&self) -> &BudgetHeader {
        self.budget.header()
    }

    pub fn tax_mode(&self) -> TaxMode {
        self.budget.tax_mode()
    }

    /// Insert or replace the product's line; quantity 0 removes it.
    pub fn upsert_line(&mut self, product: &Product, quantity: i64, unit_price: f64) {
        self.execute(BudgetCommand::UpsertLine(UpsertLine {
            product: product.clone(),
            quantity,
            unit_price,
            occurred_at: Utc::now(),
        }));
    }

    pub fn select_tax_mode(&mut self, tax_mode: TaxMode) {
        self.execute(BudgetCommand::SelectTaxMode(SelectTaxMode {
            tax_mode,
            occurred_at: Utc::now(),
        }));
    }

    pub fn update_header(&mut self, header: BudgetHeader) {
        self.execute(BudgetCommand::UpdateHeader(UpdateHeader {
            header,
            occurred_at: Utc::now(),
        }));
    }

    pub fn subtotal(&self) -> f64 {
        self.budget.subtotal()
    }

    pub fn total(&self) -> f64 {
        self.budget.total()
    }

    pub fn totals(&self) -> BudgetTotals {
        let subtotal = self.subtotal();
        let tax_mode = self.tax_mode();
        let tax_for = |mode: TaxMode| if tax_mode == mode { mode.tax_on(subtotal) } else { 0.0 };
        BudgetTotals {
            subtotal,
            tax_reduced: tax_for(TaxMode::Reduced),
            tax_standard: tax_for(TaxMode::Standard),
            total: self.total(),
        }
    }

    pub fn quote<'a>(&'a self, issuer: &'a QuoteIssuer, number: QuoteNumber) -> QuoteDocument<'a> {
        QuoteDocument::new(issuer, number, &self.budget)
    }

    fn execute(&mut self, command: BudgetCommand) {
        let Ok(events) = self.budget.execute(&command);
        tracing::debug!(
            session = %self.budget.id(),
            events = events.len(),
            lines = self.budget.lines().len(),
            "budget updated"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plipshop_catalog::ProductCategory;
    use plipshop_core::ProductId;

    fn product(id: u64) -> Product {
        Product::new(ProductId::new(id), format!("Producto {id}"), ProductCategory::Perfumeria)
    }

    fn sample() -> BudgetCalculator {
        let mut calc = BudgetCalculator::new();
        calc.upsert_line(&product(1), 2, 10.0);
        calc.upsert_line(&product(2), 1, 5.0);
        calc
    }

    #[test]
    fn subtotal_and_total_with_standard_vat() {
        let mut calc = sample();
        calc.select_tax_mode(TaxMode::Standard);

        assert_eq!(calc.subtotal(), 25.0);
        assert!((calc.total() - 30.25).abs() < 1e-9);

        let totals = calc.totals();
        assert!((totals.tax_standard - 5.25).abs() < 1e-9);
        assert_eq!(totals.tax_reduced, 0.0);
    }

    #[test]
    fn reduced_vat() {
        let mut calc = sample();
        calc.select_tax_mode(TaxMode::Reduced);
        assert!((calc.total() - 27.625).abs() < 1e-9);
        assert_eq!(calc.totals().tax_standard, 0.0);
    }

    #[test]
    fn no_vat_total_equals_subtotal_exactly() {
        let mut calc = sample();
        calc.upsert_line(&product(3), 3, 0.1);
        assert_eq!(calc.tax_mode(), TaxMode::None);
        assert_eq!(calc.total(), calc.subtotal());
    }

    #[test]
    fn zero_quantity_removes_regardless_of_price() {
        let mut calc = sample();
        calc.upsert_line(&product(1), 0, 1234.0);
        assert_eq!(calc.lines().len(), 1);
        assert_eq!(calc.subtotal(), 5.0);
    }

    #[test]
    fn switching_tax_mode_keeps_lines() {
        let mut calc = sample();
        let before = calc.lines().to_vec();

        calc.select_tax_mode(TaxMode::Standard);
        calc.select_tax_mode(TaxMode::Reduced);
        calc.select_tax_mode(TaxMode::None);

        assert_eq!(calc.lines(), before.as_slice());
        assert_eq!(calc.total(), 25.0);
    }

    #[test]
    fn empty_budget_totals_are_zero() {
        let calc = BudgetCalculator::new();
        let totals = calc.totals();
        assert_eq!(totals.subtotal, 0.0);
        assert_eq!(totals.total, 0.0);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: the total is a pure function of the current lines and tax mode.
            #[test]
            fn total_is_derived_from_lines(
                edits in prop::collection::vec((0u64..6, -3i64..20, -10.0f64..1000.0), 0..40),
                mode in prop_oneof![Just(TaxMode::None), Just(TaxMode::Reduced), Just(TaxMode::Standard)],
            ) {
                let mut calc = BudgetCalculator::new();
                for (id, qty, price) in edits {
                    calc.upsert_line(&product(id), qty, price);
                }
                calc.select_tax_mode(mode);

                let mut ids: Vec<_> = calc.lines().iter().map(|l| l.product.id).collect();
                let len = ids.len();
                ids.sort();
                ids.dedup();
                prop_assert_eq!(ids.len(), len);
                prop_assert!(calc.lines().iter().all(|l| l.quantity >= 1 && l.unit_price >= 0.0));

                let expected: f64 = calc
                    .lines()
                    .iter()
                    .map(|l| f64::from(l.quantity) * l.unit_price)
                    .sum();
                prop_assert_eq!(calc.subtotal(), expected);
                prop_assert_eq!(calc.total(), expected * (1.0 + mode.rate()));
            }
        }
    }
}
