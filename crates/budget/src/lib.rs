//! Budget / quote builder domain module.
//!
//! A budget is a hand-curated list of products with manually entered prices and
//! quantities, plus a VAT (IVA) mode. Totals are always derived from the current
//! lines; nothing is accumulated. `quote` renders the printable estimate.

pub mod budget;
pub mod calculator;
pub mod format;
pub mod quote;
pub mod tax;

pub use budget::{
    Budget, BudgetCommand, BudgetEvent, BudgetHeader, BudgetLine, HeaderUpdated, LineRemoved,
    LineUpserted, SelectTaxMode, TaxModeSelected, UpdateHeader, UpsertLine,
};
pub use calculator::{BudgetCalculator, BudgetTotals};
pub use format::format_currency;
pub use quote::{QuoteDocument, QuoteIssuer, QuoteNumber};
pub use tax::TaxMode;
