use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use plipshop_catalog::Product;
use plipshop_core::{Aggregate, AggregateRoot, ProductId, SessionId, ValueObject};
use plipshop_events::Event;

use crate::tax::TaxMode;

/// Budget line: product with a manually entered quantity and unit price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetLine {
    pub product: Product,
    pub quantity: u32,
    pub unit_price: f64,
}

impl ValueObject for BudgetLine {}

impl BudgetLine {
    pub fn line_total(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }
}

/// Who the budget is for and who prepared it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetHeader {
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub attended_by: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub phone: String,
}

impl BudgetHeader {
    pub fn dated(date: NaiveDate) -> Self {
        Self {
            client_name: String::new(),
            attended_by: String::new(),
            date,
            phone: String::new(),
        }
    }
}

impl Default for BudgetHeader {
    fn default() -> Self {
        Self::dated(Utc::now().date_naive())
    }
}

/// Aggregate root: Budget.
///
/// Lines are unique by product id and keep insertion order; replacing a line
/// keeps its position.
#[derive(Debug, Clone, PartialEq)]
pub struct Budget {
    id: SessionId,
    header: BudgetHeader,
    lines: Vec<BudgetLine>,
    tax_mode: TaxMode,
    version: u64,
}

impl Budget {
    pub fn empty(id: SessionId, header: BudgetHeader) -> Self {
        Self {
            id,
            header,
            lines: Vec::new(),
            tax_mode: TaxMode::None,
            version: 0,
        }
    }

    pub fn header(&self) -> &BudgetHeader {
        &self.header
    }

    pub fn lines(&self) -> &[BudgetLine] {
        &self.lines
    }

    pub fn line(&self, product_id: ProductId) -> Option<&BudgetLine> {
        self.lines.iter().find(|l| l.product.id == product_id)
    }

    pub fn tax_mode(&self) -> TaxMode {
        self.tax_mode
    }

    pub fn subtotal(&self) -> f64 {
        self.lines.iter().map(BudgetLine::line_total).sum()
    }

    pub fn tax(&self) -> f64 {
        self.tax_mode.tax_on(self.subtotal())
    }

    pub fn total(&self) -> f64 {
        self.tax_mode.apply(self.subtotal())
    }
}

impl AggregateRoot for Budget {
    type Id = SessionId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: UpsertLine. Quantity 0 removes the product's line whatever the price.
#[derive(Debug, Clone, PartialEq)]
pub struct UpsertLine {
    pub product: Product,
    pub quantity: i64,
    pub unit_price: f64,
    pub occurred_at: DateTime<Utc>,
}

/// Command: SelectTaxMode.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectTaxMode {
    pub tax_mode: TaxMode,
    pub occurred_at: DateTime<Utc>,
}

/// Command: UpdateHeader.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateHeader {
    pub header: BudgetHeader,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BudgetCommand {
    UpsertLine(UpsertLine),
    SelectTaxMode(SelectTaxMode),
    UpdateHeader(UpdateHeader),
}

/// Event: LineUpserted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineUpserted {
    pub budget_id: SessionId,
    pub line: BudgetLine,
    pub occurred_at: DateTime<Utc>,
}

/// Event: LineRemoved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineRemoved {
    pub budget_id: SessionId,
    pub product_id: ProductId,
    pub occurred_at: DateTime<Utc>,
}

/// Event: TaxModeSelected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxModeSelected {
    pub budget_id: SessionId,
    pub tax_mode: TaxMode,
    pub occurred_at: DateTime<Utc>,
}

/// Event: HeaderUpdated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderUpdated {
    pub budget_id: SessionId,
    pub header: BudgetHeader,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BudgetEvent {
    LineUpserted(LineUpserted),
    LineRemoved(LineRemoved),
    TaxModeSelected(TaxModeSelected),
    HeaderUpdated(HeaderUpdated),
}

impl Event for BudgetEvent {
    fn event_type(&self) -> &'static str {
        match self {
            BudgetEvent::LineUpserted(_) => "budget.line.upserted",
            BudgetEvent::LineRemoved(_) => "budget.line.removed",
            BudgetEvent::TaxModeSelected(_) => "budget.tax_mode.selected",
            BudgetEvent::HeaderUpdated(_) => "budget.header.updated",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            BudgetEvent::LineUpserted(e) => e.occurred_at,
            BudgetEvent::LineRemoved(e) => e.occurred_at,
            BudgetEvent::TaxModeSelected(e) => e.occurred_at,
            BudgetEvent::HeaderUpdated(e) => e.occurred_at,
        }
    }
}

impl Aggregate for Budget {
    type Command = BudgetCommand;
    type Event = BudgetEvent;
    type Error = core::convert::Infallible;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            BudgetEvent::LineUpserted(e) => {
                match self
                    .lines
                    .iter_mut()
                    .find(|l| l.product.id == e.line.product.id)
                {
                    Some(line) => *line = e.line.clone(),
                    None => self.lines.push(e.line.clone()),
                }
            }
            BudgetEvent::LineRemoved(e) => {
                self.lines.retain(|l| l.product.id != e.product_id);
            }
            BudgetEvent::TaxModeSelected(e) => {
                self.tax_mode = e.tax_mode;
            }
            BudgetEvent::HeaderUpdated(e) => {
                self.header = e.header.clone();
            }
        }

        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        let events = match command {
            BudgetCommand::UpsertLine(cmd) => self.handle_upsert(cmd),
            BudgetCommand::SelectTaxMode(cmd) => self.handle_select_tax_mode(cmd),
            BudgetCommand::UpdateHeader(cmd) => self.handle_update_header(cmd),
        };
        Ok(events)
    }
}

impl Budget {
    fn handle_upsert(&self, cmd: &UpsertLine) -> Vec<BudgetEvent> {
        let quantity = u32::try_from(cmd.quantity.max(0)).unwrap_or(u32::MAX);
        let existing = self.line(cmd.product.id);

        if quantity == 0 {
            return match existing {
                Some(_) => vec![BudgetEvent::LineRemoved(LineRemoved {
                    budget_id: self.id,
                    product_id: cmd.product.id,
                    occurred_at: cmd.occurred_at,
                })],
                None => Vec::new(),
            };
        }

        let unit_price = if cmd.unit_price.is_finite() {
            cmd.unit_price.max(0.0)
        } else {
            0.0
        };
        let line = BudgetLine {
            product: cmd.product.clone(),
            quantity,
            unit_price,
        };
        if existing == Some(&line) {
            return Vec::new();
        }

        vec![BudgetEvent::LineUpserted(LineUpserted {
            budget_id: self.id,
            line,
            occurred_at: cmd.occurred_at,
        })]
    }

    fn handle_select_tax_mode(&self, cmd: &SelectTaxMode) -> Vec<BudgetEvent> {
        if cmd.tax_mode == self.tax_mode {
            return Vec::new();
        }
        vec![BudgetEvent::TaxModeSelected(TaxModeSelected {
            budget_id: self.id,
            tax_mode: cmd.tax_mode,
            occurred_at: cmd.occurred_at,
        })]
    }

    fn handle_update_header(&self, cmd: &UpdateHeader) -> Vec<BudgetEvent> {
        if cmd.header == self.header {
            return Vec::new();
        }
        vec![BudgetEvent::HeaderUpdated(HeaderUpdated {
            budget_id: self.id,
            header: cmd.header.clone(),
            occurred_at: cmd.occurred_at,
        })]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plipshop_catalog::ProductCategory;

    fn test_time() -> DateTime<Utc> {
        Utc::now()
    }

    fn test_budget() -> Budget {
        Budget::empty(
            SessionId::new(),
            BudgetHeader::dated(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()),
        )
    }

    fn product(id: u64) -> Product {
        Product::new(ProductId::new(id), format!("Producto {id}"), ProductCategory::Blanqueria)
    }

    fn upsert(id: u64, quantity: i64, unit_price: f64) -> BudgetCommand {
        BudgetCommand::UpsertLine(UpsertLine {
            product: product(id),
            quantity,
            unit_price,
            occurred_at: test_time(),
        })
    }

    #[test]
    fn upsert_inserts_then_replaces_in_place() {
        let mut budget = test_budget();
        let Ok(_) = budget.execute(&upsert(1, 2, 10.0));
        let Ok(_) = budget.execute(&upsert(2, 1, 5.0));
        let Ok(_) = budget.execute(&upsert(1, 4, 7.5));

        let ids: Vec<_> = budget.lines().iter().map(|l| l.product.id.get()).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(budget.lines()[0].quantity, 4);
        assert_eq!(budget.lines()[0].unit_price, 7.5);
    }

    #[test]
    fn zero_quantity_on_missing_line_emits_nothing() {
        let budget = test_budget();
        let Ok(events) = budget.handle(&upsert(1, 0, 99.0));
        assert!(events.is_empty());
    }

    #[test]
    fn negative_and_non_finite_prices_clamp_to_zero() {
        let mut budget = test_budget();
        let Ok(_) = budget.execute(&upsert(1, 1, -4.0));
        assert_eq!(budget.lines()[0].unit_price, 0.0);
        let Ok(_) = budget.execute(&upsert(1, 1, f64::NAN));
        assert_eq!(budget.lines()[0].unit_price, 0.0);
    }

    #[test]
    fn unchanged_line_emits_nothing() {
        let mut budget = test_budget();
        let Ok(_) = budget.execute(&upsert(1, 2, 10.0));
        let Ok(events) = budget.handle(&upsert(1, 2, 10.0));
        assert!(events.is_empty());
    }

    #[test]
    fn handle_does_not_mutate_state() {
        let mut budget = test_budget();
        let Ok(_) = budget.execute(&upsert(1, 2, 10.0));
        let before = budget.clone();

        let Ok(events1) = budget.handle(&upsert(1, 0, 0.0));
        let Ok(events2) = budget.handle(&upsert(1, 0, 0.0));

        assert_eq!(budget, before);
        assert_eq!(events1.len(), events2.len());
    }

    #[test]
    fn apply_is_deterministic() {
        let id = SessionId::new();
        let header = BudgetHeader::dated(NaiveDate::from_ymd_opt(2026, 1, 2).unwrap());
        let events = vec![
            BudgetEvent::LineUpserted(LineUpserted {
                budget_id: id,
                line: BudgetLine {
                    product: product(1),
                    quantity: 2,
                    unit_price: 10.0,
                },
                occurred_at: test_time(),
            }),
            BudgetEvent::TaxModeSelected(TaxModeSelected {
                budget_id: id,
                tax_mode: TaxMode::Standard,
                occurred_at: test_time(),
            }),
        ];

        let mut b1 = Budget::empty(id, header.clone());
        let mut b2 = Budget::empty(id, header);
        for e in &events {
            b1.apply(e);
            b2.apply(e);
        }

        assert_eq!(b1, b2);
        assert_eq!(b1.version(), 2);
        assert_eq!(b1.tax_mode(), TaxMode::Standard);
    }

    #[test]
    fn event_types_are_stable() {
        let e = BudgetEvent::LineRemoved(LineRemoved {
            budget_id: SessionId::new(),
            product_id: ProductId::new(1),
            occurred_at: test_time(),
        });
        assert_eq!(e.event_type(), "budget.line.removed");
    }
}
