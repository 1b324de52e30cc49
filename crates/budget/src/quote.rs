//! Printable quote ("presupuesto") rendering.
//!
//! The document is plain text laid out for printing: issuer block, client
//! block, line table, totals and notes. There is no machine-readable export.

use core::fmt;

use serde::{Deserialize, Serialize};

use plipshop_core::SessionId;

use crate::budget::Budget;
use crate::format::format_currency;
use crate::tax::TaxMode;

const EMPTY_FIELD: &str = "—";

/// Business details printed on every quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteIssuer {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub web: String,
}

impl Default for QuoteIssuer {
    fn default() -> Self {
        Self {
            name: "PlipShop".to_string(),
            address: "Av. Jujuy 50, C.A.B.A.".to_string(),
            phone: "1127240042".to_string(),
            email: "ventas.plipshop@gmail.com".to_string(),
            web: "www.plipshop.com.ar".to_string(),
        }
    }
}

/// Four-digit quote number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuoteNumber(u16);

impl QuoteNumber {
    pub fn new(value: u32) -> Self {
        Self((value % 10_000) as u16)
    }

    /// Number taken from the session id's random bits.
    pub fn from_session(session: SessionId) -> Self {
        Self((session.as_uuid().as_u128() % 10_000) as u16)
    }

    pub fn get(self) -> u16 {
        self.0
    }
}

impl fmt::Display for QuoteNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// A budget ready to print.
#[derive(Debug, Clone, Copy)]
pub struct QuoteDocument<'a> {
    issuer: &'a QuoteIssuer,
    number: QuoteNumber,
    budget: &'a Budget,
}

impl<'a> QuoteDocument<'a> {
    pub fn new(issuer: &'a QuoteIssuer, number: QuoteNumber, budget: &'a Budget) -> Self {
        Self {
            issuer,
            number,
            budget,
        }
    }

    pub fn number(&self) -> QuoteNumber {
        self.number
    }
}

fn or_dash(value: &str) -> &str {
    let value = value.trim();
    if value.is_empty() { EMPTY_FIELD } else { value }
}

impl fmt::Display for QuoteDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let issuer = self.issuer;
        let header = self.budget.header();
        let tax_mode = self.budget.tax_mode();
        let subtotal = self.budget.subtotal();

        writeln!(f, "{}  PRESUPUESTO", issuer.name)?;
        writeln!(f, "Nº {}  Fecha: {}", self.number, header.date.format("%Y-%m-%d"))?;
        writeln!(f, "Dirección: {}", issuer.address)?;
        writeln!(f, "Teléfono: {}", issuer.phone)?;
        writeln!(f, "Correo: {}", issuer.email)?;
        writeln!(f, "Web: {}", issuer.web)?;
        writeln!(f)?;

        writeln!(f, "Cliente: {}", or_dash(&header.client_name))?;
        writeln!(f, "Atendido por: {}", or_dash(&header.attended_by))?;
        writeln!(f, "Teléfono: {}", or_dash(&header.phone))?;
        writeln!(f, "Condición de IVA: {}", tax_mode.label())?;
        writeln!(f)?;

        let lines = self.budget.lines();
        let name_width = lines
            .iter()
            .map(|l| l.product.name.chars().count())
            .chain(std::iter::once("Artículo".chars().count()))
            .max()
            .unwrap_or_default();

        writeln!(
            f,
            "{:<6}{:<8}{:<name_width$}  {:>6}{:>16}{:>16}",
            "Item", "Código", "Artículo", "Cant.", "Precio", "Subtotal"
        )?;
        for (i, line) in lines.iter().enumerate() {
            writeln!(
                f,
                "{:<6}{:<8}{:<name_width$}  {:>6}{:>16}{:>16}",
                format!("{:04}", i + 1),
                format!("{:05}", line.product.id.get()),
                line.product.name,
                line.quantity,
                format_currency(line.unit_price),
                format_currency(line.line_total()),
            )?;
        }
        writeln!(f)?;

        let tax_for = |mode: TaxMode| if tax_mode == mode { mode.tax_on(subtotal) } else { 0.0 };
        writeln!(f, "Subtotal: {}", format_currency(subtotal))?;
        writeln!(f, "IVA 10.5%: {}", format_currency(tax_for(TaxMode::Reduced)))?;
        writeln!(f, "IVA 21%: {}", format_currency(tax_for(TaxMode::Standard)))?;
        writeln!(f, "TOTAL: {}", format_currency(self.budget.total()))?;
        writeln!(f)?;

        let pricing_note = match tax_mode {
            TaxMode::None => "netos, sin IVA",
            TaxMode::Reduced | TaxMode::Standard => "con IVA incluido",
        };
        writeln!(f, "- Todos los productos son de alta calidad garantizada.")?;
        writeln!(f, "- Los precios son {pricing_note}.")?;
        write!(f, "- Descuentos disponibles por compras mayores o clientes frecuentes.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::BudgetHeader;
    use crate::calculator::BudgetCalculator;
    use chrono::NaiveDate;
    use plipshop_catalog::{Product, ProductCategory};
    use plipshop_core::ProductId;

    fn calculator() -> BudgetCalculator {
        let header = BudgetHeader {
            client_name: "Ferretería Sur".to_string(),
            attended_by: String::new(),
            date: NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
            phone: "  ".to_string(),
        };
        let mut calc = BudgetCalculator::with_header(SessionId::new(), header);
        calc.upsert_line(
            &Product::new(ProductId::new(7), "Cinta", ProductCategory::Embalaje),
            2,
            10.0,
        );
        calc.upsert_line(
            &Product::new(ProductId::new(12), "Film stretch", ProductCategory::Embalaje),
            1,
            1500.0,
        );
        calc
    }

    #[test]
    fn quote_number_is_zero_padded() {
        assert_eq!(QuoteNumber::new(42).to_string(), "0042");
        assert_eq!(QuoteNumber::new(123_456).to_string(), "3456");
        assert!(QuoteNumber::from_session(SessionId::new()).get() < 10_000);
    }

    #[test]
    fn renders_header_client_and_lines() {
        let calc = calculator();
        let issuer = QuoteIssuer::default();
        let doc = calc.quote(&issuer, QuoteNumber::new(7)).to_string();

        assert!(doc.starts_with("PlipShop  PRESUPUESTO\n"));
        assert!(doc.contains("Nº 0007  Fecha: 2026-10-18"));
        assert!(doc.contains("Cliente: Ferretería Sur"));
        assert!(doc.contains("Atendido por: —"));
        assert!(doc.contains("Teléfono: —"));
        assert!(doc.contains("Condición de IVA: Sin IVA"));

        let row = doc
            .lines()
            .find(|l| l.starts_with("0002"))
            .expect("second line row");
        assert!(row.contains("00012"));
        assert!(row.contains("Film stretch"));
        assert!(row.ends_with("$ 1.500,00"));
    }

    #[test]
    fn renders_totals_and_vat_note() {
        let mut calc = calculator();
        calc.select_tax_mode(TaxMode::Standard);
        let issuer = QuoteIssuer::default();
        let doc = calc.quote(&issuer, QuoteNumber::new(1)).to_string();

        assert!(doc.contains("Subtotal: $ 1.520,00"));
        assert!(doc.contains("IVA 10.5%: $ 0,00"));
        assert!(doc.contains("IVA 21%: $ 319,20"));
        assert!(doc.contains("TOTAL: $ 1.839,20"));
        assert!(doc.contains("Los precios son con IVA incluido."));
    }

    #[test]
    fn untaxed_quote_says_net_prices() {
        let calc = calculator();
        let issuer = QuoteIssuer::default();
        let doc = calc.quote(&issuer, QuoteNumber::new(1)).to_string();
        assert!(doc.contains("Los precios son netos, sin IVA."));
    }
}
