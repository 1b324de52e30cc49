use core::str::FromStr;
use serde::{Deserialize, Serialize};

use plipshop_core::{DomainError, ValueObject};

/// VAT mode applied to the whole budget. Exactly one is active; default `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaxMode {
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "10.5")]
    Reduced,
    #[serde(rename = "21")]
    Standard,
}

impl ValueObject for TaxMode {}

impl TaxMode {
    pub fn rate(&self) -> f64 {
        match self {
            TaxMode::None => 0.0,
            TaxMode::Reduced => 0.105,
            TaxMode::Standard => 0.21,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaxMode::None => "none",
            TaxMode::Reduced => "10.5",
            TaxMode::Standard => "21",
        }
    }

    /// Label printed as the quote's "Condición de IVA".
    pub fn label(&self) -> &'static str {
        match self {
            TaxMode::None => "Sin IVA",
            TaxMode::Reduced => "IVA 10.5%",
            TaxMode::Standard => "IVA 21%",
        }
    }

    /// Tax owed on `subtotal` under this mode.
    pub fn tax_on(&self, subtotal: f64) -> f64 {
        subtotal * self.rate()
    }

    /// `subtotal * (1 + rate)`.
    pub fn apply(&self, subtotal: f64) -> f64 {
        subtotal * (1.0 + self.rate())
    }
}

impl core::fmt::Display for TaxMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaxMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "none" | "" => Ok(TaxMode::None),
            "10.5" => Ok(TaxMode::Reduced),
            "21" => Ok(TaxMode::Standard),
            other => Err(DomainError::validation(format!(
                "tax mode must be one of: none, 10.5, 21 (got {other:?})"
            ))),
        }
    }
}
