//! Product categories and their presentation metadata.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use plipshop_core::{DomainError, ValueObject};

/// Catalog category. Unknown provider values land in `Otros`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    Embalaje,
    YogaFitness,
    Encuadernacion,
    Blanqueria,
    Perfumeria,
    #[serde(other)]
    Otros,
}

impl ValueObject for ProductCategory {}

impl ProductCategory {
    /// Every category, in display order.
    pub const ALL: [ProductCategory; 6] = [
        ProductCategory::Embalaje,
        ProductCategory::YogaFitness,
        ProductCategory::Encuadernacion,
        ProductCategory::Blanqueria,
        ProductCategory::Perfumeria,
        ProductCategory::Otros,
    ];

    /// Wire key, as stored by the catalog provider.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Embalaje => "embalaje",
            ProductCategory::YogaFitness => "yoga_fitness",
            ProductCategory::Encuadernacion => "encuadernacion",
            ProductCategory::Blanqueria => "blanqueria",
            ProductCategory::Perfumeria => "perfumeria",
            ProductCategory::Otros => "otros",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProductCategory::Embalaje => "Embalaje",
            ProductCategory::YogaFitness => "Yoga y Fitness",
            ProductCategory::Encuadernacion => "Encuadernación",
            ProductCategory::Blanqueria => "Blanquería",
            ProductCategory::Perfumeria => "Perfumería",
            ProductCategory::Otros => "Otros",
        }
    }

    /// Brand color used for badges and buttons of this category.
    pub fn color(&self) -> &'static str {
        match self {
            ProductCategory::Embalaje => "#0257a4",
            ProductCategory::YogaFitness => "#92d4fa",
            ProductCategory::Encuadernacion => "#2a9134",
            ProductCategory::Blanqueria => "#ffc220",
            ProductCategory::Perfumeria => "#ff914d",
            ProductCategory::Otros => "#888888",
        }
    }

    /// Title-cased wire key (`yoga_fitness` -> `Yoga Fitness`), used on product cards.
    pub fn label(&self) -> String {
        self.as_str()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl core::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        ProductCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == key)
            .ok_or_else(|| DomainError::validation(format!("unknown category: {s}")))
    }
}
