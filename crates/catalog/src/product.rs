use serde::{Deserialize, Deserializer, Serialize};

use plipshop_core::{Entity, ProductId};

use crate::category::ProductCategory;

/// A presentation variant of a product (color, size, scent...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductVariant {
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Catalog product, as returned by the catalog provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: ProductCategory,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<ProductVariant>,
}

// The provider sends `null` for blank text columns.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, category: ProductCategory) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            description: String::new(),
            image_url: String::new(),
            variants: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    pub fn with_variant(mut self, variant: ProductVariant) -> Self {
        self.variants.push(variant);
        self
    }

    /// Image to show, if the provider gave one.
    pub fn image(&self) -> Option<&str> {
        let url = self.image_url.trim();
        (!url.is_empty()).then_some(url)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_provider_rows_without_optional_fields() {
        let raw = r#"{"id": 7, "name": "Cinta de embalar", "category": "embalaje", "image_url": null}"#;
        let p: Product = serde_json::from_str(raw).unwrap();
        assert_eq!(p.id, ProductId::new(7));
        assert_eq!(p.category, ProductCategory::Embalaje);
        assert!(p.variants.is_empty());
        assert_eq!(p.description, "");
        assert_eq!(p.image(), None);
    }

    #[test]
    fn decodes_variants() {
        let raw = r#"{
            "id": 3,
            "name": "Mat de yoga",
            "category": "yoga_fitness",
            "description": "6mm",
            "image_url": "https://cdn/mat.png",
            "variants": [{"name": "Violeta", "image_url": "https://cdn/mat-v.png"}]
        }"#;
        let p: Product = serde_json::from_str(raw).unwrap();
        assert_eq!(p.variants.len(), 1);
        assert_eq!(p.variants[0].name, "Violeta");
        assert_eq!(p.variants[0].description, None);
        assert_eq!(p.image(), Some("https://cdn/mat.png"));
    }
}
