//! The static product catalog.
//!
//! The catalog is an ordered, read-only list of products supplied by the
//! deployment (the storefront loads it from a JSON content file at
//! startup). Product names are the sole identity key for cart entries, so
//! construction rejects duplicates.

use serde::{Deserialize, Serialize};

use crate::types::Price;

/// A single catalog entry.
///
/// The name doubles as the product's identity key; the price is the
/// canonical immutable unit price for that name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Display name and identity key.
    pub name: String,
    /// Canonical unit price.
    pub price: Price,
}

/// Errors that can occur when building a [`Catalog`].
#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogError {
    /// Two entries share a name. Names are the identity key, so this would
    /// make cart entries ambiguous.
    #[error("duplicate product name in catalog: {0}")]
    DuplicateName(String),
}

/// An ordered, read-only product list.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from an ordered product list.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateName`] if two entries share a name.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = std::collections::HashSet::new();
        for product in &products {
            if !seen.insert(product.name.as_str()) {
                return Err(CatalogError::DuplicateName(product.name.clone()));
            }
        }
        Ok(Self { products })
    }

    /// Look up a product by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name == name)
    }

    /// Iterate products in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::CurrencyCode;

    fn product(name: &str, price: &str) -> Product {
        Product {
            name: name.to_string(),
            price: Price::new(price.parse().unwrap(), CurrencyCode::ZAR),
        }
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let result = Catalog::new(vec![
            product("Unisex Scarf", "200.00"),
            product("Unisex Scarf", "250.00"),
        ]);
        assert!(matches!(result, Err(CatalogError::DuplicateName(name)) if name == "Unisex Scarf"));
    }

    #[test]
    fn test_lookup_by_name() {
        let catalog = Catalog::new(vec![
            product("Headwrap & Earrings", "100.00"),
            product("Unisex Scarf", "200.00"),
        ])
        .unwrap();

        assert_eq!(
            catalog.get("Unisex Scarf").map(|p| p.price.to_string()),
            Some("R200.00".to_string())
        );
        assert!(catalog.get("Indlovukazi Dress").is_none());
    }

    #[test]
    fn test_preserves_insertion_order() {
        let catalog = Catalog::new(vec![
            product("Modern Mbhaco Dress", "300.00"),
            product("Indlovukazi Dress", "2500.00"),
            product("King's 2pc", "300.00"),
        ])
        .unwrap();

        let names: Vec<&str> = catalog.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Modern Mbhaco Dress", "Indlovukazi Dress", "King's 2pc"]
        );
    }

    #[test]
    fn test_deserializes_from_content_json() {
        let json = r#"[
            {"name": "Headwrap & Earrings", "price": {"amount": "100.00", "currency": "ZAR"}},
            {"name": "Unisex Scarf", "price": {"amount": "200.00", "currency": "ZAR"}}
        ]"#;
        let products: Vec<Product> = serde_json::from_str(json).unwrap();
        let catalog = Catalog::new(products).unwrap();
        assert_eq!(catalog.len(), 2);
    }
}
