//! Catalog content loading.
//!
//! The catalog is a JSON file in the `content/` directory, loaded once at
//! startup: an ordered array of `{name, price}` records, consumed as
//! given. Duplicate names are a deployment mistake and fail startup.

use std::path::Path;

use mbhaco_core::{Catalog, CatalogError, Product};

/// Errors that can occur while loading the catalog file.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Load and validate the catalog from a JSON content file.
///
/// # Errors
///
/// Returns `ContentError` if the file cannot be read, is not a JSON array
/// of products, or contains duplicate product names.
pub fn load_catalog(path: &Path) -> Result<Catalog, ContentError> {
    let raw = std::fs::read_to_string(path)?;
    let products: Vec<Product> = serde_json::from_str(&raw)?;
    Ok(Catalog::new(products)?)
}
