//! Read-only product catalog.
//!
//! The catalog is supplied once at startup by an external data source and is
//! never modified afterwards. Catalog files use Spanish field names
//! (`producto`, `precio`, `imagen`).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{Price, ProductId};

/// Errors that can occur when building a [`Catalog`].
#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    /// Two records share the same id.
    #[error("duplicate product id {0} in catalog")]
    DuplicateId(ProductId),
    /// The catalog document could not be parsed.
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A product record as delivered by the catalog source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    /// Display name.
    #[serde(rename = "producto")]
    pub name: String,
    /// Unit price.
    #[serde(rename = "precio")]
    pub price: Price,
    /// Image reference (URL or asset path).
    #[serde(rename = "imagen", default)]
    pub image: String,
}

impl Product {
    /// Create a product record.
    #[must_use]
    pub fn new(id: ProductId, name: impl Into<String>, price: Price, image: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            image: image.into(),
        }
    }
}

/// Ordered list of products with lookup by id.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Build a catalog, keeping the order of `products`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if two products share an id.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(products.len());
        for (position, product) in products.iter().enumerate() {
            if index.insert(product.id, position).is_some() {
                return Err(CatalogError::DuplicateId(product.id));
            }
        }
        Ok(Self { products, index })
    }

    /// Parse a JSON array of product records.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not a valid product list or
    /// contains duplicate ids.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.index.get(&id).and_then(|&i| self.products.get(i))
    }

    /// Products in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns `true` if the catalog has no products.
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
