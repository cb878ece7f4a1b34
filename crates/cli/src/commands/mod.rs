//! CLI subcommands.

pub mod catalog;
pub mod order;

use std::path::Path;

use thiserror::Error;
use ventas_core::{Catalog, CatalogError, Product};

/// Errors that can occur while loading a catalog file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Unsupported catalog format '{0}' (expected .json, .yaml or .yml)")]
    UnsupportedFormat(String),
    #[error("Invalid catalog YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Catalog file formats, picked by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Yaml,
}

impl CatalogFormat {
    fn from_path(path: &Path) -> Result<Self, LoadError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(LoadError::UnsupportedFormat(ext)),
        }
    }
}

/// Read a catalog file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, has an unknown extension, or
/// does not hold a valid product list.
pub fn load_catalog(path: &Path) -> Result<Catalog, LoadError> {
    let format = CatalogFormat::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let catalog = parse_catalog(&content, format)?;
    tracing::info!(path = %path.display(), products = catalog.len(), "Loaded catalog");
    Ok(catalog)
}

/// Parse catalog text in the given format.
///
/// # Errors
///
/// Returns an error if the text is not a valid product list.
pub fn parse_catalog(content: &str, format: CatalogFormat) -> Result<Catalog, LoadError> {
    match format {
        CatalogFormat::Json => Ok(Catalog::from_json(content)?),
        CatalogFormat::Yaml => {
            let products: Vec<Product> = serde_yaml::from_str(content)?;
            Ok(Catalog::new(products)?)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use ventas_core::ProductId;

    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            CatalogFormat::from_path(Path::new("productos.JSON")).unwrap(),
            CatalogFormat::Json
        );
        assert_eq!(
            CatalogFormat::from_path(Path::new("data/productos.yml")).unwrap(),
            CatalogFormat::Yaml
        );
        assert!(matches!(
            CatalogFormat::from_path(Path::new("productos.csv")),
            Err(LoadError::UnsupportedFormat(ext)) if ext == "csv"
        ));
    }

    #[test]
    fn test_parse_yaml_catalog() {
        let yaml = "
- id: 1
  producto: Widget
  precio: 150.00
  imagen: /img/widget.jpg
- id: 2
  producto: Gadget
  precio: '19.99'
  imagen: /img/gadget.jpg
";
        let catalog = parse_catalog(yaml, CatalogFormat::Yaml).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(ProductId::new(2)).unwrap().name, "Gadget");
    }

    #[test]
    fn test_parse_yaml_duplicate_ids() {
        let yaml = "
- {id: 1, producto: A, precio: 1}
- {id: 1, producto: B, precio: 2}
";
        assert!(matches!(
            parse_catalog(yaml, CatalogFormat::Yaml),
            Err(LoadError::Catalog(CatalogError::DuplicateId(_)))
        ));
    }

    #[test]
    fn test_bundled_catalog_parses() {
        let yaml = include_str!("../../data/productos.yaml");
        let catalog = parse_catalog(yaml, CatalogFormat::Yaml).unwrap();
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_missing_file() {
        let err = load_catalog(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
