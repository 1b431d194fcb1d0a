//! Item catalog: the fixed, ordered list of artworks a carousel browses
//!
//! Catalogs are loaded once at startup, either from the bundled set or from
//! a TOML/JSON file, and are never mutated afterwards.

mod bundled;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Opaque handle to an image resource
///
/// The carousel never interprets it; the rendering host decides what it
/// points at (a drawable name, a file path, a URL).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One unit of content in the carousel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Image shown on the wall
    pub image: ImageRef,
    /// Artwork title
    pub title: String,
    /// Secondary line, the artist for artworks
    pub subtitle: String,
    pub year: i32,
}

impl Item {
    pub fn new(
        image: impl Into<String>,
        title: impl Into<String>,
        subtitle: impl Into<String>,
        year: i32,
    ) -> Self {
        Self {
            image: ImageRef::new(image),
            title: title.into(),
            subtitle: subtitle.into(),
            year,
        }
    }

    /// One-line description: `Title by Subtitle (Year)`
    pub fn caption(&self) -> String {
        format!("{} by {} ({})", self.title, self.subtitle, self.year)
    }
}

/// A named list of items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default = "default_catalog_name")]
    pub name: String,
    pub items: Vec<Item>,
}

fn default_catalog_name() -> String {
    "Art Space".to_string()
}

/// Supported catalog file formats, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CatalogFormat {
    Toml,
    Json,
}

impl CatalogFormat {
    fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

impl Catalog {
    /// The artworks that ship with the binary
    pub fn bundled() -> Self {
        bundled::artworks()
    }

    /// Load a catalog from a `.toml` or `.json` file
    pub fn load(path: &Path) -> Result<Self> {
        let Some(format) = CatalogFormat::from_path(path) else {
            bail!(
                "Unsupported catalog format for {} (expected .toml or .json)",
                path.display()
            );
        };

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog {}", path.display()))?;

        let catalog = Self::parse(&contents, format)
            .with_context(|| format!("Invalid catalog {}", path.display()))?;

        tracing::debug!(
            "Loaded catalog '{}' with {} item(s) from {}",
            catalog.name,
            catalog.items.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Load from `path` if given, otherwise fall back to the bundled set
    pub fn load_or_bundled(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::bundled()),
        }
    }

    fn parse(contents: &str, format: CatalogFormat) -> Result<Self> {
        let catalog: Catalog = match format {
            CatalogFormat::Toml => toml::from_str(contents)?,
            CatalogFormat::Json => serde_json::from_str(contents)?,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<()> {
        if self.items.is_empty() {
            bail!("Catalog '{}' has no items", self.name);
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_catalog_has_original_artworks() {
        let catalog = Catalog::bundled();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.items[0].title, "Sailing Under the Bridge");
        assert_eq!(catalog.items[1].subtitle, "Paul Colson");
        assert_eq!(catalog.items[2].year, 2021);
        assert_eq!(catalog.items[2].image.as_str(), "forest_image");
    }

    #[test]
    fn parses_toml_catalog() {
        let toml_str = r#"
name = "Sketchbook"

[[items]]
image = "sketches/owl.png"
title = "Owl"
subtitle = "Unknown"
year = 1999
"#;
        let catalog = Catalog::parse(toml_str, CatalogFormat::Toml).unwrap();
        assert_eq!(catalog.name, "Sketchbook");
        assert_eq!(catalog.items.len(), 1);
        assert_eq!(catalog.items[0].image, ImageRef::new("sketches/owl.png"));
    }

    #[test]
    fn parses_json_catalog_with_default_name() {
        let json = r#"{"items": [{"image": "a", "title": "A", "subtitle": "x", "year": 2000}]}"#;
        let catalog = Catalog::parse(json, CatalogFormat::Json).unwrap();
        assert_eq!(catalog.name, "Art Space");
        assert_eq!(catalog.items[0].caption(), "A by x (2000)");
    }

    #[test]
    fn rejects_empty_catalog() {
        let err = Catalog::parse("items = []", CatalogFormat::Toml).unwrap_err();
        assert!(err.to_string().contains("no items"), "got: {}", err);
    }

    #[test]
    fn format_is_chosen_by_extension() {
        assert_eq!(
            CatalogFormat::from_path(Path::new("gallery.TOML")),
            Some(CatalogFormat::Toml)
        );
        assert_eq!(
            CatalogFormat::from_path(Path::new("gallery.json")),
            Some(CatalogFormat::Json)
        );
        assert_eq!(CatalogFormat::from_path(Path::new("gallery.yaml")), None);
        assert_eq!(CatalogFormat::from_path(Path::new("gallery")), None);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Catalog::load(Path::new("/nonexistent/artspace/catalog.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read catalog"));
    }

    #[test]
    fn load_reads_file_from_disk() {
        let path = std::env::temp_dir().join(format!(
            "artspace-catalog-test-{}.toml",
            std::process::id()
        ));
        std::fs::write(
            &path,
            "[[items]]\nimage = \"i\"\ntitle = \"T\"\nsubtitle = \"S\"\nyear = 1\n",
        )
        .unwrap();

        let catalog = Catalog::load(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(catalog.items, vec![Item::new("i", "T", "S", 1)]);
    }
}
