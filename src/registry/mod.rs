//! Tile source registry
//!
//! The registry maps source names to URL templates with `{z}`, `{x}` and
//! `{y}` placeholders. Sources are embedded in the binary; one of them is
//! marked as the default used when no `--source` is given.

use crate::mercator::TileCoordinate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Embedded registry data
const SOURCES_JSON: &str = include_str!("sources.json");

/// Global registry instance (loaded once)
static REGISTRY: Lazy<Result<TileSourceRegistry, RegistryError>> =
    Lazy::new(|| TileSourceRegistry::from_json(SOURCES_JSON));

/// Registry of known tile sources
#[derive(Debug, Clone)]
pub struct TileSourceRegistry {
    #[allow(dead_code)]
    schema_version: String,
    default_source: String,
    sources_map: HashMap<String, TileSource>,
}

impl TileSourceRegistry {
    /// Load the embedded registry
    ///
    /// This is a singleton operation - the registry is loaded once and cached.
    pub fn load() -> Result<&'static Self, RegistryError> {
        REGISTRY.as_ref().map_err(Clone::clone)
    }

    /// Parse a registry from a JSON string
    fn from_json(json: &str) -> Result<Self, RegistryError> {
        let raw: RawRegistry = serde_json::from_str(json)
            .map_err(|e| RegistryError::Parse(format!("failed to parse registry: {e}")))?;

        let mut sources_map = HashMap::new();
        for source in raw.sources {
            sources_map.insert(source.name.clone(), source);
        }

        if !sources_map.contains_key(&raw.default_source) {
            return Err(RegistryError::Parse(format!(
                "default source {} is not a registry entry",
                raw.default_source
            )));
        }

        Ok(Self {
            schema_version: raw.schema_version,
            default_source: raw.default_source,
            sources_map,
        })
    }

    /// All registered sources
    pub fn entries(&self) -> Vec<&TileSource> {
        let mut entries: Vec<_> = self.sources_map.values().collect();
        entries.sort_by_key(|s| s.name.clone());
        entries
    }

    /// Name of the default source
    pub fn default_source(&self) -> &str {
        &self.default_source
    }

    /// Look up a source by name
    pub fn get(&self, name: &str) -> Option<&TileSource> {
        self.sources_map.get(name)
    }

    /// Resolve an optional source name, falling back to the default.
    ///
    /// Returns an error if a name was given but is not registered.
    pub fn resolve(&self, name: Option<&str>) -> Result<&TileSource, RegistryError> {
        let name = name.unwrap_or(&self.default_source);
        self.get(name).ok_or_else(|| {
            let mut known: Vec<_> = self.sources_map.keys().cloned().collect();
            known.sort();
            RegistryError::NotFound(format!(
                "source {name} not in registry (known: {})",
                known.join(", ")
            ))
        })
    }
}

/// A single tile source entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileSource {
    name: String,
    description: String,
    url_template: String,
}

impl TileSource {
    /// Construct a source from its parts
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        url_template: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            url_template: url_template.into(),
        }
    }

    /// Get the source name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Get the raw URL template
    pub fn url_template(&self) -> &str {
        &self.url_template
    }

    /// Fetch URL for one tile coordinate
    pub fn url_for(&self, coord: &TileCoordinate) -> String {
        self.url_template
            .replace("{z}", &coord.zoom.to_string())
            .replace("{x}", &coord.x.to_string())
            .replace("{y}", &coord.y.to_string())
    }
}

/// Raw registry structure for deserialization
#[derive(Debug, Deserialize)]
struct RawRegistry {
    schema_version: String,
    default_source: String,
    sources: Vec<TileSource>,
}

/// Errors that can occur when working with the registry
#[derive(Debug, Clone, thiserror::Error)]
pub enum RegistryError {
    /// Failed to parse registry JSON
    #[error("registry parse error: {0}")]
    Parse(String),

    /// Source not found in registry
    #[error("source not found: {0}")]
    NotFound(String),
}
