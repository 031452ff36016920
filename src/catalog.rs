//! Event catalog data types and loading
//!
//! The catalog is a static hierarchy of cities, areas, venues, and vendors.
//! It is loaded once at startup and read-only afterwards, so it can be shared
//! freely across request-handling threads.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{info, warn};

/// An event venue listed under a city area
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Venue {
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub capacity: u32,
    #[serde(default)]
    pub price_range: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    /// Event-type tags this venue caters to (lowercase, e.g. "wedding")
    #[serde(default)]
    pub suitable_for: Vec<String>,
}

/// A service vendor listed under a city area, keyed by category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vendor {
    pub name: String,
    #[serde(default)]
    pub speciality: String,
    #[serde(default)]
    pub price_range: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub experience_years: u32,
}

/// An area within a city, holding venues and categorized vendors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Area {
    pub name: String,
    #[serde(default)]
    pub venues: Vec<Venue>,
    #[serde(default)]
    pub vendors: BTreeMap<String, Vec<Vendor>>,
}

/// A city keyed by its lowercase identifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    #[serde(default)]
    pub areas: BTreeMap<String, Area>,
}

/// The full event catalog
///
/// An empty catalog is valid: every search over it simply returns no results.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub cities: BTreeMap<String, City>,
    #[serde(default)]
    pub vendor_categories: Vec<String>,
}

impl Catalog {
    /// Parse a catalog from a JSON string
    pub fn from_json(data: &str) -> crate::Result<Self> {
        let catalog: Catalog = serde_json::from_str(data)?;
        Ok(catalog)
    }

    /// Load the catalog from a JSON file
    ///
    /// A missing or malformed file degrades to an empty catalog instead of
    /// failing, so the surrounding service stays available.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(data) => match Self::from_json(&data) {
                Ok(catalog) => {
                    info!(
                        "Loaded catalog from {} ({} cities)",
                        path.display(),
                        catalog.cities.len()
                    );
                    catalog
                }
                Err(e) => {
                    warn!(
                        "Catalog file {} is malformed, using empty catalog: {}",
                        path.display(),
                        e
                    );
                    Self::default()
                }
            },
            Err(e) => {
                warn!(
                    "Catalog file {} not readable, using empty catalog: {}",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Load the catalog from a file, falling back to the bundled data set
    /// when the file does not exist
    pub fn load_or_bundled<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            info!(
                "Catalog file {} not found, using bundled catalog",
                path.display()
            );
            Self::bundled()
        }
    }

    /// The default catalog compiled into the binary
    #[must_use]
    pub fn bundled() -> Self {
        Self::from_json(include_str!("../data/event_data.json")).unwrap_or_else(|e| {
            warn!("Bundled catalog is malformed, using empty catalog: {}", e);
            Self::default()
        })
    }

    /// Look up a city by name, case-insensitively on the key
    #[must_use]
    pub fn city(&self, name: &str) -> Option<(&str, &City)> {
        let key = name.to_lowercase();
        self.cities
            .get_key_value(key.as_str())
            .map(|(k, c)| (k.as_str(), c))
    }

    /// Display names of every city in the catalog
    #[must_use]
    pub fn city_names(&self) -> Vec<String> {
        self.cities.values().map(|c| c.name.clone()).collect()
    }

    /// Area identifiers of a city, empty when the city is unknown
    #[must_use]
    pub fn area_keys(&self, city: &str) -> Vec<String> {
        self.city(city)
            .map(|(_, c)| c.areas.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Vendor categories advertised by the catalog
    #[must_use]
    pub fn vendor_categories(&self) -> Vec<String> {
        self.vendor_categories.clone()
    }

    /// True when the catalog holds no cities
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "cities": {
            "delhi": {
                "name": "Delhi",
                "areas": {
                    "connaught_place": {
                        "name": "Connaught Place",
                        "venues": [
                            {
                                "name": "Grand Palace",
                                "address": "1 CP Circle",
                                "capacity": 500,
                                "price_range": "₹50,000-₹100,000",
                                "rating": 4.5,
                                "contact": "+91-11-1111111",
                                "amenities": ["parking"],
                                "suitable_for": ["wedding", "reception"]
                            }
                        ],
                        "vendors": {
                            "food": [
                                {
                                    "name": "Tasty Caterers",
                                    "speciality": "North Indian wedding catering",
                                    "price_range": "₹500-₹800",
                                    "rating": 4.2,
                                    "contact": "+91-11-2222222",
                                    "services": ["buffet"],
                                    "experience_years": 12
                                }
                            ]
                        }
                    }
                }
            }
        },
        "vendor_categories": ["flowers", "food"]
    }"#;

    #[test]
    fn test_from_json_parses_hierarchy() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        assert_eq!(catalog.cities.len(), 1);
        let (key, city) = catalog.city("Delhi").unwrap();
        assert_eq!(key, "delhi");
        assert_eq!(city.name, "Delhi");
        let area = &city.areas["connaught_place"];
        assert_eq!(area.venues.len(), 1);
        assert_eq!(area.venues[0].capacity, 500);
        assert_eq!(area.vendors["food"][0].experience_years, 12);
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        assert!(Catalog::from_json("{not json").is_err());
    }

    #[test]
    fn test_load_missing_file_degrades_to_empty() {
        let catalog = Catalog::load("/nonexistent/event_data.json");
        assert!(catalog.is_empty());
        assert!(catalog.city_names().is_empty());
    }

    #[test]
    fn test_city_lookup_is_case_insensitive() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        assert!(catalog.city("DELHI").is_some());
        assert!(catalog.city("delhi").is_some());
        assert!(catalog.city("mumbai").is_none());
    }

    #[test]
    fn test_helpers() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        assert_eq!(catalog.city_names(), vec!["Delhi"]);
        assert_eq!(catalog.area_keys("delhi"), vec!["connaught_place"]);
        assert!(catalog.area_keys("unknown").is_empty());
        assert_eq!(catalog.vendor_categories(), vec!["flowers", "food"]);
    }

    #[test]
    fn test_bundled_catalog_parses() {
        let catalog = Catalog::bundled();
        assert!(!catalog.is_empty());
        assert!(catalog.city("delhi").is_some());
    }
}
