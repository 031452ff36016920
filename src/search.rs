//! Venue and vendor search over the catalog
//!
//! Both searches walk the city → area hierarchy, apply per-record filters,
//! annotate survivors with their resolved location, and rank by rating.
//! Every criteria field is optional; an absent field is no constraint.

use serde::Serialize;
use tracing::debug;

use crate::catalog::{Catalog, City, Vendor, Venue};
use crate::pricing::PriceRange;

/// Criteria for a venue search
#[derive(Debug, Clone, Default)]
pub struct VenueQuery {
    pub city: Option<String>,
    pub area: Option<String>,
    /// Minimum capacity the venue must accommodate
    pub capacity: Option<u32>,
    pub budget_min: Option<u64>,
    pub budget_max: Option<u64>,
    /// Event-type tag that must appear in the venue's `suitable_for` list
    pub event_type: Option<String>,
}

/// Criteria for a vendor search
#[derive(Debug, Clone, Default)]
pub struct VendorQuery {
    pub city: Option<String>,
    pub area: Option<String>,
    /// Vendor category key (e.g. "flowers", "food", "music_dj")
    pub vendor_type: Option<String>,
    pub budget_min: Option<u64>,
    pub budget_max: Option<u64>,
    /// Case-insensitive substring match against the vendor's speciality
    pub speciality: Option<String>,
}

/// A venue annotated with its resolved location
#[derive(Debug, Clone, Serialize)]
pub struct VenueMatch {
    #[serde(flatten)]
    pub venue: Venue,
    pub city: String,
    pub area: String,
    pub city_key: String,
    pub area_key: String,
}

/// A vendor annotated with its resolved location and category
#[derive(Debug, Clone, Serialize)]
pub struct VendorMatch {
    #[serde(flatten)]
    pub vendor: Vendor,
    pub city: String,
    pub area: String,
    pub city_key: String,
    pub area_key: String,
    pub vendor_type: String,
}

fn candidate_cities<'a>(catalog: &'a Catalog, city: Option<&str>) -> Vec<(&'a str, &'a City)> {
    match city {
        Some(name) => catalog.city(name).into_iter().collect(),
        None => catalog
            .cities
            .iter()
            .map(|(key, city)| (key.as_str(), city))
            .collect(),
    }
}

fn candidate_areas<'a>(
    city: &'a City,
    area: Option<&str>,
) -> Vec<(&'a str, &'a crate::catalog::Area)> {
    match area {
        Some(name) => {
            let key = name.to_lowercase();
            city.areas
                .get_key_value(key.as_str())
                .map(|(k, a)| (k.as_str(), a))
                .into_iter()
                .collect()
        }
        None => city
            .areas
            .iter()
            .map(|(key, area)| (key.as_str(), area))
            .collect(),
    }
}

/// Search the catalog for venues matching the criteria
///
/// Results are sorted by rating descending; ties keep their encounter order
/// (city, then area, then listing order). An empty result is valid.
#[must_use]
pub fn search_venues(catalog: &Catalog, query: &VenueQuery) -> Vec<VenueMatch> {
    let event_tag = query.event_type.as_deref().map(str::to_lowercase);
    let mut results = Vec::new();

    for (city_key, city) in candidate_cities(catalog, query.city.as_deref()) {
        for (area_key, area) in candidate_areas(city, query.area.as_deref()) {
            for venue in &area.venues {
                if let Some(min_capacity) = query.capacity {
                    if venue.capacity < min_capacity {
                        continue;
                    }
                }

                let price = PriceRange::parse(&venue.price_range);
                if !price.admits(query.budget_min, query.budget_max) {
                    continue;
                }

                if let Some(tag) = &event_tag {
                    if !venue.suitable_for.iter().any(|t| t == tag) {
                        continue;
                    }
                }

                results.push(VenueMatch {
                    venue: venue.clone(),
                    city: city.name.clone(),
                    area: area.name.clone(),
                    city_key: city_key.to_string(),
                    area_key: area_key.to_string(),
                });
            }
        }
    }

    results.sort_by(|a, b| b.venue.rating.total_cmp(&a.venue.rating));
    debug!("Venue search matched {} venues", results.len());
    results
}

/// Search the catalog for vendors matching the criteria
///
/// Same traversal as the venue search, one level deeper by vendor category.
/// Sorted by rating descending.
#[must_use]
pub fn search_vendors(catalog: &Catalog, query: &VendorQuery) -> Vec<VendorMatch> {
    let speciality = query.speciality.as_deref().map(str::to_lowercase);
    let mut results = Vec::new();

    for (city_key, city) in candidate_cities(catalog, query.city.as_deref()) {
        for (area_key, area) in candidate_areas(city, query.area.as_deref()) {
            let vendor_types: Vec<&str> = match &query.vendor_type {
                Some(vtype) => vec![vtype.as_str()],
                None => area.vendors.keys().map(String::as_str).collect(),
            };

            for vtype in vendor_types {
                let Some(vendors) = area.vendors.get(vtype) else {
                    continue;
                };

                for vendor in vendors {
                    if !vendor_admitted(vendor, query, speciality.as_deref()) {
                        continue;
                    }

                    results.push(VendorMatch {
                        vendor: vendor.clone(),
                        city: city.name.clone(),
                        area: area.name.clone(),
                        city_key: city_key.to_string(),
                        area_key: area_key.to_string(),
                        vendor_type: vtype.to_string(),
                    });
                }
            }
        }
    }

    results.sort_by(|a, b| b.vendor.rating.total_cmp(&a.vendor.rating));
    debug!("Vendor search matched {} vendors", results.len());
    results
}

fn vendor_admitted(vendor: &Vendor, query: &VendorQuery, speciality: Option<&str>) -> bool {
    let price = PriceRange::parse(&vendor.price_range);
    if !price.admits(query.budget_min, query.budget_max) {
        return false;
    }

    if let Some(wanted) = speciality {
        if !vendor.speciality.to_lowercase().contains(wanted) {
            return false;
        }
    }

    true
}
