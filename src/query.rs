//! Natural-language query interpretation
//!
//! Turns a free-text query like "wedding venue in delhi for 200 people" into
//! a combined recommendation: detected intents, a plausible guest count, a
//! ranked venue list, vendor lists per category, and a budget estimate when
//! enough is known. Entirely stateless; absence of matches is never an error.

use serde::Serialize;
use std::collections::BTreeMap;
use std::ops::RangeInclusive;
use tracing::debug;

use crate::budget::{self, BudgetEstimate, BudgetTier};
use crate::catalog::Catalog;
use crate::pricing;
use crate::search::{self, VendorMatch, VendorQuery, VenueMatch, VenueQuery};

/// Event-type keywords checked in order; the first hit wins, so specific
/// types must stay ahead of generic ones ("wedding" before "party"). The
/// ordering is a contract, not a style choice.
const EVENT_TYPES: &[&str] = &[
    "wedding",
    "corporate",
    "birthday",
    "anniversary",
    "engagement",
    "reception",
    "conference",
    "seminar",
    "party",
];

/// Keyword triggers per vendor category; any keyword hit detects the
/// category, and several categories may fire on one query.
const VENDOR_KEYWORDS: &[(&str, &[&str])] = &[
    ("flowers", &["flower", "floral", "bouquet", "decoration"]),
    ("food", &["food", "catering", "caterer", "cuisine", "meal"]),
    ("music_dj", &["music", "dj", "band", "entertainment"]),
    ("photography", &["photo", "photographer", "videography"]),
    ("transportation", &["car", "transport", "vehicle", "cab"]),
    ("decoration", &["decor", "decoration", "theme"]),
];

/// Categories searched when a query asks for vendors generically
const DEFAULT_VENDOR_TYPES: &[&str] = &["flowers", "food", "music_dj", "photography"];

/// Numbers outside this window are treated as budgets or years rather than
/// attendance
const GUEST_RANGE: RangeInclusive<u64> = 10..=2000;

/// Result-list caps applied when assembling a recommendation
#[derive(Debug, Clone, Copy)]
pub struct RecommendationLimits {
    pub max_venues: usize,
    pub max_vendors_per_type: usize,
}

impl Default for RecommendationLimits {
    fn default() -> Self {
        Self {
            max_venues: 5,
            max_vendors_per_type: 3,
        }
    }
}

/// A recommendation request: the raw query plus optional overrides that take
/// precedence over anything detected in the text
#[derive(Debug, Clone, Default)]
pub struct RecommendationRequest {
    pub query: String,
    pub city: Option<String>,
    pub budget: Option<u64>,
    pub guest_count: Option<u32>,
}

/// The assembled recommendation bundle
#[derive(Debug, Clone, Serialize)]
pub struct Recommendations {
    pub query: String,
    pub detected_event_type: Option<String>,
    pub detected_vendors: Vec<String>,
    pub guest_count: Option<u32>,
    pub venues: Vec<VenueMatch>,
    pub vendors: BTreeMap<String, Vec<VendorMatch>>,
    pub budget_estimate: Option<BudgetEstimate>,
    pub total_results: usize,
}

/// Detect the event type mentioned in a query, first keyword wins
#[must_use]
pub fn detect_event_type(query: &str) -> Option<&'static str> {
    let lower = query.to_lowercase();
    EVENT_TYPES.iter().copied().find(|t| lower.contains(t))
}

/// Detect every vendor category whose keywords appear in a query
#[must_use]
pub fn detect_vendor_types(query: &str) -> Vec<&'static str> {
    let lower = query.to_lowercase();
    VENDOR_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(category, _)| *category)
        .collect()
}

/// Pick the first embedded number that is a plausible guest count
#[must_use]
pub fn plausible_guest_count(query: &str) -> Option<u32> {
    pricing::extract_numbers(query)
        .into_iter()
        .find(|n| GUEST_RANGE.contains(n))
        .map(|n| n as u32)
}

/// Interpret a free-text query and assemble recommendations
#[must_use]
pub fn get_recommendations(
    catalog: &Catalog,
    request: &RecommendationRequest,
    limits: RecommendationLimits,
) -> Recommendations {
    let lower = request.query.to_lowercase();

    let detected_event = detect_event_type(&request.query);
    let detected_vendors = detect_vendor_types(&request.query);
    let guest_count = request
        .guest_count
        .or_else(|| plausible_guest_count(&request.query));

    debug!(
        event_type = ?detected_event,
        vendors = ?detected_vendors,
        guest_count = ?guest_count,
        "Interpreted query"
    );

    let mut venues = Vec::new();
    if lower.contains("venue") || lower.contains("hall") || detected_event.is_some() {
        venues = search::search_venues(
            catalog,
            &VenueQuery {
                city: request.city.clone(),
                capacity: guest_count,
                budget_max: request.budget,
                event_type: detected_event.map(str::to_string),
                ..VenueQuery::default()
            },
        );
        venues.truncate(limits.max_venues);
    }

    let mut vendors = BTreeMap::new();
    if !detected_vendors.is_empty() || lower.contains("vendor") {
        let categories: &[&str] = if detected_vendors.is_empty() {
            DEFAULT_VENDOR_TYPES
        } else {
            &detected_vendors
        };

        for category in categories {
            let mut matches = search::search_vendors(
                catalog,
                &VendorQuery {
                    city: request.city.clone(),
                    vendor_type: Some((*category).to_string()),
                    budget_max: request.budget,
                    ..VendorQuery::default()
                },
            );
            matches.truncate(limits.max_vendors_per_type);
            if !matches.is_empty() {
                vendors.insert((*category).to_string(), matches);
            }
        }
    }

    let budget_estimate = match (detected_event, guest_count) {
        (Some(event), Some(guests)) => Some(budget::estimate(
            event,
            guests,
            request.city.as_deref(),
            BudgetTier::default(),
        )),
        _ => None,
    };

    let total_results = venues.len() + vendors.values().map(Vec::len).sum::<usize>();

    Recommendations {
        query: request.query.clone(),
        detected_event_type: detected_event.map(str::to_string),
        detected_vendors: detected_vendors.iter().map(|s| (*s).to_string()).collect(),
        guest_count,
        venues,
        vendors,
        budget_estimate,
        total_results,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_catalog() -> Catalog {
        Catalog::from_json(
            r#"{
            "cities": {
                "delhi": {
                    "name": "Delhi",
                    "areas": {
                        "connaught_place": {
                            "name": "Connaught Place",
                            "venues": [
                                {
                                    "name": "Grand Palace",
                                    "capacity": 500,
                                    "price_range": "₹50,000-₹100,000",
                                    "rating": 4.5,
                                    "suitable_for": ["wedding", "reception"]
                                },
                                {
                                    "name": "Small Hall",
                                    "capacity": 80,
                                    "price_range": "₹10,000-₹20,000",
                                    "rating": 4.0,
                                    "suitable_for": ["birthday"]
                                }
                            ],
                            "vendors": {
                                "food": [
                                    {
                                        "name": "Tasty Caterers",
                                        "speciality": "Wedding catering",
                                        "price_range": "₹500-₹800",
                                        "rating": 4.2
                                    }
                                ],
                                "photography": [
                                    {
                                        "name": "Lens Masters",
                                        "speciality": "Candid wedding photography",
                                        "price_range": "₹30,000-₹80,000",
                                        "rating": 4.7
                                    }
                                ]
                            }
                        }
                    }
                }
            }
        }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_wedding_venue_query_detects_everything() {
        let catalog = test_catalog();
        let request = RecommendationRequest {
            query: "wedding venue in delhi for 200 people".to_string(),
            ..RecommendationRequest::default()
        };
        let recs = get_recommendations(&catalog, &request, RecommendationLimits::default());

        assert_eq!(recs.detected_event_type.as_deref(), Some("wedding"));
        assert_eq!(recs.guest_count, Some(200));
        assert_eq!(recs.venues.len(), 1); // Small Hall fails the capacity floor
        assert_eq!(recs.venues[0].venue.name, "Grand Palace");
        let estimate = recs.budget_estimate.expect("estimate for event + guests");
        assert_eq!(estimate.event_type, "wedding");
        assert_eq!(estimate.guest_count, 200);
    }

    #[test]
    fn test_food_query_detects_vendor_only() {
        let catalog = test_catalog();
        let request = RecommendationRequest {
            query: "I need food catering recommendations".to_string(),
            ..RecommendationRequest::default()
        };
        let recs = get_recommendations(&catalog, &request, RecommendationLimits::default());

        assert_eq!(recs.detected_event_type, None);
        assert_eq!(recs.detected_vendors, vec!["food"]);
        assert!(recs.venues.is_empty(), "no venue trigger in the query");
        assert_eq!(recs.vendors["food"].len(), 1);
        assert!(recs.budget_estimate.is_none());
        assert_eq!(recs.total_results, 1);
    }

    #[test]
    fn test_unrecognized_query_is_empty_not_error() {
        let catalog = test_catalog();
        let request = RecommendationRequest {
            query: "hello there".to_string(),
            ..RecommendationRequest::default()
        };
        let recs = get_recommendations(&catalog, &request, RecommendationLimits::default());

        assert_eq!(recs.detected_event_type, None);
        assert!(recs.detected_vendors.is_empty());
        assert!(recs.venues.is_empty());
        assert!(recs.vendors.is_empty());
        assert!(recs.budget_estimate.is_none());
        assert_eq!(recs.total_results, 0);
    }

    #[test]
    fn test_event_type_priority_order() {
        // "wedding" precedes "party" in the keyword list, so a query
        // mentioning both resolves to wedding.
        assert_eq!(detect_event_type("a wedding party"), Some("wedding"));
        assert_eq!(detect_event_type("office party"), Some("party"));
    }

    #[test]
    fn test_multiple_vendor_categories_detected() {
        let detected = detect_vendor_types("need flowers and a dj for the evening");
        assert_eq!(detected, vec!["flowers", "music_dj"]);
    }

    #[test]
    fn test_decoration_keyword_fires_two_categories() {
        // "decoration" is a keyword of both flowers and decoration.
        let detected = detect_vendor_types("stage decoration ideas");
        assert!(detected.contains(&"flowers"));
        assert!(detected.contains(&"decoration"));
    }

    #[test]
    fn test_guest_count_window() {
        assert_eq!(plausible_guest_count("dinner for 200 people"), Some(200));
        assert_eq!(plausible_guest_count("budget of 50000 for 150 guests"), Some(150));
        assert_eq!(plausible_guest_count("just 5 of us"), None);
        assert_eq!(plausible_guest_count("a 5000 person festival"), None);
        assert_eq!(plausible_guest_count("no numbers"), None);
    }

    #[test]
    fn test_guest_count_override_wins() {
        let catalog = test_catalog();
        let request = RecommendationRequest {
            query: "birthday hall for 300 people".to_string(),
            guest_count: Some(50),
            ..RecommendationRequest::default()
        };
        let recs = get_recommendations(&catalog, &request, RecommendationLimits::default());
        assert_eq!(recs.guest_count, Some(50));
        // With the override, the 80-seat hall qualifies.
        assert!(recs.venues.iter().any(|v| v.venue.name == "Small Hall"));
    }

    #[test]
    fn test_generic_vendor_query_uses_default_categories() {
        let catalog = test_catalog();
        let request = RecommendationRequest {
            query: "show me vendor options".to_string(),
            ..RecommendationRequest::default()
        };
        let recs = get_recommendations(&catalog, &request, RecommendationLimits::default());
        // Only categories with matches appear; the fixture has food and
        // photography out of the four defaults.
        assert_eq!(recs.vendors.len(), 2);
        assert!(recs.vendors.contains_key("food"));
        assert!(recs.vendors.contains_key("photography"));
    }

    #[test]
    fn test_limits_cap_result_lists() {
        let catalog = test_catalog();
        let request = RecommendationRequest {
            query: "birthday venue".to_string(),
            ..RecommendationRequest::default()
        };
        let limits = RecommendationLimits {
            max_venues: 1,
            max_vendors_per_type: 1,
        };
        let recs = get_recommendations(&catalog, &request, limits);
        assert!(recs.venues.len() <= 1);
    }
}
