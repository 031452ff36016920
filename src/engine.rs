//! Engine façade over the loaded catalog
//!
//! `EventEngine` bundles an immutable catalog with the recommendation
//! limits and exposes the four public call contracts. Every operation is a
//! pure, synchronous function over shared read-only data, so the engine can
//! be cloned cheaply and used from any number of threads.

use std::sync::Arc;

use crate::budget::{self, BudgetEstimate, BudgetTier};
use crate::catalog::Catalog;
use crate::query::{self, RecommendationLimits, RecommendationRequest, Recommendations};
use crate::search::{self, VendorMatch, VendorQuery, VenueMatch, VenueQuery};

/// The event recommendation engine
#[derive(Debug, Clone)]
pub struct EventEngine {
    catalog: Arc<Catalog>,
    limits: RecommendationLimits,
}

impl EventEngine {
    /// Create an engine over a catalog with default limits
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self::with_limits(catalog, RecommendationLimits::default())
    }

    /// Create an engine with explicit recommendation limits
    #[must_use]
    pub fn with_limits(catalog: Catalog, limits: RecommendationLimits) -> Self {
        Self {
            catalog: Arc::new(catalog),
            limits,
        }
    }

    /// The catalog backing this engine
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Search venues by the given criteria, rating-ranked
    #[must_use]
    pub fn search_venues(&self, query: &VenueQuery) -> Vec<VenueMatch> {
        search::search_venues(&self.catalog, query)
    }

    /// Search vendors by the given criteria, rating-ranked
    #[must_use]
    pub fn search_vendors(&self, query: &VendorQuery) -> Vec<VendorMatch> {
        search::search_vendors(&self.catalog, query)
    }

    /// Compute a budget estimate for an event
    #[must_use]
    pub fn get_budget_estimate(
        &self,
        event_type: &str,
        guest_count: u32,
        city: Option<&str>,
        tier: BudgetTier,
    ) -> BudgetEstimate {
        budget::estimate(event_type, guest_count, city, tier)
    }

    /// Interpret a natural-language query into a recommendation bundle
    #[must_use]
    pub fn get_recommendations(&self, request: &RecommendationRequest) -> Recommendations {
        query::get_recommendations(&self.catalog, request, self.limits)
    }

    /// Display names of the catalog cities
    #[must_use]
    pub fn city_names(&self) -> Vec<String> {
        self.catalog.city_names()
    }

    /// Area identifiers within a city
    #[must_use]
    pub fn city_areas(&self, city: &str) -> Vec<String> {
        self.catalog.area_keys(city)
    }

    /// Vendor categories advertised by the catalog
    #[must_use]
    pub fn vendor_categories(&self) -> Vec<String> {
        self.catalog.vendor_categories()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_over_empty_catalog() {
        let engine = EventEngine::new(Catalog::default());
        assert!(engine.search_venues(&VenueQuery::default()).is_empty());
        assert!(engine.search_vendors(&VendorQuery::default()).is_empty());
        assert!(engine.city_names().is_empty());

        let recs = engine.get_recommendations(&RecommendationRequest {
            query: "wedding venue for 100 people".to_string(),
            ..RecommendationRequest::default()
        });
        assert!(recs.venues.is_empty());
        // The estimator needs no catalog, so it still answers.
        assert!(recs.budget_estimate.is_some());
    }

    #[test]
    fn test_engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<EventEngine>();
    }

    #[test]
    fn test_clones_share_the_catalog() {
        let engine = EventEngine::new(Catalog::bundled());
        let clone = engine.clone();
        assert!(std::ptr::eq(engine.catalog(), clone.catalog()));
    }
}
