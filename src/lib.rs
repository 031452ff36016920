//! `EventAI` - Intelligent event planning recommendations
//!
//! This library provides the core functionality for venue and vendor search,
//! event budget estimation, and natural-language query interpretation over a
//! static catalog of cities, areas, venues, and vendors.

pub mod budget;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod pricing;
pub mod query;
pub mod search;
pub mod tools;

// Re-export core types for public API
pub use budget::{BudgetEstimate, BudgetTier};
pub use catalog::{Area, Catalog, City, Vendor, Venue};
pub use config::EventAiConfig;
pub use engine::EventEngine;
pub use error::EventAiError;
pub use pricing::PriceRange;
pub use query::{RecommendationLimits, RecommendationRequest, Recommendations};
pub use search::{VendorMatch, VendorQuery, VenueMatch, VenueQuery};
pub use tools::{ToolDefinition, ToolRegistry};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, EventAiError>;
