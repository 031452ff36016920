//! Event budget estimation
//!
//! Computes a per-category cost breakdown from the event type, guest count,
//! city cost multiplier, and budget tier. All tables are static data; the
//! estimator is a pure function.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-guest base costs by category for a wedding
const WEDDING_COSTS: &[(&str, f64)] = &[
    ("venue", 800.0),
    ("food", 600.0),
    ("decoration", 400.0),
    ("flowers", 200.0),
    ("photography", 300.0),
    ("music_dj", 150.0),
    ("transportation", 100.0),
];

/// Per-guest base costs by category for a corporate event
const CORPORATE_COSTS: &[(&str, f64)] = &[
    ("venue", 500.0),
    ("food", 400.0),
    ("decoration", 200.0),
    ("flowers", 100.0),
    ("photography", 200.0),
    ("music_dj", 100.0),
    ("transportation", 80.0),
];

/// Per-guest base costs by category for a birthday; also the named default
/// table for unrecognized event types
const BIRTHDAY_COSTS: &[(&str, f64)] = &[
    ("venue", 300.0),
    ("food", 350.0),
    ("decoration", 250.0),
    ("flowers", 100.0),
    ("photography", 150.0),
    ("music_dj", 100.0),
    ("transportation", 50.0),
];

/// Relative cost-of-living multipliers for the catalog cities
const CITY_MULTIPLIERS: &[(&str, f64)] = &[
    ("mumbai", 1.4),
    ("delhi", 1.3),
    ("bangalore", 1.2),
    ("hyderabad", 1.1),
    ("chennai", 1.0),
    ("pune", 1.0),
    ("gurgaon", 1.3),
    ("noida", 1.1),
    ("kolkata", 0.9),
    ("kanpur", 0.8),
    ("ahmedabad", 0.9),
];

/// Contingency buffer applied atop the summed category costs
const CONTINGENCY_RATE: f64 = 0.15;

/// Coarse budget tier selecting a uniform cost multiplier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    Low,
    #[default]
    Medium,
    High,
}

impl BudgetTier {
    /// The cost multiplier for this tier
    #[must_use]
    pub fn multiplier(self) -> f64 {
        match self {
            BudgetTier::Low => 0.6,
            BudgetTier::Medium => 1.0,
            BudgetTier::High => 1.8,
        }
    }

    /// Parse a tier label; anything unrecognized falls back to `Medium`
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "low" => BudgetTier::Low,
            "high" => BudgetTier::High,
            _ => BudgetTier::Medium,
        }
    }
}

/// Estimated cost of one category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCost {
    pub cost: u64,
    pub per_person: u64,
}

/// A complete budget estimate for an event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetEstimate {
    pub event_type: String,
    pub guest_count: u32,
    pub city: Option<String>,
    pub budget_level: BudgetTier,
    pub breakdown: BTreeMap<String, CategoryCost>,
    pub subtotal: u64,
    pub contingency: u64,
    pub total_estimate: u64,
    pub per_person_average: u64,
}

fn base_costs(event_type: &str) -> &'static [(&'static str, f64)] {
    match event_type.to_lowercase().as_str() {
        "wedding" => WEDDING_COSTS,
        "corporate" => CORPORATE_COSTS,
        _ => BIRTHDAY_COSTS,
    }
}

fn city_multiplier(city: Option<&str>) -> f64 {
    // An unspecified city prices against the Delhi baseline; unlisted
    // cities get a neutral 1.0.
    let key = city.map_or_else(|| "delhi".to_string(), str::to_lowercase);
    CITY_MULTIPLIERS
        .iter()
        .find(|(name, _)| *name == key)
        .map_or(1.0, |(_, mult)| *mult)
}

/// Compute a budget estimate for an event
///
/// Unknown event types use the birthday table. All arithmetic runs in full
/// precision; rounding to whole currency units happens only when the output
/// struct is built.
#[must_use]
pub fn estimate(
    event_type: &str,
    guest_count: u32,
    city: Option<&str>,
    tier: BudgetTier,
) -> BudgetEstimate {
    let costs = base_costs(event_type);
    let city_mult = city_multiplier(city);
    let tier_mult = tier.multiplier();
    let guests = f64::from(guest_count);

    let mut breakdown = BTreeMap::new();
    let mut subtotal = 0.0;
    for (category, base) in costs {
        let amount = base * guests * city_mult * tier_mult;
        let per_person = base * city_mult * tier_mult;
        breakdown.insert(
            (*category).to_string(),
            CategoryCost {
                cost: amount.round() as u64,
                per_person: per_person.round() as u64,
            },
        );
        subtotal += amount;
    }

    let contingency = subtotal * CONTINGENCY_RATE;
    let total = subtotal + contingency;
    let per_person_average = if guest_count > 0 {
        (total / guests).round() as u64
    } else {
        0
    };

    BudgetEstimate {
        event_type: event_type.to_string(),
        guest_count,
        city: city.map(str::to_string),
        budget_level: tier,
        breakdown,
        subtotal: subtotal.round() as u64,
        contingency: contingency.round() as u64,
        total_estimate: total.round() as u64,
        per_person_average,
    }
}
