//! Price range extraction from free-form price strings
//!
//! Catalog entries advertise prices as display strings like
//! "₹50,000-₹100,000" or "₹800 per plate". Searches need a numeric interval,
//! so this module pulls the embedded integers back out.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("valid regex"));

/// Extract all embedded non-negative integers from a string, in order of
/// appearance. Numbers too large for `u64` are skipped.
#[must_use]
pub fn extract_numbers(text: &str) -> Vec<u64> {
    NUMBER_RE
        .find_iter(text)
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}

/// An inclusive price interval parsed from a display string
///
/// `(0, 0)` means the price is unknown or free. Note the resulting filter
/// asymmetry: an unknown price passes any budget ceiling (0 never exceeds
/// it) but fails a positive budget floor. This is deliberate, observed
/// behavior and must not be "fixed".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u64,
    pub max: u64,
}

impl PriceRange {
    /// The degenerate interval signaling an unknown or free price
    pub const UNKNOWN: Self = Self { min: 0, max: 0 };

    /// Parse a price interval from a free-form string
    ///
    /// Currency symbols and thousands separators are stripped first. With
    /// two or more embedded numbers the interval is (first, second), in
    /// encountered order and without normalization; with exactly one number
    /// `n` it is the point (n, n); with none it is (0, 0).
    #[must_use]
    pub fn parse(price: &str) -> Self {
        let cleaned: String = price.chars().filter(|c| *c != '₹' && *c != ',').collect();
        let numbers = extract_numbers(&cleaned);
        match numbers.as_slice() {
            [first, second, ..] => Self {
                min: *first,
                max: *second,
            },
            [only] => Self {
                min: *only,
                max: *only,
            },
            [] => Self::UNKNOWN,
        }
    }

    /// True when no price information was present
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        *self == Self::UNKNOWN
    }

    /// Budget filter used by the searches: the interval survives a floor
    /// when its upper bound reaches it, and survives a ceiling when its
    /// lower bound does not exceed it.
    #[must_use]
    pub fn admits(&self, floor: Option<u64>, ceiling: Option<u64>) -> bool {
        if let Some(floor) = floor {
            if self.max < floor {
                return false;
            }
        }
        if let Some(ceiling) = ceiling {
            if self.min > ceiling {
                return false;
            }
        }
        true
    }
}
