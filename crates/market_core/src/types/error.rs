//! Error types for structured error handling.
//!
//! This module provides:
//! - `ConfigError`: Invalid generation rules or inconsistent pool sizes
//! - `CategoryError`: Failed category label parsing

use thiserror::Error;

use super::category::Category;

/// Configuration errors.
///
/// Raised when generation rules are malformed or when the pools produced
/// from them cannot be paired. A configuration error always aborts the run;
/// no partial market is returned.
///
/// # Examples
/// ```
/// use market_core::types::ConfigError;
///
/// let err = ConfigError::InvalidRange { min: 5.0, max: 1.0 };
/// assert_eq!(format!("{}", err), "Invalid range: min 5 exceeds max 1");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Rule range with `min > max`.
    #[error("Invalid range: min {min} exceeds max {max}")]
    InvalidRange {
        /// Lower bound
        min: f64,
        /// Upper bound
        max: f64,
    },

    /// Rule range with a NaN or infinite bound.
    #[error("Non-finite range bound: [{min}, {max}]")]
    NonFiniteBound {
        /// Lower bound
        min: f64,
        /// Upper bound
        max: f64,
    },

    /// Finite bounds whose width `max - min` overflows to infinity.
    #[error("Range width overflows: [{min}, {max}]")]
    RangeOverflow {
        /// Lower bound
        min: f64,
        /// Upper bound
        max: f64,
    },

    /// Category weight that is negative or not finite.
    #[error("Invalid weight {weight} for category {category}: must be finite and non-negative")]
    InvalidWeight {
        /// Category carrying the weight
        category: Category,
        /// Offending weight
        weight: f64,
    },

    /// Importance list does not pair one-to-one with the weight list.
    #[error("Importance list has {importance} entries but weight list has {weights}")]
    ImportanceLengthMismatch {
        /// Number of start weights
        weights: usize,
        /// Number of importance entries
        importance: usize,
    },

    /// Age and level pools have different lengths.
    #[error("Numeric pool sizes differ: ages {ages}, levels {levels}")]
    NumericPoolMismatch {
        /// Number of sampled ages
        ages: usize,
        /// Number of sampled levels
        levels: usize,
    },

    /// Position pool does not match the entity count.
    #[error("Position pool has {actual} entries, expected {expected}")]
    PositionPoolMismatch {
        /// Entity count defined by the numeric pools
        expected: usize,
        /// Number of positions supplied
        actual: usize,
    },

    /// Strategy configured without any category.
    #[error("Strategy '{strategy}' has no categories configured")]
    EmptyCategories {
        /// Strategy name
        strategy: &'static str,
    },

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Description of the invalid value
        value: String,
    },
}

/// Category parsing errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CategoryError {
    /// Label does not name any category.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::NumericPoolMismatch { ages: 3, levels: 4 };
        assert_eq!(err.to_string(), "Numeric pool sizes differ: ages 3, levels 4");

        let err = ConfigError::ImportanceLengthMismatch {
            weights: 10,
            importance: 9,
        };
        assert!(err.to_string().contains("9 entries"));

        let err = ConfigError::InvalidWeight {
            category: Category::CB,
            weight: -1.0,
        };
        assert!(err.to_string().contains("category CB"));

        let err = ConfigError::InvalidParameter {
            name: "strategy",
            value: "must be specified".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'strategy': must be specified"
        );
    }

    #[test]
    fn test_category_error_display() {
        let err = CategoryError::UnknownCategory("XX".to_string());
        assert_eq!(err.to_string(), "Unknown category: XX");
    }
}
