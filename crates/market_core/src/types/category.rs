//! Player categories.
//!
//! The category set is closed: every generated entity carries exactly one of
//! the ten labels below. Declaration order defines [`Ord`]; display ordering
//! of a market uses the textual label instead (see the engine's ordering
//! module).
//!
//! # Examples
//!
//! ```
//! use market_core::types::category::Category;
//!
//! assert_eq!(Category::DMC.label(), "DMC");
//! assert_eq!(Category::ALL.len(), 10);
//!
//! let mc: Category = "mc".parse().unwrap();
//! assert_eq!(mc, Category::MC);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::CategoryError;

/// Playing position of a generated entity.
///
/// # Variants
/// - `GK`: Goalkeeper
/// - `STR`: Striker
/// - `CB`: Centre back
/// - `LW`: Left winger
/// - `LB`: Left back
/// - `DMC`: Defensive midfielder
/// - `AMC`: Attacking midfielder
/// - `RB`: Right back
/// - `RW`: Right winger
/// - `MC`: Central midfielder
#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Goalkeeper
    GK,
    /// Striker
    STR,
    /// Centre back
    CB,
    /// Left winger
    LW,
    /// Left back
    LB,
    /// Defensive midfielder
    DMC,
    /// Attacking midfielder
    AMC,
    /// Right back
    RB,
    /// Right winger
    RW,
    /// Central midfielder
    MC,
}

impl Category {
    /// Every category in declaration order.
    pub const ALL: [Category; 10] = [
        Category::GK,
        Category::STR,
        Category::CB,
        Category::LW,
        Category::LB,
        Category::DMC,
        Category::AMC,
        Category::RB,
        Category::RW,
        Category::MC,
    ];

    /// Category returned when a weighted draw matches nothing.
    ///
    /// This is the first declared category.
    pub const FALLBACK: Category = Category::GK;

    /// Returns the upper-case textual label.
    ///
    /// # Examples
    ///
    /// ```
    /// use market_core::types::category::Category;
    ///
    /// assert_eq!(Category::GK.label(), "GK");
    /// assert_eq!(Category::AMC.label(), "AMC");
    /// ```
    pub fn label(&self) -> &'static str {
        match self {
            Category::GK => "GK",
            Category::STR => "STR",
            Category::CB => "CB",
            Category::LW => "LW",
            Category::LB => "LB",
            Category::DMC => "DMC",
            Category::AMC => "AMC",
            Category::RB => "RB",
            Category::RW => "RW",
            Category::MC => "MC",
        }
    }

    /// Returns the zero-based declaration index.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl FromStr for Category {
    type Err = CategoryError;

    /// Parses a category label (case-insensitive).
    fn from_str(s: &str) -> Result<Self, CategoryError> {
        let upper = s.trim().to_uppercase();
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.label() == upper)
            .ok_or_else(|| CategoryError::UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_match_variant_names() {
        let labels: Vec<&str> = Category::ALL.iter().map(Category::label).collect();
        assert_eq!(
            labels,
            vec!["GK", "STR", "CB", "LW", "LB", "DMC", "AMC", "RB", "RW", "MC"]
        );
    }

    #[test]
    fn test_declaration_order() {
        assert!(Category::GK < Category::STR);
        assert!(Category::RW < Category::MC);
        assert_eq!(Category::GK.index(), 0);
        assert_eq!(Category::MC.index(), 9);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("str".parse::<Category>().unwrap(), Category::STR);
        assert_eq!(" Dmc ".parse::<Category>().unwrap(), Category::DMC);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "CF".parse::<Category>().unwrap_err();
        assert_eq!(err, CategoryError::UnknownCategory("CF".to_string()));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Category::LB), "LB");
    }

    #[test]
    fn test_fallback_is_first_declared() {
        assert_eq!(Category::FALLBACK, Category::ALL[0]);
    }
}
