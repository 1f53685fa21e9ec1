//! Level quality tiers.
//!
//! Renderers colour an entity's level by tier. Thresholds sit at level 6 and
//! level 9 with inclusive-below semantics.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Level below which an entity is [`QualityTier::Basic`].
pub const REGULAR_THRESHOLD: f64 = 6.0;

/// Level below which an entity is [`QualityTier::Regular`].
pub const ELITE_THRESHOLD: f64 = 9.0;

/// Three-band quality classification of a level.
///
/// # Examples
///
/// ```
/// use market_core::types::QualityTier;
///
/// assert_eq!(QualityTier::from_level(5.99), QualityTier::Basic);
/// assert_eq!(QualityTier::from_level(6.0), QualityTier::Regular);
/// assert_eq!(QualityTier::from_level(9.0), QualityTier::Elite);
/// assert_eq!(QualityTier::Elite.index(), 2);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityTier {
    /// Tier 0: level < 6
    Basic,
    /// Tier 1: 6 <= level < 9
    Regular,
    /// Tier 2: level >= 9
    Elite,
}

impl QualityTier {
    /// Classifies a level.
    pub fn from_level(level: f64) -> Self {
        if level < REGULAR_THRESHOLD {
            QualityTier::Basic
        } else if level < ELITE_THRESHOLD {
            QualityTier::Regular
        } else {
            QualityTier::Elite
        }
    }

    /// Returns the zero-based tier index used for palette lookups.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for QualityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QualityTier::Basic => write!(f, "basic"),
            QualityTier::Regular => write!(f, "regular"),
            QualityTier::Elite => write!(f, "elite"),
        }
    }
}
