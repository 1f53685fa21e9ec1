//! Generated market entities.

use std::fmt;

use market_core::types::{Category, QualityTier};
use serde::Serialize;

/// A generated player: category, level and age.
///
/// Entities are value objects built only by the generator; fields are read
/// through accessors and never mutated after construction.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Entity {
    category: Category,
    level: f64,
    age: i32,
}

impl Entity {
    /// Builds an entity from pool draws. The age draw is rounded half to even.
    pub(crate) fn from_draws(category: Category, level: f64, age: f64) -> Self {
        Self {
            category,
            level,
            age: age.round_ties_even() as i32,
        }
    }

    /// Returns the category.
    #[inline]
    pub fn category(&self) -> Category {
        self.category
    }

    /// Returns the level.
    #[inline]
    pub fn level(&self) -> f64 {
        self.level
    }

    /// Returns the rounded age.
    #[inline]
    pub fn age(&self) -> i32 {
        self.age
    }

    /// Returns the quality tier of the level.
    pub fn tier(&self) -> QualityTier {
        QualityTier::from_level(self.level)
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | lvl {:.1} | age {}", self.category, self.level, self.age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_rounding() {
        assert_eq!(Entity::from_draws(Category::GK, 1.0, 20.4).age(), 20);
        assert_eq!(Entity::from_draws(Category::GK, 1.0, 20.6).age(), 21);
        assert_eq!(Entity::from_draws(Category::GK, 1.0, 20.5).age(), 20);
        assert_eq!(Entity::from_draws(Category::GK, 1.0, 21.5).age(), 22);
    }

    #[test]
    fn test_accessors() {
        let entity = Entity::from_draws(Category::RW, 8.25, 27.0);
        assert_eq!(entity.category(), Category::RW);
        assert_eq!(entity.level(), 8.25);
        assert_eq!(entity.age(), 27);
        assert_eq!(entity.tier(), QualityTier::Regular);
    }

    #[test]
    fn test_display() {
        let entity = Entity::from_draws(Category::DMC, 6.44, 30.2);
        assert_eq!(entity.to_string(), "DMC | lvl 6.4 | age 30");
    }
}
