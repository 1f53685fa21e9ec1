//! Display ordering of generated entities.
//!
//! Entities are sorted descending by the textual label of their category,
//! not by declaration order: `STR` sorts before `RW`, `GK` before `CB`.
//! The sort is stable, so entities sharing a category keep their pairing
//! order.

use crate::entity::Entity;

/// Sorts entities in place, descending by category label.
pub fn sort_by_category(entities: &mut [Entity]) {
    entities.sort_by(|a, b| b.category().label().cmp(a.category().label()));
}

/// Returns the entities sorted descending by category label.
pub fn order_by_category(mut entities: Vec<Entity>) -> Vec<Entity> {
    sort_by_category(&mut entities);
    entities
}

#[cfg(test)]
mod tests {
    use super::*;
    use market_core::types::Category;

    fn entity(category: Category, age: f64) -> Entity {
        Entity::from_draws(category, 5.0, age)
    }

    #[test]
    fn test_descending_by_label() {
        let ordered = order_by_category(vec![
            entity(Category::GK, 20.0),
            entity(Category::STR, 21.0),
            entity(Category::CB, 22.0),
        ]);

        let categories: Vec<Category> = ordered.iter().map(Entity::category).collect();
        assert_eq!(categories, vec![Category::STR, Category::GK, Category::CB]);
    }

    #[test]
    fn test_stable_for_duplicates() {
        let ordered = order_by_category(vec![
            entity(Category::CB, 30.0),
            entity(Category::STR, 20.0),
            entity(Category::CB, 31.0),
            entity(Category::STR, 21.0),
            entity(Category::GK, 25.0),
        ]);

        let keys: Vec<(Category, i32)> = ordered
            .iter()
            .map(|e| (e.category(), e.age()))
            .collect();
        assert_eq!(
            keys,
            vec![
                (Category::STR, 20),
                (Category::STR, 21),
                (Category::GK, 25),
                (Category::CB, 30),
                (Category::CB, 31),
            ]
        );
    }

    #[test]
    fn test_all_categories() {
        let mut entities: Vec<Entity> = Category::ALL
            .iter()
            .map(|&category| entity(category, 18.0))
            .collect();
        sort_by_category(&mut entities);

        let labels: Vec<&str> = entities.iter().map(|e| e.category().label()).collect();
        assert_eq!(
            labels,
            vec!["STR", "RW", "RB", "MC", "LW", "LB", "GK", "DMC", "CB", "AMC"]
        );
    }

    #[test]
    fn test_empty() {
        assert!(order_by_category(Vec::new()).is_empty());
    }
}
