//! Catalog availability boundary.
//!
//! The checkout flow only ever asks one question of the restaurant catalog:
//! can this item name be ordered right now. The catalog itself (search,
//! descriptions, pricing sources) lives outside this crate.

use std::collections::HashSet;

/// Answers whether an item name is currently orderable. Pure query.
pub trait AvailabilityOracle: Send + Sync {
    fn is_item_available(&self, name: &str) -> bool;
}

/// A fixed menu backed by a set of item names.
#[derive(Debug, Clone)]
pub struct StaticMenu {
    items: HashSet<String>,
}

impl StaticMenu {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
        }
    }
}

impl AvailabilityOracle for StaticMenu {
    fn is_item_available(&self, name: &str) -> bool {
        self.items.contains(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_menu_matches_exact_names() {
        let menu = StaticMenu::new(["Burger", "Pizza"]);
        assert!(menu.is_item_available("Pizza"));
        assert!(!menu.is_item_available("pizza"));
        assert!(!menu.is_item_available("Sushi"));
    }
}
