//! Bread and pastry internal doneness temperatures.

use serde::Serialize;

/// Baked-goods grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BakingCategory {
    /// Breads and rolls.
    Bread,
    /// Cakes, custards, cookies.
    Pastry,
}

/// A baked item with its internal doneness temperature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BakingItem {
    /// Display name.
    pub name: &'static str,
    /// Category for grouping.
    pub category: BakingCategory,
    /// Internal temperature when done, °F.
    pub internal_temp_f: f64,
    /// Non-thermometer doneness cue.
    pub cue: &'static str,
}

/// All baked items, breads first.
pub const BAKING_ITEMS: &[BakingItem] = &[
    // Breads
    BakingItem { name: "Yeast Bread", category: BakingCategory::Bread, internal_temp_f: 200.0, cue: "Hollow sound when tapped" },
    BakingItem { name: "Sourdough", category: BakingCategory::Bread, internal_temp_f: 210.0, cue: "Deep crust, hollow thump" },
    BakingItem { name: "Quick Bread", category: BakingCategory::Bread, internal_temp_f: 200.0, cue: "Toothpick comes out clean" },
    BakingItem { name: "Dinner Rolls", category: BakingCategory::Bread, internal_temp_f: 190.0, cue: "Golden top, cooked through" },
    BakingItem { name: "Enriched Bread", category: BakingCategory::Bread, internal_temp_f: 190.0, cue: "Rich golden crust" },
    // Pastries
    BakingItem { name: "Cake", category: BakingCategory::Pastry, internal_temp_f: 210.0, cue: "Springs back when pressed" },
    BakingItem { name: "Cheesecake", category: BakingCategory::Pastry, internal_temp_f: 150.0, cue: "Center barely jiggles" },
    BakingItem { name: "Custard / Flan", category: BakingCategory::Pastry, internal_temp_f: 170.0, cue: "Set at edges, slight wobble center" },
    BakingItem { name: "Brownies", category: BakingCategory::Pastry, internal_temp_f: 195.0, cue: "Moist crumbs on toothpick" },
    BakingItem { name: "Cookies", category: BakingCategory::Pastry, internal_temp_f: 185.0, cue: "Edges set, center soft" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breads_finish_above_185() {
        for item in BAKING_ITEMS.iter().filter(|i| i.category == BakingCategory::Bread) {
            assert!(item.internal_temp_f >= 185.0, "{}", item.name);
        }
    }
}
