//! Oil smoke point data.

use serde::Serialize;

/// Heat category an oil is suited for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeatCategory {
    /// Searing, deep frying.
    High,
    /// General cooking.
    Medium,
    /// Dressings and finishing only.
    Low,
}

impl HeatCategory {
    /// Uppercase display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::High => "HIGH HEAT",
            Self::Medium => "MEDIUM HEAT",
            Self::Low => "LOW / NO HEAT",
        }
    }
}

/// A cooking oil or fat and its smoke point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Oil {
    /// Display name.
    pub name: &'static str,
    /// Smoke point in °F.
    pub smoke_point_f: f64,
    /// Best culinary uses.
    pub best_for: &'static str,
    /// Flavor notes.
    pub flavor_profile: &'static str,
    /// Heat category for grouping.
    pub heat_category: HeatCategory,
}

/// All oils, grouped by heat category in display order.
pub const OILS: &[Oil] = &[
    // High heat
    Oil { name: "Avocado Oil", smoke_point_f: 520.0, best_for: "Searing, stir-fry", flavor_profile: "Neutral, buttery", heat_category: HeatCategory::High },
    Oil { name: "Safflower Oil", smoke_point_f: 510.0, best_for: "Deep frying", flavor_profile: "Neutral", heat_category: HeatCategory::High },
    Oil { name: "Light Olive Oil", smoke_point_f: 465.0, best_for: "Sautéing, frying", flavor_profile: "Mild", heat_category: HeatCategory::High },
    Oil { name: "Soybean Oil", smoke_point_f: 450.0, best_for: "Deep frying, baking", flavor_profile: "Neutral", heat_category: HeatCategory::High },
    Oil { name: "Peanut Oil", smoke_point_f: 450.0, best_for: "Deep frying, Asian", flavor_profile: "Mild, nutty", heat_category: HeatCategory::High },
    // Medium heat
    Oil { name: "Canola Oil", smoke_point_f: 400.0, best_for: "General cooking, baking", flavor_profile: "Neutral", heat_category: HeatCategory::Medium },
    Oil { name: "Grapeseed Oil", smoke_point_f: 390.0, best_for: "Sautéing, dressings", flavor_profile: "Clean, neutral", heat_category: HeatCategory::Medium },
    Oil { name: "Vegetable Shortening", smoke_point_f: 360.0, best_for: "Baking, frying", flavor_profile: "Neutral", heat_category: HeatCategory::Medium },
    Oil { name: "Lard", smoke_point_f: 370.0, best_for: "Frying, pastry", flavor_profile: "Savory, rich", heat_category: HeatCategory::Medium },
    Oil { name: "Coconut Oil (Ref.)", smoke_point_f: 400.0, best_for: "Sautéing, baking", flavor_profile: "Neutral", heat_category: HeatCategory::Medium },
    Oil { name: "Butter", smoke_point_f: 350.0, best_for: "Sautéing, finishing", flavor_profile: "Rich, creamy", heat_category: HeatCategory::Medium },
    // Low heat / no heat
    Oil { name: "Extra Virgin Olive", smoke_point_f: 320.0, best_for: "Dressings, finishing", flavor_profile: "Fruity, peppery", heat_category: HeatCategory::Low },
    Oil { name: "Sesame (Toasted)", smoke_point_f: 350.0, best_for: "Finishing, Asian", flavor_profile: "Nutty, intense", heat_category: HeatCategory::Low },
    Oil { name: "Flaxseed Oil", smoke_point_f: 225.0, best_for: "Dressings only", flavor_profile: "Earthy, nutty", heat_category: HeatCategory::Low },
    Oil { name: "Walnut Oil", smoke_point_f: 160.0, best_for: "Dressings, drizzle", flavor_profile: "Rich, nutty", heat_category: HeatCategory::Low },
];
