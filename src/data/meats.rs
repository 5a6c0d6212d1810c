//! Meat & poultry temperature data.
//!
//! Doneness temperatures alongside the USDA-safe minimum for each cut.
//! Doneness entries that make no culinary sense for a cut (rare poultry)
//! are simply absent.

use serde::Serialize;

/// Meat category, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MeatCategory {
    /// Beef cuts.
    Beef,
    /// Pork cuts.
    Pork,
    /// Chicken, turkey, duck.
    Poultry,
    /// Lamb cuts.
    Lamb,
    /// Fin fish and shellfish.
    Fish,
    /// Venison, bison.
    Game,
}

impl MeatCategory {
    /// Uppercase display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Beef => "BEEF",
            Self::Pork => "PORK",
            Self::Poultry => "POULTRY",
            Self::Lamb => "LAMB",
            Self::Fish => "FISH",
            Self::Game => "GAME",
        }
    }
}

/// Unique categories in display order.
pub const MEAT_CATEGORIES: &[MeatCategory] = &[
    MeatCategory::Beef,
    MeatCategory::Pork,
    MeatCategory::Poultry,
    MeatCategory::Lamb,
    MeatCategory::Fish,
    MeatCategory::Game,
];

/// Per-doneness temperatures for a cut, all in °F.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DonenessTemps {
    /// Rare, if meaningful for this cut.
    pub rare: Option<f64>,
    /// Medium rare, if meaningful for this cut.
    pub medium_rare: Option<f64>,
    /// Medium, if meaningful for this cut.
    pub medium: Option<f64>,
    /// Well done, if meaningful for this cut.
    pub well_done: Option<f64>,
    /// USDA-recommended safe minimum.
    pub usda_safe: f64,
}

/// A single meat or poultry cut.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MeatCut {
    /// Stable id (used as a DOM anchor and list key).
    pub id: &'static str,
    /// Category for grouping and filtering.
    pub category: MeatCategory,
    /// Display name.
    pub name: &'static str,
    /// Temperatures in °F.
    pub temps: DonenessTemps,
}

macro_rules! temps {
    (rare: $r:expr, medium_rare: $mr:expr, medium: $m:expr, well_done: $wd:expr, usda: $safe:expr) => {
        DonenessTemps {
            rare: $r,
            medium_rare: $mr,
            medium: $m,
            well_done: $wd,
            usda_safe: $safe,
        }
    };
}

/// All meat & poultry cuts, grouped by category in display order.
pub const MEATS: &[MeatCut] = &[
    // Beef
    MeatCut {
        id: "beef-steak",
        category: MeatCategory::Beef,
        name: "Beef (Steak)",
        temps: temps!(rare: Some(125.0), medium_rare: Some(135.0), medium: Some(145.0), well_done: Some(160.0), usda: 145.0),
    },
    MeatCut {
        id: "beef-ground",
        category: MeatCategory::Beef,
        name: "Beef (Ground)",
        temps: temps!(rare: None, medium_rare: None, medium: Some(160.0), well_done: Some(170.0), usda: 160.0),
    },
    MeatCut {
        id: "beef-roast",
        category: MeatCategory::Beef,
        name: "Beef (Roast)",
        temps: temps!(rare: Some(125.0), medium_rare: Some(135.0), medium: Some(145.0), well_done: Some(160.0), usda: 145.0),
    },
    // Pork
    MeatCut {
        id: "pork-chops",
        category: MeatCategory::Pork,
        name: "Pork (Chops)",
        temps: temps!(rare: None, medium_rare: Some(145.0), medium: Some(150.0), well_done: Some(160.0), usda: 145.0),
    },
    MeatCut {
        id: "pork-ground",
        category: MeatCategory::Pork,
        name: "Pork (Ground)",
        temps: temps!(rare: None, medium_rare: None, medium: Some(160.0), well_done: None, usda: 160.0),
    },
    MeatCut {
        id: "pork-tender",
        category: MeatCategory::Pork,
        name: "Pork (Tenderloin)",
        temps: temps!(rare: None, medium_rare: Some(145.0), medium: Some(150.0), well_done: Some(160.0), usda: 145.0),
    },
    // Poultry
    MeatCut {
        id: "chicken-breast",
        category: MeatCategory::Poultry,
        name: "Chicken (Breast)",
        temps: temps!(rare: None, medium_rare: None, medium: None, well_done: None, usda: 165.0),
    },
    MeatCut {
        id: "chicken-thigh",
        category: MeatCategory::Poultry,
        name: "Chicken (Thigh)",
        temps: temps!(rare: None, medium_rare: None, medium: None, well_done: None, usda: 165.0),
    },
    MeatCut {
        id: "turkey-breast",
        category: MeatCategory::Poultry,
        name: "Turkey (Breast)",
        temps: temps!(rare: None, medium_rare: None, medium: None, well_done: None, usda: 165.0),
    },
    MeatCut {
        id: "turkey-ground",
        category: MeatCategory::Poultry,
        name: "Turkey (Ground)",
        temps: temps!(rare: None, medium_rare: None, medium: None, well_done: None, usda: 165.0),
    },
    MeatCut {
        id: "duck-breast",
        category: MeatCategory::Poultry,
        name: "Duck (Breast)",
        temps: temps!(rare: None, medium_rare: Some(135.0), medium: Some(145.0), well_done: None, usda: 165.0),
    },
    // Lamb
    MeatCut {
        id: "lamb-chops",
        category: MeatCategory::Lamb,
        name: "Lamb (Chops)",
        temps: temps!(rare: Some(125.0), medium_rare: Some(130.0), medium: Some(140.0), well_done: Some(155.0), usda: 145.0),
    },
    MeatCut {
        id: "lamb-leg",
        category: MeatCategory::Lamb,
        name: "Lamb (Leg Roast)",
        temps: temps!(rare: Some(125.0), medium_rare: Some(130.0), medium: Some(140.0), well_done: Some(155.0), usda: 145.0),
    },
    MeatCut {
        id: "lamb-ground",
        category: MeatCategory::Lamb,
        name: "Lamb (Ground)",
        temps: temps!(rare: None, medium_rare: None, medium: Some(160.0), well_done: None, usda: 160.0),
    },
    // Fish
    MeatCut {
        id: "fish-fin",
        category: MeatCategory::Fish,
        name: "Fish (Fin Fish)",
        temps: temps!(rare: None, medium_rare: Some(125.0), medium: Some(135.0), well_done: None, usda: 145.0),
    },
    MeatCut {
        id: "fish-shrimp",
        category: MeatCategory::Fish,
        name: "Shrimp / Lobster",
        temps: temps!(rare: None, medium_rare: None, medium: None, well_done: None, usda: 145.0),
    },
    MeatCut {
        id: "fish-salmon",
        category: MeatCategory::Fish,
        name: "Salmon",
        temps: temps!(rare: None, medium_rare: Some(120.0), medium: Some(130.0), well_done: None, usda: 145.0),
    },
    // Game
    MeatCut {
        id: "venison",
        category: MeatCategory::Game,
        name: "Venison (Steak)",
        temps: temps!(rare: Some(125.0), medium_rare: Some(135.0), medium: Some(145.0), well_done: None, usda: 160.0),
    },
    MeatCut {
        id: "bison",
        category: MeatCategory::Game,
        name: "Bison (Steak)",
        temps: temps!(rare: Some(125.0), medium_rare: Some(135.0), medium: Some(145.0), well_done: None, usda: 160.0),
    },
];
