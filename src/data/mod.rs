//! Static reference data tables.
//!
//! Everything here is authored once and read-only at runtime. All
//! temperatures are stored in degrees Fahrenheit (the canonical unit) and
//! converted at presentation time via [`crate::convert`].

pub mod baking;
pub mod beverages;
pub mod candy;
pub mod facts;
pub mod meats;
pub mod methods;
pub mod oils;
pub mod oven;

pub use baking::{BakingCategory, BakingItem, BAKING_ITEMS};
pub use beverages::{Beverage, BeverageCategory, BEVERAGES};
pub use candy::{CandyStage, CANDY_STAGES};
pub use facts::{FunFact, FUN_FACTS};
pub use meats::{DonenessTemps, MeatCategory, MeatCut, MEATS, MEAT_CATEGORIES};
pub use methods::{CookingMethod, HeatIntensity, COOKING_METHODS};
pub use oils::{HeatCategory, Oil, OILS};
pub use oven::{OvenRange, OVEN_RANGES};

/// Lower bound of the bacterial danger zone, °F.
pub const DANGER_ZONE_LOW_F: f64 = 40.0;

/// Upper bound of the bacterial danger zone, °F.
pub const DANGER_ZONE_HIGH_F: f64 = 140.0;
