//! Cooking methods and their working temperature ranges.

use serde::Serialize;

/// Relative heat intensity of a cooking method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeatIntensity {
    /// Gentle (sous vide).
    Low,
    /// Moderate (smoking, braising, steaming).
    Medium,
    /// Hot (roasting, frying).
    High,
    /// Scorching (searing, grilling).
    Extreme,
}

/// A cooking method with its working range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CookingMethod {
    /// Display name.
    pub name: &'static str,
    /// Working range in °F.
    pub temp_range_f: (f64, f64),
    /// One-line technique tip.
    pub tip: &'static str,
    /// Icon key for the UI layer.
    pub icon_key: &'static str,
    /// Heat intensity for grouping and badge styling.
    pub heat_intensity: HeatIntensity,
}

/// All methods, hottest style first.
pub const COOKING_METHODS: &[CookingMethod] = &[
    CookingMethod { name: "Searing", temp_range_f: (400.0, 500.0), tip: "Use a screaming-hot pan, don't crowd it", icon_key: "local_fire_department", heat_intensity: HeatIntensity::Extreme },
    CookingMethod { name: "Grilling", temp_range_f: (350.0, 550.0), tip: "Direct heat for thin cuts, indirect for thick", icon_key: "outdoor_grill", heat_intensity: HeatIntensity::Extreme },
    CookingMethod { name: "Roasting", temp_range_f: (300.0, 450.0), tip: "Let meat rest 10 min after removing", icon_key: "oven", heat_intensity: HeatIntensity::High },
    CookingMethod { name: "Deep Frying", temp_range_f: (325.0, 375.0), tip: "Monitor oil temp constantly, avoid overcrowding", icon_key: "skillet", heat_intensity: HeatIntensity::High },
    CookingMethod { name: "Air Frying", temp_range_f: (325.0, 400.0), tip: "Shake basket halfway for even browning", icon_key: "air", heat_intensity: HeatIntensity::High },
    CookingMethod { name: "Smoking", temp_range_f: (200.0, 275.0), tip: "Low and slow, patience is the key", icon_key: "local_fire_department", heat_intensity: HeatIntensity::Medium },
    CookingMethod { name: "Braising", temp_range_f: (275.0, 325.0), tip: "Sear first, then cook covered in liquid", icon_key: "soup_kitchen", heat_intensity: HeatIntensity::Medium },
    CookingMethod { name: "Steaming", temp_range_f: (212.0, 212.0), tip: "Keep water at a steady boil, don't lift lid", icon_key: "water_drop", heat_intensity: HeatIntensity::Medium },
    CookingMethod { name: "Sous Vide", temp_range_f: (120.0, 185.0), tip: "Precision counts, ±1°F makes a difference", icon_key: "thermostat", heat_intensity: HeatIntensity::Low },
];
