//! Beverage serving temperatures.

use serde::Serialize;

/// Beverage grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BeverageCategory {
    /// Coffee and tea.
    Coffee,
    /// Beer styles.
    Beer,
    /// Wine styles.
    Wine,
    /// Everything else.
    Other,
}

/// A beverage and its ideal serving temperature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Beverage {
    /// Display name.
    pub name: &'static str,
    /// Category for grouping.
    pub category: BeverageCategory,
    /// Serving temperature in °F.
    pub serving_temp_f: f64,
    /// Brewing or serving note.
    pub note: &'static str,
}

/// All beverages, grouped by category in display order.
pub const BEVERAGES: &[Beverage] = &[
    // Coffee & tea
    Beverage { name: "Espresso", category: BeverageCategory::Coffee, serving_temp_f: 160.0, note: "Extracted at 190–200°F" },
    Beverage { name: "Drip Coffee", category: BeverageCategory::Coffee, serving_temp_f: 165.0, note: "Brew at 195–205°F" },
    Beverage { name: "Green Tea", category: BeverageCategory::Coffee, serving_temp_f: 160.0, note: "Brew at 170–180°F" },
    Beverage { name: "Black Tea", category: BeverageCategory::Coffee, serving_temp_f: 175.0, note: "Brew at 200–212°F" },
    Beverage { name: "Herbal Tea", category: BeverageCategory::Coffee, serving_temp_f: 175.0, note: "Brew at 212°F" },
    // Beer
    Beverage { name: "Light Lager", category: BeverageCategory::Beer, serving_temp_f: 40.0, note: "Very cold, crisp" },
    Beverage { name: "Pilsner", category: BeverageCategory::Beer, serving_temp_f: 42.0, note: "Cold, refreshing" },
    Beverage { name: "Pale Ale / IPA", category: BeverageCategory::Beer, serving_temp_f: 50.0, note: "Cool, aromatic" },
    Beverage { name: "Stout / Porter", category: BeverageCategory::Beer, serving_temp_f: 55.0, note: "Cellar temp, full body" },
    Beverage { name: "Belgian Strong", category: BeverageCategory::Beer, serving_temp_f: 55.0, note: "Cellar temp, complex" },
    // Wine
    Beverage { name: "Sparkling Wine", category: BeverageCategory::Wine, serving_temp_f: 43.0, note: "Well chilled" },
    Beverage { name: "White Wine", category: BeverageCategory::Wine, serving_temp_f: 50.0, note: "Chilled but not ice cold" },
    Beverage { name: "Rosé", category: BeverageCategory::Wine, serving_temp_f: 50.0, note: "Crisp and refreshing" },
    Beverage { name: "Light Red", category: BeverageCategory::Wine, serving_temp_f: 58.0, note: "Slightly cool" },
    Beverage { name: "Full-bodied Red", category: BeverageCategory::Wine, serving_temp_f: 65.0, note: "Room temp (cellar)" },
    // Other
    Beverage { name: "Hot Chocolate", category: BeverageCategory::Other, serving_temp_f: 160.0, note: "Warm and comforting" },
    Beverage { name: "Cold Brew", category: BeverageCategory::Other, serving_temp_f: 38.0, note: "Over ice" },
];
