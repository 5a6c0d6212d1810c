//! Section identifiers and navigation order.
//!
//! Every scrollable content region has a stable string id used for anchor
//! links and scroll-spy registration. `NAV_ITEMS` is the single source of
//! truth for sidebar display order.

/// Section ids used for anchor navigation and scroll-spy registration.
pub mod section_ids {
    /// Hero banner.
    pub const HERO: &str = "hero";
    /// Meat & poultry safe temperatures.
    pub const MEAT: &str = "meat";
    /// Unit converter.
    pub const CONVERTER: &str = "converter";
    /// Oven temperature guide.
    pub const OVEN: &str = "oven";
    /// Food safety danger zone.
    pub const DANGER: &str = "danger";
    /// Cooking methods.
    pub const METHODS: &str = "methods";
    /// Oil smoke points.
    pub const OILS: &str = "oils";
    /// Candy / sugar stages.
    pub const SUGAR: &str = "sugar";
    /// Baking internal temperatures.
    pub const BAKING: &str = "baking";
    /// Beverage serving temperatures.
    pub const BEVERAGES: &str = "beverages";
    /// Fun facts.
    pub const FUN_FACTS: &str = "fun-facts";
    /// Gear showcase.
    pub const PRODUCTS: &str = "products";
}

/// A sidebar navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    /// Target section id.
    pub id: &'static str,
    /// Uppercase display label.
    pub label: &'static str,
}

/// Sidebar / anchor nav items in display order.
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { id: section_ids::MEAT, label: "MEAT & POULTRY" },
    NavItem { id: section_ids::CONVERTER, label: "CONVERTER" },
    NavItem { id: section_ids::OVEN, label: "OVEN TEMPS" },
    NavItem { id: section_ids::DANGER, label: "DANGER ZONE" },
    NavItem { id: section_ids::METHODS, label: "METHODS" },
    NavItem { id: section_ids::OILS, label: "SMOKE POINTS" },
    NavItem { id: section_ids::SUGAR, label: "SUGAR STAGES" },
    NavItem { id: section_ids::BAKING, label: "BAKING" },
    NavItem { id: section_ids::BEVERAGES, label: "BEVERAGES" },
    NavItem { id: section_ids::FUN_FACTS, label: "FUN FACTS" },
    NavItem { id: section_ids::PRODUCTS, label: "GEAR" },
];

/// Section ids in navigation order, ready for scroll-spy registration.
pub fn nav_section_ids() -> impl Iterator<Item = &'static str> {
    NAV_ITEMS.iter().map(|item| item.id)
}
