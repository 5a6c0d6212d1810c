//! Oven temperature guide.

use serde::Serialize;

/// A named oven temperature range with its British gas mark.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OvenRange {
    /// Display label ("Very Low" .. "Broil").
    pub label: &'static str,
    /// Inclusive range in °F.
    pub temp_range_f: (f64, f64),
    /// Gas mark equivalent.
    pub gas_mark: &'static str,
    /// Typical dishes.
    pub dishes: &'static str,
}

/// The oven guide, coldest to hottest.
pub const OVEN_RANGES: &[OvenRange] = &[
    OvenRange { label: "Very Low", temp_range_f: (200.0, 250.0), gas_mark: "½–1", dishes: "Meringues, drying herbs" },
    OvenRange { label: "Low", temp_range_f: (250.0, 300.0), gas_mark: "1–2", dishes: "Slow roasts, casseroles" },
    OvenRange { label: "Moderate", temp_range_f: (325.0, 375.0), gas_mark: "3–5", dishes: "Cakes, cookies, roasted vegetables" },
    OvenRange { label: "Hot", temp_range_f: (400.0, 425.0), gas_mark: "6–7", dishes: "Bread, pizza dough, roasted chicken" },
    OvenRange { label: "Very Hot", temp_range_f: (450.0, 500.0), gas_mark: "8–9", dishes: "Pizza, quick-sear roasts, broiling" },
    OvenRange { label: "Broil", temp_range_f: (500.0, 550.0), gas_mark: "10", dishes: "Broiling, charring, finishing" },
];
