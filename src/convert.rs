//! Temperature unit conversion and display formatting.
//!
//! All reference data in this crate is stored in degrees Fahrenheit (the
//! canonical unit) and converted to the user's display unit at presentation
//! time. Every conversion rounds to the nearest whole degree — the site never
//! shows fractional degrees — using round-half-away-from-zero
//! ([`f64::round`]). Inputs are assumed to be finite numbers; callers validate
//! text-field input before calling.

use serde::{Deserialize, Serialize};

/// Temperature display unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TempUnit {
    /// Degrees Fahrenheit (the canonical storage unit).
    #[default]
    Fahrenheit,
    /// Degrees Celsius.
    Celsius,
    /// Kelvin.
    Kelvin,
}

impl TempUnit {
    /// Parse a unit from its single-letter symbol ("F", "C", or "K").
    ///
    /// Returns `None` for anything else, which lets stored preferences fall
    /// back to the default rather than fail.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "F" => Some(Self::Fahrenheit),
            "C" => Some(Self::Celsius),
            "K" => Some(Self::Kelvin),
            _ => None,
        }
    }

    /// The single-letter symbol used for persistence ("F", "C", "K").
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Fahrenheit => "F",
            Self::Celsius => "C",
            Self::Kelvin => "K",
        }
    }

    /// The display label. Kelvin carries no degree sign by convention.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Fahrenheit => "°F",
            Self::Celsius => "°C",
            Self::Kelvin => "K",
        }
    }
}

/// Convert Fahrenheit to Celsius, rounded to the nearest degree.
///
/// # Example
///
/// ```
/// use cookingtemps::convert::fahrenheit_to_celsius;
///
/// assert_eq!(fahrenheit_to_celsius(212.0), 100);
/// assert_eq!(fahrenheit_to_celsius(98.6), 37);
/// ```
#[inline]
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> i32 {
    ((fahrenheit - 32.0) * 5.0 / 9.0).round() as i32
}

/// Convert Fahrenheit to Kelvin, rounded to the nearest degree.
#[inline]
pub fn fahrenheit_to_kelvin(fahrenheit: f64) -> i32 {
    ((fahrenheit - 32.0) * 5.0 / 9.0 + 273.15).round() as i32
}

/// Convert Celsius to Fahrenheit, rounded to the nearest degree.
///
/// # Example
///
/// ```
/// use cookingtemps::convert::celsius_to_fahrenheit;
///
/// assert_eq!(celsius_to_fahrenheit(100.0), 212);
/// ```
#[inline]
pub fn celsius_to_fahrenheit(celsius: f64) -> i32 {
    (celsius * 9.0 / 5.0 + 32.0).round() as i32
}

/// Convert Celsius to Kelvin, rounded to the nearest degree.
#[inline]
pub fn celsius_to_kelvin(celsius: f64) -> i32 {
    (celsius + 273.15).round() as i32
}

/// Convert Kelvin to Fahrenheit, rounded to the nearest degree.
#[inline]
pub fn kelvin_to_fahrenheit(kelvin: f64) -> i32 {
    ((kelvin - 273.15) * 9.0 / 5.0 + 32.0).round() as i32
}

/// Convert Kelvin to Celsius, rounded to the nearest degree.
#[inline]
pub fn kelvin_to_celsius(kelvin: f64) -> i32 {
    (kelvin - 273.15).round() as i32
}

/// A temperature ready for display: whole-degree value plus unit label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayTemp {
    /// Whole-degree value in the requested unit.
    pub value: i32,
    /// Unit label: `"°F"`, `"°C"`, or `"K"`.
    pub label: &'static str,
}

impl std::fmt::Display for DisplayTemp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.value, self.label)
    }
}

/// Convert a temperature stored in °F to the requested display unit.
///
/// The Fahrenheit case also rounds to a whole degree: the value field is an
/// integer, so a fractional input like `98.6` displays as `99°F`. Reference
/// data is authored in whole degrees, so this only affects ad-hoc input.
///
/// # Example
///
/// ```
/// use cookingtemps::convert::{display_temp, TempUnit};
///
/// let shown = display_temp(165.0, TempUnit::Celsius);
/// assert_eq!(shown.value, 74);
/// assert_eq!(shown.label, "°C");
/// ```
pub fn display_temp(fahrenheit: f64, unit: TempUnit) -> DisplayTemp {
    let value = match unit {
        TempUnit::Fahrenheit => fahrenheit.round() as i32,
        TempUnit::Celsius => fahrenheit_to_celsius(fahrenheit),
        TempUnit::Kelvin => fahrenheit_to_kelvin(fahrenheit),
    };
    DisplayTemp {
        value,
        label: unit.label(),
    }
}

/// Format a temperature stored in °F as a display string like `"165°F"`.
///
/// Value and label are concatenated with no separating space.
pub fn format_temp(fahrenheit: f64, unit: TempUnit) -> String {
    display_temp(fahrenheit, unit).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_fahrenheit_to_celsius_fixed_points() {
        assert_eq!(fahrenheit_to_celsius(32.0), 0);
        assert_eq!(fahrenheit_to_celsius(212.0), 100);
        assert_eq!(fahrenheit_to_celsius(98.6), 37);
        assert_eq!(fahrenheit_to_celsius(0.0), -18);
        assert_eq!(fahrenheit_to_celsius(-40.0), -40);
    }

    #[test]
    fn test_celsius_to_fahrenheit_fixed_points() {
        assert_eq!(celsius_to_fahrenheit(0.0), 32);
        assert_eq!(celsius_to_fahrenheit(100.0), 212);
        assert_eq!(celsius_to_fahrenheit(-40.0), -40);
        assert_eq!(celsius_to_fahrenheit(74.0), 165);
    }

    #[test]
    fn test_kelvin_conversions() {
        assert_eq!(fahrenheit_to_kelvin(32.0), 273);
        assert_eq!(fahrenheit_to_kelvin(165.0), 347);
        assert_eq!(kelvin_to_celsius(273.15), 0);
        assert_eq!(kelvin_to_fahrenheit(273.15), 32);
        assert_eq!(celsius_to_kelvin(0.0), 273);
        assert_eq!(celsius_to_kelvin(100.0), 373);
    }

    #[test]
    fn test_display_temp() {
        assert_eq!(
            display_temp(165.0, TempUnit::Fahrenheit),
            DisplayTemp { value: 165, label: "°F" }
        );
        assert_eq!(
            display_temp(165.0, TempUnit::Celsius),
            DisplayTemp { value: 74, label: "°C" }
        );
        assert_eq!(
            display_temp(165.0, TempUnit::Kelvin),
            DisplayTemp { value: 347, label: "K" }
        );
        // Fractional Fahrenheit input rounds to a whole degree too.
        assert_eq!(
            display_temp(98.6, TempUnit::Fahrenheit),
            DisplayTemp { value: 99, label: "°F" }
        );
    }

    #[test]
    fn test_format_temp() {
        assert_eq!(format_temp(145.0, TempUnit::Fahrenheit), "145°F");
        assert_eq!(format_temp(165.0, TempUnit::Celsius), "74°C");
        assert_eq!(format_temp(165.0, TempUnit::Kelvin), "347K");
    }

    #[test]
    fn test_unit_symbols_roundtrip() {
        for unit in [TempUnit::Fahrenheit, TempUnit::Celsius, TempUnit::Kelvin] {
            assert_eq!(TempUnit::from_symbol(unit.symbol()), Some(unit));
        }
        assert_eq!(TempUnit::from_symbol("X"), None);
        assert_eq!(TempUnit::from_symbol(""), None);
    }

    proptest! {
        // Converting °F → °C → °F loses at most one degree to rounding.
        #[test]
        fn roundtrip_f_c_f_within_one_degree(f in -40i32..=550) {
            let c = fahrenheit_to_celsius(f64::from(f));
            let back = celsius_to_fahrenheit(f64::from(c));
            prop_assert!((back - f).abs() <= 1, "{f}°F → {c}°C → {back}°F");
        }

        #[test]
        fn roundtrip_f_k_f_within_one_degree(f in -40i32..=550) {
            let k = fahrenheit_to_kelvin(f64::from(f));
            let back = kelvin_to_fahrenheit(f64::from(k));
            prop_assert!((back - f).abs() <= 1, "{f}°F → {k}K → {back}°F");
        }
    }
}
