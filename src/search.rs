//! Client-side search over the reference data.
//!
//! The search overlay works off a flat index built once from the data
//! tables: every meat cut contributes its USDA-safe temperature and every
//! oil its smoke point. Matching is a case-insensitive substring scan over
//! name and category; a blank query shows a short default slice instead of
//! the full index.

use crate::convert::{format_temp, TempUnit};
use crate::data::{MEATS, OILS};

/// Number of entries shown for a blank query.
const DEFAULT_RESULTS: usize = 8;

/// One searchable entry.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    /// Uppercase category tag shown in brackets.
    pub category: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Temperature in canonical °F.
    pub temp_f: f64,
}

impl SearchHit {
    /// Format this hit's temperature in the caller's display unit.
    pub fn formatted_temp(&self, unit: TempUnit) -> String {
        format_temp(self.temp_f, unit)
    }
}

/// Build the flat searchable index from all data tables.
pub fn build_index() -> Vec<SearchHit> {
    let mut index = Vec::with_capacity(MEATS.len() + OILS.len());

    for meat in MEATS {
        index.push(SearchHit {
            category: meat.category.name(),
            name: meat.name,
            temp_f: meat.temps.usda_safe,
        });
    }

    for oil in OILS {
        index.push(SearchHit {
            category: "OIL",
            name: oil.name,
            temp_f: oil.smoke_point_f,
        });
    }

    index
}

/// Filter the index by a user query.
///
/// A blank query returns the first [`DEFAULT_RESULTS`] entries; otherwise
/// any entry whose name or category contains the trimmed, lowercased query
/// matches, in index order.
pub fn search<'a>(index: &'a [SearchHit], query: &str) -> Vec<&'a SearchHit> {
    let q = query.trim().to_lowercase();

    if q.is_empty() {
        return index.iter().take(DEFAULT_RESULTS).collect();
    }

    index
        .iter()
        .filter(|hit| {
            hit.name.to_lowercase().contains(&q) || hit.category.to_lowercase().contains(&q)
        })
        .collect()
}
