//! Reference table printer
//!
//! Renders the meat, oil, and sugar-stage tables in a chosen display unit,
//! the same way the site's table components consume the data.
//!
//! Run with: cargo run --example temperature_tables
//!
//! To pick a unit:
//!   cargo run --example temperature_tables -- --unit C

use cookingtemps::convert::{format_temp, TempUnit};
use cookingtemps::data::{CANDY_STAGES, MEATS, MEAT_CATEGORIES, OILS};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let unit = args
        .iter()
        .position(|arg| arg == "--unit")
        .and_then(|i| args.get(i + 1))
        .and_then(|s| TempUnit::from_symbol(&s.to_uppercase()))
        .unwrap_or_default();

    println!("Cooking Temperatures ({})", unit.label());
    println!("=========================\n");

    println!("=== Meat & Poultry (USDA safe) ===");
    for category in MEAT_CATEGORIES {
        println!("[{}]", category.name());
        for cut in MEATS.iter().filter(|m| m.category == *category) {
            println!("  {:<22} {}", cut.name, format_temp(cut.temps.usda_safe, unit));
        }
    }

    println!("\n=== Oil Smoke Points ===");
    for oil in OILS {
        println!(
            "  {:<22} {:>7}  {}",
            oil.name,
            format_temp(oil.smoke_point_f, unit),
            oil.best_for
        );
    }

    println!("\n=== Sugar Stages ===");
    for stage in CANDY_STAGES {
        println!(
            "  {:<12} {}–{}  {}",
            stage.name,
            format_temp(stage.temp_range_f.0, unit),
            format_temp(stage.temp_range_f.1, unit),
            stage.used_for
        );
    }
}
