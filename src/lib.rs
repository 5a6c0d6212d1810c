//! # cookingtemps
//!
//! Core logic for the cookingtemps reference site: a catalog of cooking
//! temperatures (meat safety thresholds, oven ranges, oil smoke points,
//! candy stages) with a unit converter, scroll-spy navigation, client-side
//! search, and a mailing-list signup proxy.
//!
//! ## Features
//!
//! - **Temperature Conversion**: Pure °F/°C/K conversion and display
//!   formatting with whole-degree rounding
//! - **Section Tracking**: Trigger-line scroll spy driving navigation
//!   highlights, with frame-coalesced updates
//! - **Reference Data**: Static tables for meats, oils, oven ranges, sugar
//!   stages, cooking methods, beverages, and baking, all stored in
//!   canonical °F
//! - **Search**: Flat case-insensitive index over the reference data
//! - **Preferences**: Theme and display-unit settings behind an injectable
//!   store
//! - **Subscription Proxy**: `POST /api/subscribe` forwarding to the Brevo
//!   contacts API with an in-process list-id cache
//!
//! ## Quick Start
//!
//! ```
//! use cookingtemps::convert::{format_temp, TempUnit};
//! use cookingtemps::data::MEATS;
//!
//! // Reference data is stored in °F and converted at display time.
//! let chicken = MEATS.iter().find(|m| m.id == "chicken-breast").unwrap();
//! assert_eq!(format_temp(chicken.temps.usda_safe, TempUnit::Celsius), "74°C");
//! ```

// Public modules
pub mod api;
pub mod config;
pub mod convert;
pub mod data;
pub mod error;
pub mod prefs;
pub mod scrollspy;
pub mod search;
pub mod sections;
pub mod subscribe;

// Re-exports for convenience
pub use convert::{display_temp, format_temp, DisplayTemp, TempUnit};
pub use error::{Error, Result};
pub use prefs::{PreferenceStore, Preferences, ResolvedTheme, Theme};
pub use scrollspy::{CallbackHandle, ScrollSpy, Viewport};
pub use search::{build_index, search, SearchHit};
pub use sections::{NavItem, NAV_ITEMS};
pub use subscribe::{ContactListApi, MailingList, SubscribeRequest};
