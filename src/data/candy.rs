//! Candy / sugar temperature stages.

use serde::Serialize;

/// A sugar cooking stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CandyStage {
    /// Stage name ("Thread" .. "Caramel").
    pub name: &'static str,
    /// Inclusive range in °F.
    pub temp_range_f: (f64, f64),
    /// Texture of a cooled drop of syrup.
    pub texture: &'static str,
    /// Typical confections.
    pub used_for: &'static str,
}

/// The classic sugar stages, coolest to hottest.
pub const CANDY_STAGES: &[CandyStage] = &[
    CandyStage { name: "Thread", temp_range_f: (230.0, 235.0), texture: "Thin, liquid threads", used_for: "Syrups, glazes" },
    CandyStage { name: "Soft Ball", temp_range_f: (235.0, 240.0), texture: "Soft, pliable ball", used_for: "Fudge, fondant, pralines" },
    CandyStage { name: "Firm Ball", temp_range_f: (245.0, 250.0), texture: "Firm but flexible ball", used_for: "Caramels, marshmallows" },
    CandyStage { name: "Hard Ball", temp_range_f: (250.0, 265.0), texture: "Rigid, dense ball", used_for: "Nougat, gummies, rock candy" },
    CandyStage { name: "Soft Crack", temp_range_f: (270.0, 290.0), texture: "Flexible, bends then snaps", used_for: "Taffy, butterscotch" },
    CandyStage { name: "Hard Crack", temp_range_f: (300.0, 310.0), texture: "Brittle, snaps clean", used_for: "Lollipops, toffee, brittle" },
    CandyStage { name: "Caramel", temp_range_f: (320.0, 350.0), texture: "Amber liquid, bittersweet", used_for: "Caramel sauce, praline, croquembouche" },
];
