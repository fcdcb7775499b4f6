//! # bb_core - Tabletop Roster Report Transformation
//!
//! Transforms a tabletop-game team roster export (nested JSON:
//! forces, selections, stat profiles, skills, costs) into an HTML
//! report of player cards and a roster summary table.
//!
//! ## Pipeline
//! 1. Extraction - flatten forces into selection/category lists
//! 2. Classification - partition selections by primary category
//! 3. Aggregation - merge characteristics, costs, rules per player
//! 4. Presentation - build a [`ReportContext`], render HTML
//!
//! The whole pipeline is synchronous and deterministic: identical
//! input produces byte-identical output.

pub mod api;
pub mod error;
pub mod models;
pub mod render;
pub mod report;

// Re-export main API
pub use api::{build_report, render_team_json};
pub use error::{Result, RosterError};
pub use models::{
    Document, Player, Profile, Roster, Rule, Selection, TeamManagement, TeamOption,
};
pub use render::{ReportContext, COLUMN_ORDER};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
