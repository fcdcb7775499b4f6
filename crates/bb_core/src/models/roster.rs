//! Input document model for the roster export.
//!
//! # Boundary Contract
//! - This is the Rust representation of the tabletop roster builder's
//!   JSON export (`{"roster": {...}}` at the top level).
//! - Required top-level structure: `roster`, `roster.name`,
//!   `roster.costs`, `roster.forces`. A document missing any of these
//!   fails deserialization and the whole run aborts.
//! - Every other field is optional; unknown fields are ignored so
//!   newer exports keep parsing.

use serde::{Deserialize, Serialize};

/// Top-level export document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub roster: Roster,
}

/// The roster: team name, roster-level totals, and one force per
/// catalogue the team was built from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    pub name: String,
    pub costs: Vec<Cost>,
    pub forces: Vec<Force>,
}

/// One force entry. Its `selections` are the team's units and options;
/// its `categories` are the grouping tags the catalogue defines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Force {
    #[serde(rename = "catalogueName", default)]
    pub catalogue_name: String,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub selections: Vec<Selection>,
}

/// Category tag. At most one per selection carries the `primary` flag
/// in practice; classification takes the first flagged one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub primary: bool,
}

/// A selection node: a player, a team-management option, or a nested
/// sub-option (skills, star player add-ons, rerolls, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Selection {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "customName", default)]
    pub custom_name: Option<String>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub costs: Vec<Cost>,
    #[serde(default)]
    pub rules: Vec<Rule>,
    #[serde(default)]
    pub profiles: Vec<ProfileData>,
    #[serde(default)]
    pub selections: Vec<Selection>,
    /// Declared multiplicity of this selection. Absent means 1.
    #[serde(default = "default_number")]
    pub number: u32,
}

fn default_number() -> u32 {
    1
}

/// Cost entry. Within one selection a repeated name overwrites
/// (last-write-wins); across a player's subtree costs are summed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cost {
    pub name: String,
    pub value: f64,
}

/// Free-text rule. The export writes the body under `$text`; some
/// catalogue revisions use `description` or `text` instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rule {
    pub name: String,
    #[serde(rename = "$text", alias = "description", alias = "text", default)]
    pub text: String,
}

/// Raw stat profile as exported: an id, a display name, and a list of
/// named characteristic values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileData {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub characteristics: Vec<Characteristic>,
}

/// One characteristic cell. `text` may be absent for blank cells; the
/// default-filling rule lives in [`crate::report::aggregate`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Characteristic {
    pub name: String,
    #[serde(rename = "$text", default)]
    pub text: Option<String>,
}
