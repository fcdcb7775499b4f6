//! Data model: the raw export document and the derived report records.

pub mod player;
pub mod profile;
pub mod roster;
pub mod team;

pub use player::{Player, COST_SPP, COST_TEAM_VALUE};
pub use profile::Profile;
pub use roster::{Category, Characteristic, Cost, Document, Force, ProfileData, Roster, Rule, Selection};
pub use team::{TeamManagement, TeamOption, CATEGORY_TEAM_MANAGEMENT};
