//! Presentation context: everything the HTML renderer consumes.

use serde::Serialize;

use crate::models::player::Player;
use crate::models::profile::Profile;
use crate::models::roster::{Document, Rule};
use crate::models::team::{TeamManagement, TeamOption};
use crate::render::format::format_thousands;
use crate::report::extract;

/// Display order of player card / summary table columns.
pub const COLUMN_ORDER: [&str; 11] = [
    "Player",
    "MA",
    "ST",
    "AG",
    "AV",
    "Skills & Traits",
    "Primary",
    "Secondary",
    "Cost",
    "SPP",
    "Keywords",
];

#[derive(Debug, Clone, Serialize)]
pub struct ReportContext {
    pub name: String,
    /// Formatted roster total (first roster-level cost entry).
    pub team_value: String,
    pub league: Option<String>,
    pub special_rules: Option<Vec<Rule>>,
    pub rules: Vec<Rule>,
    pub players: Vec<Player>,
    pub profiles: Vec<Profile>,
    pub team_options: Vec<TeamOption>,
    pub include_css: bool,
}

impl ReportContext {
    pub fn build(document: &Document, include_css: bool) -> Self {
        let roster = &document.roster;
        let management = TeamManagement::parse(roster);
        let total = roster.costs.first().map(|c| c.value).unwrap_or(0.0);
        ReportContext {
            name: roster.name.clone(),
            team_value: format_thousands(total),
            league: management.league,
            special_rules: management.special_rules,
            rules: extract::rules(roster),
            players: extract::players(roster),
            profiles: extract::profiles(roster),
            team_options: management.options,
            include_css,
        }
    }
}
