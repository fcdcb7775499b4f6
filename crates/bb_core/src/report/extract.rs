//! Flattening and classification of the roster's force tree.

use crate::models::player::Player;
use crate::models::profile::Profile;
use crate::models::roster::{Category, Roster, Rule, Selection};
use crate::report::group::{dedupe_by, group_by, uniq_by};

/// Primary category marking player selections.
pub const CATEGORY_PLAYER: &str = "Player";

/// All force-level selections, in force order. A force without
/// selections contributes nothing.
///
/// Nested sub-selections are deliberately not walked here; they are
/// only reached through their parent player during aggregation.
pub fn selections(roster: &Roster) -> Vec<&Selection> {
    roster.forces.iter().flat_map(|f| f.selections.iter()).collect()
}

/// All force-level categories, in force order.
pub fn categories(roster: &Roster) -> Vec<&Category> {
    roster.forces.iter().flat_map(|f| f.categories.iter()).collect()
}

/// Name of the first category flagged primary, if any.
///
/// Selections without one classify to `None` and silently drop out of
/// every named bucket; that is how structural wrapper nodes stay out
/// of the report.
pub fn primary_category(selection: &Selection) -> Option<&str> {
    selection
        .categories
        .iter()
        .find(|c| c.primary)
        .map(|c| c.name.as_str())
}

/// The roster's players, in appearance order, numbered 1..N.
pub fn players(roster: &Roster) -> Vec<Player> {
    let groups = group_by(selections(roster), |s| {
        primary_category(s).map(str::to_string)
    });
    let bucket = groups
        .into_iter()
        .find(|(key, _)| key.as_deref() == Some(CATEGORY_PLAYER))
        .map(|(_, bucket)| bucket)
        .unwrap_or_default();

    tracing::debug!(players = bucket.len(), "classified player selections");
    bucket
        .into_iter()
        .enumerate()
        .map(|(i, s)| Player::parse(s, i + 1))
        .collect()
}

/// Roster-wide profile list: one entry per profile id (first
/// occurrence wins), sorted by profile name for display.
pub fn profiles(roster: &Roster) -> Vec<Profile> {
    let all = selections(roster)
        .into_iter()
        .flat_map(|s| s.profiles.iter());
    let mut profiles: Vec<Profile> = dedupe_by(all, |p| p.id.clone())
        .into_iter()
        .map(|counted| Profile::parse(counted.item))
        .collect();
    profiles.sort_by(|a, b| a.name.cmp(&b.name));
    profiles
}

/// Roster-wide rule list: one entry per rule name (first occurrence
/// wins), sorted by name.
pub fn rules(roster: &Roster) -> Vec<Rule> {
    let all: Vec<Rule> = selections(roster)
        .into_iter()
        .flat_map(|s| s.rules.iter().cloned())
        .collect();
    uniq_by(all, |r: &Rule| r.name.clone())
}
