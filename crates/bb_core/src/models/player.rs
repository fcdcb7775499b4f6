//! Derived player record.
//!
//! Built in one pass from a "Player"-classified selection: the first
//! profile supplies the base characteristics, costs and rules are
//! pulled in from the selection itself plus its direct sub-selections
//! (purchased skills and upgrades), and the roster-facing cells
//! ("Cost", "SPP", "Player") are overlaid last.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::profile::Profile;
use crate::models::roster::{Rule, Selection};
use crate::render::format::{format_plain, format_thousands};
use crate::report::aggregate::{cost_map, merge_costs};
use crate::report::extract::primary_category;
use crate::report::group::uniq_by;

/// Cost name carrying a player's team value.
pub const COST_TEAM_VALUE: &str = "TV";
/// Cost name carrying accumulated star player points.
pub const COST_SPP: &str = "SPP";

const CHARACTERISTIC_COST: &str = "Cost";
const CHARACTERISTIC_SPP: &str = "SPP";
const CHARACTERISTIC_PLAYER: &str = "Player";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub name: String,
    /// 1-based display ordinal, in roster appearance order.
    pub number: usize,
    pub profiles: Vec<Profile>,
    /// Costs merged additively across the player and its direct
    /// sub-selections.
    pub costs: BTreeMap<String, f64>,
    pub primary_category: Option<String>,
    pub category_names: Vec<String>,
    pub custom_name: Option<String>,
    /// Raw sub-selections, kept for the card's add-on listing.
    pub selections: Vec<Selection>,
    /// Deduplicated by name (first occurrence wins), sorted by name.
    pub rules: Vec<Rule>,
    /// Primary profile characteristics overlaid with "Cost", "SPP"
    /// and "Player".
    pub characteristics: BTreeMap<String, String>,
}

impl Player {
    pub fn parse(selection: &Selection, number: usize) -> Self {
        let profiles: Vec<Profile> = selection.profiles.iter().map(Profile::parse).collect();

        let mut all_costs = vec![cost_map(&selection.costs)];
        let mut all_rules: Vec<Rule> = selection.rules.clone();
        for sub in &selection.selections {
            if !sub.costs.is_empty() {
                all_costs.push(cost_map(&sub.costs));
            }
            all_rules.extend(sub.rules.iter().cloned());
        }
        let costs = merge_costs(all_costs);
        let rules = uniq_by(all_rules, |r: &Rule| r.name.clone());

        // A player with no profiles is legal and just renders blank.
        let mut characteristics = profiles
            .first()
            .map(|p| p.characteristics.clone())
            .unwrap_or_default();
        if let Some(tv) = costs.get(COST_TEAM_VALUE) {
            characteristics.insert(CHARACTERISTIC_COST.to_string(), format_thousands(*tv));
        }
        if let Some(spp) = costs.get(COST_SPP) {
            characteristics.insert(CHARACTERISTIC_SPP.to_string(), format_plain(*spp));
        }
        characteristics.insert(CHARACTERISTIC_PLAYER.to_string(), selection.name.clone());

        tracing::debug!(
            player = %selection.name,
            number,
            rules = rules.len(),
            "aggregated player selection"
        );

        Player {
            name: selection.name.clone(),
            number,
            profiles,
            costs,
            primary_category: primary_category(selection).map(str::to_string),
            category_names: selection.categories.iter().map(|c| c.name.clone()).collect(),
            custom_name: selection.custom_name.clone(),
            selections: selection.selections.clone(),
            rules,
            characteristics,
        }
    }

    /// Name shown on the card: the custom name when the coach set
    /// one, the position name otherwise.
    pub fn display_name(&self) -> &str {
        self.custom_name.as_deref().unwrap_or(&self.name)
    }
}
