//! Team-management options: league choice, team-wide special rules,
//! and the remaining roster options (rerolls, staff, treasury).

use serde::{Deserialize, Serialize};

use crate::models::roster::{Roster, Rule, Selection};
use crate::report::extract::{primary_category, selections};
use crate::report::group::group_by;

/// Primary category marking the team-management bucket.
pub const CATEGORY_TEAM_MANAGEMENT: &str = "Team Management";

const SELECTION_TEAM_LEAGUE: &str = "Team League";
const SELECTION_SPECIAL_RULES: &str = "Special Rules";

/// A non-league, non-special-rules management option.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamOption {
    pub name: String,
    pub quantity: u32,
}

impl TeamOption {
    pub fn parse(selection: &Selection) -> Self {
        let quantity = if selection.selections.is_empty() {
            1
        } else {
            selection.selections.iter().map(|s| s.number).sum()
        };
        TeamOption { name: selection.name.clone(), quantity }
    }
}

/// The parsed "Team Management" bucket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TeamManagement {
    pub league: Option<String>,
    pub special_rules: Option<Vec<Rule>>,
    /// Sorted by option name.
    pub options: Vec<TeamOption>,
}

impl TeamManagement {
    /// Walk the bucket in appearance order. Repeated "Team League" or
    /// "Special Rules" selections reassign the value, last one wins —
    /// the roster builder only ever emits one of each, and that
    /// overwrite behavior is the contract.
    pub fn parse(roster: &Roster) -> Self {
        let groups = group_by(selections(roster), |s| {
            primary_category(s).map(str::to_string)
        });
        let bucket = groups
            .into_iter()
            .find(|(key, _)| key.as_deref() == Some(CATEGORY_TEAM_MANAGEMENT))
            .map(|(_, bucket)| bucket)
            .unwrap_or_default();

        let mut management = TeamManagement::default();
        for option in bucket {
            match option.name.as_str() {
                SELECTION_TEAM_LEAGUE => {
                    if let Some(first) = option.selections.first() {
                        management.league = Some(first.name.clone());
                    }
                }
                SELECTION_SPECIAL_RULES => {
                    let mut rules: Vec<Rule> = option
                        .selections
                        .iter()
                        .flat_map(|s| s.rules.iter().cloned())
                        .collect();
                    rules.sort_by(|a, b| a.name.cmp(&b.name));
                    management.special_rules = Some(rules);
                }
                _ => management.options.push(TeamOption::parse(option)),
            }
        }
        management.options.sort_by(|a, b| a.name.cmp(&b.name));
        management
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn roster(selections: serde_json::Value) -> Roster {
        serde_json::from_value(json!({
            "name": "Test Team",
            "costs": [{"name": "TV", "value": 1000}],
            "forces": [{"catalogueName": "Underworld", "selections": selections}]
        }))
        .unwrap()
    }

    fn management_selection(name: &str, subs: serde_json::Value) -> serde_json::Value {
        json!({
            "name": name,
            "categories": [{"name": "Team Management", "primary": true}],
            "selections": subs
        })
    }

    #[test]
    fn test_league_comes_from_first_sub_selection() {
        let management = TeamManagement::parse(&roster(json!([
            management_selection("Team League", json!([{"name": "Underworld Challenge"}]))
        ])));
        assert_eq!(management.league.as_deref(), Some("Underworld Challenge"));
    }

    #[test]
    fn test_league_without_sub_selection_stays_unset() {
        let management = TeamManagement::parse(&roster(json!([
            management_selection("Team League", json!([]))
        ])));
        assert!(management.league.is_none());
    }

    #[test]
    fn test_special_rules_concatenated_and_sorted() {
        let management = TeamManagement::parse(&roster(json!([
            management_selection("Special Rules", json!([
                {"name": "Rule pack A", "rules": [
                    {"name": "Low Cost Linemen", "$text": "cheap"},
                    {"name": "Bribery and Corruption", "$text": "re-roll"}
                ]},
                {"name": "Rule pack B", "rules": [
                    {"name": "Masters of Undeath", "$text": "raise"}
                ]}
            ]))
        ])));
        let names: Vec<&str> = management
            .special_rules
            .as_deref()
            .unwrap()
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["Bribery and Corruption", "Low Cost Linemen", "Masters of Undeath"]
        );
    }

    #[test]
    fn test_options_quantity_and_sorting() {
        let management = TeamManagement::parse(&roster(json!([
            management_selection("Re-rolls", json!([{"name": "Re-roll", "number": 3}])),
            management_selection("Apothecary", json!([])),
            management_selection(
                "Dedicated Fans",
                json!([{"name": "Fan", "number": 2}, {"name": "Fan", "number": 1}])
            )
        ])));
        assert_eq!(
            management.options,
            vec![
                TeamOption { name: "Apothecary".to_string(), quantity: 1 },
                TeamOption { name: "Dedicated Fans".to_string(), quantity: 3 },
                TeamOption { name: "Re-rolls".to_string(), quantity: 3 },
            ]
        );
    }

    #[test]
    fn test_repeated_league_last_wins() {
        let management = TeamManagement::parse(&roster(json!([
            management_selection("Team League", json!([{"name": "First League"}])),
            management_selection("Team League", json!([{"name": "Second League"}]))
        ])));
        assert_eq!(management.league.as_deref(), Some("Second League"));
    }

    #[test]
    fn test_unclassified_selections_are_ignored() {
        let management = TeamManagement::parse(&roster(json!([
            {"name": "Wrapper node", "selections": [{"name": "inner"}]}
        ])));
        assert!(management.options.is_empty());
        assert!(management.league.is_none());
        assert!(management.special_rules.is_none());
    }
}
