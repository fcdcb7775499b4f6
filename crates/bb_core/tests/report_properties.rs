//! Property tests for the report pipeline: cost-merge algebra, rule
//! deduplication, and whole-pipeline determinism.

use std::collections::BTreeMap;

use proptest::prelude::*;

use bb_core::models::roster::{Category, Cost, Rule, Selection};
use bb_core::render_team_json;
use bb_core::report::aggregate::merge_costs;
use bb_core::report::group::uniq_by;

fn cost_name() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["TV", "SPP", "GP", "Treasury"]).prop_map(str::to_string)
}

/// Integer-valued costs keep f64 addition exact, so map equality
/// under permutation is well-defined.
fn cost_maps() -> impl Strategy<Value = Vec<BTreeMap<String, f64>>> {
    prop::collection::vec(
        prop::collection::btree_map(cost_name(), (0u32..5000u32).prop_map(f64::from), 0..4),
        0..6,
    )
}

fn rule_name() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["Stunty", "Animosity", "Loner (4+)", "Dodge", "Titchy"])
        .prop_map(str::to_string)
}

fn rule_list() -> impl Strategy<Value = Vec<Rule>> {
    prop::collection::vec(rule_name(), 0..12).prop_map(|names| {
        names
            .into_iter()
            .enumerate()
            .map(|(i, name)| Rule { name, text: format!("occurrence {i}") })
            .collect()
    })
}

fn player_selection(name: String, tv: f64) -> Selection {
    Selection {
        id: None,
        name,
        custom_name: None,
        categories: vec![Category { name: "Player".to_string(), primary: true }],
        costs: vec![Cost { name: "TV".to_string(), value: tv }],
        rules: Vec::new(),
        profiles: Vec::new(),
        selections: Vec::new(),
        number: 1,
    }
}

proptest! {
    #[test]
    fn merged_cost_is_per_name_sum(maps in cost_maps()) {
        let merged = merge_costs(maps.clone());
        for name in ["TV", "SPP", "GP", "Treasury"] {
            let expected: f64 = maps
                .iter()
                .filter_map(|m| m.get(name))
                .sum();
            let present_anywhere = maps.iter().any(|m| m.contains_key(name));
            prop_assert_eq!(merged.contains_key(name), present_anywhere);
            if present_anywhere {
                prop_assert_eq!(merged[name], expected);
            }
        }
    }

    #[test]
    fn cost_merge_is_commutative(maps in cost_maps().prop_flat_map(|maps| {
        let original = maps.clone();
        Just(maps).prop_shuffle().prop_map(move |shuffled| (original.clone(), shuffled))
    })) {
        let (original, shuffled) = maps;
        prop_assert_eq!(merge_costs(original), merge_costs(shuffled));
    }

    #[test]
    fn rule_dedup_keeps_first_occurrence_sorted(rules in rule_list()) {
        let deduped = uniq_by(rules.clone(), |r: &Rule| r.name.clone());

        // One entry per distinct name, sorted ascending.
        let names: Vec<&String> = deduped.iter().map(|r| &r.name).collect();
        let mut sorted = names.clone();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(&names, &sorted);

        // Each representative is the first occurrence in input order.
        for rule in &deduped {
            let first = rules.iter().find(|r| r.name == rule.name).unwrap();
            prop_assert_eq!(&rule.text, &first.text);
        }
    }

    #[test]
    fn report_is_deterministic_and_numbers_players_in_order(
        players in prop::collection::vec((0u32..500u32).prop_map(f64::from), 0..8),
    ) {
        let selections: Vec<Selection> = players
            .iter()
            .enumerate()
            .map(|(i, tv)| player_selection(format!("Player {i}"), tv * 1000.0))
            .collect();
        let input = serde_json::json!({
            "roster": {
                "name": "Property Team",
                "costs": [{"name": "TV", "value": 0}],
                "forces": [{"selections": selections}]
            }
        })
        .to_string();

        let first = render_team_json(&input, true).unwrap();
        let second = render_team_json(&input, true).unwrap();
        prop_assert_eq!(&first, &second);

        for (i, _) in players.iter().enumerate() {
            let needle = format!("#{} Player {}</h2>", i + 1, i);
            prop_assert!(first.contains(&needle));
        }
    }
}
