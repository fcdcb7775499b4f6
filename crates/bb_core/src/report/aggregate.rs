//! Characteristic and cost dictionary construction.
//!
//! `BTreeMap` throughout: map iteration order feeds the renderer, and
//! the report must come out byte-identical across runs.

use std::collections::BTreeMap;

use crate::models::roster::{Characteristic, Cost};

/// Characteristics that default to `"0"` when the cell is blank.
/// Every other blank characteristic becomes the empty string.
const ZERO_DEFAULT_CHARACTERISTICS: [&str; 2] = ["SPP", "Cost"];

/// Build a name -> text map from profile characteristic cells,
/// applying the blank-cell defaults.
pub fn characteristics_map(characteristics: &[Characteristic]) -> BTreeMap<String, String> {
    characteristics
        .iter()
        .map(|c| {
            let text = match &c.text {
                Some(text) => text.clone(),
                None if ZERO_DEFAULT_CHARACTERISTICS.contains(&c.name.as_str()) => "0".to_string(),
                None => String::new(),
            };
            (c.name.clone(), text)
        })
        .collect()
}

/// Build a name -> value map from one selection's cost entries.
///
/// No default-filling here. A repeated name within one selection
/// overwrites the earlier entry; summing only happens *across*
/// selections, in [`merge_costs`].
pub fn cost_map(costs: &[Cost]) -> BTreeMap<String, f64> {
    costs.iter().map(|c| (c.name.clone(), c.value)).collect()
}

/// Merge cost maps additively: each name's value is the sum over
/// every map that contains it. Names absent everywhere never appear.
pub fn merge_costs(maps: impl IntoIterator<Item = BTreeMap<String, f64>>) -> BTreeMap<String, f64> {
    let mut merged = BTreeMap::new();
    for map in maps {
        for (name, value) in map {
            *merged.entry(name).or_insert(0.0) += value;
        }
    }
    merged
}
