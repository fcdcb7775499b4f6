//! The extraction/classification/aggregation pipeline.

pub mod aggregate;
pub mod extract;
pub mod group;

pub use aggregate::{characteristics_map, cost_map, merge_costs};
pub use extract::{categories, players, primary_category, profiles, rules, selections, CATEGORY_PLAYER};
pub use group::{dedupe_by, group_by, uniq_by, Counted};
