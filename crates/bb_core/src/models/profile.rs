//! Parsed stat profile.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::roster::ProfileData;
use crate::report::aggregate::characteristics_map;

/// A stat profile with its characteristic cells resolved to a map.
///
/// Two profiles are the same profile iff their ids match; the
/// roster-wide profile list dedupes on that.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub characteristics: BTreeMap<String, String>,
}

impl Profile {
    pub fn parse(data: &ProfileData) -> Self {
        Profile {
            id: data.id.clone(),
            name: data.name.clone(),
            characteristics: characteristics_map(&data.characteristics),
        }
    }
}
