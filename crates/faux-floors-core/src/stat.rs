//! Stat bases carried by thing and terrain defs

use crate::DefId;
use serde::{Deserialize, Serialize};

pub const WORK_TO_BUILD: &str = "WorkToBuild";
pub const BEAUTY: &str = "Beauty";
pub const MARKET_VALUE: &str = "MarketValue";

/// A base value for one stat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatModifier {
    pub stat: DefId,
    pub value: f32,
}

/// Set `stat` to `value`, replacing an existing entry or appending a new one
pub fn set_stat_value(stats: &mut Vec<StatModifier>, stat: &str, value: f32) {
    match stats.iter_mut().find(|m| m.stat == stat) {
        Some(existing) => existing.value = value,
        None => stats.push(StatModifier {
            stat: DefId::new(stat),
            value,
        }),
    }
}

/// Look up the base value for `stat`, if one is set
pub fn stat_value(stats: &[StatModifier], stat: &str) -> Option<f32> {
    stats.iter().find(|m| m.stat == stat).map(|m| m.value)
}
