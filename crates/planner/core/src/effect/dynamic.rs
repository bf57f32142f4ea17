//! Dynamic effect values for specials such as Chilling Wind.
//!
//! A value spec `"Res:0.5"` means "half the unit's Res, rounded down". Effect
//! text carries a `{value}` placeholder the computed number is rendered into.

use crate::stats::{Stat, Stats};

const PLACEHOLDER: &str = "{value}";

/// Parsed `"<Stat>:<factor>"` spec.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueSpec {
    pub stat: Stat,
    pub factor: f64,
}

impl ValueSpec {
    pub fn parse(spec: &str) -> Option<Self> {
        let (stat, factor) = spec.split_once(':')?;
        Some(Self {
            stat: stat.trim().parse().ok()?,
            factor: factor.trim().parse().ok()?,
        })
    }

    pub fn evaluate(&self, stats: &Stats) -> i32 {
        (f64::from(stats.get(self.stat)) * self.factor).floor() as i32
    }
}

/// Value of a special's dynamic spec against final stats.
pub fn special_value(spec: &str, stats: &Stats) -> Option<i32> {
    ValueSpec::parse(spec).map(|spec| spec.evaluate(stats))
}

/// Effect text with the placeholder replaced by the computed value.
pub fn render_effect(effect: &str, value: Option<i32>) -> String {
    match value {
        Some(value) if effect.contains(PLACEHOLDER) => {
            effect.replace(PLACEHOLDER, &value.to_string())
        }
        _ => effect.to_owned(),
    }
}
