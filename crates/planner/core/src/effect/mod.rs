//! Effect parser: stat deltas hidden in skill names and effect text.
//!
//! Resolution order for a named skill:
//!
//! 1. naming conventions ([`name_delta`]), terminal when matched
//! 2. the first `Grants` and first `Inflicts` clause of the effect text
//! 3. documented families ([`family_delta`]) when the text has no clause
//!
//! Nothing here fails: unparseable input yields no delta.

mod dynamic;
mod rules;
mod scan;

pub use dynamic::{ValueSpec, render_effect, special_value};
pub use rules::{family_delta, name_delta};
pub use scan::{Polarity, StatClause, first_clause};

use crate::stats::Stats;

/// Sum of the first grant clause and the first inflict clause.
///
/// Returns `None` when the text carries neither.
pub fn extract_stat_delta(text: &str) -> Option<Stats> {
    let grants = first_clause(text, Polarity::Grants);
    let inflicts = first_clause(text, Polarity::Inflicts);
    if grants.is_none() && inflicts.is_none() {
        return None;
    }
    Some(
        grants
            .iter()
            .chain(inflicts.iter())
            .map(StatClause::delta)
            .sum(),
    )
}

/// How a named skill's delta was resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectDelta {
    /// Matched a naming convention.
    Named(Stats),
    /// Parsed from effect text.
    Text(Stats),
    /// Matched a documented family.
    Family(Stats),
    /// The catalog has no entry for the skill.
    MissingData,
    /// The effect text carries no stat clause.
    NoClause,
}

impl EffectDelta {
    pub fn stats(&self) -> Stats {
        match self {
            EffectDelta::Named(stats) | EffectDelta::Text(stats) | EffectDelta::Family(stats) => {
                *stats
            }
            EffectDelta::MissingData | EffectDelta::NoClause => Stats::ZERO,
        }
    }
}

/// Resolves the delta of a passive A or seal.
///
/// `effect` is `None` when the catalog has no entry. Naming conventions still
/// apply then, since they need nothing but the name.
pub fn named_skill_delta(name: &str, effect: Option<&str>) -> EffectDelta {
    if let Some(stats) = name_delta(name) {
        return EffectDelta::Named(stats);
    }
    let Some(effect) = effect else {
        return EffectDelta::MissingData;
    };
    if let Some(stats) = extract_stat_delta(effect) {
        return EffectDelta::Text(stats);
    }
    match family_delta(name) {
        Some(stats) => EffectDelta::Family(stats),
        None => EffectDelta::NoClause,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::Stat;

    #[test]
    fn grant_and_inflict_combine() {
        let text = "Grants Atk/Spd+5. Inflicts Def/Res-5.";
        assert_eq!(extract_stat_delta(text), Some(Stats::new(0, 5, 5, -5, -5)));
    }

    #[test]
    fn text_without_clause_is_none() {
        assert_eq!(extract_stat_delta("Effective against flying units."), None);
        assert_eq!(extract_stat_delta(""), None);
    }

    #[test]
    fn name_rule_wins_even_without_data() {
        assert_eq!(
            named_skill_delta("HP +5", None),
            EffectDelta::Named(Stats::single(Stat::Hp, 5))
        );
    }

    #[test]
    fn family_is_a_fallback_for_silent_text() {
        let delta = named_skill_delta("Fury 3", Some("Unit takes 6 damage after combat."));
        assert_eq!(delta, EffectDelta::Family(Stats::new(0, 3, 3, 3, 3)));

        let text = "Grants Atk/Spd/Def/Res+3. Unit takes 6 damage after combat.";
        let delta = named_skill_delta("Fury 3", Some(text));
        assert_eq!(delta, EffectDelta::Text(Stats::new(0, 3, 3, 3, 3)));
    }

    #[test]
    fn missing_data_and_silent_text_are_zero() {
        assert_eq!(named_skill_delta("Vantage 3", None), EffectDelta::MissingData);
        assert_eq!(
            named_skill_delta("Vantage 3", Some("Unit counterattacks first.")),
            EffectDelta::NoClause
        );
        assert_eq!(EffectDelta::NoClause.stats(), Stats::ZERO);
    }
}
