//! Merge bonus distribution.
//!
//! Each merge level grants +1 to two stats, walking the stats from highest to
//! lowest level-1 value and wrapping around:
//!
//! ```text
//! merge 1 -> ranks {0,1}   merge 2 -> {2,3}   merge 3 -> {4,0}
//! merge 4 -> {1,2}         merge 5 -> {3,4}   merge 6..10 repeat
//! ```
//!
//! Ties are broken by canonical order (HP > Atk > Spd > Def > Res).

use super::core::{Stat, Stats};

/// Stats ordered by descending `base + nudge`, stable over canonical order.
pub fn rank_stats(base: Stats, nudge: Stats) -> [Stat; 5] {
    let mut ranked = Stat::ALL;
    ranked.sort_by_key(|&stat| core::cmp::Reverse(base.get(stat) + nudge.get(stat)));
    ranked
}

/// Merge delta for a unit.
///
/// - `base`: level-1 stats at the selected rarity; `None` yields a zero delta
/// - `nudge`: ±1 on boon/bane stats, shifting their rank
/// - `neutral`: explicitly neutral boon/bane, worth +1 on the top three ranks
///   once the unit is merged at all
pub fn merge_bonus(base: Option<Stats>, merge: u8, nudge: Stats, neutral: bool) -> Stats {
    let Some(base) = base else {
        return Stats::ZERO;
    };

    let ranked = rank_stats(base, nudge);
    let mut bonus = [0i32; 5];
    let mut cursor = 0usize;
    for _ in 0..merge {
        for _ in 0..2 {
            bonus[cursor] += 1;
            cursor = (cursor + 1) % ranked.len();
        }
    }

    if merge > 0 && neutral {
        for rank_bonus in bonus.iter_mut().take(3) {
            *rank_bonus += 1;
        }
    }

    let mut delta = Stats::ZERO;
    for (stat, amount) in ranked.into_iter().zip(bonus) {
        delta.set(stat, amount);
    }
    delta
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: Stats = Stats::new(18, 8, 6, 7, 5);

    #[test]
    fn merge_zero_contributes_nothing() {
        assert_eq!(merge_bonus(Some(BASE), 0, Stats::ZERO, true), Stats::ZERO);
    }

    #[test]
    fn merge_one_raises_the_two_top_ranked_stats() {
        // ranks: HP 18, Atk 8, Def 7, Spd 6, Res 5
        let delta = merge_bonus(Some(BASE), 1, Stats::ZERO, false);
        assert_eq!(delta, Stats::new(1, 1, 0, 0, 0));
    }

    #[test]
    fn merge_three_wraps_to_the_top_rank() {
        // {HP, Atk}, {Def, Spd}, {Res, HP}
        let delta = merge_bonus(Some(BASE), 3, Stats::ZERO, false);
        assert_eq!(delta, Stats::new(2, 1, 1, 1, 1));
    }

    #[test]
    fn full_merge_is_four_per_stat() {
        let delta = merge_bonus(Some(BASE), 10, Stats::ZERO, false);
        assert_eq!(delta, Stats::new(4, 4, 4, 4, 4));
    }

    #[test]
    fn ties_follow_canonical_order() {
        let flat = Stats::new(5, 5, 5, 5, 5);
        assert_eq!(
            merge_bonus(Some(flat), 1, Stats::ZERO, false),
            Stats::new(1, 1, 0, 0, 0)
        );
        assert_eq!(
            merge_bonus(Some(flat), 2, Stats::ZERO, false),
            Stats::new(1, 1, 1, 1, 0)
        );
    }

    #[test]
    fn boon_nudge_shifts_rank() {
        // Spd 6 + 1 ties Def 7 and wins on canonical order
        let nudge = Stats::single(Stat::Spd, 1);
        assert_eq!(
            rank_stats(BASE, nudge),
            [Stat::Hp, Stat::Atk, Stat::Spd, Stat::Def, Stat::Res]
        );
    }

    #[test]
    fn neutral_bonus_needs_a_merge() {
        assert_eq!(
            merge_bonus(Some(BASE), 1, Stats::ZERO, true),
            // ranks 0,1 from the merge plus ranks 0,1,2 (HP, Atk, Def)
            Stats::new(2, 2, 0, 1, 0)
        );
    }

    #[test]
    fn missing_base_is_zero() {
        assert_eq!(merge_bonus(None, 5, Stats::ZERO, true), Stats::ZERO);
    }
}
