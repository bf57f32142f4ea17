//! Plain-text rendering of summaries and listings.

use std::collections::BTreeMap;
use std::fmt::Write;

use planner_core::{
    Build, BuildSummary, PossibleSkills, Rarity, SkillCategory, Stat, StatBreakdown, Stats,
};

fn stat_row(out: &mut String, label: &str, stats: Stats) {
    let _ = write!(out, "{label:<10}");
    for stat in Stat::ALL {
        let _ = write!(out, "{:>5}", stats.get(stat));
    }
    out.push('\n');
}

fn header(out: &mut String) {
    let _ = write!(out, "{:<10}", "");
    for stat in Stat::ALL {
        let _ = write!(out, "{:>5}", stat.to_string());
    }
    out.push('\n');
}

/// Build header, stat table and SP per slot.
pub fn render_summary(build: &Build, summary: &BuildSummary) -> String {
    let mut out = String::new();
    let modifiers = &build.modifiers;
    let _ = writeln!(
        out,
        "{} {}★ lv.{} +{} support {}",
        build.unit, modifiers.rarity, modifiers.level, modifiers.merge, modifiers.support
    );
    let boon_bane = build.boon_bane();
    if !boon_bane.is_neutral() {
        let name = |stat: Option<Stat>| stat.map_or_else(|| "-".to_owned(), |stat| stat.to_string());
        let _ = writeln!(out, "+{} -{}", name(boon_bane.boon()), name(boon_bane.bane()));
    }
    out.push('\n');

    header(&mut out);
    stat_row(&mut out, "raw", summary.raw_stats);
    stat_row(&mut out, "final", summary.stats);
    let _ = writeln!(out, "{:<10}{:>5}", "total", summary.stats.to_array().iter().sum::<i32>());
    out.push('\n');

    for slot in SkillCategory::ALL {
        let skill = build.skills.get(slot).unwrap_or("-");
        let refine = match (slot, build.skills.refine) {
            (SkillCategory::Weapon, Some(refine)) => format!(" [{refine}]"),
            _ => String::new(),
        };
        let _ = writeln!(
            out,
            "{:<10}{:<28}{:>6}",
            slot.to_string(),
            format!("{skill}{refine}"),
            summary.slot_costs.get(slot)
        );
    }
    let _ = writeln!(out, "{:<38}{:>6} SP", "", summary.total_cost);
    if let (Some(special), Some(effect)) = (&build.skills.special, &summary.special_effect) {
        let _ = writeln!(out, "\n{special}: {effect}");
    }
    out
}

/// Every non-zero contribution to the final stats.
pub fn render_breakdown(breakdown: &StatBreakdown) -> String {
    let mut out = String::new();
    header(&mut out);
    let rows = [
        ("baseline", breakdown.baseline),
        ("boon/bane", breakdown.boon_bane),
        ("leveling", breakdown.leveling),
        ("merge", breakdown.merge),
        ("weapon", breakdown.weapon),
        ("passive A", breakdown.passive_a),
        ("seal", breakdown.seal),
        ("support", breakdown.support),
    ];
    for (label, stats) in rows {
        if stats != Stats::ZERO {
            stat_row(&mut out, label, stats);
        }
    }
    out
}

pub fn render_possible(possible: &PossibleSkills, only: Option<SkillCategory>) -> String {
    let mut out = String::new();
    for slot in SkillCategory::ALL {
        if only.is_some_and(|only| only != slot) {
            continue;
        }
        let names: Vec<_> = possible
            .get(slot)
            .iter()
            .filter(|name| !name.is_empty())
            .map(String::as_str)
            .collect();
        let _ = writeln!(out, "{slot} ({}):", names.len());
        for name in names {
            let _ = writeln!(out, "  {name}");
        }
    }
    out
}

pub fn render_learners(skill: &str, learners: &BTreeMap<Rarity, Vec<String>>) -> String {
    if learners.is_empty() {
        return format!("No unit learns {skill}\n");
    }
    let mut out = String::new();
    for (rarity, units) in learners {
        let _ = writeln!(out, "{rarity}★: {}", units.join(", "));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakdown_skips_empty_rows() {
        let breakdown = StatBreakdown {
            baseline: Stats::new(18, 8, 9, 7, 5),
            weapon: Stats::new(0, 10, -5, 0, 0),
            ..StatBreakdown::default()
        };
        let text = render_breakdown(&breakdown);
        assert!(text.contains("baseline"));
        assert!(text.contains("weapon"));
        assert!(!text.contains("merge"));
    }

    #[test]
    fn summary_shows_the_special_effect() {
        let build = Build {
            unit: "Lilina".to_owned(),
            skills: planner_core::SkillSet::new().with(SkillCategory::Special, "Iceberg"),
            modifiers: planner_core::Modifiers::new(Rarity::Five, planner_core::Level::Forty),
        };
        let summary = BuildSummary {
            stats: Stats::new(35, 29, 27, 15, 30),
            raw_stats: Stats::new(35, 15, 27, 15, 30),
            breakdown: StatBreakdown::default(),
            slot_costs: planner_core::SlotCosts::default(),
            total_cost: 0,
            special_effect: Some("Boosts damage by 15.".to_owned()),
        };
        let text = render_summary(&build, &summary);
        assert!(text.ends_with("Iceberg: Boosts damage by 15.\n"), "{text}");

        let summary = BuildSummary {
            special_effect: None,
            ..summary
        };
        assert!(!render_summary(&build, &summary).contains("Boosts damage"));
    }

    #[test]
    fn learners_list_by_rarity() {
        let learners = BTreeMap::from([
            (Rarity::Three, vec!["Abel".to_owned()]),
            (Rarity::Five, vec!["Chrom".to_owned(), "Lucina".to_owned()]),
        ]);
        assert_eq!(
            render_learners("Swordbreaker 3", &learners),
            "3★: Abel\n5★: Chrom, Lucina\n"
        );
        assert_eq!(render_learners("Nope", &BTreeMap::new()), "No unit learns Nope\n");
    }
}
