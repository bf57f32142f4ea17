//! Command-line definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use planner_core::{Level, Rarity, SkillCategory, Stat, SupportRank};

#[derive(Parser)]
#[command(name = "planner")]
#[command(about = "Plan skill inheritance builds: stats, SP cost and saved builds")]
pub struct Cli {
    /// Reference data directory (overrides PLANNER_DATA_DIR)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Saved builds directory (overrides PLANNER_SAVE_DIR)
    #[arg(long, global = true)]
    pub save_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show final stats and SP cost of a build
    Stats {
        #[command(flatten)]
        build: BuildArgs,

        /// Also print every contribution to the final stats
        #[arg(long)]
        breakdown: bool,
    },

    /// SP cost for a unit to inherit one skill
    Cost {
        unit: String,
        skill: String,

        /// Refine code (X A S D R W)
        #[arg(long)]
        refine: Option<String>,
    },

    /// List the skills a unit may equip
    Skills {
        unit: String,

        /// Only this slot (weapon, assist, special, passiveA, passiveB, passiveC, seal)
        #[arg(long)]
        slot: Option<SkillCategory>,
    },

    /// List the units that learn a skill, by rarity
    Learners {
        skill: String,

        #[arg(long, default_value = "weapon")]
        slot: SkillCategory,
    },

    /// Manage saved builds
    Builds {
        #[command(subcommand)]
        action: BuildsAction,
    },

    /// Import community builds from a saved wiki page
    Import {
        unit: String,
        file: PathBuf,

        /// Save every imported build
        #[arg(long)]
        save: bool,
    },
}

#[derive(Subcommand)]
pub enum BuildsAction {
    /// List saved builds of a unit
    List { unit: String },

    /// Save a build under a name, replacing any build of that name
    Save {
        #[command(flatten)]
        build: BuildArgs,

        name: String,
    },

    /// Delete a saved build
    Delete { unit: String, name: String },
}

/// Unit, loadout and modifiers of a build. Unset slots keep the default loadout.
#[derive(Args, Clone, Debug, Default)]
pub struct BuildArgs {
    pub unit: String,

    /// Start from a saved build
    #[arg(long)]
    pub saved: Option<String>,

    /// Start from an empty loadout instead of the default one
    #[arg(long)]
    pub empty: bool,

    #[arg(long)]
    pub weapon: Option<String>,

    /// Refine code (X A S D R W)
    #[arg(long)]
    pub refine: Option<String>,

    #[arg(long)]
    pub assist: Option<String>,

    #[arg(long)]
    pub special: Option<String>,

    #[arg(long = "passive-a", short = 'a')]
    pub passive_a: Option<String>,

    #[arg(long = "passive-b", short = 'b')]
    pub passive_b: Option<String>,

    #[arg(long = "passive-c", short = 'c')]
    pub passive_c: Option<String>,

    #[arg(long)]
    pub seal: Option<String>,

    #[arg(long)]
    pub boon: Option<Stat>,

    #[arg(long)]
    pub bane: Option<Stat>,

    #[arg(long)]
    pub merge: Option<u8>,

    #[arg(long)]
    pub rarity: Option<Rarity>,

    #[arg(long)]
    pub level: Option<Level>,

    #[arg(long)]
    pub support: Option<SupportRank>,
}

impl BuildArgs {
    /// Slot overrides in slot order.
    pub fn slots(&self) -> impl Iterator<Item = (SkillCategory, &str)> {
        [
            (SkillCategory::Weapon, &self.weapon),
            (SkillCategory::Assist, &self.assist),
            (SkillCategory::Special, &self.special),
            (SkillCategory::PassiveA, &self.passive_a),
            (SkillCategory::PassiveB, &self.passive_b),
            (SkillCategory::PassiveC, &self.passive_c),
            (SkillCategory::Seal, &self.seal),
        ]
        .into_iter()
        .filter_map(|(slot, skill)| skill.as_deref().map(|skill| (slot, skill)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn stats_flags_parse_into_types() {
        let cli = Cli::parse_from([
            "planner", "stats", "Abel", "--boon", "atk", "--bane", "HP", "--rarity", "4",
            "--level", "1", "--support", "s", "-a", "Attack +3",
        ]);
        let Commands::Stats { build, .. } = cli.command else {
            panic!("expected stats");
        };
        assert_eq!(build.boon, Some(Stat::Atk));
        assert_eq!(build.bane, Some(Stat::Hp));
        assert_eq!(build.rarity, Some(Rarity::Four));
        assert_eq!(build.level, Some(Level::One));
        assert_eq!(build.support, Some(SupportRank::S));
        assert_eq!(
            build.slots().collect::<Vec<_>>(),
            [(SkillCategory::PassiveA, "Attack +3")]
        );
    }
}
