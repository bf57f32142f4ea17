//! Stat system.
//!
//! # Pipeline
//!
//! ```text
//! [ Baseline (rarity table / explicit level 40) ]
//!      ↓
//! [ Boon/bane + leveling ]  growths nudged ±5 for boon/bane stats
//!      ↓
//! [ Merge ]                 round-robin over ranked level-1 stats
//!      ↓
//! [ Weapon + passive A + seal ]
//!      ↓
//! [ Support rank ]
//!      ↓
//! [ Clamp at 0 ]
//! ```
//!
//! Every stage is a pure function of reference data and the build. Nothing
//! is cached; callers recompute in full after each edit.

pub mod breakdown;
pub mod core;
pub mod growth;
pub mod inference;
pub mod merge;
pub mod modifiers;
pub mod weapon;

pub use breakdown::{StatBreakdown, baseline_stats, compute_stats, stat_breakdown};
pub use self::core::{Stat, Stats};
pub use growth::{BaselineSource, derive_rarity, growth_value, level_one_stats, leveling_delta};
pub use inference::calc_boon_bane;
pub use merge::{merge_bonus, rank_stats};
pub use modifiers::{BoonBane, Level, Modifiers, Rarity, SUPPORT_BONUSES, SupportRank};
pub use weapon::{refine_stats, refined_effect, weapon_delta};
