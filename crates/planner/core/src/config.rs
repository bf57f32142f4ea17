/// Calculation constants and tunable parameters.
///
/// Defaults reproduce the in-game rules. A data directory may override them
/// through `config.toml` (see `planner-content`'s `ConfigLoader`).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CalcConfig {
    /// SP multiplier applied to every inherited skill, in percent.
    pub inherit_cost_percent: u32,
    /// Flat SP surcharge for refining a regular weapon.
    pub refine_cost: u32,
    /// Flat SP surcharge for refining a weapon in the `Legendary` category.
    pub legendary_refine_cost: u32,
    /// Derive missing 3★/4★ level-1 stats from the 5★ entry.
    pub derive_missing_rarities: bool,
}

impl CalcConfig {
    // ===== fixed game rules =====
    pub const MAX_MERGE: u8 = 10;
    pub const MAX_PREREQUISITE_DEPTH: usize = 16;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_INHERIT_COST_PERCENT: u32 = 150;
    pub const DEFAULT_REFINE_COST: u32 = 350;
    pub const DEFAULT_LEGENDARY_REFINE_COST: u32 = 400;

    pub fn new() -> Self {
        Self {
            inherit_cost_percent: Self::DEFAULT_INHERIT_COST_PERCENT,
            refine_cost: Self::DEFAULT_REFINE_COST,
            legendary_refine_cost: Self::DEFAULT_LEGENDARY_REFINE_COST,
            derive_missing_rarities: false,
        }
    }

    pub fn with_derived_rarities(mut self) -> Self {
        self.derive_missing_rarities = true;
        self
    }

    /// Applies the inheritance multiplier to a raw SP sum.
    pub fn inherit_cost(&self, raw: u32) -> u32 {
        raw * self.inherit_cost_percent / 100
    }
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inherit_cost_uses_one_and_a_half() {
        let config = CalcConfig::default();
        assert_eq!(config.inherit_cost(300), 450);
        assert_eq!(config.inherit_cost(0), 0);
    }
}
