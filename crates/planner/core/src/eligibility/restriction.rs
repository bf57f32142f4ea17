//! Restriction strings and the clauses they are made of.
//!
//! A restriction is a `", "`-separated list of clauses. Keyword clauses test
//! a unit class; anything else is a pattern matched against the unit's
//! `"<color> <weapon> <move>"` tag.

use std::collections::HashMap;
use std::sync::{LazyLock, RwLock};

use bitflags::bitflags;
use regex::Regex;

use crate::env::{Color, UnitDefinition, WeaponType};

bitflags! {
    /// Colors named by a `Color:` clause.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ColorFlags: u8 {
        const RED = 1 << 0;
        const BLUE = 1 << 1;
        const GREEN = 1 << 2;
        const NEUTRAL = 1 << 3;
    }
}

impl ColorFlags {
    /// Parses the flag list after `Color:`. Letters are matched by containment.
    pub fn parse(flags: &str) -> Self {
        [
            ('R', Self::RED),
            ('B', Self::BLUE),
            ('G', Self::GREEN),
            ('N', Self::NEUTRAL),
        ]
        .into_iter()
        .filter(|(letter, _)| flags.contains(*letter))
        .fold(Self::empty(), |acc, (_, flag)| acc | flag)
    }

    pub const fn of(color: Color) -> Self {
        match color {
            Color::Red => Self::RED,
            Color::Blue => Self::BLUE,
            Color::Green => Self::GREEN,
            Color::Neutral => Self::NEUTRAL,
        }
    }
}

bitflags! {
    /// Weapon classes named by a `Weapon:` clause. Tomes are split by color.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct WeaponFlags: u16 {
        const SWORD = 1 << 0;
        const LANCE = 1 << 1;
        const AXE = 1 << 2;
        const BREATH = 1 << 3;
        const BEAST = 1 << 4;
        const RED_TOME = 1 << 5;
        const BLUE_TOME = 1 << 6;
        const GREEN_TOME = 1 << 7;
        const BOW = 1 << 8;
        const DAGGER = 1 << 9;
        const STAFF = 1 << 10;
    }
}

impl WeaponFlags {
    const CODES: [(&'static str, WeaponFlags); 11] = [
        ("Sw", Self::SWORD),
        ("L", Self::LANCE),
        ("A", Self::AXE),
        ("Br", Self::BREATH),
        ("Be", Self::BEAST),
        ("Tr", Self::RED_TOME),
        ("Tb", Self::BLUE_TOME),
        ("Tg", Self::GREEN_TOME),
        ("Bo", Self::BOW),
        ("Da", Self::DAGGER),
        ("St", Self::STAFF),
    ];

    /// Parses the flag list after `Weapon:`. Codes are matched by containment.
    pub fn parse(flags: &str) -> Self {
        Self::CODES
            .into_iter()
            .filter(|(code, _)| flags.contains(code))
            .fold(Self::empty(), |acc, (_, flag)| acc | flag)
    }

    /// The single flag describing a unit's weapon. Tomes without a tome color
    /// have none.
    pub const fn of(weapon_type: WeaponType, color: Color) -> Self {
        match (weapon_type, color) {
            (WeaponType::Sword, _) => Self::SWORD,
            (WeaponType::Lance, _) => Self::LANCE,
            (WeaponType::Axe, _) => Self::AXE,
            (WeaponType::Breath, _) => Self::BREATH,
            (WeaponType::Beast, _) => Self::BEAST,
            (WeaponType::Tome, Color::Red) => Self::RED_TOME,
            (WeaponType::Tome, Color::Blue) => Self::BLUE_TOME,
            (WeaponType::Tome, Color::Green) => Self::GREEN_TOME,
            (WeaponType::Tome, Color::Neutral) => Self::empty(),
            (WeaponType::Bow, _) => Self::BOW,
            (WeaponType::Dagger, _) => Self::DAGGER,
            (WeaponType::Staff, _) => Self::STAFF,
        }
    }
}

/// Compiled patterns by source text, shared across eligibility checks.
static COMPILED: LazyLock<RwLock<HashMap<String, Pattern>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// A pattern clause. Sources that are not valid regexes match by substring.
#[derive(Clone, Debug)]
pub struct Pattern {
    source: String,
    regex: Option<Regex>,
}

impl Pattern {
    /// Compiles `source` on first use; later calls reuse the cached regex.
    pub fn compile(source: &str) -> Self {
        if let Ok(cache) = COMPILED.read()
            && let Some(pattern) = cache.get(source)
        {
            return pattern.clone();
        }

        let regex = match Regex::new(source) {
            Ok(regex) => Some(regex),
            Err(err) => {
                tracing::warn!(pattern = source, %err, "restriction is not a valid pattern");
                None
            }
        };
        let pattern = Self {
            source: source.to_owned(),
            regex,
        };
        if let Ok(mut cache) = COMPILED.write() {
            cache
                .entry(source.to_owned())
                .or_insert_with(|| pattern.clone());
        }
        pattern
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_regex(&self) -> bool {
        self.regex.is_some()
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        match &self.regex {
            Some(regex) => regex.is_match(haystack),
            None => haystack.contains(&self.source),
        }
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for Pattern {}

/// One clause of a restriction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Clause {
    /// Learned by default, or the unit's evolved signature weapon.
    Exclusive,
    /// Anyone but staff users.
    Offense,
    Melee,
    Ranged,
    Physical,
    Magic,
    Color(ColorFlags),
    Weapon(WeaponFlags),
    /// Regex matched against the unit's class tag.
    Pattern(Pattern),
}

impl Clause {
    pub fn parse(raw: &str) -> Self {
        if raw.contains("Exclusive") {
            Clause::Exclusive
        } else if raw.contains("Offense") {
            Clause::Offense
        } else if raw.contains("Melee") {
            Clause::Melee
        } else if raw.contains("Ranged") {
            Clause::Ranged
        } else if raw.contains("Physical") {
            Clause::Physical
        } else if raw.contains("Magic") {
            Clause::Magic
        } else if let Some((_, flags)) = raw.split_once("Color:") {
            Clause::Color(ColorFlags::parse(flags))
        } else if let Some((_, flags)) = raw.split_once("Weapon:") {
            Clause::Weapon(WeaponFlags::parse(flags))
        } else {
            Clause::Pattern(Pattern::compile(raw))
        }
    }

    /// Whether a unit satisfies this clause. `exclusive` says whether the
    /// skill counts as the unit's own.
    pub fn admits(&self, unit: &UnitDefinition, exclusive: bool) -> bool {
        let weapon = unit.weapon_type;
        match self {
            Clause::Exclusive => exclusive,
            Clause::Offense => !unit.is_staff_user(),
            Clause::Melee => weapon.is_melee(),
            Clause::Ranged => weapon.is_ranged(),
            Clause::Physical => weapon.is_physical(),
            Clause::Magic => weapon.is_magic(),
            Clause::Color(flags) => flags.contains(ColorFlags::of(unit.color)),
            Clause::Weapon(flags) => {
                let own = WeaponFlags::of(weapon, unit.color);
                !own.is_empty() && flags.contains(own)
            }
            Clause::Pattern(pattern) => pattern.is_match(&unit.class_tag()),
        }
    }
}

/// A parsed restriction string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Restriction<'r> {
    clauses: Vec<(&'r str, Clause)>,
}

impl<'r> Restriction<'r> {
    pub fn parse(raw: &'r str) -> Self {
        let clauses = raw
            .split(", ")
            .filter(|clause| !clause.is_empty())
            .map(|clause| (clause, Clause::parse(clause)))
            .collect();
        Self { clauses }
    }

    /// Prepends a clause, used for a weapon's own type.
    pub fn with_leading(mut self, raw: &'r str) -> Self {
        self.clauses.insert(0, (raw, Clause::parse(raw)));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn clauses(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter().map(|(_, clause)| clause)
    }

    /// Every clause must pass. A clause naming the unit always passes.
    pub fn admits(&self, unit: &UnitDefinition, exclusive: bool) -> bool {
        self.clauses
            .iter()
            .all(|(raw, clause)| *raw == unit.name || clause.admits(unit, exclusive))
    }
}
