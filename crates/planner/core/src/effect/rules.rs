//! Naming-convention rules and documented special families.
//!
//! Passive A skills and seals often encode their stat bonus in the name
//! (`"HP +5"`, `"Attack/Def +2"`, `"HP/Atk 1"`). The rule table below is
//! consulted before any effect text.

use crate::stats::{Stat, Stats};

/// A token of a skill name.
#[derive(Clone, Debug, PartialEq, Eq)]
enum NameToken<'n> {
    Word(&'n str),
    Slash,
    Plus,
    Number(i32),
}

fn tokenize(name: &str) -> Vec<NameToken<'_>> {
    let mut tokens = Vec::new();
    let mut rest = name;
    while let Some(c) = rest.chars().next() {
        if c == '/' {
            tokens.push(NameToken::Slash);
            rest = &rest[1..];
        } else if c == '+' {
            tokens.push(NameToken::Plus);
            rest = &rest[1..];
        } else if c.is_ascii_digit() {
            let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
            tokens.push(NameToken::Number(rest[..end].parse().unwrap_or(0)));
            rest = &rest[end..];
        } else if c.is_alphabetic() {
            let end = rest
                .find(|c: char| !c.is_alphanumeric() && c != '_')
                .unwrap_or(rest.len());
            tokens.push(NameToken::Word(&rest[..end]));
            rest = &rest[end..];
        } else {
            rest = &rest[c.len_utf8()..];
        }
    }
    tokens
}

/// One naming convention: `<stat>[/<stat>] [+]<n>`.
#[derive(Clone, Copy, Debug)]
struct NameRule {
    /// Number of slash-separated stats before the magnitude.
    arity: usize,
    /// Whether the magnitude is written with a `+`.
    signed: bool,
    /// The first stat must be HP.
    hp_first: bool,
    /// Added to the first stat's magnitude.
    first_bonus: i32,
}

/// Tried in order; the first match wins.
const NAME_RULES: [NameRule; 4] = [
    // HP +5
    NameRule {
        arity: 1,
        signed: true,
        hp_first: true,
        first_bonus: 0,
    },
    // HP/Atk 1 -> HP +3, Atk +1
    NameRule {
        arity: 2,
        signed: false,
        hp_first: true,
        first_bonus: 2,
    },
    // Attack/Def +2
    NameRule {
        arity: 2,
        signed: true,
        hp_first: false,
        first_bonus: 0,
    },
    // Speed +3
    NameRule {
        arity: 1,
        signed: true,
        hp_first: false,
        first_bonus: 0,
    },
];

impl NameRule {
    fn match_at(&self, tokens: &[NameToken<'_>]) -> Option<Stats> {
        let mut stats = Vec::with_capacity(self.arity);
        let mut cursor = 0;
        for position in 0..self.arity {
            if position > 0 {
                if tokens.get(cursor) != Some(&NameToken::Slash) {
                    return None;
                }
                cursor += 1;
            }
            let NameToken::Word(word) = tokens.get(cursor)? else {
                return None;
            };
            stats.push(stat_word(word)?);
            cursor += 1;
        }

        if self.hp_first && stats.first() != Some(&Stat::Hp) {
            return None;
        }

        let has_plus = tokens.get(cursor) == Some(&NameToken::Plus);
        if has_plus != self.signed {
            return None;
        }
        if has_plus {
            cursor += 1;
        }
        let NameToken::Number(amount) = tokens.get(cursor)? else {
            return None;
        };

        let mut delta = Stats::ZERO;
        for (position, stat) in stats.into_iter().enumerate() {
            let bonus = if position == 0 { self.first_bonus } else { 0 };
            delta.add_stat(stat, amount + bonus);
        }
        Some(delta)
    }
}

/// A whole-word stat name, short or long form.
fn stat_word(word: &str) -> Option<Stat> {
    match word {
        "HP" => Some(Stat::Hp),
        "Atk" | "Attack" => Some(Stat::Atk),
        "Spd" | "Speed" => Some(Stat::Spd),
        "Def" | "Defense" => Some(Stat::Def),
        "Res" | "Resistance" => Some(Stat::Res),
        _ => None,
    }
}

/// Stat delta encoded in a skill name, if it follows a naming convention.
pub fn name_delta(name: &str) -> Option<Stats> {
    let tokens = tokenize(name);
    NAME_RULES.iter().find_map(|rule| {
        (0..tokens.len()).find_map(|start| rule.match_at(&tokens[start..]))
    })
}

/// Skill families whose effect text does not spell out a stat clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Family {
    /// `Fury n`: +n to Atk/Spd/Def/Res.
    Fury,
    /// `Life and Death n`: +(n+2) Atk/Spd, -(n+2) Def/Res.
    LifeAndDeath,
    /// `Fortress Def n`: +(n+2) Def, -3 Atk.
    FortressDef,
}

const FAMILIES: [(&str, Family); 3] = [
    ("Fury", Family::Fury),
    ("Life and Death", Family::LifeAndDeath),
    ("Fortress Def", Family::FortressDef),
];

impl Family {
    fn delta(self, level: i32) -> Stats {
        match self {
            Family::Fury => Stats::uniform(&[Stat::Atk, Stat::Spd, Stat::Def, Stat::Res], level),
            Family::LifeAndDeath => {
                Stats::uniform(&[Stat::Atk, Stat::Spd], level + 2)
                    + Stats::uniform(&[Stat::Def, Stat::Res], -(level + 2))
            }
            Family::FortressDef => {
                Stats::single(Stat::Def, level + 2) + Stats::single(Stat::Atk, -3)
            }
        }
    }
}

/// Stat delta of a documented family (`"Fury 3"`, `"Fortress Def 1"`).
pub fn family_delta(name: &str) -> Option<Stats> {
    FAMILIES.iter().find_map(|(prefix, family)| {
        let level = name.strip_prefix(prefix)?.trim().parse::<i32>().ok()?;
        Some(family.delta(level))
    })
}
