//! Free-text stat clause scanner.
//!
//! Recognizes clauses of the form `Grants Atk/Spd+3.` and `Inflicts Def-2 and`
//! inside skill effect text. Only the first clause of each polarity counts.
//! A clause may also sit at the very start of the text without its keyword.

use crate::stats::{Stat, Stats};

/// Direction of a stat clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Polarity {
    Grants,
    Inflicts,
}

impl Polarity {
    const fn keyword(self) -> &'static str {
        match self {
            Polarity::Grants => "Grants ",
            Polarity::Inflicts => "Inflicts ",
        }
    }

    const fn sign(self) -> char {
        match self {
            Polarity::Grants => '+',
            Polarity::Inflicts => '-',
        }
    }

    const fn factor(self) -> i32 {
        match self {
            Polarity::Grants => 1,
            Polarity::Inflicts => -1,
        }
    }
}

/// A matched clause: the slash-separated stat list and its signed magnitude.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatClause<'t> {
    pub stats: Vec<&'t str>,
    pub amount: i32,
}

impl StatClause<'_> {
    /// Applies the amount to every recognized stat in the list.
    pub fn delta(&self) -> Stats {
        let mut delta = Stats::ZERO;
        for stat in self.stats.iter().filter_map(|word| Stat::from_keyword(word)) {
            delta.add_stat(stat, self.amount);
        }
        delta
    }
}

/// First clause of the given polarity, if any.
pub fn first_clause(text: &str, polarity: Polarity) -> Option<StatClause<'_>> {
    candidate_starts(text, polarity.keyword())
        .into_iter()
        .find_map(|start| clause_at(&text[start..], polarity))
}

/// Clause start offsets in the order a leftmost match would try them.
///
/// At offset 0 the keyword form is tried before the bare form.
fn candidate_starts(text: &str, keyword: &str) -> Vec<usize> {
    let mut starts = Vec::new();
    let mut keyword_hits = text.match_indices(keyword).map(|(index, _)| index).peekable();
    if keyword_hits.peek() == Some(&0) {
        starts.push(keyword.len());
        keyword_hits.next();
    }
    starts.push(0);
    starts.extend(keyword_hits.map(|index| index + keyword.len()));
    starts
}

fn is_list_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '/'
}

/// Parses `<list>[ ]<sign><digits>` followed by `.` or ` and`.
fn clause_at(rest: &str, polarity: Polarity) -> Option<StatClause<'_>> {
    let list_end = rest.find(|c: char| !is_list_char(c)).unwrap_or(rest.len());
    if list_end == 0 {
        return None;
    }
    let list = &rest[..list_end];

    let mut tail = &rest[list_end..];
    if let Some(c) = tail.chars().next()
        && c.is_whitespace()
    {
        tail = &tail[c.len_utf8()..];
    }
    tail = tail.strip_prefix(polarity.sign())?;

    let digits_end = tail
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(tail.len());
    if digits_end == 0 {
        return None;
    }
    let magnitude: i32 = tail[..digits_end].parse().ok()?;

    let after = &tail[digits_end..];
    if !(after.starts_with('.') || after.starts_with(" and")) {
        return None;
    }

    Some(StatClause {
        stats: list.split('/').collect(),
        amount: magnitude * polarity.factor(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grants_clause_applies_to_every_listed_stat() {
        let clause = first_clause("Grants Atk/Spd+2. Unit cannot counter.", Polarity::Grants);
        let clause = clause.expect("clause");
        assert_eq!(clause.stats, vec!["Atk", "Spd"]);
        assert_eq!(clause.delta(), Stats::new(0, 2, 2, 0, 0));
    }

    #[test]
    fn clause_at_start_of_text_needs_no_keyword() {
        let clause = first_clause("HP+5. Heals more.", Polarity::Grants).expect("clause");
        assert_eq!(clause.delta(), Stats::single(Stat::Hp, 5));
    }

    #[test]
    fn clause_must_end_with_period_or_and() {
        assert!(first_clause("Grants Atk+3 when attacking", Polarity::Grants).is_none());
        let clause = first_clause("Grants Res+3 and reduces damage.", Polarity::Grants);
        assert_eq!(clause.map(|c| c.delta()), Some(Stats::single(Stat::Res, 3)));
    }

    #[test]
    fn only_first_clause_counts() {
        let text = "Grants Atk+3. Grants Spd+3.";
        let clause = first_clause(text, Polarity::Grants).expect("clause");
        assert_eq!(clause.delta(), Stats::single(Stat::Atk, 3));
    }

    #[test]
    fn inflicts_clause_is_negative() {
        let text = "Grants Def+5. Inflicts Spd-3.";
        let clause = first_clause(text, Polarity::Inflicts).expect("clause");
        assert_eq!(clause.delta(), Stats::single(Stat::Spd, -3));
    }

    #[test]
    fn a_space_before_the_sign_is_allowed() {
        let clause = first_clause("Grants Attack +1.", Polarity::Grants).expect("clause");
        assert_eq!(clause.delta(), Stats::single(Stat::Atk, 1));
    }

    #[test]
    fn later_keyword_is_found_after_a_failed_start() {
        let text = "If unit initiates combat, unit cannot counter. Grants HP+3.";
        let clause = first_clause(text, Polarity::Grants).expect("clause");
        assert_eq!(clause.delta(), Stats::single(Stat::Hp, 3));
    }
}
