//! Natural-order collation.
//!
//! Compares strings with embedded digit runs as numeric magnitudes, so
//! `"Q9"` sorts before `"Q10"` instead of after it.

use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Chunk<'a> {
    Num(&'a str),
    Text(&'a str),
}

struct Chunks<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Chunks<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Chunk<'a>> {
        let first = self.rest.chars().next()?;
        let is_digit = first.is_ascii_digit();
        let split = self
            .rest
            .char_indices()
            .find(|&(_, c)| c.is_ascii_digit() != is_digit)
            .map_or(self.rest.len(), |(i, _)| i);
        let (chunk, rest) = self.rest.split_at(split);
        self.rest = rest;
        Some(if is_digit {
            Chunk::Num(chunk)
        } else {
            Chunk::Text(chunk)
        })
    }
}

/// Compare digit runs by magnitude. Leading zeros are insignificant here;
/// the full-string tiebreak in [`natural_cmp`] keeps the order total.
fn num_cmp(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Case-insensitive text comparison.
fn text_cmp(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Total natural order over strings.
///
/// Digit runs compare as numbers, text runs compare case-insensitively, and
/// a digit run sorts before a text run at the same position. Strings equal
/// under those rules fall back to plain byte order so the result is a total
/// order.
#[must_use]
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut lhs = Chunks { rest: a };
    let mut rhs = Chunks { rest: b };
    loop {
        let ord = match (lhs.next(), rhs.next()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(Chunk::Num(x)), Some(Chunk::Num(y))) => num_cmp(x, y),
            (Some(Chunk::Text(x)), Some(Chunk::Text(y))) => text_cmp(x, y),
            (Some(Chunk::Num(_)), Some(Chunk::Text(_))) => return Ordering::Less,
            (Some(Chunk::Text(_)), Some(Chunk::Num(_))) => return Ordering::Greater,
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
}
