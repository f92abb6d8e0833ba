//! Free-text ingredient lines to structured `{quantity, unit, name}` records.
//!
//! Parsing never fails: a line we cannot make sense of becomes an ingredient
//! with no quantity whose name is the whole (cleaned) line.

use log::trace;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

use crate::quantity::Quantity;
use crate::unit::Unit;

const FILLER_WORDS: [&str; 4] = ["of", "a", "an", "the"];
const RANGE_WORDS: [&str; 3] = ["-", "–", "to"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub quantity: Option<Quantity>,
    pub unit: Option<Unit>,
    pub name: String,
    /// Preparation hint that followed a comma, e.g. "sifted"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Ingredient {
    pub fn parse(line: &str) -> Ingredient {
        let cleaned = strip_parentheticals(&replace_fraction_glyphs(&line.trim().to_lowercase()));

        let (main, note) = match cleaned.split_once(',') {
            Some((main, note)) => (main.to_string(), collapse_whitespace(note)),
            None => (cleaned, String::new()),
        };
        let note = Some(note).filter(|n| !n.is_empty());

        let tokens: Vec<&str> = main.split_whitespace().collect();
        let (quantity, unit, rest) = split_amount(&tokens);
        let name = rest.join(" ");

        let ingredient = Ingredient {
            quantity,
            unit,
            name,
            note,
        };
        trace!("parsed {:?} as {:?}", line, ingredient);
        ingredient
    }

    /// Copy with the quantity multiplied by `factor`; unset quantities stay unset.
    pub fn scaled(&self, factor: Quantity) -> Ingredient {
        Ingredient {
            quantity: self.quantity.map(|q| q * factor),
            ..self.clone()
        }
    }
}

/// `[quantity ][unit ]name[, note]`, which parses back to the same ingredient.
impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::with_capacity(3);
        if let Some(quantity) = self.quantity {
            parts.push(quantity.to_string());
        }
        if let Some(unit) = self.unit {
            parts.push(unit.to_string());
        }
        if !self.name.is_empty() {
            parts.push(self.name.clone());
        }
        write!(f, "{}", parts.join(" "))?;
        if let Some(note) = &self.note {
            write!(f, ", {}", note)?;
        }
        Ok(())
    }
}

/// Parse every line of a recipe's ingredient list
pub fn parse_ingredients<S: AsRef<str>>(lines: &[S]) -> Vec<Ingredient> {
    lines.iter().map(|l| Ingredient::parse(l.as_ref())).collect()
}

/// Take the leading quantity and unit off a token list.
///
/// Whatever remains is the name. Filler words are dropped from its start
/// unless that would leave it beginning with more amount (`2 a 1/2 ...`),
/// which would read back differently.
fn split_amount<'a, 'b>(
    tokens: &'b [&'a str],
) -> (Option<Quantity>, Option<Unit>, &'b [&'a str]) {
    let Some((first, rest)) = tokens.split_first() else {
        return (None, None, tokens);
    };

    if let Some((quantity, unit)) = split_glued(first) {
        return (Some(quantity), Some(unit), skip_fillers(rest));
    }

    let Some(quantity) = parse_quantity_token(first) else {
        return (None, None, tokens);
    };
    let (quantity, rest) = take_fraction(quantity, rest);
    let rest = take_ranges(quantity, rest);

    // "1 pinch of salt", "1 a pinch of salt"
    for candidate in [rest, skip_fillers(rest)] {
        if let Some((next, tail)) = candidate.split_first() {
            if let Some(unit) = Unit::from_word(next) {
                return (Some(quantity), Some(unit), skip_fillers(tail));
            }
        }
    }

    let stripped = skip_fillers(rest);
    if continues_amount(quantity, stripped) {
        (Some(quantity), None, rest)
    } else {
        (Some(quantity), None, stripped)
    }
}

fn skip_fillers<'a, 'b>(tokens: &'b [&'a str]) -> &'b [&'a str] {
    let start = tokens
        .iter()
        .position(|t| !FILLER_WORDS.contains(t))
        .unwrap_or(tokens.len());
    &tokens[start..]
}

/// "1 1/2" is one mixed number
fn take_fraction<'a, 'b>(
    quantity: Quantity,
    rest: &'b [&'a str],
) -> (Quantity, &'b [&'a str]) {
    if !quantity.is_whole() {
        return (quantity, rest);
    }
    if let Some((next, tail)) = rest.split_first() {
        let sum = proper_fraction(next).and_then(|f| quantity.checked_add(f));
        if let Some(sum) = sum {
            return (sum, tail);
        }
    }
    (quantity, rest)
}

fn proper_fraction(token: &str) -> Option<Quantity> {
    Some(token)
        .filter(|t| t.contains('/'))
        .and_then(Quantity::parse_token)
        .filter(Quantity::is_proper_fraction)
}

/// Drop spaced upper bounds: `2 - 3`, `2 to 3 1/2`. The lower bound is kept.
///
/// A bound is left in place when dropping it would put a fraction right after
/// a whole quantity.
fn take_ranges<'a, 'b>(quantity: Quantity, mut rest: &'b [&'a str]) -> &'b [&'a str] {
    while let [sep, high, tail @ ..] = rest {
        if !RANGE_WORDS.contains(sep) {
            break;
        }
        let Some(high) = parse_quantity_token(high) else {
            break;
        };
        let (_, tail) = take_fraction(high, tail);
        if quantity.is_whole() && tail.first().is_some_and(|t| proper_fraction(t).is_some()) {
            break;
        }
        rest = tail;
    }
    rest
}

/// Whether `rest` would be read as more of the amount after `quantity`.
fn continues_amount(quantity: Quantity, rest: &[&str]) -> bool {
    let Some(next) = rest.first() else {
        return false;
    };
    (quantity.is_whole() && proper_fraction(next).is_some())
        || take_ranges(quantity, rest).len() != rest.len()
        || Unit::from_word(next).is_some()
}

/// A single quantity token: `2`, `1.5`, `3/4`, `1-1/2` (mixed) or `2-3` (range, lower bound).
fn parse_quantity_token(token: &str) -> Option<Quantity> {
    match token.split_once(['-', '–']) {
        Some((low, high)) => {
            let low = Quantity::parse_token(low)?;
            let high = Quantity::parse_token(high)?;
            if low.is_whole() && high.is_proper_fraction() {
                low.checked_add(high)
            } else {
                Some(low)
            }
        }
        None => Quantity::parse_token(token),
    }
}

/// `500g`, `2tbsp`, `1/2cup`
fn split_glued(token: &str) -> Option<(Quantity, Unit)> {
    static GLUED: OnceLock<Regex> = OnceLock::new();
    let re = GLUED.get_or_init(|| {
        Regex::new(r"^(\d*\.?\d+(?:/\d+)?)([a-z]+\.?)$").expect("glued amount regex")
    });
    let caps = re.captures(token)?;
    let unit = Unit::from_word(&caps[2])?;
    let quantity = Quantity::parse_token(&caps[1])?;
    Some((quantity, unit))
}

fn strip_parentheticals(text: &str) -> String {
    static PARENS: OnceLock<Regex> = OnceLock::new();
    let re = PARENS.get_or_init(|| Regex::new(r"\s*\([^)]*\)\s*").expect("parenthetical regex"));
    re.replace_all(text, " ").trim().to_string()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Rewrite `½`-style glyphs as ASCII fractions, keeping `1½` a mixed number.
fn replace_fraction_glyphs(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 4);
    for c in text.chars() {
        match fraction_glyph(c) {
            Some(ascii) => {
                if out.ends_with(|p: char| p.is_ascii_digit()) {
                    out.push(' ');
                }
                out.push_str(ascii);
            }
            None if c == '\u{2044}' => out.push('/'),
            None => out.push(c),
        }
    }
    out
}

fn fraction_glyph(c: char) -> Option<&'static str> {
    let ascii = match c {
        '½' => "1/2",
        '⅓' => "1/3",
        '⅔' => "2/3",
        '¼' => "1/4",
        '¾' => "3/4",
        '⅕' => "1/5",
        '⅖' => "2/5",
        '⅗' => "3/5",
        '⅘' => "4/5",
        '⅙' => "1/6",
        '⅚' => "5/6",
        '⅐' => "1/7",
        '⅛' => "1/8",
        '⅜' => "3/8",
        '⅝' => "5/8",
        '⅞' => "7/8",
        '⅑' => "1/9",
        '⅒' => "1/10",
        _ => return None,
    };
    Some(ascii)
}
