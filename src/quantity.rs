//! Exact ingredient amounts.
//!
//! Amounts are kept as reduced fractions so that scaling a recipe up and back
//! down lands on exactly the amount it started with.

use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::ops::Mul;

/// A non-negative rational amount, always stored in lowest terms.
///
/// Serialized as a fraction string (`"3/4"`, or `"2"` when whole) so no
/// precision is lost; plain JSON numbers are accepted when reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct Quantity {
    numer: u64,
    denom: u64,
}

impl Quantity {
    /// Build `numer / denom`. Returns `None` for a zero denominator.
    pub fn new(numer: u64, denom: u64) -> Option<Self> {
        if denom == 0 {
            return None;
        }
        let g = gcd(numer, denom);
        Some(Quantity {
            numer: numer / g,
            denom: denom / g,
        })
    }

    pub fn whole(n: u64) -> Self {
        Quantity { numer: n, denom: 1 }
    }

    pub fn numer(&self) -> u64 {
        self.numer
    }

    pub fn denom(&self) -> u64 {
        self.denom
    }

    pub fn is_whole(&self) -> bool {
        self.denom == 1
    }

    /// `true` for fractions strictly between 0 and 1
    pub fn is_proper_fraction(&self) -> bool {
        self.numer > 0 && self.numer < self.denom
    }

    pub fn to_f64(self) -> f64 {
        self.numer as f64 / self.denom as f64
    }

    /// Parse a plain number token: `2`, `1.5`, `.25` or `3/4`.
    pub fn parse_token(token: &str) -> Option<Self> {
        if let Some((n, d)) = token.split_once('/') {
            return Quantity::new(parse_digits(n)?, parse_digits(d)?);
        }

        match token.split_once('.') {
            Some((int, frac)) => {
                if frac.is_empty() || frac.len() > 6 {
                    return None;
                }
                let int = if int.is_empty() { 0 } else { parse_digits(int)? };
                let scale = 10u64.pow(frac.len() as u32);
                let numer = int.checked_mul(scale)?.checked_add(parse_digits(frac)?)?;
                Quantity::new(numer, scale)
            }
            None => parse_digits(token).map(Quantity::whole),
        }
    }

    /// Whitespace-separated tokens summed together, so both `3/2` and the
    /// displayed `1 1/2` are read back.
    pub fn parse_mixed(text: &str) -> Option<Self> {
        let mut tokens = text.split_whitespace();
        let first = Quantity::parse_token(tokens.next()?)?;
        tokens.try_fold(first, |acc, t| acc.checked_add(Quantity::parse_token(t)?))
    }

    /// Closest fraction with a denominator no larger than 64.
    ///
    /// Used for amounts typed in by hand as decimals.
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() || value < 0.0 {
            return None;
        }
        let mut best = Quantity::whole(value.round() as u64);
        let mut best_err = (best.to_f64() - value).abs();
        for denom in 2..=64u64 {
            let numer = (value * denom as f64).round() as u64;
            let candidate = Quantity { numer, denom };
            let err = (candidate.to_f64() - value).abs();
            if err + f64::EPSILON < best_err {
                best = candidate;
                best_err = err;
            }
        }
        Quantity::new(best.numer, best.denom)
    }

    pub fn checked_add(self, other: Quantity) -> Option<Self> {
        let numer = self
            .numer
            .checked_mul(other.denom)?
            .checked_add(other.numer.checked_mul(self.denom)?)?;
        Quantity::new(numer, self.denom.checked_mul(other.denom)?)
    }

    /// Multiply, cross-reducing first so small recipes never overflow.
    pub fn checked_mul(self, other: Quantity) -> Option<Self> {
        let g1 = gcd(self.numer, other.denom);
        let g2 = gcd(other.numer, self.denom);
        let numer = (self.numer / g1).checked_mul(other.numer / g2)?;
        let denom = (self.denom / g2).checked_mul(other.denom / g1)?;
        Quantity::new(numer, denom)
    }
}

impl Mul for Quantity {
    type Output = Quantity;

    /// Saturates at `u64::MAX` rather than wrapping on overflow.
    fn mul(self, rhs: Quantity) -> Quantity {
        self.checked_mul(rhs).unwrap_or(Quantity {
            numer: u64::MAX,
            denom: 1,
        })
    }
}

impl From<Quantity> for String {
    fn from(q: Quantity) -> String {
        if q.is_whole() {
            q.numer.to_string()
        } else {
            format!("{}/{}", q.numer, q.denom)
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum QuantityRepr {
    Text(String),
    Number(f64),
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match QuantityRepr::deserialize(deserializer)? {
            QuantityRepr::Text(text) => Quantity::parse_mixed(&text)
                .ok_or_else(|| de::Error::custom(format!("invalid quantity: {:?}", text))),
            QuantityRepr::Number(value) => Quantity::from_f64(value)
                .ok_or_else(|| de::Error::custom(format!("invalid quantity: {}", value))),
        }
    }
}

/// Mixed-number form: `1 1/2`, `3`, `2/3`.
impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let int = self.numer / self.denom;
        let rem = self.numer % self.denom;
        match (int, rem) {
            (_, 0) => write!(f, "{}", int),
            (0, _) => write!(f, "{}/{}", rem, self.denom),
            _ => write!(f, "{} {}/{}", int, rem, self.denom),
        }
    }
}

fn parse_digits(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    if a == 0 {
        1
    } else {
        a
    }
}
