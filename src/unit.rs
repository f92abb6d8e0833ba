use serde::{Deserialize, Serialize};
use std::fmt;

/// Units of measure recognised in ingredient lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Tbsp,
    Tsp,
    Cup,
    Oz,
    Lb,
    G,
    Kg,
    Ml,
    L,
    Pinch,
    Clove,
    Can,
    Pkg,
}

impl Unit {
    pub const ALL: [Unit; 13] = [
        Unit::Tbsp,
        Unit::Tsp,
        Unit::Cup,
        Unit::Oz,
        Unit::Lb,
        Unit::G,
        Unit::Kg,
        Unit::Ml,
        Unit::L,
        Unit::Pinch,
        Unit::Clove,
        Unit::Can,
        Unit::Pkg,
    ];

    /// Canonical short form
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Tbsp => "tbsp",
            Unit::Tsp => "tsp",
            Unit::Cup => "cup",
            Unit::Oz => "oz",
            Unit::Lb => "lb",
            Unit::G => "g",
            Unit::Kg => "kg",
            Unit::Ml => "ml",
            Unit::L => "l",
            Unit::Pinch => "pinch",
            Unit::Clove => "clove",
            Unit::Can => "can",
            Unit::Pkg => "pkg",
        }
    }

    /// Recognise a lower-case unit word, its plural or an abbreviation.
    ///
    /// A single trailing period is ignored (`tbsp.`).
    pub fn from_word(word: &str) -> Option<Unit> {
        let word = word.strip_suffix('.').unwrap_or(word);
        let unit = match word {
            "tablespoon" | "tablespoons" | "tbsp" | "tbsps" | "tbs" | "tbl" => Unit::Tbsp,
            "teaspoon" | "teaspoons" | "tsp" | "tsps" => Unit::Tsp,
            "cup" | "cups" | "c" => Unit::Cup,
            "ounce" | "ounces" | "oz" => Unit::Oz,
            "pound" | "pounds" | "lb" | "lbs" => Unit::Lb,
            "gram" | "grams" | "gramme" | "grammes" | "g" => Unit::G,
            "kilogram" | "kilograms" | "kilo" | "kilos" | "kg" | "kgs" => Unit::Kg,
            "milliliter" | "milliliters" | "millilitre" | "millilitres" | "ml" => Unit::Ml,
            "liter" | "liters" | "litre" | "litres" | "l" => Unit::L,
            "pinch" | "pinches" => Unit::Pinch,
            "clove" | "cloves" => Unit::Clove,
            "can" | "cans" | "tin" | "tins" => Unit::Can,
            "package" | "packages" | "packet" | "packets" | "pkg" | "pkgs" => Unit::Pkg,
            _ => return None,
        };
        Some(unit)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
