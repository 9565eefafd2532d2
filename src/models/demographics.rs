use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NutritionError;

/// Age group of the pregnant user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeBracket {
    /// 16–18 years.
    Young,
    /// 19–29 years.
    Adult,
    /// 30–49 years.
    MidAdult,
}

impl AgeBracket {
    pub const ALL: [AgeBracket; 3] = [AgeBracket::Young, AgeBracket::Adult, AgeBracket::MidAdult];

    /// Numeric code used by front-ends (1–3).
    pub fn code(self) -> u8 {
        match self {
            AgeBracket::Young => 1,
            AgeBracket::Adult => 2,
            AgeBracket::MidAdult => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AgeBracket::Young => "16 - 18 years",
            AgeBracket::Adult => "19 - 29 years",
            AgeBracket::MidAdult => "30 - 49 years",
        }
    }
}

impl fmt::Display for AgeBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<u8> for AgeBracket {
    type Error = NutritionError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(AgeBracket::Young),
            2 => Ok(AgeBracket::Adult),
            3 => Ok(AgeBracket::MidAdult),
            other => Err(NutritionError::InvalidInput(format!(
                "age bracket must be 1, 2 or 3, got {other}"
            ))),
        }
    }
}

impl FromStr for AgeBracket {
    type Err = NutritionError;

    /// Accepts a code ("1"), a variant name ("young") or a label ("16 - 18").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();

        // "16-18tahun" and "16-18years" reduce to the bare range
        let range = compact.trim_end_matches(|c: char| c.is_alphabetic());

        match (compact.as_str(), range) {
            ("1" | "young", _) | (_, "16-18") => Ok(AgeBracket::Young),
            ("2" | "adult", _) | (_, "19-29") => Ok(AgeBracket::Adult),
            ("3" | "midadult" | "mid-adult", _) | (_, "30-49") => Ok(AgeBracket::MidAdult),
            _ => Err(NutritionError::InvalidInput(format!(
                "unknown age bracket '{s}'"
            ))),
        }
    }
}

/// Stage of pregnancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trimester {
    First,
    Second,
    Third,
}

impl Trimester {
    pub const ALL: [Trimester; 3] = [Trimester::First, Trimester::Second, Trimester::Third];

    pub fn code(self) -> u8 {
        match self {
            Trimester::First => 1,
            Trimester::Second => 2,
            Trimester::Third => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Trimester::First => "Trimester 1",
            Trimester::Second => "Trimester 2",
            Trimester::Third => "Trimester 3",
        }
    }
}

impl fmt::Display for Trimester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<u8> for Trimester {
    type Error = NutritionError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Trimester::First),
            2 => Ok(Trimester::Second),
            3 => Ok(Trimester::Third),
            other => Err(NutritionError::InvalidInput(format!(
                "trimester must be 1, 2 or 3, got {other}"
            ))),
        }
    }
}

impl FromStr for Trimester {
    type Err = NutritionError;

    /// Accepts a code ("2"), an ordinal ("second") or a label ("Trimester 2").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();
        let compact = compact.strip_prefix("trimester").unwrap_or(&compact);

        match compact {
            "1" | "first" => Ok(Trimester::First),
            "2" | "second" => Ok(Trimester::Second),
            "3" | "third" => Ok(Trimester::Third),
            _ => Err(NutritionError::InvalidInput(format!(
                "unknown trimester '{s}'"
            ))),
        }
    }
}
