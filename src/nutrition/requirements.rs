use serde::Serialize;

use crate::error::Result;
use crate::models::{AgeBracket, RequirementVector, Trimester};
use crate::nutrition::constants::{REQUIREMENT_TABLE, table_column, table_row};

/// A requirement vector together with the labels it was selected by.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequirementEntry {
    pub age_label: &'static str,
    pub trimester_label: &'static str,
    pub requirement: RequirementVector,
}

/// Daily nutrient needs for a pregnant woman of the given age and trimester.
pub fn get(age: AgeBracket, trimester: Trimester) -> RequirementEntry {
    RequirementEntry {
        age_label: age.label(),
        trimester_label: trimester.label(),
        requirement: REQUIREMENT_TABLE[table_row(age)][table_column(trimester)],
    }
}

/// Same as [`get`], from the numeric codes front-ends use (1–3 each).
pub fn get_by_code(age: u8, trimester: u8) -> Result<RequirementEntry> {
    Ok(get(AgeBracket::try_from(age)?, Trimester::try_from(trimester)?))
}

/// Every table entry, age-major.
pub fn all() -> impl Iterator<Item = (AgeBracket, Trimester, RequirementEntry)> {
    AgeBracket::ALL.into_iter().flat_map(|age| {
        Trimester::ALL
            .into_iter()
            .map(move |trimester| (age, trimester, get(age, trimester)))
    })
}
