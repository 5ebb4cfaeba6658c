//! International dial code enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Enumerated;
use crate::domain::foundation::{Field, ValidationError};

/// Country calling codes accepted in phone numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DialCode {
    UnitedStates,
    Mexico,
    Argentina,
    Bolivia,
    Brazil,
    UnitedKingdom,
    France,
    Germany,
    Spain,
    Italy,
    Japan,
    China,
    India,
    Australia,
    SouthKorea,
}

static ALL: [DialCode; 15] = [
    DialCode::UnitedStates,
    DialCode::Mexico,
    DialCode::Argentina,
    DialCode::Bolivia,
    DialCode::Brazil,
    DialCode::UnitedKingdom,
    DialCode::France,
    DialCode::Germany,
    DialCode::Spain,
    DialCode::Italy,
    DialCode::Japan,
    DialCode::China,
    DialCode::India,
    DialCode::Australia,
    DialCode::SouthKorea,
];

impl Enumerated for DialCode {
    const FIELD: Field = Field::DialCode;

    fn list_all() -> &'static [Self] {
        &ALL
    }

    fn code(&self) -> &'static str {
        match self {
            DialCode::UnitedStates => "+1",
            DialCode::Mexico => "+52",
            DialCode::Argentina => "+54",
            DialCode::Bolivia => "+591",
            DialCode::Brazil => "+55",
            DialCode::UnitedKingdom => "+44",
            DialCode::France => "+33",
            DialCode::Germany => "+49",
            DialCode::Spain => "+34",
            DialCode::Italy => "+39",
            DialCode::Japan => "+81",
            DialCode::China => "+86",
            DialCode::India => "+91",
            DialCode::Australia => "+61",
            DialCode::SouthKorea => "+82",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            DialCode::UnitedStates => "United States",
            DialCode::Mexico => "Mexico",
            DialCode::Argentina => "Argentina",
            DialCode::Bolivia => "Bolivia",
            DialCode::Brazil => "Brazil",
            DialCode::UnitedKingdom => "United Kingdom",
            DialCode::France => "France",
            DialCode::Germany => "Germany",
            DialCode::Spain => "Spain",
            DialCode::Italy => "Italy",
            DialCode::Japan => "Japan",
            DialCode::China => "China",
            DialCode::India => "India",
            DialCode::Australia => "Australia",
            DialCode::SouthKorea => "South Korea",
        }
    }
}

impl fmt::Display for DialCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for DialCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DialCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DialCode> for String {
    fn from(value: DialCode) -> Self {
        value.code().to_string()
    }
}
