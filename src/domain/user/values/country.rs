//! Country of residence enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Enumerated;
use crate::domain::foundation::{Field, ValidationError};

/// Supported countries, keyed by ISO 3166-1 alpha-2 code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Country {
    Canada,
    Mexico,
    UnitedStates,
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

static ALL: [Country; 16] = [
    Country::Canada,
    Country::Mexico,
    Country::UnitedStates,
    Country::Argentina,
    Country::Bolivia,
    Country::Brazil,
    Country::UnitedKingdom,
    Country::France,
    Country::Germany,
    Country::Spain,
    Country::Italy,
    Country::Japan,
    Country::China,
    Country::India,
    Country::Australia,
    Country::SouthKorea,
];

impl Enumerated for Country {
    const FIELD: Field = Field::Country;

    fn list_all() -> &'static [Self] {
        &ALL
    }

    fn code(&self) -> &'static str {
        match self {
            Country::Canada => "CA",
            Country::Mexico => "MX",
            Country::UnitedStates => "US",
            Country::Argentina => "AR",
            Country::Bolivia => "BO",
            Country::Brazil => "BR",
            Country::UnitedKingdom => "GB",
            Country::France => "FR",
            Country::Germany => "DE",
            Country::Spain => "ES",
            Country::Italy => "IT",
            Country::Japan => "JP",
            Country::China => "CN",
            Country::India => "IN",
            Country::Australia => "AU",
            Country::SouthKorea => "KR",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            Country::Canada => "Canada",
            Country::Mexico => "Mexico",
            Country::UnitedStates => "United States",
            Country::Argentina => "Argentina",
            Country::Bolivia => "Bolivia",
            Country::Brazil => "Brazil",
            Country::UnitedKingdom => "United Kingdom",
            Country::France => "France",
            Country::Germany => "Germany",
            Country::Spain => "Spain",
            Country::Italy => "Italy",
            Country::Japan => "Japan",
            Country::China => "China",
            Country::India => "India",
            Country::Australia => "Australia",
            Country::SouthKorea => "South Korea",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Country {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Country {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Country> for String {
    fn from(value: Country) -> Self {
        value.code().to_string()
    }
}
