//! Preferred language enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Enumerated;
use crate::domain::foundation::{Field, ValidationError};

/// Supported interface languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Language {
    English,
    Spanish,
    French,
    German,
    Italian,
    Portuguese,
    Japanese,
    Chinese,
    Korean,
    Hindi,
}

static ALL: [Language; 10] = [
    Language::English,
    Language::Spanish,
    Language::French,
    Language::German,
    Language::Italian,
    Language::Portuguese,
    Language::Japanese,
    Language::Chinese,
    Language::Korean,
    Language::Hindi,
];

impl Enumerated for Language {
    const FIELD: Field = Field::Language;

    fn list_all() -> &'static [Self] {
        &ALL
    }

    fn code(&self) -> &'static str {
        match self {
            Language::English => "EN",
            Language::Spanish => "ES",
            Language::French => "FR",
            Language::German => "DE",
            Language::Italian => "IT",
            Language::Portuguese => "PT",
            Language::Japanese => "JA",
            Language::Chinese => "CH",
            Language::Korean => "KO",
            Language::Hindi => "HI",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
            Language::Italian => "Italian",
            Language::Portuguese => "Portuguese",
            Language::Japanese => "Japanese",
            Language::Chinese => "Chinese",
            Language::Korean => "Korean",
            Language::Hindi => "Hindi",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Language {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Language {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Language> for String {
    fn from(value: Language) -> Self {
        value.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::values::enumerated_tests::*;

    #[test]
    fn satisfies_catalogue_contract() {
        assert_catalogue_contract::<Language>();
        assert_case_sensitive::<Language>();
    }

    #[test]
    fn parses_code_and_name() {
        assert_eq!(Language::parse("ES").unwrap(), Language::Spanish);
        assert_eq!(Language::parse("Spanish").unwrap(), Language::Spanish);
        assert_eq!(Language::parse("CH").unwrap(), Language::Chinese);
    }

    #[test]
    fn rejects_unknown_languages() {
        assert_eq!(
            Language::parse("Klingon").unwrap_err(),
            ValidationError::not_a_member(Field::Language, "Klingon")
        );
        assert!(Language::parse("spanish").is_err());
        assert!(Language::parse("ZH").is_err());
    }

    #[test]
    fn serializes_as_code() {
        assert_eq!(serde_json::to_string(&Language::Korean).unwrap(), "\"KO\"");
    }
}
