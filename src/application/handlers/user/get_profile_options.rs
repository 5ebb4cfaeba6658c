//! GetProfileOptionsHandler - Query handler for the profile form choices.

use serde::Serialize;

use crate::domain::user::{Country, DialCode, Enumerated, Gender, Language};

/// One selectable value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionView {
    pub code: &'static str,
    pub name: &'static str,
}

/// Every enumerated value a profile may hold, in catalogue order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileOptions {
    pub genders: Vec<OptionView>,
    pub countries: Vec<OptionView>,
    pub languages: Vec<OptionView>,
    pub dial_codes: Vec<OptionView>,
}

/// Handler for listing profile options.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetProfileOptionsHandler;

impl GetProfileOptionsHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self) -> ProfileOptions {
        ProfileOptions {
            genders: options::<Gender>(),
            countries: options::<Country>(),
            languages: options::<Language>(),
            dial_codes: options::<DialCode>(),
        }
    }
}

fn options<T: Enumerated>() -> Vec<OptionView> {
    T::list_all()
        .iter()
        .map(|value| OptionView {
            code: value.code(),
            name: value.display_name(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_catalogue() {
        let options = GetProfileOptionsHandler::new().handle();

        assert_eq!(options.genders.len(), 3);
        assert_eq!(options.countries.len(), 16);
        assert_eq!(options.languages.len(), 10);
        assert_eq!(options.dial_codes.len(), 15);
    }

    #[test]
    fn entries_carry_code_and_name() {
        let options = GetProfileOptionsHandler::new().handle();

        assert_eq!(
            options.genders[0],
            OptionView {
                code: "M",
                name: "Male"
            }
        );
        assert!(options
            .dial_codes
            .contains(&OptionView {
                code: "+591",
                name: "Bolivia"
            }));
    }
}
