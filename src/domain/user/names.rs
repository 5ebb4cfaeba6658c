//! Name-shape and free-text rules that belong to the aggregate rather
//! than to a single value object.

use crate::domain::foundation::{Field, ValidationError};

pub const NAME_MAX_LENGTH: usize = 100;
pub const INFORMATION_MAX_LENGTH: usize = 500;

/// Checks first and last name together.
///
/// Order: first empty, last empty, first too long, last too long,
/// first shape, last shape.
pub fn validate_full_name(first_name: &str, last_name: &str) -> Result<(), ValidationError> {
    check_present(Field::FirstName, first_name)?;
    check_present(Field::LastName, last_name)?;
    check_length(Field::FirstName, first_name)?;
    check_length(Field::LastName, last_name)?;
    check_shape(Field::FirstName, first_name)?;
    check_shape(Field::LastName, last_name)?;
    Ok(())
}

/// Checks a single name in the same order used for the pair.
pub fn validate_name(field: Field, value: &str) -> Result<(), ValidationError> {
    check_present(field, value)?;
    check_length(field, value)?;
    check_shape(field, value)
}

/// Checks the profile blurb length.
pub fn validate_information(value: &str) -> Result<(), ValidationError> {
    let length = value.chars().count();
    if length > INFORMATION_MAX_LENGTH {
        return Err(ValidationError::too_long(
            Field::Information,
            INFORMATION_MAX_LENGTH,
            length,
        ));
    }
    Ok(())
}

fn check_present(field: Field, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::empty(field));
    }
    Ok(())
}

fn check_length(field: Field, value: &str) -> Result<(), ValidationError> {
    let length = value.chars().count();
    if length > NAME_MAX_LENGTH {
        return Err(ValidationError::too_long(field, NAME_MAX_LENGTH, length));
    }
    Ok(())
}

fn check_shape(field: Field, value: &str) -> Result<(), ValidationError> {
    if !is_letters_and_single_spaces(value) {
        return Err(ValidationError::invalid_format(
            field,
            "only letters separated by single spaces are allowed",
        ));
    }
    Ok(())
}

/// Letters with single interior spaces; surrounding whitespace is ignored.
fn is_letters_and_single_spaces(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return false;
    }

    let mut previous_was_space = false;
    for c in trimmed.chars() {
        if c.is_alphabetic() {
            previous_was_space = false;
        } else if c == ' ' && !previous_was_space {
            previous_was_space = true;
        } else {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_simple_and_compound_names() {
        assert!(validate_full_name("John", "Doe").is_ok());
        assert!(validate_full_name("Mary Ann", "de la Cruz").is_ok());
        assert!(validate_full_name("José", "Müller").is_ok());
    }

    #[test]
    fn empty_first_name_wins_over_everything() {
        assert_eq!(
            validate_full_name("", "").unwrap_err(),
            ValidationError::empty(Field::FirstName)
        );
    }

    #[test]
    fn empty_last_name_wins_over_long_first_name() {
        let long = "a".repeat(101);
        assert_eq!(
            validate_full_name(&long, "").unwrap_err(),
            ValidationError::empty(Field::LastName)
        );
    }

    #[test]
    fn long_last_name_wins_over_bad_first_name_shape() {
        let long = "a".repeat(101);
        assert_eq!(
            validate_full_name("J0hn", &long).unwrap_err(),
            ValidationError::too_long(Field::LastName, 100, 101)
        );
    }

    #[test]
    fn first_name_shape_checked_before_last_name_shape() {
        let err = validate_full_name("J0hn", "D0e").unwrap_err();
        assert_eq!(err.field(), Field::FirstName);
    }

    #[test]
    fn rejects_double_spaces_digits_and_punctuation() {
        for bad in ["John  Paul", "J0hn", "O'Brien", "Anne-Marie", "   "] {
            assert!(
                matches!(
                    validate_name(Field::FirstName, bad),
                    Err(ValidationError::InvalidFormat { .. })
                ),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn surrounding_spaces_are_tolerated() {
        assert!(validate_name(Field::LastName, " Doe ").is_ok());
    }

    #[test]
    fn name_at_limit_is_accepted() {
        assert!(validate_name(Field::FirstName, &"a".repeat(100)).is_ok());
    }

    #[test]
    fn information_limit() {
        assert!(validate_information(&"x".repeat(500)).is_ok());
        assert_eq!(
            validate_information(&"x".repeat(501)).unwrap_err(),
            ValidationError::too_long(Field::Information, 500, 501)
        );
    }
}
