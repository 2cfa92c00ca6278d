//! src/domain/contact_name.rs

use crate::domain::visible_length;

pub const NAME_MIN_LENGTH: usize = 2;
pub const NAME_ERROR: &str = "Name must be at least 2 characters";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactName(String);

impl ContactName {
    pub fn parse(s: String) -> Result<ContactName, String> {
        if visible_length(&s) < NAME_MIN_LENGTH {
            return Err(NAME_ERROR.to_string());
        }

        Ok(Self(s))
    }
}

impl AsRef<str> for ContactName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use claim::{assert_err, assert_ok};

    use super::ContactName;

    #[test]
    fn a_two_grapheme_name_is_valid() {
        assert_ok!(ContactName::parse("Jo".to_string()));
    }

    #[test]
    fn a_single_character_name_is_rejected() {
        assert_err!(ContactName::parse("J".to_string()));
    }

    #[test]
    fn whitespace_only_names_are_rejected() {
        assert_err!(ContactName::parse("     ".to_string()));
    }

    #[test]
    fn empty_string_is_rejected() {
        assert_err!(ContactName::parse("".to_string()));
    }

    #[test]
    fn a_valid_name_is_kept_verbatim() {
        let name = ContactName::parse(" Ursula Le Guin ".to_string()).unwrap();
        assert_eq!(name.as_ref(), " Ursula Le Guin ");
    }
}
