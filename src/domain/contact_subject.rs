use crate::domain::visible_length;

pub const SUBJECT_MIN_LENGTH: usize = 5;
pub const SUBJECT_ERROR: &str = "Subject must be at least 5 characters";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubject(String);

impl ContactSubject {
    pub fn parse(s: String) -> Result<ContactSubject, String> {
        if visible_length(&s) < SUBJECT_MIN_LENGTH {
            return Err(SUBJECT_ERROR.to_string());
        }
        Ok(Self(s))
    }
}

impl AsRef<str> for ContactSubject {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use claim::{assert_err, assert_ok};

    use super::ContactSubject;

    #[test]
    fn a_five_character_subject_is_valid() {
        assert_ok!(ContactSubject::parse("Hello".to_string()));
    }

    #[test]
    fn a_short_subject_is_rejected() {
        assert_err!(ContactSubject::parse("Hi".to_string()));
    }

    #[test]
    fn padding_does_not_count_towards_the_minimum() {
        assert_err!(ContactSubject::parse("  Hey  ".to_string()));
    }
}
