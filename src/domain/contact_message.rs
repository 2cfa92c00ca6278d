use crate::domain::visible_length;

pub const MESSAGE_MIN_LENGTH: usize = 10;
pub const MESSAGE_ERROR: &str = "Message must be at least 10 characters";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage(String);

impl ContactMessage {
    pub fn parse(s: String) -> Result<ContactMessage, String> {
        if visible_length(&s) < MESSAGE_MIN_LENGTH {
            return Err(MESSAGE_ERROR.to_string());
        }
        Ok(Self(s))
    }
}

impl AsRef<str> for ContactMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
