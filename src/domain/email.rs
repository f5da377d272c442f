use validator::validate_email;

/// An address accepted by an `<input type="email">` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn parse(s: String) -> Result<EmailAddress, String> {
        let s = s.trim();
        if validate_email(s) {
            Ok(Self(s.to_owned()))
        } else {
            Err("Please enter a valid email address.".to_string())
        }
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
