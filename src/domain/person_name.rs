/// A first or last name typed into a required text field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName(String);

impl PersonName {
    /// Returns the name as typed if it has visible content.
    pub fn parse(s: String) -> Result<PersonName, String> {
        if s.trim().is_empty() {
            Err("Please fill out this field.".to_string())
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
