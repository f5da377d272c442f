use super::{EmailAddress, Interest, PersonName};
use crate::relay_client::TemplateParams;

/// Raw contact form values, keyed the way the form names its inputs.
/// Any key may be missing from a submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFormData {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub interest: Option<String>,
    pub message: Option<String>,
}

/// One shaped submission attempt, ready to be relayed.
#[derive(Debug, Clone)]
pub struct ContactSubmission {
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub email: EmailAddress,
    pub phone: String,
    pub interest: String,
    pub message: String,
}

impl ContactSubmission {
    /// Checks the required fields and shapes the rest. A rejection names the
    /// offending field, never its value.
    ///
    /// The interest is the explicit selection if there is one, then the
    /// form's own `interest` value, then empty.
    pub fn parse(form: &ContactFormData, selected: Option<Interest>) -> Result<Self, String> {
        let first_name = PersonName::parse(form.first_name.clone().unwrap_or_default())
            .map_err(|e| format!("firstName: {}", e))?;
        let last_name = PersonName::parse(form.last_name.clone().unwrap_or_default())
            .map_err(|e| format!("lastName: {}", e))?;
        let email = EmailAddress::parse(form.email.clone().unwrap_or_default())
            .map_err(|e| format!("email: {}", e))?;
        Ok(Self {
            first_name,
            last_name,
            email,
            phone: form.phone.clone().unwrap_or_default(),
            interest: resolve_interest(selected, form.interest.as_deref()),
            message: form.message.clone().unwrap_or_default(),
        })
    }

    pub fn template_params(&self) -> TemplateParams {
        TemplateParams {
            first_name: self.first_name.as_ref().to_owned(),
            last_name: self.last_name.as_ref().to_owned(),
            email: self.email.as_ref().to_owned(),
            phone: self.phone.clone(),
            interest: self.interest.clone(),
            message: self.message.clone(),
        }
    }
}

fn resolve_interest(selected: Option<Interest>, fallback: Option<&str>) -> String {
    match (selected, fallback) {
        (Some(interest), _) => interest.as_str().to_owned(),
        (None, Some(value)) => value.to_owned(),
        (None, None) => String::new(),
    }
}
