mod contact_submission;
mod email;
mod interest;
mod person_name;

pub use contact_submission::{ContactFormData, ContactSubmission};
pub use email::EmailAddress;
pub use interest::Interest;
pub use person_name::PersonName;
