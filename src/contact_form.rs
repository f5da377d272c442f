use std::sync::Arc;

use tokio::sync::watch;

use crate::domain::{ContactFormData, ContactSubmission, Interest};
use crate::relay_client::{KeySource, RelayClient, RelayError};
use crate::utils::error_chain_fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(FailureReason),
}

impl SubmissionState {
    fn accepts_submit(&self) -> bool {
        matches!(self, SubmissionState::Idle | SubmissionState::Failed(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    ConfigurationMissing,
    RelayFailure,
}

impl FailureReason {
    /// Copy shown next to the form. Never names configuration details.
    pub fn user_message(&self) -> &'static str {
        match self {
            FailureReason::ConfigurationMissing => {
                "We can't send messages right now. Please email us directly at hello@younghub.academy."
            }
            FailureReason::RelayFailure => {
                "Something went wrong. Please try again or email us directly."
            }
        }
    }
}

#[derive(thiserror::Error)]
pub enum SubmitError {
    #[error("The email relay is not configured: no public key is available")]
    ConfigurationMissing,
    #[error("The email relay did not accept the message")]
    RelayFailure(#[source] RelayError),
}

impl std::fmt::Debug for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl SubmitError {
    pub fn reason(&self) -> FailureReason {
        match self {
            SubmitError::ConfigurationMissing => FailureReason::ConfigurationMissing,
            SubmitError::RelayFailure(_) => FailureReason::RelayFailure,
        }
    }
}

/// What a single `submit` call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Failed(FailureReason),
    /// Required fields were missing or malformed; nothing changed.
    Invalid(String),
    /// A submission is in flight or already sent; nothing changed.
    Ignored,
}

/// Everything the contact page renders from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormModel {
    pub state: SubmissionState,
    pub interest: Option<Interest>,
    /// Last submitted values, kept so a failed form stays populated.
    pub input: ContactFormData,
}

/// Controller behind the contact page form.
///
/// A mount owns one instance. At most one relay call is in flight per
/// instance, and once a message is sent the instance stays `Sent`.
pub struct ContactForm {
    relay_client: Arc<RelayClient>,
    key_source: Arc<dyn KeySource>,
    model: watch::Sender<FormModel>,
}

impl std::fmt::Debug for ContactForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactForm")
            .field("relay_client", &self.relay_client)
            .field("model", &*self.model.borrow())
            .finish()
    }
}

impl ContactForm {
    pub fn new(relay_client: Arc<RelayClient>, key_source: Arc<dyn KeySource>) -> Self {
        let (model, _) = watch::channel(FormModel::default());
        Self {
            relay_client,
            key_source,
            model,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.model.borrow().state.clone()
    }

    pub fn snapshot(&self) -> FormModel {
        self.model.borrow().clone()
    }

    /// Receiver notified on every change to the form model.
    pub fn subscribe(&self) -> watch::Receiver<FormModel> {
        self.model.subscribe()
    }

    /// Records the selector's value. Returns `false` while sending.
    pub fn select_interest(&self, interest: Interest) -> bool {
        self.model.send_if_modified(|model| {
            if model.state == SubmissionState::Sending {
                return false;
            }
            model.interest = Some(interest);
            true
        })
    }

    #[tracing::instrument(
        name = "Submit the contact form",
        skip(self, form),
        fields(interest = tracing::field::Empty)
    )]
    pub async fn submit(&self, form: ContactFormData) -> SubmitOutcome {
        if !self.model.borrow().state.accepts_submit() {
            return SubmitOutcome::Ignored;
        }
        let selected = self.model.borrow().interest;
        let submission = match ContactSubmission::parse(&form, selected) {
            Ok(submission) => submission,
            Err(e) => {
                tracing::info!(error.message = %e, "Contact form submission is incomplete");
                return SubmitOutcome::Invalid(e);
            }
        };
        let public_key = self.key_source.public_key();

        let mut params = None;
        let accepted = self.model.send_if_modified(|model| {
            if !model.state.accepts_submit() {
                return false;
            }
            let mut submission = submission;
            if let Some(interest) = model.interest {
                submission.interest = interest.as_str().to_owned();
            }
            params = Some(submission.template_params());
            model.input = form;
            model.state = if public_key.is_some() {
                SubmissionState::Sending
            } else {
                SubmissionState::Failed(FailureReason::ConfigurationMissing)
            };
            true
        });
        let Some(params) = params.filter(|_| accepted) else {
            return SubmitOutcome::Ignored;
        };
        tracing::Span::current().record("interest", &tracing::field::display(&params.interest));

        let result = match public_key {
            None => Err(SubmitError::ConfigurationMissing),
            Some(public_key) => self
                .relay_client
                .send(&params, &public_key)
                .await
                .map_err(SubmitError::RelayFailure),
        };

        match result {
            Ok(()) => {
                self.model.send_modify(|model| model.state = SubmissionState::Sent);
                tracing::info!("Contact message relayed");
                SubmitOutcome::Sent
            }
            Err(e) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Failed to relay the contact message",
                );
                let reason = e.reason();
                self.model
                    .send_modify(|model| model.state = SubmissionState::Failed(reason));
                SubmitOutcome::Failed(reason)
            }
        }
    }
}
