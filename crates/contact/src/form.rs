use strum::{AsRefStr, Display};

use crate::relay::{MessageRelay, OutboundMessage};
use crate::validate;

/// The three editable fields of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Field {
    Name,
    Email,
    Message,
}

/// Pass/fail status and human-readable explanation for one field.
///
/// Initial state is invalid with an empty detail, which the UI renders as
/// "awaiting input" rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValidation {
    pub is_valid: bool,
    pub detail: String,
}

impl FieldValidation {
    pub(crate) fn valid(detail: &str) -> Self {
        Self {
            is_valid: true,
            detail: detail.to_owned(),
        }
    }

    pub(crate) fn invalid(detail: &str) -> Self {
        Self {
            is_valid: false,
            detail: detail.to_owned(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationState {
    pub name: FieldValidation,
    pub email: FieldValidation,
    pub message: FieldValidation,
}

/// Lifecycle of one submit attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, AsRefStr)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

/// State of one mounted contact form.
///
/// Entirely transient: created empty, discarded with the form. Validations
/// are a pure function of the field text and never depend on submission
/// state or on the other fields.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub validation: ValidationState,
    pub submission: SubmissionStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field's text and recompute its validation.
    ///
    /// Editing always returns the submission state to [`SubmissionStatus::Idle`]
    /// so a stale success/error banner clears as soon as the user resumes typing.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();

        match field {
            Field::Name => {
                self.validation.name = validate::name(&value);
                self.name = value;
            }
            Field::Email => {
                self.validation.email = validate::email(&value);
                self.email = value;
            }
            Field::Message => {
                self.validation.message = validate::message(&value);
                self.message = value;
            }
        }

        self.submission = SubmissionStatus::Idle;
    }

    pub fn is_valid(&self) -> bool {
        self.validation.name.is_valid
            && self.validation.email.is_valid
            && self.validation.message.is_valid
    }

    /// Run one submit attempt to completion.
    ///
    /// Transitions to `Submitting` before the first await and resolves to
    /// `Success` or `Error` before returning; no partial state is observable.
    /// All three fields are re-validated first — if any fails, the relay is
    /// never contacted. On success the form resets to its initial state; on
    /// delivery failure the field text is kept so the user can retry without
    /// retyping. The caller must disable the submit trigger while `Submitting`.
    pub async fn submit<R>(&mut self, relay: &R)
    where
        R: MessageRelay + ?Sized,
    {
        self.submission = SubmissionStatus::Submitting;

        self.validation.name = validate::name(&self.name);
        self.validation.email = validate::email(&self.email);
        self.validation.message = validate::message(&self.message);

        if !self.is_valid() {
            self.submission = SubmissionStatus::Error;
            return;
        }

        let outbound = OutboundMessage {
            from_name: self.name.clone(),
            from_email: self.email.clone(),
            message: self.message.clone(),
        };

        match relay.deliver(&outbound).await {
            Ok(()) => {
                *self = Self {
                    submission: SubmissionStatus::Success,
                    ..Self::default()
                };
            }
            Err(err) => {
                tracing::warn!(error = %err, "contact message delivery failed");
                self.submission = SubmissionStatus::Error;
            }
        }
    }
}
