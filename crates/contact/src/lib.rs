//! Contact form state machine and outbound message relay.
//!
//! [`ContactForm`] owns the mutable state of one mounted form: field text,
//! per-field validation and the submission lifecycle. Delivery goes through
//! the [`MessageRelay`] trait so the web layer and tests can swap transports.

mod form;
pub mod relay;
pub mod validate;

pub use form::{ContactForm, Field, FieldValidation, SubmissionStatus, ValidationState};
pub use relay::{EmailJsRelay, MessageRelay, OutboundMessage, RelayCredentials, RelayError};
