use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use neonfolio_contact::{
    ContactForm, Field, MessageRelay, OutboundMessage, RelayError, SubmissionStatus,
};

/// Relay stub that records every delivered message and can be told to fail.
#[derive(Default)]
struct RecordingRelay {
    fail: bool,
    calls: AtomicUsize,
    last: Mutex<Option<OutboundMessage>>,
}

impl RecordingRelay {
    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MessageRelay for RecordingRelay {
    async fn deliver(&self, message: &OutboundMessage) -> Result<(), RelayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some(message.clone());

        if self.fail {
            return Err(RelayError::Rejected(reqwest::StatusCode::BAD_GATEWAY));
        }

        Ok(())
    }
}

fn filled_form() -> ContactForm {
    let mut form = ContactForm::new();
    form.update_field(Field::Name, "Al");
    form.update_field(Field::Email, "al@x.org");
    form.update_field(Field::Message, "Hello there friend");
    form
}

#[test]
fn new_form_is_empty_and_idle() {
    let form = ContactForm::new();

    assert!(form.name.is_empty());
    assert!(form.email.is_empty());
    assert!(form.message.is_empty());
    assert!(!form.validation.name.is_valid);
    assert!(!form.validation.email.is_valid);
    assert!(!form.validation.message.is_valid);
    assert!(form.validation.name.detail.is_empty());
    assert_eq!(form.submission, SubmissionStatus::Idle);
}

#[test]
fn update_field_revalidates_only_its_own_field() {
    let mut form = ContactForm::new();
    form.update_field(Field::Name, "Al");

    assert!(form.validation.name.is_valid);
    assert_eq!(form.validation.name.detail, "Valid name format");
    // other fields untouched
    assert!(!form.validation.email.is_valid);
    assert!(form.validation.email.detail.is_empty());
    assert!(!form.validation.message.is_valid);
}

#[tokio::test]
async fn submit_with_invalid_fields_never_contacts_the_relay() {
    let relay = RecordingRelay::default();

    let mut form = ContactForm::new();
    form.update_field(Field::Name, "A");
    form.update_field(Field::Email, "bad-email");
    form.update_field(Field::Message, "hi");

    form.submit(&relay).await;

    assert_eq!(form.submission, SubmissionStatus::Error);
    assert_eq!(relay.calls(), 0);
    assert_eq!(
        form.validation.name.detail,
        "Name must be at least 2 characters"
    );
    assert_eq!(form.validation.email.detail, "Invalid email format");
    assert_eq!(
        form.validation.message.detail,
        "Message must be at least 10 characters"
    );
}

#[tokio::test]
async fn submit_revalidates_even_without_prior_edits() {
    // Fields set directly, never passed through update_field: submit must
    // still validate them before deciding whether to send.
    let relay = RecordingRelay::default();

    let mut form = ContactForm::new();
    form.name = "Al".to_owned();
    form.email = "al@x.org".to_owned();
    form.message = "Hello there friend".to_owned();

    form.submit(&relay).await;

    assert_eq!(form.submission, SubmissionStatus::Success);
    assert_eq!(relay.calls(), 1);
}

#[tokio::test]
async fn successful_submit_resets_the_form() {
    let relay = RecordingRelay::default();
    let mut form = filled_form();

    form.submit(&relay).await;

    assert_eq!(form.submission, SubmissionStatus::Success);
    assert_eq!(relay.calls(), 1);

    let sent = relay.last.lock().unwrap().clone().unwrap();
    assert_eq!(sent.from_name, "Al");
    assert_eq!(sent.from_email, "al@x.org");
    assert_eq!(sent.message, "Hello there friend");

    // fields and validations back to initial state
    assert!(form.name.is_empty());
    assert!(form.email.is_empty());
    assert!(form.message.is_empty());
    assert!(!form.validation.name.is_valid);
    assert!(form.validation.name.detail.is_empty());
    assert!(!form.validation.email.is_valid);
    assert!(!form.validation.message.is_valid);
}

#[tokio::test]
async fn failed_delivery_keeps_the_fields_for_retry() {
    let relay = RecordingRelay::failing();
    let mut form = filled_form();

    form.submit(&relay).await;

    assert_eq!(form.submission, SubmissionStatus::Error);
    assert_eq!(relay.calls(), 1);
    assert_eq!(form.name, "Al");
    assert_eq!(form.email, "al@x.org");
    assert_eq!(form.message, "Hello there friend");
    assert!(form.validation.name.is_valid);
    assert!(form.validation.email.is_valid);
    assert!(form.validation.message.is_valid);

    // retry without retyping succeeds once the relay recovers
    let relay = RecordingRelay::default();
    form.submit(&relay).await;
    assert_eq!(form.submission, SubmissionStatus::Success);
}

#[tokio::test]
async fn editing_after_a_submit_attempt_returns_to_idle() {
    let relay = RecordingRelay::failing();
    let mut form = filled_form();

    form.submit(&relay).await;
    assert_eq!(form.submission, SubmissionStatus::Error);

    form.update_field(Field::Message, "Hello there friend!");
    assert_eq!(form.submission, SubmissionStatus::Idle);

    let relay = RecordingRelay::default();
    form.submit(&relay).await;
    assert_eq!(form.submission, SubmissionStatus::Success);

    form.update_field(Field::Name, "Bo");
    assert_eq!(form.submission, SubmissionStatus::Idle);
}
