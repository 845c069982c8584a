use askama::Template;
use axum::{
    extract::{Form, State},
    response::{Html, IntoResponse},
};
use neonfolio_contact::{ContactForm, Field};
use serde::Deserialize;

use crate::error::AppError;
use crate::routes::AppState;
use crate::routes::index::IndexTemplate;

#[derive(Deserialize)]
pub struct ActionInput {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// POST /contact - run one submit attempt and re-render the page around the
/// resulting form state. Validation and delivery failures are form states,
/// not HTTP errors; the response is always the page.
pub async fn action(
    State(app_state): State<AppState>,
    Form(input): Form<ActionInput>,
) -> Result<impl IntoResponse, AppError> {
    let mut form = ContactForm::new();
    form.update_field(Field::Name, input.name);
    form.update_field(Field::Email, input.email);
    form.update_field(Field::Message, input.message);

    form.submit(app_state.relay.as_ref()).await;

    let template = IndexTemplate::with_form(form);

    Ok(Html(template.render()?))
}
