use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::template::ServerErrorTemplate;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Template error: {0}")]
    TemplateError(#[from] askama::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let AppError::TemplateError(err) = &self;
        tracing::error!("Failed to render template: {err}");

        match ServerErrorTemplate.render() {
            Ok(html) => (StatusCode::INTERNAL_SERVER_ERROR, Html(html)).into_response(),
            Err(err) => {
                tracing::error!("Failed to render error page: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred. Please try again later.",
                )
                    .into_response()
            }
        }
    }
}
