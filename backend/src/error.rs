//! # Application Errors
//!
//! Every handler returns `AppResult`. Failures coming from the store, the
//! blocking thread pool or the view layer are not recovered: they reach
//! actix through the `ResponseError` impl below, which logs them and renders
//! a generic error page. `AuthorNotFound` is the one condition a client can
//! tell apart, surfaced as `404 Not Found`.
//!
//! Form validation failures never become an `AppError`; the create handler
//! re-renders the form instead.

use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Author not found")]
    AuthorNotFound,

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("blocking task failed: {0}")]
    Blocking(#[from] tokio::task::JoinError),

    #[error("template error: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("render error: {0}")]
    Render(#[from] handlebars::RenderError),

    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::AuthorNotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let message = if status.is_server_error() {
            error!("{}", self);
            status
                .canonical_reason()
                .unwrap_or("Internal Server Error")
                .to_string()
        } else {
            self.to_string()
        };

        HttpResponse::build(status)
            .content_type(ContentType::html())
            .body(error_page(status, &message))
    }
}

fn error_page(status: StatusCode, message: &str) -> String {
    let message = handlebars::html_escape(message);
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>{message}</title>\
         <link rel=\"stylesheet\" href=\"/static/catalog.css\"></head>\n\
         <body><main><h1>{message}</h1><h2>{}</h2><p><a href=\"/authors\">Back to authors</a></p></main></body>\n</html>\n",
        status.as_u16()
    )
}
