//! # Author Creation
//!
//! Two endpoints share the `author_form` template:
//!
//! *   **`GET /authors/new`** renders the empty form.
//! *   **`POST /authors`** runs the submitted fields through
//!     `AuthorValidator`. A rejected submission is answered with `200 OK`
//!     and the form again, filled with the sanitized values and the list of
//!     errors. An accepted one is stored and the client is redirected
//!     (`302 Found`) to the new author's page.

use actix_web::http::header;
use actix_web::{web, HttpResponse};
use common::requests::AuthorForm;
use log::{info, warn};
use serde_json::json;

use super::validation::AuthorValidator;
use crate::error::AppResult;
use crate::store::StoreArc;
use crate::views::Views;

const FORM_TITLE: &str = "Create Author";

pub(crate) async fn form(views: web::Data<Views>) -> AppResult<HttpResponse> {
    views.render("author_form", &json!({ "title": FORM_TITLE }))
}

pub(crate) async fn process(
    payload: web::Form<AuthorForm>,
    store: web::Data<StoreArc>,
    views: web::Data<Views>,
    validator: web::Data<AuthorValidator>,
) -> AppResult<HttpResponse> {
    match validator.validate(payload.into_inner()) {
        Ok(new_author) => {
            let author = store.insert_author(new_author).await?;
            info!("Created author {} ({})", author.full_name(), author.id);
            Ok(HttpResponse::Found()
                .insert_header((header::LOCATION, author.url()))
                .finish())
        }
        Err(rejected) => {
            warn!(
                "Rejected author form with {} error(s)",
                rejected.errors.len()
            );
            views.render(
                "author_form",
                &json!({
                    "title": FORM_TITLE,
                    "author": rejected.form,
                    "errors": rejected.errors,
                }),
            )
        }
    }
}
