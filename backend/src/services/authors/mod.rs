//! # Author Service Module
//!
//! Routes every request under `/authors` to its handler.
//!
//! ## Sub-modules:
//! - `list`: the list page, ordered by family name.
//! - `detail`: one author and their books, fetched concurrently.
//! - `create`: the creation form and its submission.
//! - `placeholders`: delete and update endpoints that only return a notice.
//! - `validation`: the ordered validation pass used by `create`.

mod create;
mod detail;
mod list;
mod placeholders;
pub mod validation;

use actix_web::web::{get, post, scope};
use actix_web::Scope;
use common::model::author::AUTHORS_PATH;

/// Configures the `/authors` scope.
///
/// # Registered Routes:
///
/// *   **`GET /authors`**: `list::process`
/// *   **`POST /authors`**: `create::process`. Form fields `first_name`,
///     `family_name`, `date_of_birth`, `date_of_death`.
/// *   **`GET /authors/new`**: `create::form`. Registered before
///     `/{author_id}` so `new` is never taken for an id.
/// *   **`GET /authors/{author_id}`**: `detail::process`, `404` for an
///     unknown id.
/// *   **`GET|POST /authors/{author_id}/delete`** and
///     **`GET|POST /authors/{author_id}/edit`**: placeholder notices.
pub fn configure_routes() -> Scope {
    scope(AUTHORS_PATH)
        .route("", get().to(list::process))
        .route("", post().to(create::process))
        .route("/new", get().to(create::form))
        .route("/{author_id}", get().to(detail::process))
        .route("/{author_id}/delete", get().to(placeholders::delete_form))
        .route("/{author_id}/delete", post().to(placeholders::delete))
        .route("/{author_id}/edit", get().to(placeholders::update_form))
        .route("/{author_id}/edit", post().to(placeholders::update))
}
