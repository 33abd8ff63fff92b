//! # Author Detail
//!
//! `GET /authors/{author_id}` shows one author together with the books they
//! wrote. The author lookup and the book lookup do not depend on each other,
//! so both are started at once and joined with `try_join`; the first failure
//! aborts the join and becomes the response. Only after both complete is a
//! missing author turned into `AppError::AuthorNotFound`.

use actix_web::{web, HttpResponse};
use common::model::author::AuthorView;
use futures_util::future::try_join;
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::store::StoreArc;
use crate::views::Views;

pub(crate) async fn process(
    author_id: web::Path<String>,
    store: web::Data<StoreArc>,
    views: web::Data<Views>,
) -> AppResult<HttpResponse> {
    let author_id = author_id.into_inner();

    let (author, author_books) = try_join(
        store.find_author(&author_id),
        store.find_books_by_author(&author_id),
    )
    .await?;
    let author = author.ok_or(AppError::AuthorNotFound)?;

    views.render(
        "author_detail",
        &json!({
            "title": "Author Detail",
            "author": AuthorView::from(&author),
            "author_books": author_books,
        }),
    )
}
