use actix_web::{web, HttpResponse};
use common::model::author::AuthorView;
use serde_json::json;

use crate::error::AppResult;
use crate::store::StoreArc;
use crate::views::Views;

/// `GET /authors`: every author, ordered by family name.
pub(crate) async fn process(
    store: web::Data<StoreArc>,
    views: web::Data<Views>,
) -> AppResult<HttpResponse> {
    let authors = store.list_authors().await?;
    let author_list: Vec<AuthorView> = authors.iter().map(AuthorView::from).collect();

    views.render(
        "author_list",
        &json!({
            "title": "Author List",
            "author_list": author_list,
        }),
    )
}
