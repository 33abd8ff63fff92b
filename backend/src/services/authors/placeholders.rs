//! Delete and update are not available yet. Each endpoint answers with a
//! fixed plain-text notice instead of touching the store.

use actix_web::http::header::ContentType;
use actix_web::HttpResponse;

fn not_implemented(action: &str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(format!("NOT IMPLEMENTED: Author {action}"))
}

pub(crate) async fn delete_form() -> HttpResponse {
    not_implemented("delete GET")
}

pub(crate) async fn delete() -> HttpResponse {
    not_implemented("delete POST")
}

pub(crate) async fn update_form() -> HttpResponse {
    not_implemented("update GET")
}

pub(crate) async fn update() -> HttpResponse {
    not_implemented("update POST")
}
