//! Stylesheets and other static files, embedded from `backend/static` at
//! compile time and served under `/static`.

use actix_web::web::{get, scope};
use actix_web::{web, HttpResponse, Scope};
use include_dir::{include_dir, Dir};
use mime_guess::from_path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static");

const API_PATH: &str = "/static";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/{file_path:.*}", get().to(serve_embedded))
}

async fn serve_embedded(file_path: web::Path<String>) -> HttpResponse {
    let file_path = file_path.into_inner();

    match STATIC_DIR.get_file(&file_path) {
        Some(file) => {
            let mime = from_path(&file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => HttpResponse::NotFound().body("Not Found"),
    }
}
