//! HTTP surface of the catalog.
//!
//! `AppState` bundles the handles every handler may ask for (`StoreArc`,
//! `Views`, `AuthorValidator`) and registers them together with all routes,
//! so `main` and the handler tests build the application the same way.

pub mod assets;
pub mod authors;

use actix_web::http::header;
use actix_web::web::{self, get};
use actix_web::HttpResponse;
use common::model::author::AUTHORS_PATH;

use crate::error::AppResult;
use crate::services::authors::validation::AuthorValidator;
use crate::store::StoreArc;
use crate::views::Views;

#[derive(Clone)]
pub struct AppState {
    store: web::Data<StoreArc>,
    views: web::Data<Views>,
    validator: web::Data<AuthorValidator>,
}

impl AppState {
    pub fn new(store: StoreArc) -> AppResult<Self> {
        Ok(Self {
            store: web::Data::new(store),
            views: web::Data::new(Views::load()?),
            validator: web::Data::new(AuthorValidator::new()?),
        })
    }

    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.store.clone())
            .app_data(self.views.clone())
            .app_data(self.validator.clone())
            .route("/", get().to(index))
            .service(assets::configure_routes())
            .service(authors::configure_routes());
    }
}

async fn index() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, AUTHORS_PATH))
        .finish()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::{header, StatusCode};
    use actix_web::{test, App};

    use super::AppState;
    use crate::store::memory::MemoryStore;

    #[actix_web::test]
    async fn index_redirects_to_authors() {
        let state = AppState::new(Arc::new(MemoryStore::new())).unwrap();
        let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/authors");
    }
}
