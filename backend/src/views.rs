//! # Server-side Views
//!
//! Handlebars templates are embedded into the binary from
//! `backend/templates`. Files directly under that directory are registered
//! as templates named after their file stem (`author_list.hbs` becomes
//! `author_list`); files under `templates/partials` are registered as
//! partials and included with `{{> name}}`.

use actix_web::http::header::ContentType;
use actix_web::HttpResponse;
use handlebars::Handlebars;
use include_dir::{include_dir, Dir, File};
use log::debug;
use serde::Serialize;

use crate::error::AppResult;

static TEMPLATE_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/templates");

const TEMPLATE_EXTENSION: &str = "hbs";
const PARTIALS_DIR: &str = "partials";

pub struct Views {
    registry: Handlebars<'static>,
}

impl Views {
    pub fn load() -> AppResult<Self> {
        let mut registry = Handlebars::new();

        if let Some(partials) = TEMPLATE_DIR.get_dir(PARTIALS_DIR) {
            for (name, source) in partials.files().filter_map(|file| template_source(file)) {
                debug!("Registering partial {name}");
                registry.register_partial(name, source)?;
            }
        }
        for (name, source) in TEMPLATE_DIR.files().filter_map(|file| template_source(file)) {
            debug!("Registering template {name}");
            registry.register_template_string(name, source)?;
        }

        Ok(Self { registry })
    }

    pub fn render_string<T: Serialize>(&self, name: &str, data: &T) -> AppResult<String> {
        Ok(self.registry.render(name, data)?)
    }

    /// Renders `name` into a `200 OK` HTML response.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> AppResult<HttpResponse> {
        let body = self.render_string(name, data)?;
        Ok(HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(body))
    }
}

fn template_source<'a>(file: &'a File<'a>) -> Option<(&'a str, &'a str)> {
    let path = file.path();
    if path.extension()?.to_str()? != TEMPLATE_EXTENSION {
        return None;
    }
    Some((path.file_stem()?.to_str()?, file.contents_utf8()?))
}
