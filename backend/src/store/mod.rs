//! # Catalog Store
//!
//! The persistence seam of the catalog. Handlers never open connections
//! themselves; they receive a `StoreArc` through `web::Data` and call the
//! operations below.
//!
//! ## Implementations
//! - `sqlite`: the production store. Every operation opens its own
//!   connection on the blocking thread pool, so independent queries issued
//!   together run in parallel.
//! - `memory`: a map behind a `RwLock`, used by tests and by
//!   `database.kind = "memory"`.

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use common::model::author::{Author, NewAuthor};
use common::model::book::{BookSummary, NewBook};

use crate::error::AppResult;

pub mod memory;
pub mod sqlite;

#[async_trait]
pub trait CatalogStore: Debug {
    /// Stores a new author and returns it with its freshly assigned id.
    async fn insert_author(&self, author: NewAuthor) -> AppResult<Author>;

    /// All authors, ascending by family name, then first name, then id.
    async fn list_authors(&self) -> AppResult<Vec<Author>>;

    async fn find_author(&self, id: &str) -> AppResult<Option<Author>>;

    /// Title and summary of every book whose author is `author_id`, ordered
    /// by title.
    async fn find_books_by_author(&self, author_id: &str) -> AppResult<Vec<BookSummary>>;

    /// Stores a book and returns its id.
    async fn insert_book(&self, book: NewBook) -> AppResult<String>;
}

pub type StoreArc = Arc<dyn CatalogStore + Send + Sync>;

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

fn author_order(a: &Author, b: &Author) -> std::cmp::Ordering {
    a.family_name
        .cmp(&b.family_name)
        .then_with(|| a.first_name.cmp(&b.first_name))
        .then_with(|| a.id.cmp(&b.id))
}
