use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use common::model::author::{Author, NewAuthor};
use common::model::book::{BookSummary, NewBook};
use tokio::sync::RwLock;

use super::{author_order, new_id, CatalogStore};
use crate::error::AppResult;

#[derive(Debug, Clone)]
struct BookRecord {
    title: String,
    summary: String,
    author_id: String,
}

/// In-memory catalog. Cloning shares the underlying data.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    authors: Arc<RwLock<HashMap<String, Author>>>,
    books: Arc<RwLock<HashMap<String, BookRecord>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn insert_author(&self, author: NewAuthor) -> AppResult<Author> {
        let author = author.with_id(new_id());
        self.authors
            .write()
            .await
            .insert(author.id.clone(), author.clone());
        Ok(author)
    }

    async fn list_authors(&self) -> AppResult<Vec<Author>> {
        let mut authors: Vec<Author> = self.authors.read().await.values().cloned().collect();
        authors.sort_by(author_order);
        Ok(authors)
    }

    async fn find_author(&self, id: &str) -> AppResult<Option<Author>> {
        Ok(self.authors.read().await.get(id).cloned())
    }

    async fn find_books_by_author(&self, author_id: &str) -> AppResult<Vec<BookSummary>> {
        let books = self.books.read().await;
        let mut matched: Vec<(&String, &BookRecord)> = books
            .iter()
            .filter(|(_, book)| book.author_id == author_id)
            .collect();
        matched.sort_by(|a, b| a.1.title.cmp(&b.1.title).then_with(|| a.0.cmp(b.0)));
        Ok(matched
            .into_iter()
            .map(|(_, book)| BookSummary {
                title: book.title.clone(),
                summary: book.summary.clone(),
            })
            .collect())
    }

    async fn insert_book(&self, book: NewBook) -> AppResult<String> {
        let id = new_id();
        self.books.write().await.insert(
            id.clone(),
            BookRecord {
                title: book.title,
                summary: book.summary,
                author_id: book.author_id,
            },
        );
        Ok(id)
    }
}
