//! SQLite-backed catalog.
//!
//! The store only remembers the database path. Each operation opens a fresh
//! connection inside `spawn_blocking`, runs its statements and drops the
//! connection again, so concurrent requests never share a connection.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use common::model::author::{Author, NewAuthor};
use common::model::book::{BookSummary, NewBook};
use log::info;
use rusqlite::{params, Connection, OptionalExtension, Row};

use super::{new_id, CatalogStore};
use crate::error::AppResult;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS authors (
        id TEXT PRIMARY KEY,
        first_name TEXT NOT NULL CHECK (length(first_name) BETWEEN 1 AND 100),
        family_name TEXT NOT NULL CHECK (length(family_name) BETWEEN 1 AND 100),
        date_of_birth TEXT,
        date_of_death TEXT
    );
    CREATE TABLE IF NOT EXISTS books (
        id TEXT PRIMARY KEY,
        title TEXT NOT NULL,
        summary TEXT NOT NULL,
        author_id TEXT NOT NULL REFERENCES authors(id)
    );
    CREATE INDEX IF NOT EXISTS books_author_id ON books(author_id);
";

const AUTHOR_COLUMNS: &str = "id, first_name, family_name, date_of_birth, date_of_death";

#[derive(Debug, Clone)]
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    /// Opens (creating if needed) the database at `path` and makes sure the
    /// schema exists.
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let store = Self {
            path: path.as_ref().to_path_buf(),
        };
        let conn = store.connect()?;
        conn.execute_batch(SCHEMA)?;
        info!("Catalog database ready at {}", store.path.display());
        Ok(store)
    }

    fn connect(&self) -> rusqlite::Result<Connection> {
        let conn = Connection::open(&self.path)?;
        conn.busy_timeout(Duration::from_secs(5))?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(conn)
    }

    /// Runs `f` with its own connection on the blocking thread pool.
    async fn run<T, F>(&self, f: F) -> AppResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> rusqlite::Result<T> + Send + 'static,
    {
        let store = self.clone();
        let result = tokio::task::spawn_blocking(move || {
            let conn = store.connect()?;
            f(&conn)
        })
        .await?;
        Ok(result?)
    }
}

fn author_from_row(row: &Row<'_>) -> rusqlite::Result<Author> {
    Ok(Author {
        id: row.get(0)?,
        first_name: row.get(1)?,
        family_name: row.get(2)?,
        date_of_birth: row.get(3)?,
        date_of_death: row.get(4)?,
    })
}

#[async_trait]
impl CatalogStore for SqliteStore {
    async fn insert_author(&self, author: NewAuthor) -> AppResult<Author> {
        let author = author.with_id(new_id());
        self.run(move |conn| {
            conn.execute(
                "INSERT INTO authors (id, first_name, family_name, date_of_birth, date_of_death)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    &author.id,
                    &author.first_name,
                    &author.family_name,
                    &author.date_of_birth,
                    &author.date_of_death
                ],
            )?;
            Ok(author)
        })
        .await
    }

    async fn list_authors(&self) -> AppResult<Vec<Author>> {
        self.run(|conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {AUTHOR_COLUMNS} FROM authors
                 ORDER BY family_name ASC, first_name ASC, id ASC"
            ))?;
            let authors = stmt
                .query_map([], author_from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(authors)
        })
        .await
    }

    async fn find_author(&self, id: &str) -> AppResult<Option<Author>> {
        let id = id.to_string();
        self.run(move |conn| {
            conn.query_row(
                &format!("SELECT {AUTHOR_COLUMNS} FROM authors WHERE id = ?1"),
                params![id],
                author_from_row,
            )
            .optional()
        })
        .await
    }

    async fn find_books_by_author(&self, author_id: &str) -> AppResult<Vec<BookSummary>> {
        let author_id = author_id.to_string();
        self.run(move |conn| {
            let mut stmt =
                conn.prepare("SELECT title, summary FROM books WHERE author_id = ?1 ORDER BY title")?;
            let books = stmt
                .query_map(params![author_id], |row| {
                    Ok(BookSummary {
                        title: row.get(0)?,
                        summary: row.get(1)?,
                    })
                })?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(books)
        })
        .await
    }

    async fn insert_book(&self, book: NewBook) -> AppResult<String> {
        let id = new_id();
        self.run(move |conn| {
            conn.execute(
                "INSERT INTO books (id, title, summary, author_id) VALUES (?1, ?2, ?3, ?4)",
                params![&id, &book.title, &book.summary, &book.author_id],
            )?;
            Ok(id)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn open_temp() -> (tempfile::TempDir, SqliteStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = SqliteStore::open(dir.path().join("catalog.sqlite")).unwrap();
        (dir, store)
    }

    fn new_author(first: &str, family: &str) -> NewAuthor {
        NewAuthor {
            first_name: first.to_string(),
            family_name: family.to_string(),
            date_of_birth: None,
            date_of_death: None,
        }
    }

    #[tokio::test]
    async fn round_trips_dates() {
        let (_dir, store) = open_temp();
        let created = store
            .insert_author(NewAuthor {
                date_of_birth: NaiveDate::from_ymd_opt(1775, 12, 16),
                date_of_death: NaiveDate::from_ymd_opt(1817, 7, 18),
                ..new_author("Jane", "Austen")
            })
            .await
            .unwrap();

        let found = store.find_author(&created.id).await.unwrap().unwrap();
        assert_eq!(found, created);
        assert_eq!(found.date_of_birth_formatted(), "December 16th, 1775");
    }

    #[tokio::test]
    async fn unknown_id_is_none() {
        let (_dir, store) = open_temp();
        assert_eq!(store.find_author("no-such-id").await.unwrap(), None);
    }

    #[tokio::test]
    async fn lists_sorted_by_family_name() {
        let (_dir, store) = open_temp();
        for (first, family) in [("Leo", "Tolstoy"), ("Jane", "Austen"), ("Anne", "Bronte"), ("Emily", "Bronte")] {
            store.insert_author(new_author(first, family)).await.unwrap();
        }

        let names: Vec<String> = store
            .list_authors()
            .await
            .unwrap()
            .iter()
            .map(Author::full_name)
            .collect();
        assert_eq!(
            names,
            ["Austen, Jane", "Bronte, Anne", "Bronte, Emily", "Tolstoy, Leo"]
        );
    }

    #[tokio::test]
    async fn books_only_for_requested_author() {
        let (_dir, store) = open_temp();
        let jane = store.insert_author(new_author("Jane", "Austen")).await.unwrap();
        let leo = store.insert_author(new_author("Leo", "Tolstoy")).await.unwrap();
        for (title, author) in [("Emma", &jane), ("War and Peace", &leo), ("Persuasion", &jane)] {
            store
                .insert_book(NewBook {
                    title: title.to_string(),
                    summary: String::new(),
                    author_id: author.id.clone(),
                })
                .await
                .unwrap();
        }

        let titles: Vec<String> = store
            .find_books_by_author(&jane.id)
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.title)
            .collect();
        assert_eq!(titles, ["Emma", "Persuasion"]);
    }

    #[tokio::test]
    async fn rejects_empty_names() {
        let (_dir, store) = open_temp();
        let result = store.insert_author(new_author("", "Austen")).await;
        assert!(matches!(result, Err(crate::error::AppError::Database(_))));
    }

    #[tokio::test]
    async fn reopening_keeps_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.sqlite");
        let created = SqliteStore::open(&path)
            .unwrap()
            .insert_author(new_author("Jane", "Austen"))
            .await
            .unwrap();

        let reopened = SqliteStore::open(&path).unwrap();
        assert_eq!(reopened.list_authors().await.unwrap(), vec![created]);
    }
}
