use serde::{Deserialize, Serialize};

/// The part of a book record shown on an author's detail page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookSummary {
    pub title: String,
    pub summary: String,
}

/// A book to be stored, linked to its author by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBook {
    pub title: String,
    pub summary: String,
    pub author_id: String,
}
