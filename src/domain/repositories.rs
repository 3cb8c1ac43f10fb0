//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;
use std::collections::HashMap;
use std::str::FromStr;

use super::DomainError;
use crate::models::book::{Book, BookInput};

/// Book fields that can be searched from the listing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Author,
    Genre,
}

impl SearchField {
    /// Name used in query strings and form selects.
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchField::Title => "titulo",
            SearchField::Author => "autor",
            SearchField::Genre => "genero",
        }
    }

    pub fn value_of<'a>(&self, book: &'a Book) -> &'a str {
        match self {
            SearchField::Title => &book.title,
            SearchField::Author => &book.author,
            SearchField::Genre => &book.genre,
        }
    }
}

impl FromStr for SearchField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Exact names only; anything else means "no filter" to the caller.
        match s {
            "titulo" | "title" => Ok(SearchField::Title),
            "autor" | "author" => Ok(SearchField::Author),
            "genero" | "genre" => Ok(SearchField::Genre),
            _ => Err(()),
        }
    }
}

/// Filter criteria for listing books
///
/// `field == None` means no filtering at all, whatever the query text.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BookFilter {
    pub field: Option<SearchField>,
    pub query: String,
}

impl BookFilter {
    /// Build a filter from raw request values. A missing field defaults to
    /// the title; an unrecognized one disables filtering.
    pub fn from_params(field: Option<&str>, query: Option<&str>) -> Self {
        let field = match field {
            None => Some(SearchField::Title),
            Some(raw) => raw.parse().ok(),
        };

        Self {
            field,
            query: query.unwrap_or_default().trim().to_string(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.field.is_some() && !self.query.is_empty()
    }

    pub fn matches(&self, book: &Book) -> bool {
        match self.field {
            Some(field) if !self.query.is_empty() => field
                .value_of(book)
                .to_lowercase()
                .contains(&self.query.to_lowercase()),
            _ => true,
        }
    }
}

/// Minimal key-value primitives the book repository needs.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Write (merge) string fields into the hash at `key`
    async fn hash_set(&self, key: &str, fields: &[(&str, &str)]) -> Result<(), DomainError>;

    /// Read every field of the hash at `key`; empty when the key is absent
    async fn hash_get_all(&self, key: &str) -> Result<HashMap<String, String>, DomainError>;

    /// Add a member to the set at `key`
    async fn set_add(&self, key: &str, member: &str) -> Result<(), DomainError>;

    /// Remove a member from the set at `key`
    async fn set_remove(&self, key: &str, member: &str) -> Result<(), DomainError>;

    /// All members of the set at `key`
    async fn set_members(&self, key: &str) -> Result<Vec<String>, DomainError>;

    async fn exists(&self, key: &str) -> Result<bool, DomainError>;

    async fn delete(&self, key: &str) -> Result<(), DomainError>;

    /// Round-trip to the store, for health checks
    async fn ping(&self) -> Result<(), DomainError>;
}

/// Repository trait for Book entity
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Create a new book and return its generated id
    async fn create(&self, input: BookInput) -> Result<String, DomainError>;

    /// Find a single book by ID
    async fn get(&self, id: &str) -> Result<Book, DomainError>;

    /// Overwrite the fields of a book. Does not check that `id` exists.
    async fn update(&self, id: &str, input: BookInput) -> Result<(), DomainError>;

    /// Delete a book by ID
    async fn delete(&self, id: &str) -> Result<(), DomainError>;

    /// Every stored book matching the filter, sorted by title
    async fn list_all(&self, filter: &BookFilter) -> Result<Vec<Book>, DomainError>;
}
