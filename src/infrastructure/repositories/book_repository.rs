//! Key-value implementation of BookRepository
//!
//! Each book lives in a hash at `libro:<id>`; the set `libros:ids` indexes
//! every known id. The two are written separately, so the index may briefly
//! name ids whose hash is gone. Listing skips those.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{BookFilter, BookRepository, DomainError, KeyValueStore};
use crate::models::{Book, BookInput};

pub const BOOK_SET_KEY: &str = "libros:ids";
pub const BOOK_KEY_PREFIX: &str = "libro:";

pub fn book_key(id: &str) -> String {
    format!("{}{}", BOOK_KEY_PREFIX, id)
}

/// Store-backed implementation of BookRepository
pub struct KvBookRepository {
    store: Arc<dyn KeyValueStore>,
}

impl KvBookRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    async fn write(&self, id: &str, input: &BookInput) -> Result<(), DomainError> {
        self.store.hash_set(&book_key(id), &input.to_fields()).await?;
        self.store.set_add(BOOK_SET_KEY, id).await
    }

    async fn load(&self, id: &str) -> Result<Option<Book>, DomainError> {
        let fields = self.store.hash_get_all(&book_key(id)).await?;
        Ok(Book::from_fields(id, fields))
    }

    async fn load_all(&self) -> Result<Vec<Book>, DomainError> {
        let ids = self.store.set_members(BOOK_SET_KEY).await?;

        let mut books = Vec::with_capacity(ids.len());
        for id in ids {
            match self.load(&id).await? {
                Some(book) => books.push(book),
                None => tracing::warn!("Index entry {} has no stored record, skipping", id),
            }
        }

        Ok(books)
    }
}

#[async_trait]
impl BookRepository for KvBookRepository {
    async fn create(&self, input: BookInput) -> Result<String, DomainError> {
        let input = input.trimmed();
        input.validate()?;

        // Not atomic with the write below: concurrent identical creates can both pass.
        let existing = self.load_all().await?;
        if existing
            .iter()
            .any(|book| book.is_same_work(&input.title, &input.author))
        {
            return Err(DomainError::Duplicate);
        }

        let id = Uuid::new_v4().to_string();
        self.write(&id, &input).await?;

        tracing::info!("Created book {} ({:?} by {:?})", id, input.title, input.author);
        Ok(id)
    }

    async fn get(&self, id: &str) -> Result<Book, DomainError> {
        self.load(id).await?.ok_or(DomainError::NotFound)
    }

    async fn update(&self, id: &str, input: BookInput) -> Result<(), DomainError> {
        let input = input.trimmed();
        input.validate()?;

        self.write(id, &input).await?;

        tracing::info!("Updated book {}", id);
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        let key = book_key(id);
        if !self.store.exists(&key).await? {
            return Err(DomainError::NotFound);
        }

        self.store.delete(&key).await?;
        self.store.set_remove(BOOK_SET_KEY, id).await?;

        tracing::info!("Deleted book {}", id);
        Ok(())
    }

    async fn list_all(&self, filter: &BookFilter) -> Result<Vec<Book>, DomainError> {
        let mut books = self.load_all().await?;

        if filter.is_active() {
            books.retain(|book| filter.matches(book));
        }

        books.sort_by_cached_key(|book| (book.title.to_lowercase(), book.id.clone()));

        tracing::debug!("Listing {} books (filter: {:?})", books.len(), filter);
        Ok(books)
    }
}
