//! Application state containing repositories and shared resources

use std::sync::Arc;

use crate::domain::{BookRepository, KeyValueStore};
use crate::infrastructure::KvBookRepository;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Store handle (health checks only; book data goes through the repository)
    store: Arc<dyn KeyValueStore>,
    /// Book repository
    pub book_repo: Arc<dyn BookRepository>,
}

impl AppState {
    /// Create a new AppState with the book repository on top of `store`
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let book_repo = Arc::new(KvBookRepository::new(store.clone()));

        Self { store, book_repo }
    }

    /// Get the store handle
    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }
}
