//! Repository implementations over the key-value store

pub mod book_repository;

pub use book_repository::KvBookRepository;
