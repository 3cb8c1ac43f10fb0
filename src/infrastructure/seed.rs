use crate::domain::{BookRepository, DomainError};
use crate::models::BookInput;

const DEMO_BOOKS: &[(&str, &str, &str, &str)] = &[
    ("Cien años de soledad", "Gabriel García Márquez", "Novela", "Leído"),
    ("Rayuela", "Julio Cortázar", "Novela", "Pendiente"),
    ("Ficciones", "Jorge Luis Borges", "Cuentos", "Leyendo"),
    ("El túnel", "Ernesto Sabato", "Novela", ""),
    ("Dune", "Frank Herbert", "Ciencia ficción", "Leído"),
];

/// Insert a few demo books. Books already present are left alone, so running
/// this twice is harmless. Returns how many books were created.
pub async fn seed_demo_data(repo: &dyn BookRepository) -> Result<usize, DomainError> {
    let mut created = 0;

    for (title, author, genre, status) in DEMO_BOOKS {
        match repo
            .create(BookInput::new(*title, *author, *genre, *status))
            .await
        {
            Ok(_) => created += 1,
            Err(DomainError::Duplicate) => {
                tracing::debug!("Demo book {:?} already present", title);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BookFilter;
    use crate::infrastructure::{KvBookRepository, MemoryStore};
    use std::sync::Arc;

    #[tokio::test]
    async fn seeding_twice_creates_books_once() {
        let repo = KvBookRepository::new(Arc::new(MemoryStore::new()));

        assert_eq!(seed_demo_data(&repo).await.unwrap(), DEMO_BOOKS.len());
        assert_eq!(seed_demo_data(&repo).await.unwrap(), 0);

        let books = repo.list_all(&BookFilter::default()).await.unwrap();
        assert_eq!(books.len(), DEMO_BOOKS.len());
    }
}
