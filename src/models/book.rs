use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

use crate::domain::DomainError;

/// Hash field names used for a book record in the store.
pub const FIELD_TITLE: &str = "titulo";
pub const FIELD_AUTHOR: &str = "autor";
pub const FIELD_GENRE: &str = "genero";
pub const FIELD_STATUS: &str = "estado";

// DTO for pages and API responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub status: String,
}

impl Book {
    pub fn from_input(id: String, input: BookInput) -> Self {
        Self {
            id,
            title: input.title,
            author: input.author,
            genre: input.genre,
            status: input.status,
        }
    }

    /// Rebuild a book from its stored hash. Returns `None` for an empty hash,
    /// which the store reports for missing keys.
    pub fn from_fields(id: &str, mut fields: HashMap<String, String>) -> Option<Self> {
        if fields.is_empty() {
            return None;
        }

        let mut take = |name: &str| fields.remove(name).unwrap_or_default();

        Some(Self {
            id: id.to_string(),
            title: take(FIELD_TITLE),
            author: take(FIELD_AUTHOR),
            genre: take(FIELD_GENRE),
            status: take(FIELD_STATUS),
        })
    }

    /// True when title and author match case-insensitively.
    pub fn is_same_work(&self, title: &str, author: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
            && self.author.to_lowercase() == author.to_lowercase()
    }
}

/// Editable book fields, as submitted by the add/edit forms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookInput {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "autor")]
    pub author: String,
    #[serde(rename = "genero")]
    pub genre: String,
    #[serde(rename = "estado")]
    pub status: String,
}

impl BookInput {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
            status: status.into(),
        }
    }

    /// Copy with every field trimmed.
    pub fn trimmed(&self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
            genre: self.genre.trim().to_string(),
            status: self.status.trim().to_string(),
        }
    }

    /// Title and author are required. Expects already trimmed input.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut missing = Vec::new();
        if self.title.is_empty() {
            missing.push("title");
        }
        if self.author.is_empty() {
            missing.push("author");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(format!(
                "missing required field(s): {}",
                missing.join(", ")
            )))
        }
    }

    pub fn to_fields(&self) -> [(&'static str, &str); 4] {
        [
            (FIELD_TITLE, self.title.as_str()),
            (FIELD_AUTHOR, self.author.as_str()),
            (FIELD_GENRE, self.genre.as_str()),
            (FIELD_STATUS, self.status.as_str()),
        ]
    }
}

impl From<&Book> for BookInput {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            genre: book.genre.clone(),
            status: book.status.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trimmed_strips_every_field() {
        let input = BookInput::new("  Dune ", "\tFrank Herbert\n", " sci-fi ", "  ");
        let trimmed = input.trimmed();
        assert_eq!(trimmed, BookInput::new("Dune", "Frank Herbert", "sci-fi", ""));
    }

    #[test]
    fn validate_rejects_missing_title_or_author() {
        assert!(BookInput::new("", "Someone", "", "").validate().is_err());
        assert!(BookInput::new("Something", "", "", "").validate().is_err());
        assert!(matches!(
            BookInput::default().validate(),
            Err(DomainError::Validation(msg)) if msg.contains("title") && msg.contains("author")
        ));
        assert!(BookInput::new("Dune", "Frank Herbert", "", "").validate().is_ok());
    }

    #[test]
    fn from_fields_defaults_absent_fields_to_empty() {
        let mut fields = HashMap::new();
        fields.insert(FIELD_TITLE.to_string(), "Dune".to_string());
        fields.insert(FIELD_AUTHOR.to_string(), "Frank Herbert".to_string());

        let book = Book::from_fields("abc", fields).unwrap();
        assert_eq!(book.id, "abc");
        assert_eq!(book.genre, "");
        assert_eq!(book.status, "");
    }

    #[test]
    fn from_fields_empty_hash_is_none() {
        assert!(Book::from_fields("abc", HashMap::new()).is_none());
    }

    #[test]
    fn same_work_ignores_case() {
        let book = Book::from_input("1".into(), BookInput::new("Dune", "Frank Herbert", "", ""));
        assert!(book.is_same_work("DUNE", "frank herbert"));
        assert!(!book.is_same_work("Dune Messiah", "Frank Herbert"));
    }

    #[test]
    fn input_deserializes_from_spanish_form_names() {
        let input: BookInput =
            serde_json::from_str(r#"{"titulo":"Rayuela","autor":"Cortázar"}"#).unwrap();
        assert_eq!(input, BookInput::new("Rayuela", "Cortázar", "", ""));
    }
}
