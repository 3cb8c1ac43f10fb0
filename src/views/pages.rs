use std::fmt::Write;

use super::{escape, layout};
use crate::api::notice::Notice;
use crate::domain::SearchField;
use crate::models::{Book, BookInput};

const SEARCH_FIELDS: [(SearchField, &str); 3] = [
    (SearchField::Title, "Título"),
    (SearchField::Author, "Autor"),
    (SearchField::Genre, "Género"),
];

/// Listing page with the search form
pub fn index_page(books: &[Book], query: &str, field: &str, notice: Option<&Notice>) -> String {
    let mut options = String::new();
    for (search_field, label) in SEARCH_FIELDS {
        let value = search_field.as_str();
        let selected = if value == field { " selected" } else { "" };
        let _ = write!(options, r#"<option value="{value}"{selected}>{label}</option>"#);
    }

    let mut body = format!(
        r#"<form class="search" method="get" action="/">
<input type="search" name="q" value="{query}" placeholder="Buscar…">
<select name="field">{options}</select>
<button type="submit">Buscar</button>
</form>
"#,
        query = escape(query),
    );

    if books.is_empty() {
        body.push_str(r#"<p class="empty">No hay libros que mostrar.</p>"#);
        return layout("Libros", notice, &body);
    }

    body.push_str(
        "<table>\n<thead><tr><th>Título</th><th>Autor</th><th>Género</th><th>Estado</th><th></th></tr></thead>\n<tbody>\n",
    );
    for book in books {
        let id = urlencoding::encode(&book.id);
        let _ = writeln!(
            body,
            r#"<tr><td>{title}</td><td>{author}</td><td>{genre}</td><td>{status}</td><td class="actions"><a href="/editar/{id}">Editar</a> <form method="post" action="/eliminar/{id}" class="inline"><button type="submit" class="danger">Eliminar</button></form></td></tr>"#,
            title = escape(&book.title),
            author = escape(&book.author),
            genre = escape(&book.genre),
            status = escape(&book.status),
        );
    }
    body.push_str("</tbody>\n</table>\n");

    layout("Libros", notice, &body)
}

/// Which form is being rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction<'a> {
    Add,
    Edit(&'a str),
}

impl FormAction<'_> {
    pub fn label(&self) -> &'static str {
        match self {
            FormAction::Add => "Agregar",
            FormAction::Edit(_) => "Editar",
        }
    }

    fn target(&self) -> String {
        match self {
            FormAction::Add => "/agregar".to_string(),
            FormAction::Edit(id) => format!("/editar/{}", urlencoding::encode(id)),
        }
    }
}

/// Add/edit form, pre-filled with `values` when given
pub fn book_form_page(
    action: FormAction<'_>,
    values: Option<&BookInput>,
    notice: Option<&Notice>,
) -> String {
    let empty = BookInput::default();
    let values = values.unwrap_or(&empty);
    let label = action.label();

    let body = format!(
        r#"<h1>{label} libro</h1>
<form class="book" method="post" action="{target}">
<label>Título <input type="text" name="titulo" value="{title}" required></label>
<label>Autor <input type="text" name="autor" value="{author}" required></label>
<label>Género <input type="text" name="genero" value="{genre}"></label>
<label>Estado <input type="text" name="estado" value="{status}"></label>
<button type="submit">{label}</button> <a href="/">Cancelar</a>
</form>
"#,
        target = escape(&action.target()),
        title = escape(&values.title),
        author = escape(&values.author),
        genre = escape(&values.genre),
        status = escape(&values.status),
    );

    layout(&format!("{} libro", label), notice, &body)
}

pub fn not_found_page() -> String {
    layout(
        "Página no encontrada",
        None,
        r#"<h1>Página no encontrada</h1>
<p>La página que buscas no existe. <a href="/">Volver al catálogo</a></p>"#,
    )
}

pub fn error_page() -> String {
    layout(
        "Error",
        None,
        r#"<h1>Algo salió mal</h1>
<p>No se pudo completar la operación. Inténtalo de nuevo más tarde.</p>"#,
    )
}
