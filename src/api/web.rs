//! Browser-facing handlers: listing, add, edit, delete

use axum::{
    Form,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::notice::{Notice, NoticeParams};
use crate::domain::{BookFilter, DomainError, SearchField};
use crate::infrastructure::AppState;
use crate::models::BookInput;
use crate::views::{self, FormAction};

pub const MSG_REQUIRED: &str = "Título y autor son obligatorios.";
pub const MSG_DUPLICATE: &str = "Ya existe un libro con el mismo título y autor.";
pub const MSG_CREATED: &str = "Libro agregado correctamente.";
pub const MSG_UPDATED: &str = "Libro actualizado correctamente.";
pub const MSG_DELETED: &str = "Libro eliminado.";
pub const MSG_NOT_FOUND: &str = "Libro no encontrado.";

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Text to search for
    pub q: Option<String>,
    /// Field to search in: titulo, autor or genero
    pub field: Option<String>,
}

pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
    Query(notice): Query<NoticeParams>,
) -> Result<Response, DomainError> {
    let filter = BookFilter::from_params(params.field.as_deref(), params.q.as_deref());
    let books = state.book_repo.list_all(&filter).await?;

    let field = filter
        .field
        .map(|f| f.as_str())
        .or(params.field.as_deref())
        .unwrap_or(SearchField::Title.as_str());
    let html = views::index_page(&books, &filter.query, field, notice.into_notice().as_ref());

    Ok(Html(html).into_response())
}

pub async fn add_form(Query(notice): Query<NoticeParams>) -> Html<String> {
    Html(views::book_form_page(
        FormAction::Add,
        None,
        notice.into_notice().as_ref(),
    ))
}

pub async fn create_book(
    State(state): State<AppState>,
    Form(input): Form<BookInput>,
) -> Result<Response, DomainError> {
    match state.book_repo.create(input.clone()).await {
        Ok(_) => Ok(Notice::success(MSG_CREATED).redirect_to("/").into_response()),
        Err(DomainError::Validation(_)) => Ok(rerender_form(
            FormAction::Add,
            &input,
            Notice::danger(MSG_REQUIRED),
        )),
        Err(DomainError::Duplicate) => Ok(rerender_form(
            FormAction::Add,
            &input,
            Notice::warning(MSG_DUPLICATE),
        )),
        Err(e) => Err(e),
    }
}

pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, DomainError> {
    match state.book_repo.get(&id).await {
        Ok(book) => {
            let values = BookInput::from(&book);
            Ok(Html(views::book_form_page(FormAction::Edit(&id), Some(&values), None))
                .into_response())
        }
        Err(DomainError::NotFound) => Ok(not_found_redirect()),
        Err(e) => Err(e),
    }
}

pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(input): Form<BookInput>,
) -> Result<Response, DomainError> {
    // The repository writes unconditionally, so existence is checked here.
    match state.book_repo.get(&id).await {
        Ok(_) => {}
        Err(DomainError::NotFound) => return Ok(not_found_redirect()),
        Err(e) => return Err(e),
    }

    match state.book_repo.update(&id, input.clone()).await {
        Ok(()) => Ok(Notice::success(MSG_UPDATED).redirect_to("/").into_response()),
        Err(DomainError::Validation(_)) => Ok(rerender_form(
            FormAction::Edit(&id),
            &input,
            Notice::danger(MSG_REQUIRED),
        )),
        Err(e) => Err(e),
    }
}

pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, DomainError> {
    match state.book_repo.delete(&id).await {
        Ok(()) => Ok(Notice::success(MSG_DELETED).redirect_to("/").into_response()),
        Err(DomainError::NotFound) => Ok(not_found_redirect()),
        Err(e) => Err(e),
    }
}

pub async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Html(views::not_found_page())).into_response()
}

fn rerender_form(action: FormAction<'_>, input: &BookInput, notice: Notice) -> Response {
    Html(views::book_form_page(action, Some(input), Some(&notice))).into_response()
}

fn not_found_redirect() -> Response {
    Notice::danger(MSG_NOT_FOUND).redirect_to("/").into_response()
}
