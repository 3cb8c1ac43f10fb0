use axum::{
    extract::{Json, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

use crate::api::web::ListQuery;
use crate::domain::BookFilter;
use crate::infrastructure::AppState;

#[utoipa::path(
    get,
    path = "/api/books",
    params(ListQuery),
    responses(
        (status = 200, description = "Books sorted by title"),
        (status = 500, description = "Store unavailable")
    )
)]
pub async fn list_books(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> impl IntoResponse {
    let filter = BookFilter::from_params(params.field.as_deref(), params.q.as_deref());

    match state.book_repo.list_all(&filter).await {
        Ok(books) => (
            StatusCode::OK,
            Json(json!({
                "books": books,
                "total": books.len()
            })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to list books: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}
