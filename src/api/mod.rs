pub mod books;
pub mod error;
pub mod health;
pub mod notice;
pub mod web;

use axum::{
    Json, Router,
    routing::{get, post},
};
use utoipa::OpenApi;

use crate::api_docs::ApiDoc;
use crate::infrastructure::AppState;

/// HTML pages served to the browser
pub fn web_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(web::index))
        .route("/agregar", get(web::add_form).post(web::create_book))
        .route(
            "/editar/:id",
            get(web::edit_form).post(web::update_book),
        )
        .route("/eliminar/:id", post(web::delete_book))
        .with_state(state)
}

/// JSON endpoints, nested under `/api`
pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Books
        .route("/books", get(books::list_books))
        .with_state(state)
}

/// OpenAPI document for the JSON endpoints
pub fn docs_router() -> Router {
    Router::new().route(
        "/api-docs/openapi.json",
        get(|| async { Json(ApiDoc::openapi()) }),
    )
}
