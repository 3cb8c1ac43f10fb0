use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::domain::DomainError;
use crate::views;

// Errors that reach this point were not recovered by a handler.
impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        match self {
            DomainError::Store(msg) => {
                tracing::error!("Store failure while handling request: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, Html(views::error_page())).into_response()
            }
            // Handlers turn these into notices; only a route that skips that lands here.
            other => {
                tracing::warn!("Unhandled domain error: {}", other);
                (StatusCode::BAD_REQUEST, Html(views::error_page())).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_is_internal_server_error() {
        let response = DomainError::Store("down".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn unrecovered_domain_errors_are_bad_request() {
        for err in [
            DomainError::NotFound,
            DomainError::Duplicate,
            DomainError::Validation("title".to_string()),
        ] {
            assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
        }
    }
}
