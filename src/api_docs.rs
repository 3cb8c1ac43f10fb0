use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::books::list_books,
    ),
    components(
        schemas(
            crate::models::book::Book,
        )
    ),
    tags(
        (name = "catalogo", description = "Book catalog API")
    )
)]
pub struct ApiDoc;
