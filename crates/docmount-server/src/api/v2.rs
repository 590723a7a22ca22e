//! Books API, version 2

use axum::{routing::get, Json, Router};
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Books API",
        version = "2.0",
        description = "Sample book store, second edition."
    ),
    servers((url = "/v2")),
    paths(get_books),
    components(schemas(Book)),
    tags((name = "books", description = "Book catalogue"))
)]
pub struct ApiDoc;

/// A book in the store
#[derive(Debug, Serialize, ToSchema)]
pub struct Book {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub title: String,
    pub author: String,
    pub year: Option<u16>,
}

/// Get a list of books in the store
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "ok", body = [Book])
    )
)]
pub async fn get_books() -> Json<Vec<Book>> {
    Json(vec![
        Book {
            id: Some(1),
            title: "Book 3".to_string(),
            author: "Author 3".to_string(),
            year: None,
        },
        Book {
            id: Some(2),
            title: "Book 4".to_string(),
            author: "Author 4".to_string(),
            year: Some(2021),
        },
    ])
}

pub fn router() -> Router {
    Router::new().route("/books", get(get_books))
}
