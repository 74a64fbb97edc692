use crate::api::controllers::dto::book_dto::{BookDetailsResponse, BookSummaryResponse};
use crate::services::book_service::BookService;
use crate::services::errors::BookServiceError;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

/// Get all books still on sale
pub async fn get_all_books() -> impl IntoResponse {
    match BookService::new().get_catalog().await {
        Ok(books) => {
            let response: Vec<BookSummaryResponse> =
                books.into_iter().map(BookSummaryResponse::from).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch books").into_response(),
    }
}

/// Get book by ID
pub async fn get_book_by_id(Path(id): Path<i32>) -> impl IntoResponse {
    match BookService::new().get_book(id).await {
        Ok(details) => (StatusCode::OK, Json(BookDetailsResponse::from(details))).into_response(),
        Err(BookServiceError::BookNotFound) => {
            (StatusCode::NOT_FOUND, "Book not found").into_response()
        }
        Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch book").into_response(),
    }
}
