use crate::api::controllers::book_controller;
use axum::routing::get;
use axum::Router;

pub fn routes() -> Router {
    Router::new()
        .route("/", get(book_controller::get_all_books))
        .route("/{id}", get(book_controller::get_book_by_id))
}
