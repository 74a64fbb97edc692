use crate::api::controllers::basket_controller;
use axum::routing::{get, post};
use axum::Router;

pub fn routes() -> Router {
    Router::new()
        .route("/", get(basket_controller::get_basket))
        .route(
            "/items/{book_id}",
            post(basket_controller::add_item).delete(basket_controller::remove_item),
        )
}
