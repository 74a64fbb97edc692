use crate::api::controllers::order_controller;
use axum::routing::get;
use axum::Router;

pub fn routes() -> Router {
    Router::new()
        .route("/", get(order_controller::get_my_orders))
        .route("/{id}", get(order_controller::get_order_by_id))
}

pub fn checkout_routes() -> Router {
    Router::new().route(
        "/",
        get(order_controller::get_checkout).post(order_controller::checkout),
    )
}
