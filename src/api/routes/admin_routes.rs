use crate::api::controllers::order_controller;
use axum::routing::{get, patch};
use axum::Router;

pub fn routes() -> Router {
    Router::new()
        .route("/orders", get(order_controller::get_all_orders))
        .route("/orders/{id}/status", patch(order_controller::update_order_status))
}
