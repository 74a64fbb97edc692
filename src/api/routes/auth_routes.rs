use crate::api::controllers::account_controller::{login, register_user};
use axum::routing::post;
use axum::Router;

pub fn routes() -> Router<()> {
    Router::new()
        .route("/login", post(login))
        .route("/register", post(register_user))
}
