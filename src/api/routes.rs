pub mod admin_routes;
pub mod auth_routes;
pub mod basket_routes;
pub mod book_routes;
pub mod order_routes;
