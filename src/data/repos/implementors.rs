pub mod basket_repo;
pub mod book_repo;
pub mod order_repo;
pub mod role_repo;
pub mod user_repo;
