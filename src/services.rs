pub mod account_service;
pub mod basket_service;
pub mod book_service;
pub mod errors;
pub mod order_service;
pub mod pricing;
