pub mod account_controller;
pub mod basket_controller;
pub mod book_controller;
pub mod dto;
pub mod order_controller;
