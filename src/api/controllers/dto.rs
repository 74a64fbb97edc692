pub mod basket_dto;
pub mod book_dto;
pub mod order_dto;
pub mod user_dto;
