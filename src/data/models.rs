pub mod author;
pub mod basket_item;
pub mod book;
pub mod genre;
pub mod order;
pub mod order_item;
pub mod role;
pub mod schema;
pub mod tag;
pub mod user;
