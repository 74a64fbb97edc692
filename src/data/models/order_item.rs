use crate::data::models::book::Book;
use crate::data::models::order::Order;
use crate::data::models::schema::*;
use crate::services::pricing::Priced;
use bigdecimal::BigDecimal;
use diesel::prelude::*;

/// Price fields copied from the book when the order was placed. Later catalog
/// changes never reach these rows.
#[derive(Queryable, Selectable, Identifiable, Associations, PartialEq, Debug, Clone)]
#[diesel(table_name = order_items)]
#[diesel(belongs_to(Order, foreign_key = order_id))]
#[diesel(belongs_to(Book, foreign_key = book_id))]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct OrderItem {
    pub id: i32,
    pub order_id: i32,
    pub book_id: i32,
    pub count: i32,
    pub sale_price: BigDecimal,
    pub discount_percent: BigDecimal,
    pub cost_price: BigDecimal,
}

impl Priced for OrderItem {
    fn sale_price(&self) -> &BigDecimal {
        &self.sale_price
    }

    fn discount_percent(&self) -> &BigDecimal {
        &self.discount_percent
    }
}

#[derive(Insertable, PartialEq, Debug, Clone)]
#[diesel(table_name = order_items)]
pub struct NewOrderItem {
    pub order_id: i32,
    pub book_id: i32,
    pub count: i32,
    pub sale_price: BigDecimal,
    pub discount_percent: BigDecimal,
    pub cost_price: BigDecimal,
}

impl NewOrderItem {
    /// Snapshots the book's current price fields. `order_id` is filled in once the order row exists.
    pub fn snapshot(book: &Book, count: i32) -> Self {
        NewOrderItem {
            order_id: 0,
            book_id: book.id,
            count,
            sale_price: book.sale_price.clone(),
            discount_percent: book.discount_percent.clone(),
            cost_price: book.cost_price.clone(),
        }
    }
}
