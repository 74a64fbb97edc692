use crate::data::models::book::Book;
use crate::data::models::schema::*;
use crate::data::models::user::User;
use diesel::prelude::*;

/// A member's pending selection of one book. At most one row per (user, book).
#[derive(Queryable, Selectable, Identifiable, Associations, PartialEq, Debug, Clone)]
#[diesel(table_name = basket_items)]
#[diesel(belongs_to(User, foreign_key = user_id))]
#[diesel(belongs_to(Book, foreign_key = book_id))]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
#[diesel(treat_none_as_null = true)]
pub struct BasketItem {
    pub id: i32,
    pub user_id: i32,
    pub book_id: i32,
    pub count: i32,
    pub created_at: Option<chrono::NaiveDateTime>,
    pub updated_at: Option<chrono::NaiveDateTime>,
}

#[derive(Insertable, PartialEq, Debug)]
#[diesel(table_name = basket_items)]
pub struct NewBasketItem {
    pub user_id: i32,
    pub book_id: i32,
    pub count: i32,
}
