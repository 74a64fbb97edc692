use crate::data::models::author::Author;
use crate::data::models::genre::Genre;
use crate::data::models::schema::*;
use crate::services::pricing::Priced;
use bigdecimal::BigDecimal;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Identifiable, Associations, PartialEq, Debug, Clone)]
#[diesel(table_name = books)]
#[diesel(belongs_to(Author, foreign_key = author_id))]
#[diesel(belongs_to(Genre, foreign_key = genre_id))]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
#[diesel(treat_none_as_null = true)]
pub struct Book {
    pub id: i32,
    pub author_id: i32,
    pub genre_id: i32,
    pub name: String,
    pub description: String,
    pub cost_price: BigDecimal,
    pub sale_price: BigDecimal,
    pub discount_percent: BigDecimal,
    pub stock_status: bool,
    pub is_deleted: bool,
    pub created_at: Option<chrono::NaiveDateTime>,
    pub updated_at: Option<chrono::NaiveDateTime>,
}

impl Priced for Book {
    fn sale_price(&self) -> &BigDecimal {
        &self.sale_price
    }

    fn discount_percent(&self) -> &BigDecimal {
        &self.discount_percent
    }
}

#[derive(Insertable, PartialEq, Debug)]
#[diesel(table_name = books)]
pub struct NewBook<'a> {
    pub author_id: i32,
    pub genre_id: i32,
    pub name: &'a str,
    pub description: &'a str,
    pub cost_price: BigDecimal,
    pub sale_price: BigDecimal,
    pub discount_percent: BigDecimal,
    pub stock_status: bool,
}

#[derive(AsChangeset, PartialEq, Debug, Default)]
#[diesel(table_name = books)]
pub struct UpdateBook<'a> {
    pub name: Option<&'a str>,
    pub description: Option<&'a str>,
    pub cost_price: Option<BigDecimal>,
    pub sale_price: Option<BigDecimal>,
    pub discount_percent: Option<BigDecimal>,
    pub stock_status: Option<bool>,
    pub is_deleted: Option<bool>,
}

/// `poster_status`: `Some(true)` is the cover, `Some(false)` the hover image, `None` gallery.
#[derive(Queryable, Selectable, Identifiable, Associations, PartialEq, Debug, Clone)]
#[diesel(table_name = book_images)]
#[diesel(belongs_to(Book, foreign_key = book_id))]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct BookImage {
    pub id: i32,
    pub book_id: i32,
    pub name: String,
    pub poster_status: Option<bool>,
}

impl BookImage {
    pub fn is_poster(&self) -> bool {
        self.poster_status == Some(true)
    }
}

#[derive(Insertable, PartialEq, Debug)]
#[diesel(table_name = book_images)]
pub struct NewBookImage<'a> {
    pub book_id: i32,
    pub name: &'a str,
    pub poster_status: Option<bool>,
}
