use crate::data::models::book::Book;
use crate::data::models::schema::*;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Identifiable, PartialEq, Debug, Clone)]
#[diesel(table_name = tags)]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct Tag {
    pub id: i32,
    pub name: String,
}

/// Join row linking a book to one of its tags.
#[derive(Queryable, Selectable, Identifiable, Associations, PartialEq, Debug)]
#[diesel(table_name = book_tags)]
#[diesel(belongs_to(Book, foreign_key = book_id))]
#[diesel(belongs_to(Tag, foreign_key = tag_id))]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct BookTag {
    pub id: i32,
    pub book_id: i32,
    pub tag_id: i32,
}
