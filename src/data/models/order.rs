use crate::data::models::schema::*;
use crate::data::models::user::User;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Identifiable, Associations, PartialEq, Debug, Clone)]
#[diesel(table_name = orders)]
#[diesel(belongs_to(User, foreign_key = user_id))]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
#[diesel(treat_none_as_null = true)]
pub struct Order {
    pub id: i32,
    pub user_id: i32,
    pub full_name: String,
    pub email: String,
    pub address: String,
    pub phone: String,
    pub note: Option<String>,
    pub status: String,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: Option<chrono::NaiveDateTime>,
}

#[derive(Insertable, PartialEq, Debug, Clone)]
#[diesel(table_name = orders)]
pub struct NewOrder {
    pub user_id: i32,
    pub full_name: String,
    pub email: String,
    pub address: String,
    pub phone: String,
    pub note: Option<String>,
    pub status: String,
    pub created_at: chrono::NaiveDateTime,
}

#[derive(AsChangeset, PartialEq, Debug)]
#[diesel(table_name = orders)]
pub struct UpdateOrder<'a> {
    pub address: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub note: Option<&'a str>,
    pub status: Option<&'a str>,
}
