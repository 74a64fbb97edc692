use crate::data::models::schema::*;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Identifiable, PartialEq, Debug, Clone)]
#[diesel(table_name = authors)]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct Author {
    pub id: i32,
    pub full_name: String,
}
