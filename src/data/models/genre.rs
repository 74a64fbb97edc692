use crate::data::models::schema::*;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Identifiable, PartialEq, Debug, Clone)]
#[diesel(table_name = genres)]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct Genre {
    pub id: i32,
    pub name: String,
}
