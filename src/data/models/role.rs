use crate::data::models::schema::*;
use crate::data::models::user::User;
use diesel::prelude::*;

pub const MEMBER_ROLE: &str = "member";
pub const ADMIN_ROLE: &str = "admin";

#[derive(Selectable, Queryable, Identifiable, PartialEq, Debug, Clone)]
#[diesel(table_name = roles)]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct Role {
    pub id: i32,
    pub name: String,
}

#[derive(Insertable, PartialEq, Debug)]
#[diesel(table_name = roles)]
pub struct NewRole<'a> {
    pub name: &'a str,
}

#[derive(Queryable, Selectable, Identifiable, Associations, Insertable, PartialEq, Debug)]
#[diesel(table_name = user_roles)]
#[diesel(primary_key(user_id, role_id))]
#[diesel(belongs_to(User, foreign_key = user_id))]
#[diesel(belongs_to(Role, foreign_key = role_id))]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct UserRole {
    pub user_id: i32,
    pub role_id: i32,
}
