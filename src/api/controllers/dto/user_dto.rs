use crate::data::models::user::User;
use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct UserResponse {
    pub id: i32,
    pub user_name: String,
    pub email: String,
    pub full_name: String,
    pub roles: Vec<String>,
    pub created_at: Option<String>,
}

impl UserResponse {
    pub fn new(user: User, roles: Vec<String>) -> Self {
        Self {
            id: user.id,
            user_name: user.user_name,
            email: user.email,
            full_name: user.full_name,
            roles,
            created_at: user.created_at.map(|dt| dt.format("%d/%m/%Y").to_string()),
        }
    }
}
