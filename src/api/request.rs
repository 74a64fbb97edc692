use serde::{Deserialize, Serialize};

/// Checkout form. Fields default to empty so an incomplete form reaches
/// validation and can be echoed back.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct CheckoutRequest {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct BasketItemQuery {
    pub count: Option<i32>,
}

#[derive(Deserialize)]
pub struct UpdateOrderStatusRequest {
    pub status: String,
}

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub user_name: String,
    pub email: String,
    pub full_name: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub user_name: String,
    pub password: String,
}
