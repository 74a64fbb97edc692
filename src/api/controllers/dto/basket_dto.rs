use crate::api::request::CheckoutRequest;
use crate::services::basket_service::BasketView;
use crate::services::order_service::FieldError;
use serde::Serialize;
use serde_with::skip_serializing_none;

/// What the checkout page needs: the basket, the form as last submitted,
/// validation errors and the anti-forgery token to send back.
#[skip_serializing_none]
#[derive(Serialize)]
pub struct CheckoutResponse {
    pub basket: BasketView,
    pub order: Option<CheckoutRequest>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
    pub csrf_token: String,
}
