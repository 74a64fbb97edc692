use crate::api::controllers::basket_controller::{basket_cookie_value, basket_error_response};
use crate::api::controllers::dto::basket_dto::CheckoutResponse;
use crate::api::controllers::dto::order_dto::{OrderDetailsResponse, OrderSummaryResponse};
use crate::api::extractors::{Member, Viewer};
use crate::api::request::{CheckoutRequest, UpdateOrderStatusRequest};
use crate::security::csrf;
use crate::security::jwt::AccessClaims;
use crate::services::basket_service::BasketService;
use crate::services::errors::OrderServiceError;
use crate::services::order_service::{OrderContact, OrderService, OrderStatus};
use axum::extract::Path;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Redirect};
use axum::Json;
use axum_extra::extract::cookie::CookieJar;

/// Where a member lands after placing an order.
pub const ORDER_HISTORY_PATH: &str = "/api/v1/orders";

/// Render the checkout: current basket, an empty form and an anti-forgery token
pub async fn get_checkout(viewer: Viewer, jar: CookieJar) -> impl IntoResponse {
    let service = BasketService::new();
    let cookie = basket_cookie_value(&jar);
    let token = csrf::current_or_new(&jar);

    match service.resolve(viewer.member_id(), cookie.as_deref()).await {
        Ok(basket) => (
            StatusCode::OK,
            jar.add(csrf::token_cookie(token.clone())),
            Json(CheckoutResponse {
                basket,
                order: None,
                errors: Vec::new(),
                csrf_token: token,
            }),
        )
            .into_response(),
        Err(e) => basket_error_response(e),
    }
}

/// Place an order from the member's basket
pub async fn checkout(
    Member(claims): Member,
    jar: CookieJar,
    headers: HeaderMap,
    Json(form): Json<CheckoutRequest>,
) -> impl IntoResponse {
    if !csrf::verify(&jar, &headers) {
        tracing::warn!("Checkout by user {} without a valid anti-forgery token", claims.user_id());
        return (StatusCode::FORBIDDEN, "Invalid anti-forgery token").into_response();
    }

    let contact = OrderContact {
        address: form.address.clone(),
        phone: form.phone.clone(),
        note: form.note.clone(),
    };

    let errors = contact.validate();
    if !errors.is_empty() {
        let basket = match BasketService::new().resolve_member(claims.user_id()).await {
            Ok(basket) => basket,
            Err(e) => return basket_error_response(e),
        };

        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(CheckoutResponse {
                basket,
                order: Some(form),
                errors,
                csrf_token: csrf::current_or_new(&jar),
            }),
        )
            .into_response();
    }

    match OrderService::new().checkout(claims.user_id(), contact).await {
        Ok(order_id) => (
            [("x-order-id", order_id.to_string())],
            Redirect::to(ORDER_HISTORY_PATH),
        )
            .into_response(),
        Err(OrderServiceError::EmptyBasket) => {
            (StatusCode::UNPROCESSABLE_ENTITY, "Basket is empty").into_response()
        }
        Err(OrderServiceError::MemberNotFound) => {
            (StatusCode::NOT_FOUND, "Member not found").into_response()
        }
        Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Failed to create order").into_response(),
    }
}

/// Get the member's own orders
pub async fn get_my_orders(Member(claims): Member) -> impl IntoResponse {
    match OrderService::new().get_user_orders(claims.user_id()).await {
        Ok(orders) => {
            let response: Vec<OrderSummaryResponse> =
                orders.into_iter().map(OrderSummaryResponse::from).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Database error").into_response(),
    }
}

/// Get order by ID
pub async fn get_order_by_id(claims: AccessClaims, Path(order_id): Path<i32>) -> impl IntoResponse {
    if !claims.is_member() && !claims.is_admin() {
        return (StatusCode::FORBIDDEN, "Permission denied").into_response();
    }

    match OrderService::new()
        .get_order_details(order_id, claims.user_id(), claims.is_admin())
        .await
    {
        Ok(details) => (StatusCode::OK, Json(OrderDetailsResponse::from(details))).into_response(),
        Err(OrderServiceError::OrderNotFound) => {
            (StatusCode::NOT_FOUND, "Order not found").into_response()
        }
        Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Database error").into_response(),
    }
}

/// Get all orders
pub async fn get_all_orders(claims: AccessClaims) -> impl IntoResponse {
    match OrderService::new().get_all_orders(claims.is_admin()).await {
        Ok(orders) => {
            let response: Vec<OrderSummaryResponse> =
                orders.into_iter().map(OrderSummaryResponse::from).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(OrderServiceError::PermissionDenied) => {
            (StatusCode::FORBIDDEN, "Permission denied").into_response()
        }
        Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Database error").into_response(),
    }
}

/// Move an order to a new status
pub async fn update_order_status(
    claims: AccessClaims,
    Path(order_id): Path<i32>,
    Json(payload): Json<UpdateOrderStatusRequest>,
) -> impl IntoResponse {
    let status: OrderStatus = match payload.status.parse() {
        Ok(s) => s,
        Err(_) => return (StatusCode::BAD_REQUEST, "Unknown order status").into_response(),
    };

    match OrderService::new()
        .update_order_status(order_id, status, claims.is_admin())
        .await
    {
        Ok(()) => (StatusCode::OK, "Order status updated").into_response(),
        Err(OrderServiceError::PermissionDenied) => {
            (StatusCode::FORBIDDEN, "Permission denied").into_response()
        }
        Err(OrderServiceError::OrderNotFound) => {
            (StatusCode::NOT_FOUND, "Order not found").into_response()
        }
        Err(OrderServiceError::InvalidStatusTransition) => {
            (StatusCode::CONFLICT, "Invalid status transition").into_response()
        }
        Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Failed to update order").into_response(),
    }
}
