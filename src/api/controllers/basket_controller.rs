use crate::api::extractors::Viewer;
use crate::api::request::BasketItemQuery;
use crate::services::basket_service::{BasketService, BASKET_COOKIE};
use crate::services::errors::BasketServiceError;
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

pub(crate) fn basket_cookie_value(jar: &CookieJar) -> Option<String> {
    jar.get(BASKET_COOKIE).map(|c| c.value().to_string())
}

fn basket_cookie(value: String) -> Cookie<'static> {
    Cookie::build((BASKET_COOKIE, value))
        .path("/")
        .same_site(SameSite::Lax)
        .build()
}

pub(crate) fn basket_error_response(error: BasketServiceError) -> Response {
    match error {
        BasketServiceError::MalformedBasketCookie => {
            (StatusCode::BAD_REQUEST, "Basket cookie is malformed").into_response()
        }
        BasketServiceError::BookNotFound => (StatusCode::NOT_FOUND, "Book not found").into_response(),
        BasketServiceError::InvalidCount => {
            (StatusCode::BAD_REQUEST, "Count must be at least 1").into_response()
        }
        BasketServiceError::CookieEncoding | BasketServiceError::DatabaseError => {
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to process basket").into_response()
        }
    }
}

/// Get the viewer's basket
pub async fn get_basket(viewer: Viewer, jar: CookieJar) -> impl IntoResponse {
    let service = BasketService::new();
    let cookie = basket_cookie_value(&jar);

    match service.resolve(viewer.member_id(), cookie.as_deref()).await {
        Ok(basket) => (StatusCode::OK, Json(basket)).into_response(),
        Err(e) => basket_error_response(e),
    }
}

/// Add a book to the basket. Members write to the database, guests get a new cookie.
pub async fn add_item(
    viewer: Viewer,
    jar: CookieJar,
    Path(book_id): Path<i32>,
    Query(query): Query<BasketItemQuery>,
) -> impl IntoResponse {
    let service = BasketService::new();
    let count = query.count.unwrap_or(1);

    match viewer.member_id() {
        Some(user_id) => match service.add_member_item(user_id, book_id, count).await {
            Ok(()) => (StatusCode::OK, "Book added to basket").into_response(),
            Err(e) => basket_error_response(e),
        },
        None => {
            let cookie = basket_cookie_value(&jar);
            match service.add_guest_item(cookie.as_deref(), book_id, count).await {
                Ok(value) => (
                    StatusCode::OK,
                    jar.add(basket_cookie(value)),
                    "Book added to basket",
                )
                    .into_response(),
                Err(e) => basket_error_response(e),
            }
        }
    }
}

/// Remove a book from the basket
pub async fn remove_item(viewer: Viewer, jar: CookieJar, Path(book_id): Path<i32>) -> impl IntoResponse {
    let service = BasketService::new();

    match viewer.member_id() {
        Some(user_id) => match service.remove_member_item(user_id, book_id).await {
            Ok(()) => (StatusCode::OK, "Book removed from basket").into_response(),
            Err(e) => basket_error_response(e),
        },
        None => {
            let cookie = basket_cookie_value(&jar);
            match service.remove_guest_item(cookie.as_deref(), book_id) {
                Ok(value) => (
                    StatusCode::OK,
                    jar.add(basket_cookie(value)),
                    "Book removed from basket",
                )
                    .into_response(),
                Err(e) => basket_error_response(e),
            }
        }
    }
}
