mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use bigdecimal::BigDecimal;
use common::{body_json, create_admin, create_member, create_test_book, decimal, setup};
use pustok_server_lib::api::server::router;
use pustok_server_lib::data::models::book::UpdateBook;
use pustok_server_lib::data::repos::implementors::basket_repo::BasketRepo;
use pustok_server_lib::data::repos::implementors::book_repo::BookRepo;
use pustok_server_lib::data::repos::traits::repository::Repository;
use serde_json::json;
use tower::ServiceExt;

/// Fetches the checkout page and returns its anti-forgery token.
async fn checkout_token(token: &str) -> String {
    let response = router()
        .oneshot(
            Request::builder()
                .uri("/api/v1/checkout")
                .header("Authorization", format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    body_json(response).await["csrf_token"]
        .as_str()
        .expect("csrf token missing")
        .to_string()
}

async fn post_checkout(token: &str, csrf: Option<&str>, form: serde_json::Value) -> axum::response::Response {
    let mut request = Request::builder()
        .method("POST")
        .uri("/api/v1/checkout")
        .header("Authorization", format!("Bearer {}", token))
        .header(header::CONTENT_TYPE, "application/json");

    if let Some(csrf) = csrf {
        request = request
            .header(header::COOKIE, format!("csrf_token={}", csrf))
            .header("x-csrf-token", csrf);
    }

    router()
        .oneshot(request.body(Body::from(serde_json::to_vec(&form).unwrap())).unwrap())
        .await
        .unwrap()
}

fn valid_form() -> serde_json::Value {
    json!({ "address": "12 Library Street", "phone": "+994 50 123 45 67", "note": "Leave at the door" })
}

#[tokio::test]
#[serial_test::serial]
#[ignore = "requires a MySQL database at DATABASE_URL"]
async fn test_checkout_snapshots_prices_and_clears_basket() {
    setup().await.expect("Setup failed");
    let (user_id, token) = create_member("reader").await;
    let book_id = create_test_book("Dune", 100, 10).await;

    BasketRepo::new()
        .add_or_increment(user_id, book_id, 2)
        .await
        .expect("Failed to fill basket");

    let csrf = checkout_token(&token).await;
    let response = post_checkout(&token, Some(&csrf), valid_form()).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/api/v1/orders"
    );
    let order_id: i32 = response
        .headers()
        .get("x-order-id")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .expect("order id header missing");

    let remaining = BasketRepo::new().get_with_books(user_id).await.unwrap();
    assert!(remaining.is_empty());

    BookRepo::new()
        .update(
            book_id,
            UpdateBook {
                sale_price: Some(BigDecimal::from(200)),
                ..Default::default()
            },
        )
        .await
        .expect("Failed to reprice book");

    let response = router()
        .oneshot(
            Request::builder()
                .uri(format!("/api/v1/orders/{}", order_id))
                .header("Authorization", format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let order = body_json(response).await;
    assert_eq!(order["status"], "Pending");
    assert_eq!(order["address"], "12 Library Street");
    assert_eq!(order["items"][0]["count"], 2);
    assert_eq!(decimal(&order["items"][0]["unit_price"]), BigDecimal::from(90));
    assert_eq!(decimal(&order["total_price"]), BigDecimal::from(180));
}

#[tokio::test]
#[serial_test::serial]
#[ignore = "requires a MySQL database at DATABASE_URL"]
async fn test_checkout_without_anti_forgery_token_is_forbidden() {
    setup().await.expect("Setup failed");
    let (user_id, token) = create_member("reader").await;
    let book_id = create_test_book("Dune", 100, 0).await;
    BasketRepo::new().add_or_increment(user_id, book_id, 1).await.unwrap();

    let response = post_checkout(&token, None, valid_form()).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(BasketRepo::new().get_with_books(user_id).await.unwrap().len(), 1);
}

#[tokio::test]
#[serial_test::serial]
#[ignore = "requires a MySQL database at DATABASE_URL"]
async fn test_invalid_checkout_form_echoes_basket_and_errors() {
    setup().await.expect("Setup failed");
    let (user_id, token) = create_member("reader").await;
    let book_id = create_test_book("Dune", 100, 0).await;
    BasketRepo::new().add_or_increment(user_id, book_id, 1).await.unwrap();

    let csrf = checkout_token(&token).await;
    let response = post_checkout(&token, Some(&csrf), json!({ "address": "", "phone": "abc" })).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    let fields: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|e| e["field"].as_str())
        .collect();
    assert_eq!(fields, vec!["address", "phone"]);
    assert_eq!(body["order"]["phone"], "abc");
    assert_eq!(body["basket"]["items"].as_array().unwrap().len(), 1);
}

#[tokio::test]
#[serial_test::serial]
#[ignore = "requires a MySQL database at DATABASE_URL"]
async fn test_checkout_with_empty_basket_is_rejected() {
    setup().await.expect("Setup failed");
    let (_, token) = create_member("reader").await;

    let csrf = checkout_token(&token).await;
    let response = post_checkout(&token, Some(&csrf), valid_form()).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
#[serial_test::serial]
#[ignore = "requires a MySQL database at DATABASE_URL"]
async fn test_order_of_another_member_is_not_found() {
    setup().await.expect("Setup failed");
    let (owner_id, owner_token) = create_member("owner").await;
    let (_, other_token) = create_member("stranger").await;
    let (_, admin_token) = create_admin("boss").await;
    let book_id = create_test_book("Dune", 100, 0).await;
    BasketRepo::new().add_or_increment(owner_id, book_id, 1).await.unwrap();

    let csrf = checkout_token(&owner_token).await;
    let response = post_checkout(&owner_token, Some(&csrf), valid_form()).await;
    let order_id = response.headers()["x-order-id"].to_str().unwrap().to_string();

    let get = |token: String| {
        let uri = format!("/api/v1/orders/{}", order_id);
        async move {
            router()
                .oneshot(
                    Request::builder()
                        .uri(uri)
                        .header("Authorization", format!("Bearer {}", token))
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap()
                .status()
        }
    };

    assert_eq!(get(owner_token).await, StatusCode::OK);
    assert_eq!(get(other_token).await, StatusCode::NOT_FOUND);
    assert_eq!(get(admin_token).await, StatusCode::OK);
}

#[tokio::test]
#[serial_test::serial]
#[ignore = "requires a MySQL database at DATABASE_URL"]
async fn test_admin_moves_order_through_statuses() {
    setup().await.expect("Setup failed");
    let (member_id, member_token) = create_member("reader").await;
    let (_, admin_token) = create_admin("boss").await;
    let book_id = create_test_book("Dune", 100, 0).await;
    BasketRepo::new().add_or_increment(member_id, book_id, 1).await.unwrap();

    let csrf = checkout_token(&member_token).await;
    let response = post_checkout(&member_token, Some(&csrf), valid_form()).await;
    let order_id = response.headers()["x-order-id"].to_str().unwrap().to_string();

    let patch = |token: &str, status: &str| {
        Request::builder()
            .method("PATCH")
            .uri(format!("/api/v1/admin/orders/{}/status", order_id))
            .header("Authorization", format!("Bearer {}", token))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({ "status": status }).to_string()))
            .unwrap()
    };

    let response = router().oneshot(patch(&member_token, "Accepted")).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = router().oneshot(patch(&admin_token, "Shipped")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = router().oneshot(patch(&admin_token, "Accepted")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = router().oneshot(patch(&admin_token, "Pending")).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = router()
        .oneshot(
            Request::builder()
                .uri("/api/v1/admin/orders")
                .header("Authorization", format!("Bearer {}", admin_token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let orders = body_json(response).await;
    assert_eq!(orders[0]["status"], "Accepted");
}
