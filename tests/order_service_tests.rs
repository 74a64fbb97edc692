mod common;

use common::{create_member, setup};
use pustok_server_lib::data::models::order::NewOrder;
use pustok_server_lib::data::repos::implementors::order_repo::OrderRepo;
use pustok_server_lib::data::repos::traits::repository::Repository;
use pustok_server_lib::services::errors::OrderServiceError;
use pustok_server_lib::services::order_service::{OrderService, OrderStatus};

async fn order_with_status(user_id: i32, status: &str) -> i32 {
    let repo = OrderRepo::new();

    repo.add(NewOrder {
        user_id,
        full_name: "Test Member".to_string(),
        email: "reader@example.com".to_string(),
        address: "12 Library Street".to_string(),
        phone: "5550100".to_string(),
        note: None,
        status: status.to_string(),
        created_at: chrono::Utc::now().naive_utc(),
    })
    .await
    .expect("Failed to add order");

    repo.get_by_user_id(user_id)
        .await
        .expect("Query failed")
        .first()
        .expect("Order not found")
        .id
}

#[tokio::test]
#[serial_test::serial]
#[ignore = "requires a MySQL database at DATABASE_URL"]
async fn test_unknown_stored_status_is_a_database_error() {
    setup().await.expect("Setup failed");
    let (user_id, _) = create_member("reader").await;
    let order_id = order_with_status(user_id, "Shipped").await;

    let result = OrderService::new()
        .update_order_status(order_id, OrderStatus::Accepted, true)
        .await;

    assert_eq!(result, Err(OrderServiceError::DatabaseError));
}

#[tokio::test]
#[serial_test::serial]
#[ignore = "requires a MySQL database at DATABASE_URL"]
async fn test_final_status_cannot_be_reopened() {
    setup().await.expect("Setup failed");
    let (user_id, _) = create_member("reader").await;
    let order_id = order_with_status(user_id, "Completed").await;

    let result = OrderService::new()
        .update_order_status(order_id, OrderStatus::Pending, true)
        .await;

    assert_eq!(result, Err(OrderServiceError::InvalidStatusTransition));
}
