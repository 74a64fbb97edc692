mod common;

use common::{create_member, create_test_book, setup};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use pustok_server_lib::data::database::Database;
use pustok_server_lib::data::models::schema::orders;
use pustok_server_lib::data::repos::implementors::basket_repo::BasketRepo;
use pustok_server_lib::data::repos::implementors::order_repo::OrderRepo;
use pustok_server_lib::data::repos::implementors::user_repo::UserRepo;
use pustok_server_lib::data::repos::traits::repository::Repository;
use pustok_server_lib::services::order_service::{new_pending_order, OrderContact};

async fn pending_order_for(user_id: i32) -> pustok_server_lib::data::models::order::NewOrder {
    let user = UserRepo::new()
        .get_by_id(user_id)
        .await
        .expect("Query failed")
        .expect("User not found");

    let contact = OrderContact {
        address: "12 Library Street".to_string(),
        phone: "5550100".to_string(),
        note: None,
    };

    new_pending_order(&user, contact, chrono::Utc::now().naive_utc())
}

#[tokio::test]
#[serial_test::serial]
#[ignore = "requires a MySQL database at DATABASE_URL"]
async fn test_create_from_basket_orders_exactly_the_rows_it_deletes() {
    setup().await.expect("Setup failed");
    let (buyer_id, _) = create_member("buyer").await;
    let (other_id, _) = create_member("other").await;
    let first = create_test_book("Dune", 100, 10).await;
    let second = create_test_book("Emma", 40, 0).await;

    let baskets = BasketRepo::new();
    baskets.add_or_increment(buyer_id, first, 2).await.unwrap();
    baskets.add_or_increment(buyer_id, second, 1).await.unwrap();
    baskets.add_or_increment(other_id, first, 5).await.unwrap();

    let order_id = OrderRepo::new()
        .create_from_basket(pending_order_for(buyer_id).await)
        .await
        .expect("Failed to create order")
        .expect("Basket should not be empty");

    let (order, lines) = OrderRepo::new()
        .get_with_items(order_id)
        .await
        .unwrap()
        .expect("Order not found");

    assert_eq!(order.user_id, buyer_id);
    let ordered: Vec<(i32, i32)> = lines.iter().map(|(i, _)| (i.book_id, i.count)).collect();
    assert_eq!(ordered, vec![(first, 2), (second, 1)]);

    assert!(baskets.get_with_books(buyer_id).await.unwrap().is_empty());

    let untouched = baskets.get_with_books(other_id).await.unwrap();
    assert_eq!(untouched.len(), 1);
    assert_eq!(untouched[0].0.count, 5);
}

#[tokio::test]
#[serial_test::serial]
#[ignore = "requires a MySQL database at DATABASE_URL"]
async fn test_create_from_empty_basket_writes_nothing() {
    setup().await.expect("Setup failed");
    let (buyer_id, _) = create_member("buyer").await;

    let created = OrderRepo::new()
        .create_from_basket(pending_order_for(buyer_id).await)
        .await
        .expect("Query failed");

    assert_eq!(created, None);

    let db = Database::new().await.expect("Database is not configured");
    let mut conn = db.get_connection().await.expect("Failed to get a connection");
    let count: i64 = orders::table.count().get_result(&mut conn).await.unwrap();
    assert_eq!(count, 0);
}
