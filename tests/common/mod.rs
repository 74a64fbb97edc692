#![allow(dead_code)]

use axum::body::Body;
use axum::response::Response;
use bigdecimal::BigDecimal;
use diesel::prelude::*;
use diesel::result;
use diesel_async::RunQueryDsl;
use http_body_util::BodyExt;
use pustok_server_lib::data::database::Database;
use pustok_server_lib::data::models::book::NewBook;
use pustok_server_lib::data::models::schema::*;
use pustok_server_lib::data::repos::implementors::book_repo::BookRepo;
use pustok_server_lib::data::repos::implementors::role_repo::RoleRepo;
use pustok_server_lib::data::repos::traits::repository::Repository;
use pustok_server_lib::services::account_service::{AccountService, NewAccount};
use serde_json::Value;
use std::str::FromStr;

pub async fn setup() -> Result<(), result::Error> {
    let db = Database::new().await.expect("Database is not configured");

    let mut conn = db
        .get_connection()
        .await
        .expect("Failed to get a database connection");

    diesel::delete(order_items::table).execute(&mut conn).await?;
    diesel::delete(orders::table).execute(&mut conn).await?;
    diesel::delete(basket_items::table).execute(&mut conn).await?;
    diesel::delete(book_images::table).execute(&mut conn).await?;
    diesel::delete(book_tags::table).execute(&mut conn).await?;
    diesel::delete(books::table).execute(&mut conn).await?;
    diesel::delete(tags::table).execute(&mut conn).await?;
    diesel::delete(genres::table).execute(&mut conn).await?;
    diesel::delete(authors::table).execute(&mut conn).await?;
    diesel::delete(user_roles::table).execute(&mut conn).await?;
    diesel::delete(roles::table).execute(&mut conn).await?;
    diesel::delete(users::table).execute(&mut conn).await?;

    Ok(())
}

/// Inserts a book with its own author and genre and returns the book id.
pub async fn create_test_book(name: &str, sale_price: i32, discount_percent: i32) -> i32 {
    let db = Database::new().await.expect("Database is not configured");
    let mut conn = db.get_connection().await.expect("Failed to get a connection");

    let author_name = format!("{} Author", name);
    diesel::insert_into(authors::table)
        .values(authors::full_name.eq(&author_name))
        .execute(&mut conn)
        .await
        .expect("Failed to add author");
    let author_id: i32 = authors::table
        .filter(authors::full_name.eq(&author_name))
        .select(authors::id)
        .first(&mut conn)
        .await
        .expect("Author not found");

    let genre_name = format!("{} Genre", name);
    diesel::insert_into(genres::table)
        .values(genres::name.eq(&genre_name))
        .execute(&mut conn)
        .await
        .expect("Failed to add genre");
    let genre_id: i32 = genres::table
        .filter(genres::name.eq(&genre_name))
        .select(genres::id)
        .first(&mut conn)
        .await
        .expect("Genre not found");

    BookRepo::new()
        .add(NewBook {
            author_id,
            genre_id,
            name,
            description: "Test Description",
            cost_price: BigDecimal::from(sale_price / 2),
            sale_price: BigDecimal::from(sale_price),
            discount_percent: BigDecimal::from(discount_percent),
            stock_status: true,
        })
        .await
        .expect("Failed to add book");

    books::table
        .filter(books::name.eq(name))
        .select(books::id)
        .first(&mut conn)
        .await
        .expect("Book not found")
}

/// Registers a member and returns its id and a bearer token.
pub async fn create_member(user_name: &str) -> (i32, String) {
    let service = AccountService::new();
    let email = format!("{}@example.com", user_name);

    let (user, _) = service
        .register(NewAccount {
            user_name,
            email: &email,
            full_name: "Test Member",
            password: "pass",
        })
        .await
        .expect("Failed to register member");

    let token = service
        .login(user_name, "pass")
        .await
        .expect("Failed to log in");

    (user.id, token)
}

pub async fn create_admin(user_name: &str) -> (i32, String) {
    let (user_id, _) = create_member(user_name).await;

    RoleRepo::new()
        .assign_role(user_id, pustok_server_lib::data::models::role::ADMIN_ROLE)
        .await
        .expect("Failed to assign admin role");

    let token = AccountService::new()
        .login(user_name, "pass")
        .await
        .expect("Failed to log in");

    (user_id, token)
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn decimal(value: &Value) -> BigDecimal {
    match value {
        Value::String(s) => BigDecimal::from_str(s).unwrap(),
        other => BigDecimal::from_str(&other.to_string()).unwrap(),
    }
}
