use crate::data::database::connect;
use crate::data::models::basket_item::BasketItem;
use crate::data::models::book::Book;
use crate::data::models::order::{NewOrder, Order, UpdateOrder};
use crate::data::models::order_item::{NewOrderItem, OrderItem};
use crate::data::models::schema::{basket_items, books, order_items, orders};
use crate::data::repos::traits::repository::Repository;
use crate::services::order_service::snapshot_basket;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use std::collections::HashMap;

pub struct OrderRepo {}

impl OrderRepo {
    pub fn new() -> Self {
        OrderRepo {}
    }

    /// Retrieves all orders of a user, newest first.
    pub async fn get_by_user_id(&self, user_id: i32) -> Result<Vec<Order>, result::Error> {
        let mut conn = connect().await?;

        orders::table
            .filter(orders::user_id.eq(user_id))
            .order((orders::created_at.desc(), orders::id.desc()))
            .select(Order::as_select())
            .load(&mut conn)
            .await
    }

    /// Locks the owner's basket rows, snapshots them into order lines, inserts
    /// the order and its lines, then deletes exactly the rows that were
    /// snapshotted, all in one transaction. Returns the new order id, or `None`
    /// without writing anything when the basket is empty.
    pub async fn create_from_basket(&self, new_order: NewOrder) -> Result<Option<i32>, result::Error> {
        let mut conn = connect().await?;

        conn.transaction::<_, result::Error, _>(|connection| {
            async move {
                let rows = basket_items::table
                    .inner_join(books::table)
                    .filter(basket_items::user_id.eq(new_order.user_id))
                    .order(basket_items::id.asc())
                    .select((BasketItem::as_select(), Book::as_select()))
                    .for_update()
                    .load::<(BasketItem, Book)>(connection)
                    .await?;

                if rows.is_empty() {
                    return Ok(None);
                }

                diesel::insert_into(orders::table)
                    .values(&new_order)
                    .execute(connection)
                    .await?;

                let new_id: i32 = diesel::select(diesel::dsl::sql::<diesel::sql_types::Integer>(
                    "LAST_INSERT_ID()",
                ))
                .get_result(connection)
                .await?;

                let lines: Vec<NewOrderItem> = snapshot_basket(&rows)
                    .into_iter()
                    .map(|item| NewOrderItem {
                        order_id: new_id,
                        ..item
                    })
                    .collect();

                diesel::insert_into(order_items::table)
                    .values(&lines)
                    .execute(connection)
                    .await?;

                let snapshotted: Vec<i32> = rows.iter().map(|(item, _)| item.id).collect();
                diesel::delete(basket_items::table.filter(basket_items::id.eq_any(snapshotted)))
                    .execute(connection)
                    .await?;

                Ok(Some(new_id))
            }
            .scope_boxed()
        })
        .await
    }

    /// An order with each line and the book it references.
    pub async fn get_with_items(
        &self,
        order_id: i32,
    ) -> Result<Option<(Order, Vec<(OrderItem, Book)>)>, result::Error> {
        let mut conn = connect().await?;

        let Some(order) = orders::table
            .find(order_id)
            .select(Order::as_select())
            .first(&mut conn)
            .await
            .optional()?
        else {
            return Ok(None);
        };

        let lines = order_items::table
            .inner_join(books::table)
            .filter(order_items::order_id.eq(order.id))
            .order(order_items::id.asc())
            .select((OrderItem::as_select(), Book::as_select()))
            .load::<(OrderItem, Book)>(&mut conn)
            .await?;

        Ok(Some((order, lines)))
    }

    /// Pairs every order with its lines using a single query for all lines.
    pub async fn attach_items(
        &self,
        orders_list: Vec<Order>,
    ) -> Result<Vec<(Order, Vec<OrderItem>)>, result::Error> {
        if orders_list.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = connect().await?;

        let ids: Vec<i32> = orders_list.iter().map(|o| o.id).collect();

        let lines = order_items::table
            .filter(order_items::order_id.eq_any(ids))
            .order(order_items::id.asc())
            .select(OrderItem::as_select())
            .load(&mut conn)
            .await?;

        let mut map: HashMap<i32, Vec<OrderItem>> = HashMap::new();

        for line in lines {
            map.entry(line.order_id).or_default().push(line);
        }

        let result = orders_list
            .into_iter()
            .map(|o| {
                let items = map.remove(&o.id).unwrap_or_default();
                (o, items)
            })
            .collect();

        Ok(result)
    }
}

#[async_trait]
impl Repository for OrderRepo {
    type Id = i32;
    type Item = Order;
    type NewItem<'a> = NewOrder;
    type UpdateForm<'a> = UpdateOrder<'a>;

    async fn get_all(&self) -> Result<Option<Vec<Self::Item>>, result::Error> {
        let mut conn = connect().await?;

        match orders::table
            .order((orders::created_at.desc(), orders::id.desc()))
            .select(Order::as_select())
            .load(&mut conn)
            .await
        {
            Ok(value) if value.is_empty() => Ok(None),
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn get_by_id(&self, id: Self::Id) -> Result<Option<Self::Item>, result::Error> {
        let mut conn = connect().await?;

        orders::table
            .find(id)
            .select(Order::as_select())
            .first(&mut conn)
            .await
            .optional()
    }

    async fn add<'a>(&self, item: Self::NewItem<'a>) -> Result<(), result::Error> {
        let mut conn = connect().await?;

        diesel::insert_into(orders::table)
            .values(&item)
            .execute(&mut conn)
            .await?;

        Ok(())
    }

    async fn update<'a>(
        &self,
        id: Self::Id,
        item: Self::UpdateForm<'a>,
    ) -> Result<(), result::Error> {
        let mut conn = connect().await?;

        conn.transaction::<_, result::Error, _>(|connection| {
            async move {
                diesel::update(orders::table.find(id))
                    .set(&item)
                    .execute(connection)
                    .await?;
                Ok(())
            }
            .scope_boxed()
        })
        .await
    }

    async fn delete(&self, id: Self::Id) -> Result<(), result::Error> {
        let mut conn = connect().await?;

        diesel::delete(orders::table.find(id))
            .execute(&mut conn)
            .await?;

        Ok(())
    }
}

impl Default for OrderRepo {
    fn default() -> Self {
        Self::new()
    }
}
