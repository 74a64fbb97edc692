use crate::data::database::connect;
use crate::data::models::basket_item::{BasketItem, NewBasketItem};
use crate::data::models::book::Book;
use crate::data::models::schema::{basket_items, books};
use diesel::prelude::*;
use diesel::result;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

pub struct BasketRepo {}

impl BasketRepo {
    pub fn new() -> Self {
        BasketRepo {}
    }

    /// All basket rows of a user joined with their book, oldest first.
    pub async fn get_with_books(&self, user_id: i32) -> Result<Vec<(BasketItem, Book)>, result::Error> {
        let mut conn = connect().await?;

        basket_items::table
            .inner_join(books::table)
            .filter(basket_items::user_id.eq(user_id))
            .order(basket_items::id.asc())
            .select((BasketItem::as_select(), Book::as_select()))
            .load::<(BasketItem, Book)>(&mut conn)
            .await
    }

    /// Adds `count` copies of a book to the user's basket, merging with an existing row.
    /// Returns the row's new count, or `None` without writing when the merged
    /// count would overflow.
    pub async fn add_or_increment(
        &self,
        user_id: i32,
        book_id: i32,
        count: i32,
    ) -> Result<Option<i32>, result::Error> {
        let mut conn = connect().await?;

        conn.transaction::<_, result::Error, _>(|connection| {
            async move {
                let existing = basket_items::table
                    .filter(basket_items::user_id.eq(user_id))
                    .filter(basket_items::book_id.eq(book_id))
                    .select(BasketItem::as_select())
                    .for_update()
                    .first(connection)
                    .await
                    .optional()?;

                match existing {
                    Some(item) => {
                        let Some(total) = item.count.checked_add(count) else {
                            return Ok(None);
                        };

                        diesel::update(basket_items::table.find(item.id))
                            .set(basket_items::count.eq(total))
                            .execute(connection)
                            .await?;

                        Ok(Some(total))
                    }
                    None => {
                        diesel::insert_into(basket_items::table)
                            .values(&NewBasketItem {
                                user_id,
                                book_id,
                                count,
                            })
                            .execute(connection)
                            .await?;

                        Ok(Some(count))
                    }
                }
            }
            .scope_boxed()
        })
        .await
    }

    /// Returns the number of rows removed.
    pub async fn remove(&self, user_id: i32, book_id: i32) -> Result<usize, result::Error> {
        let mut conn = connect().await?;

        diesel::delete(
            basket_items::table
                .filter(basket_items::user_id.eq(user_id))
                .filter(basket_items::book_id.eq(book_id)),
        )
        .execute(&mut conn)
        .await
    }
}

impl Default for BasketRepo {
    fn default() -> Self {
        Self::new()
    }
}
