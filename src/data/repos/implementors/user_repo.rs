use crate::data::database::connect;
use crate::data::models::schema::users;
use crate::data::models::user::{NewUser, UpdateUser, User};
use crate::data::repos::traits::repository::Repository;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

pub struct UserRepo {}

impl UserRepo {
    pub fn new() -> Self {
        UserRepo {}
    }

    pub async fn get_by_user_name(&self, user_name: &str) -> Result<Option<User>, result::Error> {
        let mut conn = connect().await?;

        users::table
            .filter(users::user_name.eq(user_name))
            .select(User::as_select())
            .first(&mut conn)
            .await
            .optional()
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<User>, result::Error> {
        let mut conn = connect().await?;

        users::table
            .filter(users::email.eq(email))
            .select(User::as_select())
            .first(&mut conn)
            .await
            .optional()
    }
}

#[async_trait]
impl Repository for UserRepo {
    type Id = i32;
    type Item = User;
    type NewItem<'a> = NewUser<'a>;
    type UpdateForm<'a> = UpdateUser<'a>;

    async fn get_all(&self) -> Result<Option<Vec<Self::Item>>, result::Error> {
        let mut conn = connect().await?;

        match users::table
            .select(User::as_select())
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

        users::table
            .find(id)
            .select(User::as_select())
            .first(&mut conn)
            .await
            .optional()
    }

    async fn add<'a>(&self, item: Self::NewItem<'a>) -> Result<(), result::Error> {
        let mut conn = connect().await?;

        diesel::insert_into(users::table)
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
                diesel::update(users::table.find(id))
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

        diesel::delete(users::table.find(id))
            .execute(&mut conn)
            .await?;

        Ok(())
    }
}

impl Default for UserRepo {
    fn default() -> Self {
        Self::new()
    }
}
