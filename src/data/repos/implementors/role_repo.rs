use crate::data::database::connect;
use crate::data::models::role::{NewRole, Role, UserRole};
use crate::data::models::schema::{roles, user_roles};
use diesel::prelude::*;
use diesel::result;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

pub struct RoleRepo {}

impl RoleRepo {
    pub fn new() -> Self {
        RoleRepo {}
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Option<Role>, result::Error> {
        let mut conn = connect().await?;

        roles::table
            .filter(roles::name.eq(name))
            .select(Role::as_select())
            .first(&mut conn)
            .await
            .optional()
    }

    /// Names of every role assigned to the user.
    pub async fn get_role_names_by_user_id(&self, user_id: i32) -> Result<Vec<String>, result::Error> {
        let mut conn = connect().await?;

        user_roles::table
            .inner_join(roles::table)
            .filter(user_roles::user_id.eq(user_id))
            .select(roles::name)
            .load::<String>(&mut conn)
            .await
    }

    /// Assigns a role by name, creating the role first if it does not exist yet.
    pub async fn assign_role(&self, user_id: i32, role_name: &str) -> Result<(), result::Error> {
        let mut conn = connect().await?;
        let role_name = role_name.to_string();

        conn.transaction::<_, result::Error, _>(|connection| {
            async move {
                let existing = roles::table
                    .filter(roles::name.eq(&role_name))
                    .select(roles::id)
                    .first::<i32>(connection)
                    .await
                    .optional()?;

                let role_id = match existing {
                    Some(id) => id,
                    None => {
                        diesel::insert_into(roles::table)
                            .values(&NewRole { name: &role_name })
                            .execute(connection)
                            .await?;

                        roles::table
                            .filter(roles::name.eq(&role_name))
                            .select(roles::id)
                            .first::<i32>(connection)
                            .await?
                    }
                };

                diesel::insert_or_ignore_into(user_roles::table)
                    .values(&UserRole { user_id, role_id })
                    .execute(connection)
                    .await?;

                Ok(())
            }
            .scope_boxed()
        })
        .await
    }
}

impl Default for RoleRepo {
    fn default() -> Self {
        Self::new()
    }
}
