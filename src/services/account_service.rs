use crate::data::models::role::MEMBER_ROLE;
use crate::data::models::user::{NewUser, User};
use crate::data::repos::implementors::role_repo::RoleRepo;
use crate::data::repos::implementors::user_repo::UserRepo;
use crate::data::repos::traits::repository::Repository;
use crate::security::auth::AuthService;
use crate::security::jwt::JwtService;
use crate::services::errors::AccountServiceError;
use diesel::result::{self, DatabaseErrorKind};

pub struct NewAccount<'a> {
    pub user_name: &'a str,
    pub email: &'a str,
    pub full_name: &'a str,
    pub password: &'a str,
}

pub struct AccountService;

impl AccountService {
    pub fn new() -> Self {
        AccountService
    }

    /// Creates a user holding the member role. Returns the user and its role names.
    pub async fn register(&self, account: NewAccount<'_>) -> Result<(User, Vec<String>), AccountServiceError> {
        let users = UserRepo::new();

        if users
            .get_by_user_name(account.user_name)
            .await
            .map_err(|_| AccountServiceError::DatabaseError)?
            .is_some()
        {
            return Err(AccountServiceError::UserNameTaken);
        }

        if users
            .get_by_email(account.email)
            .await
            .map_err(|_| AccountServiceError::DatabaseError)?
            .is_some()
        {
            return Err(AccountServiceError::EmailTaken);
        }

        let password_hash = AuthService::new()
            .hash_password(account.password)
            .await
            .map_err(|e| {
                tracing::error!("Error hashing password: {}", e);
                AccountServiceError::PasswordProcessing
            })?;

        match users
            .add(NewUser {
                user_name: account.user_name,
                email: account.email,
                full_name: account.full_name,
                password_hash: &password_hash,
            })
            .await
        {
            Ok(()) => {}
            Err(result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
                tracing::warn!("Registration for {} collided with an existing account", account.user_name);
                return Err(self.conflict(&users, account.user_name).await);
            }
            Err(e) => {
                tracing::error!("Error creating user: {}", e);
                return Err(AccountServiceError::DatabaseError);
            }
        }

        let user = users
            .get_by_user_name(account.user_name)
            .await
            .map_err(|_| AccountServiceError::DatabaseError)?
            .ok_or(AccountServiceError::DatabaseError)?;

        let roles = RoleRepo::new();
        roles
            .assign_role(user.id, MEMBER_ROLE)
            .await
            .map_err(|e| {
                tracing::error!("Error assigning member role to user {}: {}", user.id, e);
                AccountServiceError::DatabaseError
            })?;

        let role_names = roles
            .get_role_names_by_user_id(user.id)
            .await
            .map_err(|_| AccountServiceError::DatabaseError)?;

        tracing::info!("User {} registered", user.user_name);

        Ok((user, role_names))
    }

    /// Verifies credentials and issues an access token.
    pub async fn login(&self, user_name: &str, password: &str) -> Result<String, AccountServiceError> {
        let user = UserRepo::new()
            .get_by_user_name(user_name)
            .await
            .map_err(|_| AccountServiceError::DatabaseError)?
            .ok_or(AccountServiceError::InvalidCredentials)?;

        let verified = AuthService::new()
            .verify_password(password, &user.password_hash)
            .await
            .map_err(|e| {
                tracing::error!("Error verifying password: {}", e);
                AccountServiceError::PasswordProcessing
            })?;

        if !verified {
            return Err(AccountServiceError::InvalidCredentials);
        }

        let roles = RoleRepo::new()
            .get_role_names_by_user_id(user.id)
            .await
            .map_err(|_| AccountServiceError::DatabaseError)?;

        JwtService::from_config()
            .and_then(|jwt| jwt.generate_token(user.id, roles))
            .map_err(|e| {
                tracing::error!("Error issuing token: {}", e);
                AccountServiceError::TokenCreation
            })
    }

    /// Which unique column a failed insert collided with.
    async fn conflict(&self, users: &UserRepo, user_name: &str) -> AccountServiceError {
        match users.get_by_user_name(user_name).await {
            Ok(Some(_)) => AccountServiceError::UserNameTaken,
            Ok(None) => AccountServiceError::EmailTaken,
            Err(_) => AccountServiceError::DatabaseError,
        }
    }
}

impl Default for AccountService {
    fn default() -> Self {
        Self::new()
    }
}
