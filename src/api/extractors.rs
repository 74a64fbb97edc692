use crate::api::errors::APIErrors;
use crate::security::errors::AuthError;
use crate::security::jwt::{AccessClaims, JwtService};
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::RequestPartsExt;
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::Authorization;
use axum_extra::TypedHeader;

/// Requires a valid bearer token.
impl<S> FromRequestParts<S> for AccessClaims
where
    S: Send + Sync,
{
    type Rejection = APIErrors;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        decode_token_from_request_part(parts).await
    }
}

/// Whoever is making the request: `Some` claims when a bearer token is
/// present, `None` for anonymous guests. A present but invalid token is
/// still rejected.
#[derive(Debug, Clone)]
pub struct Viewer(pub Option<AccessClaims>);

impl Viewer {
    /// The user id when the viewer holds the member role.
    pub fn member_id(&self) -> Option<i32> {
        self.0
            .as_ref()
            .filter(|claims| claims.is_member())
            .map(AccessClaims::user_id)
    }
}

impl<S> FromRequestParts<S> for Viewer
where
    S: Send + Sync,
{
    type Rejection = APIErrors;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if !parts.headers.contains_key(AUTHORIZATION) {
            return Ok(Viewer(None));
        }

        decode_token_from_request_part(parts).await.map(|c| Viewer(Some(c)))
    }
}

/// Requires a valid bearer token carrying the member role.
#[derive(Debug, Clone)]
pub struct Member(pub AccessClaims);

impl<S> FromRequestParts<S> for Member
where
    S: Send + Sync,
{
    type Rejection = APIErrors;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let claims: AccessClaims = decode_token_from_request_part(parts).await?;

        if !claims.is_member() {
            tracing::warn!("User {} lacks the member role", claims.user_id());
            return Err(APIErrors::Forbidden);
        }

        Ok(Member(claims))
    }
}

async fn decode_token_from_request_part<T>(parts: &mut Parts) -> Result<T, APIErrors>
where
    T: for<'de> serde::Deserialize<'de> + std::fmt::Debug + Sync + Send,
{
    let TypedHeader(Authorization(bearer)) = parts
        .extract::<TypedHeader<Authorization<Bearer>>>()
        .await
        .map_err(|_| {
            tracing::warn!("Invalid authorization header");
            APIErrors::Unauthorized
        })?;

    let tokenizer = JwtService::from_config().map_err(|e| {
        tracing::error!("Cannot verify tokens: {}", e);
        APIErrors::Internal
    })?;

    tokenizer.decode_token::<T>(bearer.token()).map_err(|e: AuthError| {
        tracing::warn!("Token decoding error: {}", e);
        APIErrors::Unauthorized
    })
}
