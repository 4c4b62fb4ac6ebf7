use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header, request::Parts},
    middleware::Next,
    response::Response,
};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use tracing::warn;

use crate::domain::error::DomainError;
use crate::domain::user::User;
use crate::presentation::AppState;
use crate::presentation::http::app_error::AppError;

/// The user resolved by [`basic_auth_middleware`] for the current request.
#[derive(Debug, Clone)]
pub(crate) struct AuthenticatedUser(pub(crate) User);

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or(AppError::Unauthorized)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct BasicCredentials {
    pub(crate) username: String,
    pub(crate) password: String,
}

pub(crate) fn parse_basic_credentials(headers: &HeaderMap) -> Option<BasicCredentials> {
    let auth_header = headers.get(header::AUTHORIZATION)?.to_str().ok()?;

    let (scheme, encoded) = auth_header.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }

    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    // пароль может содержать ':', поэтому делим только по первому
    let (username, password) = decoded.split_once(':')?;

    Some(BasicCredentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}

pub(crate) async fn basic_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(credentials) = parse_basic_credentials(request.headers()) else {
        warn!("missing or malformed basic credentials");
        return Err(AppError::Unauthorized);
    };

    let user = match state
        .auth_service
        .authenticate(&credentials.username, &credentials.password)
        .await
    {
        Ok(user) => user,
        Err(DomainError::InvalidCredentials(reason)) => {
            warn!(username = %credentials.username, %reason, "basic auth rejected");
            return Err(AppError::Unauthorized);
        }
        Err(err) => return Err(err.into()),
    };

    request.extensions_mut().insert(AuthenticatedUser(user));

    Ok(next.run(request).await)
}
