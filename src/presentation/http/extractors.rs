// src/presentation/http/extractors.rs
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationError},
    presentation::http::state::HttpState,
};
use axum::{Extension, extract::FromRequestParts, http::request::Parts};
use headers::{Cookie, HeaderMapExt};

use super::error::HttpError;

const SESSION_COOKIE: &str = "sid";

#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                HttpError::from_error(ApplicationError::Infrastructure(
                    "application state missing".into(),
                ))
            })?;

        let session_id = parts
            .headers
            .typed_get::<Cookie>()
            .and_then(|cookie| cookie.get(SESSION_COOKIE).map(str::to_owned))
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::Unauthorized(
                    "missing session cookie".into(),
                ))
            })?;

        let authenticator = app_state.services.session_authenticator();
        let user = authenticator
            .authenticate(&session_id)
            .await
            .map_err(HttpError::from_error)?;

        Ok(Self(user))
    }
}
