// src/middleware/auth.rs

use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use crate::{
    common::error::{ApiError, AppError},
    middleware::i18n::Locale,
};

// A autenticação acontece antes deste serviço (gateway / sessão).
// O gateway repassa o ID do usuário já autenticado neste cabeçalho.
pub const USER_ID_HEADER: &str = "x-user-id";

// Extrator para obter o usuário autenticado diretamente nos handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser(pub Uuid);

impl AuthenticatedUser {
    fn from_parts(parts: &Parts) -> Result<Self, AppError> {
        let value = parts
            .headers
            .get(USER_ID_HEADER)
            .ok_or(AppError::MissingIdentity)?;

        let value_str = value.to_str().map_err(|_| AppError::InvalidIdentity)?;
        let user_id = Uuid::parse_str(value_str.trim()).map_err(|_| AppError::InvalidIdentity)?;

        Ok(AuthenticatedUser(user_id))
    }
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        AuthenticatedUser::from_parts(parts).map_err(|e| {
            let locale = Locale::from_headers(&parts.headers);
            e.to_api_error(&locale)
        })
    }
}
