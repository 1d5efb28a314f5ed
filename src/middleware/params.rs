// src/middleware/params.rs

// Path/Query do axum rejeitam com texto puro; estes envoltórios devolvem
// o mesmo corpo JSON `{ "error", "details" }` do resto da API.

use axum::{
    extract::{FromRequestParts, Path, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::{
    common::error::{ApiError, AppError},
    middleware::i18n::Locale,
};

pub struct PathParams<T>(pub T);

impl<S, T> FromRequestParts<S> for PathParams<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(PathParams(value)),
            Err(rejection) => {
                let locale = Locale::from_headers(&parts.headers);
                Err(AppError::InvalidPathParams(rejection.body_text()).to_api_error(&locale))
            }
        }
    }
}

pub struct QueryParams<T>(pub T);

impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(QueryParams(value)),
            Err(rejection) => {
                let locale = Locale::from_headers(&parts.headers);
                Err(AppError::InvalidQueryParams(rejection.body_text()).to_api_error(&locale))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{Request, StatusCode};
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct YearQuery {
        year: Option<i32>,
    }

    #[tokio::test]
    async fn bad_query_becomes_json_api_error() {
        let mut parts = Request::builder()
            .uri("/graph?year=ontem")
            .header("accept-language", "pt")
            .body(())
            .unwrap()
            .into_parts()
            .0;

        let err = QueryParams::<YearQuery>::from_request_parts(&mut parts, &()).await.err().unwrap();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.error, "Parâmetro de query inválido.");
        assert!(err.details.unwrap().contains_key("query"));
    }

    #[tokio::test]
    async fn valid_query_is_parsed() {
        let mut parts = Request::builder().uri("/graph?year=2024").body(()).unwrap().into_parts().0;

        let QueryParams(query) = QueryParams::<YearQuery>::from_request_parts(&mut parts, &())
            .await
            .ok()
            .unwrap();
        assert_eq!(query.year, Some(2024));
    }
}
