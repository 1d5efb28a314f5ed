use std::collections::HashMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::{common::i18n, middleware::i18n::Locale};

// Erro de domínio, usado por repositórios e serviços.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Cabeçalho de usuário ausente")]
    MissingIdentity,

    #[error("Cabeçalho de usuário inválido")]
    InvalidIdentity,

    #[error("Loja não encontrada")]
    StoreNotFound,

    #[error("Billboard não encontrado")]
    BillboardNotFound,

    #[error("Loja ainda possui produtos, categorias ou billboards")]
    StoreHasDependents,

    #[error("Billboard ainda usado por categorias")]
    BillboardInUse,

    // Parâmetros de rota (ex.: store_id que não é UUID)
    #[error("Parâmetro de rota inválido: {0}")]
    InvalidPathParams(String),

    #[error("Parâmetro de query inválido: {0}")]
    InvalidQueryParams(String),

    // Falha de acesso a dados: conexão, timeout ou erro de query.
    // Nunca é recuperada aqui, sobe inteira até o handler.
    #[error("Erro de banco de dados: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Erro interno do servidor: {0}")]
    InternalServerError(#[from] anyhow::Error),
}

// O corpo de erro que realmente vai para o cliente HTTP.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub error: String,
    pub details: Option<HashMap<String, Vec<String>>>,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_)
            | AppError::InvalidPathParams(_)
            | AppError::InvalidQueryParams(_) => StatusCode::BAD_REQUEST,
            AppError::MissingIdentity | AppError::InvalidIdentity => StatusCode::UNAUTHORIZED,
            AppError::StoreNotFound | AppError::BillboardNotFound => StatusCode::NOT_FOUND,
            AppError::StoreHasDependents | AppError::BillboardInUse => StatusCode::CONFLICT,
            AppError::DatabaseError(_) | AppError::InternalServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn message_key(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "error.validation",
            AppError::InvalidPathParams(_) => "error.invalid_path",
            AppError::InvalidQueryParams(_) => "error.invalid_query",
            AppError::MissingIdentity => "error.missing_identity",
            AppError::InvalidIdentity => "error.invalid_identity",
            AppError::StoreNotFound => "error.store_not_found",
            AppError::BillboardNotFound => "error.billboard_not_found",
            AppError::StoreHasDependents => "error.store_has_dependents",
            AppError::BillboardInUse => "error.billboard_in_use",
            AppError::DatabaseError(_) | AppError::InternalServerError(_) => "error.internal",
        }
    }

    /// Converte o erro de domínio na resposta da API, traduzida para o idioma do cliente.
    pub fn to_api_error(&self, locale: &Locale) -> ApiError {
        let status = self.status();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            // O detalhe fica no log, o cliente recebe só a mensagem genérica
            tracing::error!("Erro Interno do Servidor: {}", self);
        }

        let details = match self {
            AppError::ValidationError(errors) => {
                let mut details = HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .map(|e| match &e.message {
                            Some(key) => i18n::translate(&locale.0, key),
                            None => e.code.to_string(),
                        })
                        .collect();
                    // O cliente envia camelCase (serde), então devolvemos a mesma chave
                    details.insert(camel_case(&field), messages);
                }
                Some(details)
            }
            AppError::InvalidPathParams(reason) => {
                Some(HashMap::from([("path".to_string(), vec![reason.clone()])]))
            }
            AppError::InvalidQueryParams(reason) => {
                Some(HashMap::from([("query".to_string(), vec![reason.clone()])]))
            }
            _ => None,
        };

        ApiError {
            status,
            error: i18n::translate(&locale.0, self.message_key()),
            details,
        }
    }
}

// "image_url" -> "imageUrl"
fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

// Usado quando não há Locale à mão (ex.: rejeições de extratores)
impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        err.to_api_error(&Locale::default())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self.details {
            Some(details) => json!({ "error": self.error, "details": details }),
            None => json!({ "error": self.error }),
        };
        (self.status, Json(body)).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        ApiError::from(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct NamePayload {
        #[validate(length(min = 3, message = "store.name.length"))]
        name: String,
    }

    #[test]
    fn maps_domain_errors_to_status_codes() {
        assert_eq!(AppError::StoreNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::BillboardNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::StoreHasDependents.status(), StatusCode::CONFLICT);
        assert_eq!(AppError::MissingIdentity.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AppError::DatabaseError(sqlx::Error::PoolTimedOut).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn field_names_become_camel_case() {
        assert_eq!(camel_case("image_url"), "imageUrl");
        assert_eq!(camel_case("name"), "name");
        assert_eq!(camel_case("a_b_c"), "aBC");
    }

    #[test]
    fn invalid_path_is_a_bad_request_with_reason() {
        let api = AppError::InvalidPathParams("UUID parsing failed".into()).to_api_error(&Locale::default());

        assert_eq!(api.status, StatusCode::BAD_REQUEST);
        assert_eq!(api.error, "Invalid path parameter.");
        assert_eq!(api.details.unwrap()["path"], vec!["UUID parsing failed".to_string()]);
    }

    #[test]
    fn internal_errors_hide_details_from_client() {
        let api = AppError::DatabaseError(sqlx::Error::PoolTimedOut).to_api_error(&Locale::default());
        assert_eq!(api.error, "Something went wrong.");
        assert!(api.details.is_none());
    }

    #[test]
    fn validation_errors_carry_translated_field_messages() {
        let errors = NamePayload { name: "ab".into() }.validate().unwrap_err();
        let api = AppError::ValidationError(errors).to_api_error(&Locale("pt".into()));

        assert_eq!(api.status, StatusCode::BAD_REQUEST);
        assert_eq!(api.error, "Um ou mais campos são inválidos.");
        let details = api.details.unwrap();
        assert_eq!(
            details["name"],
            vec!["O nome da loja é obrigatório (3 a 25 caracteres).".to_string()]
        );
    }
}
