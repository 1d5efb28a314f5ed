// src/common/db_utils.rs

use crate::common::error::AppError;

/// `true` quando o Postgres recusou a operação por causa de uma FK
/// (ex.: apagar uma loja que ainda tem produtos).
pub(crate) fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .map(|db_err| db_err.is_foreign_key_violation())
        .unwrap_or(false)
}

/// Converte um erro do sqlx, trocando violação de FK pelo erro de domínio informado.
pub(crate) fn map_delete_error(err: sqlx::Error, on_fk_violation: AppError) -> AppError {
    if is_foreign_key_violation(&err) {
        on_fk_violation
    } else {
        AppError::DatabaseError(err)
    }
}
