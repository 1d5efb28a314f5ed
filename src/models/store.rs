// src/models/store.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

// ---
// Store (a "Loja")
// ---
// Fronteira de escopo de tudo: billboards, produtos e pedidos pertencem a uma loja.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: Uuid,
    pub name: String,
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Formulário de configurações (e de criação) da loja.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StorePayload {
    #[validate(length(min = 3, max = 25, message = "store.name.length"))]
    pub name: String,
}
