// src/models/billboard.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

// Banner promocional de uma loja
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Billboard {
    pub id: Uuid,
    pub store_id: Uuid,
    pub label: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BillboardPayload {
    #[validate(length(min = 1, message = "billboard.label.required"))]
    pub label: String,

    #[validate(url(message = "billboard.image_url.invalid"))]
    pub image_url: String,
}
