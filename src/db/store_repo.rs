// src/db/store_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::{db_utils::map_delete_error, error::AppError},
    models::store::Store,
};

// Repositório de lojas. Toda consulta é filtrada pelo dono,
// então uma loja de outro usuário simplesmente "não existe".
#[derive(Clone)]
pub struct StoreRepository {
    pool: PgPool,
}

impl StoreRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, owner_id: Uuid, name: &str) -> Result<Store, AppError> {
        let store = sqlx::query_as::<_, Store>(
            "INSERT INTO stores (name, owner_id) VALUES ($1, $2) RETURNING *",
        )
        .bind(name)
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(store)
    }

    pub async fn list_for_owner(&self, owner_id: Uuid) -> Result<Vec<Store>, AppError> {
        let stores = sqlx::query_as::<_, Store>(
            "SELECT * FROM stores WHERE owner_id = $1 ORDER BY created_at ASC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(stores)
    }

    pub async fn find_for_owner(
        &self,
        store_id: Uuid,
        owner_id: Uuid,
    ) -> Result<Option<Store>, AppError> {
        let store = sqlx::query_as::<_, Store>(
            "SELECT * FROM stores WHERE id = $1 AND owner_id = $2",
        )
        .bind(store_id)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(store)
    }

    pub async fn rename(
        &self,
        store_id: Uuid,
        owner_id: Uuid,
        name: &str,
    ) -> Result<Option<Store>, AppError> {
        let store = sqlx::query_as::<_, Store>(
            r#"
            UPDATE stores
               SET name = $3, updated_at = NOW()
             WHERE id = $1 AND owner_id = $2
            RETURNING *
            "#,
        )
        .bind(store_id)
        .bind(owner_id)
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(store)
    }

    /// Retorna `false` se nada foi apagado (loja inexistente ou de outro dono).
    pub async fn delete(&self, store_id: Uuid, owner_id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM stores WHERE id = $1 AND owner_id = $2")
            .bind(store_id)
            .bind(owner_id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_delete_error(e, AppError::StoreHasDependents))?;

        Ok(result.rows_affected() > 0)
    }
}
