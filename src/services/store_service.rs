// src/services/store_service.rs

use uuid::Uuid;

use crate::{common::error::AppError, db::StoreRepository, models::store::Store};

#[derive(Clone)]
pub struct StoreService {
    repo: StoreRepository,
}

impl StoreService {
    pub fn new(repo: StoreRepository) -> Self {
        Self { repo }
    }

    pub async fn create_store(&self, owner_id: Uuid, name: &str) -> Result<Store, AppError> {
        let store = self.repo.create(owner_id, name).await?;
        tracing::info!(store_id = %store.id, %owner_id, "Loja criada");
        Ok(store)
    }

    pub async fn list_stores(&self, owner_id: Uuid) -> Result<Vec<Store>, AppError> {
        self.repo.list_for_owner(owner_id).await
    }

    /// Busca a loja garantindo que pertence ao usuário.
    /// Usado por todas as rotas aninhadas em `/api/stores/{store_id}`.
    pub async fn get_owned_store(&self, store_id: Uuid, owner_id: Uuid) -> Result<Store, AppError> {
        self.repo
            .find_for_owner(store_id, owner_id)
            .await?
            .ok_or(AppError::StoreNotFound)
    }

    pub async fn rename_store(
        &self,
        store_id: Uuid,
        owner_id: Uuid,
        name: &str,
    ) -> Result<Store, AppError> {
        let store = self
            .repo
            .rename(store_id, owner_id, name)
            .await?
            .ok_or(AppError::StoreNotFound)?;

        tracing::info!(%store_id, "Loja atualizada");
        Ok(store)
    }

    pub async fn delete_store(&self, store_id: Uuid, owner_id: Uuid) -> Result<(), AppError> {
        match self.repo.delete(store_id, owner_id).await {
            Ok(true) => {
                tracing::info!(%store_id, "Loja excluída");
                Ok(())
            }
            Ok(false) => Err(AppError::StoreNotFound),
            Err(AppError::StoreHasDependents) => {
                tracing::warn!(%store_id, "Exclusão recusada: loja ainda possui dependentes");
                Err(AppError::StoreHasDependents)
            }
            Err(e) => Err(e),
        }
    }
}
