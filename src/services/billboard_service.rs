// src/services/billboard_service.rs

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::BillboardRepository,
    models::billboard::{Billboard, BillboardPayload},
};

// A posse da loja já foi verificada pelo handler (StoreService::get_owned_store);
// aqui o store_id só restringe o escopo das queries.
#[derive(Clone)]
pub struct BillboardService {
    repo: BillboardRepository,
}

impl BillboardService {
    pub fn new(repo: BillboardRepository) -> Self {
        Self { repo }
    }

    pub async fn list(&self, store_id: Uuid) -> Result<Vec<Billboard>, AppError> {
        self.repo.list(store_id).await
    }

    pub async fn get(&self, store_id: Uuid, billboard_id: Uuid) -> Result<Billboard, AppError> {
        self.repo
            .find(store_id, billboard_id)
            .await?
            .ok_or(AppError::BillboardNotFound)
    }

    pub async fn create(
        &self,
        store_id: Uuid,
        payload: &BillboardPayload,
    ) -> Result<Billboard, AppError> {
        let billboard = self
            .repo
            .create(store_id, &payload.label, &payload.image_url)
            .await?;

        tracing::info!(%store_id, billboard_id = %billboard.id, "Billboard criado");
        Ok(billboard)
    }

    pub async fn update(
        &self,
        store_id: Uuid,
        billboard_id: Uuid,
        payload: &BillboardPayload,
    ) -> Result<Billboard, AppError> {
        let billboard = self
            .repo
            .update(store_id, billboard_id, &payload.label, &payload.image_url)
            .await?
            .ok_or(AppError::BillboardNotFound)?;

        tracing::info!(%store_id, %billboard_id, "Billboard atualizado");
        Ok(billboard)
    }

    pub async fn delete(&self, store_id: Uuid, billboard_id: Uuid) -> Result<(), AppError> {
        if !self.repo.delete(store_id, billboard_id).await? {
            return Err(AppError::BillboardNotFound);
        }

        tracing::info!(%store_id, %billboard_id, "Billboard excluído");
        Ok(())
    }
}
