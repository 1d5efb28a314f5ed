// src/config.rs

use std::{env, sync::Arc, time::Duration};

use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{
    db::{BillboardRepository, OrderRepository, StoreRepository},
    services::{BillboardService, RevenueService, StoreService},
};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 3;

// Configuração lida do ambiente (e do .env, se existir)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub db_max_connections: u32,
    pub db_acquire_timeout: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Monta a configuração a partir de qualquer fonte chave -> valor.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL deve ser definida")?;

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let db_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("DATABASE_MAX_CONNECTIONS inválido: {raw}"))?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let acquire_timeout_secs = match lookup("DATABASE_ACQUIRE_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("DATABASE_ACQUIRE_TIMEOUT_SECS inválido: {raw}"))?,
            None => DEFAULT_ACQUIRE_TIMEOUT_SECS,
        };

        Ok(Self {
            database_url,
            bind_addr,
            db_max_connections,
            db_acquire_timeout: Duration::from_secs(acquire_timeout_secs),
        })
    }
}

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub store_service: StoreService,
    pub billboard_service: BillboardService,
    pub revenue_service: RevenueService,
}

impl AppState {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(config.db_acquire_timeout)
            .connect(&config.database_url)
            .await
            .context("Falha ao conectar ao banco de dados")?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        Ok(Self::from_pool(db_pool))
    }

    // --- Monta o gráfico de dependências ---
    pub fn from_pool(db_pool: PgPool) -> Self {
        let store_repo = StoreRepository::new(db_pool.clone());
        let billboard_repo = BillboardRepository::new(db_pool.clone());
        let order_repo = OrderRepository::new(db_pool.clone());

        Self {
            store_service: StoreService::new(store_repo),
            billboard_service: BillboardService::new(billboard_repo),
            revenue_service: RevenueService::new(Arc::new(order_repo)),
            db_pool,
        }
    }
}
