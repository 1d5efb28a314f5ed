// src/db/order_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::order::{group_order_rows, Order, PaidOrderRow},
};

/// Fonte dos pedidos pagos de uma loja, com itens e produtos já carregados.
///
/// É a única dependência de dados do cálculo de receita. Falhas de acesso
/// (conexão, timeout, query) devem subir como `AppError::DatabaseError`.
#[async_trait]
pub trait PaidOrderSource: Send + Sync {
    async fn find_paid_orders(&self, store_id: Uuid) -> Result<Vec<Order>, AppError>;
}

#[derive(Clone)]
pub struct OrderRepository {
    pool: PgPool,
}

impl OrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PaidOrderSource for OrderRepository {
    async fn find_paid_orders(&self, store_id: Uuid) -> Result<Vec<Order>, AppError> {
        // LEFT JOIN: pedido pago sem itens ainda aparece (e soma zero)
        let rows = sqlx::query_as::<_, PaidOrderRow>(
            r#"
            SELECT
                o.id          AS order_id,
                o.store_id    AS store_id,
                o.is_paid     AS is_paid,
                o.created_at  AS created_at,
                oi.id         AS item_id,
                p.id          AS product_id,
                p.store_id    AS product_store_id,
                p.name        AS product_name,
                p.price       AS price
            FROM orders o
            LEFT JOIN order_items oi ON oi.order_id = o.id
            LEFT JOIN products p ON p.id = oi.product_id
            WHERE o.store_id = $1
              AND o.is_paid = true
            ORDER BY o.created_at ASC, o.id ASC, oi.id ASC
            "#,
        )
        .bind(store_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(group_order_rows(rows))
    }
}
