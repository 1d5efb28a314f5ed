// src/services/revenue_service.rs

use std::sync::Arc;

use chrono::Datelike;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::PaidOrderSource,
    models::{
        dashboard::{MonthlyRevenue, RevenueSummary},
        order::Order,
    },
};

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

// ---
// Cálculos puros sobre o snapshot de pedidos
// ---

/// Soma dos preços dos produtos de todos os itens do pedido (cada item conta uma vez).
pub fn order_total(order: &Order) -> Decimal {
    order.items.iter().map(|item| item.product.price).sum()
}

// Só pedidos pagos da própria loja entram na conta, venha de onde vier a lista
fn counts_for(store_id: Uuid, order: &Order) -> bool {
    order.is_paid && order.store_id == store_id
}

pub fn total_revenue(store_id: Uuid, orders: &[Order]) -> Decimal {
    orders
        .iter()
        .filter(|order| counts_for(store_id, order))
        .map(order_total)
        .sum()
}

pub fn sales_count(store_id: Uuid, orders: &[Order]) -> usize {
    orders.iter().filter(|order| counts_for(store_id, order)).count()
}

/// Receita por mês do ano informado. Sempre devolve 12 entradas (Jan..Dec).
pub fn monthly_revenue(store_id: Uuid, orders: &[Order], year: i32) -> Vec<MonthlyRevenue> {
    let mut totals = [Decimal::ZERO; 12];

    for order in orders.iter().filter(|order| counts_for(store_id, order)) {
        if order.created_at.year() == year {
            totals[order.created_at.month0() as usize] += order_total(order);
        }
    }

    MONTH_NAMES
        .iter()
        .zip(totals)
        .map(|(name, total)| MonthlyRevenue {
            name: name.to_string(),
            total,
        })
        .collect()
}

// ---
// Serviço
// ---

// Sem estado entre chamadas: cada operação busca um snapshot novo e calcula em cima dele.
#[derive(Clone)]
pub struct RevenueService {
    source: Arc<dyn PaidOrderSource>,
}

impl RevenueService {
    pub fn new(source: Arc<dyn PaidOrderSource>) -> Self {
        Self { source }
    }

    /// Receita total da loja: soma dos preços atuais dos produtos de todos os pedidos pagos.
    /// Loja desconhecida devolve zero. Erros de acesso a dados sobem sem tratamento.
    pub async fn compute_total_revenue(&self, store_id: Uuid) -> Result<Decimal, AppError> {
        let orders = self.source.find_paid_orders(store_id).await?;
        Ok(total_revenue(store_id, &orders))
    }

    pub async fn sales_count(&self, store_id: Uuid) -> Result<usize, AppError> {
        let orders = self.source.find_paid_orders(store_id).await?;
        Ok(sales_count(store_id, &orders))
    }

    pub async fn summary(&self, store_id: Uuid) -> Result<RevenueSummary, AppError> {
        let orders = self.source.find_paid_orders(store_id).await?;

        let summary = RevenueSummary {
            total_revenue: total_revenue(store_id, &orders),
            sales_count: sales_count(store_id, &orders),
        };

        tracing::debug!(
            %store_id,
            total_revenue = %summary.total_revenue,
            sales_count = summary.sales_count,
            "Resumo de receita calculado"
        );
        Ok(summary)
    }

    pub async fn revenue_graph(
        &self,
        store_id: Uuid,
        year: i32,
    ) -> Result<Vec<MonthlyRevenue>, AppError> {
        let orders = self.source.find_paid_orders(store_id).await?;
        Ok(monthly_revenue(store_id, &orders, year))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{DateTime, TimeZone, Utc};

    use crate::models::order::{OrderItem, Product};

    // Imita a query real: filtra por loja e por pago
    struct InMemoryOrders {
        orders: Vec<Order>,
    }

    #[async_trait]
    impl PaidOrderSource for InMemoryOrders {
        async fn find_paid_orders(&self, store_id: Uuid) -> Result<Vec<Order>, AppError> {
            Ok(self
                .orders
                .iter()
                .filter(|o| o.store_id == store_id && o.is_paid)
                .cloned()
                .collect())
        }
    }

    // Devolve tudo, sem filtrar; o cálculo tem que se virar sozinho
    struct UnfilteredOrders {
        orders: Vec<Order>,
    }

    #[async_trait]
    impl PaidOrderSource for UnfilteredOrders {
        async fn find_paid_orders(&self, _store_id: Uuid) -> Result<Vec<Order>, AppError> {
            Ok(self.orders.clone())
        }
    }

    struct UnreachableDatabase;

    #[async_trait]
    impl PaidOrderSource for UnreachableDatabase {
        async fn find_paid_orders(&self, _store_id: Uuid) -> Result<Vec<Order>, AppError> {
            Err(AppError::DatabaseError(sqlx::Error::PoolTimedOut))
        }
    }

    fn at(year: i32, month: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, 15, 12, 0, 0).unwrap()
    }

    fn order(store_id: Uuid, is_paid: bool, prices: &[Decimal]) -> Order {
        order_at(store_id, is_paid, prices, at(2024, 1))
    }

    fn order_at(store_id: Uuid, is_paid: bool, prices: &[Decimal], created_at: DateTime<Utc>) -> Order {
        let order_id = Uuid::new_v4();
        Order {
            id: order_id,
            store_id,
            is_paid,
            created_at,
            items: prices
                .iter()
                .map(|price| OrderItem {
                    id: Uuid::new_v4(),
                    order_id,
                    product: Product {
                        id: Uuid::new_v4(),
                        store_id,
                        name: "Produto".into(),
                        price: *price,
                    },
                })
                .collect(),
        }
    }

    fn d(value: i64) -> Decimal {
        Decimal::from(value)
    }

    fn service(orders: Vec<Order>) -> RevenueService {
        RevenueService::new(Arc::new(InMemoryOrders { orders }))
    }

    #[tokio::test]
    async fn two_paid_orders_and_one_unpaid_total_35() {
        let s1 = Uuid::new_v4();
        let svc = service(vec![
            order(s1, true, &[d(10), d(20)]),
            order(s1, true, &[d(5)]),
            order(s1, false, &[d(100)]),
        ]);

        assert_eq!(svc.compute_total_revenue(s1).await.unwrap(), d(35));
    }

    #[tokio::test]
    async fn single_paid_order_without_items_totals_zero() {
        let s1 = Uuid::new_v4();
        let svc = service(vec![order(s1, true, &[])]);

        assert_eq!(svc.compute_total_revenue(s1).await.unwrap(), Decimal::ZERO);
        assert_eq!(svc.sales_count(s1).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn store_without_paid_orders_totals_zero() {
        let s1 = Uuid::new_v4();
        let svc = service(vec![order(s1, false, &[d(40)])]);

        assert_eq!(svc.compute_total_revenue(s1).await.unwrap(), Decimal::ZERO);
    }

    #[tokio::test]
    async fn unknown_store_totals_zero() {
        let svc = service(vec![order(Uuid::new_v4(), true, &[d(40)])]);

        assert_eq!(svc.compute_total_revenue(Uuid::new_v4()).await.unwrap(), Decimal::ZERO);
    }

    #[test]
    fn empty_order_contributes_nothing() {
        let s1 = Uuid::new_v4();
        let with_empty = vec![order(s1, true, &[d(7)]), order(s1, true, &[])];
        let without_empty = vec![with_empty[0].clone()];

        assert_eq!(order_total(&with_empty[1]), Decimal::ZERO);
        assert_eq!(total_revenue(s1, &with_empty), total_revenue(s1, &without_empty));
    }

    #[test]
    fn total_does_not_depend_on_order_sequence() {
        let s1 = Uuid::new_v4();
        let mut orders = vec![
            order(s1, true, &[Decimal::new(1999, 2), Decimal::new(1, 2)]),
            order(s1, true, &[Decimal::new(333, 2)]),
            order(s1, true, &[Decimal::new(1050, 2), Decimal::new(4, 1), d(3)]),
            order(s1, true, &[]),
        ];
        let expected = total_revenue(s1, &orders);
        assert_eq!(expected, Decimal::new(3723, 2));

        orders.reverse();
        assert_eq!(total_revenue(s1, &orders), expected);

        for _ in 0..orders.len() {
            orders.rotate_left(1);
            assert_eq!(total_revenue(s1, &orders), expected);
        }
    }

    #[tokio::test]
    async fn unpaid_orders_never_count_even_if_the_source_returns_them() {
        let s1 = Uuid::new_v4();
        let svc = RevenueService::new(Arc::new(UnfilteredOrders {
            orders: vec![order(s1, true, &[d(12)]), order(s1, false, &[d(1_000_000)])],
        }));

        assert_eq!(svc.compute_total_revenue(s1).await.unwrap(), d(12));
        assert_eq!(svc.sales_count(s1).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn other_stores_orders_never_count() {
        let s1 = Uuid::new_v4();
        let s2 = Uuid::new_v4();
        let orders = vec![order(s1, true, &[d(8)]), order(s2, true, &[d(500), d(500)])];

        let filtered = service(orders.clone());
        let unfiltered = RevenueService::new(Arc::new(UnfilteredOrders { orders }));

        assert_eq!(filtered.compute_total_revenue(s1).await.unwrap(), d(8));
        assert_eq!(unfiltered.compute_total_revenue(s1).await.unwrap(), d(8));
        assert_eq!(filtered.compute_total_revenue(s2).await.unwrap(), d(1000));
    }

    #[test]
    fn negative_prices_pass_through() {
        let s1 = Uuid::new_v4();
        let orders = vec![order(s1, true, &[d(10), d(-3)])];

        assert_eq!(total_revenue(s1, &orders), d(7));
    }

    #[tokio::test]
    async fn data_access_failure_propagates() {
        let svc = RevenueService::new(Arc::new(UnreachableDatabase));
        let store_id = Uuid::new_v4();

        let err = svc.compute_total_revenue(store_id).await.unwrap_err();
        assert!(matches!(err, AppError::DatabaseError(sqlx::Error::PoolTimedOut)));

        assert!(svc.summary(store_id).await.is_err());
        assert!(svc.revenue_graph(store_id, 2024).await.is_err());
    }

    #[tokio::test]
    async fn summary_combines_total_and_count() {
        let s1 = Uuid::new_v4();
        let svc = service(vec![
            order(s1, true, &[d(10), d(20)]),
            order(s1, true, &[d(5)]),
            order(s1, false, &[d(100)]),
        ]);

        let summary = svc.summary(s1).await.unwrap();
        assert_eq!(summary, RevenueSummary { total_revenue: d(35), sales_count: 2 });
    }

    #[tokio::test]
    async fn graph_buckets_paid_orders_by_month_of_the_year() {
        let s1 = Uuid::new_v4();
        let svc = service(vec![
            order_at(s1, true, &[d(10)], at(2024, 1)),
            order_at(s1, true, &[d(5), d(5)], at(2024, 1)),
            order_at(s1, true, &[d(30)], at(2024, 12)),
            order_at(s1, false, &[d(999)], at(2024, 3)),
            order_at(s1, true, &[d(77)], at(2023, 3)),
        ]);

        let graph = svc.revenue_graph(s1, 2024).await.unwrap();

        assert_eq!(graph.len(), 12);
        assert_eq!(graph[0], MonthlyRevenue { name: "Jan".into(), total: d(20) });
        assert_eq!(graph[2].total, Decimal::ZERO);
        assert_eq!(graph[11], MonthlyRevenue { name: "Dec".into(), total: d(30) });

        let year_total: Decimal = graph.iter().map(|m| m.total).sum();
        assert_eq!(year_total, d(50));
    }
}
