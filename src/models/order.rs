// src/models/order.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

// Produto com o preço *atual*. A receita usa este preço, não um snapshot da compra.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub store_id: Uuid,
    pub name: String,
    pub price: Decimal,
}

// Linha do pedido: liga um Order a exatamente um Product (sem quantidade)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: Uuid,
    pub order_id: Uuid,
    pub product: Product,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,
    pub store_id: Uuid,
    pub is_paid: bool,
    pub created_at: DateTime<Utc>,
    pub items: Vec<OrderItem>,
}

// Linha "achatada" do JOIN orders -> order_items -> products.
// Os campos do item/produto são NULL para pedidos sem itens (LEFT JOIN).
#[derive(Debug, Clone, FromRow)]
pub struct PaidOrderRow {
    pub order_id: Uuid,
    pub store_id: Uuid,
    pub is_paid: bool,
    pub created_at: DateTime<Utc>,
    pub item_id: Option<Uuid>,
    pub product_id: Option<Uuid>,
    pub product_store_id: Option<Uuid>,
    pub product_name: Option<String>,
    pub price: Option<Decimal>,
}

impl PaidOrderRow {
    fn into_item(self) -> Option<OrderItem> {
        Some(OrderItem {
            id: self.item_id?,
            order_id: self.order_id,
            product: Product {
                id: self.product_id?,
                store_id: self.product_store_id?,
                name: self.product_name?,
                price: self.price?,
            },
        })
    }
}

/// Agrupa as linhas do JOIN em pedidos, mantendo a ordem em que chegaram.
/// As linhas de um mesmo pedido precisam vir contíguas (ORDER BY no pedido).
pub fn group_order_rows(rows: Vec<PaidOrderRow>) -> Vec<Order> {
    let mut orders: Vec<Order> = Vec::new();

    for row in rows {
        let starts_new_order = orders.last().is_none_or(|last| last.id != row.order_id);
        if starts_new_order {
            orders.push(Order {
                id: row.order_id,
                store_id: row.store_id,
                is_paid: row.is_paid,
                created_at: row.created_at,
                items: Vec::new(),
            });
        }

        if let (Some(item), Some(order)) = (row.into_item(), orders.last_mut()) {
            order.items.push(item);
        }
    }

    orders
}
