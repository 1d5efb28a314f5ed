// src/models/dashboard.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// Cards do topo do painel
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueSummary {
    pub total_revenue: Decimal,
    pub sales_count: usize,
}

// Um ponto do gráfico de receita (um por mês: "Jan".."Dec")
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRevenue {
    pub name: String,
    pub total: Decimal,
}

#[derive(Debug, Default, Deserialize)]
pub struct RevenueGraphQuery {
    pub year: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesCount {
    pub sales_count: usize,
}
