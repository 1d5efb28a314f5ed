pub mod billboard_service;
pub mod revenue_service;
pub mod store_service;

pub use billboard_service::BillboardService;
pub use revenue_service::RevenueService;
pub use store_service::StoreService;
