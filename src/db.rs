pub mod billboard_repo;
pub use billboard_repo::BillboardRepository;
pub mod order_repo;
pub use order_repo::{OrderRepository, PaidOrderSource};
pub mod store_repo;
pub use store_repo::StoreRepository;
