pub mod billboard;
pub mod dashboard;
pub mod modal;
pub mod order;
pub mod store;
