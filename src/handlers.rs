pub mod billboards;
pub mod dashboard;
pub mod stores;
