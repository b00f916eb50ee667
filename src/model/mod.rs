pub mod api;
pub mod customer;
