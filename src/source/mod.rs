pub mod api;
pub mod base;
pub mod fixture;
