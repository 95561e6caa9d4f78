pub mod cost;
pub mod export;
pub mod lifecycle;
pub mod models;
