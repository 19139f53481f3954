pub mod client;
pub mod database;
pub mod messaging;
pub mod repository;
