pub mod client;
pub mod concurrent;
pub mod messaging;
pub mod model;
pub mod repository;
pub mod schedule;
pub mod service;
