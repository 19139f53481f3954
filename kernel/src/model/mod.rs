pub mod court;
pub mod id;
pub mod reservation;
pub mod user;
