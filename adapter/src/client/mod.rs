pub mod court;
pub mod user;
