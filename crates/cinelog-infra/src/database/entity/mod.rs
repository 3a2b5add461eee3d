//! SeaORM entity definitions.

pub mod movie;
pub mod user;
