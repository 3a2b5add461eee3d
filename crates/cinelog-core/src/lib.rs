//! # Cinelog Core
//!
//! The domain layer of the Cinelog movie catalog.
//! This crate contains pure business logic with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod validation;

pub use error::DomainError;
