//! # Cinelog Shared
//!
//! Wire types shared by the API server and its clients: request/response
//! DTOs and the uniform `{message}` envelope.

pub mod dto;
pub mod response;

pub use response::{ErrorResponse, MessageResponse};
