//! # Cinelog API Server
//!
//! Actix-web HTTP API for the Cinelog movie catalog: signup/login with
//! JWT sessions, profile management with picture upload, and
//! ownership-scoped movie CRUD.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod state;
pub mod upload;
pub mod urls;
