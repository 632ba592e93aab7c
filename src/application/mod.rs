//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short link creation, resolution and listing
//! - [`services::auth_service::AuthService`] - Bearer token verification

pub mod services;
