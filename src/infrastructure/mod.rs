//! Infrastructure layer for external integrations.
//!
//! Implements the store contract defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL and in-process link stores

pub mod persistence;
