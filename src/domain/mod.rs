//! Domain layer containing the link entity and the store contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependency on HTTP or database code. Concrete
//! stores live in [`crate::infrastructure::persistence`].

pub mod entities;
pub mod repositories;
