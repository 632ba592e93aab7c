//! Link store implementations.
//!
//! - [`PgLinkRepository`] - PostgreSQL via SQLx, used when a database is configured
//! - [`MemoryLinkRepository`] - process memory, used otherwise and in tests

pub mod memory_link_repository;
pub mod pg_link_repository;

pub use memory_link_repository::MemoryLinkRepository;
pub use pg_link_repository::PgLinkRepository;
