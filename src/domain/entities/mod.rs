//! Core domain entities.
//!
//! Entities follow the "New Type" pattern with a separate struct for creation:
//! [`NewLink`] carries what the service decides, [`Link`] is what the store returns.

pub mod link;

pub use link::{Link, NewLink};
