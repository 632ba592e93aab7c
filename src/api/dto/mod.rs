//! Data Transfer Objects for API requests and responses.
//!
//! Response field names are camelCase on the wire.

pub mod health;
pub mod link;
pub mod ping;
