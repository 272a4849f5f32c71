//! Wire-shape models for the verification backend.
//!
//! Everything here is either a read-only projection of server state or a
//! write-only payload; no entity has a locally-owned mutable lifecycle.

pub mod admin;
pub mod recent;
pub mod report;
pub mod verification;
