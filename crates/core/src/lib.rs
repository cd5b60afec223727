//! Domain building blocks shared by every crate in the workspace.
//!
//! Nothing in here touches the network or the database: errors, id types,
//! role tags, the per-entity message catalogue, pagination, field checks
//! and the password-recovery token policy.

pub mod entity;
pub mod error;
pub mod pagination;
pub mod recovery;
pub mod roles;
pub mod types;
pub mod validation;
