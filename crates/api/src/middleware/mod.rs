//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- the usuario behind a valid Bearer token.
//! - [`rbac::RequireSuperAdmin`] -- requires the `super_administrador` role.
//! - [`rbac::ensure_self_or_super_admin`] -- owner-or-super-admin check.

pub mod auth;
pub mod rbac;
