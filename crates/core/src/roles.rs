//! Role tags and the capability check used by the authorization gate.
//!
//! Role names must match the seed data in `20250101000003_create_roles_table.sql`.
//! Roles are flat tags: no role implies another.

use std::collections::BTreeSet;

pub const ROLE_SUPER_ADMIN: &str = "super_administrador";
pub const ROLE_ADMIN: &str = "administrador";
pub const ROLE_SALES: &str = "ejecutivo_ventas";

/// The set of role tags carried by an authenticated identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleSet(BTreeSet<String>);

impl RoleSet {
    pub fn new<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(roles.into_iter().map(Into::into).collect())
    }

    /// Literal membership test.
    pub fn contains(&self, role: &str) -> bool {
        self.0.contains(role)
    }

    pub fn is_super_admin(&self) -> bool {
        self.contains(ROLE_SUPER_ADMIN)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }
}
