//! Role-to-column mapping produced by the column resolver.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::role::Role;

/// A single resolved role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    pub role: Role,
    /// Matched input column, in canonical uppercase form.
    pub column: String,
    /// The synonym label that produced the match.
    pub synonym: String,
    /// Similarity between `synonym` and `column` (0.0 to 1.0).
    pub score: f64,
}

/// Role → matched column, or absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleMapping {
    resolved: BTreeMap<Role, Resolution>,
}

impl RoleMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, resolution: Resolution) {
        self.resolved.insert(resolution.role, resolution);
    }

    pub fn get(&self, role: Role) -> Option<&Resolution> {
        self.resolved.get(&role)
    }

    /// Column name the role resolved to.
    pub fn column(&self, role: Role) -> Option<&str> {
        self.get(role).map(|resolution| resolution.column.as_str())
    }

    /// Resolved roles in report order.
    pub fn iter(&self) -> impl Iterator<Item = &Resolution> {
        self.resolved.values()
    }

    pub fn unresolved(&self) -> Vec<Role> {
        Role::ALL
            .into_iter()
            .filter(|role| !self.resolved.contains_key(role))
            .collect()
    }

    /// Required roles that did not resolve.
    pub fn missing_required(&self) -> Vec<Role> {
        self.unresolved()
            .into_iter()
            .filter(|role| role.is_required())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_required().is_empty()
    }
}
