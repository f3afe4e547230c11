//! Ordered synonym labels per role.

use std::collections::BTreeMap;

use stp_model::{Role, normalize_column_name};

/// Candidate labels per role, most preferred first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynonymTable {
    entries: BTreeMap<Role, Vec<String>>,
}

impl Default for SynonymTable {
    fn default() -> Self {
        let entries = Role::ALL
            .into_iter()
            .map(|role| {
                let labels = role
                    .default_synonyms()
                    .iter()
                    .map(|label| (*label).to_string())
                    .collect();
                (role, labels)
            })
            .collect();
        Self { entries }
    }
}

impl SynonymTable {
    /// Labels for `role`, in preference order.
    pub fn get(&self, role: Role) -> &[String] {
        self.entries.get(&role).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Replaces the labels for `role`.
    ///
    /// Labels are normalized like column names. An override with no non-blank
    /// label is ignored and the existing labels stay.
    pub fn set(&mut self, role: Role, labels: Vec<String>) {
        let labels: Vec<String> = labels
            .iter()
            .map(|label| normalize_column_name(label))
            .filter(|label| !label.is_empty())
            .collect();
        if labels.is_empty() {
            tracing::warn!(role = role.code(), "ignoring empty synonym override");
            return;
        }
        tracing::debug!(role = role.code(), ?labels, "synonym override");
        self.entries.insert(role, labels);
    }

    /// Applies a batch of overrides, see [`SynonymTable::set`].
    #[must_use]
    pub fn with_overrides<I>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (Role, Vec<String>)>,
    {
        for (role, labels) in overrides {
            self.set(role, labels);
        }
        self
    }
}
