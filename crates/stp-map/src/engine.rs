//! Column resolver implementation.

use stp_model::{InputTable, Resolution, Role, RoleMapping, normalize_column_name};

use crate::score::{MATCH_CUTOFF, closest_match};
use crate::synonyms::SynonymTable;

/// Maps each role to a column of an arbitrary spreadsheet.
///
/// For every role the synonyms are tried in preference order; the first
/// synonym whose closest column reaches the cutoff wins and lower-priority
/// synonyms are never consulted.
#[derive(Debug, Clone)]
pub struct ColumnResolver {
    synonyms: SynonymTable,
    cutoff: f64,
}

impl Default for ColumnResolver {
    fn default() -> Self {
        Self::new(SynonymTable::default())
    }
}

impl ColumnResolver {
    pub fn new(synonyms: SynonymTable) -> Self {
        Self {
            synonyms,
            cutoff: MATCH_CUTOFF,
        }
    }

    /// Overrides the similarity cutoff (defaults to [`MATCH_CUTOFF`]).
    #[must_use]
    pub fn with_cutoff(mut self, cutoff: f64) -> Self {
        self.cutoff = cutoff.clamp(0.0, 1.0);
        self
    }

    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    pub fn synonyms(&self) -> &SynonymTable {
        &self.synonyms
    }

    /// Resolves a single role against the given column names.
    pub fn resolve_role(&self, role: Role, columns: &[String]) -> Option<Resolution> {
        let columns = canonical_columns(columns);
        self.resolve_canonical(role, &columns)
    }

    /// Resolves every role against the given column names.
    pub fn resolve(&self, columns: &[String]) -> RoleMapping {
        let columns = canonical_columns(columns);
        let mut mapping = RoleMapping::new();
        for role in Role::ALL {
            if let Some(resolution) = self.resolve_canonical(role, &columns) {
                mapping.insert(resolution);
            }
        }
        mapping
    }

    /// Resolves every role against the table's header row.
    pub fn resolve_table(&self, table: &InputTable) -> RoleMapping {
        self.resolve(table.headers())
    }

    fn resolve_canonical(&self, role: Role, columns: &[String]) -> Option<Resolution> {
        for synonym in self.synonyms.get(role) {
            let label = normalize_column_name(synonym);
            if let Some(found) = closest_match(&label, columns, self.cutoff) {
                tracing::debug!(
                    role = role.code(),
                    synonym = %label,
                    column = %found.column,
                    score = found.score,
                    "resolved role"
                );
                return Some(Resolution {
                    role,
                    column: found.column,
                    synonym: label,
                    score: found.score,
                });
            }
        }
        tracing::debug!(role = role.code(), "role unresolved");
        None
    }
}

/// Canonical, de-duplicated column names in first-seen order.
fn canonical_columns(columns: &[String]) -> Vec<String> {
    let mut seen = Vec::with_capacity(columns.len());
    for column in columns {
        let canonical = normalize_column_name(column);
        if !seen.contains(&canonical) {
            seen.push(canonical);
        }
    }
    seen
}
