//! Cleaning pipeline with explicit stages.
//!
//! 1. **Ingest**: read the property-records CSV
//! 2. **Resolve**: map each role to an input column
//! 3. **Transform**: build `OWNER NAME` and `MAILING ADDRESS`
//! 4. **Output**: write the cleaned CSV
//!
//! Each stage is callable on its own; [`clean_file`] runs the first three.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{debug, info, trace};

use stp_map::ColumnResolver;
use stp_model::{InputTable, OutputTable, RoleMapping};
use stp_output::DEFAULT_OUTPUT_FILE_NAME;

use crate::logging::redact_value;

/// Outcome of ingest, resolve and transform.
#[derive(Debug)]
pub struct CleanedTable {
    pub mapping: RoleMapping,
    pub output: OutputTable,
    /// Data rows read from the input.
    pub input_rows: usize,
    /// Columns the input header declared.
    pub input_columns: usize,
}

// ============================================================================
// Stage 1: Ingest
// ============================================================================

pub fn ingest(path: &Path) -> Result<InputTable> {
    let table = stp_ingest::read_csv_table(path)
        .with_context(|| format!("failed to load {}", path.display()))?;
    info!(
        path = %path.display(),
        rows = table.row_count(),
        columns = table.headers().len(),
        "loaded input"
    );
    Ok(table)
}

// ============================================================================
// Stage 2: Resolve
// ============================================================================

pub fn resolve(table: &InputTable, resolver: &ColumnResolver) -> RoleMapping {
    let mapping = resolver.resolve_table(table);
    let unresolved = mapping.unresolved();
    if unresolved.is_empty() {
        info!("all roles resolved");
    } else {
        let names: Vec<&str> = unresolved.iter().map(|role| role.code()).collect();
        info!(unresolved = ?names, "some roles unresolved");
    }
    mapping
}

// ============================================================================
// Stage 3: Transform
// ============================================================================

pub fn transform(table: &InputTable, mapping: &RoleMapping) -> Result<OutputTable> {
    let output = stp_transform::transform(table, mapping).context("cannot build owner records")?;
    for record in output.head(stp_transform::DEFAULT_PREVIEW_ROWS) {
        trace!(
            owner_name = redact_value(&record.owner_name),
            mailing_address = redact_value(&record.mailing_address),
            "owner record"
        );
    }
    Ok(output)
}

/// Runs ingest, resolve and transform on one file.
pub fn clean_file(path: &Path, resolver: &ColumnResolver) -> Result<CleanedTable> {
    let table = ingest(path)?;
    clean_table(&table, resolver)
}

/// Runs resolve and transform on an already loaded table.
pub fn clean_table(table: &InputTable, resolver: &ColumnResolver) -> Result<CleanedTable> {
    let mapping = resolve(table, resolver);
    let output = transform(table, &mapping)?;
    Ok(CleanedTable {
        mapping,
        output,
        input_rows: table.row_count(),
        input_columns: table.headers().len(),
    })
}

// ============================================================================
// Stage 4: Output
// ============================================================================

/// `Cleaned_For_SkipTrace.csv` in the input's directory.
pub fn default_output_path(input: &Path) -> PathBuf {
    input
        .parent()
        .map(|dir| dir.join(DEFAULT_OUTPUT_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE_NAME))
}

/// Picks the output path, refusing to overwrite the input.
pub fn output_path(input: &Path, requested: Option<&Path>) -> Result<PathBuf> {
    let path = requested.map_or_else(|| default_output_path(input), Path::to_path_buf);
    if same_file(input, &path) {
        bail!(
            "output path {} would overwrite the input file",
            path.display()
        );
    }
    debug!(path = %path.display(), "output path");
    Ok(path)
}

pub fn write_output(output: &OutputTable, path: &Path) -> Result<()> {
    stp_output::write_csv(output, path)
        .with_context(|| format!("failed to write {}", path.display()))
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_sits_next_to_input() {
        assert_eq!(
            default_output_path(Path::new("data/county.csv")),
            PathBuf::from("data/Cleaned_For_SkipTrace.csv")
        );
    }

    #[test]
    fn input_named_like_output_is_not_overwritten() {
        let input = Path::new("data/Cleaned_For_SkipTrace.csv");
        let err = output_path(input, None).unwrap_err();
        assert!(err.to_string().contains("overwrite"));
        assert!(output_path(input, Some(Path::new("data/other.csv"))).is_ok());
    }
}
