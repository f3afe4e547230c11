//! The cleaned two-column table handed to the skip tracer.

pub const OWNER_NAME_HEADER: &str = "OWNER NAME";
pub const MAILING_ADDRESS_HEADER: &str = "MAILING ADDRESS";
pub const OUTPUT_HEADERS: [&str; 2] = [OWNER_NAME_HEADER, MAILING_ADDRESS_HEADER];

/// One output row; fields follow [`OUTPUT_HEADERS`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerRecord {
    pub owner_name: String,
    pub mailing_address: String,
}

/// One [`OwnerRecord`] per input row, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputTable {
    records: Vec<OwnerRecord>,
}

impl OutputTable {
    pub fn new(records: Vec<OwnerRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[OwnerRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The first `limit` records.
    pub fn head(&self, limit: usize) -> &[OwnerRecord] {
        &self.records[..self.records.len().min(limit)]
    }
}
