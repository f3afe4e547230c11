//! Column resolution for property-record spreadsheets.
//!
//! Each [`Role`](stp_model::Role) carries an ordered list of synonym labels.
//! The resolver walks that list in preference order and stops at the first
//! label whose closest input column reaches the similarity cutoff.

#![deny(unsafe_code)]

pub mod engine;
pub mod score;
pub mod synonyms;

pub use engine::ColumnResolver;
pub use score::{MATCH_CUTOFF, ScoredColumn, closest_match, similarity};
pub use synonyms::SynonymTable;
