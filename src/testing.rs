//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::index::CatalogIndex;
use crate::types::Record;

/// Create a record from string slices.
///
/// This is the canonical implementation used across all tests.
pub fn make_record(id: &str, fields: &[&str]) -> Record {
    Record::new(id, fields.iter().map(|f| f.to_string()).collect())
}

/// Build an index from `(id, fields)` pairs with the default prefix length.
pub fn make_index(rows: &[(&str, &[&str])]) -> CatalogIndex {
    CatalogIndex::build(rows.iter().map(|(id, fields)| make_record(id, fields)))
}

/// A catalog of `n` records that all contain the word `shoe`, with ids
/// zero-padded so string order equals numeric order.
///
/// Record `i` carries `i` filler words, so lower ids score higher for the
/// query `shoe`.
pub fn make_shoe_catalog(n: usize) -> CatalogIndex {
    CatalogIndex::build((0..n).map(|i| {
        let filler: Vec<String> = (0..i).map(|j| format!("filler{}", j)).collect();
        let mut fields = vec!["shoe".to_string()];
        if !filler.is_empty() {
            fields.push(filler.join(" "));
        }
        Record::new(format!("{:03}", i), fields)
    }))
}
