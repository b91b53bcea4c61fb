// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Catalog loading from comma-separated rows.
//!
//! No header row. Field 0 is the identifier and every later field is
//! descriptor text. Rows may have different lengths, and quoted fields can
//! carry commas.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};
use crate::index::CatalogIndex;

/// Parse every row of a catalog into raw fields.
pub fn read_catalog<R: Read>(reader: R) -> csv::Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    reader
        .records()
        .map(|row| row.map(|r| r.iter().map(str::to_owned).collect()))
        .collect()
}

/// Load a catalog file and build its index.
pub fn load_catalog(path: &Path, prefix_len: usize) -> Result<CatalogIndex> {
    let file = File::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let rows = read_catalog(file).map_err(|source| Error::Csv {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), rows = rows.len(), "read catalog");
    Ok(CatalogIndex::from_rows(rows, prefix_len))
}
