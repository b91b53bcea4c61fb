//! Query loading: one query per line.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};

/// Every line is a query, blank lines included. Line endings (`\n` or
/// `\r\n`) are stripped.
pub fn read_queries<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    reader.lines().collect()
}

pub fn load_queries(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_queries(BufReader::new(file)).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
