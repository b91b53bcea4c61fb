// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Matching parameters.
//!
//! Every field has a default, so an empty JSON object `{}` is a valid config
//! and running without a config file is the same as `MatchConfig::default()`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::scoring::{FULL_MATCH_POINTS, PARTIAL_MATCH_POINTS};
use crate::utils::DEFAULT_PREFIX_LEN;

/// Default number of results kept per query.
pub const DEFAULT_RESULT_LIMIT: usize = 10;

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct MatchConfig {
    /// Characters of each word used as its bucket key.
    pub prefix_len: usize,
    /// Results kept per query after sorting. The count is not affected.
    pub result_limit: usize,
    pub full_match_points: f64,
    pub partial_match_points: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            prefix_len: DEFAULT_PREFIX_LEN,
            result_limit: DEFAULT_RESULT_LIMIT,
            full_match_points: FULL_MATCH_POINTS,
            partial_match_points: PARTIAL_MATCH_POINTS,
        }
    }
}

impl MatchConfig {
    /// Read and validate a JSON config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would make scores meaningless.
    ///
    /// Partial points above full points would let a prefix hit outrank an
    /// exact one.
    pub fn validate(&self) -> Result<()> {
        if self.prefix_len == 0 {
            return Err(Error::InvalidConfig("prefixLen must be at least 1".into()));
        }
        if self.result_limit == 0 {
            return Err(Error::InvalidConfig("resultLimit must be at least 1".into()));
        }
        for (name, value) in [
            ("fullMatchPoints", self.full_match_points),
            ("partialMatchPoints", self.partial_match_points),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }
        if self.partial_match_points > self.full_match_points {
            return Err(Error::InvalidConfig(format!(
                "partialMatchPoints ({}) exceeds fullMatchPoints ({})",
                self.partial_match_points, self.full_match_points
            )));
        }
        Ok(())
    }
}
