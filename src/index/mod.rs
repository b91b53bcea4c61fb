// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction: the data structures that make matching cheap.
//!
//! One index type. Records are keyed by identifier, and every word prefix
//! points back at the records that contain it, so a query only scores the
//! records it could plausibly match.

mod catalog;

pub use catalog::*;
