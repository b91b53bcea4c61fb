// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how candidates get their numbers.
//!
//! An exact word match is worth more than a partial one, and every point is
//! divided by the record's word count, so short precise records beat long
//! records that happen to mention the query somewhere.

mod core;
pub mod ranking;

pub use core::*;
