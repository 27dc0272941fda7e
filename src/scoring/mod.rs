// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how hits inside one result set get ordered.
//!
//! Coverage dominates everything. An entry matching two query terms fuzzily
//! beats an entry matching one term exactly. Match quality and token position
//! only break ties.

mod core;
pub mod ranking;

pub use self::core::*;
