// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! String helpers shared by the extractor, the index, and the query engine.

pub mod normalize;

pub use normalize::*;
