//! REUSE license and copyright resolution for source trees.
//!
//! For every file, the applicable license identifiers and copyright statements
//! come from the first of three tiers that has data:
//!
//! 1. inline `SPDX-License-Identifier` / copyright tags in the file itself,
//! 2. the same tags in a `<file>.license` sidecar,
//! 3. the last matching stanza of the `.reuse/dep5` override file.
//!
//! Per-file results are then merged into one deduplicated summary.
//!
//! - [`dep5`] — control-file parser and override model.
//! - [`reuse`] — tag extraction, per-file resolution, combination.
//! - [`lister`] / [`matcher`] — file enumeration and glob matching.
//! - [`scan`] — loads the override file and resolves files in bounded batches.

pub mod config;
pub mod dep5;
pub mod error;
pub mod lister;
pub mod matcher;
pub mod models;
pub mod reuse;
pub mod scan;
