//! Per-file REUSE resolution and cross-file combination.
//!
//! - [`tags`] — extracts inline `SPDX-License-Identifier` and copyright tags,
//!   honoring `REUSE-IgnoreStart` / `REUSE-IgnoreEnd` blocks.
//! - [`resolver`] — three-tier lookup: inline tags, `.license` sidecar, DEP5.
//! - [`combiner`] — order-stable, deduplicated union of many file results.

pub mod combiner;
pub mod resolver;
pub mod tags;
