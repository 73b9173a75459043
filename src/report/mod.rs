//! Report renderers for scan results.
//!
//! - [`terminal`] — colored summary box, combined license and copyright lists,
//!   and a per-file table with `--verbose`; respects `--quiet`.
//!
//! JSON output is a direct `serde_json` dump of [`ScanReport`](crate::models::ScanReport).

pub mod terminal;
