//! Common utilities for the Sigil selector builder.
//!
//! This crate provides shared infrastructure used by the other Sigil crates:
//! - **Warning System** - colored, deduplicated stderr diagnostics

pub mod warning;
