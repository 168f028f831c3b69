//! Output generation for the exported corpus.
//!
//! # Submodules
//!
//! - [`json`]: writes the collected records as one pretty-printed JSON array
//!
//! The corpus has a single output format; everything the run produces lands
//! in one file, written once at the end.

pub mod json;
