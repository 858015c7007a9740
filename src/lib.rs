// SPDX-License-Identifier: MIT OR Apache-2.0

//! A typed parameter-file reader.
//!
//! This crate parses a simple whitespace-delimited text format of
//! `type key = value` declarations into an in-memory typed key-value store,
//! and provides typed accessors with validation. It is intended as a
//! configuration front-end for programs (scientific codes in particular) that
//! need structured startup parameters without pulling in a full configuration
//! framework.
//!
//! # File format
//!
//! One declaration per line, four whitespace-separated tokens:
//!
//! ```text
//! # lines whose first token starts with '#' are comments
//! string catalog = galaxies.dat
//! int num_bins = 64
//! double box_size = 1024.0
//! bool verbose = true
//! vector<double> limits = 0.0,0.5,1.0
//! vector<int> seeds = 42,1337
//! vector<string> columns = x,y,z
//! vector<bool> flags = true,false,true
//! ```
//!
//! The `=` token is decorative and never validated. Blank lines are skipped.
//! The eight type tokens shown above are the complete supported set; any
//! other token fails construction.
//!
//! # Architecture
//!
//! - **Domain layer**: core types ([`ParamType`], [`TypedKey`], errors)
//! - **Parser**: line classification and declaration tokenization
//! - **Store**: the [`ParameterStore`] itself, with typed accessors,
//!   presence validation, and a debug dump
//!
//! # Quick start
//!
//! ```rust
//! use paramfile::prelude::*;
//!
//! # fn main() -> paramfile::domain::Result<()> {
//! let store: ParameterStore = "int num_bins = 64\ndouble box_size = 1024.0".parse()?;
//!
//! assert_eq!(store.get_int("num_bins")?, 64);
//! assert_eq!(store.get_float("box_size")?, 1024.0);
//! assert!(store.has_parameter("num_bins"));
//! # Ok(())
//! # }
//! ```
//!
//! [`ParamType`]: domain::ParamType
//! [`TypedKey`]: domain::TypedKey
//! [`ParameterStore`]: store::ParameterStore

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod domain;
pub mod parser;
pub mod store;

/// Commonly used types.
///
/// This module re-exports the most commonly used types for convenient access.
pub mod prelude {
    pub use crate::domain::{ParamError, ParamType, Result, TypedKey};
    pub use crate::store::ParameterStore;
}
