// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parameter-file line parsing.
//!
//! This module classifies raw input lines and tokenizes declarations. It is
//! purely line-oriented: file handling and bucket assignment live in the
//! store layer.

pub mod line;

// Re-export commonly used types
pub use line::{parse_line, Declaration, Line};
