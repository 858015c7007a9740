// SPDX-License-Identifier: MIT OR Apache-2.0

//! The parameter store.
//!
//! This module provides [`ParameterStore`], the typed key-value store a
//! parameter file is loaded into, along with its typed accessors, presence
//! validation, and debug dump.

pub mod parameter_store;

// Re-export commonly used types
pub use parameter_store::ParameterStore;
