// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types.
//!
//! This module contains the fundamental concepts used throughout the crate:
//! the supported parameter types, the typed-key requirement descriptor, and
//! the error types.

pub mod errors;
pub mod param_type;
pub mod typed_key;

pub(crate) mod convert;

// Re-export commonly used types
pub use errors::{ParamError, Result};
pub use param_type::ParamType;
pub use typed_key::TypedKey;
