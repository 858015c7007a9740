// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed-key requirement descriptor.
//!
//! This module provides the `TypedKey` type, a `(type, name)` pair used to
//! describe one required parameter when validating that a store contains a
//! minimum set of declarations.

use crate::domain::ParamType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A `(type, name)` pair naming one required parameter.
///
/// A slice of `TypedKey` values is passed to
/// [`ParameterStore::check_minimum_required`] to assert that every named
/// parameter exists under exactly the stated type. No coercion is applied
/// during that check: an `int` requirement is not satisfied by a `double`
/// declaration.
///
/// # Examples
///
/// ```
/// use paramfile::domain::{ParamType, TypedKey};
///
/// let required = TypedKey::new(ParamType::Int, "num_bins");
/// assert_eq!(required.param_type(), ParamType::Int);
/// assert_eq!(required.name(), "num_bins");
/// assert_eq!(required.to_string(), "int num_bins");
/// ```
///
/// [`ParameterStore::check_minimum_required`]: crate::store::ParameterStore::check_minimum_required
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypedKey {
    param_type: ParamType,
    name: String,
}

impl TypedKey {
    /// Creates a new `TypedKey` from a type and a parameter name.
    pub fn new(param_type: ParamType, name: impl Into<String>) -> Self {
        TypedKey {
            param_type,
            name: name.into(),
        }
    }

    /// Returns the required parameter type.
    pub fn param_type(&self) -> ParamType {
        self.param_type
    }

    /// Returns the required parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for TypedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.param_type, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_key_new() {
        let key = TypedKey::new(ParamType::Double, "box_size");
        assert_eq!(key.param_type(), ParamType::Double);
        assert_eq!(key.name(), "box_size");
    }

    #[test]
    fn test_typed_key_accepts_string() {
        let name = String::from("catalog");
        let key = TypedKey::new(ParamType::Str, name);
        assert_eq!(key.name(), "catalog");
    }

    #[test]
    fn test_typed_key_display() {
        let key = TypedKey::new(ParamType::DoubleVec, "limits");
        assert_eq!(format!("{}", key), "vector<double> limits");
    }

    #[test]
    fn test_typed_key_equality() {
        let a = TypedKey::new(ParamType::Int, "n");
        let b = TypedKey::new(ParamType::Int, "n");
        let c = TypedKey::new(ParamType::Double, "n");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
