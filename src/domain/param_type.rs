// SPDX-License-Identifier: MIT OR Apache-2.0

//! The set of supported parameter types.
//!
//! This module provides the `ParamType` enum, which enumerates the eight type
//! tokens a parameter file may declare, along with token parsing and the
//! canonical bucket order used for dumps and duplicate resolution.

use crate::domain::errors::ParamError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the eight supported parameter types.
///
/// The variants correspond one-to-one with the type tokens accepted in a
/// parameter file: four scalar types and four comma-separated vector types.
///
/// # Examples
///
/// ```
/// use paramfile::domain::param_type::ParamType;
///
/// let ty: ParamType = "vector<double>".parse().unwrap();
/// assert_eq!(ty, ParamType::DoubleVec);
/// assert_eq!(ty.token(), "vector<double>");
/// assert!(ty.is_vector());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParamType {
    /// `string`: an uninterpreted text value.
    #[serde(rename = "string")]
    Str,
    /// `int`: an integer, parsed with floating-point syntax and truncated
    /// toward zero.
    #[serde(rename = "int")]
    Int,
    /// `double`: a floating-point value.
    #[serde(rename = "double")]
    Double,
    /// `bool`: a case-insensitive `true`/`false` literal.
    #[serde(rename = "bool")]
    Bool,
    /// `vector<double>`: comma-separated floating-point values.
    #[serde(rename = "vector<double>")]
    DoubleVec,
    /// `vector<int>`: comma-separated integers.
    #[serde(rename = "vector<int>")]
    IntVec,
    /// `vector<string>`: comma-separated text values, not trimmed.
    #[serde(rename = "vector<string>")]
    StrVec,
    /// `vector<bool>`: comma-separated `true`/`false` literals.
    #[serde(rename = "vector<bool>")]
    BoolVec,
}

impl ParamType {
    /// All supported types, in the canonical bucket order.
    ///
    /// This order is used when dumping a store and when resolving a key that
    /// appears in more than one type bucket.
    pub const ALL: [ParamType; 8] = [
        ParamType::Str,
        ParamType::Int,
        ParamType::Double,
        ParamType::Bool,
        ParamType::DoubleVec,
        ParamType::IntVec,
        ParamType::StrVec,
        ParamType::BoolVec,
    ];

    /// Returns the type token as written in a parameter file.
    ///
    /// # Examples
    ///
    /// ```
    /// use paramfile::domain::param_type::ParamType;
    ///
    /// assert_eq!(ParamType::Int.token(), "int");
    /// assert_eq!(ParamType::StrVec.token(), "vector<string>");
    /// ```
    pub fn token(&self) -> &'static str {
        match self {
            ParamType::Str => "string",
            ParamType::Int => "int",
            ParamType::Double => "double",
            ParamType::Bool => "bool",
            ParamType::DoubleVec => "vector<double>",
            ParamType::IntVec => "vector<int>",
            ParamType::StrVec => "vector<string>",
            ParamType::BoolVec => "vector<bool>",
        }
    }

    /// Parses a type token, returning `None` for anything outside the
    /// supported set.
    pub fn from_token(token: &str) -> Option<Self> {
        ParamType::ALL.iter().copied().find(|ty| ty.token() == token)
    }

    /// Returns `true` for the four vector types.
    pub fn is_vector(&self) -> bool {
        matches!(
            self,
            ParamType::DoubleVec | ParamType::IntVec | ParamType::StrVec | ParamType::BoolVec
        )
    }

    /// Returns the name of the accessor that can read a parameter of this
    /// type, used in type-mismatch messages.
    pub fn accessor(&self) -> &'static str {
        match self {
            ParamType::Str | ParamType::StrVec => "get_string",
            ParamType::Bool | ParamType::BoolVec => "get_bool",
            ParamType::Int | ParamType::IntVec => "get_int",
            ParamType::Double | ParamType::DoubleVec => "get_float",
        }
    }
}

impl FromStr for ParamType {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParamType::from_token(s).ok_or_else(|| ParamError::UnsupportedType {
            type_token: s.to_string(),
        })
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}
