// SPDX-License-Identifier: MIT OR Apache-2.0

//! Line classification and declaration tokenization.
//!
//! Each line of a parameter file is either blank, a comment, or a
//! declaration of exactly four whitespace-separated tokens:
//! `<type> <key> = <value>`. The third token is decorative and never
//! validated.
//!
//! Comment handling is deliberately broader than the format's ancestry: any
//! line whose first token starts with `#` is a comment, so both `# note` and
//! `#note` are skipped. Requiring `#` to stand alone as its own token would
//! make `#note` an unsupported-type error, which no parameter file author
//! expects.

use crate::domain::errors::{ParamError, Result};
use crate::domain::ParamType;
use tracing::warn;

/// A tokenized `type key = value` declaration, borrowing from the input line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Declaration<'a> {
    /// The declared parameter type.
    pub param_type: ParamType,
    /// The parameter name.
    pub key: &'a str,
    /// The raw value token, not yet converted.
    pub value: &'a str,
}

/// One classified line of a parameter file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Line<'a> {
    /// A whitespace-only line; skipped.
    Blank,
    /// A line whose first token starts with `#`; skipped.
    Comment,
    /// A well-formed declaration.
    Declaration(Declaration<'a>),
}

/// Classifies a single raw line.
///
/// `number` is the one-based line number, used in error messages.
///
/// # Errors
///
/// Returns [`ParamError::MalformedLine`] when a non-blank, non-comment line
/// does not have exactly four tokens, and [`ParamError::UnsupportedType`]
/// when the type token is outside the supported set. The unsupported-type
/// path also emits a `tracing` warning listing the supported tokens.
///
/// # Examples
///
/// ```
/// use paramfile::parser::{parse_line, Line};
/// use paramfile::domain::ParamType;
///
/// let line = parse_line("int num_bins = 64", 1).unwrap();
/// match line {
///     Line::Declaration(decl) => {
///         assert_eq!(decl.param_type, ParamType::Int);
///         assert_eq!(decl.key, "num_bins");
///         assert_eq!(decl.value, "64");
///     }
///     _ => unreachable!(),
/// }
///
/// assert_eq!(parse_line("# a comment", 2).unwrap(), Line::Comment);
/// assert_eq!(parse_line("   ", 3).unwrap(), Line::Blank);
/// ```
pub fn parse_line(raw: &str, number: usize) -> Result<Line<'_>> {
    let tokens: Vec<&str> = raw.split_whitespace().collect();

    let Some(first) = tokens.first() else {
        return Ok(Line::Blank);
    };
    if first.starts_with('#') {
        return Ok(Line::Comment);
    }
    if tokens.len() != 4 {
        return Err(ParamError::MalformedLine { line: number });
    }

    let param_type = ParamType::from_token(tokens[0]).ok_or_else(|| {
        warn!(
            line = number,
            found = tokens[0],
            "unrecognized type in parameter file; supported types are \
             string, int, double, bool, vector<string>, vector<double>, \
             vector<int>, and vector<bool>"
        );
        ParamError::UnsupportedType {
            type_token: tokens[0].to_string(),
        }
    })?;

    Ok(Line::Declaration(Declaration {
        param_type,
        key: tokens[1],
        value: tokens[3],
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn declaration(raw: &str) -> Declaration<'_> {
        match parse_line(raw, 1).unwrap() {
            Line::Declaration(decl) => decl,
            other => panic!("expected declaration, got {:?}", other),
        }
    }

    #[test]
    fn test_scalar_declaration() {
        let decl = declaration("double box_size = 1024.0");
        assert_eq!(decl.param_type, ParamType::Double);
        assert_eq!(decl.key, "box_size");
        assert_eq!(decl.value, "1024.0");
    }

    #[test]
    fn test_vector_declaration() {
        let decl = declaration("vector<string> columns = x,y,z");
        assert_eq!(decl.param_type, ParamType::StrVec);
        assert_eq!(decl.key, "columns");
        assert_eq!(decl.value, "x,y,z");
    }

    #[test]
    fn test_equals_token_is_decorative() {
        // The third token is never validated.
        let decl = declaration("int n := 5");
        assert_eq!(decl.key, "n");
        assert_eq!(decl.value, "5");
    }

    #[test]
    fn test_extra_whitespace_between_tokens() {
        let decl = declaration("  int   n   =   5  ");
        assert_eq!(decl.key, "n");
        assert_eq!(decl.value, "5");
    }

    #[test]
    fn test_blank_lines() {
        assert_eq!(parse_line("", 1).unwrap(), Line::Blank);
        assert_eq!(parse_line(" \t ", 1).unwrap(), Line::Blank);
    }

    #[test]
    fn test_comment_lines() {
        assert_eq!(parse_line("# anything goes here", 1).unwrap(), Line::Comment);
        assert_eq!(parse_line("#no-space-comment", 1).unwrap(), Line::Comment);
        assert_eq!(parse_line("   # indented", 1).unwrap(), Line::Comment);
    }

    #[test]
    fn test_malformed_too_few_tokens() {
        let err = parse_line("int n =", 4).unwrap_err();
        assert!(matches!(err, ParamError::MalformedLine { line: 4 }));
    }

    #[test]
    fn test_malformed_too_many_tokens() {
        let err = parse_line("int n = 1 2", 9).unwrap_err();
        assert!(matches!(err, ParamError::MalformedLine { line: 9 }));
    }

    #[test]
    fn test_unsupported_type() {
        let err = parse_line("float x = 1", 2).unwrap_err();
        match err {
            ParamError::UnsupportedType { type_token } => assert_eq!(type_token, "float"),
            other => panic!("expected UnsupportedType, got {:?}", other),
        }
    }
}
