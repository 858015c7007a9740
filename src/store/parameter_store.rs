// SPDX-License-Identifier: MIT OR Apache-2.0

//! The typed parameter store.
//!
//! A [`ParameterStore`] is populated once, from a file or a string, and is
//! read-only afterwards. Values live in eight independent type buckets, one
//! per supported [`ParamType`]; a name may therefore appear in more than one
//! bucket, in which case diagnostics resolve it in the canonical bucket
//! order.

use crate::domain::convert;
use crate::domain::errors::{ParamError, Result};
use crate::domain::{ParamType, TypedKey};
use crate::parser::{parse_line, Declaration, Line};
use directories::ProjectDirs;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, warn};

/// Requested-family description used in type-mismatch messages.
const NUMERIC: &str = "a numeric";
const BOOLEAN: &str = "a boolean";
const TEXT: &str = "a string";

/// Advice appended to the not-found message of the float accessor.
const NUMERIC_HINT: &str = "; add it to the parameter file as a numeric type";

/// A typed key-value store loaded from a parameter file.
///
/// The store holds eight independent ordered mappings, one per supported
/// type. It is constructed once and treated as immutable afterwards; all
/// query methods take `&self`, and the type is `Send + Sync`, so a loaded
/// store can be shared freely across threads.
///
/// Within a bucket, a repeated key keeps the last declaration. The same name
/// declared under two different types lands in both buckets; the typed
/// accessors and [`type_of`](ParameterStore::type_of) resolve such duplicates
/// in the canonical order given by [`ParamType::ALL`].
///
/// # Examples
///
/// ```
/// use paramfile::prelude::*;
///
/// # fn main() -> Result<()> {
/// let text = "double box_size = 1024.0\nint num_bins = 64\nvector<int> seeds = 42,1337";
/// let store: ParameterStore = text.parse()?;
///
/// assert_eq!(store.get_float("box_size")?, 1024.0);
/// assert_eq!(store.get_int_at("seeds", 1)?, 1337);
/// store.check_minimum_required(&[TypedKey::new(ParamType::Int, "num_bins")])?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, Serialize)]
pub struct ParameterStore {
    strings: BTreeMap<String, String>,
    ints: BTreeMap<String, i64>,
    doubles: BTreeMap<String, f64>,
    bools: BTreeMap<String, bool>,
    double_vecs: BTreeMap<String, Vec<f64>>,
    int_vecs: BTreeMap<String, Vec<i64>>,
    string_vecs: BTreeMap<String, Vec<String>>,
    bool_vecs: BTreeMap<String, Vec<bool>>,
}

impl ParameterStore {
    /// Loads a parameter file from `path`.
    ///
    /// The file is read to a string first, so the handle is released before
    /// parsing begins on every path, including errors.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::Io`] if the file cannot be read, and
    /// [`ParamError::Incomplete`] if any line fails to parse; the offending
    /// line error is attached as the source.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use paramfile::store::ParameterStore;
    ///
    /// let store = ParameterStore::from_file("/etc/myapp/params.txt").unwrap();
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading parameter file");
        let content = fs::read_to_string(path)?;
        let store: Self = content.parse()?;
        debug!(count = store.len(), "loaded parameters");
        Ok(store)
    }

    /// Loads a parameter file named `filename` from the OS-appropriate
    /// configuration directory for `app_name`.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name (e.g., "myapp")
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    /// * `filename` - The parameter file name (e.g., "params.txt")
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::NoConfigDir`] if the configuration directory
    /// cannot be determined, plus everything
    /// [`from_file`](ParameterStore::from_file) can return.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use paramfile::store::ParameterStore;
    ///
    /// let store =
    ///     ParameterStore::from_default_location("myapp", "com.example", "params.txt").unwrap();
    /// ```
    pub fn from_default_location(app_name: &str, qualifier: &str, filename: &str) -> Result<Self> {
        let proj_dirs =
            ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| ParamError::NoConfigDir {
                app_name: app_name.to_string(),
            })?;

        Self::from_file(proj_dirs.config_dir().join(filename))
    }

    /// Returns a floating-point parameter.
    ///
    /// Equivalent to [`get_float_at`](ParameterStore::get_float_at) with
    /// index 0.
    ///
    /// # Errors
    ///
    /// See [`get_float_at`](ParameterStore::get_float_at).
    pub fn get_float(&self, key: &str) -> Result<f64> {
        self.get_float_at(key, 0)
    }

    /// Returns a floating-point parameter, indexing into vector types.
    ///
    /// Resolution order: `double`, `int` (widened), `vector<double>` at
    /// `index`, `vector<int>` at `index` (widened). The index is ignored for
    /// scalar parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::TypeMismatch`] if the key exists under a
    /// non-numeric type (the message names the declared type and the
    /// accessor to use instead), or [`ParamError::NotFound`] if the key does
    /// not exist at all.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds for a vector-typed parameter.
    ///
    /// # Examples
    ///
    /// ```
    /// use paramfile::store::ParameterStore;
    ///
    /// let store: ParameterStore = "vector<double> limits = 0.0,0.5,1.0".parse().unwrap();
    /// assert_eq!(store.get_float_at("limits", 2).unwrap(), 1.0);
    /// ```
    pub fn get_float_at(&self, key: &str, index: usize) -> Result<f64> {
        if let Some(value) = self.doubles.get(key) {
            return Ok(*value);
        }
        if let Some(value) = self.ints.get(key) {
            return Ok(*value as f64);
        }
        if let Some(values) = self.double_vecs.get(key) {
            return Ok(values[index]);
        }
        if let Some(values) = self.int_vecs.get(key) {
            return Ok(values[index] as f64);
        }
        Err(self.lookup_failure(key, NUMERIC, NUMERIC_HINT))
    }

    /// Returns an integer parameter.
    ///
    /// Equivalent to [`get_int_at`](ParameterStore::get_int_at) with index 0.
    ///
    /// # Errors
    ///
    /// See [`get_int_at`](ParameterStore::get_int_at).
    pub fn get_int(&self, key: &str) -> Result<i64> {
        self.get_int_at(key, 0)
    }

    /// Returns an integer parameter, indexing into vector types.
    ///
    /// Resolution order: `int`, `double` (truncated toward zero),
    /// `vector<int>` at `index`, `vector<double>` at `index` (truncated
    /// toward zero). The index is ignored for scalar parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::TypeMismatch`] if the key exists under a
    /// non-numeric type, or [`ParamError::NotFound`] if the key does not
    /// exist at all.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds for a vector-typed parameter.
    pub fn get_int_at(&self, key: &str, index: usize) -> Result<i64> {
        if let Some(value) = self.ints.get(key) {
            return Ok(*value);
        }
        if let Some(value) = self.doubles.get(key) {
            return Ok(*value as i64);
        }
        if let Some(values) = self.int_vecs.get(key) {
            return Ok(values[index]);
        }
        if let Some(values) = self.double_vecs.get(key) {
            return Ok(values[index] as i64);
        }
        Err(self.lookup_failure(key, NUMERIC, ""))
    }

    /// Returns a boolean parameter.
    ///
    /// Equivalent to [`get_bool_at`](ParameterStore::get_bool_at) with
    /// index 0.
    ///
    /// # Errors
    ///
    /// See [`get_bool_at`](ParameterStore::get_bool_at).
    pub fn get_bool(&self, key: &str) -> Result<bool> {
        self.get_bool_at(key, 0)
    }

    /// Returns a boolean parameter, indexing into `vector<bool>`.
    ///
    /// Booleans never coerce across type families: any other declared type
    /// is a hard mismatch.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::TypeMismatch`] if the key exists under a
    /// non-boolean type, or [`ParamError::NotFound`] if the key does not
    /// exist at all.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds for a `vector<bool>` parameter.
    pub fn get_bool_at(&self, key: &str, index: usize) -> Result<bool> {
        if let Some(value) = self.bools.get(key) {
            return Ok(*value);
        }
        if let Some(values) = self.bool_vecs.get(key) {
            return Ok(values[index]);
        }
        Err(self.lookup_failure(key, BOOLEAN, ""))
    }

    /// Returns a string parameter.
    ///
    /// Equivalent to [`get_string_at`](ParameterStore::get_string_at) with
    /// index 0.
    ///
    /// # Errors
    ///
    /// See [`get_string_at`](ParameterStore::get_string_at).
    pub fn get_string(&self, key: &str) -> Result<String> {
        self.get_string_at(key, 0)
    }

    /// Returns a string parameter, indexing into `vector<string>`.
    ///
    /// Strings never coerce across type families; numbers and booleans are
    /// never rendered as text here.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::TypeMismatch`] if the key exists under a
    /// non-string type, or [`ParamError::NotFound`] if the key does not
    /// exist at all.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds for a `vector<string>` parameter.
    pub fn get_string_at(&self, key: &str, index: usize) -> Result<String> {
        if let Some(value) = self.strings.get(key) {
            return Ok(value.clone());
        }
        if let Some(values) = self.string_vecs.get(key) {
            return Ok(values[index].clone());
        }
        Err(self.lookup_failure(key, TEXT, ""))
    }

    /// Returns `true` if `key` exists in any of the eight type buckets.
    ///
    /// # Examples
    ///
    /// ```
    /// use paramfile::store::ParameterStore;
    ///
    /// let store: ParameterStore = "bool verbose = true".parse().unwrap();
    /// assert!(store.has_parameter("verbose"));
    /// assert!(!store.has_parameter("quiet"));
    /// ```
    pub fn has_parameter(&self, key: &str) -> bool {
        self.type_of(key).is_some()
    }

    /// Returns the declared type of `key`, if present.
    ///
    /// A name declared under more than one type resolves in the canonical
    /// bucket order given by [`ParamType::ALL`].
    pub fn type_of(&self, key: &str) -> Option<ParamType> {
        ParamType::ALL
            .iter()
            .copied()
            .find(|ty| self.contains_as(*ty, key))
    }

    /// Verifies that every `(type, key)` requirement is present under
    /// exactly the stated type.
    ///
    /// No coercion is applied: an `int` requirement is not satisfied by a
    /// `double` declaration. One warning is logged per missing entry before
    /// the error is returned, so every gap is reported in a single run.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::MissingRequired`] carrying every absent
    /// requirement if at least one is missing.
    ///
    /// # Examples
    ///
    /// ```
    /// use paramfile::prelude::*;
    ///
    /// let store: ParameterStore = "int num_bins = 64".parse().unwrap();
    ///
    /// assert!(store
    ///     .check_minimum_required(&[TypedKey::new(ParamType::Int, "num_bins")])
    ///     .is_ok());
    /// assert!(store
    ///     .check_minimum_required(&[TypedKey::new(ParamType::Double, "num_bins")])
    ///     .is_err());
    /// ```
    pub fn check_minimum_required(&self, required: &[TypedKey]) -> Result<()> {
        let mut missing = Vec::new();
        for requirement in required {
            if self.contains_as(requirement.param_type(), requirement.name()) {
                continue;
            }
            warn!("{} not found.", requirement);
            missing.push(requirement.clone());
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ParamError::MissingRequired { missing })
        }
    }

    /// Returns the total number of stored parameters across all buckets.
    pub fn len(&self) -> usize {
        self.strings.len()
            + self.ints.len()
            + self.doubles.len()
            + self.bools.len()
            + self.double_vecs.len()
            + self.int_vecs.len()
            + self.string_vecs.len()
            + self.bool_vecs.len()
    }

    /// Returns `true` if no parameters are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Writes every stored parameter to stdout, one per line, in the same
    /// `<type> <key> = <value>` shape the file format uses.
    ///
    /// Buckets are printed in the canonical order and keys ascend
    /// lexicographically within a bucket, so the output is deterministic.
    /// This is the [`Display`](fmt::Display) rendering.
    pub fn print(&self) {
        print!("{}", self);
    }

    /// Converts one declaration into its bucket.
    fn assign(&mut self, decl: &Declaration<'_>) {
        let key = decl.key.to_string();
        let value = decl.value;
        match decl.param_type {
            ParamType::Str => {
                self.strings.insert(key, value.to_string());
            }
            ParamType::Int => {
                self.ints.insert(key, convert::to_int(value));
            }
            ParamType::Double => {
                self.doubles.insert(key, convert::to_double(value));
            }
            ParamType::Bool => {
                self.bools.insert(key, convert::to_bool(value));
            }
            ParamType::DoubleVec => {
                let elements = convert::split_elements(value)
                    .into_iter()
                    .map(convert::to_double)
                    .collect();
                self.double_vecs.insert(key, elements);
            }
            ParamType::IntVec => {
                let elements = convert::split_elements(value)
                    .into_iter()
                    .map(convert::to_int)
                    .collect();
                self.int_vecs.insert(key, elements);
            }
            ParamType::StrVec => {
                let elements = convert::split_elements(value)
                    .into_iter()
                    .map(str::to_string)
                    .collect();
                self.string_vecs.insert(key, elements);
            }
            ParamType::BoolVec => {
                let elements = convert::split_elements(value)
                    .into_iter()
                    .map(convert::to_bool)
                    .collect();
                self.bool_vecs.insert(key, elements);
            }
        }
    }

    fn contains_as(&self, ty: ParamType, key: &str) -> bool {
        match ty {
            ParamType::Str => self.strings.contains_key(key),
            ParamType::Int => self.ints.contains_key(key),
            ParamType::Double => self.doubles.contains_key(key),
            ParamType::Bool => self.bools.contains_key(key),
            ParamType::DoubleVec => self.double_vecs.contains_key(key),
            ParamType::IntVec => self.int_vecs.contains_key(key),
            ParamType::StrVec => self.string_vecs.contains_key(key),
            ParamType::BoolVec => self.bool_vecs.contains_key(key),
        }
    }

    /// Builds the error for a lookup that matched no compatible bucket:
    /// a mismatch naming the declared type if the key exists anywhere,
    /// not-found otherwise.
    fn lookup_failure(&self, key: &str, requested: &'static str, hint: &'static str) -> ParamError {
        match self.type_of(key) {
            Some(actual) => ParamError::TypeMismatch {
                key: key.to_string(),
                actual,
                requested,
                suggested: actual.accessor(),
            },
            None => ParamError::NotFound {
                key: key.to_string(),
                hint,
            },
        }
    }
}

impl FromStr for ParameterStore {
    type Err = ParamError;

    fn from_str(content: &str) -> Result<Self> {
        let mut store = ParameterStore::default();
        for (idx, raw) in content.lines().enumerate() {
            match parse_line(raw, idx + 1) {
                Ok(Line::Blank | Line::Comment) => {}
                Ok(Line::Declaration(decl)) => store.assign(&decl),
                Err(e) => {
                    return Err(ParamError::Incomplete {
                        source: Box::new(e),
                    })
                }
            }
        }
        Ok(store)
    }
}

impl fmt::Display for ParameterStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.strings {
            writeln!(f, "string {} = {}", key, value)?;
        }
        for (key, value) in &self.ints {
            writeln!(f, "int {} = {}", key, value)?;
        }
        for (key, value) in &self.doubles {
            writeln!(f, "double {} = {}", key, value)?;
        }
        for (key, value) in &self.bools {
            writeln!(f, "bool {} = {}", key, value)?;
        }
        for (key, values) in &self.double_vecs {
            writeln!(f, "vector<double> {} = {}", key, join(values))?;
        }
        for (key, values) in &self.int_vecs {
            writeln!(f, "vector<int> {} = {}", key, join(values))?;
        }
        for (key, values) in &self.string_vecs {
            writeln!(f, "vector<string> {} = {}", key, join(values))?;
        }
        for (key, values) in &self.bool_vecs {
            writeln!(f, "vector<bool> {} = {}", key, join(values))?;
        }
        Ok(())
    }
}

/// Comma-joins vector elements with no trailing comma.
fn join<T: fmt::Display>(values: &[T]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
