use std::collections::BTreeMap;
use std::error::Error as StdError;

use thiserror::Error;

use taper_core::{Bracketing, MonotonicFn};

use crate::{Cube, Square};

/// A function evaluation failed inside a registered inverse.
///
/// The original error type is erased so that differently-typed functions
/// can share one registry; the source chain preserves the underlying error.
#[derive(Debug, Error)]
#[error("function domain error")]
pub struct DomainError(#[source] Box<dyn StdError + Send + Sync>);

impl DomainError {
    /// Wraps a function's own error.
    pub fn new<E>(source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self(Box::new(source))
    }
}

/// Object-safe view of a monotonic function and its bound heuristics.
///
/// Implemented automatically for every `MonotonicFn + Bracketing` type, so
/// anything the solvers accept can also live in a [`Registry`].
pub trait InverseDyn {
    /// Evaluates the function at `v`, erasing the error type.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError`] wrapping the function's own error.
    fn eval_dyn(&self, v: f64) -> Result<f64, DomainError>;

    /// See [`Bracketing::lower_bound`].
    fn lower_bound_dyn(&self, target: f64) -> f64;

    /// See [`Bracketing::upper_bound`].
    fn upper_bound_dyn(&self, target: f64) -> f64;
}

impl<T> InverseDyn for T
where
    T: MonotonicFn + Bracketing,
{
    fn eval_dyn(&self, v: f64) -> Result<f64, DomainError> {
        self.eval(v).map_err(DomainError::new)
    }

    fn lower_bound_dyn(&self, target: f64) -> f64 {
        self.lower_bound(target)
    }

    fn upper_bound_dyn(&self, target: f64) -> f64 {
        self.upper_bound(target)
    }
}

/// A borrowed registry entry, usable directly with the solvers.
#[derive(Clone, Copy)]
pub struct Inverse<'a> {
    name: &'a str,
    f: &'a (dyn InverseDyn + Send + Sync),
}

impl Inverse<'_> {
    /// The name this function was registered under.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name
    }
}

impl MonotonicFn for Inverse<'_> {
    type Error = DomainError;

    fn eval(&self, v: f64) -> Result<f64, DomainError> {
        self.f.eval_dyn(v)
    }
}

impl Bracketing for Inverse<'_> {
    fn lower_bound(&self, target: f64) -> f64 {
        self.f.lower_bound_dyn(target)
    }

    fn upper_bound(&self, target: f64) -> f64 {
        self.f.upper_bound_dyn(target)
    }
}

/// Named monotonic functions available for inverse approximation.
///
/// # Example
///
/// ```rust
/// use taper_functions::Registry;
///
/// let registry = Registry::standard();
/// let cube = registry.get("cube").expect("standard inverse");
/// assert_eq!(cube.name(), "cube");
/// ```
pub struct Registry {
    entries: BTreeMap<String, Box<dyn InverseDyn + Send + Sync>>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Creates a registry holding the standard inverses, `"square"` and
    /// `"cube"`.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register("square", Square);
        registry.register("cube", Cube);
        registry
    }

    /// Registers a function under `name`, replacing any previous entry.
    pub fn register<F>(&mut self, name: impl Into<String>, f: F)
    where
        F: MonotonicFn + Bracketing + Send + Sync + 'static,
    {
        self.entries.insert(name.into(), Box::new(f));
    }

    /// Looks up a function by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Inverse<'_>> {
        self.entries.get_key_value(name).map(|(name, f)| Inverse {
            name: name.as_str(),
            f: f.as_ref(),
        })
    }

    /// Iterates over the registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
