use thiserror::Error;

/// Configuration for the bisection solver's one-shot mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    width_abs_tol: f64,
    width_rel_tol: f64,
    residual_tol: f64,
}

/// Errors that can occur when validating a bisection solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("width_abs_tol must be finite and non-negative")]
    WidthAbs,

    #[error("width_rel_tol must be finite and non-negative")]
    WidthRel,

    #[error("residual_tol must be finite and non-negative")]
    Residual,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(100, 1e-12, 1e-12, 0.0).unwrap()
    }
}

impl Config {
    /// Creates a new config with validated tolerances.
    ///
    /// A `residual_tol` of zero disables residual-based convergence except
    /// for exact hits, which always terminate.
    ///
    /// # Errors
    ///
    /// Returns an error if any tolerance is negative or non-finite.
    pub fn new(
        max_iters: usize,
        width_abs_tol: f64,
        width_rel_tol: f64,
        residual_tol: f64,
    ) -> Result<Self, ConfigError> {
        if !width_abs_tol.is_finite() || width_abs_tol < 0.0 {
            return Err(ConfigError::WidthAbs);
        }
        if !width_rel_tol.is_finite() || width_rel_tol < 0.0 {
            return Err(ConfigError::WidthRel);
        }
        if !residual_tol.is_finite() || residual_tol < 0.0 {
            return Err(ConfigError::Residual);
        }

        Ok(Self {
            max_iters,
            width_abs_tol,
            width_rel_tol,
            residual_tol,
        })
    }

    /// Returns the maximum number of halving iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the absolute tolerance on interval width.
    #[must_use]
    pub fn width_abs_tol(&self) -> f64 {
        self.width_abs_tol
    }

    /// Returns the relative tolerance on interval width.
    #[must_use]
    pub fn width_rel_tol(&self) -> f64 {
        self.width_rel_tol
    }

    /// Returns the tolerance on residual magnitude.
    #[must_use]
    pub fn residual_tol(&self) -> f64 {
        self.residual_tol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = Config::default();
        assert_eq!(config.max_iters(), 100);
        assert_eq!(config.width_abs_tol(), 1e-12);
        assert_eq!(config.width_rel_tol(), 1e-12);
        assert_eq!(config.residual_tol(), 0.0);
    }

    #[test]
    fn rejects_negative_tolerances() {
        assert_eq!(
            Config::new(10, -1.0, 0.0, 0.0),
            Err(ConfigError::WidthAbs)
        );
        assert_eq!(
            Config::new(10, 0.0, -1.0, 0.0),
            Err(ConfigError::WidthRel)
        );
        assert_eq!(
            Config::new(10, 0.0, 0.0, -1.0),
            Err(ConfigError::Residual)
        );
    }

    #[test]
    fn rejects_non_finite_tolerances() {
        assert_eq!(
            Config::new(10, f64::NAN, 0.0, 0.0),
            Err(ConfigError::WidthAbs)
        );
        assert_eq!(
            Config::new(10, 0.0, f64::INFINITY, 0.0),
            Err(ConfigError::WidthRel)
        );
    }

    #[test]
    fn zero_tolerances_are_allowed() {
        // Pure iteration-bounded mode: only exact hits terminate early.
        assert!(Config::new(10, 0.0, 0.0, 0.0).is_ok());
    }
}
