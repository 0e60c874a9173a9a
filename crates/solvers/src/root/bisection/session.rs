use taper_core::{Bracketing, MonotonicFn};

use crate::root::evaluate;

use super::{
    Error,
    bracket::{Bracket, Side},
    init::{Init, init_or_carry},
};

/// The outcome of a single bisection step.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Step {
    /// The interval collapsed onto an exact root.
    Exact { root: f64 },

    /// The interval was narrowed; the root lies within `[lo, hi]`.
    Narrowed { lo: f64, hi: f64 },
}

/// Interval state for stepwise root approximation.
///
/// A session owns the bracketing interval for one target value and refines
/// it by exactly one halving per [`step`](Session::step) call — the
/// interactive "guess and check" loop, with the interval held by an
/// explicit value instead of hidden shared state. Sessions are independent:
/// a failure or retarget in one never disturbs another.
///
/// The first step establishes the interval from the function's bound
/// heuristics before halving, so a target whose root sits on a heuristic
/// bound or first midpoint resolves exactly in a single step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Session {
    target: f64,
    bracket: Option<Bracket>,
    carried: Option<[f64; 2]>,
}

impl Session {
    /// Creates a session for approximating the root of `target`.
    #[must_use]
    pub fn new(target: f64) -> Self {
        Self {
            target,
            bracket: None,
            carried: None,
        }
    }

    /// Returns the target value this session is approximating.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Returns the current interval, if one has been established.
    #[must_use]
    pub fn interval(&self) -> Option<[f64; 2]> {
        self.bracket.map(|bracket| bracket.bounds())
    }

    /// Points the session at a new target.
    ///
    /// The current endpoints are kept as candidates and revalidated on the
    /// next step; if they no longer bracket the new target they are
    /// replaced by fresh heuristic bounds. Retargeting to the current
    /// target is a no-op.
    pub fn retarget(&mut self, target: f64) {
        if target == self.target {
            return;
        }
        self.target = target;
        if let Some(bracket) = self.bracket.take() {
            self.carried = Some(bracket.bounds());
        }
    }

    /// Advances the approximation by one bisection step.
    ///
    /// Once the interval has collapsed onto an exact root, further steps
    /// return the same root unchanged without evaluating the function.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidBounds`] if the bound heuristics fail to bracket
    ///   the target.
    /// - [`Error::FunctionDomain`] if the function rejects the midpoint;
    ///   the interval is left untouched, so the caller may retry or
    ///   abandon the session without affecting others.
    pub fn step<F>(&mut self, f: &F) -> Result<Step, Error>
    where
        F: MonotonicFn + Bracketing,
    {
        let mut bracket = match self.bracket {
            Some(bracket) => bracket,
            None => match init_or_carry(f, self.target, self.carried.take())? {
                Init::Exact(eval) => {
                    self.bracket = Some(Bracket::collapsed(eval.v));
                    return Ok(Step::Exact { root: eval.v });
                }
                Init::Bracketed { bracket, .. } => {
                    self.bracket = Some(bracket);
                    bracket
                }
            },
        };

        if let Some(root) = bracket.collapsed_root() {
            return Ok(Step::Exact { root });
        }

        let m = bracket.midpoint();
        let eval = evaluate(f, self.target, m).map_err(|e| Error::function(m, e))?;

        if eval.residual == 0.0 {
            bracket.collapse(m);
            self.bracket = Some(bracket);
            return Ok(Step::Exact { root: m });
        }

        bracket.apply(Side::of_residual(eval.residual), m);
        self.bracket = Some(bracket);
        Ok(Step::Narrowed {
            lo: bracket.lo(),
            hi: bracket.hi(),
        })
    }
}
