use taper_core::{Bracketing, MonotonicFn, Observer};

use crate::root::{Evaluation, evaluate};

use super::{
    Action, Config, Error, Event,
    best::Best,
    bracket::Bracket,
    decision::Decision,
    init::{Init, init},
    solution::{Solution, Status},
};

/// Core one-shot bisection loop.
///
/// Establishes the interval from the function's bound heuristics, then
/// halves it until a width or residual tolerance is met, a probe hits the
/// target exactly, the iteration budget runs out, or an observer stops the
/// search.
pub(super) fn search<F, Obs>(
    f: &F,
    target: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: MonotonicFn + Bracketing,
    Obs: for<'a> Observer<Event<'a, F>, Action>,
{
    let bounds = [f.lower_bound(target), f.upper_bound(target)];
    let (mut bracket, mut best) = match init(f, target, bounds)? {
        Init::Exact(eval) => {
            return Ok(Best::new(eval).finish(Status::Converged, 0, [eval.v, eval.v]));
        }
        Init::Bracketed { bracket, evals } => {
            let mut best = Best::new(evals[0]);
            best.update(evals[1]);
            (bracket, best)
        }
    };

    for iter in 1..=config.max_iters() {
        if is_width_converged(&bracket, config) {
            return Ok(best.finish(Status::Converged, iter - 1, bracket.bounds()));
        }

        let m = bracket.midpoint();
        let (action, outcome) = probe(f, target, m, &bracket, &mut observer);

        match Decision::new(action, outcome) {
            Decision::Exact(eval) => {
                bracket.collapse(eval.v);
                best.update(eval);
                return Ok(best.finish(Status::Converged, iter, bracket.bounds()));
            }
            Decision::Narrow { side, eval } => {
                bracket.apply(side, m);
                if let Some(eval) = eval {
                    best.update(eval);
                    if best.is_residual_converged(config.residual_tol()) {
                        return Ok(best.finish(Status::Converged, iter, bracket.bounds()));
                    }
                }
            }
            Decision::StopEarly => {
                return Ok(best.finish(Status::StoppedByObserver, iter, bracket.bounds()));
            }
            Decision::Error(error) => return Err(error),
        }
    }

    Ok(best.finish(Status::MaxIters, config.max_iters(), bracket.bounds()))
}

/// Probe the midpoint, emit the event, and collect the observer's action.
fn probe<F, Obs>(
    f: &F,
    target: f64,
    m: f64,
    bracket: &Bracket,
    observer: &mut Obs,
) -> (Option<Action>, Result<Evaluation, Error>)
where
    F: MonotonicFn,
    Obs: for<'a> Observer<Event<'a, F>, Action>,
{
    match evaluate(f, target, m) {
        Ok(eval) => {
            let event = Event::Evaluated {
                eval,
                lo: bracket.lo(),
                hi: bracket.hi(),
            };
            (observer.observe(&event), Ok(eval))
        }
        Err(error) => {
            let action = {
                let event = Event::FunctionFailed {
                    v: m,
                    lo: bracket.lo(),
                    hi: bracket.hi(),
                    error: &error,
                };
                observer.observe(&event)
            };
            (action, Err(Error::function(m, error)))
        }
    }
}

fn is_width_converged(bracket: &Bracket, config: &Config) -> bool {
    let x_ref = bracket.midpoint().abs();
    bracket.width() <= config.width_abs_tol() + config.width_rel_tol() * x_ref
}
