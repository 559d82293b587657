//! Wall-clock timing around single calls.

use std::time::{Duration, Instant};
use tracing::info;

/// A value together with the time it took to produce it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

/// Runs `f` once, logs how long it took under `name`, and hands back its result.
pub fn timed<T>(name: &str, f: impl FnOnce() -> T) -> Timed<T> {
    let start = Instant::now();
    let value = f();
    let elapsed = start.elapsed();
    info!(
        "Function '{}' took {:.6} seconds.",
        name,
        elapsed.as_secs_f64()
    );
    Timed { value, elapsed }
}

/// Wraps `f` so that every call is timed with [`timed`].
/// The wrapped function returns exactly what `f` returns.
pub fn timer<A, T, F>(name: &'static str, f: F) -> impl Fn(A) -> T
where
    F: Fn(A) -> T,
{
    move |arg| timed(name, || f(arg)).value
}
