//! Stack growth for recursive productions.
//!
//! Type specs nest (`List<Map<K, List<V>>>`) and the parser descends once
//! per level. Wrapping each descent in [`ensure_sufficient_stack`] moves the
//! recursion onto a fresh segment when the current one runs low, so input
//! nesting depth is bounded by memory instead of the thread's stack.
//!
//! On `wasm32` the guard is a plain call.

/// Grow when less than this much stack remains.
const RED_ZONE: usize = 100 * 1024;

/// Size of each new stack segment.
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first switching to a new stack segment if the current one is
/// within [`RED_ZONE`] of exhaustion.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
