//! Stack growth for recursive traversal of nested values.
//!
//! The representer walks tables depth-first, one native stack frame group
//! per nesting level. A table nested a few hundred thousand levels deep
//! (built programmatically, never cyclic) would exhaust a normal thread
//! stack long before the traversal finished. Wrapping each level in
//! [`ensure_sufficient_stack`] moves the limit from the initial thread stack
//! to available memory.
//!
//! On `wasm32` the guard is a plain call.

/// Remaining stack below which a new segment is allocated (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first switching to a fresh stack segment if the current one is
/// nearly exhausted.
///
/// ```text
/// fn depth_of(table: &Table) -> usize {
///     ensure_sufficient_stack(|| {
///         1 + child_tables(table).map(depth_of).max().unwrap_or(0)
///     })
/// }
/// ```
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
