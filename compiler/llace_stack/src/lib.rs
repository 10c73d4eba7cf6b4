//! Stack growth for deeply nested Llace source.
//!
//! The parser and writer recurse once per nesting level, as do clone,
//! comparison and S-expression dumps of the tree. A file with thousands of
//! nested parentheses can therefore exhaust the native stack. Wrapping each
//! recursive step in [`ensure_sufficient_stack`] grows it on demand.
//!
//! On `wasm32` the call is a passthrough.

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than [`RED_ZONE`] bytes remain.
///
/// ```text
/// fn parse_expression(&mut self, min_bp: u16) -> Result<Expr, ParseError> {
///     ensure_sufficient_stack(|| self.parse_expression_inner(min_bp))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
