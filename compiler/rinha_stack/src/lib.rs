//! Stack growth for deep recursion.
//!
//! The evaluator walks the term tree recursively and has no tail calls, so a
//! recursive Rinha function nests one native frame group per call. Wrapping
//! each evaluation step in [`ensure_sufficient_stack`] moves that limit from
//! the thread's fixed stack to available memory.
//!
//! - **Native targets**: `stacker::maybe_grow` allocates a new segment when
//!   the remaining stack drops under the red zone.
//! - **WASM targets**: plain passthrough.

/// Minimum stack space to keep available (100KB red zone).
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, growing the stack first if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly (WASM has its own stack management).
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
