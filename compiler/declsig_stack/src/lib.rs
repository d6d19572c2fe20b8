//! Stack safety for recursive descriptor walks.
//!
//! Type descriptors are trees of arbitrary depth. Two guards keep a walk over
//! them from taking the process down:
//!
//! - [`DepthBudget`] counts nesting levels and fails fast with
//!   [`DepthExceeded`] once a configured maximum is passed.
//! - [`ensure_sufficient_stack`] grows the native stack on demand, so a
//!   generous budget does not turn into a stack overflow.
//!
//! # Usage
//!
//! ```text
//! fn walk(&self, ty: &TypeDescriptor, depth: usize) -> Result<(), DepthExceeded> {
//!     let depth = self.budget.descend(depth)?;
//!     ensure_sufficient_stack(|| {
//!         // ... recurse with `depth` ...
//!     })
//! }
//! ```

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

/// WASM manages its own stack; call through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// A nesting level beyond the budget was reached.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
#[error("nesting depth exceeds the limit of {limit}")]
pub struct DepthExceeded {
    /// The budget that was exceeded.
    pub limit: usize,
}

/// Upper bound on how many nested levels a walk may enter.
///
/// Depths are 1-based: the root of a walk sits at depth 1, so a budget of
/// `n` admits trees whose longest path holds exactly `n` nodes.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct DepthBudget {
    limit: usize,
}

impl DepthBudget {
    /// Create a budget admitting at most `limit` nested levels.
    #[inline]
    pub const fn new(limit: usize) -> Self {
        DepthBudget { limit }
    }

    /// The maximum depth this budget admits.
    #[inline]
    pub const fn limit(self) -> usize {
        self.limit
    }

    /// Step one level below `depth`, returning the child's depth.
    ///
    /// Pass `0` for the root of a walk.
    #[inline]
    pub fn descend(self, depth: usize) -> Result<usize, DepthExceeded> {
        let next = depth.saturating_add(1);
        if next > self.limit {
            tracing::debug!(limit = self.limit, "depth budget exhausted");
            return Err(DepthExceeded { limit: self.limit });
        }
        Ok(next)
    }
}
