//! Render errors.

use declsig_stack::DepthExceeded;

/// Why a descriptor could not be rendered.
///
/// Well-formed descriptors always render; the only failure is running out of
/// the configured depth budget.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum RenderError {
    /// The descriptor nests deeper than `max_depth`.
    #[error("type descriptor nests deeper than the limit of {limit}")]
    DepthExceeded {
        /// The configured budget.
        limit: usize,
    },
}

impl From<DepthExceeded> for RenderError {
    fn from(err: DepthExceeded) -> Self {
        RenderError::DepthExceeded { limit: err.limit }
    }
}
