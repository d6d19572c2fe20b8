//! Renderer configuration.

/// Default nesting budget for a single render.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Configuration for [`SignatureRenderer`](crate::SignatureRenderer).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RenderConfig {
    /// Deepest descriptor nesting accepted before rendering fails with
    /// [`RenderError::DepthExceeded`](crate::RenderError::DepthExceeded).
    pub max_depth: usize,

    /// Which side of a named type its cv-qualifier is written on.
    pub qualifier_placement: QualifierPlacement,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            qualifier_placement: QualifierPlacement::East,
        }
    }
}

impl RenderConfig {
    /// Create a config with the specified depth budget.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Default::default()
        }
    }

    /// Create a config with the specified qualifier placement.
    pub fn with_qualifier_placement(qualifier_placement: QualifierPlacement) -> Self {
        Self {
            qualifier_placement,
            ..Default::default()
        }
    }

    /// A config with no practical depth limit.
    ///
    /// The native stack still grows on demand, so only memory bounds the walk.
    pub fn unlimited() -> Self {
        Self {
            max_depth: usize::MAX,
            ..Default::default()
        }
    }
}

/// Position of a cv-qualifier relative to the named type it qualifies.
///
/// Only named types (fundamentals, user-defined kinds, template
/// instantiations) are affected. A qualifier on a pointer or member pointer
/// is always written after its `*`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum QualifierPlacement {
    /// `int const` (default).
    #[default]
    East,
    /// `const int`
    West,
}
