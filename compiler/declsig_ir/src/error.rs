//! Contract violations detected while building descriptors.

/// A descriptor that breaks a structural invariant.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum DescriptorError {
    /// A `Qualified` node with no qualifier in it.
    #[error("qualified type carries no cv-qualifier")]
    EmptyQualifier,
    /// A cv-qualifier applied directly to a function type.
    #[error("cv-qualifier applied to a function type")]
    QualifiedFunction,
    /// A reference whose referent is itself a reference.
    #[error("reference to reference is not a valid type")]
    ReferenceToReference,
}
