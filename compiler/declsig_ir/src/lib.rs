//! Declsig IR - Type Descriptor Model
//!
//! A [`TypeDescriptor`] is an immutable tree describing one C-family type:
//! fundamentals, cv-qualification, pointers, references, arrays, free
//! functions, member pointers and template instantiations.
//!
//! Descriptors are produced by an external collaborator (a reflection layer,
//! a parser, hand-built fixtures) and consumed read-only by the renderer.
//!
//! # Design
//!
//! - **Closed variant set**: every descriptor is exactly one variant, so there
//!   is no partial or null state to represent.
//! - **Structural ownership**: children are owned through `Box`/`Vec`, which
//!   makes every tree finite and acyclic.
//! - **Checked construction**: the constructors that carry invariants
//!   (`qualified`, `lvalue_ref`, `rvalue_ref`) return
//!   `Result<_, DescriptorError>`; [`TypeDescriptor::validate`] checks trees
//!   assembled directly from variants.
//! - **No names for user-defined types**: only the category (`class`,
//!   `union`, `enum`) is known, so only the category is modeled.

mod descriptor;
mod error;
mod fundamental;
mod qualifiers;

pub use descriptor::{FunctionType, TypeDescriptor, DEFAULT_TEMPLATE_NAME};
pub use error::DescriptorError;
pub use fundamental::{Fundamental, UserDefinedKind};
pub use qualifiers::{Cv, RefQualifier};
