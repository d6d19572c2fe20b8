//! Canonical signatures for C-family type descriptors.
//!
//! Turns a [`TypeDescriptor`] into the single text a C/C++ declarator would
//! use for it:
//!
//! ```text
//! int(*)(int)                          pointer to function
//! int*(int)                            function returning pointer
//! void(class::* const)(int, ...) const &&
//! template<template<int>>
//! ```
//!
//! Rendering is pure and deterministic. The only failure is a descriptor
//! nested deeper than the configured budget, reported as
//! [`RenderError::DepthExceeded`] instead of overflowing the stack.

mod config;
mod error;
mod renderer;

pub use config::{QualifierPlacement, RenderConfig, DEFAULT_MAX_DEPTH};
pub use error::RenderError;
pub use renderer::SignatureRenderer;

pub use declsig_ir::TypeDescriptor;

/// Render `ty` with the default configuration.
pub fn render(ty: &TypeDescriptor) -> Result<String, RenderError> {
    SignatureRenderer::default().render(ty)
}
