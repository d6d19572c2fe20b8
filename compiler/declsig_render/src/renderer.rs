//! Descriptor-to-text rendering.
//!
//! Every shape writes its inner type first and then its own token: `T*`,
//! `T&`, `T[]`, `R(Args...)`, `T class::*`, `T const`. The only tokens that
//! land between a return type and its parameter list are the function
//! indirections, `R(*)(Args...)` and `R(C::*)(Args...)`, which is what keeps
//! a function pointer apart from a function returning a pointer.
//!
//! cv-qualifiers travel down as a pending set through `Qualified` layers
//! until the node they qualify writes them. A function indirection writes
//! them inside its parentheses (`R(* const)(Args...)`).

use declsig_ir::{Cv, FunctionType, RefQualifier, TypeDescriptor};
use declsig_stack::{ensure_sufficient_stack, DepthBudget};
use rayon::prelude::*;

use crate::{QualifierPlacement, RenderConfig, RenderError};

/// Renders type descriptors as canonical C/C++ signatures.
///
/// Holds only its configuration, so one renderer can be shared across
/// threads and reused for any number of descriptors.
#[derive(Clone, Debug)]
pub struct SignatureRenderer {
    config: RenderConfig,
    budget: DepthBudget,
}

impl Default for SignatureRenderer {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

impl SignatureRenderer {
    pub fn new(config: RenderConfig) -> Self {
        SignatureRenderer {
            config,
            budget: DepthBudget::new(config.max_depth),
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render `ty` to its canonical signature.
    #[tracing::instrument(level = "trace", skip_all, fields(max_depth = self.config.max_depth))]
    pub fn render(&self, ty: &TypeDescriptor) -> Result<String, RenderError> {
        let mut buf = String::new();
        self.write_type(ty, Cv::empty(), 0, &mut buf)?;
        Ok(buf)
    }

    /// Append the signature of `ty` to `buf`.
    ///
    /// On error `buf` is left as it was.
    pub fn render_into(&self, ty: &TypeDescriptor, buf: &mut String) -> Result<(), RenderError> {
        let start = buf.len();
        let result = self.write_type(ty, Cv::empty(), 0, buf);
        if result.is_err() {
            buf.truncate(start);
        }
        result
    }

    /// Render independent descriptors in parallel, preserving input order.
    pub fn render_many(&self, tys: &[TypeDescriptor]) -> Vec<Result<String, RenderError>> {
        tracing::trace!(count = tys.len(), "rendering batch");
        tys.par_iter().map(|ty| self.render(ty)).collect()
    }

    /// Write `ty`, qualified by `cv`, as a child of a node at `depth`.
    fn write_type(
        &self,
        ty: &TypeDescriptor,
        cv: Cv,
        depth: usize,
        buf: &mut String,
    ) -> Result<(), RenderError> {
        let depth = self.budget.descend(depth)?;
        ensure_sufficient_stack(|| match ty {
            TypeDescriptor::Fundamental(f) => {
                self.write_named(buf, cv, |buf| {
                    buf.push_str(f.keyword());
                    Ok(())
                })
            }
            TypeDescriptor::UserDefined(kind) => {
                self.write_named(buf, cv, |buf| {
                    buf.push_str(kind.keyword());
                    Ok(())
                })
            }
            TypeDescriptor::TemplateInstantiation { name, args } => {
                self.write_named(buf, cv, |buf| {
                    buf.push_str(name);
                    buf.push('<');
                    self.write_list(args, depth, buf)?;
                    buf.push('>');
                    Ok(())
                })
            }

            // Nested layers merge: const of volatile T is const volatile T.
            TypeDescriptor::Qualified { inner, cv: layer } => {
                self.write_type(inner, cv | *layer, depth, buf)
            }

            TypeDescriptor::Pointer(inner) => self.write_indirection(inner, "*", cv, depth, buf),
            TypeDescriptor::LValueRef(inner) => self.write_indirection(inner, "&", cv, depth, buf),
            TypeDescriptor::RValueRef(inner) => {
                self.write_indirection(inner, "&&", cv, depth, buf)
            }

            // The extent is not part of the canonical form.
            TypeDescriptor::Array { element, .. } => {
                self.write_type(element, Cv::empty(), depth, buf)?;
                buf.push_str("[]");
                push_cv(buf, cv);
                Ok(())
            }

            TypeDescriptor::Function(function) => {
                if !cv.is_empty() {
                    tracing::trace!(%cv, "dropping cv-qualifier on a function type");
                }
                self.write_function(function, None, depth, buf)
            }
            TypeDescriptor::FunctionPointer(function) => {
                self.write_function(function, Some(("*", cv)), depth, buf)
            }
            TypeDescriptor::FunctionLValueRef(function) => {
                self.write_function(function, Some(("&", cv)), depth, buf)
            }
            TypeDescriptor::FunctionRValueRef(function) => {
                self.write_function(function, Some(("&&", cv)), depth, buf)
            }

            TypeDescriptor::MemberFunctionPointer {
                class,
                function,
                pointer_cv,
            } => {
                let mut op = String::new();
                self.write_type(class, Cv::empty(), depth, &mut op)?;
                op.push_str("::*");
                self.write_function(function, Some((op.as_str(), cv | *pointer_cv)), depth, buf)
            }

            // The owning class always collapses to the `class` keyword here.
            TypeDescriptor::MemberDataPointer { member, .. } => {
                self.write_type(member, Cv::empty(), depth, buf)?;
                buf.push_str(" class::*");
                push_cv(buf, cv);
                Ok(())
            }
        })
    }

    /// Emit a named type with its qualifier on the configured side.
    fn write_named(
        &self,
        buf: &mut String,
        cv: Cv,
        name: impl FnOnce(&mut String) -> Result<(), RenderError>,
    ) -> Result<(), RenderError> {
        match self.config.qualifier_placement {
            QualifierPlacement::West if !cv.is_empty() => {
                buf.push_str(cv.keyword());
                buf.push(' ');
                name(buf)
            }
            _ => {
                name(buf)?;
                push_cv(buf, cv);
                Ok(())
            }
        }
    }

    /// `inner` followed by `op`, or a parenthesized function indirection
    /// when `inner` is a bare function type.
    fn write_indirection(
        &self,
        inner: &TypeDescriptor,
        op: &str,
        cv: Cv,
        depth: usize,
        buf: &mut String,
    ) -> Result<(), RenderError> {
        if let TypeDescriptor::Function(function) = inner {
            let depth = self.budget.descend(depth)?;
            return self.write_function(function, Some((op, cv)), depth, buf);
        }
        self.write_type(inner, Cv::empty(), depth, buf)?;
        buf.push_str(op);
        push_cv(buf, cv);
        Ok(())
    }

    /// `R(Args...) cvr`, or `R(op cv)(Args...) cvr` for an indirection.
    fn write_function(
        &self,
        function: &FunctionType,
        indirection: Option<(&str, Cv)>,
        depth: usize,
        buf: &mut String,
    ) -> Result<(), RenderError> {
        self.write_type(&function.ret, Cv::empty(), depth, buf)?;
        if let Some((op, cv)) = indirection {
            buf.push('(');
            buf.push_str(op);
            push_cv(buf, cv);
            buf.push(')');
        }

        buf.push('(');
        self.write_list(&function.params, depth, buf)?;
        if function.variadic {
            if !function.params.is_empty() {
                buf.push_str(", ");
            }
            buf.push_str("...");
        }
        buf.push(')');
        push_function_qualifiers(buf, function.cv, function.ref_qualifier);
        Ok(())
    }

    /// Write `tys` joined by `", "`, each as a child of `depth`.
    fn write_list(
        &self,
        tys: &[TypeDescriptor],
        depth: usize,
        buf: &mut String,
    ) -> Result<(), RenderError> {
        for (i, ty) in tys.iter().enumerate() {
            if i > 0 {
                buf.push_str(", ");
            }
            self.write_type(ty, Cv::empty(), depth, buf)?;
        }
        Ok(())
    }
}

/// Append ` cv` when `cv` is not empty.
fn push_cv(buf: &mut String, cv: Cv) {
    if !cv.is_empty() {
        buf.push(' ');
        buf.push_str(cv.keyword());
    }
}

/// Append function-level qualifiers: ` const volatile &&`.
fn push_function_qualifiers(buf: &mut String, cv: Cv, ref_qualifier: RefQualifier) {
    push_cv(buf, cv);
    if ref_qualifier.is_some() {
        buf.push(' ');
        buf.push_str(ref_qualifier.token());
    }
}

#[cfg(test)]
mod tests;
