//! The type descriptor tree.

use declsig_stack::ensure_sufficient_stack;
use smallvec::SmallVec;

use crate::{Cv, DescriptorError, Fundamental, RefQualifier, UserDefinedKind};

/// Template label used when the producer does not know the template's name.
pub const DEFAULT_TEMPLATE_NAME: &str = "template";

/// The shape of a callable: return type, parameters and qualifiers.
///
/// Shared by free functions, function pointers/references and
/// member-function pointers. The cv- and ref-qualifiers belong to the
/// function itself, never to a pointer or reference wrapping it.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FunctionType {
    /// Return type.
    pub ret: Box<TypeDescriptor>,
    /// Named parameter types, in order.
    pub params: Vec<TypeDescriptor>,
    /// Whether a trailing `...` is accepted.
    pub variadic: bool,
    /// Function-level cv-qualifier.
    pub cv: Cv,
    /// Function-level ref-qualifier.
    pub ref_qualifier: RefQualifier,
}

impl FunctionType {
    /// A non-variadic, unqualified function.
    pub fn new(ret: TypeDescriptor, params: Vec<TypeDescriptor>) -> Self {
        FunctionType {
            ret: Box::new(ret),
            params,
            variadic: false,
            cv: Cv::empty(),
            ref_qualifier: RefQualifier::None,
        }
    }

    #[must_use]
    pub fn with_variadic(mut self, variadic: bool) -> Self {
        self.variadic = variadic;
        self
    }

    #[must_use]
    pub fn with_cv(mut self, cv: Cv) -> Self {
        self.cv = cv;
        self
    }

    #[must_use]
    pub fn with_ref_qualifier(mut self, ref_qualifier: RefQualifier) -> Self {
        self.ref_qualifier = ref_qualifier;
        self
    }

    /// Whether a cv- or ref-qualifier suffix is present.
    #[inline]
    pub fn has_qualifiers(&self) -> bool {
        !self.cv.is_empty() || self.ref_qualifier.is_some()
    }
}

/// One C-family type, possibly composite.
///
/// Build descriptors with the associated constructors; the ones that carry
/// invariants are checked. Trees assembled from the variants directly can be
/// checked afterwards with [`TypeDescriptor::validate`].
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeDescriptor {
    /// A built-in type: `int`, `void`, `long double`, ...
    Fundamental(Fundamental),

    /// A cv-qualified type: `T const`, `T* volatile`.
    Qualified {
        /// The type being qualified.
        inner: Box<TypeDescriptor>,
        /// Qualifiers applied to `inner`.
        cv: Cv,
    },

    /// `T*`
    Pointer(Box<TypeDescriptor>),

    /// `T&`
    LValueRef(Box<TypeDescriptor>),

    /// `T&&`
    RValueRef(Box<TypeDescriptor>),

    /// `T[]` or `T[N]`. Multi-dimensional arrays nest.
    Array {
        /// Element type.
        element: Box<TypeDescriptor>,
        /// Declared extent, `None` for an unbounded array.
        extent: Option<u64>,
    },

    /// A free function type: `R(Args...)`.
    Function(FunctionType),

    /// `R(*)(Args...)`
    FunctionPointer(FunctionType),

    /// `R(&)(Args...)`
    FunctionLValueRef(FunctionType),

    /// `R(&&)(Args...)`
    FunctionRValueRef(FunctionType),

    /// `R(C::* cv)(Args...) cvr`
    MemberFunctionPointer {
        /// The owning class.
        class: Box<TypeDescriptor>,
        /// The member function's shape.
        function: FunctionType,
        /// Qualifiers on the pointer-to-member value itself.
        pointer_cv: Cv,
    },

    /// `M C::*`
    MemberDataPointer {
        /// The owning class.
        class: Box<TypeDescriptor>,
        /// The data member's type.
        member: Box<TypeDescriptor>,
    },

    /// `name<Args...>`
    TemplateInstantiation {
        /// Opaque template label.
        name: String,
        /// Type arguments, in order. May be empty.
        args: Vec<TypeDescriptor>,
    },

    /// A class, struct, union or enum, known only by category.
    UserDefined(UserDefinedKind),
}

impl TypeDescriptor {
    #[inline]
    pub fn fundamental(f: Fundamental) -> Self {
        TypeDescriptor::Fundamental(f)
    }

    #[inline]
    pub fn user_defined(kind: UserDefinedKind) -> Self {
        TypeDescriptor::UserDefined(kind)
    }

    /// Qualify `inner` with `cv`.
    ///
    /// Qualifying an already-qualified type merges the two sets into one
    /// node, so `const` applied to `volatile T` yields `const volatile T`
    /// and repeating a qualifier changes nothing.
    pub fn qualified(inner: TypeDescriptor, cv: Cv) -> Result<Self, DescriptorError> {
        if cv.is_empty() {
            return Err(DescriptorError::EmptyQualifier);
        }
        let (inner, cv) = match inner {
            TypeDescriptor::Qualified { inner, cv: existing } => (inner, existing | cv),
            other => (Box::new(other), cv),
        };
        if matches!(*inner, TypeDescriptor::Function(_)) {
            return Err(DescriptorError::QualifiedFunction);
        }
        Ok(TypeDescriptor::Qualified { inner, cv })
    }

    #[inline]
    pub fn pointer(pointee: TypeDescriptor) -> Self {
        TypeDescriptor::Pointer(Box::new(pointee))
    }

    /// `referent&`, rejecting references to references.
    pub fn lvalue_ref(referent: TypeDescriptor) -> Result<Self, DescriptorError> {
        check_referent(&referent)?;
        Ok(TypeDescriptor::LValueRef(Box::new(referent)))
    }

    /// `referent&&`, rejecting references to references.
    pub fn rvalue_ref(referent: TypeDescriptor) -> Result<Self, DescriptorError> {
        check_referent(&referent)?;
        Ok(TypeDescriptor::RValueRef(Box::new(referent)))
    }

    /// An array with a declared extent.
    #[inline]
    pub fn array(element: TypeDescriptor, extent: u64) -> Self {
        TypeDescriptor::Array {
            element: Box::new(element),
            extent: Some(extent),
        }
    }

    /// An array of unknown bound.
    #[inline]
    pub fn unbounded_array(element: TypeDescriptor) -> Self {
        TypeDescriptor::Array {
            element: Box::new(element),
            extent: None,
        }
    }

    #[inline]
    pub fn function(function: FunctionType) -> Self {
        TypeDescriptor::Function(function)
    }

    #[inline]
    pub fn function_pointer(function: FunctionType) -> Self {
        TypeDescriptor::FunctionPointer(function)
    }

    #[inline]
    pub fn function_lvalue_ref(function: FunctionType) -> Self {
        TypeDescriptor::FunctionLValueRef(function)
    }

    #[inline]
    pub fn function_rvalue_ref(function: FunctionType) -> Self {
        TypeDescriptor::FunctionRValueRef(function)
    }

    pub fn member_function_pointer(
        class: TypeDescriptor,
        function: FunctionType,
        pointer_cv: Cv,
    ) -> Self {
        TypeDescriptor::MemberFunctionPointer {
            class: Box::new(class),
            function,
            pointer_cv,
        }
    }

    pub fn member_data_pointer(class: TypeDescriptor, member: TypeDescriptor) -> Self {
        TypeDescriptor::MemberDataPointer {
            class: Box::new(class),
            member: Box::new(member),
        }
    }

    /// A template instantiation whose name is unknown.
    #[inline]
    pub fn template(args: Vec<TypeDescriptor>) -> Self {
        Self::template_named(DEFAULT_TEMPLATE_NAME, args)
    }

    pub fn template_named(name: impl Into<String>, args: Vec<TypeDescriptor>) -> Self {
        TypeDescriptor::TemplateInstantiation {
            name: name.into(),
            args,
        }
    }

    /// Whether this is an lvalue or rvalue reference, to a function or not.
    pub fn is_reference(&self) -> bool {
        matches!(
            self,
            TypeDescriptor::LValueRef(_)
                | TypeDescriptor::RValueRef(_)
                | TypeDescriptor::FunctionLValueRef(_)
                | TypeDescriptor::FunctionRValueRef(_)
        )
    }

    #[inline]
    pub fn is_qualified(&self) -> bool {
        matches!(self, TypeDescriptor::Qualified { .. })
    }

    /// Whether this renders as a single named token with no declarator part.
    pub fn is_leaf(&self) -> bool {
        matches!(
            self,
            TypeDescriptor::Fundamental(_)
                | TypeDescriptor::UserDefined(_)
                | TypeDescriptor::TemplateInstantiation { .. }
        )
    }

    /// Peel every `Qualified` layer, returning the core type and the union
    /// of all qualifiers that were removed.
    pub fn strip_qualifiers(&self) -> (&TypeDescriptor, Cv) {
        let mut ty = self;
        let mut cv = Cv::empty();
        while let TypeDescriptor::Qualified { inner, cv: layer } = ty {
            cv |= *layer;
            ty = &**inner;
        }
        (ty, cv)
    }

    /// Direct children, in rendering order.
    pub fn children(&self) -> SmallVec<[&TypeDescriptor; 4]> {
        let mut out = SmallVec::new();
        match self {
            TypeDescriptor::Fundamental(_) | TypeDescriptor::UserDefined(_) => {}
            TypeDescriptor::Qualified { inner: child, .. }
            | TypeDescriptor::Pointer(child)
            | TypeDescriptor::LValueRef(child)
            | TypeDescriptor::RValueRef(child)
            | TypeDescriptor::Array { element: child, .. } => out.push(&**child),
            TypeDescriptor::Function(f)
            | TypeDescriptor::FunctionPointer(f)
            | TypeDescriptor::FunctionLValueRef(f)
            | TypeDescriptor::FunctionRValueRef(f) => push_function(&mut out, f),
            TypeDescriptor::MemberFunctionPointer {
                class, function, ..
            } => {
                out.push(&**class);
                push_function(&mut out, function);
            }
            TypeDescriptor::MemberDataPointer { class, member } => {
                out.push(&**class);
                out.push(&**member);
            }
            TypeDescriptor::TemplateInstantiation { args, .. } => out.extend(args.iter()),
        }
        out
    }

    /// Number of nodes on the longest rendered root-to-leaf path.
    ///
    /// A leaf has depth 1. The function shape inside a function pointer or
    /// member-function pointer belongs to that node and adds no level. The
    /// class of a member-data pointer is never rendered, so it is not counted.
    pub fn depth(&self) -> usize {
        ensure_sufficient_stack(|| {
            let below = match self {
                TypeDescriptor::MemberDataPointer { member, .. } => member.depth(),
                _ => self
                    .children()
                    .into_iter()
                    .map(TypeDescriptor::depth)
                    .max()
                    .unwrap_or(0),
            };
            1 + below
        })
    }

    /// Check the invariants the checked constructors enforce, for trees
    /// built directly from variants. Reports the first violation found in
    /// pre-order.
    pub fn validate(&self) -> Result<(), DescriptorError> {
        ensure_sufficient_stack(|| {
            match self {
                TypeDescriptor::Qualified { inner, cv } => {
                    if cv.is_empty() {
                        return Err(DescriptorError::EmptyQualifier);
                    }
                    if matches!(inner.strip_qualifiers().0, TypeDescriptor::Function(_)) {
                        return Err(DescriptorError::QualifiedFunction);
                    }
                }
                TypeDescriptor::LValueRef(referent) | TypeDescriptor::RValueRef(referent) => {
                    check_referent(referent)?;
                }
                _ => {}
            }
            self.children()
                .into_iter()
                .try_for_each(TypeDescriptor::validate)
        })
    }
}

impl From<Fundamental> for TypeDescriptor {
    fn from(f: Fundamental) -> Self {
        TypeDescriptor::Fundamental(f)
    }
}

impl From<UserDefinedKind> for TypeDescriptor {
    fn from(kind: UserDefinedKind) -> Self {
        TypeDescriptor::UserDefined(kind)
    }
}

fn check_referent(referent: &TypeDescriptor) -> Result<(), DescriptorError> {
    if referent.strip_qualifiers().0.is_reference() {
        Err(DescriptorError::ReferenceToReference)
    } else {
        Ok(())
    }
}

fn push_function<'a>(out: &mut SmallVec<[&'a TypeDescriptor; 4]>, function: &'a FunctionType) {
    out.push(&*function.ret);
    out.extend(function.params.iter());
}
