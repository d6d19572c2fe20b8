//! cv-qualifiers and ref-qualifiers.

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// A set of cv-qualifiers.
    ///
    /// The empty set means "unqualified". Combining two sets is a union, so
    /// qualifying twice with the same keyword is idempotent and the order in
    /// which `const` and `volatile` were applied is not observable.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Cv: u8 {
        /// `const`
        const CONST = 1 << 0;
        /// `volatile`
        const VOLATILE = 1 << 1;
    }
}

impl Cv {
    /// Both `const` and `volatile`.
    pub const CONST_VOLATILE: Cv = Cv::CONST.union(Cv::VOLATILE);

    /// The keyword spelling, with `const` always ahead of `volatile`.
    ///
    /// Returns the empty string for the unqualified set.
    pub const fn keyword(self) -> &'static str {
        match (self.contains(Cv::CONST), self.contains(Cv::VOLATILE)) {
            (true, true) => "const volatile",
            (true, false) => "const",
            (false, true) => "volatile",
            (false, false) => "",
        }
    }
}

impl fmt::Display for Cv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Value-category restriction on a member function (`&` or `&&`).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RefQualifier {
    /// No ref-qualifier.
    #[default]
    None,
    /// `&`: callable on lvalues only.
    LValue,
    /// `&&`: callable on rvalues only.
    RValue,
}

impl RefQualifier {
    /// The token spelling; empty for [`RefQualifier::None`].
    pub const fn token(self) -> &'static str {
        match self {
            RefQualifier::None => "",
            RefQualifier::LValue => "&",
            RefQualifier::RValue => "&&",
        }
    }

    /// Whether a ref-qualifier is present.
    #[inline]
    pub const fn is_some(self) -> bool {
        !matches!(self, RefQualifier::None)
    }
}

impl fmt::Display for RefQualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[cfg(test)]
mod tests;
