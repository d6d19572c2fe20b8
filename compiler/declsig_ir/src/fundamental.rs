//! Leaf type categories: fundamental keywords and user-defined kinds.

use std::fmt;

/// A fundamental (built-in) type, identified by its canonical spelling.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Fundamental {
    Void,
    Bool,
    Char,
    SignedChar,
    UnsignedChar,
    WChar,
    Char8,
    Char16,
    Char32,
    Short,
    UnsignedShort,
    Int,
    UnsignedInt,
    Long,
    UnsignedLong,
    LongLong,
    UnsignedLongLong,
    Float,
    Double,
    LongDouble,
    NullPtr,
}

impl Fundamental {
    /// Every fundamental type, in declaration order.
    pub const ALL: [Fundamental; 21] = [
        Fundamental::Void,
        Fundamental::Bool,
        Fundamental::Char,
        Fundamental::SignedChar,
        Fundamental::UnsignedChar,
        Fundamental::WChar,
        Fundamental::Char8,
        Fundamental::Char16,
        Fundamental::Char32,
        Fundamental::Short,
        Fundamental::UnsignedShort,
        Fundamental::Int,
        Fundamental::UnsignedInt,
        Fundamental::Long,
        Fundamental::UnsignedLong,
        Fundamental::LongLong,
        Fundamental::UnsignedLongLong,
        Fundamental::Float,
        Fundamental::Double,
        Fundamental::LongDouble,
        Fundamental::NullPtr,
    ];

    /// The canonical keyword spelling. Integer types keep their full
    /// `int`-suffixed form (`short int`, `unsigned long long int`).
    pub const fn keyword(self) -> &'static str {
        match self {
            Fundamental::Void => "void",
            Fundamental::Bool => "bool",
            Fundamental::Char => "char",
            Fundamental::SignedChar => "signed char",
            Fundamental::UnsignedChar => "unsigned char",
            Fundamental::WChar => "wchar_t",
            Fundamental::Char8 => "char8_t",
            Fundamental::Char16 => "char16_t",
            Fundamental::Char32 => "char32_t",
            Fundamental::Short => "short int",
            Fundamental::UnsignedShort => "unsigned short int",
            Fundamental::Int => "int",
            Fundamental::UnsignedInt => "unsigned int",
            Fundamental::Long => "long int",
            Fundamental::UnsignedLong => "unsigned long int",
            Fundamental::LongLong => "long long int",
            Fundamental::UnsignedLongLong => "unsigned long long int",
            Fundamental::Float => "float",
            Fundamental::Double => "double",
            Fundamental::LongDouble => "long double",
            Fundamental::NullPtr => "nullptr_t",
        }
    }

    /// Look up a fundamental type by its canonical spelling.
    ///
    /// Only the exact spellings produced by [`Fundamental::keyword`] are
    /// recognized; `signed int` or `long` are not.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.keyword() == keyword)
    }
}

impl fmt::Display for Fundamental {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// The category of a user-defined type. No name is carried.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UserDefinedKind {
    Class,
    Struct,
    Union,
    Enum,
}

impl UserDefinedKind {
    /// The rendered keyword. `struct` shares the `class` token.
    pub const fn keyword(self) -> &'static str {
        match self {
            UserDefinedKind::Class | UserDefinedKind::Struct => "class",
            UserDefinedKind::Union => "union",
            UserDefinedKind::Enum => "enum",
        }
    }
}

impl fmt::Display for UserDefinedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[cfg(test)]
mod tests;
