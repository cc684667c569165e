//! Symbol representation.

use std::{
    borrow::{Borrow, Cow},
    fmt::{self, Display},
};

/// An opaque symbol token shown on cards.
///
/// Symbols carry no structure beyond their text. Symbols taken from the
/// built-in [pool](crate::pool) borrow `'static` text and clone without
/// allocating.
///
/// # Examples
///
/// ```
/// use symbolhunt_core::Symbol;
///
/// let owl = Symbol::from_static("🦉");
/// assert_eq!(owl.as_str(), "🦉");
/// assert_eq!(owl, Symbol::new(String::from("🦉")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Symbol(Cow<'static, str>);

impl Symbol {
    /// Creates a symbol that borrows static text.
    #[must_use]
    pub const fn from_static(text: &'static str) -> Self {
        Self(Cow::Borrowed(text))
    }

    /// Creates a symbol from owned or static text.
    #[must_use]
    pub fn new(text: impl Into<Cow<'static, str>>) -> Self {
        Self(text.into())
    }

    /// Returns the symbol text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Symbol {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for Symbol {
    fn from(text: &'static str) -> Self {
        Self::from_static(text)
    }
}

impl From<String> for Symbol {
    fn from(text: String) -> Self {
        Self(Cow::Owned(text))
    }
}
