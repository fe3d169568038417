//! Canonical name encoding and parsing.
//!
//! A canonical name is the string key that identifies a program element in XML documentation
//! files and cross references: a one-letter kind prefix, a colon, the qualified path with
//! generic arity suffixes, and for methods and indexers a parenthesized parameter signature.
//!
//! ```text
//! T:System.Collections.Generic.List`1
//! F:System.DateTimeKind.Utc
//! P:N.C.Item(System.String,System.Int32)
//! M:System.Linq.Enumerable.Select``2(System.Collections.Generic.IEnumerable{``0},System.Func{``0,``1})
//! M:N.C.#ctor(System.Int32@)
//! ```
//!
//! # Grammar
//!
//! ```text
//! canonical   := kind ":" path ["(" paramlist ")"]
//! kind        := "T" | "F" | "E" | "P" | "M"
//! path        := [namespace "."] nesting
//! nesting     := segment {"." segment}
//! segment     := name ["`" digits | "``" digits]
//! paramlist   := signature {"," signature}
//! signature   := typename ["{" paramlist "}"] {"[" {","} "]" | "*"} ["@"]
//! typename    := dottedname | "`" digits | "``" digits
//! ```
//!
//! # Examples
//!
//! ```rust
//! use docid::model::{MemberDescriptor, MemberKind, Parameter, TypePath, TypeRef};
//! use docid::names::{encode, parse, NameKind};
//!
//! let indexer = MemberDescriptor {
//!     kind: MemberKind::Property,
//!     declaring: TypePath::new("N", &[("C", 0)]),
//!     name: "Item".to_string(),
//!     method_arity: 0,
//!     parameters: vec![
//!         Parameter::new(TypeRef::named("System", "String")),
//!         Parameter::new(TypeRef::named("System", "Int32")),
//!     ],
//! };
//!
//! let name = encode(&indexer);
//! assert_eq!(name, "P:N.C.Item(System.String,System.Int32)");
//!
//! let query = parse(&name)?;
//! assert_eq!(query.kind, NameKind::Property);
//! assert_eq!(query.to_string(), name);
//! # Ok::<(), docid::Error>(())
//! ```

pub(crate) mod encoder;
mod parser;
mod query;
mod scanner;

pub use encoder::{encode, encode_parameters};
pub use parser::{NameParser, MAX_RECURSION_DEPTH};
pub use query::{PathSegment, Query, SignatureType};

use strum::{EnumCount, EnumIter, IntoEnumIterator};

use crate::Result;

/// Member name used for indexer properties
pub const INDEXER_NAME: &str = "Item";

/// Member name of instance constructors
pub const CONSTRUCTOR_NAME: &str = "#ctor";

/// Member name of static constructors (type initializers)
pub const STATIC_CONSTRUCTOR_NAME: &str = "#cctor";

/// Shortest possible canonical name, e.g. `T:A`
pub const MIN_NAME_LENGTH: usize = 3;

/// The kind prefix of a canonical name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount)]
pub enum NameKind {
    /// `T:` - types
    Type,
    /// `F:` - fields and enum members
    Field,
    /// `E:` - events
    Event,
    /// `P:` - properties and indexers
    Property,
    /// `M:` - methods and constructors
    Method,
}

impl NameKind {
    /// The prefix character of this kind
    #[must_use]
    pub fn prefix(self) -> char {
        match self {
            NameKind::Type => 'T',
            NameKind::Field => 'F',
            NameKind::Event => 'E',
            NameKind::Property => 'P',
            NameKind::Method => 'M',
        }
    }

    /// Look up a kind by prefix character, ignoring case
    #[must_use]
    pub fn from_prefix(prefix: char) -> Option<Self> {
        NameKind::iter().find(|kind| kind.prefix().eq_ignore_ascii_case(&prefix))
    }

    /// The accepted prefix characters, as listed in error messages (`T, F, E, P, M`)
    #[must_use]
    pub fn accepted() -> String {
        let mut accepted = String::with_capacity(NameKind::COUNT * 3);
        for (i, kind) in NameKind::iter().enumerate() {
            if i > 0 {
                accepted.push_str(", ");
            }
            accepted.push(kind.prefix());
        }
        accepted
    }

    /// Returns true if names of this kind may carry a parameter list
    #[must_use]
    pub fn takes_parameters(self) -> bool {
        matches!(self, NameKind::Method | NameKind::Property)
    }
}

/// Parse a canonical name into a [`Query`]
///
/// ## Arguments
/// * 'text' - The canonical name to parse
///
/// # Errors
/// Returns [`crate::Error::InvalidFormat`] if the text does not follow the canonical name
/// grammar, or [`crate::Error::RecursionLimit`] if generic arguments nest too deeply.
pub fn parse(text: &str) -> Result<Query> {
    NameParser::new(text).parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_prefixes() {
        assert_eq!(NameKind::accepted(), "T, F, E, P, M");
        assert_eq!(NameKind::from_prefix('m'), Some(NameKind::Method));
        assert_eq!(NameKind::from_prefix('P'), Some(NameKind::Property));
        assert_eq!(NameKind::from_prefix('K'), None);
        assert_eq!(NameKind::from_prefix('N'), None);
    }

    #[test]
    fn test_parameter_kinds() {
        assert!(NameKind::Method.takes_parameters());
        assert!(NameKind::Property.takes_parameters());
        assert!(!NameKind::Type.takes_parameters());
        assert!(!NameKind::Field.takes_parameters());
        assert!(!NameKind::Event.takes_parameters());
    }
}
