//! Type usages as they appear in member signatures.
//!
//! A [`TypeRef`] describes how a parameter refers to a type: by name (optionally instantiated
//! with generic arguments), as an array, pointer or by-reference wrapper of another usage, or
//! as a positional back-reference to a generic parameter of the declaring type or method.
//!
//! The [`std::fmt::Display`] implementation produces the *signature rendering* used inside the
//! parameter list of a canonical name, e.g. `System.Collections.Generic.List{System.Int32}[]`.
//!
//! # Examples
//!
//! ```rust
//! use docid::model::{TypePath, TypeRef};
//!
//! let list = TypeRef::generic(
//!     TypePath::new("System.Collections.Generic", &[("List", 1)]),
//!     vec![TypeRef::named("System", "Int32")],
//! );
//! assert_eq!(list.array(1).to_string(), "System.Collections.Generic.List{System.Int32}[]");
//! assert_eq!(TypeRef::method_param(0).to_string(), "``0");
//! ```

use std::fmt;

use crate::model::TypePath;

/// Who introduced a generic parameter that a [`TypeRef::GenericParam`] refers back to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenericOwner {
    /// A parameter of the declaring type (or one of its enclosing types), rendered `` `P ``
    Type,
    /// A parameter introduced by the method itself, rendered ``` ``P ```
    Method,
}

/// A named type, optionally instantiated with generic arguments
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpecificType {
    /// Namespace and nesting chain, each level carrying its declared arity
    pub path: TypePath,
    /// Actual generic arguments; empty when referring to the open definition
    pub generic_args: Vec<TypeRef>,
}

/// Represents a type usage in a member signature
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// A named type
    Specific(SpecificType),
    /// An array of `element` with `rank` dimensions
    Array {
        /// The type in the array
        element: Box<TypeRef>,
        /// The number of dimensions
        rank: u32,
    },
    /// A pointer to a type
    Pointer(Box<TypeRef>),
    /// Type by reference, only valid as the outermost wrapper of a parameter
    ByRef(Box<TypeRef>),
    /// Back-reference to a generic parameter by zero-based position.
    ///
    /// Type-owned positions count across the entire nesting chain, outer type first.
    GenericParam {
        /// Type or method
        owner: GenericOwner,
        /// Zero-based position
        position: u32,
    },
}

impl TypeRef {
    /// A non-generic top-level type, e.g. `TypeRef::named("System", "String")`
    #[must_use]
    pub fn named(namespace: &str, name: &str) -> Self {
        TypeRef::Specific(SpecificType {
            path: TypePath::new(namespace, &[(name, 0)]),
            generic_args: Vec::new(),
        })
    }

    /// A reference to the type at `path`, without generic arguments
    #[must_use]
    pub fn from_path(path: TypePath) -> Self {
        TypeRef::Specific(SpecificType {
            path,
            generic_args: Vec::new(),
        })
    }

    /// An instantiation of the generic type at `path`
    #[must_use]
    pub fn generic(path: TypePath, generic_args: Vec<TypeRef>) -> Self {
        TypeRef::Specific(SpecificType { path, generic_args })
    }

    /// A back-reference to a generic parameter of the declaring type chain
    #[must_use]
    pub fn type_param(position: u32) -> Self {
        TypeRef::GenericParam {
            owner: GenericOwner::Type,
            position,
        }
    }

    /// A back-reference to a generic parameter of the method
    #[must_use]
    pub fn method_param(position: u32) -> Self {
        TypeRef::GenericParam {
            owner: GenericOwner::Method,
            position,
        }
    }

    /// Wrap this type into an array with `rank` dimensions
    #[must_use]
    pub fn array(self, rank: u32) -> Self {
        TypeRef::Array {
            element: Box::new(self),
            rank: rank.max(1),
        }
    }

    /// Wrap this type into a pointer
    #[must_use]
    pub fn pointer(self) -> Self {
        TypeRef::Pointer(Box::new(self))
    }

    /// Wrap this type into a by-reference marker
    #[must_use]
    pub fn by_ref(self) -> Self {
        TypeRef::ByRef(Box::new(self))
    }

    /// Returns true if this usage is a by-reference wrapper
    #[must_use]
    pub fn is_by_ref(&self) -> bool {
        matches!(self, TypeRef::ByRef(_))
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::names::encoder::write_signature(f, self)
    }
}
