//! Identity of members and types.
//!
//! A [`MemberDescriptor`] carries exactly the information that determines a canonical name:
//! the member kind, the declaring type path with per-level arities, the member name, the
//! method arity and the ordered parameter list. Two descriptors are equal iff they designate
//! the same element.

use std::{borrow::Cow, fmt};

use crate::{
    model::TypeRef,
    names::{NameKind, CONSTRUCTOR_NAME, INDEXER_NAME, STATIC_CONSTRUCTOR_NAME},
};

/// One level of a type nesting chain: a simple name and its declared generic arity
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NestingLevel {
    /// Simple name, without arity suffix
    pub name: String,
    /// Generic parameters declared at this level (not counting enclosing types)
    pub arity: u32,
}

impl NestingLevel {
    /// Create a new nesting level
    #[must_use]
    pub fn new(name: &str, arity: u32) -> Self {
        NestingLevel {
            name: name.to_string(),
            arity,
        }
    }
}

/// The fully qualified location of a type: namespace plus nesting chain
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TypePath {
    /// Dotted namespace, empty for the global namespace
    pub namespace: String,
    /// Enclosing types from outermost to innermost
    pub nesting: Vec<NestingLevel>,
}

impl TypePath {
    /// Create a path from a namespace and `(name, arity)` pairs
    ///
    /// ## Arguments
    /// * 'namespace' - Dotted namespace, may be empty
    /// * 'nesting'   - Type chain from outermost to innermost
    #[must_use]
    pub fn new(namespace: &str, nesting: &[(&str, u32)]) -> Self {
        TypePath {
            namespace: namespace.to_string(),
            nesting: nesting
                .iter()
                .map(|(name, arity)| NestingLevel::new(name, *arity))
                .collect(),
        }
    }

    /// Returns a new path with `level` appended as innermost type
    #[must_use]
    pub fn child(&self, name: &str, arity: u32) -> Self {
        let mut nesting = self.nesting.clone();
        nesting.push(NestingLevel::new(name, arity));
        TypePath {
            namespace: self.namespace.clone(),
            nesting,
        }
    }

    /// Sum of the declared arities along the chain
    #[must_use]
    pub fn total_arity(&self) -> u32 {
        self.nesting.iter().map(|level| level.arity).sum()
    }

    /// The innermost type's simple name
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.nesting.last().map(|level| level.name.as_str())
    }
}

/// The kind of element a descriptor designates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    /// A type, possibly nested
    Type,
    /// A field, including enum members
    Field,
    /// An event
    Event,
    /// A property, including indexers
    Property,
    /// A method
    Method,
    /// An instance or static constructor
    Constructor,
}

impl MemberKind {
    /// The canonical name prefix this kind is rendered with
    #[must_use]
    pub fn name_kind(self) -> NameKind {
        match self {
            MemberKind::Type => NameKind::Type,
            MemberKind::Field => NameKind::Field,
            MemberKind::Event => NameKind::Event,
            MemberKind::Property => NameKind::Property,
            MemberKind::Method | MemberKind::Constructor => NameKind::Method,
        }
    }
}

/// A method or indexer parameter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Parameter {
    /// The type of the parameter, never a by-reference wrapper
    pub ty: TypeRef,
    /// Parameter is passed by reference
    pub by_ref: bool,
}

impl Parameter {
    /// Create a parameter; a [`TypeRef::ByRef`] is unwrapped into `by_ref = true`
    #[must_use]
    pub fn new(ty: TypeRef) -> Self {
        match ty {
            TypeRef::ByRef(inner) => Parameter {
                ty: *inner,
                by_ref: true,
            },
            ty => Parameter { ty, by_ref: false },
        }
    }

    /// Create a by-reference parameter (`ref`, `out` or `in`)
    #[must_use]
    pub fn by_ref(ty: TypeRef) -> Self {
        let mut param = Parameter::new(ty);
        param.by_ref = true;
        param
    }
}

impl From<TypeRef> for Parameter {
    fn from(ty: TypeRef) -> Self {
        Parameter::new(ty)
    }
}

/// Identity of a type or member, the input of the encoder and the output of the resolver
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemberDescriptor {
    /// What kind of element this is
    pub kind: MemberKind,
    /// For [`MemberKind::Type`] the type itself, otherwise the immediate declaring type
    pub declaring: TypePath,
    /// Simple name; `#ctor` / `#cctor` for constructors
    pub name: String,
    /// Generic parameters introduced by a method (0 for everything else)
    pub method_arity: u32,
    /// Ordered parameter list, empty for types, fields, events and plain properties
    pub parameters: Vec<Parameter>,
}

impl MemberDescriptor {
    /// The descriptor of the type at `path`
    #[must_use]
    pub fn for_type(path: TypePath) -> Self {
        MemberDescriptor {
            kind: MemberKind::Type,
            name: path.name().unwrap_or_default().to_string(),
            declaring: path,
            method_arity: 0,
            parameters: Vec::new(),
        }
    }

    /// The name this member is rendered with: [`INDEXER_NAME`] for properties with
    /// parameters, otherwise the declared name
    #[must_use]
    pub fn canonical_member_name(&self) -> Cow<'_, str> {
        if self.is_indexer() {
            Cow::Borrowed(INDEXER_NAME)
        } else {
            Cow::Borrowed(self.name.as_str())
        }
    }

    /// Returns true for properties that take parameters
    #[must_use]
    pub fn is_indexer(&self) -> bool {
        self.kind == MemberKind::Property && !self.parameters.is_empty()
    }

    /// Returns true for the static type initializer
    #[must_use]
    pub fn is_static_constructor(&self) -> bool {
        self.kind == MemberKind::Constructor && self.name == STATIC_CONSTRUCTOR_NAME
    }

    /// Returns true for instance constructors
    #[must_use]
    pub fn is_instance_constructor(&self) -> bool {
        self.kind == MemberKind::Constructor && self.name == CONSTRUCTOR_NAME
    }
}

impl fmt::Display for MemberDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::names::encoder::write_member(f, self)
    }
}
