//! Builder for type definitions.
//!
//! This module provides the [`TypeBuilder`] struct, which offers a fluent API for constructing
//! [`TypeDef`]s with their members and nested types. It is how tests, fixtures and simple
//! metadata layers populate a [`crate::universe::MemberUniverse`].
//!
//! # Example
//!
//! ```rust
//! use docid::model::{Parameter, TypeRef};
//! use docid::universe::TypeBuilder;
//!
//! let list = TypeBuilder::new("System.Collections.Generic", "List")
//!     .generic(1)
//!     .constructor(vec![])
//!     .method("Add", 0, vec![Parameter::new(TypeRef::type_param(0))])
//!     .property("Count")
//!     .indexer(vec![Parameter::new(TypeRef::named("System", "Int32"))])
//!     .nested_type(TypeBuilder::nested("Enumerator").build())
//!     .build();
//!
//! assert_eq!(list.arity, 1);
//! assert_eq!(list.members.len(), 4);
//! assert_eq!(list.nested_types.len(), 1);
//! ```

use crate::{
    model::{MemberKind, Parameter},
    names::{CONSTRUCTOR_NAME, INDEXER_NAME, STATIC_CONSTRUCTOR_NAME},
    universe::{MemberDef, TypeDef},
};

/// Provides a fluent API for building type definitions
pub struct TypeBuilder {
    /// Type being built
    current: TypeDef,
}

impl TypeBuilder {
    /// Start building a top-level type
    ///
    /// ## Arguments
    /// * 'namespace' - Dotted namespace, empty for the global namespace
    /// * 'name'      - Simple name without arity suffix
    #[must_use]
    pub fn new(namespace: &str, name: &str) -> Self {
        TypeBuilder {
            current: TypeDef {
                namespace: namespace.to_string(),
                name: name.to_string(),
                ..TypeDef::default()
            },
        }
    }

    /// Start building a type that will be nested into another one
    #[must_use]
    pub fn nested(name: &str) -> Self {
        TypeBuilder::new("", name)
    }

    /// Set the number of generic parameters this type declares itself
    #[must_use]
    pub fn generic(mut self, arity: u32) -> Self {
        self.current.arity = arity;
        self
    }

    fn member(
        mut self,
        kind: MemberKind,
        name: &str,
        method_arity: u32,
        parameters: Vec<Parameter>,
    ) -> Self {
        self.current.members.push(MemberDef {
            kind,
            name: name.to_string(),
            method_arity,
            parameters,
        });
        self
    }

    /// Add a field (or enum member)
    #[must_use]
    pub fn field(self, name: &str) -> Self {
        self.member(MemberKind::Field, name, 0, Vec::new())
    }

    /// Add an event
    #[must_use]
    pub fn event(self, name: &str) -> Self {
        self.member(MemberKind::Event, name, 0, Vec::new())
    }

    /// Add a property without parameters
    #[must_use]
    pub fn property(self, name: &str) -> Self {
        self.member(MemberKind::Property, name, 0, Vec::new())
    }

    /// Add an indexer, a property taking `parameters`
    #[must_use]
    pub fn indexer(self, parameters: Vec<Parameter>) -> Self {
        self.member(MemberKind::Property, INDEXER_NAME, 0, parameters)
    }

    /// Add a method
    ///
    /// ## Arguments
    /// * 'name'         - Method name, explicit interface implementations use `#` separators
    /// * 'method_arity' - Generic parameters the method introduces
    /// * 'parameters'   - Ordered parameter list
    #[must_use]
    pub fn method(self, name: &str, method_arity: u32, parameters: Vec<Parameter>) -> Self {
        self.member(MemberKind::Method, name, method_arity, parameters)
    }

    /// Add an instance constructor
    #[must_use]
    pub fn constructor(self, parameters: Vec<Parameter>) -> Self {
        self.member(MemberKind::Constructor, CONSTRUCTOR_NAME, 0, parameters)
    }

    /// Add the static constructor (type initializer)
    #[must_use]
    pub fn static_constructor(self) -> Self {
        self.member(MemberKind::Constructor, STATIC_CONSTRUCTOR_NAME, 0, Vec::new())
    }

    /// Nest a type into the one being built
    #[must_use]
    pub fn nested_type(mut self, nested: TypeDef) -> Self {
        self.current.nested_types.push(nested);
        self
    }

    /// Finish building
    #[must_use]
    pub fn build(self) -> TypeDef {
        self.current
    }
}
