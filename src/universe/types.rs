//! Type and member definitions exposed by modules.
//!
//! These are the shapes the resolver walks. A [`Module`] hands out top-level [`TypeDef`]s,
//! each of which carries its members and nested types.

use std::sync::Arc;

use crate::model::{MemberDescriptor, MemberKind, Parameter, TypePath};

/// A reference-counted module handle, as held by a [`crate::universe::MemberUniverse`]
pub type ModuleRc = Arc<dyn Module + Send + Sync>;

/// A source of type definitions searched during resolution
///
/// Implement this for whatever layer reads program images; the resolver only ever walks the
/// top-level types it exposes and, from there, their members and nested types.
pub trait Module {
    /// Name of the module, used in log output
    fn name(&self) -> &str;

    /// All top-level (non-nested) types of this module
    fn types(&self) -> &[TypeDef];
}

/// A plain, in-memory module
#[derive(Debug, Clone, Default)]
pub struct ModuleDef {
    /// Name of the module
    pub name: String,
    /// Top-level types
    pub types: Vec<TypeDef>,
}

impl ModuleDef {
    /// Create a new module from its top-level types
    #[must_use]
    pub fn new(name: &str, types: Vec<TypeDef>) -> Self {
        ModuleDef {
            name: name.to_string(),
            types,
        }
    }
}

impl Module for ModuleDef {
    fn name(&self) -> &str {
        &self.name
    }

    fn types(&self) -> &[TypeDef] {
        &self.types
    }
}

/// A non-type member as declared in a type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberDef {
    /// Field, event, property, method or constructor
    pub kind: MemberKind,
    /// Declared name
    pub name: String,
    /// Generic parameters introduced by a method
    pub method_arity: u32,
    /// Ordered parameters
    pub parameters: Vec<Parameter>,
}

impl MemberDef {
    /// The descriptor of this member when declared by the type at `declaring`
    #[must_use]
    pub fn descriptor(&self, declaring: &TypePath) -> MemberDescriptor {
        MemberDescriptor {
            kind: self.kind,
            declaring: declaring.clone(),
            name: self.name.clone(),
            method_arity: self.method_arity,
            parameters: self.parameters.clone(),
        }
    }
}

/// A type definition: its name, declared arity, members and nested types
///
/// Nested types inherit the namespace of their outermost enclosing type; their own
/// `namespace` field is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TypeDef {
    /// Dotted namespace, empty for the global namespace
    pub namespace: String,
    /// Simple name, without arity suffix
    pub name: String,
    /// Generic parameters declared by this type itself
    pub arity: u32,
    /// Fields, events, properties, methods and constructors
    pub members: Vec<MemberDef>,
    /// Types declared inside this one
    pub nested_types: Vec<TypeDef>,
}

impl TypeDef {
    /// Invoke `visit` for this type and every nested type, depth first, with the full path
    /// of each
    pub fn walk<F>(&self, parent: Option<&TypePath>, visit: &mut F)
    where
        F: FnMut(&TypePath, &TypeDef),
    {
        let path = match parent {
            Some(parent) => parent.child(&self.name, self.arity),
            None => TypePath::new(&self.namespace, &[(self.name.as_str(), self.arity)]),
        };

        visit(&path, self);
        for nested in &self.nested_types {
            nested.walk(Some(&path), visit);
        }
    }

    /// Descriptors of this type, its members and, recursively, its nested types
    #[must_use]
    pub fn descriptors(&self) -> Vec<MemberDescriptor> {
        let mut descriptors = Vec::new();
        self.walk(None, &mut |path: &TypePath, ty: &TypeDef| {
            descriptors.push(MemberDescriptor::for_type(path.clone()));
            descriptors.extend(ty.members.iter().map(|member| member.descriptor(path)));
        });
        descriptors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TypeRef;

    #[test]
    fn test_walk_paths() {
        let outer = TypeDef {
            namespace: "N".to_string(),
            name: "Outer".to_string(),
            arity: 1,
            members: Vec::new(),
            nested_types: vec![TypeDef {
                namespace: "ignored".to_string(),
                name: "Inner".to_string(),
                arity: 2,
                ..TypeDef::default()
            }],
        };

        let mut paths = Vec::new();
        outer.walk(None, &mut |path: &TypePath, _: &TypeDef| paths.push(path.clone()));

        assert_eq!(
            paths,
            vec![
                TypePath::new("N", &[("Outer", 1)]),
                TypePath::new("N", &[("Outer", 1), ("Inner", 2)]),
            ]
        );
    }

    #[test]
    fn test_descriptors() {
        let ty = TypeDef {
            namespace: "N".to_string(),
            name: "C".to_string(),
            members: vec![MemberDef {
                kind: MemberKind::Method,
                name: "M".to_string(),
                method_arity: 0,
                parameters: vec![Parameter::new(TypeRef::named("System", "Int32"))],
            }],
            ..TypeDef::default()
        };

        let descriptors = ty.descriptors();
        assert_eq!(descriptors.len(), 2);
        assert_eq!(descriptors[0].kind, MemberKind::Type);
        assert_eq!(descriptors[1].declaring, TypePath::new("N", &[("C", 0)]));

        let module = ModuleDef::new("Test.dll", vec![ty]);
        assert_eq!(module.name(), "Test.dll");
        assert_eq!(module.types().len(), 1);
    }
}
