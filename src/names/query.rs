//! The parsed form of a canonical name.
//!
//! A [`Query`] is what the parser produces and the resolver consumes: the member kind, the
//! path segments and, for methods and properties, the parameter signatures exactly as written.

use std::fmt;

use crate::{model::GenericOwner, names::NameKind};

/// One dot-separated segment of a canonical name path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathSegment {
    /// The segment name without arity suffix
    pub name: String,
    /// Type arity from a `` `N `` suffix (0 if absent)
    pub arity: u32,
    /// Method arity from a ``` ``N ``` suffix (0 if absent)
    pub method_arity: u32,
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if self.arity > 0 {
            write!(f, "`{}", self.arity)?;
        }
        if self.method_arity > 0 {
            write!(f, "``{}", self.method_arity)?;
        }
        Ok(())
    }
}

/// A parameter type as written in a canonical name
///
/// Unlike [`crate::model::TypeRef`], a named type is kept as its dotted text: without a
/// member universe the parser cannot tell namespaces from enclosing types.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SignatureType {
    /// A dotted type name with optional generic arguments
    Named {
        /// Dotted name, e.g. `System.Collections.Generic.List`
        name: String,
        /// Generic arguments in braces
        args: Vec<SignatureType>,
    },
    /// Array with `rank` dimensions
    Array {
        /// The type in the array
        element: Box<SignatureType>,
        /// The number of dimensions
        rank: u32,
    },
    /// A pointer to a type
    Pointer(Box<SignatureType>),
    /// Top-level by-reference marker
    ByRef(Box<SignatureType>),
    /// Generic parameter back-reference
    GenericParam {
        /// Type or method
        owner: GenericOwner,
        /// Zero-based position
        position: u32,
    },
}

impl fmt::Display for SignatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignatureType::Named { name, args } => {
                f.write_str(name)?;
                if !args.is_empty() {
                    f.write_str("{")?;
                    write_list(f, args)?;
                    f.write_str("}")?;
                }
                Ok(())
            }
            SignatureType::Array { element, rank } => {
                write!(f, "{element}[")?;
                for _ in 1..*rank {
                    f.write_str(",")?;
                }
                f.write_str("]")
            }
            SignatureType::Pointer(pointee) => write!(f, "{pointee}*"),
            SignatureType::ByRef(inner) => write!(f, "{inner}@"),
            SignatureType::GenericParam {
                owner: GenericOwner::Type,
                position,
            } => write!(f, "`{position}"),
            SignatureType::GenericParam {
                owner: GenericOwner::Method,
                position,
            } => write!(f, "``{position}"),
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, list: &[SignatureType]) -> fmt::Result {
    for (i, item) in list.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

/// A parsed canonical name, ready to be resolved against a member universe
///
/// The dotted path is kept whole: where the namespace ends and the nesting chain begins is
/// only known once the path is looked up, so that split is left to the resolver.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query {
    /// The kind prefix
    pub kind: NameKind,
    /// All dotted path segments, including the member name for non-type kinds
    pub segments: Vec<PathSegment>,
    /// The parameter list, `None` if the name has no parentheses
    pub parameters: Option<Vec<SignatureType>>,
}

impl Query {
    /// The segments naming the type: all of them for `T:` names, all but the last otherwise
    #[must_use]
    pub fn type_segments(&self) -> &[PathSegment] {
        match self.kind {
            NameKind::Type => &self.segments,
            _ => &self.segments[..self.segments.len().saturating_sub(1)],
        }
    }

    /// The member segment; `None` for `T:` names
    #[must_use]
    pub fn member(&self) -> Option<&PathSegment> {
        match self.kind {
            NameKind::Type => None,
            _ => self.segments.last(),
        }
    }

    /// The parameter list rendered the way the encoder renders one, empty if absent
    #[must_use]
    pub fn rendered_parameters(&self) -> String {
        self.parameters
            .as_deref()
            .map(|params| {
                params
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .unwrap_or_default()
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.kind.prefix())?;
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        if let Some(params) = &self.parameters {
            f.write_str("(")?;
            write_list(f, params)?;
            f.write_str(")")?;
        }
        Ok(())
    }
}
