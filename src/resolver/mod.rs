//! Resolution of canonical names back to members.
//!
//! A parsed [`Query`] keeps its dotted path whole. Where the namespace ends and the type
//! nesting chain begins is not encoded in the text, so the [`Resolver`] tries every split:
//! the first `k` segments form the namespace (they must carry no arity suffix), the rest are
//! walked as top-level type and nested types. The candidates of all splits are pooled and
//! only a single unique hit is reported.
//!
//! # Matching rules
//!
//! - Namespaces, type names, member names and rendered parameter lists are compared
//!   according to [`ResolverConfig::ignore_case`] (case-insensitively by default)
//! - Each path segment's arity must equal the declared arity of the type at that level
//! - A member matches when its kind renders with the query's prefix, its canonical name
//!   (`Item` for indexers) and method arity agree, and its parameter list renders to the
//!   query's parameter text
//! - A query without parentheses only matches members without parameters
//!
//! Zero matches and ambiguous matches both resolve to `None`.
//!
//! # Example
//!
//! ```rust
//! use docid::{names, resolver::resolve, universe::{MemberUniverse, ModuleDef, TypeBuilder}};
//!
//! let universe = MemberUniverse::from_modules(vec![ModuleDef::new(
//!     "Sample.dll",
//!     vec![TypeBuilder::new("N", "C").field("Value").build()],
//! )]);
//!
//! let query = names::parse("F:n.c.value")?;
//! let member = resolve(&query, &universe).unwrap();
//! assert_eq!(member.to_string(), "F:N.C.Value");
//! # Ok::<(), docid::Error>(())
//! ```

mod config;

pub use config::ResolverConfig;

use log::{debug, trace};

use crate::{
    model::{MemberDescriptor, MemberKind, TypePath},
    names::{encode_parameters, PathSegment, Query},
    universe::{MemberUniverse, TypeDef},
};

/// Resolve `query` against `universe` using the universe's configuration
///
/// Returns the unique member the query designates, or `None` when nothing or more than one
/// member matches.
#[must_use]
pub fn resolve(query: &Query, universe: &MemberUniverse) -> Option<MemberDescriptor> {
    Resolver::new(universe).resolve(query)
}

/// A resolved candidate type together with its full path
type Candidate<'u> = (TypePath, &'u TypeDef);

/// Resolves parsed canonical names against one member universe
pub struct Resolver<'u> {
    universe: &'u MemberUniverse,
    config: ResolverConfig,
}

impl<'u> Resolver<'u> {
    /// Create a resolver that uses the configuration of `universe`
    #[must_use]
    pub fn new(universe: &'u MemberUniverse) -> Self {
        Resolver {
            universe,
            config: universe.config(),
        }
    }

    /// Create a resolver with an explicit configuration
    #[must_use]
    pub fn with_config(universe: &'u MemberUniverse, config: ResolverConfig) -> Self {
        Resolver { universe, config }
    }

    /// Resolve a single query
    #[must_use]
    pub fn resolve(&self, query: &Query) -> Option<MemberDescriptor> {
        let segments = query.type_segments();
        if segments.is_empty() {
            debug!("'{query}' names no declaring type");
            return None;
        }
        if segments.len() > self.config.max_nesting_depth {
            debug!(
                "'{query}' exceeds the maximum path depth of {}",
                self.config.max_nesting_depth
            );
            return None;
        }

        let (path, ty) = self.resolve_type(segments)?;
        match query.member() {
            None => Some(MemberDescriptor::for_type(path)),
            Some(member) => self.resolve_member(query, member, &path, ty),
        }
    }

    fn resolve_type(&self, segments: &[PathSegment]) -> Option<Candidate<'u>> {
        let mut found: Vec<Candidate<'u>> = Vec::new();

        for split in 0..segments.len() {
            let (namespace, nesting) = segments.split_at(split);
            // Every later split keeps this segment in the namespace as well
            if namespace.iter().any(|segment| segment.arity > 0) {
                break;
            }

            let namespace = namespace
                .iter()
                .map(|segment| segment.name.as_str())
                .collect::<Vec<_>>()
                .join(".");
            trace!("looking up {} nested level(s) in namespace '{namespace}'", nesting.len());

            found.extend(self.descend(&namespace, nesting));
            if found.len() > 1 {
                debug!("type path '{}' is ambiguous", render_path(segments));
                return None;
            }
        }

        found.pop()
    }

    /// Walk `nesting` starting from the top-level types of `namespace`. Stops at the first
    /// level that does not have exactly one candidate and returns that level's candidates,
    /// so an ambiguous enclosing type makes the whole lookup ambiguous.
    fn descend(&self, namespace: &str, nesting: &[PathSegment]) -> Vec<Candidate<'u>> {
        let Some((first, rest)) = nesting.split_first() else {
            return Vec::new();
        };

        let mut candidates: Vec<Candidate<'u>> = self
            .universe
            .types_in(namespace)
            .into_iter()
            .filter(|ty| self.config.ignore_case || ty.namespace == namespace)
            .filter(|ty| self.level_matches(first, ty))
            .map(|ty| {
                (
                    TypePath::new(&ty.namespace, &[(ty.name.as_str(), ty.arity)]),
                    ty,
                )
            })
            .collect();

        for segment in rest {
            if candidates.len() != 1 {
                return candidates;
            }
            let Some((path, ty)) = candidates.pop() else {
                return Vec::new();
            };

            candidates = ty
                .nested_types
                .iter()
                .filter(|nested| self.level_matches(segment, nested))
                .map(|nested| (path.child(&nested.name, nested.arity), nested))
                .collect();
        }

        candidates
    }

    fn level_matches(&self, segment: &PathSegment, ty: &TypeDef) -> bool {
        segment.method_arity == 0
            && segment.arity == ty.arity
            && self.config.names_match(&segment.name, &ty.name)
    }

    fn resolve_member(
        &self,
        query: &Query,
        member: &PathSegment,
        path: &TypePath,
        ty: &TypeDef,
    ) -> Option<MemberDescriptor> {
        let parameters = query.rendered_parameters();

        let mut hits = ty
            .members
            .iter()
            .filter(|def| def.kind.name_kind() == query.kind)
            .filter(|def| {
                let method_arity = match def.kind {
                    MemberKind::Method => def.method_arity,
                    _ => 0,
                };
                method_arity == member.method_arity
            })
            .map(|def| def.descriptor(path))
            .filter(|desc| {
                self.config
                    .names_match(&desc.canonical_member_name(), &member.name)
            })
            .filter(|desc| {
                self.config
                    .names_match(&encode_parameters(&desc.parameters), &parameters)
            });

        let hit = hits.next()?;
        if hits.next().is_some() {
            debug!("'{query}' matches more than one member of '{}'", render_type(path));
            return None;
        }

        trace!("resolved '{query}' to '{hit}'");
        Some(hit)
    }
}

fn render_path(segments: &[PathSegment]) -> String {
    segments
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(".")
}

fn render_type(path: &TypePath) -> String {
    MemberDescriptor::for_type(path.clone()).to_string()
}
