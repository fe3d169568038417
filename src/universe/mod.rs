//! The set of modules canonical names are resolved against.
//!
//! A [`MemberUniverse`] holds an ordered collection of [`Module`]s and a namespace index over
//! their top-level types. It is immutable after construction; the index uses `DashMap` so a
//! universe can be shared across threads and queried concurrently.
//!
//! # Key Components
//!
//! - [`MemberUniverse`] - Module collection, namespace index and entry point for lookups
//! - [`Module`] / [`ModuleDef`] - Source of top-level type definitions
//! - [`TypeDef`] / [`MemberDef`] - Types, their members and nested types
//! - [`TypeBuilder`] - Fluent construction of type definitions
//!
//! # Example
//!
//! ```rust
//! use docid::universe::{MemberUniverse, ModuleDef, TypeBuilder};
//!
//! let universe = MemberUniverse::from_modules(vec![ModuleDef::new(
//!     "Sample.dll",
//!     vec![TypeBuilder::new("", "GlobalClass").method("Run", 0, vec![]).build()],
//! )]);
//!
//! let found = universe.find("M:GlobalClass.Run")?;
//! assert_eq!(found.map(|m| m.to_string()).as_deref(), Some("M:GlobalClass.Run"));
//! # Ok::<(), docid::Error>(())
//! ```

mod builder;
mod types;

pub use builder::TypeBuilder;
pub use types::{MemberDef, Module, ModuleDef, ModuleRc, TypeDef};

use std::sync::Arc;

use dashmap::DashMap;
use log::debug;
use unicase::UniCase;

use crate::{
    model::MemberDescriptor,
    names::{self, Query},
    resolver::{self, ResolverConfig},
    Result,
};

/// Location of a top-level type: module position and type position inside that module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TypeLocation {
    module: usize,
    index: usize,
}

/// An ordered, immutable collection of modules with a namespace index over their types
pub struct MemberUniverse {
    /// All modules, in the order they were supplied
    modules: Vec<ModuleRc>,
    /// Top-level types keyed by case-folded namespace
    types_by_namespace: DashMap<UniCase<String>, Vec<TypeLocation>>,
    /// How queries are matched
    config: ResolverConfig,
}

impl MemberUniverse {
    /// Create a universe over `modules`
    ///
    /// ## Arguments
    /// * 'modules' - The modules to search, in order
    #[must_use]
    pub fn new(modules: Vec<ModuleRc>) -> Self {
        let types_by_namespace: DashMap<UniCase<String>, Vec<TypeLocation>> = DashMap::new();
        let mut type_count = 0;

        for (module, source) in modules.iter().enumerate() {
            for (index, ty) in source.types().iter().enumerate() {
                types_by_namespace
                    .entry(UniCase::new(ty.namespace.clone()))
                    .or_default()
                    .push(TypeLocation { module, index });
                type_count += 1;
            }
        }

        debug!(
            "indexed {type_count} top-level types in {} namespaces from {} modules",
            types_by_namespace.len(),
            modules.len()
        );

        MemberUniverse {
            modules,
            types_by_namespace,
            config: ResolverConfig::default(),
        }
    }

    /// Create a universe from plain in-memory modules
    #[must_use]
    pub fn from_modules(modules: Vec<ModuleDef>) -> Self {
        MemberUniverse::new(
            modules
                .into_iter()
                .map(|module| Arc::new(module) as ModuleRc)
                .collect(),
        )
    }

    /// Create a universe from a possibly absent collection of possibly absent modules
    ///
    /// This is the entry point for hosts that hand over module slots that may not be filled.
    ///
    /// # Errors
    /// Returns [`crate::Error::NullArgument`] if `modules` is `None`, and
    /// [`crate::Error::InvalidFormat`] if any slot is `None`.
    pub fn from_slots<I>(modules: Option<I>) -> Result<Self>
    where
        I: IntoIterator<Item = Option<ModuleRc>>,
    {
        let Some(modules) = modules else {
            return Err(crate::Error::NullArgument("modules"));
        };

        let modules = modules
            .into_iter()
            .map(|slot| slot.ok_or_else(|| format_error!("Cannot contain 'null' modules.")))
            .collect::<Result<Vec<_>>>()?;

        Ok(MemberUniverse::new(modules))
    }

    /// Replace the resolver configuration
    #[must_use]
    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    /// The resolver configuration in use
    #[must_use]
    pub fn config(&self) -> ResolverConfig {
        self.config
    }

    /// The modules of this universe, in order
    #[must_use]
    pub fn modules(&self) -> &[ModuleRc] {
        &self.modules
    }

    /// Top-level types whose namespace equals `namespace` ignoring case
    #[must_use]
    pub fn types_in(&self, namespace: &str) -> Vec<&TypeDef> {
        let Some(locations) = self
            .types_by_namespace
            .get(&UniCase::new(namespace.to_string()))
            .map(|entry| entry.value().clone())
        else {
            return Vec::new();
        };

        locations
            .into_iter()
            .filter_map(|location| {
                self.modules
                    .get(location.module)
                    .and_then(|module| module.types().get(location.index))
            })
            .collect()
    }

    /// Descriptors of every type and member of every module
    #[must_use]
    pub fn descriptors(&self) -> Vec<MemberDescriptor> {
        self.modules
            .iter()
            .flat_map(|module| module.types().iter())
            .flat_map(TypeDef::descriptors)
            .collect()
    }

    /// Resolve an already parsed canonical name
    #[must_use]
    pub fn resolve(&self, query: &Query) -> Option<MemberDescriptor> {
        resolver::resolve(query, self)
    }

    /// Parse `name` and resolve it
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidFormat`] or [`crate::Error::RecursionLimit`] if `name` is
    /// not a well-formed canonical name. A well-formed name that designates nothing (or more
    /// than one member) yields `Ok(None)`.
    pub fn find(&self, name: &str) -> Result<Option<MemberDescriptor>> {
        let query = names::parse(name)?;
        Ok(self.resolve(&query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{test::sample_universe, Error};

    #[test]
    fn test_index() {
        let universe = sample_universe();

        assert_eq!(universe.types_in("n").len(), 3);
        assert_eq!(universe.types_in("N").len(), 3);
        assert_eq!(universe.types_in("").len(), 1);
        assert!(universe.types_in("Missing").is_empty());
    }

    #[test]
    fn test_index_folds_final_sigma() {
        let universe = MemberUniverse::from_modules(vec![ModuleDef::new(
            "Greek.dll",
            vec![TypeBuilder::new("ΟΔΟΣ", "C").build()],
        )]);

        assert_eq!(universe.types_in("οδος").len(), 1);
        assert_eq!(universe.types_in("ΟΔΟΣ").len(), 1);
        assert_eq!(universe.types_in("οδοσ").len(), 1);
    }

    #[test]
    fn test_from_slots() {
        let module: ModuleRc = Arc::new(ModuleDef::new("A.dll", vec![]));

        let universe = MemberUniverse::from_slots(Some(vec![Some(module.clone())])).unwrap();
        assert_eq!(universe.modules().len(), 1);
        assert_eq!(universe.modules()[0].name(), "A.dll");

        let missing = MemberUniverse::from_slots::<Vec<Option<ModuleRc>>>(None);
        assert!(matches!(missing, Err(Error::NullArgument("modules"))));

        let hole = MemberUniverse::from_slots(Some(vec![Some(module), None]));
        match hole {
            Err(Error::InvalidFormat { message }) => {
                assert_eq!(message, "Cannot contain 'null' modules.");
            }
            other => panic!("unexpected result: {:?}", other.map(|u| u.modules().len())),
        }
    }

    #[test]
    fn test_find() {
        let universe = sample_universe();

        assert!(universe.find("T:N.C").unwrap().is_some());
        assert!(universe.find("T:N.Nope").unwrap().is_none());
        assert!(universe.find("X:N.C").is_err());
    }

    #[test]
    fn test_descriptors_cover_nested_types() {
        let universe = sample_universe();
        let names: Vec<String> = universe
            .descriptors()
            .iter()
            .map(ToString::to_string)
            .collect();

        assert!(names.contains(&"T:N.Outer`1.Inner`1".to_string()));
        assert!(names.contains(&"M:N.Outer`1.Inner`1.M``1(`0,`1,``0)".to_string()));
        assert!(names.contains(&"T:GlobalClass".to_string()));
    }

    #[test]
    fn test_shared_across_threads() {
        let universe = Arc::new(sample_universe());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let universe = Arc::clone(&universe);
                std::thread::spawn(move || universe.find("P:N.C.Count").unwrap().is_some())
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }
}
