//! # docid Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and functions
//! of the docid library. Import it to encode, parse and resolve canonical names without
//! spelling out module paths.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all docid operations
pub use crate::Error;

/// The result type used throughout docid
pub use crate::Result;

/// Configuration for name resolution
pub use crate::resolver::ResolverConfig;

// ================================================================================================
// Data Model
// ================================================================================================

/// Descriptors of types, members and parameter types
pub use crate::model::{
    GenericOwner, MemberDescriptor, MemberKind, NestingLevel, Parameter, SpecificType, TypePath,
    TypeRef,
};

// ================================================================================================
// Canonical Names
// ================================================================================================

/// Encoding and parsing
pub use crate::names::{encode, parse, NameKind, PathSegment, Query, SignatureType};

// ================================================================================================
// Member Universe and Resolution
// ================================================================================================

/// Modules and type definitions
pub use crate::universe::{
    MemberDef, MemberUniverse, Module, ModuleDef, ModuleRc, TypeBuilder, TypeDef,
};

/// Resolution of parsed names
pub use crate::resolver::{resolve, Resolver};

// ================================================================================================
// Documentation Files
// ================================================================================================

/// XML documentation file index
pub use crate::docfile::{DocEntry, DocumentationFile};
