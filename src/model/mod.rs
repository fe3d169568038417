//! Descriptor model for types, members and type usages.
//!
//! The model is fed by whatever metadata-reading layer is available (a loaded assembly, a
//! test fixture, a serialized snapshot); the encoder, parser and resolver are indifferent to
//! that source. All types here are plain values: immutable once built, compared structurally.
//!
//! # Key Components
//!
//! - [`TypeRef`] - A type usage inside a signature (named, array, pointer, by-ref, generic
//!   back-reference)
//! - [`TypePath`] - Namespace plus nesting chain with declared arities
//! - [`MemberDescriptor`] - Identity of a type or member

mod member;
mod typeref;

pub use member::{MemberDescriptor, MemberKind, NestingLevel, Parameter, TypePath};
pub use typeref::{GenericOwner, SpecificType, TypeRef};
