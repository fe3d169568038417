// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
//#![deny(unsafe_code)]
// - 'docfile.rs' uses mmap to map a documentation file into memory

//! # docid
//!
//! Canonical names for .NET program elements, as used by XML documentation files and
//! cross references: `T:System.Collections.Generic.List`1`,
//! `M:System.Linq.Enumerable.Select``2(System.Collections.Generic.IEnumerable{``0},System.Func{``0,``1})`.
//!
//! ## Features
//!
//! - **Encoding** - Render the canonical name of any type, field, event, property, indexer,
//!   method or constructor described by a [`model::MemberDescriptor`]
//! - **Parsing** - Validate canonical names against the grammar with exact error messages
//! - **Resolution** - Find the unique member a (possibly differently cased) name designates
//!   in a [`universe::MemberUniverse`]
//! - **Documentation files** - Index and link the `<member>` entries of XML documentation
//!
//! ## Quick Start
//!
//! ```rust
//! use docid::prelude::*;
//!
//! let universe = MemberUniverse::from_modules(vec![ModuleDef::new(
//!     "Sample.dll",
//!     vec![TypeBuilder::new("N", "C")
//!         .indexer(vec![
//!             Parameter::new(TypeRef::named("System", "String")),
//!             Parameter::new(TypeRef::named("System", "Int32")),
//!         ])
//!         .build()],
//! )]);
//!
//! for member in universe.descriptors() {
//!     let name = encode(&member);
//!     assert_eq!(universe.find(&name.to_lowercase())?, Some(member));
//! }
//! # Ok::<(), docid::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! Malformed names are reported through [`Error`]; well-formed names that designate nothing,
//! or more than one member, resolve to `None`.

#[macro_use]
pub(crate) mod error;

/// Shared functionality which is used in unit- and integration-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use docid::prelude::*;
///
/// let query = parse("T:System.Collections.Generic.List`1")?;
/// assert_eq!(query.kind, NameKind::Type);
/// # Ok::<(), docid::Error>(())
/// ```
pub mod prelude;

/// Descriptions of types and members
///
/// The data model shared by the encoder and the resolver: [`model::MemberDescriptor`] is the
/// identity of a type or member, [`model::TypeRef`] describes a parameter type.
pub mod model;

/// Encoding and parsing of canonical names
///
/// # Main Functions
///
/// - [`names::encode`] - Render the canonical name of a descriptor
/// - [`names::parse`] - Parse and validate a canonical name into a [`names::Query`]
pub mod names;

/// Modules, types and members canonical names are resolved against
pub mod universe;

/// Resolution of parsed canonical names to members
pub mod resolver;

/// XML documentation files keyed by canonical name
pub mod docfile;

/// `docid` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
///
/// # Examples
///
/// ```rust
/// use docid::{names::Query, Result};
///
/// fn parse_all(names: &[&str]) -> Result<Vec<Query>> {
///     names.iter().map(|name| docid::names::parse(name)).collect()
/// }
///
/// assert!(parse_all(&["T:A", "F:A.B"]).is_ok());
/// assert!(parse_all(&["T:A", "T"]).is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `docid` Error type
///
/// # Examples
///
/// ```rust
/// use docid::{names::parse, Error};
///
/// match parse("T.wrong_separator") {
///     Ok(_) => unreachable!(),
///     Err(Error::InvalidFormat { message }) => println!("Malformed: {}", message),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub use error::Error;

/// Entry point for resolving names, see [`universe::MemberUniverse`]
pub use universe::MemberUniverse;

/// Resolver settings, see [`resolver::ResolverConfig`]
pub use resolver::ResolverConfig;
