//! Descriptor to canonical name rendering.
//!
//! Two renderings of a type are involved:
//!
//! - The *declaration* rendering of the path a member lives in, where every nesting level
//!   carries its declared arity (`` N.Outer`1.Inner`2 ``).
//! - The *signature* rendering of parameter types, which never carries arities but lists
//!   actual generic arguments in braces (`N.Outer.Inner{System.Int32}`).
//!
//! Both write into any [`std::fmt::Write`] sink, so the `Display` implementations of the
//! model and the string-returning helpers share one code path.

use std::fmt::{self, Write};

use crate::model::{
    GenericOwner, MemberDescriptor, MemberKind, Parameter, SpecificType, TypePath, TypeRef,
};

/// Encode a descriptor into its canonical name
///
/// ## Arguments
/// * 'member' - The type or member to encode
///
/// # Examples
///
/// ```rust
/// use docid::model::{MemberDescriptor, TypePath};
/// use docid::names::encode;
///
/// let global = MemberDescriptor::for_type(TypePath::new("", &[("GlobalClass", 0)]));
/// assert_eq!(encode(&global), "T:GlobalClass");
///
/// let list = MemberDescriptor::for_type(TypePath::new("System.Collections.Generic", &[("List", 1)]));
/// assert_eq!(encode(&list), "T:System.Collections.Generic.List`1");
/// ```
///
/// ## Notes:
/// - Members always live in a type. A member descriptor with an empty declaring path
///   renders as `M:.Name`, which does not parse back.
#[must_use]
pub fn encode(member: &MemberDescriptor) -> String {
    let mut name = String::with_capacity(64);
    // Writing into a String never fails
    let _ = write_member(&mut name, member);
    name
}

/// Render a parameter list the way it appears between the parentheses of a canonical name
///
/// Returns an empty string for an empty list.
#[must_use]
pub fn encode_parameters(parameters: &[Parameter]) -> String {
    let mut rendered = String::new();
    let _ = write_parameters(&mut rendered, parameters);
    rendered
}

pub(crate) fn write_member<W: Write + ?Sized>(out: &mut W, member: &MemberDescriptor) -> fmt::Result {
    out.write_char(member.kind.name_kind().prefix())?;
    out.write_char(':')?;
    write_declaration_path(out, &member.declaring)?;

    if member.kind == MemberKind::Type {
        return Ok(());
    }

    out.write_char('.')?;
    out.write_str(&member.canonical_member_name())?;

    if member.kind == MemberKind::Method && member.method_arity > 0 {
        write!(out, "``{}", member.method_arity)?;
    }

    if !member.parameters.is_empty() {
        out.write_char('(')?;
        write_parameters(out, &member.parameters)?;
        out.write_char(')')?;
    }

    Ok(())
}

pub(crate) fn write_declaration_path<W: Write + ?Sized>(out: &mut W, path: &TypePath) -> fmt::Result {
    let mut separate = !path.namespace.is_empty();
    out.write_str(&path.namespace)?;

    for level in &path.nesting {
        if separate {
            out.write_char('.')?;
        }
        separate = true;

        out.write_str(&level.name)?;
        if level.arity > 0 {
            write!(out, "`{}", level.arity)?;
        }
    }

    Ok(())
}

pub(crate) fn write_parameters<W: Write + ?Sized>(out: &mut W, parameters: &[Parameter]) -> fmt::Result {
    for (i, param) in parameters.iter().enumerate() {
        if i > 0 {
            out.write_char(',')?;
        }

        write_signature(out, &param.ty)?;
        if param.by_ref && !param.ty.is_by_ref() {
            out.write_char('@')?;
        }
    }

    Ok(())
}

pub(crate) fn write_signature<W: Write + ?Sized>(out: &mut W, ty: &TypeRef) -> fmt::Result {
    match ty {
        TypeRef::Specific(specific) => write_specific(out, specific),
        TypeRef::Array { element, rank } => {
            write_signature(out, element)?;
            out.write_char('[')?;
            for _ in 1..*rank {
                out.write_char(',')?;
            }
            out.write_char(']')
        }
        TypeRef::Pointer(pointee) => {
            write_signature(out, pointee)?;
            out.write_char('*')
        }
        TypeRef::ByRef(inner) => {
            write_signature(out, inner)?;
            out.write_char('@')
        }
        TypeRef::GenericParam {
            owner: GenericOwner::Type,
            position,
        } => write!(out, "`{position}"),
        TypeRef::GenericParam {
            owner: GenericOwner::Method,
            position,
        } => write!(out, "``{position}"),
    }
}

fn write_specific<W: Write + ?Sized>(out: &mut W, specific: &SpecificType) -> fmt::Result {
    let mut separate = !specific.path.namespace.is_empty();
    out.write_str(&specific.path.namespace)?;

    for level in &specific.path.nesting {
        if separate {
            out.write_char('.')?;
        }
        separate = true;
        out.write_str(&level.name)?;
    }

    if !specific.generic_args.is_empty() {
        out.write_char('{')?;
        for (i, arg) in specific.generic_args.iter().enumerate() {
            if i > 0 {
                out.write_char(',')?;
            }
            write_signature(out, arg)?;
        }
        out.write_char('}')?;
    }

    Ok(())
}
