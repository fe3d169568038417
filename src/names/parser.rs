//! Recursive descent parser for canonical names.
//!
//! [`NameParser`] checks the kind prefix, splits the dotted path into segments with their
//! arity suffixes and parses the optional parameter list into [`SignatureType`] trees.
//! Generic argument nesting is bounded by [`MAX_RECURSION_DEPTH`].

use crate::{
    model::GenericOwner,
    names::{
        scanner::{find_top_level, split_top_level, Scanner, SplitError},
        NameKind, PathSegment, Query, SignatureType, MIN_NAME_LENGTH,
    },
    Error::RecursionLimit,
    Result,
};

/// Maximum nesting depth of generic arguments in a parameter signature
pub const MAX_RECURSION_DEPTH: usize = 50;

/// Characters that end a dotted type name inside a signature
const SIGNATURE_DELIMITERS: [char; 9] = ['{', '}', '[', ']', '*', '@', ',', '(', ')'];

/// Characters that may not appear at the top level of a path segment
const SEGMENT_FORBIDDEN: [char; 6] = ['[', ']', '*', '@', ',', '`'];

/// Parser for canonical names
///
/// The parser validates the grammar and builds a [`Query`]; it never consults a member
/// universe. Errors carry the offending input verbatim.
///
/// # Example
///
/// ```rust
/// use docid::names::{NameKind, NameParser};
///
/// let query = NameParser::new("M:N.C`1.M``1(`0,``0[])").parse()?;
/// assert_eq!(query.kind, NameKind::Method);
/// assert_eq!(query.segments.len(), 3);
/// assert_eq!(query.segments[1].arity, 1);
/// assert_eq!(query.segments[2].method_arity, 1);
/// assert_eq!(query.rendered_parameters(), "`0,``0[]");
/// # Ok::<(), docid::Error>(())
/// ```
///
/// ## Notes:
/// - The kind prefix is accepted in either case, so names that went through a
///   case-normalizing transport still parse.
/// - Each call to [`NameParser::parse`] starts from a clean state, also after an error.
pub struct NameParser<'a> {
    text: &'a str,
    depth: usize,
}

impl<'a> NameParser<'a> {
    /// Create a new `NameParser` for `text`
    ///
    /// ## Arguments
    /// * 'text' - The canonical name to parse
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        NameParser { text, depth: 0 }
    }

    /// Parse the canonical name
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidFormat`] for any grammar violation and
    /// [`crate::Error::RecursionLimit`] if generic arguments nest too deeply.
    pub fn parse(&mut self) -> Result<Query> {
        self.depth = 0;
        let text = self.text;

        if text.trim().is_empty() {
            return Err(format_error!("Cannot be 'null', empty or white space."));
        }

        if text.chars().count() < MIN_NAME_LENGTH {
            return Err(format_error!(
                "Must be at least {} characters long, got '{}'.",
                MIN_NAME_LENGTH,
                text
            ));
        }

        let mut chars = text.chars();
        let (Some(prefix), Some(separator)) = (chars.next(), chars.next()) else {
            return Err(self.separator_error());
        };

        if separator != ':' {
            return Err(self.separator_error());
        }

        let Some(kind) = NameKind::from_prefix(prefix) else {
            return Err(format_error!(
                "Unknown member kind '{}', expected one of {} in '{}'.",
                prefix,
                NameKind::accepted(),
                text
            ));
        };

        let body = &text[prefix.len_utf8() + 1..];
        let (path, parameters) = match find_top_level(body, '(') {
            Some(open) => (&body[..open], Some(&body[open..])),
            None => (body, None),
        };

        let segments = self.parse_path(kind, path)?;
        let parameters = match parameters {
            Some(list) => {
                if !kind.takes_parameters() {
                    return Err(format_error!(
                        "Parameter lists are only valid for methods and properties in '{}'.",
                        text
                    ));
                }
                Some(self.parse_parameter_list(list)?)
            }
            None => None,
        };

        Ok(Query {
            kind,
            segments,
            parameters,
        })
    }

    fn separator_error(&self) -> crate::Error {
        format_error!(
            "Expected one of the member kinds {} followed by ':' in '{}'.",
            NameKind::accepted(),
            self.text
        )
    }

    fn split_error(&self, error: SplitError) -> crate::Error {
        match error {
            SplitError::Unexpected(closer) => {
                format_error!("Unexpected '{}' in '{}'.", closer, self.text)
            }
            SplitError::Unclosed(opener) => {
                format_error!("Unclosed '{}' in '{}'.", opener, self.text)
            }
        }
    }

    /// Parse the dotted path between the kind prefix and the parameter list
    fn parse_path(&self, kind: NameKind, path: &str) -> Result<Vec<PathSegment>> {
        let pieces = split_top_level(path, '.').map_err(|error| self.split_error(error))?;

        let mut segments = Vec::with_capacity(pieces.len());
        for piece in pieces {
            segments.push(self.parse_segment(piece)?);
        }

        let last = segments.len() - 1;
        for (index, segment) in segments.iter().enumerate() {
            if segment.method_arity > 0 && (index != last || kind != NameKind::Method) {
                return Err(format_error!(
                    "Method generic arity '``{}' is only valid on a method name in '{}'.",
                    segment.method_arity,
                    self.text
                ));
            }

            if segment.arity > 0 && index == last && kind != NameKind::Type {
                return Err(format_error!(
                    "Type generic arity '`{}' is not valid on a member name in '{}'.",
                    segment.arity,
                    self.text
                ));
            }
        }

        Ok(segments)
    }

    /// Parse one path segment with its optional arity suffix
    fn parse_segment(&self, piece: &str) -> Result<PathSegment> {
        if piece.is_empty() {
            return Err(format_error!("Empty path segment in '{}'.", self.text));
        }

        let head = piece.trim_end_matches(|c: char| c.is_ascii_digit());
        let digits = &piece[head.len()..];

        let (name, arity, method_arity) = if digits.is_empty() {
            (piece, 0, 0)
        } else if let Some(name) = head.strip_suffix("``") {
            (name, 0, self.parse_arity(digits)?)
        } else if let Some(name) = head.strip_suffix('`') {
            (name, self.parse_arity(digits)?, 0)
        } else {
            (piece, 0, 0)
        };

        if name.is_empty() {
            return Err(format_error!(
                "Missing name before generic arity in '{}'.",
                self.text
            ));
        }

        let mut depth = 0usize;
        for current in name.chars() {
            match current {
                '{' | '(' => depth += 1,
                '}' | ')' => depth = depth.saturating_sub(1),
                c if depth == 0 && (c.is_whitespace() || SEGMENT_FORBIDDEN.contains(&c)) => {
                    return Err(format_error!(
                        "Invalid character '{}' in path segment '{}' of '{}'.",
                        c,
                        piece,
                        self.text
                    ));
                }
                _ => {}
            }
        }

        Ok(PathSegment {
            name: name.to_string(),
            arity,
            method_arity,
        })
    }

    fn parse_arity(&self, digits: &str) -> Result<u32> {
        digits.parse().map_err(|_| {
            format_error!(
                "Generic arity '{}' is out of range in '{}'.",
                digits,
                self.text
            )
        })
    }

    /// Parse `(sig,sig,...)`, which must close at the very end of the name
    fn parse_parameter_list(&mut self, list: &str) -> Result<Vec<SignatureType>> {
        let Some(inner) = list
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
        else {
            return Err(format_error!(
                "Parameter list must end with ')' in '{}'.",
                self.text
            ));
        };

        if split_top_level(list, ',')
            .map_err(|error| self.split_error(error))?
            .len()
            != 1
        {
            return Err(format_error!(
                "Unexpected characters after the parameter list in '{}'.",
                self.text
            ));
        }

        if inner.is_empty() {
            return Err(format_error!("Empty parameter list in '{}'.", self.text));
        }

        let pieces = split_top_level(inner, ',').map_err(|error| self.split_error(error))?;

        let mut parameters = Vec::with_capacity(pieces.len());
        for piece in pieces {
            let mut scanner = Scanner::new(piece);
            let signature = self.parse_signature(&mut scanner, true)?;

            if !scanner.is_at_end() {
                return Err(format_error!(
                    "Unexpected '{}' in parameter '{}' of '{}'.",
                    scanner.remaining(),
                    piece,
                    self.text
                ));
            }

            parameters.push(signature);
        }

        Ok(parameters)
    }

    /// Parse a single signature: base type, generic arguments, array/pointer markers and a
    /// trailing by-ref marker when `top_level` is set
    fn parse_signature(&mut self, scanner: &mut Scanner, top_level: bool) -> Result<SignatureType> {
        self.depth += 1;
        if self.depth >= MAX_RECURSION_DEPTH {
            return Err(RecursionLimit(MAX_RECURSION_DEPTH));
        }

        let mut signature = if scanner.eat('`') {
            let owner = if scanner.eat('`') {
                GenericOwner::Method
            } else {
                GenericOwner::Type
            };

            let Some(position) = scanner.read_number() else {
                return Err(format_error!(
                    "Expected a generic parameter position at offset {} of '{}'.",
                    scanner.pos(),
                    self.text
                ));
            };

            SignatureType::GenericParam { owner, position }
        } else {
            let name = scanner.read_while(|c| !SIGNATURE_DELIMITERS.contains(&c));
            self.check_type_name(name)?;

            let mut args = Vec::new();
            if scanner.eat('{') {
                loop {
                    args.push(self.parse_signature(scanner, false)?);
                    match scanner.advance() {
                        Some(',') => continue,
                        Some('}') => break,
                        _ => {
                            return Err(format_error!(
                                "Expected ',' or '}}' in generic arguments of '{}'.",
                                self.text
                            ))
                        }
                    }
                }
            }

            SignatureType::Named {
                name: name.to_string(),
                args,
            }
        };

        loop {
            if scanner.eat('[') {
                let commas = scanner.read_while(|c| c == ',');
                if !scanner.eat(']') {
                    return Err(format_error!(
                        "Array markers may only contain ',' in '{}'.",
                        self.text
                    ));
                }

                signature = SignatureType::Array {
                    element: Box::new(signature),
                    rank: u32::try_from(commas.len() + 1).map_err(|_| {
                        format_error!("Array rank is out of range in '{}'.", self.text)
                    })?,
                };
            } else if scanner.eat('*') {
                signature = SignatureType::Pointer(Box::new(signature));
            } else {
                break;
            }
        }

        if scanner.eat('@') {
            if !top_level {
                return Err(format_error!(
                    "By-reference marker '@' is only valid on a top-level parameter in '{}'.",
                    self.text
                ));
            }
            signature = SignatureType::ByRef(Box::new(signature));
        }

        self.depth -= 1;
        Ok(signature)
    }

    fn check_type_name(&self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(format_error!(
                "Missing type name in parameter list of '{}'.",
                self.text
            ));
        }

        if name.split('.').any(str::is_empty) || name.contains(|c: char| c.is_whitespace() || c == '`') {
            return Err(format_error!(
                "Invalid type name '{}' in parameter list of '{}'.",
                name,
                self.text
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn message(text: &str) -> String {
        match NameParser::new(text).parse() {
            Err(Error::InvalidFormat { message }) => message,
            other => panic!("expected a format error for {text:?}, got {other:?}"),
        }
    }

    fn named(name: &str) -> SignatureType {
        SignatureType::Named {
            name: name.to_string(),
            args: Vec::new(),
        }
    }

    #[test]
    fn test_empty_and_whitespace() {
        for text in ["", " ", "\t", "  \n "] {
            assert_eq!(message(text), "Cannot be 'null', empty or white space.");
        }
    }

    #[test]
    fn test_too_short() {
        assert_eq!(message("t"), "Must be at least 3 characters long, got 't'.");
        assert_eq!(message("te"), "Must be at least 3 characters long, got 'te'.");
    }

    #[test]
    fn test_separator() {
        assert_eq!(
            message("missing_member_type_character_identifier"),
            "Expected one of the member kinds T, F, E, P, M followed by ':' in 'missing_member_type_character_identifier'."
        );
        assert_eq!(
            message("T.wrong_separator"),
            "Expected one of the member kinds T, F, E, P, M followed by ':' in 'T.wrong_separator'."
        );
    }

    #[test]
    fn test_unknown_kind() {
        assert_eq!(
            message("K:x"),
            "Unknown member kind 'K', expected one of T, F, E, P, M in 'K:x'."
        );
        // namespace names exist in documentation files but are not members
        assert!(message("N:System").contains("T, F, E, P, M"));
    }

    #[test]
    fn test_parse_type() {
        let query = NameParser::new("T:System.Collections.Generic.Dictionary`2").parse().unwrap();

        assert_eq!(query.kind, NameKind::Type);
        assert_eq!(query.segments.len(), 4);
        assert_eq!(query.segments[3].name, "Dictionary");
        assert_eq!(query.segments[3].arity, 2);
        assert_eq!(query.segments[3].method_arity, 0);
        assert!(query.parameters.is_none());
    }

    #[test]
    fn test_parse_lowercase() {
        let query = NameParser::new("p:n.c.item(system.string,system.int32)").parse().unwrap();

        assert_eq!(query.kind, NameKind::Property);
        assert_eq!(query.member().unwrap().name, "item");
        assert_eq!(
            query.parameters,
            Some(vec![named("system.string"), named("system.int32")])
        );
    }

    #[test]
    fn test_parse_generic_method() {
        let query = NameParser::new(
            "M:System.Linq.Enumerable.Select``2(System.Collections.Generic.IEnumerable{``0},System.Func{``0,``1})",
        )
        .parse()
        .unwrap();

        let member = query.member().unwrap();
        assert_eq!(member.name, "Select");
        assert_eq!(member.method_arity, 2);

        let params = query.parameters.as_ref().unwrap();
        assert_eq!(params.len(), 2);
        assert_eq!(
            params[1],
            SignatureType::Named {
                name: "System.Func".to_string(),
                args: vec![
                    SignatureType::GenericParam {
                        owner: GenericOwner::Method,
                        position: 0
                    },
                    SignatureType::GenericParam {
                        owner: GenericOwner::Method,
                        position: 1
                    },
                ],
            }
        );
    }

    #[test]
    fn test_parse_markers() {
        let query = NameParser::new("M:N.C.M(System.Int32[,]*[]@,`1*)").parse().unwrap();
        let params = query.parameters.unwrap();

        let expected = SignatureType::ByRef(Box::new(SignatureType::Array {
            element: Box::new(SignatureType::Pointer(Box::new(SignatureType::Array {
                element: Box::new(named("System.Int32")),
                rank: 2,
            }))),
            rank: 1,
        }));
        assert_eq!(params[0], expected);
        assert_eq!(
            params[1],
            SignatureType::Pointer(Box::new(SignatureType::GenericParam {
                owner: GenericOwner::Type,
                position: 1
            }))
        );
    }

    #[test]
    fn test_parse_constructor_and_explicit_impl() {
        let ctor = NameParser::new("M:N.C.#ctor(System.String)").parse().unwrap();
        assert_eq!(ctor.member().unwrap().name, "#ctor");

        let explicit = NameParser::new(
            "M:N.C.System#Collections#Generic#IEnumerable{System#Int32}#GetEnumerator",
        )
        .parse()
        .unwrap();
        assert_eq!(explicit.segments.len(), 3);
        assert_eq!(
            explicit.member().unwrap().name,
            "System#Collections#Generic#IEnumerable{System#Int32}#GetEnumerator"
        );
    }

    #[test]
    fn test_display_round_trip() {
        for text in [
            "T:GlobalClass",
            "F:N.E.Value",
            "M:N.Outer`1.Inner`1.M``1(`0,`1,``0)",
            "P:N.C.Item(System.String,System.Int32)",
            "M:N.C`1.#ctor(System.Collections.Generic.List{`0}[]@)",
        ] {
            assert_eq!(NameParser::new(text).parse().unwrap().to_string(), text);
        }
    }

    #[test]
    fn test_grammar_violations() {
        let cases = [
            "T:N..C",
            "T:N.C.",
            "M:N.C.M()",
            "M:N.C.M(System.Int32",
            "M:N.C.M(System.Int32)x",
            "M:N.C.M(System.Int32))",
            "M:N.C.M(System.Int32,)",
            "M:N.C.M(List{System.Int32@})",
            "M:N.C.M(System.Int32[x])",
            "M:N.C.M(`)",
            "M:N.C.M(System..Int32)",
            "M:N.C.M(List{})",
            "M:N.C.M(A{B)",
            "T:N.C``1",
            "M:N.C``1.M",
            "F:N.C.Field`1",
            "F:N.C.Field(System.Int32)",
            "T:N.C{",
            "T:N.`1",
            "T:N.C D",
        ];

        for text in cases {
            assert!(
                matches!(NameParser::new(text).parse(), Err(Error::InvalidFormat { .. })),
                "expected a format error for {text:?}"
            );
        }
    }

    #[test]
    fn test_recursion_limit() {
        let mut text = String::from("M:N.C.M(");
        for _ in 0..MAX_RECURSION_DEPTH {
            text.push_str("A{");
        }
        text.push('B');
        for _ in 0..MAX_RECURSION_DEPTH {
            text.push('}');
        }
        text.push(')');

        assert!(matches!(
            NameParser::new(&text).parse(),
            Err(Error::RecursionLimit(MAX_RECURSION_DEPTH))
        ));
    }

    #[test]
    fn test_reparse_after_nested_error() {
        // `@` below the top level fails deep inside the generic arguments
        let depth = MAX_RECURSION_DEPTH - 3;
        let mut text = String::from("M:N.C.M(");
        for _ in 0..depth {
            text.push_str("A{");
        }
        text.push_str("B@");
        for _ in 0..depth {
            text.push('}');
        }
        text.push(')');

        let mut parser = NameParser::new(&text);
        for _ in 0..3 {
            assert!(matches!(parser.parse(), Err(Error::InvalidFormat { .. })));
        }
    }

    #[test]
    fn test_bare_member_parses() {
        let query = NameParser::new("M:Run").parse().unwrap();
        assert!(query.type_segments().is_empty());
        assert_eq!(query.member().unwrap().name, "Run");
    }
}
