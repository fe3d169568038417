//! XML documentation files keyed by canonical name.
//!
//! Compilers emit documentation comments into an XML file next to the program image:
//!
//! ```xml
//! <doc>
//!   <assembly><name>Sample</name></assembly>
//!   <members>
//!     <member name="T:N.C"><summary>A class.</summary></member>
//!     <member name="M:N.C.Run(System.Int32)">...</member>
//!   </members>
//! </doc>
//! ```
//!
//! [`DocumentationFile`] indexes the `<member>` entries of such a file. Bodies are kept as
//! raw inner XML; interpreting the documentation markup is left to the caller. Entries can be
//! looked up by canonical name or linked to the members of a [`MemberUniverse`].
//!
//! # Example
//!
//! ```rust
//! use docid::docfile::DocumentationFile;
//!
//! let doc = DocumentationFile::parse(
//!     r#"<doc><assembly><name>Sample</name></assembly><members>
//!          <member name="T:N.C"><summary>A class.</summary></member>
//!        </members></doc>"#,
//! )?;
//!
//! assert_eq!(doc.assembly(), Some("Sample"));
//! assert_eq!(doc.get("t:n.c").map(|e| e.body.as_str()), Some("<summary>A class.</summary>"));
//! # Ok::<(), docid::Error>(())
//! ```

use std::{collections::HashMap, fs::File, path::Path};

use log::{debug, warn};
use memmap2::Mmap;
use quick_xml::{
    events::{BytesStart, Event},
    Reader,
};
use unicase::UniCase;

use crate::{
    model::MemberDescriptor,
    names::{self, encode},
    universe::MemberUniverse,
    Error::{Error, FileError},
    Result,
};

/// One `<member>` entry of a documentation file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocEntry {
    /// The canonical name from the `name` attribute
    pub name: String,
    /// Raw inner XML of the element
    pub body: String,
}

/// The `<member>` entries of an XML documentation file
#[derive(Debug, Clone, Default)]
pub struct DocumentationFile {
    assembly: Option<String>,
    entries: Vec<DocEntry>,
    /// Case-folded canonical name to position of its first entry
    by_name: HashMap<UniCase<String>, usize>,
}

impl DocumentationFile {
    /// Load a documentation file from disk
    ///
    /// ## Arguments
    /// * 'path' - Path of the XML file
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if the file cannot be opened, [`crate::Error::Error`]
    /// if it cannot be mapped, and the errors of [`DocumentationFile::parse`] otherwise.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = match File::open(path.as_ref()) {
            Ok(file) => file,
            Err(error) => return Err(FileError(error)),
        };

        if file.metadata()?.len() == 0 {
            return Err(format_error!(
                "Documentation file '{}' is empty",
                path.as_ref().display()
            ));
        }

        let mmap = match unsafe { Mmap::map(&file) } {
            Ok(mmap) => mmap,
            Err(error) => return Err(Error(error.to_string())),
        };

        let text = std::str::from_utf8(&mmap).map_err(|error| {
            format_error!(
                "Documentation file '{}' is not valid UTF-8 - {}",
                path.as_ref().display(),
                error
            )
        })?;

        Self::parse(text.trim_start_matches('\u{feff}'))
    }

    /// Parse a documentation file from text
    ///
    /// # Errors
    /// Returns [`crate::Error::Xml`] if the text is not well-formed XML.
    pub fn parse(text: &str) -> Result<Self> {
        let mut reader = Reader::from_str(text);
        let mut doc = DocumentationFile::default();
        let mut in_assembly = false;

        loop {
            match reader.read_event()? {
                Event::Start(element) => match element.name().as_ref() {
                    b"assembly" => in_assembly = true,
                    b"name" if in_assembly => {
                        let end = element.to_end().into_owned();
                        let name = reader.read_text(end.name())?;
                        doc.assembly = Some(name.trim().to_string());
                    }
                    b"member" => {
                        let name = member_name(&element)?;
                        let end = element.to_end().into_owned();
                        let body = reader.read_text(end.name())?;
                        if let Some(name) = name {
                            doc.push(name, body.into_owned());
                        }
                    }
                    _ => {}
                },
                Event::Empty(element) if element.name().as_ref() == b"member" => {
                    if let Some(name) = member_name(&element)? {
                        doc.push(name, String::new());
                    }
                }
                Event::End(element) if element.name().as_ref() == b"assembly" => {
                    in_assembly = false;
                }
                Event::Eof => break,
                _ => {}
            }
        }

        debug!(
            "read {} documentation entries for assembly {:?}",
            doc.entries.len(),
            doc.assembly
        );
        Ok(doc)
    }

    fn push(&mut self, name: String, body: String) {
        self.by_name
            .entry(UniCase::new(name.clone()))
            .or_insert(self.entries.len());
        self.entries.push(DocEntry { name, body });
    }

    /// The assembly name from `<assembly><name>`, if present
    #[must_use]
    pub fn assembly(&self) -> Option<&str> {
        self.assembly.as_deref()
    }

    /// All entries in file order
    #[must_use]
    pub fn entries(&self) -> &[DocEntry] {
        &self.entries
    }

    /// Find the entry for `name`, ignoring case. With duplicate names the first entry wins.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&DocEntry> {
        self.by_name
            .get(&UniCase::new(name.to_string()))
            .and_then(|&index| self.entries.get(index))
    }

    /// The entry documenting `member`
    #[must_use]
    pub fn documentation_for(&self, member: &MemberDescriptor) -> Option<&DocEntry> {
        self.get(&encode(member))
    }

    /// Pair every entry with the member it documents in `universe`
    ///
    /// Entries whose name does not resolve, or does not even parse, are paired with `None`;
    /// the latter are logged.
    #[must_use]
    pub fn link(&self, universe: &MemberUniverse) -> Vec<(&DocEntry, Option<MemberDescriptor>)> {
        self.entries
            .iter()
            .map(|entry| match names::parse(&entry.name) {
                Ok(query) => (entry, universe.resolve(&query)),
                Err(error) => {
                    warn!("skipping documentation entry '{}': {error}", entry.name);
                    (entry, None)
                }
            })
            .collect()
    }
}

fn member_name(element: &BytesStart<'_>) -> Result<Option<String>> {
    let Some(attribute) = element
        .try_get_attribute("name")
        .map_err(quick_xml::Error::from)?
    else {
        warn!("documentation <member> element without a name attribute");
        return Ok(None);
    };

    Ok(Some(attribute.unescape_value()?.into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{model::TypePath, test::sample_universe};

    const SAMPLE: &str = r#"<?xml version="1.0"?>
<doc>
    <assembly>
        <name>Sample</name>
    </assembly>
    <members>
        <member name="T:N.C">
            <summary>A class.</summary>
        </member>
        <member name="P:N.C.Item(System.String,System.Int32)"><summary>Indexer &amp; more.</summary></member>
        <member name="M:N.Outer`1.Inner`1.M``1(`0,`1,``0)"/>
        <member name="F:N.C.Gone"><summary>Removed.</summary></member>
        <member name="X:broken"/>
    </members>
</doc>"#;

    #[test]
    fn test_parse_entries() {
        let doc = DocumentationFile::parse(SAMPLE).unwrap();

        assert_eq!(doc.assembly(), Some("Sample"));
        assert_eq!(doc.entries().len(), 5);
        assert_eq!(doc.entries()[0].body.trim(), "<summary>A class.</summary>");
        assert_eq!(
            doc.entries()[1].body,
            "<summary>Indexer &amp; more.</summary>"
        );
        assert!(doc.entries()[2].body.is_empty());
    }

    #[test]
    fn test_lookup() {
        let doc = DocumentationFile::parse(SAMPLE).unwrap();

        assert!(doc.get("p:n.c.item(system.string,system.int32)").is_some());
        assert!(doc.get("T:N.Missing").is_none());

        let class = MemberDescriptor::for_type(TypePath::new("N", &[("C", 0)]));
        assert_eq!(
            doc.documentation_for(&class).map(|e| e.name.as_str()),
            Some("T:N.C")
        );
    }

    #[test]
    fn test_lookup_non_ascii() {
        let doc =
            DocumentationFile::parse(r#"<doc><members><member name="T:N.ΟΔΟΣ"/></members></doc>"#)
                .unwrap();

        assert!(doc.get(&"T:N.ΟΔΟΣ".to_lowercase()).is_some());
        assert!(doc.get("t:n.οδοσ").is_some());
    }

    #[test]
    fn test_link() {
        let doc = DocumentationFile::parse(SAMPLE).unwrap();
        let universe = sample_universe();

        let linked: Vec<Option<String>> = doc
            .link(&universe)
            .into_iter()
            .map(|(_, member)| member.map(|m| m.to_string()))
            .collect();

        assert_eq!(
            linked,
            vec![
                Some("T:N.C".to_string()),
                Some("P:N.C.Item(System.String,System.Int32)".to_string()),
                Some("M:N.Outer`1.Inner`1.M``1(`0,`1,``0)".to_string()),
                None,
                None,
            ]
        );
    }

    #[test]
    fn test_malformed_xml() {
        assert!(matches!(
            DocumentationFile::parse("<doc><members><member name=\"T:A\"></members></doc>"),
            Err(crate::Error::Xml(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            DocumentationFile::from_file("does/not/exist.xml"),
            Err(crate::Error::FileError(_))
        ));
    }
}
