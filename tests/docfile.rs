//! Integration tests for loading and linking XML documentation files.

use std::path::PathBuf;

use docid::{prelude::*, Result};

fn sample_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/samples/Sample.xml")
}

fn sample_universe() -> MemberUniverse {
    let func = TypeRef::generic(
        TypePath::new("System", &[("Func", 3)]),
        vec![
            TypeRef::type_param(0),
            TypeRef::type_param(1),
            TypeRef::method_param(0),
        ],
    );

    MemberUniverse::from_modules(vec![ModuleDef::new(
        "Sample.dll",
        vec![
            TypeBuilder::new("", "GlobalClass").build(),
            TypeBuilder::new("Sample.Collections", "Map")
                .generic(2)
                .constructor(vec![])
                .event("Changed")
                .indexer(vec![Parameter::new(TypeRef::type_param(0))])
                .method(
                    "TryGet",
                    0,
                    vec![
                        Parameter::new(TypeRef::type_param(0)),
                        Parameter::by_ref(TypeRef::type_param(1)),
                    ],
                )
                .nested_type(
                    TypeBuilder::nested("Entry")
                        .method("Select", 1, vec![Parameter::new(func)])
                        .build(),
                )
                .build(),
        ],
    )])
}

#[test]
fn load_from_file() -> Result<()> {
    let doc = DocumentationFile::from_file(sample_path())?;

    assert_eq!(doc.assembly(), Some("Sample"));
    assert_eq!(doc.entries().len(), 9);
    assert!(doc
        .get("t:sample.collections.map`2")
        .is_some_and(|entry| entry.body.contains("<typeparamref name=\"TKey\"/>")));
    Ok(())
}

#[test]
fn link_entries_to_members() -> Result<()> {
    let doc = DocumentationFile::from_file(sample_path())?;
    let universe = sample_universe();

    let linked = doc.link(&universe);
    let resolved: Vec<&str> = linked
        .iter()
        .filter(|(_, member)| member.is_some())
        .map(|(entry, _)| entry.name.as_str())
        .collect();

    assert_eq!(
        resolved,
        vec![
            "T:GlobalClass",
            "T:Sample.Collections.Map`2",
            "P:Sample.Collections.Map`2.Item(`0)",
            "M:Sample.Collections.Map`2.#ctor",
            "M:Sample.Collections.Map`2.TryGet(`0,`1@)",
            "M:Sample.Collections.Map`2.Entry.Select``1(System.Func{`0,`1,``0})",
            "E:Sample.Collections.Map`2.Changed",
        ]
    );
    Ok(())
}

#[test]
fn documentation_for_descriptors() -> Result<()> {
    let doc = DocumentationFile::from_file(sample_path())?;
    let universe = sample_universe();

    let undocumented: Vec<String> = universe
        .descriptors()
        .iter()
        .filter(|member| doc.documentation_for(member).is_none())
        .map(encode)
        .collect();

    assert_eq!(undocumented, vec!["T:Sample.Collections.Map`2.Entry".to_string()]);
    Ok(())
}
