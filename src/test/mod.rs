use crate::{
    model::{Parameter, TypePath, TypeRef},
    universe::{MemberUniverse, ModuleDef, TypeBuilder, TypeDef},
};

// Helper function to create a by-value parameter of a `System` type
pub fn system_param(name: &str) -> Parameter {
    Parameter::new(TypeRef::named("System", name))
}

// Helper function to create `N.C`, a class with one member of every kind
pub fn create_class() -> TypeDef {
    let list_of_string = TypeRef::generic(
        TypePath::new("System.Collections.Generic", &[("List", 1)]),
        vec![TypeRef::named("System", "String")],
    );

    TypeBuilder::new("N", "C")
        .constructor(vec![])
        .constructor(vec![Parameter::by_ref(TypeRef::named("System", "Int32"))])
        .static_constructor()
        .field("Value")
        .event("Changed")
        .property("Count")
        .indexer(vec![system_param("String"), system_param("Int32")])
        .method(
            "Run",
            0,
            vec![
                Parameter::new(TypeRef::named("System", "Int32").array(1)),
                Parameter::new(list_of_string),
            ],
        )
        .build()
}

// Helper function to create `N.Outer`1.Inner`1` with a generic method using all three
// generic parameters in scope
pub fn create_nested_generic() -> TypeDef {
    TypeBuilder::new("N", "Outer")
        .generic(1)
        .nested_type(
            TypeBuilder::nested("Inner")
                .generic(1)
                .method(
                    "M",
                    1,
                    vec![
                        Parameter::new(TypeRef::type_param(0)),
                        Parameter::new(TypeRef::type_param(1)),
                        Parameter::new(TypeRef::method_param(0)),
                    ],
                )
                .build(),
        )
        .build()
}

// Helper function to create the universe most resolver tests run against
pub fn sample_universe() -> MemberUniverse {
    MemberUniverse::from_modules(vec![ModuleDef::new(
        "Sample.dll",
        vec![
            TypeBuilder::new("", "GlobalClass")
                .method("Run", 0, vec![])
                .build(),
            create_class(),
            create_nested_generic(),
            TypeBuilder::new("N", "Color")
                .field("Red")
                .field("Green")
                .build(),
        ],
    )])
}
