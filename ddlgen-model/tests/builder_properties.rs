//! End-to-end checks of the builder's ordering, accumulation and merge rules.

use ddlgen_model::{
    Kind, StructBuilder, TagKey, VariantOrigin, field_group, single_quoted, with_tag,
};

#[test]
fn test_field_order_follows_call_order() {
    let s = StructBuilder::new("CreateRoleOptions")
        .create([])
        .or_replace([])
        .static_("role", [])
        .keyword("IfNotExists", [])
        .account_object_identifier([])
        .identifier("comment", [single_quoted()])
        .build();

    let names: Vec<_> = s.field_names().collect();
    assert_eq!(
        names,
        ["create", "OrReplace", "role", "IfNotExists", "name", "comment"]
    );
}

#[test]
fn test_repeated_tag_option_joins_values_in_call_order() {
    let s = StructBuilder::new("S")
        .identifier(
            "comment",
            [
                with_tag("json", "one"),
                with_tag("json", "two"),
                with_tag("json", "three"),
            ],
        )
        .build();

    assert_eq!(
        s.fields[0].tags,
        "`dll:\"identifier\", json:\"one,two,three\"`"
    );
}

#[test]
fn test_or_replace_only_tags_dll() {
    let s = StructBuilder::new("S").or_replace([]).build();
    let field = &s.fields[0];

    assert_eq!(field.name, "OrReplace");
    assert_eq!(field.kind, Kind::OptionalBool);
    assert_eq!(field.tags, "`dll:\"keyword,OR REPLACE\"`");
}

#[test]
fn test_field_groups_merge_in_order() {
    let s = StructBuilder::new("S")
        .one_of_grouped([&field_group().static_("a", []).static_("b", [])])
        .build();

    let names: Vec<_> = s.field_names().collect();
    assert_eq!(names, ["a", "b"]);
}

#[test]
fn test_grouped_merge_keeps_fields_unchanged() {
    let group_a = field_group().static_("hey", []).static_("wassup", []);
    let group_b = field_group()
        .static_("bye", [])
        .keyword("im_other_field", [with_tag(TagKey::Sql, "OTHER")]);

    let merged = StructBuilder::new("SetRole")
        .one_of_grouped([&group_a, &group_b])
        .build();

    let expected: Vec<_> = group_a
        .build()
        .fields
        .into_iter()
        .chain(group_b.build().fields)
        .collect();
    assert_eq!(merged.fields, expected);
    assert_eq!(merged.variants[0].origin, VariantOrigin::Grouped);
    assert_eq!(merged.variants[0].alternatives.len(), 2);
}

#[test]
fn test_alter_role_definition() {
    let set_role = StructBuilder::new("SetRole")
        .one_of_grouped([
            &field_group().static_("hey", []).static_("wassup", []),
            &field_group().static_("bye", []).static_("im_other_field", []),
        ])
        .static_("normal", []);
    let unset_role = StructBuilder::new("UnsetRole");

    let alter = StructBuilder::new("AlterRoleOptions")
        .alter([])
        .static_("role", [])
        .if_exists([single_quoted()])
        .account_object_identifier([])
        .one_of([
            set_role.as_field_builder("Set", [with_tag("dll", "keyword")]),
            unset_role.as_field_builder("Unset", [with_tag("dll", "keyword")]),
        ])
        .build();

    let fields: Vec<_> = alter
        .fields
        .iter()
        .map(|f| (f.name.as_str(), f.kind.as_str(), f.tags.as_str()))
        .collect();
    assert_eq!(
        fields,
        [
            ("alter", "bool", "`dll:\"static\"`"),
            ("role", "bool", "`dll:\"static\"`"),
            ("IfExists", "*bool", "`dll:\"keyword,single_quotes,IF EXISTS\"`"),
            ("name", "AccountObjectIdentifier", "`dll:\"identifier\"`"),
        ]
    );

    let variant = &alter.variants[0];
    assert_eq!(variant.origin, VariantOrigin::Detached);
    let kinds: Vec<_> = variant
        .alternatives
        .iter()
        .map(|a| a.fields[0].kind.as_str())
        .collect();
    assert_eq!(kinds, ["SetRole", "UnsetRole"]);

    let set_role = set_role.build();
    assert_eq!(
        set_role.field_names().collect::<Vec<_>>(),
        ["hey", "wassup", "bye", "im_other_field", "normal"]
    );
}

#[test]
fn test_double_build_is_identical() {
    let builder = StructBuilder::new("S")
        .create([])
        .transient([])
        .identifier("owner", [with_tag("json", "owner"), single_quoted()]);

    let first = builder.build();
    let second = builder.build();

    assert_eq!(first.name, second.name);
    assert_eq!(first.fields, second.fields);
}
