//! Role command definitions.

use ddlgen_model::{
    Struct, StructBuilder, TagKey, field_group, single_quoted, with_sql, with_tag, with_type,
    with_type_bool_ptr,
};

/// Every definition, in output order.
pub fn all() -> Vec<Struct> {
    let set_role = set_role();
    let unset_role = unset_role();

    vec![
        create_role().build(),
        alter_role(&set_role, &unset_role).build(),
        set_role.build(),
        unset_role.build(),
        drop_role().build(),
    ]
}

/// `CREATE [ OR REPLACE ] ROLE [ IF NOT EXISTS ] <name> [ COMMENT = '<string>' ]`
fn create_role() -> StructBuilder {
    StructBuilder::new("CreateRoleOptions")
        .create([])
        .or_replace([])
        .static_("role", [])
        .keyword(
            "IfNotExists",
            [with_type_bool_ptr(), with_tag(TagKey::Dll, "IF NOT EXISTS")],
        )
        .account_object_identifier([])
        .keyword("Comment", comment())
}

fn alter_role(set_role: &StructBuilder, unset_role: &StructBuilder) -> StructBuilder {
    StructBuilder::new("AlterRoleOptions")
        .alter([])
        .static_("role", [])
        .if_exists([])
        .account_object_identifier([])
        .identifier(
            "RenameTo",
            [with_type("*AccountObjectIdentifier"), with_sql("RENAME TO")],
        )
        .one_of([
            set_role.as_field_builder("Set", [with_tag(TagKey::Dll, "keyword")]),
            unset_role.as_field_builder("Unset", [with_tag(TagKey::Dll, "keyword")]),
        ])
}

fn set_role() -> StructBuilder {
    StructBuilder::new("SetRole")
        .static_("set", [])
        .one_of_grouped([
            &field_group().keyword("Comment", comment()),
            &field_group().keyword("Tag", [with_type("[]TagAssociation"), with_sql("TAG")]),
        ])
}

fn unset_role() -> StructBuilder {
    StructBuilder::new("UnsetRole")
        .static_("unset", [])
        .one_of_grouped([
            &field_group().keyword("Comment", [with_type_bool_ptr(), with_sql("COMMENT")]),
            &field_group().keyword("Tag", [with_type("[]ObjectIdentifier"), with_sql("TAG")]),
        ])
}

fn drop_role() -> StructBuilder {
    StructBuilder::new("DropRoleOptions")
        .static_("drop", [])
        .static_("role", [])
        .if_exists([])
        .account_object_identifier([])
}

fn comment() -> [ddlgen_model::FieldOption; 3] {
    [with_type("*string"), single_quoted(), with_sql("COMMENT =")]
}
