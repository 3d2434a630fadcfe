use super::*;
use crate::{
    domain::{ProfileId, ScriptId},
    error::ErrorCode,
};

#[test]
fn parses_profiles_and_scripts_in_file_order() {
    let raw = r#"
        [[profiles]]
        id = "p1"
        text = "Personal"

        [[profiles]]
        id = "p2"
        text = "Work"

        [[scripts]]
        id = "s1"
        text = "hello-worker"
    "#;

    let catalog = Catalog::from_toml_str(raw).expect("catalog");
    assert_eq!(catalog.profiles.len(), 2);
    assert_eq!(catalog.profiles[0].id, ProfileId::from("p1"));
    assert_eq!(catalog.profiles[1].text, "Work");
    assert_eq!(catalog.scripts[0].id, ScriptId::from("s1"));
}

#[test]
fn missing_tables_yield_empty_lists() {
    let catalog = Catalog::from_toml_str("").expect("catalog");
    assert!(catalog.profiles.is_empty());
    assert!(catalog.scripts.is_empty());
}

#[test]
fn rejects_duplicate_script_ids() {
    let raw = r#"
        [[scripts]]
        id = "s1"
        text = "one"

        [[scripts]]
        id = "s1"
        text = "again"
    "#;

    let err = Catalog::from_toml_str(raw).expect_err("duplicate ids");
    assert_eq!(err.code(), ErrorCode::Validation);
    assert!(err.to_string().contains("duplicate script id 's1'"));
}

#[test]
fn rejects_blank_profile_id() {
    let raw = r#"
        [[profiles]]
        id = "  "
        text = "Nameless"
    "#;

    let err = Catalog::from_toml_str(raw).expect_err("blank id");
    assert!(matches!(
        err,
        CatalogError::EmptyId {
            kind: "profile",
            index: 0,
            ..
        }
    ));
}

#[test]
fn profile_and_script_may_share_an_id() {
    let catalog = Catalog {
        profiles: vec![Profile::new("shared", "Profile")],
        scripts: vec![Script::new("shared", "Script")],
    };
    catalog.validate().expect("ids are scoped per list");
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = Catalog::from_toml_str("[[profiles]\nid=").expect_err("parse error");
    assert_eq!(err.code(), ErrorCode::Parse);
}

#[test]
fn demo_catalog_is_valid() {
    Catalog::demo().validate().expect("demo catalog");
}
