use entity_gql_core::{Relationship, RelationshipKind, Selector, parse_selector};
use indoc::indoc;

use super::{CompileOptions, compile, compile_with_diagnostics};
use crate::diagnostics::DiagnosticKind;

fn compact(selector: &Selector) -> String {
    compile(selector, &CompileOptions::new())
}

fn pretty(selector: &Selector) -> String {
    compile(selector, &CompileOptions::new().indent("  "))
}

fn blog_post() -> Selector {
    Selector::new()
        .field("title")
        .relationship(Relationship::children_entities(
            "postId",
            "comments",
            Selector::new().field("body").relationship(Relationship::associative(
                "authorId",
                "author",
                Selector::new().field("name"),
            )),
        ))
}

#[test]
fn empty_selector() {
    assert_eq!(compact(&Selector::new()), "");
    assert_eq!(pretty(&Selector::new()), "");
}

#[test]
fn fields_only() {
    let selector = Selector::new().fields(["id", "name"]);
    assert_eq!(compact(&selector), "id\nname\n");
}

#[test]
fn containment_forces_key_into_nested_block() {
    let selector = Selector::new().relationship(Relationship::child_entity(
        "id",
        "owner",
        Selector::new().field("name"),
    ));

    let out = compact(&selector);
    assert_eq!(out, "owner {\nid\nname\n}");
    assert!(!out.starts_with("id"));
}

#[test]
fn children_entities_matches_child_entity_shape() {
    let one = Selector::new().relationship(Relationship::child_entity("id", "items", Selector::new()));
    let many =
        Selector::new().relationship(Relationship::children_entities("id", "items", Selector::new()));
    assert_eq!(compact(&one), compact(&many));
}

#[test]
fn associative_emits_both_keys_as_siblings() {
    let selector = Selector::new().relationship(Relationship::associative(
        "id",
        "owner",
        Selector::new().field("name"),
    ));

    let out = compact(&selector);
    assert_eq!(out, "id\nowner {\nname\n}");
}

#[test]
fn associative_nested_block_has_no_forced_key() {
    let selector =
        Selector::new().relationship(Relationship::associative("id", "owner", Selector::new()));
    assert_eq!(compact(&selector), "id\nowner {\n}");
}

#[test]
fn relationship_fields_precede_requested_fields() {
    let selector = Selector::new()
        .field("name")
        .relationship(Relationship::associative("id", "profile", Selector::new()));

    let out = compile(&selector, &CompileOptions::new().depth(2));
    assert_eq!(out, "id\nprofile {\n}name\n");
}

#[test]
fn compact_ignores_depth() {
    let selector = Selector::new().field("a");
    assert_eq!(compile(&selector, &CompileOptions::new().depth(5)), "a\n");
}

#[test]
fn pretty_nested() {
    insta::assert_snapshot!(pretty(&blog_post()), @r"
    comments {
      authorId
      author {
        name
      }
      postId
      body
    }
    title
    ");
}

#[test]
fn pretty_starts_at_depth() {
    let selector = Selector::new()
        .field("a")
        .relationship(Relationship::child_entity("id", "b", Selector::new()));
    let out = compile(&selector, &CompileOptions::new().indent("\t").depth(1));
    assert_eq!(out, "\tb {\n\t\tid\n\t}\n\ta\n");
}

#[test]
fn compact_nested() {
    assert_eq!(
        compact(&blog_post()),
        "comments {\nauthorId\nauthor {\nname\n}postId\nbody\n}title\n"
    );
}

#[test]
fn include_list_at_root() {
    let selector = Selector::new().field("name");
    let out = compile(&selector, &CompileOptions::new().include(["id", "version"]));
    assert_eq!(out, "id\nversion\nname\n");
}

#[test]
fn duplicate_requested_fields_emitted_once() {
    let selector = Selector::new().fields(["id", "name", "id"]);
    let out = compile(&selector, &CompileOptions::new().include(["id"]));
    assert_eq!(out, "id\nname\n");
}

#[test]
fn nested_key_not_repeated_by_requested_fields() {
    let selector = Selector::new().relationship(Relationship::child_entity(
        "id",
        "owner",
        Selector::new().fields(["id", "name"]),
    ));
    assert_eq!(compact(&selector), "owner {\nid\nname\n}");
}

#[test]
fn relationship_field_suppresses_requested_field() {
    let selector = Selector::new()
        .fields(["owner", "userId"])
        .relationship(Relationship::child_entity("id", "owner", Selector::new()))
        .relationship(Relationship::associative("userId", "user", Selector::new()));

    assert_eq!(compact(&selector), "owner {\nid\n}userId\nuser {\n}");
}

#[test]
fn dedup_does_not_cross_levels() {
    let selector = Selector::new()
        .field("id")
        .relationship(Relationship::child_entity("id", "parent", Selector::new()));

    insta::assert_snapshot!(pretty(&selector), @r"
    parent {
      id
    }
    id
    ");
}

#[test]
fn relationship_without_keys_is_skipped() {
    let mut missing_id = Relationship::child_entity("id", "owner", Selector::new().field("x"));
    missing_id.key_id = None;
    let missing_value = Relationship::new(RelationshipKind::Associative, Selector::new());

    let selector = Selector::new()
        .field("name")
        .relationship(missing_id)
        .relationship(missing_value);

    let (out, diagnostics) = compile_with_diagnostics(&selector, &CompileOptions::new());
    assert_eq!(out, "name\n");

    let found: Vec<_> = diagnostics
        .iter()
        .map(|d| (d.kind(), d.path().to_string()))
        .collect();
    assert_eq!(
        found,
        vec![
            (DiagnosticKind::MissingKeyId, "$.relationships[0]".to_string()),
            (DiagnosticKind::MissingKeyId, "$.relationships[1]".to_string()),
            (DiagnosticKind::MissingKeyValue, "$.relationships[1]".to_string()),
        ]
    );
}

#[test]
fn duplicate_relationship_is_skipped() {
    let selector = Selector::new()
        .relationship(Relationship::child_entity("id", "owner", Selector::new()))
        .relationship(Relationship::associative("ownerId", "owner", Selector::new()));

    let (out, diagnostics) = compile_with_diagnostics(&selector, &CompileOptions::new());
    assert_eq!(out, "owner {\nid\n}");
    assert_eq!(diagnostics.len(), 1);

    let diag = diagnostics.iter().next().unwrap();
    assert_eq!(diag.kind(), DiagnosticKind::DuplicateField);
    assert_eq!(
        diag.message(),
        "relationship skipped: `owner` is already selected at this level"
    );
}

#[test]
fn nested_diagnostic_paths() {
    let selector = parse_selector(indoc! {r#"
        {
            "relationships": [
                {
                    "ngrxEntityRelationship": "childrenEntities",
                    "keyId": "id",
                    "keyValue": "items",
                    "relationships": [
                        { "keyId": "x" },
                        { "keyValue": null, "keyId": "y" }
                    ]
                }
            ]
        }
    "#})
    .unwrap();

    let (out, diagnostics) = compile_with_diagnostics(&selector, &CompileOptions::new());
    assert_eq!(out, "items {\nid\n}");

    let paths: Vec<_> = diagnostics.iter().map(|d| d.path()).collect();
    assert_eq!(
        paths,
        vec![
            "$.relationships[0].relationships[0]",
            "$.relationships[0].relationships[1]",
        ]
    );
}

#[test]
fn diagnostics_do_not_change_output() {
    let mut broken = Relationship::associative("a", "b", Selector::new());
    broken.key_value = None;
    let selector = blog_post().relationship(broken);

    let options = CompileOptions::new().indent("  ");
    let (text, diagnostics) = compile_with_diagnostics(&selector, &options);
    assert_eq!(text, compile(&selector, &options));
    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn deterministic() {
    let selector = blog_post();
    let options = CompileOptions::new().indent("  ").include(["id"]);
    assert_eq!(compile(&selector, &options), compile(&selector, &options));
}
