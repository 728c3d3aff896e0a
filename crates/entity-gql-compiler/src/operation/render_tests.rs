use entity_gql_core::{Relationship, Selector};
use serde_json::json;

use super::{Parameters, QueryRequest, render, strip_outer_braces};

fn profile_selector() -> Selector {
    Selector::new()
        .field("name")
        .relationship(Relationship::associative("id", "profile", Selector::new()))
}

#[test]
fn named_with_params() {
    let selector = profile_selector();
    let request = QueryRequest::NamedWithParams {
        name: "getUser",
        params: Parameters::from_value(json!({"id": 5}).into()),
        selector: &selector,
    };
    assert_eq!(
        render(&request).unwrap(),
        "{\ngetUser(id: 5) {\nid\nprofile {\n}name\n}\n}"
    );
}

#[test]
fn named_without_params() {
    let selector = Selector::new().fields(["id", "name"]);
    let request = QueryRequest::NamedNoParams {
        name: "users",
        selector: &selector,
    };
    insta::assert_snapshot!(render(&request).unwrap(), @r"
    {
    users {
    id
    name
    }
    }
    ");
}

#[test]
fn named_with_empty_params_has_no_parentheses() {
    let selector = Selector::new().field("id");
    let request = QueryRequest::NamedWithParams {
        name: "users",
        params: Parameters::default(),
        selector: &selector,
    };
    assert_eq!(render(&request).unwrap(), "{\nusers {\nid\n}\n}");
}

#[test]
fn named_selection_stays_compact() {
    let selector = Selector::new().relationship(Relationship::children_entities(
        "id",
        "posts",
        Selector::new().relationship(Relationship::child_entity(
            "postId",
            "cover",
            Selector::new().field("url"),
        )),
    ));
    let request = QueryRequest::NamedNoParams {
        name: "feed",
        selector: &selector,
    };
    assert_eq!(
        render(&request).unwrap(),
        "{\nfeed {\nposts {\ncover {\npostId\nurl\n}id\n}}\n}"
    );
}

#[test]
fn fragments_are_unwrapped_and_joined() {
    let request = QueryRequest::FragmentList(vec!["{ a }", "{ b }"]);
    assert_eq!(render(&request).unwrap(), "{a\nb}");
}

#[test]
fn fragments_without_braces_are_trimmed() {
    let request = QueryRequest::FragmentList(vec!["  a  ", "\n{ b { c } }\n"]);
    assert_eq!(render(&request).unwrap(), "{a\nb { c }}");
}

#[test]
fn no_fragments() {
    assert_eq!(render(&QueryRequest::FragmentList(vec![])).unwrap(), "{}");
}

#[test]
fn strip_outer_braces_edge_cases() {
    assert_eq!(strip_outer_braces("{}"), "");
    assert_eq!(strip_outer_braces(" { x } "), "x");
    assert_eq!(strip_outer_braces("{"), "{");
    assert_eq!(strip_outer_braces("}"), "}");
    assert_eq!(strip_outer_braces("a { b }"), "a { b }");
}

#[test]
fn fragment_round_trip_of_named_output() {
    let selector = profile_selector();
    let named = render(&QueryRequest::NamedWithParams {
        name: "getUser",
        params: Parameters::from_value(json!({"id": 5}).into()),
        selector: &selector,
    })
    .unwrap();

    let wrapped = render(&QueryRequest::FragmentList(vec![named.as_str()])).unwrap();
    let inner = &wrapped[1..wrapped.len() - 1];
    assert_eq!(inner, named[1..named.len() - 1].trim());
}

#[test]
fn named_output_braces_balance() {
    let selector = profile_selector().relationship(Relationship::children_entities(
        "id",
        "friends",
        Selector::new().relationship(Relationship::associative("a", "b", Selector::new())),
    ));
    let out = render(&QueryRequest::NamedNoParams {
        name: "q",
        selector: &selector,
    })
    .unwrap();

    let mut depth = 0i32;
    let mut top_level_pairs = 0;
    for c in out.chars() {
        match c {
            '{' => {
                if depth == 0 {
                    top_level_pairs += 1;
                }
                depth += 1;
            }
            '}' => depth -= 1,
            _ => {}
        }
        assert!(depth >= 0);
    }
    assert_eq!(depth, 0);
    assert_eq!(top_level_pairs, 1);
}
