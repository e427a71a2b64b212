//! End-to-end checks of the patch surface against the in-memory arena:
//! every operation resolves its target by id, renders through the same
//! recursive renderer, and fails loudly on unknown ids.

use moss_dom::arena::{DomArena, NodeId};
use moss_dom::{apply_all, append_child, insert_before, remove, update, DomBackend, DomError, Patch, VNode};

const SAMPLE_JSON: &str = r#"{ "Element": { "tag": "div", "attr": null,
    "children": [
      { "Element": { "tag": "h1", "attr": null,
          "children": [ { "Text": "Hello Again!" } ] } },
      { "Element": { "tag": "p", "attr": [["class","p-text"]],
          "children": [ { "Text": "This is a simple webpage." } ] } }
    ] } }"#;

/// A body holding `#header`, `#app` and `#footer`, in that order.
fn scaffold() -> (DomArena, NodeId) {
    let mut arena = DomArena::new();
    let body = arena.create_element("body").unwrap();

    for id in ["header", "app", "footer"] {
        let section = arena.create_element("div").unwrap();
        arena.set_attribute(&section, "id", id).unwrap();
        arena.append_child(&body, &section).unwrap();
    }

    (arena, body)
}

fn ids_of(arena: &DomArena, parent: NodeId) -> Vec<Option<String>> {
    arena
        .children(parent)
        .iter()
        .map(|child| arena.attribute(*child, "id").map(str::to_owned))
        .collect()
}

#[test]
fn append_child_becomes_last_child() {
    let (mut arena, body) = scaffold();
    let app = arena.element_by_id("app").unwrap();

    append_child(&mut arena, "app", &VNode::with_text("span", "hi")).unwrap();
    append_child(&mut arena, "app", &VNode::with_text("span", "there")).unwrap();

    assert_eq!(
        "<div id=\"app\"><span>hi</span><span>there</span></div>",
        arena.outer_html(app)
    );
    // Siblings untouched.
    assert_eq!(3, arena.children(body).len());
}

#[test]
fn insert_before_lands_immediately_before_target() {
    let (mut arena, body) = scaffold();

    let aside = VNode::with_text_attr(
        "aside",
        "note",
        vec![(String::from("id"), String::from("aside"))],
    );
    insert_before(&mut arena, "app", &aside).unwrap();

    assert_eq!(
        vec![
            Some(String::from("header")),
            Some(String::from("aside")),
            Some(String::from("app")),
            Some(String::from("footer")),
        ],
        ids_of(&arena, body)
    );
}

#[test]
fn update_replaces_target_in_place() {
    let (mut arena, body) = scaffold();

    let tree = VNode::from_json(SAMPLE_JSON).unwrap();
    update(&mut arena, "app", &tree).unwrap();

    assert_eq!(None, arena.element_by_id("app"));
    assert_eq!(3, arena.children(body).len());

    let replacement = arena.children(body)[1];
    assert_eq!(
        "<div><h1>Hello Again!</h1><p class=\"p-text\">This is a simple webpage.</p></div>",
        arena.outer_html(replacement)
    );
}

#[test]
fn remove_detaches_only_the_target() {
    let (mut arena, body) = scaffold();

    remove(&mut arena, "app").unwrap();

    assert_eq!(None, arena.element_by_id("app"));
    assert_eq!(
        vec![Some(String::from("header")), Some(String::from("footer"))],
        ids_of(&arena, body)
    );
}

#[test]
fn unknown_id_is_an_error_for_every_operation() {
    let (mut arena, _) = scaffold();
    let node = VNode::text("x");

    assert!(matches!(
        append_child(&mut arena, "missing", &node),
        Err(DomError::MissingId(id)) if id == "missing"
    ));
    assert!(matches!(
        insert_before(&mut arena, "missing", &node),
        Err(DomError::MissingId(_))
    ));
    assert!(matches!(
        update(&mut arena, "missing", &node),
        Err(DomError::MissingId(_))
    ));
    assert!(matches!(
        remove(&mut arena, "missing"),
        Err(DomError::MissingId(_))
    ));
}

#[test]
fn insert_before_a_parentless_element_is_an_error() {
    let mut arena = DomArena::new();
    let root = arena.create_element("div").unwrap();
    arena.set_attribute(&root, "id", "root").unwrap();

    assert!(matches!(
        insert_before(&mut arena, "root", &VNode::text("x")),
        Err(DomError::Detached(id)) if id == "root"
    ));
}

#[test]
fn patches_apply_in_order_and_stop_at_first_error() {
    let (mut arena, body) = scaffold();

    let patches = vec![
        Patch::AppendChild {
            id: String::from("app"),
            node: VNode::with_text("span", "one"),
        },
        Patch::Remove {
            id: String::from("missing"),
        },
        Patch::Remove {
            id: String::from("header"),
        },
    ];

    let err = apply_all(&mut arena, &patches).unwrap_err();
    assert!(matches!(err, DomError::MissingId(id) if id == "missing"));

    // The first patch stuck, the one after the failure never ran.
    let app = arena.element_by_id("app").unwrap();
    assert_eq!(1, arena.children(app).len());
    assert!(arena.element_by_id("header").is_some());
    assert_eq!(3, arena.children(body).len());
}

#[test]
fn patch_batch_round_trips_through_json() {
    let patches = vec![
        Patch::Update {
            id: String::from("app"),
            node: VNode::from_json(SAMPLE_JSON).unwrap(),
        },
        Patch::Remove {
            id: String::from("footer"),
        },
    ];

    let json = serde_json::to_string(&patches).unwrap();
    let decoded: Vec<Patch> = serde_json::from_str(&json).unwrap();
    assert_eq!(patches, decoded);

    let (mut arena, body) = scaffold();
    apply_all(&mut arena, &decoded).unwrap();

    assert_eq!(None, arena.element_by_id("footer"));
    assert_eq!(2, arena.children(body).len());
}
