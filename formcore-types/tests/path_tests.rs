use formcore_types::{Path, Segment, resolve};
use pretty_assertions::assert_eq;
use serde_json::json;

// ── parsing ──────────────────────────────────────────────────────

#[test]
fn hash_alone_is_root() {
    let p = Path::parse("#").unwrap();
    assert!(p.is_root());
    assert_eq!(p.scope_string(), "#");
}

#[test]
fn empty_string_is_root() {
    assert!(Path::parse("").unwrap().is_root());
}

#[test]
fn parses_schema_space_scope() {
    let p = Path::parse("#/properties/name").unwrap();
    assert_eq!(p.segments(), &[Segment::key("properties"), Segment::key("name")]);
}

#[test]
fn parses_data_space_pointer() {
    let p = Path::parse("/rows/0/title").unwrap();
    assert_eq!(
        p.segments(),
        &[Segment::key("rows"), Segment::Index(0), Segment::key("title")]
    );
}

#[test]
fn parses_relative_path() {
    let p = Path::parse("a/b").unwrap();
    assert_eq!(p.len(), 2);
}

#[test]
fn drops_redundant_empty_segments() {
    let p = Path::parse("#//properties//x").unwrap();
    assert_eq!(p, Path::parse("#/properties/x").unwrap());
}

#[test]
fn all_digit_segments_become_indices() {
    let p = Path::parse("items/2").unwrap();
    assert_eq!(p.segments()[1], Segment::Index(2));
    assert_eq!(p.segments()[1].as_index(), Some(2));
    assert_eq!(p.segments()[0].as_key(), Some("items"));
}

#[test]
fn percent_escapes_are_decoded() {
    let p = Path::parse("#/properties/first%20name").unwrap();
    assert_eq!(p.segments()[1], Segment::key("first name"));
}

#[test]
fn tilde_escapes_are_decoded() {
    let p = Path::parse("/a~1b/c~0d").unwrap();
    assert_eq!(p.segments(), &[Segment::key("a/b"), Segment::key("c~d")]);
}

#[test]
fn dangling_tilde_is_rejected() {
    assert!(Path::parse("/bad~").is_err());
    assert!(Path::parse("/bad~2").is_err());
}

// ── composition ──────────────────────────────────────────────────

#[test]
fn root_is_identity_for_compose() {
    let p = Path::parse("#/properties/a").unwrap();
    assert_eq!(Path::root().compose(&p), p);
    assert_eq!(p.compose(&Path::root()), p);
}

#[test]
fn compose_appends_in_order() {
    let base = Path::parse("#/properties/a").unwrap();
    let suffix = Path::parse("properties/b").unwrap();
    assert_eq!(
        base.compose(&suffix),
        Path::parse("#/properties/a/properties/b").unwrap()
    );
}

#[test]
fn join_appends_one_segment() {
    let p = Path::root().join("a").join(3usize);
    assert_eq!(p.segments(), &[Segment::key("a"), Segment::Index(3)]);
}

// ── schema-space / data-space conversion ─────────────────────────

#[test]
fn to_property_path_strips_one_leading_marker() {
    let p = Path::parse("properties/name").unwrap();
    assert_eq!(p.to_property_path(), Path::parse("name").unwrap());
}

#[test]
fn to_property_path_leaves_other_paths_alone() {
    let p = Path::parse("items").unwrap();
    assert_eq!(p.to_property_path(), p);
}

#[test]
fn to_data_path_drops_every_marker() {
    let p = Path::parse("#/properties/rows/items/properties/title").unwrap();
    assert_eq!(p.to_data_path(), Path::parse("rows/title").unwrap());
}

#[test]
fn to_data_path_keeps_property_named_items() {
    // `items` directly after `properties` is a property name, not a marker.
    let p = Path::parse("#/properties/items").unwrap();
    assert_eq!(p.to_data_path(), Path::parse("items").unwrap());
}

// ── resolution ───────────────────────────────────────────────────

#[test]
fn resolves_nested_objects_and_arrays() {
    let doc = json!({"a": {"b": [10, 20, 30]}});
    let p = Path::parse("a/b/1").unwrap();
    assert_eq!(resolve(&doc, &p), Some(&json!(20)));
}

#[test]
fn root_path_resolves_to_whole_document() {
    let doc = json!({"a": 1});
    assert_eq!(resolve(&doc, &Path::root()), Some(&doc));
}

#[test]
fn missing_key_resolves_to_none() {
    let doc = json!({"a": 1});
    assert_eq!(resolve(&doc, &Path::parse("b").unwrap()), None);
}

#[test]
fn out_of_range_index_resolves_to_none() {
    let doc = json!({"a": [1, 2, 3]});
    assert_eq!(resolve(&doc, &Path::parse("a/5").unwrap()), None);
}

#[test]
fn non_container_intermediate_resolves_to_none() {
    let doc = json!({"a": 1});
    assert_eq!(resolve(&doc, &Path::parse("a/b").unwrap()), None);
}

#[test]
fn index_does_not_address_objects() {
    let doc = json!({"0": "zero"});
    assert_eq!(resolve(&doc, &Path::parse("/0").unwrap()), None);
}

#[test]
fn compose_resolves_like_manual_nesting() {
    let doc = json!({"a": {"b": 42}});
    let outer = resolve(&doc, &Path::parse("a").unwrap()).unwrap();
    let inner = resolve(outer, &Path::parse("b").unwrap());

    let composed = Path::parse("a").unwrap().join("b");
    assert_eq!(resolve(&doc, &composed), inner);
}

// ── display / serde ──────────────────────────────────────────────

#[test]
fn display_re_escapes_special_characters() {
    let p = Path::from_segments([Segment::key("a/b"), Segment::key("c~d")]);
    assert_eq!(p.to_string(), "a~1b/c~0d");
}

#[test]
fn scope_string_prefixes_hash() {
    let p = Path::parse("#/properties/name").unwrap();
    assert_eq!(p.scope_string(), "#/properties/name");
}

#[test]
fn serializes_as_pointer_string() {
    let p = Path::parse("rows/0").unwrap();
    assert_eq!(serde_json::to_value(&p).unwrap(), json!("rows/0"));
    let back: Path = serde_json::from_value(json!("rows/0")).unwrap();
    assert_eq!(back, p);
}
