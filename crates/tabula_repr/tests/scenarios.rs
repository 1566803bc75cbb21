//! End-to-end representation scenarios through the public API.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use tabula_repr::{
    represent, represent_with, PartialReprConfig, Preset, Repr, ReprConfig, Representer,
    VisitedSet,
};
use tabula_value::{bind_leading, NativeFunction, Pack, Table, Value};

/// Build `{next = {next = ... {}}}` with `levels` tables.
fn chain(levels: usize) -> Table {
    let mut current = Table::new();
    for _ in 1..levels {
        let parent = Table::new();
        parent.set("next", current).unwrap();
        current = parent;
    }
    current
}

#[test]
fn integer() {
    assert_eq!(represent(&Value::int(42)).unwrap(), "42");
}

#[test]
fn quoted_string() {
    assert_eq!(represent(&Value::string("hi")).unwrap(), "\"hi\"");
}

#[test]
fn compact_table() {
    let table = Table::from_pairs([("a", 1), ("b", 2)]).unwrap();
    let out = represent_with(&Value::table(table), &ReprConfig::neat()).unwrap();
    assert_eq!(out, "{[\"a\"] = 1, [\"b\"] = 2}");
}

#[test]
fn list_table() {
    let table = Table::from_list(["x", "y", "z"].map(Value::string));
    let out = represent_with(&Value::table(table), &ReprConfig::neat()).unwrap();
    assert_eq!(out, "{[1] = \"x\", [2] = \"y\", [3] = \"z\"}");
}

#[test]
fn verbose_shows_address_and_metatable() {
    let meta = Table::from_pairs([("__name", "point")]).unwrap();
    let point = Table::from_pairs([("x", 1.5), ("y", 2.0)]).unwrap();
    point.set_metatable(Some(meta.clone()));

    let out = represent_with(&Value::table(point.clone()), &ReprConfig::verbose()).unwrap();

    let meta_repr = format!(
        "<\n        {}\n      > {{\n      [\"__name\"] = \"point\"\n    }}",
        meta.address()
    );
    let expected = format!(
        "<\n    {},\n    metatable = {meta_repr}\n  > {{\n  [\"x\"] = 1.5,\n  [\"y\"] = 2.0\n}}",
        point.address()
    );
    assert_eq!(out, expected);
}

#[test]
fn two_cycle_terminates() {
    let a = Table::new();
    let b = Table::new();
    a.set("peer", b.clone()).unwrap();
    b.set("peer", a.clone()).unwrap();

    let config = ReprConfig::neat();
    assert_eq!(
        represent_with(&Value::table(a.clone()), &config).unwrap(),
        "{[\"peer\"] = {[\"peer\"] = {...}}}"
    );
    assert_eq!(
        represent_with(&Value::table(b.clone()), &config).unwrap(),
        "{[\"peer\"] = {[\"peer\"] = {...}}}"
    );

    a.remove(&Value::string("peer"));
}

#[test]
fn self_cycle_default_layout() {
    let table = Table::new();
    table.set("me", table.clone()).unwrap();
    assert_eq!(
        represent(&Value::table(table.clone())).unwrap(),
        "{\n  [\"me\"] = {...}\n}"
    );
    table.remove(&Value::string("me"));
}

#[test]
fn nested_cycle_marks_do_not_leak_to_siblings() {
    // root -> left -> loop -> left, and root -> right -> loop
    let root = Table::new();
    let left = Table::new();
    let right = Table::new();
    let looped = Table::new();
    looped.set("back", left.clone()).unwrap();
    left.set("loop", looped.clone()).unwrap();
    right.set("loop", looped.clone()).unwrap();
    root.set("left", left.clone()).unwrap();
    root.set("right", right).unwrap();

    let out = represent_with(&Value::table(root), &ReprConfig::neat()).unwrap();
    assert_eq!(
        out,
        "{[\"left\"] = {[\"loop\"] = {[\"back\"] = {...}}}, \
         [\"right\"] = {[\"loop\"] = {[\"back\"] = {[\"loop\"] = {...}}}}}"
    );

    looped.remove(&Value::string("back"));
}

#[test]
fn toml_overrides_apply_over_preset() {
    let user = PartialReprConfig::from_toml_str(
        r#"
        [composite.pair]
        style = "%s: %s"

        [string]
        style = "'%s'"
        "#,
    );
    let config = ReprConfig::from_partial(&Preset::Neat.partial().layer(&user));
    let table = Table::from_pairs([("k", "v")]).unwrap();
    assert_eq!(
        represent_with(&Value::table(table), &config).unwrap(),
        "{'k': 'v'}"
    );
}

#[test]
fn malformed_toml_renders_with_defaults() {
    let config = ReprConfig::from_partial(&PartialReprConfig::from_toml_str("not = [valid"));
    let table = Table::from_pairs([("k", 1)]).unwrap();
    assert_eq!(
        represent_with(&Value::table(table), &config).unwrap(),
        "{\n  [\"k\"] = 1\n}"
    );
}

#[test]
fn nested_reuse_of_visited_set() {
    let config = ReprConfig::neat();
    let outer = Table::from_list([Value::int(1)]);
    let inner = Table::new();
    inner.set("outer", outer.clone()).unwrap();

    // A caller already inside `outer` hands its path to a nested call.
    let mut path = VisitedSet::new();
    path.mark(outer.id());
    let nested = Representer::with_visited(&config, path);
    assert_eq!(
        nested.represent(&Value::table(inner)).unwrap(),
        "{[\"outer\"] = {...}}"
    );
    assert_eq!(nested.into_visited().len(), 1);
}

#[test]
fn functions_returned_through_packs() {
    let pair = NativeFunction::new("pair", |args: Pack<Value>| {
        let table = Table::from_list(args);
        Ok(Pack::from(vec![Value::table(table)]))
    });
    let bound = bind_leading(&pair, Pack::from(vec![Value::string("head")]));

    let mut results = bound.call(Pack::from(vec![Value::int(2)])).unwrap();
    let table = results.pop().unwrap();
    assert_eq!(
        represent_with(&table, &ReprConfig::neat()).unwrap(),
        "{[1] = \"head\", [2] = 2}"
    );
    assert_eq!(
        represent(&Value::function(bound.clone())).unwrap(),
        bound.address()
    );
}

#[test]
fn repr_wrapper_formats_inline() {
    let table = Table::from_pairs([("n", 1)]).unwrap();
    let line = format!("value: {}", Repr(&Value::table(table)));
    assert_eq!(line, "value: {\n  [\"n\"] = 1\n}");
}

#[test]
fn deep_nesting_completes() {
    const LEVELS: usize = 200_000;
    let root = chain(LEVELS);

    let out = represent_with(&Value::table(root.clone()), &ReprConfig::neat()).unwrap();

    let opening = "{[\"next\"] = ".repeat(LEVELS - 1);
    let closing = "}".repeat(LEVELS - 1);
    assert_eq!(out.len(), opening.len() + 2 + closing.len());
    assert!(out.starts_with(&opening));
    assert!(out.ends_with(&format!("{{}}{closing}")));

    drop(root);
}

#[test]
fn init_tracing_is_idempotent() {
    tabula_repr::init_tracing();
    tabula_repr::init_tracing();
    assert_eq!(represent(&Value::Bool(true)).unwrap(), "true");
}
