//! Property-based tests for the representer.
//!
//! Random tables, optionally wired into cycles, must always render, leave
//! the visited set empty, and agree with a direct rendering of their
//! entries when they are flat.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::uninlined_format_args,
    reason = "Proptest macros generate code with these patterns"
)]

use proptest::prelude::*;
use tabula_repr::{represent_with, ReprConfig, Representer};
use tabula_value::{Table, Value};

fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::int),
        "[a-z]{0,8}".prop_map(Value::string),
    ]
}

fn expected_scalar(value: &Value) -> String {
    match value {
        Value::Str(s) => format!("\"{}\"", &**s),
        other => other.to_string(),
    }
}

proptest! {
    #[test]
    fn flat_list_matches_entries(items in prop::collection::vec(scalar_strategy(), 0..12)) {
        let table = Table::from_list(items.clone());
        let out = represent_with(&Value::table(table), &ReprConfig::neat()).unwrap();

        let body: Vec<String> = items
            .iter()
            .enumerate()
            .map(|(i, v)| format!("[{}] = {}", i + 1, expected_scalar(v)))
            .collect();
        prop_assert_eq!(out, format!("{{{}}}", body.join(", ")));
    }

    #[test]
    fn random_graphs_terminate(
        size in 1usize..6,
        edges in prop::collection::vec((0usize..6, 0usize..6), 0..10),
        verbose in any::<bool>(),
    ) {
        let nodes: Vec<Table> = (0..size).map(|_| Table::new()).collect();
        for (slot, (from, to)) in edges.iter().enumerate() {
            let from = &nodes[from % size];
            let to = &nodes[to % size];
            from.set(Value::int(i64::try_from(slot).unwrap()), to.clone()).unwrap();
            if slot % 3 == 0 {
                to.set_metatable(Some(from.clone()));
            }
        }

        let config = if verbose { ReprConfig::verbose() } else { ReprConfig::neat() };
        let representer = Representer::new(&config);
        let out = representer.represent(&Value::table(nodes[0].clone()));
        prop_assert!(out.is_ok());
        prop_assert!(representer.into_visited().is_empty());

        // Break cycles so the graph can be freed.
        for node in &nodes {
            node.set_metatable(None);
            for slot in 0..edges.len() {
                node.remove(&Value::int(i64::try_from(slot).unwrap()));
            }
        }
    }
}
