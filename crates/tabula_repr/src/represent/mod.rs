//! Structural representation of values.
//!
//! # Traversal
//!
//! Atomic values go through the `RendererRegistry`. Tables are walked
//! depth-first: each entry's key and value are rendered one level deeper,
//! joined with the pair style, and the resulting list is laid out by
//! `format_items`. Entries are pulled through the table's entry `Seq`, so
//! no table lock is held while a child is being rendered.
//!
//! # Cycles
//!
//! The `VisitedSet` holds the tables on the current recursion path. A table
//! met again on its own path renders as the circular-reference token. A
//! frame clears only a mark it set itself, so a table shared by two sibling
//! subtrees (not a cycle) renders in full under both.

use std::cell::RefCell;
use std::fmt;

use rustc_hash::FxHashSet;
use tabula_seq::Seq;
use tabula_stack::ensure_sufficient_stack;
use tabula_value::{expected_table, Table, TableEntries, TableId, Value};
use tracing::trace;

use crate::config::ReprConfig;
use crate::errors::ReprResult;
use crate::format::format_items;
use crate::registry::RendererRegistry;

/// Tables currently on the recursion path, by identity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisitedSet {
    ids: FxHashSet<TableId>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: TableId) -> bool {
        self.ids.contains(&id)
    }

    /// Mark `id`. Returns `true` if it was not already marked.
    pub fn mark(&mut self, id: TableId) -> bool {
        self.ids.insert(id)
    }

    pub fn unmark(&mut self, id: TableId) {
        self.ids.remove(&id);
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Renders values under one configuration.
///
/// A representer is cheap to build and meant for a single top-level call,
/// or a chain of nested calls sharing one visited set (see
/// [`Representer::with_visited`] and [`Representer::into_visited`]).
pub struct Representer<'c> {
    config: &'c ReprConfig,
    registry: RendererRegistry,
    visited: RefCell<VisitedSet>,
}

impl<'c> Representer<'c> {
    /// Create a representer with a fresh visited set and the built-in
    /// renderers.
    pub fn new(config: &'c ReprConfig) -> Self {
        Self::with_visited(config, VisitedSet::new())
    }

    /// Create a representer that continues from an existing visited set.
    ///
    /// Tables already in `visited` render as circular references.
    pub fn with_visited(config: &'c ReprConfig, visited: VisitedSet) -> Self {
        Representer {
            config,
            registry: RendererRegistry::new(),
            visited: RefCell::new(visited),
        }
    }

    /// Replace the renderer registry.
    #[must_use]
    pub fn with_registry(mut self, registry: RendererRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn config(&self) -> &ReprConfig {
        self.config
    }

    /// Give back the visited set. After a completed call it holds exactly
    /// what it held before.
    pub fn into_visited(self) -> VisitedSet {
        self.visited.into_inner()
    }

    /// Render `value` at depth 0.
    #[tracing::instrument(level = "debug", skip_all, fields(kind = %value.kind()))]
    pub fn represent(&self, value: &Value) -> ReprResult<String> {
        self.represent_at(value, 0)
    }

    fn represent_at(&self, value: &Value, depth: usize) -> ReprResult<String> {
        if value.is_composite() {
            ensure_sufficient_stack(|| self.represent_composite(value, depth))
        } else {
            Ok(self.registry.render(value, self.config))
        }
    }

    fn represent_composite(&self, value: &Value, depth: usize) -> ReprResult<String> {
        let table = require_table(value)?;
        let id = table.id();
        let was_visited = !self.visited.borrow_mut().mark(id);
        trace!(table = %id, depth, cyclic = was_visited, "representing table");

        let result = self.represent_table(table, depth, was_visited);

        if !was_visited {
            self.visited.borrow_mut().unmark(id);
        }
        result
    }

    fn represent_table(
        &self,
        table: &Table,
        depth: usize,
        was_visited: bool,
    ) -> ReprResult<String> {
        let style = &self.config.table;

        let mut meta = Vec::new();
        if style.show_address {
            meta.push(table.address());
        }
        if style.show_metatable && !was_visited {
            if let Some(metatable) = table.metatable() {
                let rendered = self.represent_at(&Value::table(metatable), depth + 2)?;
                meta.push(format!("metatable = {rendered}"));
            }
        }
        let meta = if meta.is_empty() {
            String::new()
        } else {
            let info = &style.meta_info;
            format_items(&meta, &info.style, &info.sep, &info.indentation, depth + 2)?
        };

        let body = if was_visited {
            let circular = &style.circular_reference;
            format_items(
                &[circular.substitution.clone()],
                &circular.style,
                &circular.sep,
                &circular.indentation,
                depth + 1,
            )?
        } else {
            let pairs = table.entries().map(|(key, value), _, _| -> ReprResult<String> {
                let key = self.represent_at(&key, depth + 1)?;
                let value = self.represent_at(&value, depth + 1)?;
                Ok(style.pair.style.fill(&[&key, &value]))
            });
            let items = pairs.take().into_iter().collect::<ReprResult<Vec<String>>>()?;
            let content = &style.content;
            format_items(&items, &content.style, &content.sep, &content.indentation, depth + 1)?
        };

        Ok(meta + &body)
    }
}

fn require_table(value: &Value) -> ReprResult<&Table> {
    value
        .as_table()
        .ok_or_else(|| expected_table(value.type_name()).into())
}

/// Entries of a table value as a lazy sequence.
///
/// Fails with `InvalidArgument` for any other kind.
pub fn table_entries(value: &Value) -> ReprResult<Seq<TableEntries>> {
    require_table(value).map(Table::entries)
}

/// Render `value` with the default configuration.
pub fn represent(value: &Value) -> ReprResult<String> {
    represent_with(value, &ReprConfig::default())
}

/// Render `value` with `config`.
pub fn represent_with(value: &Value, config: &ReprConfig) -> ReprResult<String> {
    Representer::new(config).represent(value)
}

/// `Display` adapter rendering with the default configuration.
///
/// ```text
/// println!("{}", Repr(&value));
/// ```
#[derive(Clone, Copy)]
pub struct Repr<'v>(pub &'v Value);

impl fmt::Display for Repr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = represent(self.0).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

impl fmt::Debug for Repr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
