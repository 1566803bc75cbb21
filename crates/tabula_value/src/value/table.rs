//! Shared key/value tables.
//!
//! A `Table` is a handle: cloning it shares the same entries, and equality
//! is identity. Entries keep insertion order, backed by a key index for
//! O(1) lookup. Removing an entry shifts later entries down by one.
//!
//! Locks are held only for the duration of a single accessor call. The entry
//! generator clones one entry out per step, so a traversal that recurses
//! into a table it is already walking never re-enters a held lock.
//!
//! # Ownership
//!
//! Handles are strong references. Dropping a deeply nested table unlinks
//! its children onto a worklist instead of recursing, so nesting depth is
//! bounded by memory on drop as well as on traversal. A table reachable
//! from itself (through an entry or a metatable) is a reference cycle and
//! is never freed; callers that build cycles break them with
//! [`Table::remove`] or [`Table::set_metatable`] when done.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tabula_seq::{Generator, Seq, Step};

use super::Value;
use crate::errors::{nil_table_key, ValueResult};

/// Identity of a table: its allocation address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TableId(usize);

impl TableId {
    /// Raw address value.
    #[inline]
    pub fn addr(self) -> usize {
        self.0
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

#[derive(Default)]
struct TableData {
    entries: Vec<(Value, Value)>,
    index: FxHashMap<Value, usize>,
    metatable: Option<Table>,
}

/// Shared, mutable key/value table.
///
/// A table that contains itself, directly or through other tables, keeps
/// itself alive. See the module docs on ownership.
#[derive(Clone, Default)]
pub struct Table(Arc<RwLock<TableData>>);

impl Table {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table from key/value pairs, in order.
    ///
    /// Later duplicates overwrite earlier ones; nil values are skipped.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> ValueResult<Self>
    where
        K: Into<Value>,
        V: Into<Value>,
    {
        let table = Table::new();
        for (key, value) in pairs {
            table.set(key.into(), value.into())?;
        }
        Ok(table)
    }

    /// Create a sequence-style table keyed `1..=n`.
    pub fn from_list(items: impl IntoIterator<Item = Value>) -> Self {
        let table = Table::new();
        {
            let mut data = table.0.write();
            for (position, item) in items.into_iter().filter(|v| !v.is_nil()).enumerate() {
                let key = Value::Int(i64::try_from(position).unwrap_or(i64::MAX).saturating_add(1));
                insert(&mut data, key, item);
            }
        }
        table
    }

    /// Identity of this table.
    #[inline]
    pub fn id(&self) -> TableId {
        TableId(Arc::as_ptr(&self.0).cast::<()>() as usize)
    }

    /// Identity string, e.g. `table: 0x55d0c8a2b6f0`.
    ///
    /// Never consults the metatable or any registered renderer.
    pub fn address(&self) -> String {
        format!("table: {}", self.id())
    }

    /// True if both handles refer to the same table.
    #[inline]
    pub fn ptr_eq(&self, other: &Table) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Look up `key`; missing keys read as nil.
    pub fn get(&self, key: &Value) -> Value {
        let data = self.0.read();
        data.index
            .get(key)
            .map_or(Value::Nil, |&pos| data.entries[pos].1.clone())
    }

    /// Set `key` to `value`. A nil value removes the entry.
    ///
    /// Storing a table that already reaches `self` creates a reference
    /// cycle, which leaks unless the entry is later removed.
    pub fn set(&self, key: impl Into<Value>, value: impl Into<Value>) -> ValueResult<()> {
        let key = key.into();
        let value = value.into();
        if key.is_nil() {
            return Err(nil_table_key());
        }
        let mut data = self.0.write();
        if value.is_nil() {
            remove(&mut data, &key);
        } else {
            insert(&mut data, key, value);
        }
        Ok(())
    }

    /// Remove `key`, returning its previous value (nil if absent).
    pub fn remove(&self, key: &Value) -> Value {
        remove(&mut self.0.write(), key).unwrap_or(Value::Nil)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.read().entries.is_empty()
    }

    /// The attached metatable, if any.
    pub fn metatable(&self) -> Option<Table> {
        self.0.read().metatable.clone()
    }

    /// Attach or detach a metatable.
    pub fn set_metatable(&self, metatable: Option<Table>) {
        self.0.write().metatable = metatable;
    }

    /// Clone out the entry at insertion position `pos`.
    pub fn entry_at(&self, pos: usize) -> Option<(Value, Value)> {
        self.0.read().entries.get(pos).cloned()
    }

    /// Lazy sequence over `(key, value)` entries in insertion order.
    pub fn entries(&self) -> Seq<TableEntries> {
        Seq::new(TableEntries, self.clone(), 0)
    }
}

impl Drop for TableData {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        unlink_children(self, &mut pending);
        while let Some(table) = pending.pop() {
            // Only the last handle owns the data; anything shared drops
            // as a plain refcount decrement.
            if let Some(lock) = Arc::into_inner(table.0) {
                let mut data = lock.into_inner();
                unlink_children(&mut data, &mut pending);
            }
        }
    }
}

/// Move child tables out of `data`, leaving it with nothing that recurses
/// on drop.
fn unlink_children(data: &mut TableData, pending: &mut Vec<Table>) {
    // Index keys are clones of entry keys, never the last handle.
    data.index.clear();
    for (key, value) in data.entries.drain(..) {
        if let Value::Table(table) = key {
            pending.push(table);
        }
        if let Value::Table(table) = value {
            pending.push(table);
        }
    }
    pending.extend(data.metatable.take());
}

fn insert(data: &mut TableData, key: Value, value: Value) {
    if let Some(&pos) = data.index.get(&key) {
        data.entries[pos].1 = value;
    } else {
        data.index.insert(key.clone(), data.entries.len());
        data.entries.push((key, value));
    }
}

fn remove(data: &mut TableData, key: &Value) -> Option<Value> {
    let pos = data.index.remove(key)?;
    let (_, old) = data.entries.remove(pos);
    for slot in data.index.values_mut() {
        if *slot > pos {
            *slot -= 1;
        }
    }
    Some(old)
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Identity only: a table may contain itself.
        write!(f, "Table({})", self.id())
    }
}

/// Generator over a table's entries; the state is the insertion position.
#[derive(Clone, Copy, Debug, Default)]
pub struct TableEntries;

impl Generator for TableEntries {
    type Target = Table;
    type State = usize;
    type Item = (Value, Value);

    fn generate(&self, table: &Table, pos: &usize) -> Step<(Value, Value), usize> {
        match table.entry_at(*pos) {
            Some(entry) => Step::Yield(entry, pos.saturating_add(1)),
            None => Step::Done,
        }
    }
}
