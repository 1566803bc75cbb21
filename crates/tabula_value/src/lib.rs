//! Tabula Value - runtime values walked by the representation printer.
//!
//! This crate provides:
//! - `Value`, a closed set of primitives plus the composite `Table`
//! - `Table`, a shared, identity-compared key/value container with an
//!   optional metatable, whose entries are exposed as a lazy `Seq`
//! - `NativeFunction`, `Pack` and partial application helpers
//! - `ValueError`, the error type for invalid arguments
//!
//! # Identity
//!
//! Tables and functions compare, hash and print by allocation address.
//! Two tables with the same entries are different keys; a table that
//! contains itself is an ordinary value to read and print.
//!
//! # Ownership
//!
//! Table handles are strong references. Dropping deep nesting is iterative,
//! but a table reachable from itself is a reference cycle and is never
//! freed. Code that builds cycles breaks them (`Table::remove`,
//! `Table::set_metatable(None)`) once the structure is no longer needed.

mod bind;
mod errors;
mod pack;
mod value;

pub use bind::{bind_leading, bind_trailing};
pub use errors::{
    expected_table, nil_table_key, pop_from_empty_pack, ValueError, ValueResult,
};
pub use pack::Pack;
pub use value::{
    format_float, Heap, NativeFn, NativeFunction, Table, TableEntries, TableId, Value, ValueKind,
};
