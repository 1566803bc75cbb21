//! Tabula Repr - cycle-safe structural representation of values.
//!
//! This crate turns any `Value`, including tables that contain themselves,
//! into a formatted display string.
//!
//! # Architecture
//!
//! - `config`: effective configuration, partial overrides, presets and TOML
//!   loading. The effective configuration is always the partial overlaid on
//!   the defaults.
//! - `template`: `%s` style strings.
//! - `format`: lays out a list of rendered items as a bracketed block,
//!   single or multi-line.
//! - `registry`: kind to primitive renderer lookup.
//! - `represent`: the depth-first walk with cycle detection.
//!
//! ```text
//! let table = Table::from_pairs([("x", 1), ("y", 2)])?;
//! let text = represent_with(&Value::table(table), &ReprConfig::neat())?;
//! assert_eq!(text, r#"{["x"] = 1, ["y"] = 2}"#);
//! ```

mod config;
mod errors;
mod format;
mod registry;
mod represent;
mod template;

use std::sync::Once;

pub use config::{
    merge, BlockStyle, CircularStyle, Overlay, PairStyle, PartialBlockStyle,
    PartialCircularStyle, PartialPairStyle, PartialReprConfig, PartialStringConfig,
    PartialTableConfig, Preset, ReprConfig, StringConfig, TableConfig,
};
pub use errors::{ReprError, ReprResult};
pub use format::format_items;
pub use registry::{Renderer, RendererRegistry};
pub use represent::{
    represent, represent_with, table_entries, Repr, Representer, VisitedSet,
};
pub use template::Template;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing subscriber for debug output.
///
/// Call this early in main() to enable tracing output.
/// Set `RUST_LOG=tabula_repr=trace` to see every table visit.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
