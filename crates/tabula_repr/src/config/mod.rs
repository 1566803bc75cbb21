//! Representation options and their default overlay.
//!
//! # Shape
//!
//! ```text
//! table (alias: composite)
//!   show_address, show_metatable
//!   content            { style, sep, indentation }
//!   pair               { style }
//!   circular_reference { style, substitution, sep, indentation }
//!   meta_info          { style, sep, indentation }
//! string               { style }
//! ```
//!
//! `ReprConfig` is the effective tree: every leaf has a value.
//! `PartialReprConfig` mirrors it with every leaf and group optional. The
//! effective configuration for a call is always `merge(partial, defaults)`;
//! presets are partial configurations merged the same way.
//!
//! Configuration is plain immutable data passed by reference. There is no
//! process-wide default instance: `ReprConfig::default()` builds a fresh one.

mod partial;

pub use partial::{
    PartialBlockStyle, PartialCircularStyle, PartialPairStyle, PartialReprConfig,
    PartialStringConfig, PartialTableConfig,
};

use crate::template::Template;

/// Overlay of a partial configuration onto a complete one.
pub trait Overlay: Sized {
    /// Same shape as `Self` with every leaf optional.
    type Partial;

    /// Fresh tree taking each leaf from `partial` when present, otherwise
    /// from `self`. Leaves only `partial` knows about are ignored.
    fn overlay(&self, partial: &Self::Partial) -> Self;
}

/// Merge `partial` onto `defaults`.
pub fn merge<C: Overlay>(partial: &C::Partial, defaults: &C) -> C {
    defaults.overlay(partial)
}

/// Style, separator and indentation for a bracketed list of items.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockStyle {
    pub style: Template,
    /// Ends with `'\n'` for multi-line layout.
    pub sep: String,
    pub indentation: String,
}

impl BlockStyle {
    fn new(style: &str, sep: &str, indentation: &str) -> Self {
        BlockStyle {
            style: Template::new(style),
            sep: sep.to_owned(),
            indentation: indentation.to_owned(),
        }
    }
}

/// How one key/value entry is joined: two slots, key then value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PairStyle {
    pub style: Template,
}

/// What a table already on the recursion path renders as.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CircularStyle {
    pub style: Template,
    pub substitution: String,
    pub sep: String,
    pub indentation: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableConfig {
    /// Prefix each table with its identity string.
    pub show_address: bool,
    /// Render the metatable (first visit only).
    pub show_metatable: bool,
    pub content: BlockStyle,
    pub pair: PairStyle,
    pub circular_reference: CircularStyle,
    pub meta_info: BlockStyle,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StringConfig {
    /// Wraps raw string content; nothing is escaped.
    pub style: Template,
}

/// Effective representation configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReprConfig {
    pub table: TableConfig,
    pub string: StringConfig,
}

impl Default for ReprConfig {
    fn default() -> Self {
        ReprConfig {
            table: TableConfig {
                show_address: false,
                show_metatable: false,
                content: BlockStyle::new("{%s}", ",\n", "  "),
                pair: PairStyle {
                    style: Template::new("[%s] = %s"),
                },
                circular_reference: CircularStyle {
                    style: Template::new("{%s}"),
                    substitution: "...".to_owned(),
                    sep: ", ".to_owned(),
                    indentation: "  ".to_owned(),
                },
                meta_info: BlockStyle::new("<%s> ", ", ", "  "),
            },
            string: StringConfig {
                style: Template::new("\"%s\""),
            },
        }
    }
}

impl ReprConfig {
    /// Defaults overlaid with `partial`.
    pub fn from_partial(partial: &PartialReprConfig) -> Self {
        merge(partial, &ReprConfig::default())
    }

    /// Defaults overlaid with a preset.
    pub fn preset(preset: Preset) -> Self {
        Self::from_partial(&preset.partial())
    }

    /// Single-line, comma separated.
    pub fn neat() -> Self {
        Self::preset(Preset::Neat)
    }

    /// Multi-line with addresses and metatables.
    pub fn verbose() -> Self {
        Self::preset(Preset::Verbose)
    }
}

/// Built-in partial configurations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Everything on one line, entries separated by `", "`.
    Neat,
    /// One entry per line, with identity and metatable, metadata one
    /// item per line.
    Verbose,
}

impl Preset {
    pub fn partial(self) -> PartialReprConfig {
        match self {
            Preset::Neat => PartialReprConfig {
                table: Some(PartialTableConfig {
                    content: Some(PartialBlockStyle {
                        sep: Some(", ".to_owned()),
                        ..PartialBlockStyle::default()
                    }),
                    meta_info: Some(PartialBlockStyle {
                        sep: Some(", ".to_owned()),
                        ..PartialBlockStyle::default()
                    }),
                    ..PartialTableConfig::default()
                }),
                string: None,
            },
            Preset::Verbose => PartialReprConfig {
                table: Some(PartialTableConfig {
                    show_address: Some(true),
                    show_metatable: Some(true),
                    content: Some(PartialBlockStyle {
                        sep: Some(",\n".to_owned()),
                        ..PartialBlockStyle::default()
                    }),
                    meta_info: Some(PartialBlockStyle {
                        sep: Some(",\n".to_owned()),
                        ..PartialBlockStyle::default()
                    }),
                    ..PartialTableConfig::default()
                }),
                string: None,
            },
        }
    }
}

// Overlay impls

fn leaf<T: Clone>(partial: Option<&T>, default: &T) -> T {
    partial.unwrap_or(default).clone()
}

fn group<C: Overlay + Clone>(partial: Option<&C::Partial>, default: &C) -> C {
    match partial {
        Some(p) => default.overlay(p),
        None => default.clone(),
    }
}

impl Overlay for BlockStyle {
    type Partial = PartialBlockStyle;

    fn overlay(&self, p: &PartialBlockStyle) -> Self {
        BlockStyle {
            style: leaf(p.style.as_ref(), &self.style),
            sep: leaf(p.sep.as_ref(), &self.sep),
            indentation: leaf(p.indentation.as_ref(), &self.indentation),
        }
    }
}

impl Overlay for PairStyle {
    type Partial = PartialPairStyle;

    fn overlay(&self, p: &PartialPairStyle) -> Self {
        PairStyle {
            style: leaf(p.style.as_ref(), &self.style),
        }
    }
}

impl Overlay for CircularStyle {
    type Partial = PartialCircularStyle;

    fn overlay(&self, p: &PartialCircularStyle) -> Self {
        CircularStyle {
            style: leaf(p.style.as_ref(), &self.style),
            substitution: leaf(p.substitution.as_ref(), &self.substitution),
            sep: leaf(p.sep.as_ref(), &self.sep),
            indentation: leaf(p.indentation.as_ref(), &self.indentation),
        }
    }
}

impl Overlay for TableConfig {
    type Partial = PartialTableConfig;

    fn overlay(&self, p: &PartialTableConfig) -> Self {
        TableConfig {
            show_address: leaf(p.show_address.as_ref(), &self.show_address),
            show_metatable: leaf(p.show_metatable.as_ref(), &self.show_metatable),
            content: group(p.content.as_ref(), &self.content),
            pair: group(p.pair.as_ref(), &self.pair),
            circular_reference: group(p.circular_reference.as_ref(), &self.circular_reference),
            meta_info: group(p.meta_info.as_ref(), &self.meta_info),
        }
    }
}

impl Overlay for StringConfig {
    type Partial = PartialStringConfig;

    fn overlay(&self, p: &PartialStringConfig) -> Self {
        StringConfig {
            style: leaf(p.style.as_ref(), &self.style),
        }
    }
}

impl Overlay for ReprConfig {
    type Partial = PartialReprConfig;

    fn overlay(&self, p: &PartialReprConfig) -> Self {
        ReprConfig {
            table: group(p.table.as_ref(), &self.table),
            string: group(p.string.as_ref(), &self.string),
        }
    }
}

#[cfg(test)]
mod tests;
