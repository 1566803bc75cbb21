//! Partial configuration: the same tree with every leaf optional.

use serde::Deserialize;

use crate::template::Template;

/// Overlay of one partial onto another, leaf by leaf.
trait Layer {
    fn layer(&self, over: &Self) -> Self;
}

impl<T: Clone> Layer for Option<T> {
    fn layer(&self, over: &Self) -> Self {
        over.as_ref().or(self.as_ref()).cloned()
    }
}

fn layer_group<G: Layer + Clone>(base: Option<&G>, over: Option<&G>) -> Option<G> {
    match (base, over) {
        (Some(b), Some(o)) => Some(b.layer(o)),
        (Some(g), None) | (None, Some(g)) => Some(g.clone()),
        (None, None) => None,
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PartialBlockStyle {
    pub style: Option<Template>,
    pub sep: Option<String>,
    pub indentation: Option<String>,
}

impl Layer for PartialBlockStyle {
    fn layer(&self, over: &Self) -> Self {
        PartialBlockStyle {
            style: self.style.layer(&over.style),
            sep: self.sep.layer(&over.sep),
            indentation: self.indentation.layer(&over.indentation),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PartialPairStyle {
    pub style: Option<Template>,
}

impl Layer for PartialPairStyle {
    fn layer(&self, over: &Self) -> Self {
        PartialPairStyle {
            style: self.style.layer(&over.style),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PartialCircularStyle {
    pub style: Option<Template>,
    pub substitution: Option<String>,
    pub sep: Option<String>,
    pub indentation: Option<String>,
}

impl Layer for PartialCircularStyle {
    fn layer(&self, over: &Self) -> Self {
        PartialCircularStyle {
            style: self.style.layer(&over.style),
            substitution: self.substitution.layer(&over.substitution),
            sep: self.sep.layer(&over.sep),
            indentation: self.indentation.layer(&over.indentation),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PartialTableConfig {
    pub show_address: Option<bool>,
    pub show_metatable: Option<bool>,
    pub content: Option<PartialBlockStyle>,
    pub pair: Option<PartialPairStyle>,
    pub circular_reference: Option<PartialCircularStyle>,
    pub meta_info: Option<PartialBlockStyle>,
}

impl Layer for PartialTableConfig {
    fn layer(&self, over: &Self) -> Self {
        PartialTableConfig {
            show_address: self.show_address.layer(&over.show_address),
            show_metatable: self.show_metatable.layer(&over.show_metatable),
            content: layer_group(self.content.as_ref(), over.content.as_ref()),
            pair: layer_group(self.pair.as_ref(), over.pair.as_ref()),
            circular_reference: layer_group(
                self.circular_reference.as_ref(),
                over.circular_reference.as_ref(),
            ),
            meta_info: layer_group(self.meta_info.as_ref(), over.meta_info.as_ref()),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PartialStringConfig {
    pub style: Option<Template>,
}

impl Layer for PartialStringConfig {
    fn layer(&self, over: &Self) -> Self {
        PartialStringConfig {
            style: self.style.layer(&over.style),
        }
    }
}

/// Caller-supplied overrides. Absent leaves fall back to the defaults.
///
/// ```toml
/// [table]
/// show_address = true
///
/// [table.content]
/// sep = ", "
///
/// [string]
/// style = "'%s'"
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PartialReprConfig {
    #[serde(alias = "composite")]
    pub table: Option<PartialTableConfig>,
    pub string: Option<PartialStringConfig>,
}

impl PartialReprConfig {
    /// `over` laid on top of `self`: leaves set in `over` win.
    #[must_use]
    pub fn layer(&self, over: &PartialReprConfig) -> PartialReprConfig {
        PartialReprConfig {
            table: layer_group(self.table.as_ref(), over.table.as_ref()),
            string: layer_group(self.string.as_ref(), over.string.as_ref()),
        }
    }

    /// Parse overrides from TOML.
    ///
    /// Malformed input is logged and treated as no overrides.
    pub fn from_toml_str(text: &str) -> PartialReprConfig {
        match toml::from_str(text) {
            Ok(partial) => partial,
            Err(err) => {
                tracing::warn!(error = %err, "ignoring malformed representation config");
                PartialReprConfig::default()
            }
        }
    }
}
