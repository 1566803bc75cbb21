//! Renderer registry for looking up primitive renderers by kind.

use rustc_hash::FxHashMap;
use tabula_value::{format_float, Value, ValueKind};

use crate::config::ReprConfig;

/// Renders one atomic value. Renderers never recurse.
pub type Renderer = fn(&Value, &ReprConfig) -> String;

/// Registry mapping `ValueKind` to a primitive renderer.
///
/// Kinds without an entry fall back to the value's `Display`. Composite
/// kinds are never looked up here; the representer walks them itself.
#[derive(Clone, Debug)]
pub struct RendererRegistry {
    renderers: FxHashMap<ValueKind, Renderer>,
}

impl RendererRegistry {
    /// Create a registry with the built-in renderers registered.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(ValueKind::Nil, render_nil);
        registry.register(ValueKind::Boolean, render_display);
        registry.register(ValueKind::Integer, render_display);
        registry.register(ValueKind::Float, render_float);
        registry.register(ValueKind::String, render_string);
        registry.register(ValueKind::Function, render_function);
        registry
    }

    /// Create a registry with nothing registered.
    pub fn empty() -> Self {
        RendererRegistry {
            renderers: FxHashMap::default(),
        }
    }

    /// Register `renderer` for `kind`, replacing any previous entry.
    pub fn register(&mut self, kind: ValueKind, renderer: Renderer) -> &mut Self {
        self.renderers.insert(kind, renderer);
        self
    }

    /// Get the renderer for a given kind.
    pub fn get(&self, kind: ValueKind) -> Option<Renderer> {
        self.renderers.get(&kind).copied()
    }

    /// Render an atomic value.
    pub fn render(&self, value: &Value, config: &ReprConfig) -> String {
        match self.get(value.kind()) {
            Some(renderer) => renderer(value, config),
            None => value.to_string(),
        }
    }

    /// Get all registered kinds.
    pub fn kinds(&self) -> impl Iterator<Item = ValueKind> + '_ {
        ValueKind::ALL
            .into_iter()
            .filter(|kind| self.renderers.contains_key(kind))
    }

    /// Get the number of registered renderers.
    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }
}

impl Default for RendererRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// Built-in renderers

fn render_nil(_: &Value, _: &ReprConfig) -> String {
    "nil".to_owned()
}

fn render_display(value: &Value, _: &ReprConfig) -> String {
    value.to_string()
}

fn render_float(value: &Value, _: &ReprConfig) -> String {
    match value {
        Value::Float(f) => format_float(*f),
        other => other.to_string(),
    }
}

fn render_string(value: &Value, config: &ReprConfig) -> String {
    match value.as_str() {
        Some(s) => config.string.style.fill(&[s]),
        None => value.to_string(),
    }
}

fn render_function(value: &Value, _: &ReprConfig) -> String {
    match value.as_function() {
        Some(function) => function.address(),
        None => value.to_string(),
    }
}
