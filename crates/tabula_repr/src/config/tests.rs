use pretty_assertions::assert_eq;

use super::*;
use crate::template::Template;

#[test]
fn empty_partial_yields_defaults() {
    let defaults = ReprConfig::default();
    assert_eq!(merge(&PartialReprConfig::default(), &defaults), defaults);
}

#[test]
fn defaults_match_documented_table() {
    let config = ReprConfig::default();
    assert!(!config.table.show_address);
    assert!(!config.table.show_metatable);
    assert_eq!(config.table.content.style.as_str(), "{%s}");
    assert_eq!(config.table.content.sep, ",\n");
    assert_eq!(config.table.content.indentation, "  ");
    assert_eq!(config.table.pair.style.as_str(), "[%s] = %s");
    assert_eq!(config.table.circular_reference.style.as_str(), "{%s}");
    assert_eq!(config.table.circular_reference.substitution, "...");
    assert_eq!(config.table.circular_reference.sep, ", ");
    assert_eq!(config.table.meta_info.style.as_str(), "<%s> ");
    assert_eq!(config.table.meta_info.sep, ", ");
    assert_eq!(config.string.style.as_str(), "\"%s\"");
}

#[test]
fn leaf_override_keeps_siblings() {
    let partial = PartialReprConfig {
        table: Some(PartialTableConfig {
            content: Some(PartialBlockStyle {
                sep: Some("; ".to_owned()),
                ..PartialBlockStyle::default()
            }),
            ..PartialTableConfig::default()
        }),
        string: None,
    };
    let config = ReprConfig::from_partial(&partial);
    let defaults = ReprConfig::default();

    assert_eq!(config.table.content.sep, "; ");
    assert_eq!(config.table.content.style, defaults.table.content.style);
    assert_eq!(config.table.content.indentation, defaults.table.content.indentation);
    assert_eq!(config.table.pair, defaults.table.pair);
    assert_eq!(config.string, defaults.string);
}

#[test]
fn merge_does_not_mutate_inputs() {
    let defaults = ReprConfig::default();
    let partial = Preset::Verbose.partial();
    let before = (defaults.clone(), partial.clone());
    let _ = merge(&partial, &defaults);
    assert_eq!((defaults, partial), before);
}

#[test]
fn neat_preset_is_single_line() {
    let config = ReprConfig::neat();
    assert_eq!(config.table.content.sep, ", ");
    assert!(!config.table.show_address);
}

#[test]
fn verbose_preset_turns_on_metadata() {
    let config = ReprConfig::verbose();
    assert!(config.table.show_address);
    assert!(config.table.show_metatable);
    assert_eq!(config.table.content.sep, ",\n");
    assert_eq!(config.table.meta_info.sep, ",\n");
    assert_eq!(config.table.meta_info.style.as_str(), "<%s> ");
}

#[test]
fn preset_overlay_is_idempotent() {
    let preset = Preset::Verbose.partial();
    let once = ReprConfig::from_partial(&preset);
    let twice = merge(&preset, &once);
    assert_eq!(once, twice);
    assert_eq!(ReprConfig::from_partial(&preset.layer(&preset)), once);
}

#[test]
fn user_overrides_layer_over_preset() {
    let user = PartialReprConfig {
        table: Some(PartialTableConfig {
            show_address: Some(false),
            ..PartialTableConfig::default()
        }),
        string: Some(PartialStringConfig {
            style: Some(Template::new("'%s'")),
        }),
    };
    let config = ReprConfig::from_partial(&Preset::Verbose.partial().layer(&user));

    assert!(!config.table.show_address);
    assert!(config.table.show_metatable);
    assert_eq!(config.table.meta_info.sep, ",\n");
    assert_eq!(config.string.style.as_str(), "'%s'");
}

#[test]
fn toml_overrides() {
    let partial = PartialReprConfig::from_toml_str(
        r#"
        [table]
        show_address = true

        [table.content]
        sep = ", "

        [table.circular_reference]
        substitution = "<cycle>"

        [string]
        style = "'%s'"
        "#,
    );
    let config = ReprConfig::from_partial(&partial);

    assert!(config.table.show_address);
    assert_eq!(config.table.content.sep, ", ");
    assert_eq!(config.table.content.style.as_str(), "{%s}");
    assert_eq!(config.table.circular_reference.substitution, "<cycle>");
    assert_eq!(config.string.style.as_str(), "'%s'");
}

#[test]
fn toml_composite_alias() {
    let partial = PartialReprConfig::from_toml_str(
        r#"
        [composite]
        show_metatable = true
        "#,
    );
    assert!(ReprConfig::from_partial(&partial).table.show_metatable);
}

#[test]
fn toml_unknown_keys_ignored() {
    let partial = PartialReprConfig::from_toml_str(
        r#"
        colour = "blue"

        [table]
        sort_keys = true
        show_address = true
        "#,
    );
    assert!(ReprConfig::from_partial(&partial).table.show_address);
}

#[test]
fn malformed_toml_falls_back_to_defaults() {
    let partial = PartialReprConfig::from_toml_str("[table\nshow_address = ");
    assert_eq!(partial, PartialReprConfig::default());
    assert_eq!(ReprConfig::from_partial(&partial), ReprConfig::default());
}

#[test]
fn wrong_leaf_type_falls_back_to_defaults() {
    let partial = PartialReprConfig::from_toml_str("[table]\nshow_address = \"yes\"\n");
    assert_eq!(partial, PartialReprConfig::default());
}
