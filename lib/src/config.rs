//! Defines the configuration for a conversion run: the blacklist, inference
//! rules, label and tooltip properties, bnode patterns, prefix declarations
//! and the color policy. Loaded once from a JSON file and immutable after.

use crate::colors::{self, Color, ColorSpec};
use anyhow::{Context, Result};
use oxigraph::model::NamedNode;
use regex::Regex;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::io::BufReader;
use std::path::Path;

const DEFAULT_CLASS_COLOR: &str = "#1f77b4";
const DEFAULT_LITERAL_COLOR: &str = "#ff7f0e";
const DEFAULT_INSTANCE_COLOR: &str = "#e377c2";
// fallback injected into a per-class instance mapping that has no default
const INSTANCE_MAP_FALLBACK: &str = "y";

/// Resolved color policy for the three node kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorPolicy {
    pub class: Color,
    pub literal: Color,
    pub instance: Color,
    pub filled: bool,
}

impl Default for ColorPolicy {
    fn default() -> Self {
        ColorPolicy {
            class: Color::Single(DEFAULT_CLASS_COLOR.to_string()),
            literal: Color::Single(DEFAULT_LITERAL_COLOR.to_string()),
            instance: Color::Single(DEFAULT_INSTANCE_COLOR.to_string()),
            filled: true,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct RawColors {
    class: Option<ColorSpec>,
    literal: Option<ColorSpec>,
    instance: Option<ColorSpec>,
    filled: Option<bool>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct RawConfig {
    blacklist: Vec<String>,
    class_inference_in_object: Vec<String>,
    property_inference_in_object: Vec<String>,
    max_label_length: usize,
    label_property: Vec<String>,
    tooltip_property: Vec<String>,
    #[serde(with = "serde_regex")]
    bnode_regex: Vec<Regex>,
    prefixes: HashMap<String, String>,
    colors: RawColors,
}

#[derive(Debug)]
pub struct Config {
    blacklist: HashSet<String>,
    class_inference_in_object: HashSet<String>,
    property_inference_in_object: HashSet<String>,
    max_label_length: usize,
    label_property: HashSet<String>,
    tooltip_property: HashSet<String>,
    bnode_regex: Vec<Regex>,
    prefixes: HashMap<String, String>,
    colors: ColorPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            blacklist: HashSet::new(),
            class_inference_in_object: HashSet::new(),
            property_inference_in_object: HashSet::new(),
            max_label_length: 0,
            label_property: HashSet::new(),
            tooltip_property: HashSet::new(),
            bnode_regex: Vec::new(),
            prefixes: HashMap::new(),
            colors: ColorPolicy::default(),
        }
    }
}

// validate the entries as IRIs before storing them as plain strings
fn iri_set(values: Vec<String>, field: &str) -> Result<HashSet<String>> {
    values
        .into_iter()
        .map(|iri| {
            NamedNode::new(&iri)
                .map(|n| n.into_string())
                .with_context(|| format!("invalid IRI '{iri}' in '{field}'"))
        })
        .collect()
}

impl Config {
    pub fn from_file(file: &Path) -> Result<Self> {
        let file = std::fs::File::open(file)
            .with_context(|| format!("opening config file {}", file.display()))?;
        let reader = BufReader::new(file);
        let raw: RawConfig = serde_json::from_reader(reader)?;
        Self::from_raw(raw)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawConfig = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self> {
        let defaults = ColorPolicy::default();
        let class = match &raw.colors.class {
            Some(spec) => colors::resolve(spec, DEFAULT_CLASS_COLOR)?,
            None => defaults.class,
        };
        let literal = match &raw.colors.literal {
            Some(spec) => colors::resolve(spec, DEFAULT_LITERAL_COLOR)?,
            None => defaults.literal,
        };
        let instance = match &raw.colors.instance {
            Some(spec) => colors::resolve(spec, INSTANCE_MAP_FALLBACK)?,
            None => defaults.instance,
        };
        Ok(Config {
            blacklist: iri_set(raw.blacklist, "blacklist")?,
            class_inference_in_object: iri_set(
                raw.class_inference_in_object,
                "class_inference_in_object",
            )?,
            property_inference_in_object: iri_set(
                raw.property_inference_in_object,
                "property_inference_in_object",
            )?,
            max_label_length: raw.max_label_length,
            label_property: iri_set(raw.label_property, "label_property")?,
            tooltip_property: iri_set(raw.tooltip_property, "tooltip_property")?,
            bnode_regex: raw.bnode_regex,
            prefixes: raw.prefixes,
            colors: ColorPolicy {
                class,
                literal,
                instance,
                filled: raw.colors.filled.unwrap_or(true),
            },
        })
    }

    pub fn is_blacklisted(&self, iri: &str) -> bool {
        self.blacklist.contains(iri)
    }

    pub fn is_label_property(&self, iri: &str) -> bool {
        self.label_property.contains(iri)
    }

    pub fn is_tooltip_property(&self, iri: &str) -> bool {
        self.tooltip_property.contains(iri)
    }

    pub fn infers_class_in_object(&self, predicate: &str) -> bool {
        self.class_inference_in_object.contains(predicate)
    }

    // reserved: detected in configuration but not acted on downstream
    pub fn infers_property_in_object(&self, predicate: &str) -> bool {
        self.property_inference_in_object.contains(predicate)
    }

    pub fn max_label_length(&self) -> usize {
        self.max_label_length
    }

    /// True if the identifier matches any configured anonymous-node pattern.
    /// Patterns match from the start of the identifier.
    pub fn bnode_match(&self, iri: &str) -> bool {
        self.bnode_regex
            .iter()
            .any(|pattern| pattern.find(iri).is_some_and(|m| m.start() == 0))
    }

    pub fn prefixes(&self) -> &HashMap<String, String> {
        &self.prefixes
    }

    pub fn class_color(&self, class: &str) -> &str {
        self.colors.class.for_class(Some(class))
    }

    pub fn instance_color(&self, class: Option<&str>) -> &str {
        self.colors.instance.for_class(class)
    }

    pub fn literal_color(&self) -> &str {
        self.colors.literal.for_class(None)
    }

    /// True if the instance color policy is a per-class mapping with an entry
    /// for this class. Such classes get distinctive per-instance coloring, so
    /// the engine suppresses their redundant class node and is-a edge.
    pub fn instance_color_covers(&self, class: &str) -> bool {
        self.colors.instance.covers_class(class)
    }

    pub fn filled(&self) -> bool {
        self.colors.filled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_defaults() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config.max_label_length(), 0);
        assert!(!config.is_blacklisted("http://example.org/x"));
        assert!(config.filled());
        assert_eq!(config.class_color("http://example.org/A"), "#1f77b4");
        assert_eq!(config.instance_color(None), "#e377c2");
        assert_eq!(config.literal_color(), "#ff7f0e");
    }

    #[test]
    fn test_full_config() {
        let config = Config::from_json(
            r##"{
                "blacklist": ["http://example.org/hidden"],
                "class_inference_in_object": ["http://example.org/kind"],
                "max_label_length": 12,
                "label_property": ["http://www.w3.org/2000/01/rdf-schema#label"],
                "tooltip_property": ["http://purl.org/dc/terms/description"],
                "bnode_regex": ["^urn:anon:.*"],
                "prefixes": {"ex": "http://example.org/"},
                "colors": {
                    "class": "red",
                    "literal": "#ffcc00",
                    "instance": {"http://example.org/A": "b"},
                    "filled": false
                }
            }"##,
        )
        .unwrap();
        assert!(config.is_blacklisted("http://example.org/hidden"));
        assert!(config.infers_class_in_object("http://example.org/kind"));
        assert_eq!(config.max_label_length(), 12);
        assert!(config.is_label_property("http://www.w3.org/2000/01/rdf-schema#label"));
        assert!(config.is_tooltip_property("http://purl.org/dc/terms/description"));
        assert!(config.bnode_match("urn:anon:123"));
        assert!(!config.bnode_match("http://example.org/x"));
        // patterns are anchored to the start of the identifier
        let anchored = Config::from_json(r#"{"bnode_regex": ["anon"]}"#).unwrap();
        assert!(anchored.bnode_match("anon:1"));
        assert!(!anchored.bnode_match("urn:anon:1"));
        assert!(!config.filled());
        assert_eq!(config.class_color("anything"), "#ff0000");
        assert_eq!(config.literal_color(), "#ffcc00");
        // per-class instance mapping: mapped class, unmapped class falls back
        // to the synthesized yellow default
        assert_eq!(
            config.instance_color(Some("http://example.org/A")),
            "#0000ff"
        );
        assert_eq!(
            config.instance_color(Some("http://example.org/B")),
            "#ffff00"
        );
        assert!(config.instance_color_covers("http://example.org/A"));
        assert!(!config.instance_color_covers("http://example.org/B"));
    }

    #[test]
    fn test_unknown_color_is_fatal_at_load() {
        let result = Config::from_json(r#"{"colors": {"class": "bogus"}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_iri_rejected() {
        let result = Config::from_json(r#"{"blacklist": ["not an iri"]}"#);
        assert!(result.is_err());
    }
}
