//! Resolves the color section of a configuration file into concrete hex
//! colors. A color may be given as a hex string, as one of eight named hues
//! (full name or single-letter alias), or as a per-class mapping with an
//! optional `default` entry.

use crate::errors::UndefinedColorError;
use lazy_static::lazy_static;
use serde::Deserialize;
use std::collections::HashMap;

lazy_static! {
    static ref COLOR_NAMES: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("y", "#ffff00");
        m.insert("yellow", "#ffff00");
        m.insert("m", "#ff00ff");
        m.insert("magenta", "#ff00ff");
        m.insert("c", "#00ffff");
        m.insert("cyan", "#00ffff");
        m.insert("r", "#ff0000");
        m.insert("red", "#ff0000");
        m.insert("g", "#00ff00");
        m.insert("green", "#00ff00");
        m.insert("b", "#0000ff");
        m.insert("blue", "#0000ff");
        m.insert("w", "#ffffff");
        m.insert("white", "#ffffff");
        m.insert("k", "#000000");
        m.insert("black", "#000000");
        m
    };
}

/// A color as written in the configuration file, before resolution.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Single(String),
    PerClass(HashMap<String, String>),
}

/// A fully resolved color: either one concrete color, or a per-class mapping
/// that always carries a default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Color {
    Single(String),
    PerClass {
        classes: HashMap<String, String>,
        default: String,
    },
}

impl Color {
    /// Looks up the color for a class. A single color applies to every class;
    /// a per-class mapping falls back to its default for unmapped classes
    /// (including instances whose class is unknown).
    pub fn for_class(&self, class: Option<&str>) -> &str {
        match self {
            Color::Single(c) => c,
            Color::PerClass { classes, default } => match class {
                Some(key) => classes.get(key).map(String::as_str).unwrap_or(default),
                None => default,
            },
        }
    }

    /// True if this is a per-class mapping with a dedicated entry for `class`.
    pub fn covers_class(&self, class: &str) -> bool {
        match self {
            Color::Single(_) => false,
            Color::PerClass { classes, .. } => classes.contains_key(class),
        }
    }
}

/// Resolves a color token. Hex strings pass through unchanged; anything else
/// must be one of the recognized color names. An unknown token is a
/// configuration error, never silently defaulted.
fn resolve_token(token: &str) -> Result<String, UndefinedColorError> {
    if token.starts_with('#') {
        return Ok(token.to_string());
    }
    COLOR_NAMES
        .get(token)
        .map(|c| c.to_string())
        .ok_or_else(|| UndefinedColorError {
            token: token.to_string(),
        })
}

/// Resolves a color specification. Per-class mappings resolve every value and
/// synthesize a `default` entry from `fallback` when the mapping has none.
pub fn resolve(spec: &ColorSpec, fallback: &str) -> Result<Color, UndefinedColorError> {
    match spec {
        ColorSpec::Single(token) => Ok(Color::Single(resolve_token(token)?)),
        ColorSpec::PerClass(map) => {
            let mut classes = HashMap::new();
            let mut default = None;
            for (class, token) in map {
                if class == "default" {
                    default = Some(resolve_token(token)?);
                } else {
                    classes.insert(class.clone(), resolve_token(token)?);
                }
            }
            let default = match default {
                Some(d) => d,
                None => resolve_token(fallback)?,
            };
            Ok(Color::PerClass { classes, default })
        }
    }
}
