//! A minimal graph-element model for dot output: an identifier plus an
//! ordered attribute list. Attribute order is part of the reproducible
//! output contract, so attributes live in an insertion-ordered list rather
//! than a map.

/// A dot node. The identifier is kept quoted; `to_draw` renders the
/// `"id" [k="v" ...]` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: String,
    attrs: Vec<(&'static str, String)>,
}

impl Node {
    pub fn new(id: &str) -> Self {
        Node {
            id: format!("\"{id}\""),
            attrs: Vec::new(),
        }
    }

    /// Sets an attribute, replacing an existing value in place so the
    /// original attribute position is kept.
    pub fn set(&mut self, key: &'static str, value: impl Into<String>) {
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.attrs.push((key, value)),
        }
    }

    /// Sets both the outline and fill color.
    pub fn set_color(&mut self, color: &str) {
        self.set("fillcolor", color);
        self.set("color", color);
    }

    pub fn to_draw(&self) -> String {
        if self.attrs.is_empty() {
            return self.id.clone();
        }
        let attrs = self
            .attrs
            .iter()
            .map(|(k, v)| format!("{k}=\"{v}\""))
            .collect::<Vec<_>>()
            .join(" ");
        format!("{} [{}]", self.id, attrs)
    }
}
