//! Prefix handling for display labels. Maps namespace IRIs to short prefixes
//! so node and edge labels read `foaf:name` instead of a full IRI.

use std::collections::HashMap;

/// Splits an IRI after the last `#` or `/` into (namespace, local name).
/// The namespace keeps its trailing separator. IRIs without a separator are
/// all local name.
pub fn split_iri(iri: &str) -> (&str, &str) {
    match iri.rfind(|c| c == '#' || c == '/') {
        Some(pos) => (&iri[..=pos], &iri[pos + 1..]),
        None => ("", iri),
    }
}

#[derive(Debug, Clone)]
pub struct PrefixMap {
    by_namespace: HashMap<String, String>,
}

impl Default for PrefixMap {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl PrefixMap {
    pub fn empty() -> Self {
        PrefixMap {
            by_namespace: HashMap::new(),
        }
    }

    /// A prefix map seeded with the usual vocabularies.
    pub fn with_defaults() -> Self {
        let mut map = Self::empty();
        map.insert("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#");
        map.insert("rdfs", "http://www.w3.org/2000/01/rdf-schema#");
        map.insert("owl", "http://www.w3.org/2002/07/owl#");
        map.insert("xsd", "http://www.w3.org/2001/XMLSchema#");
        map.insert("skos", "http://www.w3.org/2004/02/skos/core#");
        map.insert("foaf", "http://xmlns.com/foaf/0.1/");
        map.insert("doap", "http://usefulinc.com/ns/doap#");
        map.insert("schema", "http://schema.org/");
        map.insert("dc", "http://purl.org/dc/elements/1.1/");
        map.insert("dcterms", "http://purl.org/dc/terms/");
        map
    }

    pub fn insert(&mut self, prefix: &str, namespace: &str) {
        self.by_namespace
            .insert(namespace.to_string(), prefix.to_string());
    }

    pub fn extend<'a, I>(&mut self, declarations: I)
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        for (prefix, namespace) in declarations {
            self.insert(prefix, namespace);
        }
    }

    /// Resolves an IRI into an optional registered prefix and a local name.
    pub fn qname<'a>(&self, iri: &'a str) -> (Option<&str>, &'a str) {
        let (namespace, local) = split_iri(iri);
        (
            self.by_namespace.get(namespace).map(String::as_str),
            local,
        )
    }
}
