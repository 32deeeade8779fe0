//! ontoviz converts RDF graphs into Graphviz dot descriptions. One pass over
//! the statements classifies each triple as a class, an instance, a
//! literal-valued attribute, a label, a tooltip or a plain edge; the result
//! renders as a directed graph with configurable colors, labels and
//! blacklisting, optionally validated against a reference ontology.

pub mod colors;
pub mod config;
pub mod conformance;
pub mod consts;
pub mod element;
pub mod errors;
pub mod graph;
pub mod io;
pub mod namespaces;
pub mod render;

pub use crate::config::Config;
pub use crate::errors::UndefinedColorError;
pub use crate::graph::OntologyGraph;
pub use crate::render::DotRenderer;
