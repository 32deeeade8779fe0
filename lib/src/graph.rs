//! The classification engine. `OntologyGraph` walks every statement of the
//! input graph exactly once and sorts it into classes, instances, edges,
//! labels, tooltips and literal nodes, consulting the configuration for
//! blacklisting and inference rules and the conformance checker for schema
//! validation. The collections are built during construction and read-only
//! afterwards; iteration order over the input graph is the order contract
//! for label overwrites and tooltip appends.

use crate::config::Config;
use crate::conformance::ConformanceChecker;
use crate::consts::{OWL_CLASS, TYPE};
use crate::io;
use crate::render::DotRenderer;
use anyhow::{Context, Result};
use log::debug;
use oxigraph::io::RdfFormat;
use oxigraph::model::{
    Graph, Literal, NamedNode, NamedNodeRef, NamedOrBlankNodeRef, Term, TermRef, TripleRef,
};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

/// Converts a triple subject into an owned `Term`.
pub fn subject_term(subject: NamedOrBlankNodeRef) -> Term {
    match subject {
        NamedOrBlankNodeRef::NamedNode(n) => n.into_owned().into(),
        NamedOrBlankNodeRef::BlankNode(b) => b.into_owned().into(),
    }
}

/// The bare text of a term: the IRI of a named node, the id of a blank node,
/// the lexical value of a literal. This is the identifier used for dot nodes.
pub fn term_str(term: &Term) -> &str {
    match term {
        Term::NamedNode(n) => n.as_str(),
        Term::BlankNode(b) => b.as_str(),
        Term::Literal(l) => l.value(),
        _ => "",
    }
}

fn term_ref_str(term: TermRef) -> String {
    match term {
        TermRef::NamedNode(n) => n.as_str().to_string(),
        TermRef::BlankNode(b) => b.as_str().to_string(),
        TermRef::Literal(l) => l.value().to_string(),
        _ => String::new(),
    }
}

/// An edge to draw: subject node id, predicate, target node id. The target
/// is either a resource identifier or the synthetic id of a literal node.
pub type Edge = (String, NamedNode, String);

pub struct OntologyGraph {
    config: Config,
    checker: Option<ConformanceChecker>,
    classes: HashSet<Term>,
    instances: HashMap<Term, Option<Term>>,
    edges: HashSet<Edge>,
    labels: HashMap<Term, Term>,
    tooltips: HashMap<Term, Vec<String>>,
    literals: Vec<(String, Literal)>,
    literal_counter: usize,
}

impl OntologyGraph {
    /// Classifies every statement of `data` in one pass. When `schema` is
    /// given, newly discovered classes and edge predicates are validated
    /// against it.
    pub fn new(data: &Graph, config: Config, schema: Option<&Graph>) -> Self {
        let mut graph = OntologyGraph {
            config,
            checker: schema.map(ConformanceChecker::from_schema),
            classes: HashSet::new(),
            instances: HashMap::new(),
            edges: HashSet::new(),
            labels: HashMap::new(),
            tooltips: HashMap::new(),
            literals: Vec::new(),
            literal_counter: 0,
        };
        for triple in data.iter() {
            graph.classify(triple);
        }
        debug!(
            "classified {} triples into {} classes, {} instances, {} edges, {} literals",
            data.len(),
            graph.classes.len(),
            graph.instances.len(),
            graph.edges.len(),
            graph.literals.len()
        );
        graph
    }

    /// Reads the input files (merging them into one graph) and the optional
    /// reference ontology, then classifies.
    pub fn from_files(
        files: &[PathBuf],
        format: Option<RdfFormat>,
        config: Config,
        ontology: Option<&Path>,
    ) -> Result<Self> {
        let data = io::read_files(files, format)?;
        let schema = match ontology {
            Some(path) => Some(io::read_file(path, None)?),
            None => None,
        };
        Ok(Self::new(&data, config, schema.as_ref()))
    }

    fn classify(&mut self, triple: TripleRef) {
        let s = triple.subject;
        let p = triple.predicate;
        let o = triple.object;

        // a blacklisted subject, predicate or object discards the whole
        // statement with no side effect of any kind
        let s_str = match s {
            NamedOrBlankNodeRef::NamedNode(n) => n.as_str(),
            NamedOrBlankNodeRef::BlankNode(b) => b.as_str(),
        };
        if self.config.is_blacklisted(s_str) || self.config.is_blacklisted(p.as_str()) {
            return;
        }
        if let TermRef::NamedNode(n) = o {
            if self.config.is_blacklisted(n.as_str()) {
                return;
            }
        }

        let s_term = subject_term(s);
        if p == TYPE {
            match o {
                TermRef::NamedNode(n) if n == OWL_CLASS => {
                    self.add_class(s_term);
                }
                _ => {
                    let class = o.into_owned();
                    self.instances.insert(s_term.clone(), Some(class.clone()));
                    // a class with dedicated per-instance coloring gets no
                    // redundant class node or is-a edge
                    if !self.config.instance_color_covers(term_str(&class)) {
                        let target = term_str(&class).to_string();
                        self.add_class(class);
                        self.add_edge(&s_term, p, target);
                    }
                }
            }
            return;
        }
        if self.config.is_label_property(p.as_str()) {
            // last writer wins
            self.labels.insert(s_term, o.into_owned());
            return;
        }
        if self.config.is_tooltip_property(p.as_str()) {
            self.tooltips.entry(s_term).or_default().push(term_ref_str(o));
            return;
        }
        if let TermRef::Literal(literal) = o {
            // every literal occurrence gets a fresh node: a literal has no
            // stable identity to deduplicate on
            let id = format!("literal_{}", self.literal_counter);
            self.literal_counter += 1;
            self.literals.push((id.clone(), literal.into_owned()));
            self.add_edge(&s_term, p, id);
            return;
        }
        let o_term = o.into_owned();
        if self.config.infers_class_in_object(p.as_str()) {
            self.add_class(o_term.clone());
        }
        // register the object as an instance of an unknown class, never
        // downgrading a class that is already known
        self.instances.entry(o_term.clone()).or_insert(None);
        self.add_edge(&s_term, p, term_str(&o_term).to_string());
    }

    fn add_class(&mut self, class: Term) {
        if let Some(checker) = self.checker.as_mut() {
            checker.check_class(&class, &self.classes);
        }
        self.classes.insert(class);
    }

    fn add_edge(&mut self, subject: &Term, predicate: NamedNodeRef, target: String) {
        if let Some(checker) = self.checker.as_mut() {
            checker.check_property(predicate);
        }
        self.edges
            .insert((term_str(subject).to_string(), predicate.into_owned(), target));
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn classes(&self) -> &HashSet<Term> {
        &self.classes
    }

    pub fn instances(&self) -> &HashMap<Term, Option<Term>> {
        &self.instances
    }

    pub fn edges(&self) -> &HashSet<Edge> {
        &self.edges
    }

    pub fn labels(&self) -> &HashMap<Term, Term> {
        &self.labels
    }

    pub fn tooltips(&self) -> &HashMap<Term, Vec<String>> {
        &self.tooltips
    }

    pub fn literals(&self) -> &[(String, Literal)] {
        &self.literals
    }

    /// Renders the classified sets into dot text.
    pub fn generate(&self) -> String {
        DotRenderer::new(self).render()
    }

    /// Renders and writes the dot text to a file.
    pub fn write_file(&self, file: &Path) -> Result<()> {
        std::fs::write(file, self.generate())
            .with_context(|| format!("writing dot file {}", file.display()))
    }
}
