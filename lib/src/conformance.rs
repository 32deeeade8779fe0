//! Validates classes and predicates discovered in the data against a
//! reference ontology. The checker precomputes the transitive closures of
//! declared classes and properties, and warns at most once per offending
//! identifier: after warning, the offender is inserted into the closure so
//! later occurrences stay silent. Warnings never change the produced graph.

use crate::consts::{
    COMMON_NAMESPACES, DATATYPE_PROPERTY, OBJECT_PROPERTY, OWL_CLASS, SUB_CLASS_OF,
    SUB_PROPERTY_OF, TYPE,
};
use crate::graph::subject_term;
use crate::namespaces::split_iri;
use log::warn;
use oxigraph::model::{Graph, NamedNodeRef, Term};
use std::collections::HashSet;

#[derive(Debug)]
pub struct ConformanceChecker {
    classes: HashSet<Term>,
    properties: HashSet<String>,
}

impl ConformanceChecker {
    /// Builds the checker from a reference ontology graph. Classes are
    /// everything declared `a owl:Class` plus everything reaching a declared
    /// class through one or more `rdfs:subClassOf` steps; properties are the
    /// declared datatype/object properties plus their `rdfs:subPropertyOf`
    /// descendants.
    pub fn from_schema(schema: &Graph) -> Self {
        let mut classes: HashSet<Term> = schema
            .subjects_for_predicate_object(TYPE, OWL_CLASS)
            .map(subject_term)
            .collect();
        close_over(schema, SUB_CLASS_OF, &mut classes);

        let mut declared: HashSet<Term> = HashSet::new();
        for kind in [DATATYPE_PROPERTY, OBJECT_PROPERTY] {
            declared.extend(
                schema
                    .subjects_for_predicate_object(TYPE, kind)
                    .map(subject_term),
            );
        }
        close_over(schema, SUB_PROPERTY_OF, &mut declared);
        let properties = declared
            .into_iter()
            .filter_map(|term| match term {
                Term::NamedNode(n) => Some(n.into_string()),
                _ => None,
            })
            .collect();

        ConformanceChecker {
            classes,
            properties,
        }
    }

    /// Checks a class discovered in the data. `known` is the working class
    /// set: a class already registered there was either checked before or is
    /// defined by the data itself. Returns whether a warning was emitted.
    pub fn check_class(&mut self, class: &Term, known: &HashSet<Term>) -> bool {
        if known.contains(class) || self.classes.contains(class) {
            return false;
        }
        warn!("Class {class} doesn't exist in the ontology");
        // only bark once
        self.classes.insert(class.clone());
        true
    }

    /// Checks an edge predicate. Predicates from the well-known namespaces
    /// are assumed to exist and are never reported. Returns whether a warning
    /// was emitted.
    pub fn check_property(&mut self, predicate: NamedNodeRef) -> bool {
        if self.properties.contains(predicate.as_str()) {
            return false;
        }
        let (namespace, _) = split_iri(predicate.as_str());
        if COMMON_NAMESPACES.contains(&namespace) {
            return false;
        }
        warn!("Property {predicate} doesn't exist in the ontology");
        // only bark once
        self.properties.insert(predicate.as_str().to_string());
        true
    }
}

/// Fixed-point expansion: adds every subject reaching a member of `set`
/// through one or more steps of `predicate`.
fn close_over(graph: &Graph, predicate: NamedNodeRef, set: &mut HashSet<Term>) {
    loop {
        let mut additions: Vec<Term> = Vec::new();
        for triple in graph.triples_for_predicate(predicate) {
            let subject = subject_term(triple.subject);
            if set.contains(&triple.object.into_owned()) && !set.contains(&subject) {
                additions.push(subject);
            }
        }
        if additions.is_empty() {
            break;
        }
        set.extend(additions);
    }
}
