//! Defines constant NamedNodeRefs for the RDF, RDFS and OWL terms the
//! classification engine recognizes, and the well-known namespaces that are
//! exempt from ontology conformance warnings.

use oxigraph::model::NamedNodeRef;

pub const TYPE: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/1999/02/22-rdf-syntax-ns#type");
pub const OWL_CLASS: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#Class");
pub const SUB_CLASS_OF: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/2000/01/rdf-schema#subClassOf");
pub const SUB_PROPERTY_OF: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/2000/01/rdf-schema#subPropertyOf");
pub const DATATYPE_PROPERTY: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#DatatypeProperty");
pub const OBJECT_PROPERTY: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#ObjectProperty");

/// Namespaces whose properties are assumed to exist everywhere. Predicates
/// from these vocabularies never trigger a conformance warning.
pub const COMMON_NAMESPACES: [&str; 7] = [
    "http://www.w3.org/1999/02/22-rdf-syntax-ns#",
    "http://www.w3.org/2000/01/rdf-schema#",
    "http://www.w3.org/2004/02/skos/core#",
    "http://schema.org/",
    "http://www.w3.org/2001/XMLSchema#",
    "http://usefulinc.com/ns/doap#",
    "http://xmlns.com/foaf/0.1/",
];
