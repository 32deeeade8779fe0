use ontoviz::consts::{OWL_CLASS, TYPE};
use ontoviz::{Config, OntologyGraph};
use oxigraph::model::{BlankNode, Graph, Literal, NamedNode, Triple};

fn node(iri: &str) -> NamedNode {
    NamedNode::new(iri).unwrap()
}

fn lit(value: &str) -> Literal {
    Literal::new_simple_literal(value)
}

fn label_config() -> Config {
    Config::from_json(r#"{"label_property": ["http://www.w3.org/2000/01/rdf-schema#label"]}"#)
        .unwrap()
}

/// A is a class, B an instance of A labeled "Bee".
fn abc_graph() -> Graph {
    let mut g = Graph::new();
    let a = node("http://example.org/A");
    let b = node("http://example.org/B");
    g.insert(&Triple::new(
        a.clone(),
        TYPE.into_owned(),
        OWL_CLASS.into_owned(),
    ));
    g.insert(&Triple::new(b.clone(), TYPE.into_owned(), a));
    g.insert(&Triple::new(
        b,
        node("http://www.w3.org/2000/01/rdf-schema#label"),
        lit("Bee"),
    ));
    g
}

#[test]
fn test_end_to_end_scenario() {
    let graph = OntologyGraph::new(&abc_graph(), label_config(), None);
    let dot = graph.generate();

    assert!(dot.starts_with("digraph G {\n  rankdir=BT\n"));
    assert!(dot.ends_with("\n}"));
    // one class node A with the default class color and its short label
    assert!(dot.contains(
        "\"http://example.org/A\" [fillcolor=\"#1f77b4\" color=\"#1f77b4\" label=\"A\"]"
    ));
    // one instance node B labeled by its explicit label statement
    assert!(dot.contains(
        "\"http://example.org/B\" [fillcolor=\"#e377c2\" color=\"#e377c2\" label=\"Bee\"]"
    ));
    // one is-a edge from B to A
    assert!(dot.contains(
        "  \"http://example.org/B\" -> \"http://example.org/A\" [label=\"a\"]"
    ));
}

#[test]
fn test_idempotent_output() {
    let g = abc_graph();
    let first = OntologyGraph::new(&g, label_config(), None).generate();
    let second = OntologyGraph::new(&g, label_config(), None).generate();
    assert_eq!(first, second);
}

#[test]
fn test_filled_flag_controls_node_style() {
    let g = abc_graph();
    let filled = OntologyGraph::new(&g, Config::default(), None).generate();
    assert!(filled.contains("  node[style=\"filled\" height=.3]"));

    let config = Config::from_json(r#"{"colors": {"filled": false}}"#).unwrap();
    let unfilled = OntologyGraph::new(&g, config, None).generate();
    assert!(unfilled.contains("  node[height=.3]"));
    assert!(!unfilled.contains("style=\"filled\""));
}

#[test]
fn test_label_truncation() {
    let config = Config::from_json(
        r#"{"max_label_length": 10, "prefixes": {"example": "http://example.org/"}}"#,
    )
    .unwrap();
    let mut g = Graph::new();
    g.insert(&Triple::new(
        node("http://example.org/B"),
        TYPE.into_owned(),
        node("http://example.org/longLocalName"),
    ));
    let dot = OntologyGraph::new(&g, config, None).generate();
    // "example:longLocalName" exceeds 10 characters and is truncated to a
    // 10-character string ending in an ellipsis
    assert!(dot.contains("label=\"example...\""));

    // edge predicate labels are never truncated
    let config = Config::from_json(
        r#"{"max_label_length": 10, "prefixes": {"example": "http://example.org/"}}"#,
    )
    .unwrap();
    let mut g = Graph::new();
    g.insert(&Triple::new(
        node("http://example.org/x"),
        node("http://example.org/veryLongPredicateName"),
        node("http://example.org/y"),
    ));
    let dot = OntologyGraph::new(&g, config, None).generate();
    assert!(dot.contains("[label=\"example:veryLongPredicateName\"]"));
}

#[test]
fn test_literal_node_is_wrapped_rect() {
    let config = Config::from_json(r#"{"max_label_length": 10}"#).unwrap();
    let mut g = Graph::new();
    g.insert(&Triple::new(
        node("http://example.org/x"),
        node("http://example.org/comment"),
        lit("the quick brown fox jumps"),
    ));
    let dot = OntologyGraph::new(&g, config, None).generate();
    assert!(dot.contains(
        "\"literal_0\" [fillcolor=\"#ff7f0e\" color=\"#ff7f0e\" \
         label=\"the quick\\nbrown fox\\n jumps  \" shape=\"rect\"]"
    ));
    assert!(dot.contains("\"http://example.org/x\" -> \"literal_0\""));
}

#[test]
fn test_blank_and_anonymous_nodes_render_as_circles() {
    let mut g = Graph::new();
    let b = BlankNode::default();
    g.insert(&Triple::new(
        b.clone(),
        TYPE.into_owned(),
        node("http://example.org/A"),
    ));
    let dot = OntologyGraph::new(&g, Config::default(), None).generate();
    assert!(dot.contains(&format!(
        "\"{}\" [fillcolor=\"#e377c2\" color=\"#e377c2\" label=\"\" shape=\"circle\"]",
        b.as_str()
    )));

    // a named node matching a configured pattern also renders anonymously,
    // keeping its identity for edge wiring
    let config = Config::from_json(r#"{"bnode_regex": ["^http://example.org/anon/.*"]}"#).unwrap();
    let mut g = Graph::new();
    g.insert(&Triple::new(
        node("http://example.org/anon/1"),
        TYPE.into_owned(),
        node("http://example.org/A"),
    ));
    let dot = OntologyGraph::new(&g, config, None).generate();
    assert!(dot.contains(
        "\"http://example.org/anon/1\" [fillcolor=\"#e377c2\" color=\"#e377c2\" \
         label=\"\" shape=\"circle\"]"
    ));
    assert!(dot.contains(
        "  \"http://example.org/anon/1\" -> \"http://example.org/A\" [label=\"a\"]"
    ));
}

#[test]
fn test_tooltip_attribute_precedes_label() {
    let config = Config::from_json(
        r#"{"tooltip_property": ["http://example.org/note"]}"#,
    )
    .unwrap();
    let mut g = Graph::new();
    let s = node("http://example.org/s");
    g.insert(&Triple::new(
        s.clone(),
        TYPE.into_owned(),
        node("http://example.org/A"),
    ));
    g.insert(&Triple::new(s, node("http://example.org/note"), lit("hello")));
    let dot = OntologyGraph::new(&g, config, None).generate();
    assert!(dot.contains(
        "\"http://example.org/s\" [fillcolor=\"#e377c2\" color=\"#e377c2\" \
         tooltip=\"hello\" label=\"s\"]"
    ));
}

#[test]
fn test_per_class_instance_colors_in_output() {
    let config = Config::from_json(
        r#"{"colors": {"instance": {
            "http://example.org/A": "red",
            "default": "blue"
        }}}"#,
    )
    .unwrap();
    let mut g = Graph::new();
    g.insert(&Triple::new(
        node("http://example.org/b"),
        TYPE.into_owned(),
        node("http://example.org/A"),
    ));
    g.insert(&Triple::new(
        node("http://example.org/c"),
        TYPE.into_owned(),
        node("http://example.org/Other"),
    ));
    let dot = OntologyGraph::new(&g, config, None).generate();
    // b's class has a dedicated color; c falls back to the mapping default
    assert!(dot.contains(
        "\"http://example.org/b\" [fillcolor=\"#ff0000\" color=\"#ff0000\" label=\"b\"]"
    ));
    assert!(dot.contains(
        "\"http://example.org/c\" [fillcolor=\"#0000ff\" color=\"#0000ff\" label=\"c\"]"
    ));
    // A is suppressed entirely: no class node, no is-a edge
    assert!(!dot.contains("\"http://example.org/A\" ["));
    assert!(!dot.contains("-> \"http://example.org/A\""));
    // Other is not in the mapping, so its class node and edge survive
    assert!(dot.contains("\"http://example.org/Other\" ["));
    assert!(dot.contains("-> \"http://example.org/Other\""));
}

#[test]
fn test_write_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("ontology.dot");
    let graph = OntologyGraph::new(&abc_graph(), label_config(), None);
    graph.write_file(&out).unwrap();
    let written = std::fs::read_to_string(&out).unwrap();
    assert_eq!(written, graph.generate());
}
