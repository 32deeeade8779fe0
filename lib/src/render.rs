//! Renders the classified sets into Graphviz dot text. Node labels come from
//! an explicit label statement when one exists, otherwise from the
//! prefix-shortened IRI; literal node labels go through a greedy line-wrap.
//! Output lines are sorted within each group so the same input always yields
//! byte-identical text.

use crate::consts::TYPE;
use crate::element::Node;
use crate::graph::{term_str, OntologyGraph};
use crate::namespaces::PrefixMap;
use oxigraph::model::{NamedNode, Term};

pub struct DotRenderer<'a> {
    graph: &'a OntologyGraph,
    prefixes: PrefixMap,
}

impl<'a> DotRenderer<'a> {
    pub fn new(graph: &'a OntologyGraph) -> Self {
        let mut prefixes = PrefixMap::with_defaults();
        prefixes.extend(graph.config().prefixes());
        DotRenderer { graph, prefixes }
    }

    pub fn render(&self) -> String {
        let (nodes, edges) = self.convert();
        generate_dotstring(nodes, edges, self.graph.config().filled())
    }

    /// Builds one dot line per class, instance, literal and edge, in that
    /// group order, each group sorted.
    fn convert(&self) -> (Vec<String>, Vec<String>) {
        let config = self.graph.config();
        let mut node_lines = Vec::new();

        let mut classes: Vec<&Term> = self.graph.classes().iter().collect();
        classes.sort_by(|a, b| term_str(a).cmp(term_str(b)));
        for class in classes {
            node_lines.push(self.resource_node(class, config.class_color(term_str(class))));
        }

        let mut instances: Vec<(&Term, &Option<Term>)> = self.graph.instances().iter().collect();
        instances.sort_by(|a, b| term_str(a.0).cmp(term_str(b.0)));
        for (instance, class) in instances {
            let color = config.instance_color(class.as_ref().map(term_str));
            node_lines.push(self.resource_node(instance, color));
        }

        let mut literals: Vec<&(String, oxigraph::model::Literal)> =
            self.graph.literals().iter().collect();
        literals.sort_by(|a, b| a.0.cmp(&b.0));
        for (id, literal) in literals {
            let mut node = Node::new(id);
            node.set_color(config.literal_color());
            node.set("label", wrap_text(literal.value(), config.max_label_length()));
            node.set("shape", "rect");
            node_lines.push(node.to_draw());
        }

        let mut edge_lines: Vec<String> = self
            .graph
            .edges()
            .iter()
            .map(|(s, p, target)| {
                format!(
                    "  \"{}\" -> \"{}\" [label=\"{}\"]",
                    s,
                    target,
                    self.predicate_label(p)
                )
            })
            .collect();
        edge_lines.sort();

        (node_lines, edge_lines)
    }

    /// A class or instance node. Blank nodes and identifiers matching a
    /// configured anonymous pattern keep their identity for edge wiring but
    /// render as an unlabeled circle.
    fn resource_node(&self, term: &Term, color: &str) -> String {
        let config = self.graph.config();
        let id = term_str(term);
        let mut node = Node::new(id);
        node.set_color(color);
        if let Some(tips) = self.graph.tooltips().get(term) {
            if !tips.is_empty() {
                node.set("tooltip", tips.join(" "));
            }
        }
        if matches!(term, Term::BlankNode(_)) || config.bnode_match(id) {
            node.set("label", "");
            node.set("shape", "circle");
        } else {
            node.set("label", self.compute_label(term, config.max_label_length()));
        }
        node.to_draw()
    }

    /// Edge labels are never truncated; `rdf:type` renders as `a`.
    fn predicate_label(&self, predicate: &NamedNode) -> String {
        if predicate.as_ref() == TYPE {
            return "a".to_string();
        }
        self.compute_label(&Term::from(predicate.clone()), 0)
    }

    /// The display label for a resource: an explicit label statement wins,
    /// otherwise the prefix-shortened IRI. A nonzero `max_len` truncates
    /// with a trailing ellipsis.
    pub fn compute_label(&self, term: &Term, max_len: usize) -> String {
        let label = match self.graph.labels().get(term) {
            Some(value) => term_str(value).to_string(),
            None => match term {
                Term::NamedNode(n) => {
                    let (prefix, local) = self.prefixes.qname(n.as_str());
                    match prefix {
                        Some(prefix) => format!("{prefix}:{local}"),
                        None => local.to_string(),
                    }
                }
                _ => term_str(term).to_string(),
            },
        };
        truncate_label(label, max_len)
    }
}

fn truncate_label(label: String, max_len: usize) -> String {
    if max_len == 0 || label.chars().count() <= max_len {
        return label;
    }
    let mut truncated: String = label.chars().take(max_len.saturating_sub(3)).collect();
    truncated.push_str("...");
    truncated
}

/// Greedy justified wrap for literal labels. A line is flushed once the
/// letters placed so far plus the word count would exceed `max_width`; the
/// final line is centered against the widest letter count seen among the
/// flushed lines. Lines join with a literal `\n` for dot. The threshold
/// arithmetic and the historical-max centering are load-bearing for
/// downstream consumers; do not rebalance them.
pub fn wrap_text(value: &str, max_width: usize) -> String {
    let escaped = value.replace('"', "\\\"");
    let mut lines: Vec<String> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut letters = 0usize;
    let mut widest = 0usize;
    for word in escaped.split_whitespace() {
        if letters + word.chars().count() + current.len() > max_width {
            lines.push(current.join(" "));
            widest = widest.max(letters);
            current.clear();
            letters = 0;
        }
        current.push(word);
        letters += word.chars().count();
    }
    lines.push(center(&current.join(" "), widest));
    lines.join("\\n")
}

// str.center semantics: extra padding goes left only when both the margin
// and the width are odd
fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if width <= len {
        return text.to_string();
    }
    let margin = width - len;
    let left = margin / 2 + (margin & width & 1);
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(margin - left))
}

/// Assembles the final digraph text: header, default node style, nodes,
/// edges, closing brace.
pub fn generate_dotstring(nodes: Vec<String>, edges: Vec<String>, fill: bool) -> String {
    let mut dot = vec!["digraph G {".to_string(), "  rankdir=BT".to_string()];
    if fill {
        dot.push("  node[style=\"filled\" height=.3]".to_string());
    } else {
        dot.push("  node[height=.3]".to_string());
    }
    dot.extend(nodes);
    dot.extend(edges);
    dot.push("}".to_string());
    dot.join("\n")
}
