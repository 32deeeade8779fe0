//! Reading RDF input files into an in-memory graph and writing the generated
//! dot text. The parse format is sniffed from the file extension unless an
//! explicit format is given; Turtle is the default.

use anyhow::{Context, Result};
use log::debug;
use oxigraph::io::{RdfFormat, RdfParser};
use oxigraph::model::{Graph, Triple};
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Maps a format name or file extension to a parse format.
pub fn rdf_format(name: &str) -> Option<RdfFormat> {
    match name {
        "ttl" | "turtle" => Some(RdfFormat::Turtle),
        "n3" => Some(RdfFormat::Turtle),
        "nt" | "ntriples" => Some(RdfFormat::NTriples),
        "xml" | "rdf" => Some(RdfFormat::RdfXml),
        _ => None,
    }
}

pub fn read_file(file: &Path, format: Option<RdfFormat>) -> Result<Graph> {
    debug!("Reading file: {}", file.display());
    let handle = std::fs::File::open(file)
        .with_context(|| format!("opening input file {}", file.display()))?;
    let content = BufReader::new(handle);
    let format = format.or_else(|| {
        file.extension()
            .and_then(|ext| ext.to_str())
            .and_then(rdf_format)
    });
    let parser = RdfParser::from_format(format.unwrap_or(RdfFormat::Turtle));
    let mut graph = Graph::new();
    for quad in parser.for_reader(content) {
        let quad = quad.with_context(|| format!("parsing {}", file.display()))?;
        let triple = Triple::new(quad.subject, quad.predicate, quad.object);
        graph.insert(&triple);
    }
    Ok(graph)
}

/// Reads several files into one merged graph (set-union semantics).
pub fn read_files(files: &[PathBuf], format: Option<RdfFormat>) -> Result<Graph> {
    let mut merged = Graph::new();
    for file in files {
        let graph = read_file(file, format)?;
        for triple in graph.iter() {
            merged.insert(triple);
        }
    }
    Ok(merged)
}

pub fn write_file(file: &Path, dot: &str) -> Result<()> {
    debug!("Writing dot to file: {}", file.display());
    std::fs::write(file, dot).with_context(|| format!("writing dot file {}", file.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_rdf_format() {
        assert_eq!(rdf_format("ttl"), Some(RdfFormat::Turtle));
        assert_eq!(rdf_format("nt"), Some(RdfFormat::NTriples));
        assert_eq!(rdf_format("xml"), Some(RdfFormat::RdfXml));
        assert_eq!(rdf_format("bogus"), None);
    }

    #[test]
    fn test_read_file_and_merge() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.ttl");
        let b = dir.path().join("b.ttl");
        let mut f = std::fs::File::create(&a).unwrap();
        writeln!(
            f,
            "<http://example.org/x> <http://example.org/p> <http://example.org/y> ."
        )
        .unwrap();
        let mut f = std::fs::File::create(&b).unwrap();
        writeln!(
            f,
            "<http://example.org/x> <http://example.org/p> <http://example.org/y> .\n\
             <http://example.org/x> <http://example.org/q> \"v\" ."
        )
        .unwrap();

        let graph = read_file(&a, None).unwrap();
        assert_eq!(graph.len(), 1);

        // duplicate statements collapse in the merge
        let merged = read_files(&[a, b], None).unwrap();
        assert_eq!(merged.len(), 2);

        // reading a non-existent file should return an error
        assert!(read_file(Path::new("no/such/file.ttl"), None).is_err());
    }
}
