//! Reading instances and certificates from files
//! and writing generated certificates back.
use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

use crate::{
    certificate::{write_certificate, Certificate},
    graph::{vertex_id, Graph},
    parser::{parse_adjacency_input, parse_certificate_input, parse_k_coloring_input, Instance},
    Error,
};

fn open(path: &Path) -> Result<BufReader<File>, Error> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|ie| Error::opening(path, ie))
}

/// Symmetry isn't enforced, so an asymmetric
/// graph is only pointed out.
fn warn_asymmetric(graph: &Graph) {
    if let Some((start, end)) = graph.asymmetric_arcs().next() {
        tracing::warn!(
            "vertex {} lists {} as neighbour but not the other way around, edges may be undercounted",
            vertex_id(start),
            vertex_id(end)
        );
    }
}

pub fn read_graph(path: &Path) -> Result<Graph, Error> {
    let graph = parse_adjacency_input(open(path)?)?;
    tracing::debug!(
        "read graph with {} vertices and {} arcs from {:?}",
        graph.size(),
        graph.number_arcs(),
        path
    );
    warn_asymmetric(&graph);
    Ok(graph)
}

pub fn read_instance(path: &Path) -> Result<Instance, Error> {
    let instance = parse_k_coloring_input(open(path)?)?;
    tracing::debug!(
        "read instance with k={} and {} vertices from {:?}",
        instance.k,
        instance.graph.size(),
        path
    );
    warn_asymmetric(&instance.graph);
    Ok(instance)
}

pub fn read_certificate(path: &Path) -> Result<Certificate, Error> {
    let certificate = parse_certificate_input(open(path)?)?;
    tracing::debug!(
        "read certificate with {} colours from {:?}",
        certificate.len(),
        path
    );
    Ok(certificate)
}

/// Create (or truncate) the file and write the certificate to it.
pub fn save_certificate(path: &Path, certificate: &Certificate) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_certificate(&mut writer, certificate)
}
