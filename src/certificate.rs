//! Certificates for the k-colouring problem: random
//! generation of candidates and their verification.

use rand::Rng;
use std::io::Write;

use crate::{
    debug::certificate_pretty,
    graph::{Colour, Graph, VertexIndex},
    Error,
};

/// A claimed colouring, one colour per vertex in vertex order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Certificate {
    colours: Vec<Colour>,
}

impl From<Vec<Colour>> for Certificate {
    fn from(colours: Vec<Colour>) -> Self {
        Certificate { colours }
    }
}

impl Certificate {
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }

    pub fn colour(&self, index: VertexIndex) -> Option<Colour> {
        self.colours.get(index).copied()
    }

    /// The biggest colour used, which is what the
    /// verifier reports as the number of used colours.
    pub fn max_colour(&self) -> Option<Colour> {
        self.colours.iter().copied().max()
    }
}

/// Check that the certificate is a k-colouring of the graph.
///
/// Only the upper bound `k` is checked for the colours, colours below 1 are
/// accepted. Afterwards every vertex has to differ in colour from all of its
/// neighbours. Vertices without a colour make the certificate invalid.
pub fn verify(graph: &Graph, certificate: &Certificate, k: Colour) -> bool {
    if certificate.max_colour().map_or(false, |max| max > k) {
        return false;
    }

    if certificate.len() < graph.size() {
        return false;
    }

    graph.iterate_arcs().all(|(start, end)| {
        match (certificate.colour(start), certificate.colour(end)) {
            (Some(start_colour), Some(end_colour)) => start_colour != end_colour,
            _ => false,
        }
    })
}

/// Draw a colour from `[1, k]` uniformly at random for each of the `size` vertices.
/// The result is only a candidate and in general no valid colouring.
pub fn generate<R: Rng>(size: usize, k: Colour, rng: &mut R) -> Result<Certificate, Error> {
    if k < 1 {
        return Err(Error::ColourBound(k));
    }

    let colours = (0..size).map(|_| rng.random_range(1..=k)).collect::<Vec<_>>();
    Ok(Certificate::from(colours))
}

/// Write one colour per line.
pub fn write_certificate<W: Write>(writer: &mut W, certificate: &Certificate) -> Result<(), Error> {
    writer.write_all(certificate_pretty(certificate).as_bytes())?;
    writer.flush().map_err(Error::from)
}
