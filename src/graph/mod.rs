//! Representation of undirected graphs given
//! as adjacency lists, as well as the colour
//! types used by colourings and certificates.
use std::fmt::{self, Display};

mod internal_graph;
pub use internal_graph::{Graph, Vertex};

pub type Colour = i64;
/// Marks vertices that haven't been coloured yet.
pub const UNCOLOURED: Colour = Colour::MAX;
/// Zero based index of a vertex. Files and user
/// facing output use the one based vertex id.
pub type VertexIndex = usize;

/// A neighbour id that doesn't name a vertex of the graph.
#[derive(Debug, PartialEq, Eq)]
pub struct GraphError(pub i64);

impl Display for GraphError {
    #[cfg(not(tarpaulin_include))]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vertex {} doesn't exist", self.0)
    }
}

/// Translate the one based vertex id from the file
/// format into an index into a graph of size `size`.
pub fn vertex_index(id: i64, size: usize) -> Result<VertexIndex, GraphError> {
    if id >= 1 && (id as u64) <= size as u64 {
        Ok(id as VertexIndex - 1)
    } else {
        Err(GraphError(id))
    }
}

/// Inverse of [`vertex_index`].
pub fn vertex_id(index: VertexIndex) -> usize {
    index + 1
}
