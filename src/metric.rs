//! Simple size metrics of a graph as reported
//! by both command line tools.
use crate::graph::{vertex_id, Graph};

pub fn count_vertices(graph: &Graph) -> usize {
    graph.size()
}

/// Count every undirected edge once, i.e. only the arcs that go
/// from a vertex to one with a bigger id. This relies on symmetric
/// adjacency lists and undercounts asymmetric ones. Self loops aren't counted.
pub fn count_edges(graph: &Graph) -> usize {
    graph.iterate_arcs().filter(|(start, end)| end > start).count()
}

/// The one based id of the vertex with the most neighbours
/// and its degree. Ties go to the smallest id.
pub fn max_degree_vertex(graph: &Graph) -> Option<(usize, usize)> {
    graph
        .vertices
        .iter()
        .map(|vertex| (vertex.index, vertex.edges_to.len()))
        .fold(None, |best, (index, degree)| match best {
            Some((_, best_degree)) if best_degree >= degree => best,
            _ => Some((index, degree)),
        })
        .map(|(index, degree)| (vertex_id(index), degree))
}
