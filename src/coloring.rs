//! Two-colouring of graphs by depth first traversal.
//! Finding an odd cycle is an expected outcome and
//! not an error, hence the `Option` results.

use crate::{
    certificate::Certificate,
    graph::{Colour, Graph, VertexIndex, UNCOLOURED},
};

/// A colour for every vertex of a graph, indexed by vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coloring {
    colours: Vec<Colour>,
}

impl Coloring {
    #[cfg(test)]
    pub fn size(&self) -> usize {
        self.colours.len()
    }

    #[cfg(test)]
    pub fn colour(&self, index: VertexIndex) -> Colour {
        self.colours[index]
    }

    #[cfg(test)]
    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }

    pub fn iter(&self) -> impl Iterator<Item = (VertexIndex, Colour)> + '_ {
        self.colours.iter().copied().enumerate()
    }

    /// Shift the colours into the palette `1..=k` used by certificates.
    pub fn to_certificate(&self) -> Certificate {
        Certificate::from(self.colours.iter().map(|colour| colour + 1).collect::<Vec<_>>())
    }
}

/// Colour the graph with the colours 0 and 1 such that adjacent vertices differ.
///
/// Components are coloured in increasing order of their smallest vertex, which
/// always gets colour 0. Inside a component the neighbours are discovered from an
/// explicit stack, so the neighbours of one vertex are expanded last to first.
/// Returns `None` as soon as an edge between two vertices of the same colour is found,
/// without looking at the remaining components.
pub fn two_colour(graph: &Graph) -> Option<Coloring> {
    let mut colours = vec![UNCOLOURED; graph.size()];
    let mut stack = Vec::new();

    for root in 0..graph.size() {
        if colours[root] != UNCOLOURED {
            continue;
        }

        colours[root] = 0;
        stack.push(root);

        while let Some(current) = stack.pop() {
            for &neighbour in graph.neighbours(current) {
                if colours[neighbour] == UNCOLOURED {
                    colours[neighbour] = 1 - colours[current];
                    stack.push(neighbour);
                } else if colours[neighbour] == colours[current] {
                    return None;
                }
            }
        }
    }

    Some(Coloring { colours })
}
