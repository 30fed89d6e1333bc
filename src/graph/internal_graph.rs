use super::{vertex_index, GraphError, VertexIndex};

/// Fixed size graph stored as adjacency lists.
/// The lists keep the order (and duplicates) of
/// the input, traversals depend on it.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Graph {
    pub vertices: Vec<Vertex>,
    size: usize,
    arc_number: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    pub index: VertexIndex,
    pub edges_to: Vec<VertexIndex>,
}

impl Graph {
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of adjacency list entries. Every undirected
    /// edge of a symmetric graph contributes two arcs.
    pub fn number_arcs(&self) -> usize {
        self.arc_number
    }

    pub fn new_ordered(n: usize) -> Self {
        let mut vertices = Vec::with_capacity(n);
        for index in 0..n {
            vertices.push(Vertex::new(index));
        }
        Graph {
            vertices,
            size: n,
            arc_number: 0,
        }
    }

    /// Build a graph from adjacency lists with one based
    /// vertex ids, i.e. `lists[i]` holds the neighbours of vertex `i+1`.
    pub fn from_adjacency_lists(lists: &[Vec<i64>]) -> Result<Self, GraphError> {
        let mut graph = Graph::new_ordered(lists.len());
        for (start, neighbours) in lists.iter().enumerate() {
            for &id in neighbours {
                let end = vertex_index(id, graph.size)?;
                graph.add_arc(start, end)?;
            }
        }
        Ok(graph)
    }

    #[cfg(test)]
    pub fn get_vertex(&self, index: VertexIndex) -> Result<&Vertex, GraphError> {
        self.vertices
            .get(index)
            .ok_or(GraphError(index as i64 + 1))
    }

    fn get_vertex_mut(&mut self, index: VertexIndex) -> Result<&mut Vertex, GraphError> {
        self.vertices
            .get_mut(index)
            .ok_or(GraphError(index as i64 + 1))
    }

    /// Neighbours of a vertex in input order.
    /// Panics if `index` is out of bounds.
    pub fn neighbours(&self, index: VertexIndex) -> &[VertexIndex] {
        &self.vertices[index].edges_to
    }

    #[cfg(test)]
    pub fn degree(&self, index: VertexIndex) -> usize {
        self.neighbours(index).len()
    }

    pub fn add_arc(&mut self, start: VertexIndex, end: VertexIndex) -> Result<(), GraphError> {
        if end >= self.size {
            return Err(GraphError(end as i64 + 1));
        }
        self.get_vertex_mut(start)?.add_edge(end);
        self.arc_number += 1;
        Ok(())
    }

    #[cfg(test)]
    pub fn add_edge(&mut self, start: VertexIndex, end: VertexIndex) -> Result<(), GraphError> {
        self.add_arc(start, end)?;
        self.add_arc(end, start)
    }

    pub fn lookup_edge(&self, start: &VertexIndex, end: &VertexIndex) -> bool {
        let start = *start;
        assert!(start < self.size);
        self.vertices[start].edges_to.iter().any(|edge| edge == end)
    }

    pub fn iterate_arcs(&self) -> impl Iterator<Item = (VertexIndex, VertexIndex)> + '_ {
        self.vertices
            .iter()
            .flat_map(|vertex| vertex.edges_to.iter().map(move |end| (vertex.index, *end)))
    }

    /// Arcs `(start, end)` without the reverse arc `(end, start)`.
    /// Symmetry is expected for undirected graphs but not enforced.
    pub fn asymmetric_arcs(&self) -> impl Iterator<Item = (VertexIndex, VertexIndex)> + '_ {
        self.iterate_arcs()
            .filter(move |(start, end)| !self.lookup_edge(end, start))
    }

    #[cfg(test)]
    pub fn is_symmetric(&self) -> bool {
        self.asymmetric_arcs().next().is_none()
    }
}

impl Vertex {
    pub fn new(index: VertexIndex) -> Self {
        Vertex {
            index,
            edges_to: Vec::new(),
        }
    }

    pub fn add_edge(&mut self, end: VertexIndex) {
        self.edges_to.push(end);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn new_graph_default() {
        let graph = Graph::new_ordered(120);
        assert_eq!(120, graph.size());
        assert_eq!(0, graph.number_arcs());
        for (index, vertex) in graph.vertices.iter().enumerate() {
            assert_eq!(index, vertex.index);
            assert!(vertex.edges_to.is_empty());
        }
    }

    #[test]
    fn test_add_edge() -> Result<(), GraphError> {
        let mut graph = Graph::new_ordered(3);
        graph.add_edge(0, 2)?;
        assert_eq!(2, graph.number_arcs());
        assert!(graph.lookup_edge(&0, &2));
        assert!(graph.lookup_edge(&2, &0));
        assert!(!graph.lookup_edge(&0, &1));

        // Index out of bounds
        assert_eq!(Err(GraphError(4)), graph.add_arc(3, 0));
        assert_eq!(Err(GraphError(4)), graph.add_arc(0, 3));
        assert_eq!(2, graph.number_arcs());
        Ok(())
    }

    #[test]
    fn test_from_adjacency_lists() -> Result<(), GraphError> {
        let graph = Graph::from_adjacency_lists(&[vec![3, 2], vec![1], vec![1]])?;

        let mut expected = Graph::new_ordered(3);
        expected.add_arc(0, 2)?;
        expected.add_arc(0, 1)?;
        expected.add_arc(1, 0)?;
        expected.add_arc(2, 0)?;

        assert_eq!(expected, graph);
        assert_eq!(&[2, 1], graph.neighbours(0));
        assert_eq!(2, graph.degree(0));
        Ok(())
    }

    #[test]
    fn test_from_adjacency_lists_invalid_id() {
        assert_eq!(
            Err(GraphError(3)),
            Graph::from_adjacency_lists(&[vec![2], vec![3]])
        );
        assert_eq!(
            Err(GraphError(0)),
            Graph::from_adjacency_lists(&[vec![0]])
        );
    }

    #[test]
    fn test_get_vertex() {
        let graph = Graph::new_ordered(5);
        assert_eq!(Ok(&Vertex::new(2)), graph.get_vertex(2));
        assert_eq!(Err(GraphError(6)), graph.get_vertex(5));
    }

    #[test]
    fn test_asymmetric_arcs() -> Result<(), GraphError> {
        let symmetric = Graph::from_adjacency_lists(&[vec![2], vec![1, 3], vec![2]])?;
        assert!(symmetric.is_symmetric());

        let asymmetric = Graph::from_adjacency_lists(&[vec![2, 3], vec![1], vec![]])?;
        assert!(!asymmetric.is_symmetric());
        assert_eq!(vec![(0, 2)], asymmetric.asymmetric_arcs().collect::<Vec<_>>());
        Ok(())
    }
}
