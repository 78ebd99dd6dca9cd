use crate::graph::*;

/// Read access to a graph whose edges are decided by an adjacency predicate.
///
/// Algorithms only see vertices through their `VertexId`.
pub trait QueryableGraph {
    type Vertex;
    type Error;

    /// Number of distinct vertices.
    fn vertex_size(&self) -> usize;

    /// Distinct vertices in the order of their first occurrence.
    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_>;

    fn contains_vertex(&self, v: &VertexId) -> bool;

    /// The vertex sequence as the caller gave it, duplicates included.
    ///
    /// Each entry is the ID of the vertex's first occurrence.
    /// This is the order of root selection and of every neighbor scan.
    fn vertex_sequence(&self) -> &[VertexId];

    fn vertex(&self, v: &VertexId) -> Option<&Self::Vertex>;

    fn vertex_id(&self, vertex: &Self::Vertex) -> Option<VertexId>;

    /// Asks the adjacency predicate whether a traversal may move from `from` to `to`.
    ///
    /// Both IDs must belong to this graph.
    fn is_adjacent(&self, from: &VertexId, to: &VertexId) -> Result<bool, Self::Error>;
}
