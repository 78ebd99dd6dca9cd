use crate::graph::*;
use petgraph::graph::{NodeIndex, UnGraph};

/// An explicit undirected graph built from an implicit one.
///
/// Node `i` carries `VertexId(i)`, so `NodeIndex::new(v.to_raw())` finds the node of `v`.
pub type MaterializedGraph = UnGraph<VertexId, (), usize>;

/// Turns the adjacency predicate into an explicit `petgraph` graph.
pub trait Materialize
where
    Self: QueryableGraph + Sized,
{
    /// Adds one edge per unordered pair of distinct vertices `{a, b}`
    /// for which the predicate holds in either direction.
    ///
    /// This asks the predicate up to `|V| * (|V| - 1)` times.
    fn materialize(&self) -> Result<MaterializedGraph, Self::Error> {
        let n = self.vertex_size();
        let mut res = MaterializedGraph::with_capacity(n, 0);
        for v in self.iter_vertices() {
            let nidx = res.add_node(v);
            debug_assert_eq!(nidx.index(), v.to_raw());
        }
        for a in 0..n {
            for b in (a + 1)..n {
                let va = VertexId::new(a);
                let vb = VertexId::new(b);
                if self.is_adjacent(&va, &vb)? || self.is_adjacent(&vb, &va)? {
                    res.add_edge(NodeIndex::new(a), NodeIndex::new(b), ());
                }
            }
        }
        log::debug!(
            "materialized {} vertices into {} edges",
            res.node_count(),
            res.edge_count()
        );
        Ok(res)
    }
}

impl<G: QueryableGraph> Materialize for G {}
