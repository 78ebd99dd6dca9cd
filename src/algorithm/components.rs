use super::dfs::{traverse, DfsStrategy, VisitationRecord};
use crate::graph::*;
use std::hash::Hash;

/// Connected components of an implicit graph.
///
/// Roots are picked in vertex sequence order; every root starts one depth-first search
/// and counts as one component.
/// Each call starts from a fresh [VisitationRecord].
pub trait ConnectedComponents
where
    Self: QueryableGraph + Sized,
{
    /// Iterates over components lazily.
    /// Each item lists the vertices of one component in visit order, its root first.
    fn connected_components(&self) -> Components<'_, Self> {
        Components::new(self, DfsStrategy::default())
    }

    fn connected_components_with(&self, strategy: DfsStrategy) -> Components<'_, Self> {
        Components::new(self, strategy)
    }

    fn count_connected_components(&self) -> Result<usize, Self::Error> {
        self.count_connected_components_with(DfsStrategy::default())
    }

    fn count_connected_components_with(&self, strategy: DfsStrategy) -> Result<usize, Self::Error> {
        let mut count = 0;
        for c in self.connected_components_with(strategy) {
            let c = c?;
            log::trace!("component #{} rooted at {:?} has {} vertices", count, c[0], c.len());
            count += 1;
        }
        log::debug!(
            "counted {} components over {} vertices with {:?}",
            count,
            self.vertex_size(),
            strategy
        );
        Ok(count)
    }
}

impl<G: QueryableGraph> ConnectedComponents for G {}

/// Counts connected components of `vertices` under a predicate which never fails.
///
/// # Examples
///
/// ```rust
/// use conncomp::algorithm::count_components;
///
/// assert_eq!(count_components(Vec::<u32>::new(), |_: &u32, _: &u32| true), 0);
/// assert_eq!(count_components(0..5u32, |_: &u32, _: &u32| false), 5);
/// assert_eq!(count_components(0..5u32, |a: &u32, b: &u32| a / 2 == b / 2), 3);
/// ```
pub fn count_components<V, I, F>(vertices: I, f: F) -> usize
where
    V: Hash + Eq,
    I: IntoIterator<Item = V>,
    F: Fn(&V, &V) -> bool,
{
    match ImplicitGraph::from_fn(vertices, f).count_connected_components() {
        Ok(count) => count,
        Err(never) => match never {},
    }
}

/// Counts connected components of `vertices` under a predicate which may fail.
///
/// The first failure of the predicate is returned as it is.
pub fn try_count_components<V, E, I, F>(vertices: I, f: F) -> Result<usize, E>
where
    V: Hash + Eq,
    I: IntoIterator<Item = V>,
    F: Fn(&V, &V) -> Result<bool, E>,
{
    ImplicitGraph::from_fallible_fn(vertices, f).count_connected_components()
}

/// Iterator over connected components, created by [ConnectedComponents].
///
/// After a predicate failure the iterator yields the error once and then stops.
pub struct Components<'a, G>
where
    G: QueryableGraph,
{
    graph: &'a G,
    strategy: DfsStrategy,
    visited: VisitationRecord,
    cursor: usize,
    failed: bool,
}

impl<'a, G> Components<'a, G>
where
    G: QueryableGraph,
{
    fn new(graph: &'a G, strategy: DfsStrategy) -> Self {
        Self {
            graph,
            strategy,
            visited: VisitationRecord::new(graph),
            cursor: 0,
            failed: false,
        }
    }

    /// Vertices reached by the components yielded so far.
    pub fn visited(&self) -> &VisitationRecord {
        &self.visited
    }
}

impl<'a, G> Iterator for Components<'a, G>
where
    G: QueryableGraph,
{
    type Item = Result<Vec<VertexId>, G::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let graph = self.graph;
        let sequence = graph.vertex_sequence();
        while let Some(root) = sequence.get(self.cursor) {
            self.cursor += 1;
            if self.visited.is_visited(root) {
                continue;
            }
            let mut subgraph = vec![];
            return match traverse(self.strategy, graph, *root, &mut self.visited, &mut subgraph) {
                Ok(()) => Some(Ok(subgraph)),
                Err(e) => {
                    self.failed = true;
                    Some(Err(e))
                }
            };
        }
        None
    }
}

impl<'a, G> std::iter::FusedIterator for Components<'a, G> where G: QueryableGraph {}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;
    use std::{cell::RefCell, collections::BTreeSet};

    fn edges_of(pairs: &'static [(char, char)]) -> impl Fn(&char, &char) -> bool {
        move |a: &char, b: &char| pairs.contains(&(*a, *b))
    }

    #[test]
    fn single_vertex() {
        assert_eq!(count_components(['A'], |_: &char, _: &char| false), 1);
    }

    #[test]
    fn two_vertices_one_edge() {
        assert_eq!(count_components(['A', 'B'], edges_of(&[('A', 'B')])), 1);
    }

    #[test]
    fn two_components() {
        let f = edges_of(&[('A', 'B'), ('B', 'C'), ('D', 'E')]);
        assert_eq!(count_components("ABCDE".chars(), f), 2);
    }

    #[test]
    fn three_components() {
        let f = edges_of(&[('A', 'B'), ('B', 'C'), ('D', 'E'), ('F', 'G')]);
        assert_eq!(count_components("ABCDEFG".chars(), f), 3);
    }

    #[test]
    fn empty() {
        assert_eq!(count_components(Vec::<char>::new(), |_: &char, _: &char| true), 0);
    }

    #[test]
    fn cycles_do_not_inflate() {
        let f = edges_of(&[('A', 'B'), ('B', 'C'), ('A', 'C')]);
        assert_eq!(count_components("ABC".chars(), f), 1);
    }

    #[test]
    fn duplicates_count_once() {
        assert_eq!(count_components("ABAB".chars(), |_: &char, _: &char| false), 2);
    }

    #[test]
    fn asymmetric_predicates_depend_on_order() {
        // A -> B -> C only
        let g = ImplicitGraph::from_fn("CBA".chars(), edges_of(&[('A', 'B'), ('B', 'C')]));
        assert_eq!(g.count_connected_components(), Ok(3));
        let g = ImplicitGraph::from_fn("ABC".chars(), edges_of(&[('A', 'B'), ('B', 'C')]));
        assert_eq!(g.count_connected_components(), Ok(1));
        let g = ImplicitGraph::new(
            "CBA".chars(),
            Symmetric(edges_of(&[('A', 'B'), ('B', 'C')])),
        );
        assert_eq!(g.count_connected_components(), Ok(1));
    }

    #[test]
    fn components_in_root_order() {
        let g = ImplicitGraph::new(
            "EDCBA".chars(),
            Symmetric(edges_of(&[('A', 'C'), ('B', 'D')])),
        );
        let trial: Vec<String> = g
            .connected_components()
            .map(|c| c.unwrap().iter().map(|v| *g.vertex(v).unwrap()).collect())
            .collect();
        assert_eq!(trial, vec!["E", "DB", "CA"]);
    }

    #[test]
    fn predicate_failure_propagates() {
        let res = try_count_components(0..10u32, |a: &u32, b: &u32| {
            if *a == 4 {
                Err(format!("cannot look past {}", a))
            } else {
                Ok(a + 1 == *b)
            }
        });
        assert_eq!(res, Err("cannot look past 4".to_string()));
    }

    #[test]
    fn iteration_stops_after_failure() {
        let g = ImplicitGraph::from_fallible_fn(vec![0u32, 1, 2], |a: &u32, _: &u32| {
            if *a == 1 {
                Err(())
            } else {
                Ok(false)
            }
        });
        let mut it = g.connected_components();
        assert_eq!(it.next(), Some(Ok(vec![VertexId(0)])));
        assert_eq!(it.next(), Some(Err(())));
        assert_eq!(it.next(), None);
        assert_eq!(it.visited().visited_size(), 2);
    }

    #[test]
    fn isolated_vertices_ask_every_other_vertex() {
        let asked = RefCell::new(0usize);
        let n = count_components(0..7u32, |_: &u32, _: &u32| {
            *asked.borrow_mut() += 1;
            false
        });
        assert_eq!(n, 7);
        assert_eq!(*asked.borrow(), 7 * 6);
    }

    #[quickcheck]
    fn isolated_vertices(n: u8) {
        assert_eq!(count_components(0..n, |_: &u8, _: &u8| false), n as usize);
    }

    #[quickcheck]
    fn complete_graphs(n: u8) {
        let expected = if n == 0 { 0 } else { 1 };
        assert_eq!(count_components(0..n, |_: &u8, _: &u8| true), expected);
    }

    #[quickcheck]
    fn agrees_with_petgraph(rg: RandomGraph) {
        let g = rg.graph();
        let oracle = petgraph::algo::connected_components(&g.materialize().unwrap());
        assert_eq!(g.count_connected_components(), Ok(oracle));
        assert_eq!(
            g.count_connected_components_with(DfsStrategy::Recursive),
            Ok(oracle)
        );
    }

    #[quickcheck]
    fn order_invariant(rg: RandomGraph, rotation: usize) -> TestResult {
        if rg.vertices.is_empty() {
            return TestResult::discard();
        }
        let mut permuted = rg.vertices.clone();
        permuted.reverse();
        permuted.rotate_left(rotation % rg.vertices.len());
        let n = count_components(rg.vertices.clone(), rg.undirected());
        let m = count_components(permuted, rg.undirected());
        TestResult::from_bool(n == m)
    }

    #[quickcheck]
    fn argument_order_invariant(rg: RandomGraph) {
        let f = rg.undirected();
        let n = count_components(rg.vertices.clone(), &f);
        let m = count_components(rg.vertices.clone(), |a: &u8, b: &u8| f(b, a));
        assert_eq!(n, m);
    }

    #[quickcheck]
    fn idempotent(rg: RandomGraph) {
        let g = ImplicitGraph::from_fn(rg.vertices.clone(), rg.directed());
        assert_eq!(
            g.count_connected_components(),
            g.count_connected_components()
        );
    }

    #[quickcheck]
    fn components_partition_the_vertices(rg: RandomGraph) {
        let g = ImplicitGraph::from_fn(rg.vertices.clone(), rg.directed());
        let mut seen = BTreeSet::new();
        let mut roots = vec![];
        for c in g.connected_components() {
            let c = c.unwrap();
            roots.push(c[0]);
            for v in c {
                assert!(seen.insert(v), "{:?} shows up twice", v);
            }
        }
        assert_eq!(seen, g.iter_vertices().collect::<BTreeSet<_>>());
        // roots come in sequence order.
        let mut sorted_roots = roots.clone();
        sorted_roots.sort_by_key(|v| g.vertex_sequence().iter().position(|x| x == v));
        assert_eq!(roots, sorted_roots);
    }
}
