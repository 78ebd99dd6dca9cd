use crate::{graph::*, Error};

/// How a depth-first search keeps track of where it is.
///
/// Both strategies visit vertices in the same order and ask the predicate
/// the same questions in the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DfsStrategy {
    /// Plain recursion. The call stack grows with the depth of the search.
    Recursive,
    /// An explicit stack of (vertex, scan cursor) frames on the heap.
    #[default]
    Iterative,
}

/// Which vertices have already been reached by some traversal.
///
/// Created with every vertex unvisited; marks only ever go from unvisited to visited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitationRecord {
    visited: Vec<bool>,
    visited_size: usize,
}

impl VisitationRecord {
    pub fn new<G: QueryableGraph>(graph: &G) -> Self {
        Self {
            visited: vec![false; graph.vertex_size()],
            visited_size: 0,
        }
    }

    /// Number of vertices this record keeps track of.
    pub fn domain_size(&self) -> usize {
        self.visited.len()
    }

    /// Whether `v` lies in the domain of this record.
    pub fn covers(&self, v: &VertexId) -> bool {
        v.to_raw() < self.visited.len()
    }

    pub fn is_visited(&self, v: &VertexId) -> bool {
        self.visited.get(v.to_raw()).copied().unwrap_or(false)
    }

    /// Number of vertices visited so far.
    pub fn visited_size(&self) -> usize {
        self.visited_size
    }

    pub fn iter_visited(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.visited
            .iter()
            .enumerate()
            .filter(|(_, x)| **x)
            .map(|(i, _)| VertexId::new(i))
    }

    fn mark(&mut self, v: &VertexId) {
        let slot = &mut self.visited[v.to_raw()];
        if !*slot {
            *slot = true;
            self.visited_size += 1;
        }
    }
}

/// Depth-first search from `current` with the default strategy.
///
/// See [depth_first_search_with].
pub fn depth_first_search<G>(
    graph: &G,
    current: &G::Vertex,
    visited: &mut VisitationRecord,
    subgraph: &mut Vec<VertexId>,
) -> Result<(), Error<G::Error>>
where
    G: QueryableGraph,
{
    depth_first_search_with(DfsStrategy::default(), graph, current, visited, subgraph)
}

/// Depth-first search from `current`.
///
/// Marks `current` as visited and appends it to `subgraph`.
/// Then, for every entry `v` of the vertex sequence in order,
/// if `v` is not `current`, `current -> v` is adjacent, and `v` is not visited yet,
/// the whole unvisited part reachable from `v` is explored before the next entry is looked at.
/// `subgraph` ends up holding the visit order.
///
/// The predicate is asked before the visited check,
/// so every visited vertex costs a full scan of the vertex sequence.
///
/// Fails with [Error::UnknownVertex] if `current` is not a vertex of `graph`,
/// or if `visited` was not made for a graph of the same size as `graph`.
/// A predicate failure aborts the search; marks made so far are kept.
pub fn depth_first_search_with<G>(
    strategy: DfsStrategy,
    graph: &G,
    current: &G::Vertex,
    visited: &mut VisitationRecord,
    subgraph: &mut Vec<VertexId>,
) -> Result<(), Error<G::Error>>
where
    G: QueryableGraph,
{
    if visited.domain_size() != graph.vertex_size() {
        return Err(Error::UnknownVertex);
    }
    let root = match graph.vertex_id(current) {
        Some(vid) if visited.covers(&vid) => vid,
        _ => return Err(Error::UnknownVertex),
    };
    traverse(strategy, graph, root, visited, subgraph).map_err(Error::Predicate)
}

/// `root` must be a vertex of `graph` covered by `visited`.
pub(crate) fn traverse<G>(
    strategy: DfsStrategy,
    graph: &G,
    root: VertexId,
    visited: &mut VisitationRecord,
    subgraph: &mut Vec<VertexId>,
) -> Result<(), G::Error>
where
    G: QueryableGraph,
{
    match strategy {
        DfsStrategy::Recursive => traverse_recursively(graph, root, visited, subgraph),
        DfsStrategy::Iterative => traverse_iteratively(graph, root, visited, subgraph),
    }
}

fn traverse_recursively<G>(
    graph: &G,
    current: VertexId,
    visited: &mut VisitationRecord,
    subgraph: &mut Vec<VertexId>,
) -> Result<(), G::Error>
where
    G: QueryableGraph,
{
    visited.mark(&current);
    subgraph.push(current);
    for candidate in graph.vertex_sequence() {
        if *candidate != current
            && graph.is_adjacent(&current, candidate)?
            && !visited.is_visited(candidate)
        {
            traverse_recursively(graph, *candidate, visited, subgraph)?;
        }
    }
    Ok(())
}

fn traverse_iteratively<G>(
    graph: &G,
    root: VertexId,
    visited: &mut VisitationRecord,
    subgraph: &mut Vec<VertexId>,
) -> Result<(), G::Error>
where
    G: QueryableGraph,
{
    let sequence = graph.vertex_sequence();
    visited.mark(&root);
    subgraph.push(root);
    let mut stack = vec![(root, 0usize)];
    while let Some(frame) = stack.last_mut() {
        let (current, cursor) = *frame;
        if cursor >= sequence.len() {
            stack.pop();
            continue;
        }
        frame.1 += 1;
        let candidate = sequence[cursor];
        if candidate != current
            && graph.is_adjacent(&current, &candidate)?
            && !visited.is_visited(&candidate)
        {
            visited.mark(&candidate);
            subgraph.push(candidate);
            stack.push((candidate, 0));
        }
    }
    Ok(())
}
