//! `ImplicitGraph`: an explicit vertex sequence bound to an adjacency predicate.
use crate::{graph::*, Error};
use ahash::RandomState;
use bimap::BiHashMap;
use std::hash::Hash;

/// A graph whose vertices are listed explicitly and whose edges are decided by an [Adjacency].
///
/// * `V`: vertices, i.e., there is a 1-1 mapping between distinct `V`'s and vertex ID's.
/// * `A`: the adjacency predicate.
///
/// The vertex sequence keeps the caller's order, duplicates included.
/// Duplicates collapse into the vertex of their first occurrence.
/// No edge is ever materialized; every adjacency query calls the predicate.
pub struct ImplicitGraph<V, A>
where
    V: Hash + Eq,
{
    vertex_keys: BiHashMap<VertexId, V, RandomState, RandomState>,
    sequence: Vec<VertexId>,
    adjacency: A,
}

impl<V, F> ImplicitGraph<V, F>
where
    V: Hash + Eq,
    F: Fn(&V, &V) -> bool,
{
    /// Builds a graph over a predicate which never fails.
    pub fn from_fn<I>(vertices: I, f: F) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        Self::new(vertices, f)
    }
}

impl<V, E, F> ImplicitGraph<V, Fallible<F>>
where
    V: Hash + Eq,
    F: Fn(&V, &V) -> Result<bool, E>,
{
    /// Builds a graph over a predicate which may fail.
    pub fn from_fallible_fn<I>(vertices: I, f: F) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        Self::new(vertices, Fallible(f))
    }
}

impl<V, A> ImplicitGraph<V, A>
where
    V: Hash + Eq,
{
    pub fn new<I>(vertices: I, adjacency: A) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        let mut vid_factory = VertexIdFactory::default();
        let mut vertex_keys: BiHashMap<VertexId, V, RandomState, RandomState> =
            BiHashMap::with_hashers(RandomState::new(), RandomState::new());
        let mut sequence = vec![];
        for vkey in vertices {
            let vid = if let Some(vid) = vertex_keys.get_by_right(&vkey).copied() {
                vid
            } else {
                let vid = vid_factory.one_more();
                vertex_keys.insert(vid, vkey);
                vid
            };
            sequence.push(vid);
        }
        Self {
            vertex_keys,
            sequence,
            adjacency,
        }
    }

    pub fn adjacency(&self) -> &A {
        &self.adjacency
    }

    pub fn into_adjacency(self) -> A {
        self.adjacency
    }

    /// Length of the vertex sequence, duplicates included.
    pub fn sequence_len(&self) -> usize {
        self.sequence.len()
    }

    /// Iterates over the vertex sequence, duplicates included.
    pub fn iter_sequence(&self) -> impl Iterator<Item = &V> + '_ {
        self.sequence.iter().filter_map(move |vid| self.key(vid))
    }

    fn key(&self, vid: &VertexId) -> Option<&V> {
        self.vertex_keys.get_by_left(vid)
    }
}

impl<V, A> ImplicitGraph<V, A>
where
    V: Hash + Eq,
    A: Adjacency<V>,
{
    /// Asks the predicate about two vertices given by value.
    ///
    /// Unlike traversals, this does not skip `from == to`.
    /// Fails with [Error::UnknownVertex] if either vertex is outside the vertex set.
    pub fn adjacent(&self, from: &V, to: &V) -> Result<bool, Error<A::Error>> {
        if !self.vertex_keys.contains_right(from) || !self.vertex_keys.contains_right(to) {
            return Err(Error::UnknownVertex);
        }
        self.adjacency
            .is_adjacent(from, to)
            .map_err(Error::Predicate)
    }

    /// Like [QueryableGraph::is_adjacent],
    /// but fails with [Error::UnknownVertex] instead of panicking on ID's from elsewhere.
    pub fn adjacent_by_id(&self, from: &VertexId, to: &VertexId) -> Result<bool, Error<A::Error>> {
        match (self.key(from), self.key(to)) {
            (Some(from), Some(to)) => self
                .adjacency
                .is_adjacent(from, to)
                .map_err(Error::Predicate),
            _ => Err(Error::UnknownVertex),
        }
    }
}

impl<V, A> QueryableGraph for ImplicitGraph<V, A>
where
    V: Hash + Eq,
    A: Adjacency<V>,
{
    type Vertex = V;
    type Error = A::Error;

    fn vertex_size(&self) -> usize {
        self.vertex_keys.len()
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new((0..self.vertex_keys.len()).map(VertexId::new))
    }

    fn contains_vertex(&self, v: &VertexId) -> bool {
        self.vertex_keys.contains_left(v)
    }

    fn vertex_sequence(&self) -> &[VertexId] {
        &self.sequence
    }

    fn vertex(&self, v: &VertexId) -> Option<&V> {
        self.vertex_keys.get_by_left(v)
    }

    fn vertex_id(&self, vertex: &V) -> Option<VertexId> {
        self.vertex_keys.get_by_right(vertex).copied()
    }

    /// # Panics
    ///
    /// Panics if either ID does not belong to this graph.
    fn is_adjacent(&self, from: &VertexId, to: &VertexId) -> Result<bool, Self::Error> {
        match (self.key(from), self.key(to)) {
            (Some(from), Some(to)) => self.adjacency.is_adjacent(from, to),
            _ => panic!("{:?} -> {:?} is not a pair of vertices of this graph", from, to),
        }
    }
}

impl<V, A> std::fmt::Debug for ImplicitGraph<V, A>
where
    V: Hash + Eq + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.sequence.iter().filter_map(|vid| self.key(vid).map(|v| (vid, v))))
            .finish()
    }
}
