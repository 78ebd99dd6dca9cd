//! Implicit graphs: vertices listed by the caller, edges decided by a predicate.
//!
//! # Vertices and `VertexId`
//!
//! Callers may use any `Hash + Eq` type as vertices.
//! Algorithms, however, work on lightweight ID's which are essentially `usize`.
//! [ImplicitGraph] maps between the two and keeps the caller's vertex order.
//!
//! # Adjacency
//!
//! Edges are never stored.
//! Every question "may a traversal move from `a` to `b`?" is answered by an [Adjacency],
//! usually a plain closure `Fn(&V, &V) -> bool`.
//!
//! # Materialization
//!
//! [Materialize] turns the predicate into an explicit `petgraph` graph
//! at the cost of asking about every pair of vertices.

mod vertex;
pub use self::vertex::*;
mod adjacency;
pub use self::adjacency::*;
mod r#trait;
pub use self::r#trait::*;
mod implicit;
pub use self::implicit::*;
mod materialize;
pub use self::materialize::*;

#[cfg(test)]
pub use self::tests::*;
