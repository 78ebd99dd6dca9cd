//! Connected components of graphs whose vertices are listed explicitly
//! and whose edges are given implicitly by an adjacency predicate.
//!
//! ```rust
//! use conncomp::algorithm::count_components;
//!
//! let vertices = ['A', 'B', 'C', 'D', 'E'];
//! let edges = [('A', 'B'), ('B', 'C'), ('D', 'E')];
//! let n = count_components(vertices, |a: &char, b: &char| edges.contains(&(*a, *b)));
//! assert_eq!(n, 2);
//! ```

pub mod algorithm;
mod error;
pub use self::error::*;
pub mod graph;
