//! Visualize implicit graphs and their connected components in the graphviz format.
use super::ConnectedComponents;
use crate::{graph::*, Error};
use ahash::RandomState;
use std::collections::HashMap;

/**
 * Provides graphviz labels for vertices.
 *
 * See [DumpComponentsInGraphviz] for details.
 */
pub trait GraphvizLabelForVertex {
    /**
     * Returns a string for graphviz name and an optional label.
     */
    fn label(&self) -> (String, Option<String>);
}

impl GraphvizLabelForVertex for str {
    fn label(&self) -> (String, Option<String>) {
        (format!("{:?}", self), None)
    }
}

impl<'a, T: GraphvizLabelForVertex + ?Sized> GraphvizLabelForVertex for &'a T {
    fn label(&self) -> (String, Option<String>) {
        (**self).label()
    }
}

impl GraphvizLabelForVertex for String {
    fn label(&self) -> (String, Option<String>) {
        self.as_str().label()
    }
}

impl GraphvizLabelForVertex for char {
    fn label(&self) -> (String, Option<String>) {
        self.to_string().label()
    }
}

macro_rules! plain_label {
    ($($t:ty),*) => {
        $(
            impl GraphvizLabelForVertex for $t {
                fn label(&self) -> (String, Option<String>) {
                    (self.to_string(), None)
                }
            }
        )*
    };
}

plain_label!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/**
 * Dumps an implicit graph into graphviz format, one cluster per connected component.
 *
 * Clusters come in root order and list their vertices in visit order.
 * Edges follow the clusters, one per pair of vertices adjacent in either direction.
 *
 * # Examples
 *
 * ```rust
 * use conncomp::{algorithm::graphviz::*, graph::*};
 *
 * let edges = [('A', 'B'), ('D', 'C')];
 * let g = ImplicitGraph::from_fn("ABCD".chars(), |a: &char, b: &char| {
 *     edges.contains(&(*a, *b))
 * });
 * let trial = {
 *     let mut buf = vec![];
 *     g.dump_components_in_graphviz(&mut buf, "trial").unwrap();
 *     String::from_utf8(buf).unwrap()
 * };
 * assert_eq!(
 *     trial,
 *     r#"graph trial {
 *   subgraph cluster_0 {
 *     "A" ;
 *     "B" ;
 *   }
 *   subgraph cluster_1 {
 *     "C" ;
 *   }
 *   subgraph cluster_2 {
 *     "D" ;
 *   }
 *   "A" -- "B" ;
 *   "C" -- "D" ;
 * }
 * "#);
 * ```
 */
pub trait DumpComponentsInGraphviz
where
    Self: QueryableGraph + Sized,
    Self::Vertex: GraphvizLabelForVertex,
{
    fn dump_components_in_graphviz<W>(
        &self,
        out: &mut W,
        graph_name: &str,
    ) -> Result<(), Error<Self::Error>>
    where
        W: std::io::Write,
    {
        writeln!(out, "graph {} {{", graph_name)?;
        let mut vkey = HashMap::with_hasher(RandomState::new());
        for (i, component) in self.connected_components().enumerate() {
            writeln!(out, "  subgraph cluster_{} {{", i)?;
            for vid in component.map_err(Error::Predicate)? {
                let vert = self.vertex(&vid).ok_or(Error::UnknownVertex)?;
                let (key, label) = vert.label();
                if let Some(label) = label {
                    writeln!(out, "    {} [{}] ;", key, label)?;
                } else {
                    writeln!(out, "    {} ;", key)?;
                }
                vkey.insert(vid, key);
            }
            writeln!(out, "  }}")?;
        }
        let explicit = self.materialize().map_err(Error::Predicate)?;
        for e in explicit.raw_edges() {
            let src = vkey
                .get(&explicit[e.source()])
                .ok_or(Error::UnknownVertex)?;
            let snk = vkey
                .get(&explicit[e.target()])
                .ok_or(Error::UnknownVertex)?;
            writeln!(out, "  {} -- {} ;", src, snk)?;
        }
        writeln!(out, "}}")?;
        Ok(())
    }
}

impl<G> DumpComponentsInGraphviz for G
where
    G: QueryableGraph,
    G::Vertex: GraphvizLabelForVertex,
{
}
