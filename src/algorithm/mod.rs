//! Graph algorithms over implicit graphs
mod dfs;
pub use self::dfs::*;
mod components;
pub use self::components::*;
pub mod graphviz;
