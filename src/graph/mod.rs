//! Directed graph storage plus its traversal and path-search operations.

pub mod builder;
pub mod digraph;
pub mod search;
pub mod traversal;

pub use builder::GraphBuilder;
pub use digraph::Graph;
