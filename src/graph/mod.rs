//! 图存储模块
//!
//! 顶点映射、存储约定，以及邻接表和邻接矩阵两种存储

mod adjacency_list;
mod adjacency_matrix;
mod graph;
mod mapper;
mod store;

#[cfg(test)]
pub(crate) mod fixtures;

pub use adjacency_list::{AdjacencyList, EdgeBucket};
pub use adjacency_matrix::AdjacencyMatrix;
pub use graph::Graph;
pub use mapper::{HashVertexMapper, VertexMapper};
pub use store::{AdjacentVisitor, GraphStore, VertexVisitor};
