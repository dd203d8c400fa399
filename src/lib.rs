//! GraphStore - 图存储抽象
//!
//! 以统一接口提供两种图存储：
//! - 邻接表：顶点数不必事先确定，允许平行边
//! - 邻接矩阵：创建时固定顶点数，同一顶点对只保留最后写入的权重
//!
//! 顶点身份与稠密索引之间的映射是独立、可替换的组件（[`VertexMapper`]），
//! 调用方也可以直接基于已有数据实现 [`GraphStore`] / [`VertexMapper`]。

pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod import;
pub mod types;

// 重导出常用类型
pub use config::GraphConfig;
pub use error::{Error, Result};
pub use graph::{
    AdjacencyList, AdjacencyMatrix, Graph, GraphStore, HashVertexMapper, VertexMapper,
};
pub use types::{AdjacentEdge, EdgeWeight, GraphVertex, StoreKind, VertexIdx};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
