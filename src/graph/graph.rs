//! 组合图
//!
//! 把一个存储（及其持有的映射）包装成统一的图接口，所有操作直接转发

use super::adjacency_list::AdjacencyList;
use super::adjacency_matrix::AdjacencyMatrix;
use super::mapper::VertexMapper;
use super::store::{AdjacentVisitor, GraphStore, VertexVisitor};
use crate::config::GraphConfig;
use crate::error::Result;
use crate::types::{EdgeWeight, GraphVertex, StoreKind, VertexIdx};
use tracing::debug;

/// 图
pub struct Graph<V: GraphVertex> {
    store: Box<dyn GraphStore<V>>,
}

impl<V: GraphVertex + 'static> Graph<V> {
    /// 使用任意存储创建图。数据已经以图的形式存在时，实现 [`GraphStore`] 后传入即可
    pub fn new<S: GraphStore<V> + 'static>(store: S) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    /// 基于邻接表创建图
    pub fn adjacency_list(directed: bool) -> Self {
        Self::new(AdjacencyList::new(directed))
    }

    /// 基于邻接矩阵创建图
    pub fn adjacency_matrix(vertex_count: usize, directed: bool) -> Self {
        Self::new(AdjacencyMatrix::new(vertex_count, directed))
    }

    /// 按配置创建图
    pub fn from_config(config: &GraphConfig) -> Result<Self> {
        config.validate()?;
        debug!(backend = %config.backend, directed = config.directed, "按配置创建图");

        let graph = match config.backend {
            StoreKind::AdjacencyList => Self::new(AdjacencyList::with_capacity(
                config.capacity_hint,
                config.directed,
            )),
            StoreKind::AdjacencyMatrix => {
                // validate 已保证矩阵配置带有顶点数
                let vertex_count = config.vertex_count.unwrap_or_default();
                Self::adjacency_matrix(vertex_count, config.directed)
            }
        };
        Ok(graph)
    }
}

impl<V: GraphVertex> Graph<V> {
    /// 取顶点的索引
    pub fn idx_of_vertex(&self, vertex: &V) -> Result<VertexIdx> {
        self.store.mapper().idx_of_vertex(vertex)
    }

    /// 按索引取顶点
    pub fn vertex_by_idx(&self, idx: VertexIdx) -> Result<&V> {
        self.store.mapper().vertex_by_idx(idx)
    }

    /// 取底层存储
    pub fn store(&self) -> &dyn GraphStore<V> {
        self.store.as_ref()
    }
}

impl<V: GraphVertex> GraphStore<V> for Graph<V> {
    fn mapper(&self) -> &dyn VertexMapper<V> {
        self.store.mapper()
    }

    fn add_vertex(&mut self, vertex: V) -> Result<()> {
        self.store.add_vertex(vertex)
    }

    fn add_edge(&mut self, src: &V, dst: &V) -> Result<()> {
        self.store.add_edge(src, dst)
    }

    fn add_edge_weighted(&mut self, src: &V, weight: EdgeWeight, dst: &V) -> Result<()> {
        self.store.add_edge_weighted(src, weight, dst)
    }

    fn for_each_vertex(&self, visitor: &mut VertexVisitor<'_, V>) {
        self.store.for_each_vertex(visitor)
    }

    fn for_each_adjacent_vertex(&self, src: &V, visitor: &mut AdjacentVisitor<'_, V>) -> Result<()> {
        self.store.for_each_adjacent_vertex(src, visitor)
    }

    fn for_each_adjacent_vertex_by_idx(
        &self,
        src_idx: VertexIdx,
        visitor: &mut AdjacentVisitor<'_, V>,
    ) -> Result<()> {
        self.store.for_each_adjacent_vertex_by_idx(src_idx, visitor)
    }

    fn list_vertices(&self) -> Result<Vec<V>> {
        self.store.list_vertices()
    }

    fn is_directed(&self) -> bool {
        self.store.is_directed()
    }

    fn vertex_count(&self) -> usize {
        self.store.vertex_count()
    }

    fn edge_count(&self) -> usize {
        self.store.edge_count()
    }

    fn edge_weight_by_idx(&self, src_idx: VertexIdx, dst_idx: VertexIdx) -> Result<Option<EdgeWeight>> {
        self.store.edge_weight_by_idx(src_idx, dst_idx)
    }
}
