//! 邻接表存储
//!
//! 每个已注册顶点对应一个槽位，槽位内按插入顺序保存 (目标索引, 权重)。
//! 适用于事先不知道最终顶点数量的图，允许平行边。

use super::mapper::{HashVertexMapper, VertexMapper};
use super::store::{AdjacentVisitor, GraphStore, VertexVisitor};
use crate::error::{Error, Result};
use crate::types::{AdjacentEdge, EdgeWeight, GraphVertex, VertexIdx};
use smallvec::SmallVec;
use std::marker::PhantomData;
use tracing::{debug, trace};

/// 单个顶点的出边列表
pub type EdgeBucket = SmallVec<[AdjacentEdge; 4]>;

/// 邻接表
pub struct AdjacencyList<V: GraphVertex, M: VertexMapper<V> = HashVertexMapper<V>> {
    /// 顶点映射
    mapper: M,
    /// 每个顶点索引对应一个槽位
    buckets: Vec<EdgeBucket>,
    /// 成功添加的边数
    edge_count: usize,
    /// 是否有向
    directed: bool,
    _vertex: PhantomData<fn() -> V>,
}

impl<V: GraphVertex> AdjacencyList<V> {
    /// 使用默认映射创建邻接表
    pub fn new(directed: bool) -> Self {
        Self::with_mapper(HashVertexMapper::new(), directed)
    }

    /// 按预估顶点数预分配
    pub fn with_capacity(capacity: usize, directed: bool) -> Self {
        let mut list = Self::with_mapper(HashVertexMapper::with_capacity(capacity), directed);
        list.buckets.reserve(capacity);
        list
    }
}

impl<V: GraphVertex, M: VertexMapper<V>> AdjacencyList<V, M> {
    /// 使用调用方提供的映射创建邻接表
    ///
    /// 映射中已有的顶点各自得到一个空槽位。
    pub fn with_mapper(mapper: M, directed: bool) -> Self {
        let buckets = vec![EdgeBucket::new(); mapper.vertex_count()];
        debug!(directed, adopted = buckets.len(), "创建邻接表");
        Self {
            mapper,
            buckets,
            edge_count: 0,
            directed,
            _vertex: PhantomData,
        }
    }

    /// 取某个顶点的出边
    pub fn edges_of(&self, idx: VertexIdx) -> Option<&[AdjacentEdge]> {
        self.buckets.get(idx).map(|bucket| bucket.as_slice())
    }

    /// 某个顶点的出度
    pub fn out_degree(&self, idx: VertexIdx) -> Option<usize> {
        self.buckets.get(idx).map(|bucket| bucket.len())
    }

    /// 取回映射
    pub fn into_mapper(self) -> M {
        self.mapper
    }

    /// 解析顶点索引，要求该索引已有槽位
    fn resolve(&self, vertex: &V) -> Result<VertexIdx> {
        let idx = self.mapper.idx_of_vertex(vertex)?;
        if idx >= self.buckets.len() {
            return Err(Error::VertexNotFound(format!("索引 {} 尚无存储槽位", idx)));
        }
        Ok(idx)
    }
}

impl<V: GraphVertex, M: VertexMapper<V>> GraphStore<V> for AdjacencyList<V, M> {
    fn mapper(&self) -> &dyn VertexMapper<V> {
        &self.mapper
    }

    fn add_vertex(&mut self, vertex: V) -> Result<()> {
        let idx = self.mapper.add_mapped_vertex(vertex)?;

        // 映射与存储失步时才会触发
        if idx != self.buckets.len() {
            return Err(Error::VertexAlreadyExists(format!(
                "索引 {} 与槽位数 {} 不一致",
                idx,
                self.buckets.len()
            )));
        }

        self.buckets.push(EdgeBucket::new());
        trace!(idx, "邻接表添加顶点");
        Ok(())
    }

    fn add_edge_weighted(&mut self, src: &V, weight: EdgeWeight, dst: &V) -> Result<()> {
        let src_idx = self.resolve(src)?;
        let dst_idx = self.resolve(dst)?;

        self.buckets[src_idx].push(AdjacentEdge::new(dst_idx, weight));
        if !self.directed {
            self.buckets[dst_idx].push(AdjacentEdge::new(src_idx, weight));
        }
        self.edge_count += 1;

        trace!(src_idx, dst_idx, weight, directed = self.directed, "邻接表添加边");
        Ok(())
    }

    fn for_each_vertex(&self, visitor: &mut VertexVisitor<'_, V>) {
        for idx in 0..self.buckets.len() {
            visitor(&self.mapper, idx);
        }
    }

    fn for_each_adjacent_vertex_by_idx(
        &self,
        src_idx: VertexIdx,
        visitor: &mut AdjacentVisitor<'_, V>,
    ) -> Result<()> {
        let bucket = self
            .buckets
            .get(src_idx)
            .ok_or_else(|| Error::VertexNotFound(format!("索引 {}", src_idx)))?;

        for edge in bucket {
            visitor(&self.mapper, src_idx, edge.weight, edge.dst);
        }
        Ok(())
    }

    fn list_vertices(&self) -> Result<Vec<V>> {
        (0..self.buckets.len())
            .map(|idx| self.mapper.vertex_by_idx(idx).cloned())
            .collect()
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn vertex_count(&self) -> usize {
        self.buckets.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }
}
