//! 存储后端约定
//!
//! 邻接表、邻接矩阵以及调用方自定义的存储都实现 [`GraphStore`]。
//! 存储只认识索引，身份与索引的转换交给它持有的 [`VertexMapper`]。

use super::mapper::VertexMapper;
use crate::error::Result;
use crate::types::{EdgeWeight, GraphVertex, VertexIdx};

/// 顶点访问回调: (映射, 当前顶点索引)
pub type VertexVisitor<'a, V> = dyn FnMut(&dyn VertexMapper<V>, VertexIdx) + 'a;

/// 邻接访问回调: (映射, 源索引, 权重, 目标索引)
pub type AdjacentVisitor<'a, V> =
    dyn FnMut(&dyn VertexMapper<V>, VertexIdx, EdgeWeight, VertexIdx) + 'a;

/// 图存储
///
/// 回调在调用方线程上同步执行。在回调中修改存储结构不受支持。
pub trait GraphStore<V: GraphVertex> {
    /// 存储使用的顶点映射
    fn mapper(&self) -> &dyn VertexMapper<V>;

    /// 添加顶点
    fn add_vertex(&mut self, vertex: V) -> Result<()>;

    /// 添加边（权重为 0）
    fn add_edge(&mut self, src: &V, dst: &V) -> Result<()> {
        self.add_edge_weighted(src, 0.0, dst)
    }

    /// 添加带权重的边
    fn add_edge_weighted(&mut self, src: &V, weight: EdgeWeight, dst: &V) -> Result<()>;

    /// 按索引顺序访问每个顶点
    fn for_each_vertex(&self, visitor: &mut VertexVisitor<'_, V>);

    /// 访问 src 的每个邻接顶点
    fn for_each_adjacent_vertex(&self, src: &V, visitor: &mut AdjacentVisitor<'_, V>) -> Result<()> {
        let src_idx = self.mapper().idx_of_vertex(src)?;
        self.for_each_adjacent_vertex_by_idx(src_idx, visitor)
    }

    /// 同上，但直接给出源索引
    fn for_each_adjacent_vertex_by_idx(
        &self,
        src_idx: VertexIdx,
        visitor: &mut AdjacentVisitor<'_, V>,
    ) -> Result<()>;

    /// 按索引顺序列出全部顶点
    fn list_vertices(&self) -> Result<Vec<V>>;

    /// 是否为有向图
    fn is_directed(&self) -> bool;

    /// 存储中的顶点槽位数
    fn vertex_count(&self) -> usize;

    /// 边数
    fn edge_count(&self) -> usize;

    /// 取 src -> dst 的边权重，没有边时返回 None
    ///
    /// 存在平行边时返回最先添加的那条。
    fn edge_weight_by_idx(&self, src_idx: VertexIdx, dst_idx: VertexIdx) -> Result<Option<EdgeWeight>> {
        let mut found = None;
        self.for_each_adjacent_vertex_by_idx(src_idx, &mut |_, _, weight, adjacent| {
            if found.is_none() && adjacent == dst_idx {
                found = Some(weight);
            }
        })?;
        Ok(found)
    }

    /// 是否存在 src -> dst 的边
    fn has_edge(&self, src: &V, dst: &V) -> Result<bool> {
        let src_idx = self.mapper().idx_of_vertex(src)?;
        let dst_idx = self.mapper().idx_of_vertex(dst)?;
        Ok(self.edge_weight_by_idx(src_idx, dst_idx)?.is_some())
    }
}
