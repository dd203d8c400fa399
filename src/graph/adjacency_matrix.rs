//! 邻接矩阵存储
//!
//! 固定大小的 N×N 权重矩阵，N 在创建时确定。同一有序顶点对只保留最后一次写入的权重。

use super::mapper::{HashVertexMapper, VertexMapper};
use super::store::{AdjacentVisitor, GraphStore, VertexVisitor};
use crate::error::{Error, Result};
use crate::types::{EdgeWeight, GraphVertex, VertexIdx};
use std::marker::PhantomData;
use tracing::{debug, trace};

/// 邻接矩阵
pub struct AdjacencyMatrix<V: GraphVertex, M: VertexMapper<V> = HashVertexMapper<V>> {
    /// 顶点映射
    mapper: M,
    /// 按行展开的 N×N 单元格，None 表示无边
    cells: Vec<Option<EdgeWeight>>,
    /// 固定的顶点数 N
    vertex_count: usize,
    /// 是否有向
    directed: bool,
    _vertex: PhantomData<fn() -> V>,
}

impl<V: GraphVertex> AdjacencyMatrix<V> {
    /// 创建 vertex_count×vertex_count 的邻接矩阵
    pub fn new(vertex_count: usize, directed: bool) -> Self {
        Self::build(HashVertexMapper::with_capacity(vertex_count), vertex_count, directed)
    }
}

impl<V: GraphVertex, M: VertexMapper<V>> AdjacencyMatrix<V, M> {
    /// 使用调用方提供的映射创建邻接矩阵
    ///
    /// 映射中已有的顶点数超过矩阵大小时返回 `VertexOutOfRange`。
    pub fn with_mapper(mapper: M, vertex_count: usize, directed: bool) -> Result<Self> {
        if mapper.vertex_count() > vertex_count {
            return Err(Error::VertexOutOfRange(format!(
                "映射已有 {} 个顶点，矩阵大小为 {}",
                mapper.vertex_count(),
                vertex_count
            )));
        }
        Ok(Self::build(mapper, vertex_count, directed))
    }

    fn build(mapper: M, vertex_count: usize, directed: bool) -> Self {
        debug!(vertex_count, directed, "创建邻接矩阵");
        Self {
            mapper,
            cells: vec![None; vertex_count * vertex_count],
            vertex_count,
            directed,
            _vertex: PhantomData,
        }
    }

    /// 已注册的顶点数（不超过矩阵大小）
    pub fn registered_count(&self) -> usize {
        self.mapper.vertex_count()
    }

    /// 矩阵是否已满
    pub fn is_full(&self) -> bool {
        self.registered_count() >= self.vertex_count
    }

    /// 取回映射
    pub fn into_mapper(self) -> M {
        self.mapper
    }

    #[inline]
    fn cell(&self, src_idx: VertexIdx, dst_idx: VertexIdx) -> usize {
        src_idx * self.vertex_count + dst_idx
    }

    /// 解析顶点索引，要求落在矩阵范围内
    fn resolve(&self, vertex: &V) -> Result<VertexIdx> {
        let idx = self.mapper.idx_of_vertex(vertex)?;
        if idx >= self.vertex_count {
            return Err(Error::VertexNotFound(format!(
                "索引 {} 超出矩阵大小 {}",
                idx, self.vertex_count
            )));
        }
        Ok(idx)
    }
}

impl<V: GraphVertex, M: VertexMapper<V>> GraphStore<V> for AdjacencyMatrix<V, M> {
    fn mapper(&self) -> &dyn VertexMapper<V> {
        &self.mapper
    }

    fn add_vertex(&mut self, vertex: V) -> Result<()> {
        if self.mapper.contains_vertex(&vertex) {
            return Err(Error::VertexAlreadyExists(format!("{:?}", vertex.id())));
        }

        // 先检查容量再注册，被拒绝的顶点不会留在映射中
        if self.is_full() {
            return Err(Error::VertexOutOfRange(format!(
                "矩阵已满 (大小 {})",
                self.vertex_count
            )));
        }

        let idx = self.mapper.add_mapped_vertex(vertex)?;
        if idx >= self.vertex_count {
            return Err(Error::VertexOutOfRange(format!(
                "索引 {} 超出矩阵大小 {}",
                idx, self.vertex_count
            )));
        }

        trace!(idx, "邻接矩阵添加顶点");
        Ok(())
    }

    fn add_edge_weighted(&mut self, src: &V, weight: EdgeWeight, dst: &V) -> Result<()> {
        let src_idx = self.resolve(src)?;
        let dst_idx = self.resolve(dst)?;

        let forward = self.cell(src_idx, dst_idx);
        self.cells[forward] = Some(weight);
        if !self.directed {
            let backward = self.cell(dst_idx, src_idx);
            self.cells[backward] = Some(weight);
        }

        trace!(src_idx, dst_idx, weight, directed = self.directed, "邻接矩阵写入边");
        Ok(())
    }

    fn for_each_vertex(&self, visitor: &mut VertexVisitor<'_, V>) {
        for idx in 0..self.vertex_count {
            visitor(&self.mapper, idx);
        }
    }

    fn for_each_adjacent_vertex_by_idx(
        &self,
        src_idx: VertexIdx,
        visitor: &mut AdjacentVisitor<'_, V>,
    ) -> Result<()> {
        if src_idx >= self.vertex_count {
            return Err(Error::VertexNotFound(format!("索引 {}", src_idx)));
        }

        let row = self.cell(src_idx, 0);
        for (dst_idx, cell) in self.cells[row..row + self.vertex_count].iter().enumerate() {
            if let Some(weight) = cell {
                visitor(&self.mapper, src_idx, *weight, dst_idx);
            }
        }
        Ok(())
    }

    fn list_vertices(&self) -> Result<Vec<V>> {
        (0..self.vertex_count)
            .map(|idx| self.mapper.vertex_by_idx(idx).cloned())
            .collect()
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        let n = self.vertex_count;
        (0..n)
            .flat_map(|src| {
                // 无向图只数上三角（含对角线）
                let first = if self.directed { 0 } else { src };
                (first..n).map(move |dst| (src, dst))
            })
            .filter(|&(src, dst)| self.cells[self.cell(src, dst)].is_some())
            .count()
    }

    fn edge_weight_by_idx(&self, src_idx: VertexIdx, dst_idx: VertexIdx) -> Result<Option<EdgeWeight>> {
        for idx in [src_idx, dst_idx] {
            if idx >= self.vertex_count {
                return Err(Error::VertexNotFound(format!("索引 {}", idx)));
            }
        }
        Ok(self.cells[self.cell(src_idx, dst_idx)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::fixtures;

    #[test]
    fn test_adjacency_matrix_small_graph_undirected() {
        let mut matrix = AdjacencyMatrix::new(6, false);
        fixtures::fill_store(&mut matrix).unwrap();

        fixtures::assert_vertices(&matrix);
        fixtures::assert_adjacent(&matrix);
    }

    #[test]
    fn test_adjacency_matrix_small_graph_directed() {
        let mut matrix = AdjacencyMatrix::new(6, true);
        fixtures::fill_store(&mut matrix).unwrap();

        fixtures::assert_vertices(&matrix);
        fixtures::assert_adjacent(&matrix);
        assert_eq!(matrix.edge_count(), fixtures::edge_total());

        // 按目标索引升序
        let two = matrix.mapper().idx_of_vertex(&"two").unwrap();
        let mut seen = Vec::new();
        matrix
            .for_each_adjacent_vertex_by_idx(two, &mut |mapper, _, _, dst| {
                seen.push(*mapper.vertex_by_idx(dst).unwrap());
            })
            .unwrap();
        assert_eq!(seen, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_adjacency_matrix_overwrite() {
        let mut matrix = AdjacencyMatrix::new(2, true);
        matrix.add_vertex("a").unwrap();
        matrix.add_vertex("b").unwrap();

        matrix.add_edge_weighted(&"a", 1.0, &"b").unwrap();
        matrix.add_edge_weighted(&"a", 7.5, &"b").unwrap();

        let mut weights = Vec::new();
        matrix
            .for_each_adjacent_vertex(&"a", &mut |_, _, w, _| weights.push(w))
            .unwrap();
        assert_eq!(weights, vec![7.5]);
        assert_eq!(matrix.edge_count(), 1);
        assert!(!matrix.has_edge(&"b", &"a").unwrap());
    }

    #[test]
    fn test_adjacency_matrix_undirected_mirror() {
        let mut matrix = AdjacencyMatrix::new(3, false);
        for v in ["a", "b", "c"] {
            matrix.add_vertex(v).unwrap();
        }
        matrix.add_edge_weighted(&"c", -4.0, &"a").unwrap();
        matrix.add_edge(&"b", &"b").unwrap();

        assert_eq!(matrix.edge_weight_by_idx(0, 2).unwrap(), Some(-4.0));
        assert_eq!(matrix.edge_weight_by_idx(2, 0).unwrap(), Some(-4.0));
        assert_eq!(matrix.edge_weight_by_idx(1, 1).unwrap(), Some(0.0));
        assert_eq!(matrix.edge_weight_by_idx(0, 1).unwrap(), None);
        assert_eq!(matrix.edge_count(), 2);
    }

    #[test]
    fn test_adjacency_matrix_over_capacity() {
        let mut matrix = AdjacencyMatrix::new(3, true);
        for v in ["a", "b", "c"] {
            matrix.add_vertex(v).unwrap();
        }
        assert!(matrix.is_full());

        let err = matrix.add_vertex("d").unwrap_err();
        assert!(err.is_out_of_range());

        // 被拒绝的顶点不会留在映射中
        assert!(!matrix.mapper().contains_vertex(&"d"));
        assert_eq!(matrix.registered_count(), 3);
        assert!(matrix.add_edge(&"a", &"d").unwrap_err().is_not_found());

        // 已存在优先于越界
        assert!(matrix.add_vertex("a").unwrap_err().is_already_exists());
    }

    #[test]
    fn test_adjacency_matrix_partially_filled() {
        let mut matrix = AdjacencyMatrix::new(4, true);
        matrix.add_vertex("a").unwrap();
        matrix.add_vertex("b").unwrap();

        let mut visited = Vec::new();
        matrix.for_each_vertex(&mut |_, idx| visited.push(idx));
        assert_eq!(visited, vec![0, 1, 2, 3]);

        assert!(matrix.list_vertices().unwrap_err().is_not_found());
        assert!(matrix
            .for_each_adjacent_vertex_by_idx(4, &mut |_, _, _, _| {})
            .unwrap_err()
            .is_not_found());
        assert!(matrix.for_each_adjacent_vertex_by_idx(3, &mut |_, _, _, _| {}).is_ok());
    }

    #[test]
    fn test_adjacency_matrix_with_mapper() {
        let mut mapper = HashVertexMapper::new();
        for v in ["a", "b", "c"] {
            mapper.add_mapped_vertex(v).unwrap();
        }

        let err = AdjacencyMatrix::with_mapper(mapper.clone(), 2, true).err().unwrap();
        assert!(err.is_out_of_range());

        let mut matrix = AdjacencyMatrix::with_mapper(mapper, 3, true).unwrap();
        matrix.add_edge(&"c", &"a").unwrap();
        assert_eq!(matrix.list_vertices().unwrap(), vec!["a", "b", "c"]);
        assert!(matrix.has_edge(&"c", &"a").unwrap());
    }
}
