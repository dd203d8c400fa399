//! 顶点映射
//!
//! 顶点身份与稠密索引之间的双向映射，是“有多少顶点”“某顶点的索引是多少”的唯一来源

use crate::error::{Error, Result};
use crate::types::{GraphVertex, VertexIdx};
use indexmap::map::Entry;
use indexmap::IndexMap;
use tracing::trace;

/// 顶点映射约定
///
/// 调用方可以直接基于已有数据实现此 trait，避免数据重复。
/// 实现必须保证：已分配的索引永不改变、永不复用，且索引连续分配。
pub trait VertexMapper<V: GraphVertex> {
    /// 按索引取顶点
    fn vertex_by_idx(&self, idx: VertexIdx) -> Result<&V>;

    /// 取顶点的索引
    fn idx_of_vertex(&self, vertex: &V) -> Result<VertexIdx>;

    /// 注册新顶点，返回新分配的索引
    fn add_mapped_vertex(&mut self, vertex: V) -> Result<VertexIdx>;

    /// 已注册的顶点数量
    fn vertex_count(&self) -> usize;

    /// 顶点是否已注册
    fn contains_vertex(&self, vertex: &V) -> bool {
        self.idx_of_vertex(vertex).is_ok()
    }
}

/// 基于哈希表的默认映射实现
///
/// 插入顺序即索引顺序，索引到顶点、顶点到索引两个方向共用同一张 `IndexMap`，
/// 因此二者始终互逆。
#[derive(Debug, Clone)]
pub struct HashVertexMapper<V: GraphVertex> {
    entries: IndexMap<V::Id, V>,
}

impl<V: GraphVertex> HashVertexMapper<V> {
    /// 创建空映射
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// 按容量提示预分配，不影响任何可观察行为
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// 当前已分配的容量
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// 按索引顺序遍历 (索引, 顶点)
    pub fn iter(&self) -> impl Iterator<Item = (VertexIdx, &V)> + '_ {
        self.entries.values().enumerate()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V: GraphVertex> Default for HashVertexMapper<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: GraphVertex> VertexMapper<V> for HashVertexMapper<V> {
    fn vertex_by_idx(&self, idx: VertexIdx) -> Result<&V> {
        self.entries
            .get_index(idx)
            .map(|(_, vertex)| vertex)
            .ok_or_else(|| Error::VertexNotFound(format!("索引 {}", idx)))
    }

    fn idx_of_vertex(&self, vertex: &V) -> Result<VertexIdx> {
        let id = vertex.id();
        self.entries
            .get_index_of(&id)
            .ok_or_else(|| Error::VertexNotFound(format!("{:?}", id)))
    }

    fn add_mapped_vertex(&mut self, vertex: V) -> Result<VertexIdx> {
        match self.entries.entry(vertex.id()) {
            Entry::Occupied(entry) => Err(Error::VertexAlreadyExists(format!("{:?}", entry.key()))),
            Entry::Vacant(entry) => {
                let idx = entry.index();
                trace!(idx, "顶点已映射");
                entry.insert(vertex);
                Ok(idx)
            }
        }
    }

    fn vertex_count(&self) -> usize {
        self.entries.len()
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.entries.contains_key(&vertex.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    const ORDERED: [&str; 6] = ["zero", "one", "two", "three", "four", "five"];

    fn build_mapper(mapper: &mut HashVertexMapper<&'static str>) {
        for (expected, name) in ORDERED.iter().enumerate() {
            let idx = mapper.add_mapped_vertex(*name).unwrap();
            assert_eq!(idx, expected);
        }
    }

    fn assert_mapping(mapper: &HashVertexMapper<&'static str>) {
        for (idx, name) in ORDERED.iter().enumerate() {
            assert_eq!(*mapper.vertex_by_idx(idx).unwrap(), *name);
            assert_eq!(mapper.idx_of_vertex(name).unwrap(), idx);
        }
    }

    #[test]
    fn test_mapper_without_capacity() {
        let mut mapper = HashVertexMapper::new();
        build_mapper(&mut mapper);
        assert_mapping(&mapper);
        assert_eq!(mapper.vertex_count(), 6);
    }

    #[test]
    fn test_mapper_with_small_capacity() {
        // 容量提示小于实际顶点数时照常增长
        let mut mapper = HashVertexMapper::with_capacity(3);
        build_mapper(&mut mapper);
        assert_mapping(&mapper);
        assert_eq!(mapper.vertex_count(), 6);
    }

    #[test]
    fn test_mapper_duplicate() {
        let mut mapper = HashVertexMapper::new();
        build_mapper(&mut mapper);

        let err = mapper.add_mapped_vertex("two").unwrap_err();
        assert!(err.is_already_exists());
        assert_eq!(mapper.vertex_count(), 6);
        assert_eq!(mapper.idx_of_vertex(&"two").unwrap(), 2);
    }

    #[test]
    fn test_mapper_not_found() {
        let mut mapper = HashVertexMapper::new();
        assert!(mapper.vertex_by_idx(0).unwrap_err().is_not_found());

        mapper.add_mapped_vertex("zero").unwrap();
        assert!(mapper.idx_of_vertex(&"six").unwrap_err().is_not_found());
        assert!(mapper.vertex_by_idx(1).unwrap_err().is_not_found());
        assert!(!mapper.contains_vertex(&"six"));
        assert!(mapper.contains_vertex(&"zero"));
    }

    #[test]
    fn test_mapper_random_sequences() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for round in 0..16 {
            let mut ids: Vec<u64> = (0..(round * 8 + 1) as u64).map(|i| i * 7919).collect();
            ids.shuffle(&mut rng);

            let mut mapper = HashVertexMapper::with_capacity(round);
            for (k, id) in ids.iter().enumerate() {
                assert_eq!(mapper.add_mapped_vertex(*id).unwrap(), k);
            }

            for (k, id) in ids.iter().enumerate() {
                assert_eq!(mapper.idx_of_vertex(id).unwrap(), k);
                assert_eq!(*mapper.vertex_by_idx(k).unwrap(), *id);
            }

            let again = *ids.choose(&mut rng).unwrap();
            assert!(mapper.add_mapped_vertex(again).unwrap_err().is_already_exists());
            assert_eq!(mapper.vertex_count(), ids.len());
        }
    }

    #[test]
    fn test_mapper_iter_order() {
        let mut mapper = HashVertexMapper::new();
        build_mapper(&mut mapper);

        let collected: Vec<_> = mapper.iter().map(|(idx, v)| (idx, *v)).collect();
        assert_eq!(collected[0], (0, "zero"));
        assert_eq!(collected[5], (5, "five"));
    }
}
