//! 测试用小图: 六个顶点，十四条有向边（含一个自环）

use super::store::GraphStore;
use crate::error::Result;
use std::collections::BTreeSet;

pub const SMALL_GRAPH: [(&str, &[&str]); 6] = [
    ("zero", &["one", "two"]),
    ("one", &["zero", "two"]),
    ("two", &["two", "one", "three"]),
    ("three", &["one", "four", "five"]),
    ("four", &["five", "three"]),
    ("five", &["zero", "one"]),
];

pub fn edge_total() -> usize {
    SMALL_GRAPH.iter().map(|(_, adjacent)| adjacent.len()).sum()
}

/// 先加全部顶点，再加全部边
pub fn fill_store<S>(store: &mut S) -> Result<()>
where
    S: GraphStore<&'static str> + ?Sized,
{
    for (vertex, _) in SMALL_GRAPH {
        store.add_vertex(vertex)?;
    }
    for (vertex, adjacent) in SMALL_GRAPH {
        for dst in adjacent {
            store.add_edge(&vertex, dst)?;
        }
    }
    Ok(())
}

/// 顶点既不重复也不缺失，且顺序与索引一致
pub fn assert_vertices<S>(store: &S)
where
    S: GraphStore<&'static str> + ?Sized,
{
    let mut visited = Vec::new();
    store.for_each_vertex(&mut |mapper, idx| {
        visited.push(*mapper.vertex_by_idx(idx).unwrap());
    });

    let expected: Vec<&str> = SMALL_GRAPH.iter().map(|(name, _)| *name).collect();
    assert_eq!(visited, expected);
    assert_eq!(store.list_vertices().unwrap(), expected);
}

/// 每个顶点的邻接集合与样例一致；无向图还包含反向边
pub fn assert_adjacent<S>(store: &S)
where
    S: GraphStore<&'static str> + ?Sized,
{
    for (vertex, _) in SMALL_GRAPH {
        let mut expected = BTreeSet::new();
        for (src, adjacent) in SMALL_GRAPH {
            for dst in adjacent {
                if src == vertex {
                    expected.insert(*dst);
                }
                if !store.is_directed() && *dst == vertex {
                    expected.insert(src);
                }
            }
        }

        let mut seen = Vec::new();
        store
            .for_each_adjacent_vertex(&vertex, &mut |mapper, _, weight, dst| {
                assert_eq!(weight, 0.0);
                seen.push(*mapper.vertex_by_idx(dst).unwrap());
            })
            .unwrap();

        let distinct: BTreeSet<&str> = seen.iter().copied().collect();
        if store.is_directed() {
            assert_eq!(seen.len(), distinct.len(), "{} 的邻接顶点重复", vertex);
        }
        assert_eq!(distinct, expected, "{} 的邻接顶点不符", vertex);
    }
}
