//! 通用类型定义

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

/// 顶点索引（稠密、从 0 开始，按注册顺序分配）
pub type VertexIdx = usize;

/// 边权重，未指定时为 0
pub type EdgeWeight = f64;

/// 顶点身份约定
///
/// 任何顶点值都必须提供一个确定的身份投影，作为映射表的查找键。
/// 两个 `id()` 相等的顶点被视为同一个顶点。
pub trait GraphVertex: Clone {
    /// 身份键
    type Id: Eq + Hash + Clone + fmt::Debug;

    /// 获取身份键
    fn id(&self) -> Self::Id;
}

impl GraphVertex for String {
    type Id = String;

    fn id(&self) -> Self::Id {
        self.clone()
    }
}

impl<'a> GraphVertex for &'a str {
    type Id = &'a str;

    fn id(&self) -> Self::Id {
        *self
    }
}

macro_rules! impl_graph_vertex_for_int {
    ($($t:ty),*) => {
        $(
            impl GraphVertex for $t {
                type Id = $t;

                fn id(&self) -> Self::Id {
                    *self
                }
            }
        )*
    };
}

impl_graph_vertex_for_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// 邻接表中的一条边记录
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdjacentEdge {
    /// 目标顶点索引
    pub dst: VertexIdx,
    /// 边权重
    pub weight: EdgeWeight,
}

impl AdjacentEdge {
    pub fn new(dst: VertexIdx, weight: EdgeWeight) -> Self {
        Self { dst, weight }
    }
}

/// 存储后端类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreKind {
    /// 邻接表
    #[default]
    AdjacencyList,
    /// 邻接矩阵
    AdjacencyMatrix,
}

impl StoreKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKind::AdjacencyList => "adjacency_list",
            StoreKind::AdjacencyMatrix => "adjacency_matrix",
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StoreKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "list" | "adjacency_list" | "adjacency-list" => Ok(StoreKind::AdjacencyList),
            "matrix" | "adjacency_matrix" | "adjacency-matrix" => Ok(StoreKind::AdjacencyMatrix),
            other => Err(Error::InvalidConfig(format!("未知的存储后端: {}", other))),
        }
    }
}
