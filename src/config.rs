//! 图配置
//!
//! 选择存储后端、方向性和大小，可从 JSON 加载

use crate::error::{Error, Result};
use crate::types::StoreKind;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 图配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// 存储后端
    pub backend: StoreKind,
    /// 是否有向
    pub directed: bool,
    /// 顶点数，邻接矩阵必填
    pub vertex_count: Option<usize>,
    /// 邻接表的预分配容量
    pub capacity_hint: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            backend: StoreKind::AdjacencyList,
            directed: true,
            vertex_count: None,
            capacity_hint: 0,
        }
    }
}

impl GraphConfig {
    /// 从 JSON 文本解析
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::InvalidConfig(e.to_string()))
    }

    /// 从 JSON 文件加载
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn with_backend(mut self, backend: StoreKind) -> Self {
        self.backend = backend;
        self
    }

    pub fn with_directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    pub fn with_vertex_count(mut self, vertex_count: usize) -> Self {
        self.vertex_count = Some(vertex_count);
        self
    }

    pub fn with_capacity_hint(mut self, capacity_hint: usize) -> Self {
        self.capacity_hint = capacity_hint;
        self
    }

    /// 校验配置
    pub fn validate(&self) -> Result<()> {
        if self.backend == StoreKind::AdjacencyMatrix && self.vertex_count.is_none() {
            return Err(Error::InvalidConfig(
                "邻接矩阵必须指定 vertex_count".to_string(),
            ));
        }
        Ok(())
    }
}
