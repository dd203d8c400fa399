//! 数据导入模块
//!
//! 从 CSV 边列表批量构建图：先注册全部端点，再添加全部边

use crate::error::{Error, Result};
use crate::graph::GraphStore;
use crate::types::EdgeWeight;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// 一行边记录: src,dst[,weight]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub src: String,
    pub dst: String,
    #[serde(default)]
    pub weight: Option<EdgeWeight>,
}

/// 导入统计
#[derive(Debug, Default, Clone, Serialize)]
pub struct ImportStats {
    pub vertices_imported: usize,
    pub edges_imported: usize,
    pub duration_ms: u64,
}

/// 边列表导入器
#[derive(Debug, Clone)]
pub struct EdgeListImporter {
    delimiter: u8,
}

impl Default for EdgeListImporter {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeListImporter {
    /// 创建导入器（逗号分隔，需要表头）
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    /// 设置分隔符
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// 从任意输入读取边记录
    pub fn read_records<R: Read>(&self, reader: R) -> Result<Vec<EdgeRecord>> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut records = Vec::new();
        for (line, row) in csv_reader.deserialize::<EdgeRecord>().enumerate() {
            let record = row?;
            if record.src.is_empty() || record.dst.is_empty() {
                // 表头占第 1 行
                return Err(Error::ImportError(format!("第 {} 行缺少端点", line + 2)));
            }
            records.push(record);
        }
        debug!(count = records.len(), "读取边记录");
        Ok(records)
    }

    /// 从文件读取边记录
    pub fn read_records_from_path<P: AsRef<Path>>(&self, path: P) -> Result<Vec<EdgeRecord>> {
        let file = File::open(path)?;
        self.read_records(file)
    }

    /// 按首次出现顺序列出全部端点
    pub fn distinct_vertices(records: &[EdgeRecord]) -> Vec<String> {
        let mut vertices = IndexSet::new();
        for record in records {
            vertices.insert(record.src.as_str());
            vertices.insert(record.dst.as_str());
        }
        vertices.into_iter().map(str::to_string).collect()
    }

    /// 把边记录写入存储
    ///
    /// 存储中已存在的端点不会重复注册。
    pub fn import_records<S>(&self, store: &mut S, records: &[EdgeRecord]) -> Result<ImportStats>
    where
        S: GraphStore<String> + ?Sized,
    {
        let start = Instant::now();
        let mut stats = ImportStats::default();

        for vertex in Self::distinct_vertices(records) {
            if store.mapper().contains_vertex(&vertex) {
                continue;
            }
            store.add_vertex(vertex)?;
            stats.vertices_imported += 1;
        }

        for record in records {
            store.add_edge_weighted(&record.src, record.weight.unwrap_or_default(), &record.dst)?;
            stats.edges_imported += 1;
        }

        stats.duration_ms = start.elapsed().as_millis() as u64;
        info!(
            vertices = stats.vertices_imported,
            edges = stats.edges_imported,
            duration_ms = stats.duration_ms,
            "边列表导入完成"
        );
        Ok(stats)
    }

    /// 读取并导入
    pub fn import_reader<S, R>(&self, store: &mut S, reader: R) -> Result<ImportStats>
    where
        S: GraphStore<String> + ?Sized,
        R: Read,
    {
        let records = self.read_records(reader)?;
        self.import_records(store, &records)
    }
}
