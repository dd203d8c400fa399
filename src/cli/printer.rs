//! 结果打印器
//!
//! 把图的顶点与邻接关系输出为表格或 JSON

use crate::error::{Error, Result};
use crate::graph::GraphStore;
use crate::types::{EdgeWeight, GraphVertex, VertexIdx};
use prettytable::{format, row, Cell, Row, Table};
use serde::Serialize;
use std::fmt::Display;

/// 打印模式
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PrintMode {
    /// 表格模式
    Table,
    /// JSON 模式
    Json,
}

/// 邻接顶点
#[derive(Debug, Clone, Serialize)]
pub struct AdjacentReport {
    pub index: VertexIdx,
    pub vertex: String,
    pub weight: EdgeWeight,
}

/// 单个顶点及其邻接
#[derive(Debug, Clone, Serialize)]
pub struct VertexReport {
    pub index: VertexIdx,
    pub vertex: String,
    pub adjacent: Vec<AdjacentReport>,
}

/// 图报告
#[derive(Debug, Clone, Serialize)]
pub struct GraphReport {
    pub directed: bool,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub vertices: Vec<VertexReport>,
}

impl GraphReport {
    /// 汇总存储内容。`only` 为 Some 时只包含该顶点
    ///
    /// 邻接矩阵中尚未注册的槽位会被跳过。
    pub fn build<V, S>(store: &S, only: Option<&V>) -> Result<Self>
    where
        V: GraphVertex + Display,
        S: GraphStore<V> + ?Sized,
    {
        let indices = match only {
            Some(vertex) => vec![store.mapper().idx_of_vertex(vertex)?],
            None => {
                let mut indices = Vec::with_capacity(store.vertex_count());
                store.for_each_vertex(&mut |_, idx| indices.push(idx));
                indices
            }
        };

        let mut vertices = Vec::with_capacity(indices.len());
        for idx in indices {
            let vertex = match store.mapper().vertex_by_idx(idx) {
                Ok(vertex) => vertex.to_string(),
                Err(Error::VertexNotFound(_)) if only.is_none() => continue,
                Err(e) => return Err(e),
            };

            let mut adjacent = Vec::new();
            store.for_each_adjacent_vertex_by_idx(idx, &mut |mapper, _, weight, dst| {
                let name = mapper
                    .vertex_by_idx(dst)
                    .map(|v| v.to_string())
                    .unwrap_or_else(|_| format!("#{}", dst));
                adjacent.push(AdjacentReport {
                    index: dst,
                    vertex: name,
                    weight,
                });
            })?;

            vertices.push(VertexReport {
                index: idx,
                vertex,
                adjacent,
            });
        }

        Ok(Self {
            directed: store.is_directed(),
            vertex_count: store.mapper().vertex_count(),
            edge_count: store.edge_count(),
            vertices,
        })
    }
}

/// 结果打印器
pub struct Printer {
    mode: PrintMode,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(PrintMode::Table)
    }
}

impl Printer {
    pub fn new(mode: PrintMode) -> Self {
        Self { mode }
    }

    /// 设置打印模式
    pub fn set_mode(&mut self, mode: PrintMode) {
        self.mode = mode;
    }

    /// 打印图报告
    pub fn print_report(&self, report: &GraphReport) -> Result<String> {
        match self.mode {
            PrintMode::Table => Ok(format!(
                "{}\n{}",
                self.format_table(report),
                self.print_stats(report)
            )),
            PrintMode::Json => serde_json::to_string_pretty(report)
                .map_err(|e| Error::SerializationError(e.to_string())),
        }
    }

    /// 表格格式
    fn format_table(&self, report: &GraphReport) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Index", "Vertex", "Adjacent"]);

        for vertex in &report.vertices {
            let adjacent = vertex
                .adjacent
                .iter()
                .map(|a| format!("{} ({})", a.vertex, a.weight))
                .collect::<Vec<_>>()
                .join(", ");
            table.add_row(Row::new(vec![
                Cell::new(&vertex.index.to_string()),
                Cell::new(&vertex.vertex),
                Cell::new(&adjacent),
            ]));
        }

        table.to_string()
    }

    /// 打印统计信息
    pub fn print_stats(&self, report: &GraphReport) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Property", "Value"]);
        table.add_row(row!["Directed", report.directed.to_string()]);
        table.add_row(row!["Vertex Count", report.vertex_count.to_string()]);
        table.add_row(row!["Edge Count", report.edge_count.to_string()]);
        table.to_string()
    }
}
