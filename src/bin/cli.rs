//! GraphStore 命令行工具
//!
//! 从 CSV 边列表构建图并打印顶点与邻接关系

use anyhow::{bail, Context};
use clap::Parser;
use graphstore::cli::{GraphReport, PrintMode, Printer};
use graphstore::config::GraphConfig;
use graphstore::graph::Graph;
use graphstore::import::EdgeListImporter;
use graphstore::types::StoreKind;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "graphstore-cli")]
#[command(about = "GraphStore 边列表查看工具")]
struct Args {
    /// 输入文件路径（CSV: src,dst[,weight]）
    #[arg(short, long)]
    input: PathBuf,

    /// JSON 配置文件，命令行参数会覆盖其中的后端与方向
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 存储后端: list, matrix
    #[arg(short, long)]
    backend: Option<StoreKind>,

    /// 构建无向图
    #[arg(short, long)]
    undirected: bool,

    /// 邻接矩阵大小，缺省时取边列表中的顶点数
    #[arg(long)]
    vertex_count: Option<usize>,

    /// 字段分隔符
    #[arg(short, long, default_value_t = ',')]
    delimiter: char,

    /// 只显示该顶点的邻接
    #[arg(long)]
    vertex: Option<String>,

    /// 以 JSON 输出
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => GraphConfig::load(path)
            .with_context(|| format!("无法加载配置 {}", path.display()))?,
        None => GraphConfig::default(),
    };
    if let Some(backend) = args.backend {
        config = config.with_backend(backend);
    }
    if args.undirected {
        config = config.with_directed(false);
    }
    if let Some(count) = args.vertex_count {
        config = config.with_vertex_count(count);
    }

    if !args.delimiter.is_ascii() {
        bail!("分隔符必须是 ASCII 字符: {}", args.delimiter);
    }
    let importer = EdgeListImporter::new().with_delimiter(args.delimiter as u8);
    let records = importer
        .read_records_from_path(&args.input)
        .with_context(|| format!("无法读取边列表 {}", args.input.display()))?;

    if config.backend == StoreKind::AdjacencyMatrix && config.vertex_count.is_none() {
        let count = EdgeListImporter::distinct_vertices(&records).len();
        config = config.with_vertex_count(count);
    }
    if config.backend == StoreKind::AdjacencyList && config.capacity_hint == 0 {
        config = config.with_capacity_hint(EdgeListImporter::distinct_vertices(&records).len());
    }

    let mut graph: Graph<String> = Graph::from_config(&config)?;
    let stats = importer
        .import_records(&mut graph, &records)
        .context("导入边列表失败")?;
    tracing::debug!(?stats, "导入统计");

    let report = GraphReport::build(&graph, args.vertex.as_ref())
        .with_context(|| format!("无法生成报告 (vertex = {:?})", args.vertex))?;

    let mode = if args.json {
        PrintMode::Json
    } else {
        PrintMode::Table
    };
    println!("{}", Printer::new(mode).print_report(&report)?);

    Ok(())
}
