//! 命令行输出

mod printer;

pub use printer::{AdjacentReport, GraphReport, PrintMode, Printer, VertexReport};
