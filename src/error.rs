//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("顶点不存在: {0}")]
    VertexNotFound(String),

    #[error("顶点已存在: {0}")]
    VertexAlreadyExists(String),

    #[error("顶点索引越界: {0}")]
    VertexOutOfRange(String),

    #[error("无效的配置: {0}")]
    InvalidConfig(String),

    #[error("导入错误: {0}")]
    ImportError(String),

    #[error("序列化错误: {0}")]
    SerializationError(String),

    #[error("CSV 解析错误: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),
}

impl Error {
    /// 是否为“顶点不存在”
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::VertexNotFound(_))
    }

    /// 是否为“顶点已存在”
    pub fn is_already_exists(&self) -> bool {
        matches!(self, Error::VertexAlreadyExists(_))
    }

    /// 是否为“索引越界”
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Error::VertexOutOfRange(_))
    }
}
