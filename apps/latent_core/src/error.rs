//! 错误处理

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("preset not found, {0}")]
    PresetNotFound(String),
    #[error("node already registered, {0}")]
    DuplicateNode(String),
    #[error("invalid parameter, {0}")]
    InvalidParameter(String),

    #[error("tensor error, {0}")]
    TensorErr(#[from] candle_core::Error),
}

