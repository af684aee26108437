//! 空 Latent 选择器核心库
//!
//! 不依赖 Python, 扩展模块只负责与 ComfyUI 之间的类型转换。

pub mod config;
pub mod error;
pub mod latent;
pub mod node;
pub mod preset;
pub mod resolution;
pub mod schema;

pub use error::Error;
