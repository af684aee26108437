//! torch 包装
//! 依赖:
//! - python: torch

pub mod tensor;
