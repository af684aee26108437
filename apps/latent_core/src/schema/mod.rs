//! ComfyUI 节点输入输出声明

mod input_spec;
pub use input_spec::{InputKind, InputSpec, InputType, OutputSpec, ParamValue};

pub mod types;
