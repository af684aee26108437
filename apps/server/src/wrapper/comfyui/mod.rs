//! ComfyUI 包装

mod prompt_server;
pub use prompt_server::PromptServer;

mod input_spec;
pub use input_spec::{output_is_list, return_names, return_types, ToPyDict, ToPyTuple};

pub mod node_input;
