pub mod core;
pub mod error;
pub mod wrapper;

pub mod latent;

use pyo3::{
    pymodule,
    types::{PyModule, PyModuleMethods},
    Bound, PyResult, Python,
};
use tracing_subscriber::EnvFilter;

use crate::core::node::{NodeMappings, NodeRegister};

/// 前端资源目录
pub const WEB_DIRECTORY: &str = "./web";

/// A Python module implemented in Rust.
#[pymodule]
#[pyo3(name = "comfyui_latent_selector")] // 需要与包名保持一致
fn py_init(py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    // 初始化日志
    // 每个扩展模块都有自己的全局变量，因此所使用的记录器也与其他 Rust 原生扩展无关。
    // 日志级别由 RUST_LOG 控制, 默认 info
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(true)
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(false)
        .try_init();

    // 添加子模块
    m.add_submodule(&latent::submodule(py)?)?;

    // 注册 ComfyUI NODE_CLASS_MAPPINGS/NODE_DISPLAY_NAME_MAPPINGS
    let mut mappings = NodeMappings::new(py);
    for node in node_register(py)? {
        mappings.add(node)?;
    }
    mappings.install(m)?;

    m.add("WEB_DIRECTORY", WEB_DIRECTORY)?;
    Ok(())
}

/// 节点注册
fn node_register(py: Python<'_>) -> PyResult<Vec<NodeRegister<'_>>> {
    let mut nodes: Vec<NodeRegister> = Vec::new();
    nodes.extend(latent::node_register(py)?);
    Ok(nodes)
}
