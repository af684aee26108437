//! Latent

use latent_selector_core::node::EmptyLatentSelector;
use pyo3::{
    types::{PyModule, PyModuleMethods},
    Bound, PyResult, Python,
};

use crate::core::node::NodeRegister;

mod empty_latent_advanced_selector;
pub use empty_latent_advanced_selector::EmptyLatentAdvancedSelector;

/// Latent 模块
pub fn submodule(py: Python<'_>) -> PyResult<Bound<'_, PyModule>> {
    let submodule = PyModule::new(py, "latent")?;
    submodule.add_class::<EmptyLatentAdvancedSelector>()?;
    Ok(submodule)
}

/// Latent node register
pub fn node_register(py: Python<'_>) -> PyResult<Vec<NodeRegister<'_>>> {
    let nodes: Vec<NodeRegister> = vec![NodeRegister::new::<
        EmptyLatentSelector,
        EmptyLatentAdvancedSelector,
    >(py)];
    Ok(nodes)
}
