//! 高级空 Latent 选择器
//! 依赖:
//! - python: torch

use latent_selector_core::{
    latent::LatentOutput,
    node::{EmptyLatentSelector, NodeDefinition},
    resolution::LatentRequest,
};
use pyo3::{
    prelude::*,
    types::{PyDict, PyTuple, PyType},
};
use tracing::error;

use crate::{
    error::Error,
    wrapper::{
        comfyui::{
            node_input::InputKwargs, output_is_list, return_names, return_types, PromptServer,
            ToPyDict,
        },
        torch::tensor::TensorWrapper,
    },
};

/// 高级空 Latent 选择器
#[pyclass(subclass)]
pub struct EmptyLatentAdvancedSelector {
    node: EmptyLatentSelector,
}

impl PromptServer for EmptyLatentAdvancedSelector {}

#[pymethods]
impl EmptyLatentAdvancedSelector {
    #[new]
    fn new() -> Self {
        Self {
            node: EmptyLatentSelector::default(),
        }
    }

    #[classattr]
    #[pyo3(name = "INPUT_IS_LIST")]
    fn input_is_list() -> bool {
        false
    }

    #[classattr]
    #[pyo3(name = "RETURN_TYPES")]
    fn return_types(py: Python<'_>) -> PyResult<Py<PyTuple>> {
        return_types(py, &EmptyLatentSelector::output_spec())
    }

    #[classattr]
    #[pyo3(name = "RETURN_NAMES")]
    fn return_names(py: Python<'_>) -> PyResult<Py<PyTuple>> {
        return_names(py, &EmptyLatentSelector::output_spec())
    }

    #[classattr]
    #[pyo3(name = "OUTPUT_IS_LIST")]
    fn output_is_list(py: Python<'_>) -> PyResult<Py<PyTuple>> {
        output_is_list(py, &EmptyLatentSelector::output_spec())
    }

    #[classattr]
    #[pyo3(name = "CATEGORY")]
    const CATEGORY: &'static str = EmptyLatentSelector::CATEGORY;

    #[classattr]
    #[pyo3(name = "DESCRIPTION")]
    const DESCRIPTION: &'static str = EmptyLatentSelector::DESCRIPTION;

    #[classattr]
    #[pyo3(name = "FUNCTION")]
    const FUNCTION: &'static str = EmptyLatentSelector::FUNCTION;

    #[classmethod]
    #[pyo3(name = "INPUT_TYPES")]
    fn input_types(_cls: &Bound<'_, PyType>) -> PyResult<Py<PyDict>> {
        Python::with_gil(|py| EmptyLatentSelector::input_spec().to_py_dict(py))
    }

    #[pyo3(name = "generate", signature = (**kwargs))]
    fn generate<'py>(
        &self,
        py: Python<'py>,
        kwargs: Option<&Bound<'py, PyDict>>,
    ) -> PyResult<(Bound<'py, PyDict>, usize, usize)> {
        let results = self.empty_latent(py, kwargs);

        match results {
            Ok(v) => Ok(v),
            Err(e) => {
                error!("EmptyLatentAdvancedSelector error, {e}");
                // 通知前端失败时仍然抛出原始错误
                if let Err(send_err) =
                    self.send_error(py, "EmptyLatentAdvancedSelector".to_string(), e.to_string())
                {
                    error!("send error failed, {send_err}");
                }
                Err(e.into())
            }
        }
    }
}

impl EmptyLatentAdvancedSelector {
    /// 生成空 Latent 并转换为 ComfyUI 的 LATENT 字典
    fn empty_latent<'py>(
        &self,
        py: Python<'py>,
        kwargs: Option<&Bound<'py, PyDict>>,
    ) -> Result<(Bound<'py, PyDict>, usize, usize), Error> {
        let request: LatentRequest = InputKwargs::new(kwargs)?.parse()?;

        let LatentOutput {
            latent,
            width,
            height,
        } = self.node.generate(&request)?;

        let samples = TensorWrapper::<f32>::from_tensor(latent.into_samples()).to_py_tensor(py)?;

        let latent = PyDict::new(py);
        latent.set_item("samples", samples)?;

        Ok((latent, width, height))
    }
}
