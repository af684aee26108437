//! 节点输入参数解析
//!
//! ComfyUI 以关键字参数传入控件值, 键为控件名称 (可能包含空格, 如 "Batch Size")

use pyo3::{types::PyDict, Bound};
use serde::de::DeserializeOwned;

use crate::error::Error;

pub struct InputKwargs<'py> {
    kwargs: Bound<'py, PyDict>,
}

impl<'py> InputKwargs<'py> {
    pub fn new(kwargs: Option<&Bound<'py, PyDict>>) -> Result<Self, Error> {
        let kwargs = kwargs.ok_or(Error::PyMissingKwargs(
            "the py kwargs parameter does not exist".to_string(),
        ))?;
        Ok(Self {
            kwargs: kwargs.clone(),
        })
    }

    /// 将全部关键字参数解析为请求结构体
    pub fn parse<T>(&self) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let value: T = pythonize::depythonize(self.kwargs.as_any())?;
        Ok(value)
    }
}
