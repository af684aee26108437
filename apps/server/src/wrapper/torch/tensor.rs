//! Convert to Python object wrapper
//!
//! candle Tensor -> numpy ndarray -> torch.Tensor

use std::marker::PhantomData;

use candle_core::{Tensor, WithDType};
use numpy::{Element, PyArray, PyArrayDyn, PyArrayMethods};
use pyo3::{
    types::{PyAnyMethods, PyModule},
    Bound, PyAny, Python,
};

use crate::error::Error;

pub struct TensorWrapper<T>
where
    T: Element + WithDType,
{
    tensor: Tensor,
    _marker: PhantomData<T>,
}

impl<T> TensorWrapper<T>
where
    T: Element + WithDType,
{
    pub fn from_tensor(tensor: Tensor) -> Self {
        Self {
            tensor,
            _marker: PhantomData,
        }
    }

    /// 转换为 numpy 数组
    pub fn to_ndarray<'py>(self, py: Python<'py>) -> Result<Bound<'py, PyArrayDyn<T>>, Error> {
        let shape = self.tensor.dims().to_vec();
        let data = self.tensor.flatten_all()?.to_vec1::<T>()?;

        let array = PyArray::from_vec(py, data).reshape(shape)?;
        Ok(array)
    }

    /// 转换为python对象
    ///
    /// 将数组转换为 python 的 tensor
    /// ```python,ignore
    /// import torch
    /// tensor = torch.tensor(data)
    /// ```
    pub fn to_py_tensor<'py>(self, py: Python<'py>) -> Result<Bound<'py, PyAny>, Error> {
        let data = self.to_ndarray(py)?;

        let torch = PyModule::import(py, "torch")?;
        let tensor = torch.getattr("tensor")?.call1((data,))?;
        Ok(tensor)
    }
}

#[cfg(test)]
mod tests {
    use candle_core::{DType, Device};
    use numpy::PyUntypedArrayMethods;

    use super::*;

    #[test]
    #[ignore]
    fn test_to_ndarray() -> anyhow::Result<()> {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(|py| -> anyhow::Result<()> {
            let tensor = Tensor::zeros((2, 4, 152, 104), DType::F32, &Device::Cpu)?;
            let array = TensorWrapper::<f32>::from_tensor(tensor).to_ndarray(py)?;

            assert_eq!(array.shape(), &[2, 4, 152, 104]);
            assert!(array.to_vec()?.iter().all(|v| *v == 0.0));
            Ok(())
        })
    }

    /// 需要 torch
    #[test]
    #[ignore]
    fn test_to_py_tensor() -> anyhow::Result<()> {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(|py| -> anyhow::Result<()> {
            let tensor = Tensor::zeros((1, 4, 8, 16), DType::F32, &Device::Cpu)?;
            let py_tensor = TensorWrapper::<f32>::from_tensor(tensor).to_py_tensor(py)?;

            let shape: Vec<usize> = py_tensor.getattr("shape")?.extract()?;
            assert_eq!(shape, vec![1, 4, 8, 16]);
            let dtype = py_tensor.getattr("dtype")?.str()?.to_string();
            assert_eq!(dtype, "torch.float32");
            Ok(())
        })
    }
}
