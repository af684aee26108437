//! 节点声明转换为 Python 对象
//!
//! - InputSpec -> INPUT_TYPES 字典
//! - OutputSpec -> RETURN_TYPES/RETURN_NAMES/OUTPUT_IS_LIST 元组

use indexmap::IndexMap;
use latent_selector_core::schema::{InputSpec, InputType, OutputSpec, ParamValue};
use pyo3::{
    types::{PyDict, PyDictMethods, PyTuple},
    Bound, IntoPyObject, Py, PyAny, PyResult, Python,
};

/// 转换为 PyDict
pub trait ToPyDict {
    fn to_py_dict<'py>(&self, py: Python<'py>) -> PyResult<Py<PyDict>>;
}

/// 转换为 PyTuple
pub trait ToPyTuple {
    fn to_py_tuple<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyAny>>;
}

impl ToPyDict for IndexMap<String, ParamValue> {
    fn to_py_dict<'py>(&self, py: Python<'py>) -> PyResult<Py<PyDict>> {
        let dict = PyDict::new(py);
        for (key, value) in self {
            match value {
                ParamValue::String(s) => dict.set_item(key, s.as_str())?,
                ParamValue::Int(i) => dict.set_item(key, *i)?,
                ParamValue::Float(f) => dict.set_item(key, *f)?,
                ParamValue::Bool(b) => dict.set_item(key, *b)?,
            }
        }
        Ok(dict.into())
    }
}

/// 列表类型：(options_list, params_dict)
/// 其他类型：(type_name, params_dict)
impl ToPyTuple for InputType {
    fn to_py_tuple<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyAny>> {
        let params_dict = self.params().to_py_dict(py)?;
        match self.kind().type_name() {
            Some(type_name) => Ok((type_name, params_dict).into_pyobject(py)?.into_any()),
            None => Ok((self.list_options().to_vec(), params_dict)
                .into_pyobject(py)?
                .into_any()),
        }
    }
}

impl ToPyDict for InputSpec {
    fn to_py_dict<'py>(&self, py: Python<'py>) -> PyResult<Py<PyDict>> {
        let dict = PyDict::new(py);

        let sections = [
            ("required", self.required()),
            ("optional", self.optional()),
        ];
        for (section, inputs) in sections {
            let fields = PyDict::new(py);
            for (name, input_type) in inputs {
                fields.set_item(name, input_type.to_py_tuple(py)?)?;
            }
            dict.set_item(section, fields)?;
        }

        Ok(dict.into())
    }
}

/// RETURN_TYPES
pub fn return_types(py: Python<'_>, outputs: &OutputSpec) -> PyResult<Py<PyTuple>> {
    Ok(PyTuple::new(py, outputs.types.iter().copied())?.unbind())
}

/// RETURN_NAMES
pub fn return_names(py: Python<'_>, outputs: &OutputSpec) -> PyResult<Py<PyTuple>> {
    Ok(PyTuple::new(py, outputs.names.iter().copied())?.unbind())
}

/// OUTPUT_IS_LIST
pub fn output_is_list(py: Python<'_>, outputs: &OutputSpec) -> PyResult<Py<PyTuple>> {
    Ok(PyTuple::new(py, outputs.is_list.iter().copied())?.unbind())
}
