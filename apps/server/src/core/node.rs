//! 节点注册

use latent_selector_core::node::{NodeCatalog, NodeDefinition, NodeDescriptor, NodeRegistrar};
use pyo3::{
    types::{PyDict, PyDictMethods, PyModule, PyModuleMethods, PyType},
    Bound, PyResult, PyTypeInfo, Python,
};

use crate::error::Error;

/// 节点注册
/// (节点元数据, 节点对象)
pub struct NodeRegister<'py>(pub NodeDescriptor, pub Bound<'py, PyType>);

impl<'py> NodeRegister<'py> {
    /// N: 节点元数据, T: 对应的 Python 类
    pub fn new<N: NodeDefinition, T: PyTypeInfo>(py: Python<'py>) -> Self {
        Self(N::descriptor(), py.get_type::<T>())
    }
}

/// NODE_CLASS_MAPPINGS/NODE_DISPLAY_NAME_MAPPINGS
pub struct NodeMappings<'py> {
    py: Python<'py>,
    catalog: NodeCatalog,
    node_mapping: Bound<'py, PyDict>,
}

impl<'py> NodeMappings<'py> {
    pub fn new(py: Python<'py>) -> Self {
        Self {
            py,
            catalog: NodeCatalog::new(),
            node_mapping: PyDict::new(py),
        }
    }

    /// 注册节点, 节点 ID 重复时返回错误
    pub fn add(&mut self, node: NodeRegister<'py>) -> Result<(), Error> {
        let NodeRegister(descriptor, class) = node;
        self.register(descriptor)?;
        self.node_mapping.set_item(descriptor.node_id, class)?;
        Ok(())
    }

    /// 写入模块属性
    pub fn install(self, m: &Bound<'py, PyModule>) -> PyResult<()> {
        let name_mapping = PyDict::new(self.py);
        for (node_id, display_name) in self.catalog.display_names() {
            name_mapping.set_item(node_id, display_name)?;
        }

        m.add("NODE_CLASS_MAPPINGS", self.node_mapping)?;
        m.add("NODE_DISPLAY_NAME_MAPPINGS", name_mapping)?;
        Ok(())
    }
}

impl NodeRegistrar for NodeMappings<'_> {
    type Error = Error;

    fn register(&mut self, descriptor: NodeDescriptor) -> Result<(), Error> {
        self.catalog.register(descriptor)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pyo3::types::PyAnyMethods;

    use super::*;
    use crate::latent;

    #[test]
    #[ignore]
    fn test_install_mappings() -> anyhow::Result<()> {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(|py| -> anyhow::Result<()> {
            let mut mappings = NodeMappings::new(py);
            for node in latent::node_register(py)? {
                mappings.add(node)?;
            }

            let m = PyModule::new(py, "nodes")?;
            mappings.install(&m)?;

            let display_name: String = m
                .getattr("NODE_DISPLAY_NAME_MAPPINGS")?
                .get_item("EmptyLatentAdvancedSelector")?
                .extract()?;
            assert_eq!(display_name, "📐 Empty Latent Advanced");

            let class_name: String = m
                .getattr("NODE_CLASS_MAPPINGS")?
                .get_item("EmptyLatentAdvancedSelector")?
                .getattr("__name__")?
                .extract()?;
            assert_eq!(class_name, "EmptyLatentAdvancedSelector");
            Ok(())
        })
    }

    #[test]
    #[ignore]
    fn test_duplicate_node() -> anyhow::Result<()> {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(|py| -> anyhow::Result<()> {
            let mut mappings = NodeMappings::new(py);
            for node in latent::node_register(py)? {
                mappings.add(node)?;
            }

            let result = latent::node_register(py)?
                .into_iter()
                .try_for_each(|node| mappings.add(node));
            assert!(matches!(result, Err(Error::Core(_))));
            Ok(())
        })
    }
}
