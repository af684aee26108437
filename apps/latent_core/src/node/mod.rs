//! 节点定义与注册

use indexmap::IndexMap;
use tracing::info;

use crate::{
    error::Error,
    schema::{InputSpec, OutputSpec},
};

mod empty_latent_selector;
pub use empty_latent_selector::{EmptyLatentSelector, CATEGORY_LATENT};

/// 节点元数据
pub trait NodeDefinition {
    /// 节点 class 名称
    const NODE_ID: &'static str;
    /// 节点显示名称
    const DISPLAY_NAME: &'static str;
    const CATEGORY: &'static str;
    const FUNCTION: &'static str;
    const DESCRIPTION: &'static str;

    fn input_spec() -> InputSpec;

    fn output_spec() -> OutputSpec;

    fn descriptor() -> NodeDescriptor {
        NodeDescriptor {
            node_id: Self::NODE_ID,
            display_name: Self::DISPLAY_NAME,
            category: Self::CATEGORY,
            function: Self::FUNCTION,
        }
    }
}

/// 节点注册信息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeDescriptor {
    pub node_id: &'static str,
    pub display_name: &'static str,
    pub category: &'static str,
    pub function: &'static str,
}

/// 节点注册接口, 由宿主侧实现
pub trait NodeRegistrar {
    type Error;

    fn register(&mut self, descriptor: NodeDescriptor) -> Result<(), Self::Error>;
}

/// 节点目录
///
/// 按注册顺序保存, 同一个节点 ID 只能注册一次
#[derive(Debug, Default)]
pub struct NodeCatalog {
    nodes: IndexMap<&'static str, NodeDescriptor>,
}

impl NodeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, node_id: &str) -> Option<&NodeDescriptor> {
        self.nodes.get(node_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NodeDescriptor> {
        self.nodes.values()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// NODE_CLASS_MAPPINGS 的键 -> NODE_DISPLAY_NAME_MAPPINGS 的值
    pub fn display_names(&self) -> IndexMap<&'static str, &'static str> {
        self.nodes
            .values()
            .map(|node| (node.node_id, node.display_name))
            .collect()
    }
}

impl NodeRegistrar for NodeCatalog {
    type Error = Error;

    fn register(&mut self, descriptor: NodeDescriptor) -> Result<(), Error> {
        if self.nodes.contains_key(descriptor.node_id) {
            return Err(Error::DuplicateNode(descriptor.node_id.to_string()));
        }
        info!("register node: {}", descriptor.node_id);
        self.nodes.insert(descriptor.node_id, descriptor);
        Ok(())
    }
}

/// 本包提供的全部节点
pub fn register_nodes<R: NodeRegistrar>(registrar: &mut R) -> Result<(), R::Error> {
    registrar.register(EmptyLatentSelector::descriptor())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_nodes() -> anyhow::Result<()> {
        let mut catalog = NodeCatalog::new();
        register_nodes(&mut catalog)?;

        assert_eq!(catalog.len(), 1);
        let node = catalog
            .get("EmptyLatentAdvancedSelector")
            .expect("node registered");
        assert_eq!(node.display_name, "📐 Empty Latent Advanced");
        assert_eq!(node.category, "latent");
        assert_eq!(node.function, "generate");
        Ok(())
    }

    #[test]
    fn test_duplicate_node() -> anyhow::Result<()> {
        let mut catalog = NodeCatalog::new();
        register_nodes(&mut catalog)?;

        let result = register_nodes(&mut catalog);
        assert!(matches!(result, Err(Error::DuplicateNode(id)) if id == "EmptyLatentAdvancedSelector"));
        assert_eq!(catalog.len(), 1);
        Ok(())
    }

    #[test]
    fn test_registration_order() -> anyhow::Result<()> {
        let mut catalog = NodeCatalog::new();
        for node_id in ["B", "A", "C"] {
            catalog.register(NodeDescriptor {
                node_id,
                display_name: node_id,
                category: "test",
                function: "execute",
            })?;
        }

        let ids: Vec<&str> = catalog.iter().map(|node| node.node_id).collect();
        assert_eq!(ids, vec!["B", "A", "C"]);
        assert_eq!(catalog.display_names().get("A"), Some(&"A"));
        Ok(())
    }
}
