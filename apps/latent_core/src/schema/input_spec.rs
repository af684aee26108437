//! 节点输入输出构建器
//!
//! 提供类型安全、易用的构建器 API，用于描述 ComfyUI 节点的 INPUT_TYPES,
//! 由扩展模块转换为 Python 字典。
//!
//! 序列化结构与 INPUT_TYPES 一致:
//! `{"required": {"Width": ["INT", {"default": 832}]}, "optional": {}}`

use indexmap::IndexMap;
use serde::{ser::SerializeMap, ser::SerializeTuple, Serialize, Serializer};

use crate::schema::types::{NODE_BOOLEAN, NODE_FLOAT, NODE_INT, NODE_STRING};

/// 输入规范构建器
#[derive(Debug, Clone, Default)]
pub struct InputSpec {
    required: Vec<(String, InputType)>,
    optional: Vec<(String, InputType)>,
}

impl InputSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加必需输入
    pub fn with_required(mut self, name: impl Into<String>, input: InputType) -> Self {
        self.required.push((name.into(), input));
        self
    }

    /// 添加可选输入
    pub fn with_optional(mut self, name: impl Into<String>, input: InputType) -> Self {
        self.optional.push((name.into(), input));
        self
    }

    pub fn required(&self) -> &[(String, InputType)] {
        &self.required
    }

    pub fn optional(&self) -> &[(String, InputType)] {
        &self.optional
    }

    /// 按名称查找必需输入
    pub fn get_required(&self, name: &str) -> Option<&InputType> {
        self.required
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, input)| input)
    }
}

/// 按插入顺序序列化为 {name: input}
struct Fields<'a>(&'a [(String, InputType)]);

impl Serialize for Fields<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, input) in self.0 {
            map.serialize_entry(name, input)?;
        }
        map.end()
    }
}

impl Serialize for InputSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("required", &Fields(&self.required))?;
        map.serialize_entry("optional", &Fields(&self.optional))?;
        map.end()
    }
}

/// 输入类型（包含类型和参数）
#[derive(Debug, Clone)]
pub struct InputType {
    kind: InputKind,
    params: IndexMap<String, ParamValue>,
    list_options: Vec<String>,
}

/// 输入类型枚举（仅表示类型，不包含参数）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    String,
    Int,
    Float,
    Bool,
    /// 下拉选项
    List,
}

impl InputKind {
    /// 宿主类型名称, 下拉选项没有类型名称
    pub fn type_name(&self) -> Option<&'static str> {
        match self {
            InputKind::String => Some(NODE_STRING),
            InputKind::Int => Some(NODE_INT),
            InputKind::Float => Some(NODE_FLOAT),
            InputKind::Bool => Some(NODE_BOOLEAN),
            InputKind::List => None,
        }
    }
}

/// 参数值
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl InputType {
    fn new(kind: InputKind) -> Self {
        Self {
            kind,
            params: IndexMap::new(),
            list_options: Vec::new(),
        }
    }

    pub fn string() -> Self {
        Self::new(InputKind::String)
    }

    pub fn int() -> Self {
        Self::new(InputKind::Int)
    }

    pub fn float() -> Self {
        Self::new(InputKind::Float)
    }

    pub fn bool() -> Self {
        Self::new(InputKind::Bool)
    }

    /// 下拉选项列表
    pub fn list(options: Vec<String>) -> Self {
        Self {
            kind: InputKind::List,
            params: IndexMap::new(),
            list_options: options,
        }
    }

    pub fn kind(&self) -> InputKind {
        self.kind
    }

    pub fn params(&self) -> &IndexMap<String, ParamValue> {
        &self.params
    }

    pub fn param(&self, key: &str) -> Option<&ParamValue> {
        self.params.get(key)
    }

    pub fn list_options(&self) -> &[String] {
        &self.list_options
    }
}

impl InputType {
    // ============ 通用参数 ============

    /// 设置默认值
    pub fn default<V: Into<ParamValue>>(mut self, value: V) -> Self {
        self.params.insert("default".to_string(), value.into());
        self
    }

    // ============ 数值类型参数 ============

    /// 设置最小值
    pub fn min<V: Into<ParamValue>>(mut self, value: V) -> Self {
        self.params.insert("min".to_string(), value.into());
        self
    }

    /// 设置最大值
    pub fn max<V: Into<ParamValue>>(mut self, value: V) -> Self {
        self.params.insert("max".to_string(), value.into());
        self
    }

    /// 设置步长
    pub fn step<V: Into<ParamValue>>(mut self, value: V) -> Self {
        self.params.insert("step".to_string(), value.into());
        self
    }

    // ============ 布尔类型参数 ============

    /// 设置开标签
    pub fn label_on(mut self, label: impl Into<String>) -> Self {
        self.params
            .insert("label_on".to_string(), ParamValue::String(label.into()));
        self
    }

    /// 设置关标签
    pub fn label_off(mut self, label: impl Into<String>) -> Self {
        self.params
            .insert("label_off".to_string(), ParamValue::String(label.into()));
        self
    }
}

/// 列表类型：(options_list, params_dict)
/// 其他类型：(type_name, params_dict)
impl Serialize for InputType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(2)?;
        match self.kind.type_name() {
            Some(type_name) => tuple.serialize_element(type_name)?,
            None => tuple.serialize_element(&self.list_options)?,
        }
        tuple.serialize_element(&self.params)?;
        tuple.end()
    }
}

// ============ ParamValue 的 From 实现 ============

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::String(s)
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::String(s.to_string())
    }
}

impl From<i64> for ParamValue {
    fn from(i: i64) -> Self {
        ParamValue::Int(i)
    }
}

impl From<i32> for ParamValue {
    fn from(i: i32) -> Self {
        ParamValue::Int(i as i64)
    }
}

impl From<usize> for ParamValue {
    fn from(i: usize) -> Self {
        ParamValue::Int(i as i64)
    }
}

impl From<f64> for ParamValue {
    fn from(f: f64) -> Self {
        ParamValue::Float(f)
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        ParamValue::Bool(b)
    }
}

/// 输出规范
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputSpec {
    pub types: Vec<&'static str>,
    pub names: Vec<&'static str>,
    pub is_list: Vec<bool>,
}

impl OutputSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output(mut self, type_name: &'static str, name: &'static str) -> Self {
        self.types.push(type_name);
        self.names.push(name);
        self.is_list.push(false);
        self
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
