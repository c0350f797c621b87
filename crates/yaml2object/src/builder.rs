//! Building dot-addressable objects from YAML sources
//!
//! A build validates the source, loads it, picks the namespace subtree and
//! then wraps every nested mapping in a [`Node`]:
//!
//! - mapping values become nodes named after their key (`database` → `Database`)
//! - mappings directly inside a sequence become nodes named after the key and
//!   index (`include[3]` → `Include3`); nested sequences are left alone
//! - a mapping's own keys are sanitized only after its children are built

use std::ops::Index;
use std::sync::Arc;

use crate::context::BuildContext;
use crate::error::{Result, Yaml2ObjectError};
use crate::loader;
use crate::sanitize::{sanitize, ReservedWords};
use crate::sink::WarningSink;
use crate::source::Source;
use crate::value::{walk, Mapping, Node, Value};

/// What a built object exposes.
#[derive(Debug, Clone, PartialEq)]
enum Body {
    /// The selected subtree was a mapping
    Node(Node),

    /// The selected subtree was anything else, exposed under the raw namespace key
    Value { key: String, value: Value },
}

/// A configuration object built from a YAML source.
///
/// Attributes are the sanitized top-level keys of the selected subtree.
/// When that subtree is not a mapping, the object exposes a single attribute
/// named after the namespace and has no [`to_dict`](YamlObject::to_dict).
#[derive(Debug, Clone)]
pub struct YamlObject {
    name: String,
    source: Source,
    namespace: Option<String>,
    body: Body,
}

impl YamlObject {
    /// Start building an object called `name`
    pub fn builder(name: impl Into<String>) -> ObjectBuilder {
        ObjectBuilder::new(name)
    }

    /// The name the object was declared with
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The source the object was built from
    pub fn source(&self) -> &Source {
        &self.source
    }

    /// The namespace requested for this object, if any
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Get an attribute by its sanitized name
    pub fn get(&self, name: &str) -> Option<&Value> {
        match &self.body {
            Body::Node(node) => node.get(name),
            Body::Value { key, value } => (key == name).then_some(value),
        }
    }

    /// Check whether an attribute is exposed under `name`
    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Attribute names in source order
    pub fn keys(&self) -> Vec<&str> {
        match &self.body {
            Body::Node(node) => node.keys().collect(),
            Body::Value { key, .. } => vec![key.as_str()],
        }
    }

    /// Follow a dot-separated path, e.g. `"database.adapter"`
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let first = self.get(segments.next()?)?;
        walk(first, segments)
    }

    /// The root node, when the selected subtree was a mapping
    pub fn as_node(&self) -> Option<&Node> {
        match &self.body {
            Body::Node(node) => Some(node),
            Body::Value { .. } => None,
        }
    }

    /// The unmodified selected subtree.
    ///
    /// `None` when the subtree was not a mapping.
    pub fn to_dict(&self) -> Option<&Mapping> {
        self.as_node().map(Node::to_dict)
    }
}

impl Index<&str> for YamlObject {
    type Output = Value;

    /// # Panics
    ///
    /// Panics if no attribute is exposed under `name`.
    fn index(&self, name: &str) -> &Value {
        match self.get(name) {
            Some(value) => value,
            None => panic!("{} has no attribute '{}'", self.name, name),
        }
    }
}

/// Fluent entry point for building a [`YamlObject`].
///
/// # Example
///
/// ```
/// use yaml2object::{Mapping, Value, YamlObject};
///
/// let mut database = Mapping::new();
/// database.insert("adapter".into(), Value::from("postgresql"));
/// let mut root = Mapping::new();
/// root.insert("database".into(), Value::from(database));
///
/// let config = YamlObject::builder("Config")
///     .source(root)
///     .namespace("database")
///     .build()
///     .unwrap();
///
/// assert_eq!(config["adapter"].as_str(), Some("postgresql"));
/// ```
#[derive(Debug, Clone)]
pub struct ObjectBuilder {
    name: String,
    source: Option<Source>,
    namespace: Option<String>,
    ctx: BuildContext,
}

impl ObjectBuilder {
    /// Create a builder for an object called `name`
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: None,
            namespace: None,
            ctx: BuildContext::default(),
        }
    }

    /// Set the source: a path, a mapping, or any value (validated on build)
    pub fn source(mut self, source: impl Into<Source>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Select a top-level key of the source
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Replace the whole build context
    pub fn context(mut self, ctx: BuildContext) -> Self {
        self.ctx = ctx;
        self
    }

    /// Route warnings to `sink`
    pub fn sink(mut self, sink: Arc<dyn WarningSink>) -> Self {
        self.ctx = self.ctx.with_sink(sink);
        self
    }

    /// Use `reserved` as the reserved word set
    pub fn reserved(mut self, reserved: ReservedWords) -> Self {
        self.ctx = self.ctx.with_reserved(reserved);
        self
    }

    /// Load the source and build the object.
    pub fn build(self) -> Result<YamlObject> {
        build_with(&self.name, self.source, self.namespace.as_deref(), &self.ctx)
    }
}

/// Build an object with the default context.
pub fn build(name: &str, source: Option<Source>, namespace: Option<&str>) -> Result<YamlObject> {
    build_with(name, source, namespace, &BuildContext::default())
}

/// Build an object with an explicit context.
///
/// Fails only when no usable source was given or the source path cannot be
/// loaded. A missing or unknown namespace falls back to the whole document
/// with a warning.
pub fn build_with(
    name: &str,
    source: Option<Source>,
    namespace: Option<&str>,
    ctx: &BuildContext,
) -> Result<YamlObject> {
    let source = match source {
        Some(source) if source.is_usable() => source,
        _ => return Err(Yaml2ObjectError::no_source()),
    };

    let content = loader::load(&source)?;
    let selected = select_namespace(content, namespace, &source, ctx);

    let body = match selected {
        Value::Map(map) => Body::Node(build_node(name, &map, ctx)),
        value => Body::Value {
            key: namespace.unwrap_or_default().to_string(),
            value,
        },
    };

    Ok(YamlObject {
        name: name.to_string(),
        source,
        namespace: namespace.map(str::to_string),
        body,
    })
}

/// Wrap `mapping` and every mapping nested in it as nodes.
pub fn build_node(type_name: &str, mapping: &Mapping, ctx: &BuildContext) -> Node {
    let resolved: Mapping = mapping
        .iter()
        .map(|(key, value)| (key.clone(), resolve_child(key, value, ctx)))
        .collect();
    let entries = sanitize(&resolved, ctx);
    Node::new(type_name, entries, mapping.clone())
}

fn resolve_child(key: &str, value: &Value, ctx: &BuildContext) -> Value {
    match value {
        Value::Map(child) => Value::node(build_node(&node_type_name(key), child, ctx)),
        Value::Seq(items) if items.iter().any(Value::is_mapping) => {
            let base = node_type_name(key);
            let items = items
                .iter()
                .enumerate()
                .map(|(idx, item)| match item {
                    Value::Map(child) => {
                        Value::node(build_node(&format!("{base}{idx}"), child, ctx))
                    }
                    other => other.clone(),
                })
                .collect();
            Value::seq(items)
        }
        other => other.clone(),
    }
}

fn select_namespace(
    content: Value,
    namespace: Option<&str>,
    source: &Source,
    ctx: &BuildContext,
) -> Value {
    let described = source.describe();
    let Some(ns) = namespace.filter(|ns| !ns.is_empty()) else {
        ctx.warn(&format!(
            "Missing namespace attribute. Converting {described} to object."
        ));
        return content;
    };

    if let Some(selected) = content.as_mapping().and_then(|map| map.get(ns)) {
        return selected.clone();
    }

    ctx.warn(&format!(
        "Missing '{ns}' param in {described}. Converting {described} to object."
    ));
    content
}

/// Capitalize the first character of `key`
fn node_type_name(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::RecordingSink;

    fn mapping(pairs: &[(&str, Value)]) -> Mapping {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_node_type_name() {
        assert_eq!(node_type_name("database"), "Database");
        assert_eq!(node_type_name("include"), "Include");
        assert_eq!(node_type_name("éclair"), "Éclair");
        assert_eq!(node_type_name(""), "");
    }

    #[test]
    fn test_nested_nodes_are_named_after_keys() {
        let inner = mapping(&[("python", Value::Float(3.6))]);
        let root = mapping(&[
            ("matrix", Value::from(inner.clone())),
            ("include", Value::seq(vec![Value::Int(1), Value::from(inner)])),
        ]);

        let node = build_node("Root", &root, &BuildContext::quiet());
        assert_eq!(node.type_name(), "Root");
        assert_eq!(node["matrix"].as_node().unwrap().type_name(), "Matrix");

        let include = node["include"].as_seq().unwrap();
        assert_eq!(include[1].as_node().unwrap().type_name(), "Include1");
    }

    #[test]
    fn test_children_warn_before_parent() {
        let sink = Arc::new(RecordingSink::new());
        let ctx = BuildContext::new().with_sink(sink.clone());
        let child = mapping(&[("in", Value::Int(1))]);
        let root = mapping(&[("bad-key", Value::Int(0)), ("child", Value::from(child))]);

        build_node("Root", &root, &ctx);

        let messages = sink.messages();
        assert_eq!(messages.len(), 2);
        assert!(messages[0].starts_with("Param in is a python keyword."));
        assert!(messages[1].starts_with("Skipping invalid param bad-key."));
    }

    #[test]
    fn test_sequences_without_mappings_are_shared() {
        let seq = Value::seq(vec![Value::Int(1), Value::seq(vec![Value::Int(2)])]);
        let root = mapping(&[("list", seq.clone())]);
        let node = build_node("Root", &root, &BuildContext::quiet());

        match (&node["list"], &seq) {
            (Value::Seq(a), Value::Seq(b)) => assert!(Arc::ptr_eq(a, b)),
            _ => panic!("Expected Seq"),
        }
    }
}
