//! Nodes: read-only wrappers for nested mappings

use std::fmt;
use std::ops::Index;
use std::sync::Arc;

use super::{Mapping, Value};

/// A built mapping with sanitized attribute names.
///
/// `entries` holds the attribute view: keys are valid identifiers and nested
/// mappings have been replaced by further nodes. `original` is the mapping
/// the node was built from, untouched, so [`Node::to_dict`] round-trips
/// exactly whatever sanitization did to the attribute names.
#[derive(Clone)]
pub struct Node {
    /// Cosmetic name derived from the originating key (e.g. "Database", "Include3")
    type_name: String,

    /// Sanitized attribute name to built value, in source order
    entries: Mapping,

    /// The unsanitized mapping this node was built from
    original: Arc<Mapping>,
}

impl Node {
    pub(crate) fn new(type_name: impl Into<String>, entries: Mapping, original: Mapping) -> Self {
        Self {
            type_name: type_name.into(),
            entries,
            original: Arc::new(original),
        }
    }

    /// The node's cosmetic type name
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Get an attribute by its sanitized name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    /// Check whether an attribute is exposed under `name`
    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Sanitized attribute names in source order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Attribute name/value pairs in source order
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.entries.iter()
    }

    /// Number of exposed attributes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no attributes are exposed
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The attribute view as a mapping
    pub fn entries(&self) -> &Mapping {
        &self.entries
    }

    /// The exact mapping this node was built from.
    pub fn to_dict(&self) -> &Mapping {
        &self.original
    }

    /// Follow a dot-separated path through nested nodes.
    ///
    /// Numeric segments index into sequences:
    ///
    /// ```
    /// use yaml2object::{build_with, BuildContext, Source};
    ///
    /// let content = yaml2object::load_str("a:\n  b:\n    - c: 1\n").unwrap();
    /// let source = Source::from(content);
    /// let obj = build_with("Test", Some(source), None, &BuildContext::quiet()).unwrap();
    /// let node = obj.as_node().unwrap();
    ///
    /// assert_eq!(node.lookup("a.b.0.c").and_then(|v| v.as_i64()), Some(1));
    /// assert!(node.lookup("a.missing").is_none());
    /// ```
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let first = self.get(segments.next()?)?;
        walk(first, segments)
    }
}

/// Descend from `current` through the remaining path segments.
pub(crate) fn walk<'a, 'p>(
    mut current: &'a Value,
    segments: impl Iterator<Item = &'p str>,
) -> Option<&'a Value> {
    for segment in segments {
        current = match current {
            Value::Node(node) => node.get(segment)?,
            Value::Seq(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries && self.original == other.original
    }
}

impl Index<&str> for Node {
    type Output = Value;

    /// # Panics
    ///
    /// Panics if no attribute is exposed under `name`.
    fn index(&self, name: &str) -> &Value {
        match self.entries.get(name) {
            Some(value) => value,
            None => panic!("{} has no attribute '{}'", self.type_name, name),
        }
    }
}

impl<'a> IntoIterator for &'a Node {
    type Item = &'a String;
    type IntoIter = indexmap::map::Keys<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.keys()
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.type_name)?;
        super::display::write_map(f, &self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        let mut inner = Mapping::new();
        inner.insert("d".into(), Value::string("v"));
        let child = Node::new("C", inner.clone(), inner);

        let mut original = Mapping::new();
        original.insert("from".into(), Value::Int(1));
        original.insert("c".into(), Value::seq(vec![Value::Int(0)]));

        let mut entries = Mapping::new();
        entries.insert("_from".into(), Value::Int(1));
        entries.insert("c".into(), Value::seq(vec![Value::node(child)]));

        Node::new("Sample", entries, original)
    }

    #[test]
    fn test_get_and_index() {
        let node = sample();
        assert_eq!(node.get("_from"), Some(&Value::Int(1)));
        assert_eq!(node.get("from"), None);
        assert_eq!(node["_from"], Value::Int(1));
    }

    #[test]
    #[should_panic(expected = "Sample has no attribute 'nope'")]
    fn test_index_missing_panics() {
        let _ = &sample()["nope"];
    }

    #[test]
    fn test_iterates_sanitized_keys() {
        let node = sample();
        let keys: Vec<&String> = (&node).into_iter().collect();
        assert_eq!(keys, vec!["_from", "c"]);
        assert_eq!(node.keys().collect::<Vec<_>>(), vec!["_from", "c"]);
        assert_eq!(node.len(), 2);
        assert!(!node.is_empty());
    }

    #[test]
    fn test_to_dict_returns_original() {
        let node = sample();
        assert!(node.to_dict().contains_key("from"));
        assert!(!node.to_dict().contains_key("_from"));
    }

    #[test]
    fn test_lookup_through_sequence() {
        let node = sample();
        assert_eq!(node.lookup("c.0.d").and_then(Value::as_str), Some("v"));
        assert_eq!(node.lookup("c.1.d"), None);
        assert_eq!(node.lookup("c.x"), None);
        assert_eq!(node.lookup("_from.x"), None);
    }

    #[test]
    fn test_equality_ignores_type_name() {
        let a = Node::new("A", Mapping::new(), Mapping::new());
        let b = Node::new("B", Mapping::new(), Mapping::new());
        assert_eq!(a, b);
    }

    #[test]
    fn test_debug_shows_type_name() {
        let mut m = Mapping::new();
        m.insert("x".into(), Value::Int(1));
        let node = Node::new("Point", m.clone(), m);
        assert_eq!(format!("{:?}", node), "Point {\"x\": 1}");
    }
}
