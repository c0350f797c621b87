//! Value representation for loaded YAML data and built objects

mod display;
mod impls;
mod node;

pub use node::Node;
pub(crate) use node::walk;

use indexmap::IndexMap;
use std::sync::Arc;

/// An ordered YAML mapping with string keys.
///
/// Insertion order follows the source document.
pub type Mapping = IndexMap<String, Value>;

/// Dynamic value for YAML data.
///
/// Values coming straight from the loader never contain [`Value::Node`];
/// the builder replaces nested mappings with nodes when it wraps a tree.
#[derive(Clone)]
pub enum Value {
    // ═══════════════════════════════════════════════════════════════════
    // Scalars
    // ═══════════════════════════════════════════════════════════════════
    /// `~`, `null` or an empty document
    Null,

    /// `true` or `false`
    Bool(bool),

    /// Signed integer
    Int(i64),

    /// Unsigned integer too large for `i64`
    UInt(u64),

    /// Floating point
    Float(f64),

    /// String scalar
    String(Arc<String>),

    // ═══════════════════════════════════════════════════════════════════
    // Collections
    // ═══════════════════════════════════════════════════════════════════
    /// YAML sequence
    Seq(Arc<Vec<Value>>),

    /// Raw YAML mapping
    Map(Arc<Mapping>),

    /// Mapping wrapped with sanitized attribute access
    Node(Arc<Node>),
}
