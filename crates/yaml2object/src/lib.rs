//! # yaml2object
//!
//! Dot-addressable access to YAML configuration.
//!
//! A YAML document (or an in-memory mapping) is turned into a read-only
//! object graph: `config.lookup("database.adapter")` instead of digging
//! through nested maps by hand.
//!
//! ## Architecture
//!
//! - **Loader**: reads a path or passes a mapping through as a [`Value`]
//! - **Sanitizer**: makes mapping keys safe as attribute names
//! - **Builder**: selects the namespace subtree and wraps nested mappings
//!   as immutable [`Node`]s
//!
//! Malformed-but-present data never fails a build. Unknown namespaces,
//! invalid keys and reserved words are reported through a
//! [`WarningSink`] and handled by a documented fallback.
//!
//! ```no_run
//! use yaml2object::YamlObject;
//!
//! let config = YamlObject::builder("Config")
//!     .source("config/app.yml")
//!     .namespace("development")
//!     .build()?;
//!
//! let adapter = config.lookup("database.adapter").and_then(|v| v.as_str());
//! # Ok::<(), yaml2object::Yaml2ObjectError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod builder;
pub mod context;
pub mod error;
pub mod loader;
pub mod sanitize;
pub mod sink;
pub mod source;
pub mod value;

// Re-export main types
pub use builder::{build, build_node, build_with, ObjectBuilder, YamlObject};
pub use context::BuildContext;
pub use error::{Result, Yaml2ObjectError};
pub use loader::{load, load_path, load_str};
pub use sanitize::{sanitize, ReservedWords};
pub use sink::{NullSink, RecordingSink, TracingSink, WarningSink};
pub use source::Source;
pub use value::{Mapping, Node, Value};

/// yaml2object version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
