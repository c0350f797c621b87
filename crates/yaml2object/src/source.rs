//! Where an object's content comes from

use std::path::{Path, PathBuf};

use crate::value::{Mapping, Value};

/// The origin of a built object's content.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    /// Path to a YAML file, read on every build
    Path(String),

    /// Already-parsed mapping, used as-is
    Mapping(Mapping),

    /// Anything else; always rejected by the builder
    Other(Value),
}

impl Source {
    /// Whether this source carries usable data.
    ///
    /// Only non-empty paths and non-empty mappings qualify.
    pub fn is_usable(&self) -> bool {
        match self {
            Source::Path(path) => !path.is_empty(),
            Source::Mapping(map) => !map.is_empty(),
            Source::Other(_) => false,
        }
    }

    /// How warnings refer to this source: the quoted path, or `source`.
    pub fn describe(&self) -> String {
        match self {
            Source::Path(path) => format!("'{path}'"),
            _ => "source".to_string(),
        }
    }
}

impl From<&str> for Source {
    fn from(path: &str) -> Self {
        Source::Path(path.to_string())
    }
}

impl From<String> for Source {
    fn from(path: String) -> Self {
        Source::Path(path)
    }
}

impl From<&Path> for Source {
    fn from(path: &Path) -> Self {
        Source::Path(path.to_string_lossy().into_owned())
    }
}

impl From<PathBuf> for Source {
    fn from(path: PathBuf) -> Self {
        Source::from(path.as_path())
    }
}

impl From<Mapping> for Source {
    fn from(map: Mapping) -> Self {
        Source::Mapping(map)
    }
}

impl From<Value> for Source {
    fn from(value: Value) -> Self {
        match value {
            Value::String(path) => Source::Path(path.as_ref().clone()),
            Value::Map(map) => Source::Mapping(map.as_ref().clone()),
            other => Source::Other(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usable_sources() {
        assert!(Source::from("config.yml").is_usable());
        assert!(!Source::from(Mapping::new()).is_usable());
        let mut m = Mapping::new();
        m.insert("k".into(), Value::from("v"));
        assert!(Source::from(m).is_usable());
        assert!(!Source::from("").is_usable());
        assert!(!Source::from(Value::seq(vec![Value::from("some_path")])).is_usable());
        assert!(!Source::from(Value::Int(3)).is_usable());
    }

    #[test]
    fn test_from_value_dispatches_on_kind() {
        assert_eq!(Source::from(Value::from("a.yml")), Source::Path("a.yml".into()));
        assert_eq!(
            Source::from(Value::mapping(Mapping::new())),
            Source::Mapping(Mapping::new())
        );
        assert_eq!(Source::from(Value::Null), Source::Other(Value::Null));
    }

    #[test]
    fn test_describe() {
        assert_eq!(Source::from("yaml file path").describe(), "'yaml file path'");
        assert_eq!(Source::from(Mapping::new()).describe(), "source");
    }

    #[test]
    fn test_from_path_buf() {
        let src = Source::from(PathBuf::from("conf/app.yml"));
        assert_eq!(src, Source::Path("conf/app.yml".into()));
    }
}
