//! Loading YAML sources into plain values

use std::path::PathBuf;
use std::sync::Arc;

use crate::error::{Result, Yaml2ObjectError};
use crate::source::Source;
use crate::value::{Mapping, Value};

const CORE_SCHEMA_PREFIX: &str = "tag:yaml.org,2002:";

const CORE_TAGS: &[&str] = &["null", "bool", "int", "float", "str", "seq", "map"];

/// Load a source into a plain value.
///
/// Mappings pass through without I/O. Paths are read and parsed on every
/// call; nothing is cached. The result is usually a mapping but may be any
/// value if the document is a scalar or a sequence.
pub fn load(source: &Source) -> Result<Value> {
    match source {
        Source::Mapping(map) => Ok(Value::mapping(map.clone())),
        Source::Path(path) if !path.is_empty() => load_path(path),
        _ => Err(Yaml2ObjectError::no_source()),
    }
}

/// Read and parse the YAML file at `path`.
///
/// A leading `~` or `~/` expands to `$HOME` and relative paths resolve
/// against the current directory. `~user` forms are not expanded; such a
/// path is taken literally, relative to the current directory.
pub fn load_path(path: &str) -> Result<Value> {
    let full_path = resolve_path(path).ok_or_else(Yaml2ObjectError::invalid_source)?;
    let text =
        std::fs::read_to_string(&full_path).map_err(|_| Yaml2ObjectError::invalid_source())?;
    load_str(&text)
}

/// Parse YAML text into a plain value.
///
/// An empty document is `Value::Null`. Merge keys (`<<`) are applied.
pub fn load_str(text: &str) -> Result<Value> {
    let mut doc: serde_yaml::Value = serde_yaml::from_str(text)?;
    doc.apply_merge()?;
    from_yaml(doc)
}

/// Convert a parsed `serde_yaml` value.
///
/// Non-string mapping keys become their YAML scalar text (`1`, `true`).
/// A key whose text is already taken in the same mapping (`1` next to
/// `"1"`) is a [`Yaml2ObjectError::DuplicateKey`]. Tags outside the core
/// schema are rejected.
pub fn from_yaml(value: serde_yaml::Value) -> Result<Value> {
    match value {
        serde_yaml::Value::Null => Ok(Value::Null),
        serde_yaml::Value::Bool(b) => Ok(Value::Bool(b)),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Int(i))
            } else if let Some(u) = n.as_u64() {
                Ok(Value::UInt(u))
            } else {
                Ok(Value::Float(n.as_f64().unwrap_or(f64::NAN)))
            }
        }
        serde_yaml::Value::String(s) => Ok(Value::String(Arc::new(s))),
        serde_yaml::Value::Sequence(seq) => {
            let items = seq.into_iter().map(from_yaml).collect::<Result<Vec<_>>>()?;
            Ok(Value::seq(items))
        }
        serde_yaml::Value::Mapping(map) => {
            let mut out = Mapping::with_capacity(map.len());
            for (k, v) in map {
                let key = key_text(&k)?;
                if out.contains_key(&key) {
                    return Err(Yaml2ObjectError::DuplicateKey(key));
                }
                out.insert(key, from_yaml(v)?);
            }
            Ok(Value::mapping(out))
        }
        serde_yaml::Value::Tagged(tagged) => {
            let tag = tagged.tag.to_string();
            if is_core_tag(&tag) {
                from_yaml(tagged.value)
            } else {
                Err(Yaml2ObjectError::UnsupportedTag(tag))
            }
        }
    }
}

fn key_text(key: &serde_yaml::Value) -> Result<String> {
    match key {
        serde_yaml::Value::String(s) => Ok(s.clone()),
        other => Ok(serde_yaml::to_string(other)?.trim().to_string()),
    }
}

/// `!!name` or the full `tag:yaml.org,2002:name` form; a local `!name` tag
/// is not part of the core schema.
fn is_core_tag(tag: &str) -> bool {
    let name = tag.strip_prefix("!!").or_else(|| {
        tag.strip_prefix('!')
            .unwrap_or(tag)
            .strip_prefix(CORE_SCHEMA_PREFIX)
    });
    name.is_some_and(|name| CORE_TAGS.contains(&name))
}

fn resolve_path(path: &str) -> Option<PathBuf> {
    let expanded = match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => {
            let home = std::env::var_os("HOME")?;
            let mut full = PathBuf::from(home);
            full.push(rest.trim_start_matches('/'));
            full
        }
        _ => PathBuf::from(path),
    };
    if expanded.is_absolute() {
        Some(expanded)
    } else {
        Some(std::env::current_dir().ok()?.join(expanded))
    }
}
