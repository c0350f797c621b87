//! Key sanitization: turning mapping keys into safe attribute names

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::context::BuildContext;
use crate::value::Mapping;

static WORD_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w+$").expect("valid key pattern"));

const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if",
    "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try",
    "while", "with", "yield",
];

const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true",
    "type", "unsafe", "use", "where", "while", "abstract", "become", "box", "do", "final",
    "macro", "override", "priv", "try", "typeof", "unsized", "virtual", "yield",
];

/// Set of words that cannot be used as attribute names as-is.
///
/// The label names the language the words come from and shows up in the
/// rename warning (`Param from is a python keyword. ...`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedWords {
    label: String,
    words: HashSet<String>,
}

impl Default for ReservedWords {
    fn default() -> Self {
        Self {
            label: "reserved".to_string(),
            words: HashSet::new(),
        }
    }
}

impl ReservedWords {
    /// No reserved words at all
    pub fn empty() -> Self {
        Self::default()
    }

    /// Python keywords, matching existing consumers of the object layout
    pub fn python() -> Self {
        PYTHON_KEYWORDS
            .iter()
            .copied()
            .collect::<Self>()
            .with_label("python")
    }

    /// Rust strict and reserved keywords
    pub fn rust() -> Self {
        RUST_KEYWORDS.iter().copied().collect::<Self>().with_label("rust")
    }

    /// Add a word (builder pattern)
    pub fn with(mut self, word: impl Into<String>) -> Self {
        self.words.insert(word.into());
        self
    }

    /// Set the label used in warnings (builder pattern)
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Label used in warnings; `reserved` for custom sets
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Check if `word` is reserved
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of reserved words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ReservedWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}

/// Check whether `key` is made of word characters only.
pub fn is_word_key(key: &str) -> bool {
    WORD_KEY.is_match(key)
}

/// Sanitize the top-level keys of `mapping`.
///
/// Word keys are kept, reserved words gain a leading underscore, and every
/// other key is dropped. Each rename or drop is reported through the
/// context's sink. Nested values are carried over untouched.
///
/// When two keys end up with the same attribute name (`from` and `_from`),
/// the later key wins and keeps the earlier key's position.
pub fn sanitize(mapping: &Mapping, ctx: &BuildContext) -> Mapping {
    let mut sanitized = Mapping::with_capacity(mapping.len());
    for (key, value) in mapping {
        if !is_word_key(key) {
            ctx.warn(&format!(
                "Skipping invalid param {key}. \
                 Param can only contain any word character (letter, number, underscore)"
            ));
            continue;
        }

        let name = if ctx.reserved.contains(key) {
            ctx.warn(&format!(
                "Param {key} is a {} keyword. \
                 Adding _ (underscore) before the param and can be accessed as _{key}",
                ctx.reserved.label()
            ));
            format!("_{key}")
        } else {
            key.clone()
        };

        if sanitized.contains_key(&name) {
            ctx.warn(&format!("Param {key} overrides param already exposed as {name}"));
        }
        sanitized.insert(name, value.clone());
    }
    sanitized
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::RecordingSink;
    use crate::value::Value;
    use std::sync::Arc;

    fn recording() -> (BuildContext, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::new());
        (BuildContext::new().with_sink(sink.clone()), sink)
    }

    #[test]
    fn test_word_key_pattern() {
        assert!(is_word_key("var1"));
        assert!(is_word_key("_private"));
        assert!(is_word_key("123"));
        assert!(is_word_key("größe"));
        assert!(!is_word_key("non-word-key"));
        assert!(!is_word_key("with space"));
        assert!(!is_word_key("dotted.key"));
        assert!(!is_word_key(""));
    }

    #[test]
    fn test_keeps_plain_keys() {
        let (ctx, sink) = recording();
        let mut m = Mapping::new();
        m.insert("var1".into(), Value::from("value1"));
        m.insert("var2".into(), Value::from("value2"));

        assert_eq!(sanitize(&m, &ctx), m);
        assert!(sink.messages().is_empty());
    }

    #[test]
    fn test_collision_last_key_wins() {
        let (ctx, sink) = recording();
        let mut m = Mapping::new();
        m.insert("_from".into(), Value::Int(1));
        m.insert("from".into(), Value::Int(2));

        let out = sanitize(&m, &ctx);
        assert_eq!(out.len(), 1);
        assert_eq!(out.get("_from"), Some(&Value::Int(2)));
        assert_eq!(
            sink.messages().last().map(String::as_str),
            Some("Param from overrides param already exposed as _from")
        );
    }

    #[test]
    fn test_reserved_words_sets() {
        assert!(ReservedWords::python().contains("lambda"));
        assert!(!ReservedWords::python().contains("fn"));
        assert!(ReservedWords::rust().contains("Self"));
        assert!(ReservedWords::empty().is_empty());
        assert!(ReservedWords::empty().with("config").contains("config"));
    }

    #[test]
    fn test_reserved_words_labels() {
        assert_eq!(ReservedWords::python().label(), "python");
        assert_eq!(ReservedWords::rust().label(), "rust");
        assert_eq!(ReservedWords::empty().label(), "reserved");
        assert_eq!(ReservedWords::python().with("config").label(), "python");
        let custom: ReservedWords = ["config"].into_iter().collect();
        assert_eq!(custom.label(), "reserved");
        assert_eq!(custom.with_label("site").label(), "site");
    }

    #[test]
    fn test_reserved_warning_names_the_word_set() {
        let sink = Arc::new(RecordingSink::new());
        let ctx = BuildContext::new()
            .with_sink(sink.clone())
            .with_reserved(ReservedWords::rust());
        let mut m = Mapping::new();
        m.insert("fn".into(), Value::Int(1));

        let out = sanitize(&m, &ctx);
        assert_eq!(out.get("_fn"), Some(&Value::Int(1)));
        assert_eq!(
            sink.messages(),
            vec![
                "Param fn is a rust keyword. \
                 Adding _ (underscore) before the param and can be accessed as _fn"
            ]
        );
    }
}
