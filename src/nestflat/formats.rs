//! Output formats for flattened leaves
//!
//! This module provides a pluggable registry of renderers for a flattened sequence.
//! Each format implements the `Formatter` trait and can be registered with `FormatRegistry`.

use super::error::FlattenError;
use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::HashMap;

static DEFAULT_REGISTRY: Lazy<FormatRegistry> = Lazy::new(FormatRegistry::with_defaults);

/// Trait for leaf renderers
///
/// Implementors turn a flattened sequence into its textual representation, without a
/// trailing newline.
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "list", "json")
    fn name(&self) -> &str;

    /// Render the flattened leaves in this format
    fn render(&self, leaves: &[Value]) -> Result<String, FlattenError>;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }
}

/// Bracketed, comma-separated list: `[1, 2, 3]`
pub struct ListFormatter;

impl Formatter for ListFormatter {
    fn name(&self) -> &str {
        "list"
    }

    fn render(&self, leaves: &[Value]) -> Result<String, FlattenError> {
        let items: Vec<String> = leaves.iter().map(Value::to_string).collect();
        Ok(format!("[{}]", items.join(", ")))
    }

    fn description(&self) -> &str {
        "Bracketed list with ', ' separators"
    }
}

/// Compact JSON array
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn render(&self, leaves: &[Value]) -> Result<String, FlattenError> {
        serde_json::to_string(leaves).map_err(|e| FlattenError::Serialization(e.to_string()))
    }

    fn description(&self) -> &str {
        "Compact JSON array"
    }
}

/// Indented JSON array
pub struct PrettyJsonFormatter;

impl Formatter for PrettyJsonFormatter {
    fn name(&self) -> &str {
        "json-pretty"
    }

    fn render(&self, leaves: &[Value]) -> Result<String, FlattenError> {
        serde_json::to_string_pretty(leaves)
            .map_err(|e| FlattenError::Serialization(e.to_string()))
    }

    fn description(&self) -> &str {
        "Pretty-printed JSON array"
    }
}

/// One JSON-encoded leaf per line
pub struct LinesFormatter;

impl Formatter for LinesFormatter {
    fn name(&self) -> &str {
        "lines"
    }

    fn render(&self, leaves: &[Value]) -> Result<String, FlattenError> {
        let lines: Vec<String> = leaves.iter().map(Value::to_string).collect();
        Ok(lines.join("\n"))
    }

    fn description(&self) -> &str {
        "One leaf per line"
    }
}

/// Registry of leaf formatters
///
/// Formats can be registered and retrieved by name.
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter
    ///
    /// If a formatter with the same name already exists, it will be replaced.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    /// Get a formatter by name
    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Render leaves using the named format
    pub fn render(&self, leaves: &[Value], format: &str) -> Result<String, FlattenError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FlattenError::FormatNotFound(format.to_string()))?;
        formatter.render(leaves)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Create a registry with the built-in formatters
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(ListFormatter);
        registry.register(JsonFormatter);
        registry.register(PrettyJsonFormatter);
        registry.register(LinesFormatter);

        registry
    }

    /// Process-wide registry holding the built-in formatters
    pub fn shared() -> &'static FormatRegistry {
        &DEFAULT_REGISTRY
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct TestFormatter;
    impl Formatter for TestFormatter {
        fn name(&self) -> &str {
            "test"
        }
        fn render(&self, leaves: &[Value]) -> Result<String, FlattenError> {
            Ok(format!("{} leaves", leaves.len()))
        }
        fn description(&self) -> &str {
            "Test formatter"
        }
    }

    fn sample_leaves() -> Vec<Value> {
        vec![json!(1), json!("two"), json!(null), json!({"k": [3]})]
    }

    #[test]
    fn test_registry_creation() {
        let registry = FormatRegistry::new();
        assert_eq!(registry.formatters.len(), 0);
    }

    #[test]
    fn test_registry_register() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormatter);

        assert!(registry.has("test"));
        assert_eq!(registry.list_formats(), vec!["test"]);
        assert_eq!(registry.get("test").unwrap().description(), "Test formatter");
        assert_eq!(registry.render(&sample_leaves(), "test").unwrap(), "4 leaves");
    }

    #[test]
    fn test_registry_format_not_found() {
        let registry = FormatRegistry::new();
        let err = registry.render(&[], "nonexistent").unwrap_err();
        assert!(matches!(err, FlattenError::FormatNotFound(name) if name == "nonexistent"));
    }

    #[test]
    fn test_registry_defaults() {
        let registry = FormatRegistry::with_defaults();
        assert_eq!(
            registry.list_formats(),
            vec!["json", "json-pretty", "lines", "list"]
        );
        assert!(FormatRegistry::shared().has("list"));
    }

    #[test]
    fn test_list_format() {
        let leaves = vec![json!(1), json!(2), json!(3), json!(4), json!(5), json!(6)];
        insta::assert_snapshot!(ListFormatter.render(&leaves).unwrap(), @"[1, 2, 3, 4, 5, 6]");
        assert_eq!(ListFormatter.render(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_list_format_mixed_leaves() {
        insta::assert_snapshot!(
            ListFormatter.render(&sample_leaves()).unwrap(),
            @r#"[1, "two", null, {"k":[3]}]"#
        );
    }

    #[test]
    fn test_json_format() {
        insta::assert_snapshot!(
            JsonFormatter.render(&sample_leaves()).unwrap(),
            @r#"[1,"two",null,{"k":[3]}]"#
        );
    }

    #[test]
    fn test_pretty_json_format() {
        let rendered = PrettyJsonFormatter
            .render(&[json!(1), json!("a")])
            .unwrap();
        assert_eq!(rendered, "[\n  1,\n  \"a\"\n]");
    }

    #[test]
    fn test_lines_format() {
        let rendered = LinesFormatter.render(&sample_leaves()).unwrap();
        assert_eq!(rendered, "1\n\"two\"\nnull\n{\"k\":[3]}");
        assert_eq!(LinesFormatter.render(&[]).unwrap(), "");
    }
}
