//! # Output Renderer
//!
//! Turns an assembled document value into text. Formatting is configurable
//! through [`RenderOptions`], which can be loaded from a JSON config fragment:
//!
//! ```rust
//! use jsonapi_encoder::render::RenderOptions;
//!
//! let options = RenderOptions::from_json(r#"{ "pretty": true, "indent": 2 }"#).unwrap();
//! assert!(options.pretty);
//! assert_eq!(options.max_depth, 512);
//! ```

use crate::error::EncodeError;
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

/// Nesting limit applied when none is configured.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Formatting flags passed through to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Multi-line output.
    pub pretty: bool,
    /// Spaces per indentation level when `pretty` is set.
    pub indent: usize,
    /// Write `/` as `\/`.
    pub escape_slashes: bool,
    /// Deepest array/object nesting allowed in the output.
    pub max_depth: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            pretty: false,
            indent: 4,
            escape_slashes: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl RenderOptions {
    pub fn pretty() -> Self {
        Self {
            pretty: true,
            ..Self::default()
        }
    }

    pub fn from_json(config: &str) -> Result<Self, EncodeError> {
        Ok(serde_json::from_str(config)?)
    }
}

/// Renders `value` as JSON text.
pub fn render(value: &Value, options: &RenderOptions) -> Result<String, EncodeError> {
    let depth = nesting_depth(value);
    if depth > options.max_depth {
        return Err(EncodeError::DepthExceeded {
            depth,
            limit: options.max_depth,
        });
    }

    let rendered = if options.pretty {
        let indent = " ".repeat(options.indent);
        let mut buffer = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(
            &mut buffer,
            PrettyFormatter::with_indent(indent.as_bytes()),
        );
        value.serialize(&mut serializer)?;
        String::from_utf8(buffer)?
    } else {
        serde_json::to_string(value)?
    };

    // '/' never appears in JSON outside string literals.
    if options.escape_slashes {
        Ok(rendered.replace('/', "\\/"))
    } else {
        Ok(rendered)
    }
}

/// Array/object nesting of `value`; scalars are 0.
fn nesting_depth(value: &Value) -> usize {
    match value {
        Value::Array(items) => 1 + items.iter().map(nesting_depth).max().unwrap_or(0),
        Value::Object(fields) => 1 + fields.values().map(nesting_depth).max().unwrap_or(0),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_compact_by_default() {
        let value = json!({ "data": { "type": "posts", "id": "1" } });
        let rendered = render(&value, &RenderOptions::default()).unwrap();
        assert_eq!(rendered, r#"{"data":{"type":"posts","id":"1"}}"#);
    }

    #[test]
    fn test_pretty_with_custom_indent() {
        let value = json!({ "data": null });
        let options = RenderOptions {
            indent: 2,
            ..RenderOptions::pretty()
        };
        assert_eq!(render(&value, &options).unwrap(), "{\n  \"data\": null\n}");
    }

    #[test]
    fn test_escape_slashes() {
        let value = json!({ "links": { "self": "http://example.com/posts" } });
        let options = RenderOptions {
            escape_slashes: true,
            ..RenderOptions::default()
        };
        assert_eq!(
            render(&value, &options).unwrap(),
            r#"{"links":{"self":"http:\/\/example.com\/posts"}}"#
        );
    }

    #[test]
    fn test_depth_limit() {
        let value = json!({ "data": { "attributes": { "tags": ["a"] } } });
        assert_eq!(nesting_depth(&value), 4);

        let options = RenderOptions {
            max_depth: 3,
            ..RenderOptions::default()
        };
        match render(&value, &options) {
            Err(EncodeError::DepthExceeded { depth, limit }) => {
                assert_eq!(depth, 4);
                assert_eq!(limit, 3);
            }
            other => panic!("expected depth error, got {:?}", other),
        }
        let options = RenderOptions {
            max_depth: 4,
            ..RenderOptions::default()
        };
        assert!(render(&value, &options).is_ok());
    }

    #[test]
    fn test_options_from_partial_config() {
        let options = RenderOptions::from_json(r#"{ "escape_slashes": true }"#).unwrap();
        assert_eq!(
            options,
            RenderOptions {
                escape_slashes: true,
                ..RenderOptions::default()
            }
        );
        assert!(RenderOptions::from_json("not json").is_err());
    }
}
