use crate::constants::{MANIFEST_INDENT, PLATFORMS_KEY, VERSION_KEY};
use crate::core::types::PlatformEntry;
use crate::error::{ManifestError, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

/// Release manifest (`version.json`).
///
/// Kept as an ordered JSON object so fields this tool does not know about
/// survive a load/save cycle untouched and in place. Only `platforms` is
/// ever modified.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Manifest {
    fields: Map<String, Value>,
}

impl Manifest {
    /// Build from a decoded JSON document.
    ///
    /// The document must be an object, and `platforms`, when present, must be
    /// an object too.
    pub fn from_value(value: Value) -> std::result::Result<Self, String> {
        let fields = match value {
            Value::Object(fields) => fields,
            other => {
                return Err(format!(
                    "expected a JSON object at the top level, found {}",
                    json_kind(&other)
                ));
            }
        };

        if let Some(platforms) = fields.get(PLATFORMS_KEY)
            && !platforms.is_object()
        {
            return Err(format!(
                "'{}' must be an object, found {}",
                PLATFORMS_KEY,
                json_kind(platforms)
            ));
        }

        Ok(Self { fields })
    }

    pub fn from_json_str(content: &str) -> std::result::Result<Self, String> {
        let value: Value = serde_json::from_str(content).map_err(|e| e.to_string())?;
        Self::from_value(value)
    }

    /// Version for display; `unknown` when the manifest has none
    pub fn version_label(&self) -> String {
        match self.fields.get(VERSION_KEY) {
            Some(Value::String(version)) => version.clone(),
            Some(other) => other.to_string(),
            None => "unknown".to_string(),
        }
    }

    pub fn platforms(&self) -> Option<&Map<String, Value>> {
        self.fields.get(PLATFORMS_KEY).and_then(Value::as_object)
    }

    /// Typed view of one platform entry, if present and well formed
    pub fn platform(&self, key: &str) -> Option<PlatformEntry> {
        self.platforms()
            .and_then(|platforms| platforms.get(key))
            .and_then(|entry| serde_json::from_value(entry.clone()).ok())
    }

    pub fn platform_count(&self) -> usize {
        self.platforms().map_or(0, Map::len)
    }

    /// Create an empty `platforms` table if the manifest has none.
    pub fn ensure_platforms(&mut self) -> &mut Map<String, Value> {
        let slot = self
            .fields
            .entry(PLATFORMS_KEY)
            .or_insert_with(|| Value::Object(Map::new()));
        if !slot.is_object() {
            *slot = Value::Object(Map::new());
        }
        let Value::Object(platforms) = slot else {
            unreachable!("platforms slot was normalized to an object");
        };
        platforms
    }

    /// Insert or replace `platforms[key]`. An existing key keeps its position.
    pub fn upsert_platform(&mut self, key: &str, entry: &PlatformEntry) {
        let value = serde_json::json!({
            "url": entry.url,
            "sha256": entry.sha256,
        });
        self.ensure_platforms().insert(key.to_string(), value);
    }

    /// Render as 4-space indented JSON with a single trailing newline.
    pub fn to_pretty_json(&self) -> Result<String> {
        let mut buffer = Vec::new();
        let formatter = PrettyFormatter::with_indent(MANIFEST_INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        self.fields.serialize(&mut serializer).map_err(|e| {
            ManifestError::SerializationError(format!("Manifest serialization: {}", e))
        })?;
        buffer.push(b'\n');

        String::from_utf8(buffer)
            .map_err(|e| ManifestError::SerializationError(format!("Invalid UTF-8 generated: {}", e)))
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
