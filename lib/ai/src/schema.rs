//! Declarative response schemas.
//!
//! A [`ResponseSchema`] serializes to the OpenAPI subset Gemini accepts as
//! `generationConfig.responseSchema`. The same value validates the parsed
//! response, so a reply that ignores the declared shape is rejected instead
//! of reaching the caller half-formed.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::fmt;

/// JSON type of a schema node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SchemaType {
    String,
    Array,
    Object,
}

impl SchemaType {
    fn matches(self, value: &JsonValue) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Array => value.is_array(),
            Self::Object => value.is_object(),
        }
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::String => "STRING",
            Self::Array => "ARRAY",
            Self::Object => "OBJECT",
        };
        f.write_str(name)
    }
}

/// A declarative description of an expected JSON value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseSchema {
    /// JSON type of this node.
    #[serde(rename = "type")]
    pub schema_type: SchemaType,
    /// Human-readable guidance for the model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Item schema, for arrays.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<ResponseSchema>>,
    /// Field schemas, for objects.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, ResponseSchema>,
    /// Field names that must be present, for objects.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    /// Order the model should emit fields in, for objects.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub property_ordering: Vec<String>,
    /// Minimum number of items, for arrays.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_items: Option<u32>,
    /// Maximum number of items, for arrays.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_items: Option<u32>,
    /// Minimum length in characters, for strings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,
}

impl ResponseSchema {
    fn of_type(schema_type: SchemaType) -> Self {
        Self {
            schema_type,
            description: None,
            items: None,
            properties: BTreeMap::new(),
            required: Vec::new(),
            property_ordering: Vec::new(),
            min_items: None,
            max_items: None,
            min_length: None,
        }
    }

    /// A string node.
    #[must_use]
    pub fn string() -> Self {
        Self::of_type(SchemaType::String)
    }

    /// An array whose items all follow `items`.
    #[must_use]
    pub fn array(items: ResponseSchema) -> Self {
        let mut schema = Self::of_type(SchemaType::Array);
        schema.items = Some(Box::new(items));
        schema
    }

    /// An object with no fields yet.
    #[must_use]
    pub fn object() -> Self {
        Self::of_type(SchemaType::Object)
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds a required field. Fields are emitted in the order added.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, schema: ResponseSchema) -> Self {
        let name = name.into();
        self.required.push(name.clone());
        self.property_ordering.push(name.clone());
        self.properties.insert(name, schema);
        self
    }

    /// Requires exactly `count` items.
    #[must_use]
    pub fn with_exact_items(mut self, count: u32) -> Self {
        self.min_items = Some(count);
        self.max_items = Some(count);
        self
    }

    /// Requires strings to be at least `min` characters long.
    #[must_use]
    pub fn with_min_length(mut self, min: u32) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Serializes the schema into the JSON form sent to the model.
    #[must_use]
    pub fn to_json(&self) -> JsonValue {
        serde_json::to_value(self).unwrap_or(JsonValue::Null)
    }

    /// Checks a parsed value against this schema.
    ///
    /// Returns every violation found, each prefixed with a JSON path such as
    /// `$.videoIdeas[2].title`. Fields not declared in the schema are
    /// ignored.
    pub fn validate(&self, value: &JsonValue) -> Result<(), Vec<String>> {
        let mut violations = Vec::new();
        self.collect_violations("$", value, &mut violations);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }

    fn collect_violations(&self, path: &str, value: &JsonValue, out: &mut Vec<String>) {
        if !self.schema_type.matches(value) {
            out.push(format!(
                "{path}: expected {}, got {}",
                self.schema_type,
                json_type_name(value)
            ));
            return;
        }

        match value {
            JsonValue::String(text) => {
                if let Some(min) = self.min_length {
                    let len = text.trim().chars().count();
                    if len < min as usize {
                        out.push(format!(
                            "{path}: expected at least {min} characters, got {len}"
                        ));
                    }
                }
            }
            JsonValue::Array(values) => {
                let len = values.len();
                if let Some(min) = self.min_items
                    && len < min as usize
                {
                    out.push(format!("{path}: expected at least {min} items, got {len}"));
                }
                if let Some(max) = self.max_items
                    && len > max as usize
                {
                    out.push(format!("{path}: expected at most {max} items, got {len}"));
                }
                if let Some(items) = &self.items {
                    for (index, item) in values.iter().enumerate() {
                        items.collect_violations(&format!("{path}[{index}]"), item, out);
                    }
                }
            }
            JsonValue::Object(fields) => {
                for name in &self.required {
                    if !fields.contains_key(name) {
                        out.push(format!("{path}.{name}: missing required field"));
                    }
                }
                for (name, schema) in &self.properties {
                    if let Some(field) = fields.get(name) {
                        schema.collect_violations(&format!("{path}.{name}"), field, out);
                    }
                }
            }
            _ => {}
        }
    }
}

fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn idea_schema() -> ResponseSchema {
        ResponseSchema::array(
            ResponseSchema::object()
                .field("title", ResponseSchema::string())
                .field(
                    "tags",
                    ResponseSchema::array(ResponseSchema::string()).with_description("Tags"),
                ),
        )
    }

    #[test]
    fn serializes_to_gemini_shape() {
        let json = idea_schema().to_json();
        assert_eq!(json["type"], "ARRAY");
        assert_eq!(json["items"]["type"], "OBJECT");
        assert_eq!(json["items"]["required"], json!(["title", "tags"]));
        assert_eq!(json["items"]["propertyOrdering"], json!(["title", "tags"]));
        assert_eq!(json["items"]["properties"]["tags"]["items"]["type"], "STRING");
        assert_eq!(json["items"]["properties"]["tags"]["description"], "Tags");
        assert!(json.get("minItems").is_none());
    }

    #[test]
    fn accepts_conforming_value() {
        let value = json!([
            {"title": "A", "tags": ["x", "y"]},
            {"title": "B", "tags": [], "extra": true}
        ]);
        assert!(idea_schema().validate(&value).is_ok());
    }

    #[test]
    fn reports_missing_fields_and_wrong_types() {
        let value = json!([
            {"title": 7, "tags": ["x"]},
            {"tags": "x"}
        ]);
        let violations = idea_schema().validate(&value).expect_err("should fail");
        assert_eq!(
            violations,
            vec![
                "$[0].title: expected STRING, got number".to_string(),
                "$[1].title: missing required field".to_string(),
                "$[1].tags: expected ARRAY, got string".to_string(),
            ]
        );
    }

    #[test]
    fn enforces_item_bounds() {
        let schema = ResponseSchema::array(ResponseSchema::string()).with_exact_items(4);
        assert!(schema.validate(&json!(["a", "b", "c", "d"])).is_ok());

        let violations = schema.validate(&json!(["a"])).expect_err("too few");
        assert_eq!(violations, vec!["$: expected at least 4 items, got 1"]);

        let violations = schema
            .validate(&json!(["a", "b", "c", "d", "e"]))
            .expect_err("too many");
        assert_eq!(violations, vec!["$: expected at most 4 items, got 5"]);
    }

    #[test]
    fn enforces_min_length_on_trimmed_text() {
        let schema = ResponseSchema::string().with_min_length(1);
        assert!(schema.validate(&json!("Opening Hook")).is_ok());
        assert!(schema.validate(&json!("   ")).is_err());
    }

    #[test]
    fn schema_serde_roundtrip() {
        let schema = idea_schema().with_exact_items(5);
        let json = serde_json::to_string(&schema).expect("serialize");
        let parsed: ResponseSchema = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(schema, parsed);
    }
}
