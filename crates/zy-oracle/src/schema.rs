//! The structured response schema sent to Gemini.
//!
//! The schema is conditional: `changingLines` and `secondaryHexagram` are in
//! the `required` set only when the cast actually has changing lines. With a
//! stable cast they stay described but optional, so the model is free to omit
//! them.

use serde_json::{Value, json};

/// Build the Gemini `responseSchema` for a cast.
pub fn response_schema(has_changing_lines: bool) -> Value {
    let mut required = vec!["primaryHexagram", "summary"];
    if has_changing_lines {
        required.push("changingLines");
        required.push("secondaryHexagram");
    }

    json!({
        "type": "OBJECT",
        "properties": {
            "primaryHexagram": {
                "type": "OBJECT",
                "properties": {
                    "name": {
                        "type": "STRING",
                        "description": "Name of the primary hexagram."
                    },
                    "judgment": {
                        "type": "STRING",
                        "description": "Overall reading of the primary hexagram, its core meaning and counsel."
                    },
                    "image": {
                        "type": "STRING",
                        "description": "Symbolic meaning of the image formed by the two trigrams."
                    }
                },
                "required": ["name", "judgment", "image"]
            },
            "changingLines": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "line": {
                            "type": "INTEGER",
                            "description": "Changing line position (1 to 6)."
                        },
                        "text": {
                            "type": "STRING",
                            "description": "Reading for this changing line."
                        }
                    },
                    "required": ["line", "text"]
                }
            },
            "secondaryHexagram": {
                "type": "OBJECT",
                "properties": {
                    "name": {
                        "type": "STRING",
                        "description": "Name of the relating hexagram."
                    },
                    "judgment": {
                        "type": "STRING",
                        "description": "Reading of the relating hexagram, where the situation is heading."
                    }
                },
                "required": ["name", "judgment"]
            },
            "summary": {
                "type": "STRING",
                "description": "Closing synthesis and counsel drawing all aspects of the cast together."
            }
        },
        "required": required
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn required_of(schema: &Value) -> Vec<String> {
        schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap().to_string())
            .collect()
    }

    #[test]
    fn stable_cast_requires_only_primary_and_summary() {
        let schema = response_schema(false);
        assert_eq!(required_of(&schema), vec!["primaryHexagram", "summary"]);
    }

    #[test]
    fn changing_cast_requires_all_four() {
        let schema = response_schema(true);
        assert_eq!(
            required_of(&schema),
            vec![
                "primaryHexagram",
                "summary",
                "changingLines",
                "secondaryHexagram"
            ]
        );
    }

    #[test]
    fn properties_always_describe_all_fields() {
        for has_changing in [false, true] {
            let schema = response_schema(has_changing);
            let properties = schema["properties"].as_object().unwrap();
            for key in [
                "primaryHexagram",
                "changingLines",
                "secondaryHexagram",
                "summary",
            ] {
                assert!(properties.contains_key(key), "missing {key}");
            }
        }
    }

    #[test]
    fn primary_narrative_fields_are_required() {
        let schema = response_schema(false);
        let required = schema["properties"]["primaryHexagram"]["required"]
            .as_array()
            .unwrap();
        assert_eq!(required.len(), 3);
    }
}
