use serde::de::DeserializeOwned;
use serde_json::{json, Value};

// Structured-output descriptors declared to Gemini alongside each prompt.
// Field names and required lists here are the wire contract: the serde
// types in models.rs must stay in lockstep with them.

pub fn outfit_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "outfits": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "items": {
                            "type": "ARRAY",
                            "items": { "type": "STRING" },
                            "description": "Array of item IDs from the wardrobe for this outfit.",
                        },
                        "explanation": {
                            "type": "STRING",
                            "description": "A brief explanation for why this outfit works.",
                        },
                    },
                    "required": ["items", "explanation"],
                },
            },
        },
        "required": ["outfits"],
    })
}

pub fn shop_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "suggestions": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": {
                            "type": "STRING",
                            "description": "The name of the suggested clothing item.",
                        },
                        "reason": {
                            "type": "STRING",
                            "description": "A brief reason why this item is a good suggestion.",
                        },
                        "url": {
                            "type": "STRING",
                            "description": "A fictional shopping URL for the item.",
                        },
                    },
                    "required": ["name", "reason", "url"],
                },
            },
        },
        "required": ["suggestions"],
    })
}

// The model returns its JSON as a text part; trim before parsing so stray
// whitespace never counts as a schema violation.
pub fn parse_structured<T: DeserializeOwned>(raw: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(raw.trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GeneratedOutfits, GeneratedShopSuggestions};
    use pretty_assertions::assert_eq;

    #[test]
    fn outfit_schema_marks_both_fields_required() {
        let schema = outfit_response_schema();
        assert_eq!(schema["required"], json!(["outfits"]));
        assert_eq!(
            schema["properties"]["outfits"]["items"]["required"],
            json!(["items", "explanation"])
        );
    }

    #[test]
    fn shop_schema_marks_all_three_fields_required() {
        let schema = shop_response_schema();
        assert_eq!(schema["required"], json!(["suggestions"]));
        assert_eq!(
            schema["properties"]["suggestions"]["items"]["required"],
            json!(["name", "reason", "url"])
        );
    }

    #[test]
    fn parse_structured_tolerates_surrounding_whitespace() {
        let raw = "\n  {\"outfits\": [{\"items\": [\"1\"], \"explanation\": \"ok\"}]}  \n";
        let parsed: GeneratedOutfits = parse_structured(raw).unwrap();
        assert_eq!(parsed.outfits.len(), 1);
        assert_eq!(parsed.outfits[0].items, vec!["1"]);
    }

    #[test]
    fn parse_structured_rejects_missing_required_fields() {
        let missing_explanation = r#"{"outfits": [{"items": ["1"]}]}"#;
        assert!(parse_structured::<GeneratedOutfits>(missing_explanation).is_err());

        let missing_reason = r#"{"suggestions": [{"name": "Blazer", "url": "https://x"}]}"#;
        assert!(parse_structured::<GeneratedShopSuggestions>(missing_reason).is_err());
    }

    #[test]
    fn parse_structured_rejects_malformed_payloads() {
        assert!(parse_structured::<GeneratedOutfits>("not json at all").is_err());
        assert!(parse_structured::<GeneratedOutfits>("{\"outfits\": 7}").is_err());
    }
}
