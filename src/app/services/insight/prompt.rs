//! Prompt and response schema for dive insights

use serde_json::{Value, json};

use crate::app::models::DiveConditions;

/// Natural-language prompt built from the five environmental fields
pub fn build_prompt(conditions: &DiveConditions<'_>) -> String {
    format!(
        "Based on these scuba diving conditions:\n\
         Site: {}\n\
         Visibility: {}\n\
         Water Temperature: {}\n\
         Current: {}\n\
         Wave Conditions: {}\n\
         \n\
         Provide a brief \"Pro Diver Insight\" for this specific environment.\n\
         The response must be in JSON format with fields: title, content, advice.",
        conditions.dive_site,
        conditions.visibility,
        conditions.water_temp,
        conditions.current,
        conditions.waves
    )
}

/// Structured-output schema: three required string properties
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": {
                "type": "STRING",
                "description": "A catchy title for the insight."
            },
            "content": {
                "type": "STRING",
                "description": "The main body of the pro diver insight."
            },
            "advice": {
                "type": "STRING",
                "description": "Specific actionable advice for the diver."
            }
        },
        "required": ["title", "content", "advice"]
    })
}
