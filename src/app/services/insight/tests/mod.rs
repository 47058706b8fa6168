//! Tests for the insight adapter


use crate::app::models::DiveEntry;

/// A dive with every environmental field populated
pub fn sample_dive() -> DiveEntry {
    DiveEntry {
        date: "2024-05-01".to_string(),
        dive_site: "Catalinas".to_string(),
        total_time: "48 min".to_string(),
        max_depth: "22m".to_string(),
        avg_depth: "14m".to_string(),
        water_temp: "24C".to_string(),
        visibility: "12m".to_string(),
        current: "Moderate".to_string(),
        waves: "Small swell".to_string(),
        guide: "Ana".to_string(),
        type_of_air: "Nitrox 32".to_string(),
    }
}

/// generateContent response whose first part carries `text`
pub fn candidate_response(text: &str) -> String {
    serde_json::json!({
        "candidates": [{
            "content": {
                "parts": [{ "text": text }],
                "role": "model"
            }
        }]
    })
    .to_string()
}
