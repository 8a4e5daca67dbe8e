use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::error::{CricError, Result};

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Thin client for the generative text-completion API, constrained to JSON
/// output. One request per call, no retry, default library timeouts.
pub struct GenAiClient {
    client: Client,
    api_key: String,
    model: String,
}

impl GenAiClient {
    /// # Errors
    ///
    /// Returns `MissingKey` when the API key is not in the environment.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_VAR)
            .ok()
            .filter(|k| !k.is_empty())
            .ok_or(CricError::MissingKey { var: API_KEY_VAR })?;
        Ok(Self {
            client: Client::new(),
            api_key,
            model: DEFAULT_MODEL.to_string(),
        })
    }

    /// Ask the model for a completion and decode the returned JSON into `T`.
    ///
    /// # Errors
    ///
    /// Network errors from the call itself, and parse errors when the
    /// response carries no text part or the text does not match `T`.
    pub async fn generate_json<T: DeserializeOwned>(&self, prompt: &str) -> Result<T> {
        let url = format!("{API_BASE}/{}:generateContent?key={}", self.model, self.api_key);
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": { "responseMimeType": "application/json" }
        });

        let resp = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;
        let value: Value = resp.json().await?;

        let text = value["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| CricError::Parse("model response had no text part".to_string()))?;

        Ok(serde_json::from_str(strip_code_fences(text))?)
    }
}

/// Models sometimes wrap JSON output in a markdown code fence despite the
/// mime-type instruction.
pub(crate) fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_plain_json_through() {
        assert_eq!(strip_code_fences(" {\"a\": 1} "), "{\"a\": 1}");
    }

    #[test]
    fn strips_fenced_json() {
        assert_eq!(strip_code_fences("```json\n{\"a\": 1}\n```"), "{\"a\": 1}");
        assert_eq!(strip_code_fences("```\n[]\n```"), "[]");
    }
}
