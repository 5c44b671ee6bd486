//! Text normalization client
//!
//! Sends raw pasted text to a generative language API and gets back a
//! Bengali headline, body and caption. One request per call, no retries.

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{Error, Result, StudioConfig};

/// Which card the generated text is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    News,
    Quote,
}

const NEWS_INSTRUCTION: &str = "\
You are a Senior News Editor for a top-tier Bengali News Portal (Basherkella).
CRITICAL RULE: ALL OUTPUT MUST BE IN BENGALI LANGUAGE ONLY. DO NOT USE ENGLISH WORDS.

Your Goal:
1. Create a CATCHY and ATTRACTIVE headline in Bengali.
2. Write a DETAILED \"News Analysis\" (নিউজ বিশ্লেষণ) report in Bengali.

INPUT ANALYSIS RULES:
- Read the whole text carefully.
- Extract the core facts.
- Neutralize any bias.

OUTPUT FIELDS:
1. 'headline': Very catchy, at most 3 lines visually (approx 5-15 words), Bengali.
2. 'body': Leave empty or at most 1 very short sentence in Bengali if context is needed.
3. 'caption': The detailed news analysis in full journalistic report style, strictly Bengali, long.";

const QUOTE_INSTRUCTION: &str = "\
You are a specialized Bengali Editor for Basherkella Quote Cards.
CRITICAL RULE: ALL OUTPUT MUST BE IN BENGALI LANGUAGE ONLY.

Your Task:
1. Analyze the input text carefully.
2. Extract the CORE QUOTE (what the person actually said) translated to or kept in Bengali.
3. Extract the Speaker's Name and Designation in Bengali.

Output Rules:
- 'headline': The quote text itself in Bengali. (Do not add quotation marks).
- 'body': The speaker's name + designation in Bengali (e.g. \"ড. মুহাম্মদ ইউনূস, প্রধান উপদেষ্টা\").
- 'caption': A short, engaging social media caption in Bengali (2-3 sentences).";

impl Mode {
    pub fn system_instruction(self) -> &'static str {
        match self {
            Mode::News => NEWS_INSTRUCTION,
            Mode::Quote => QUOTE_INSTRUCTION,
        }
    }

    /// `(headline, body, caption)` property descriptions of the response schema.
    fn descriptions(self) -> [&'static str; 3] {
        match self {
            Mode::News => [
                "A catchy news headline in Bengali (max 3 lines)",
                "Optional short context in Bengali",
                "Detailed news analysis/report in Bengali language",
            ],
            Mode::Quote => [
                "The direct quote text in Bengali script",
                "Speaker name and designation in Bengali script",
                "Social media caption in Bengali script",
            ],
        }
    }
}

/// Structured text returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedContent {
    pub headline: String,
    pub body: String,
    pub caption: String,
}

pub struct NormalizeClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl NormalizeClient {
    pub fn new(config: &StudioConfig) -> Result<Self> {
        Ok(Self {
            client: crate::http::client(config)?,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config.api_key.clone().filter(|k| !k.trim().is_empty()),
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Replace the credential, e.g. after the user picked a new key.
    pub fn set_api_key(&mut self, key: Option<String>) {
        self.api_key = key.filter(|k| !k.trim().is_empty());
    }

    /// Build the `generateContent` request body.
    pub fn request_body(raw: &str, mode: Mode) -> Value {
        let [headline, body, caption] = mode.descriptions();
        json!({
            "systemInstruction": { "parts": [{ "text": mode.system_instruction() }] },
            "contents": [{ "role": "user", "parts": [{ "text": raw }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": {
                        "headline": { "type": "STRING", "description": headline },
                        "body": { "type": "STRING", "description": body },
                        "caption": { "type": "STRING", "description": caption }
                    },
                    "required": ["headline", "body", "caption"]
                }
            }
        })
    }

    pub fn normalize(&self, raw: &str, mode: Mode) -> Result<GeneratedContent> {
        if raw.trim().is_empty() {
            return Err(Error::Other("nothing to analyze".into()));
        }
        let key = self.api_key.as_deref().ok_or(Error::MissingCredentials)?;

        let url = format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model);
        log::debug!("POST {} ({:?}, {} chars)", url, mode, raw.chars().count());
        let res = self
            .client
            .post(&url)
            .header("x-goog-api-key", key)
            .json(&Self::request_body(raw, mode))
            .send()?;

        let status = res.status();
        let text = res.text()?;
        if !status.is_success() {
            let detail = format!("{}: {}", status, snippet(&text));
            if status == StatusCode::FORBIDDEN || text.contains("PERMISSION_DENIED") {
                return Err(Error::PermissionDenied(detail));
            }
            return Err(Error::Remote(detail));
        }
        parse_response(&text)
    }
}

fn snippet(text: &str) -> String {
    text.chars().take(200).collect()
}

/// Pull the generated JSON out of a `generateContent` response envelope.
pub fn parse_response(text: &str) -> Result<GeneratedContent> {
    let envelope: Value =
        serde_json::from_str(text).map_err(|e| Error::InvalidResponse(format!("response is not JSON: {}", e)))?;
    let generated: String = envelope
        .pointer("/candidates/0/content/parts")
        .and_then(Value::as_array)
        .map(|parts| parts.iter().filter_map(|p| p.get("text").and_then(Value::as_str)).collect())
        .unwrap_or_default();
    if generated.trim().is_empty() {
        return Err(Error::InvalidResponse("No response from AI".into()));
    }
    serde_json::from_str(&generated).map_err(|e| Error::InvalidResponse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(inner: &str) -> String {
        json!({ "candidates": [{ "content": { "parts": [{ "text": inner }] } }] }).to_string()
    }

    #[test]
    fn request_carries_schema_and_instruction() {
        let body = NormalizeClient::request_body("কাঁচা খবর", Mode::Quote);
        assert_eq!(body["contents"][0]["parts"][0]["text"], "কাঁচা খবর");
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        let required = &body["generationConfig"]["responseSchema"]["required"];
        assert_eq!(required, &json!(["headline", "body", "caption"]));
        let instruction = body["systemInstruction"]["parts"][0]["text"].as_str().unwrap();
        assert!(instruction.contains("Quote Cards"));
    }

    #[test]
    fn parses_generated_fields() {
        let text = envelope(r#"{"headline":"শিরোনাম","body":"","caption":"বিশ্লেষণ"}"#);
        let c = parse_response(&text).unwrap();
        assert_eq!(c.headline, "শিরোনাম");
        assert_eq!(c.caption, "বিশ্লেষণ");
    }

    #[test]
    fn missing_field_or_garbage_is_invalid() {
        let text = envelope(r#"{"headline":"শিরোনাম","body":""}"#);
        assert!(matches!(parse_response(&text), Err(Error::InvalidResponse(_))));
        assert!(matches!(parse_response("<html>"), Err(Error::InvalidResponse(_))));
        assert!(matches!(parse_response(r#"{"candidates":[]}"#), Err(Error::InvalidResponse(_))));
    }

    #[test]
    fn missing_key_fails_before_any_request() {
        let cfg = StudioConfig { api_base_url: "http://127.0.0.1:9".into(), ..Default::default() };
        let client = NormalizeClient::new(&cfg).unwrap();
        assert!(matches!(client.normalize("খবর", Mode::News), Err(Error::MissingCredentials)));
        assert!(matches!(client.normalize("   ", Mode::News), Err(Error::Other(_))));
    }
}
