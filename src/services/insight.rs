//! Client for the external insight generator (Anthropic Messages API).
//!
//! One client is built at startup and shared by every call site. Requests
//! are bounded by a timeout so a slow provider surfaces as a generation
//! failure instead of hanging the request.

use std::time::Duration;

const API_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 1024;

#[derive(Clone)]
pub struct InsightClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl InsightClient {
    pub fn new(api_key: String, model: String, timeout_secs: u64) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            client,
            api_key,
            model,
        })
    }

    /// Sends one user prompt under the given system persona and returns the
    /// generated text. No retry: the caller decides what a failure means.
    pub async fn generate(&self, system: &str, prompt: &str) -> anyhow::Result<String> {
        let response = self
            .client
            .post(API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .header("content-type", "application/json")
            .json(&serde_json::json!({
                "model": self.model,
                "max_tokens": MAX_TOKENS,
                "system": system,
                "messages": [{
                    "role": "user",
                    "content": prompt
                }]
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Insight API error {}: {}", status, body);
        }

        let body: serde_json::Value = response.json().await?;
        let text = body["content"][0]["text"]
            .as_str()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("Insight API returned no text content"))?;

        Ok(text.to_string())
    }
}
