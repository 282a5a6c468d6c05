use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;

use super::{ApiError, Provider};
use crate::wire::Instruction;

/// OpenAI Chat Completions provider.
pub struct OpenAIProvider {
    model: String,
    api_key: String,
    api_base: String,
    client: Client,
    timeout: Duration,
}

impl OpenAIProvider {
    pub fn new(model: String, api_key: String, api_base: String, timeout: Duration) -> Self {
        Self {
            model,
            api_key,
            api_base,
            client: Client::new(),
            timeout,
        }
    }

    fn body(&self, ins: &Instruction) -> Value {
        let mut body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": ins.system },
                { "role": "user", "content": ins.user }
            ],
            "temperature": ins.temperature,
        });
        if ins.json_only {
            // Force a valid JSON object in the response.
            body["response_format"] = json!({ "type": "json_object" });
        }
        body
    }
}

#[derive(Deserialize)]
struct ChatMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

fn response_text(body: &str) -> Result<String> {
    let parsed: ChatResponse = serde_json::from_str(body)
        .map_err(|e| anyhow!("Failed to parse OpenAI response: {e}\nRaw: {body}"))?;

    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| anyhow!("No response from OpenAI"))
}

#[async_trait]
impl Provider for OpenAIProvider {
    fn name(&self) -> &'static str {
        "openai"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, ins: &Instruction) -> Result<String> {
        let url = format!("{}/v1/chat/completions", self.api_base.trim_end_matches('/'));
        let body = self.body(ins);

        log::debug!("openai: POST {} (model {})", url, self.model);

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .context("openai request failed")?;

        let status = resp.status();
        let text = resp.text().await.context("openai read body failed")?;
        log::trace!("openai: raw status {}, body:\n{}", status, text);

        if !status.is_success() {
            return Err(ApiError { provider: "openai", status: status.as_u16(), body: text }.into());
        }

        response_text(&text)
    }
}
