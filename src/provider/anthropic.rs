use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{ApiError, Provider};
use crate::wire::Instruction;

pub struct Anthropic {
    pub model: String,
    pub api_key: String,
    pub timeout: Duration,
    pub api_base: String,
    pub api_version: String,
    pub max_tokens: u32,
}

#[derive(Serialize)]
struct MsgRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    messages: Vec<Msg<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<&'a str>,
}

#[derive(Serialize)]
struct Msg<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MsgResponse {
    content: Vec<Block>,
}

#[derive(Deserialize)]
struct Block {
    #[serde(default)]
    text: String,
    #[serde(default)]
    r#type: String,
}

/// Concatenate the text blocks of a Messages API response body.
fn response_text(body: &str) -> Result<String> {
    let parsed: MsgResponse = serde_json::from_str(body)
        .map_err(|e| anyhow!("anthropic response parse error: {}", e))?;

    let text: String = parsed
        .content
        .into_iter()
        .filter(|b| b.r#type == "text")
        .map(|b| b.text)
        .collect();

    if text.trim().is_empty() {
        return Err(anyhow!("anthropic: empty content"));
    }
    Ok(text)
}

#[async_trait]
impl Provider for Anthropic {
    fn name(&self) -> &'static str {
        "anthropic"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, ins: &Instruction) -> Result<String> {
        let url = format!("{}/v1/messages", self.api_base.trim_end_matches('/'));
        let client = Client::builder().timeout(self.timeout).build()?;
        let body = MsgRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            temperature: ins.temperature,
            messages: vec![Msg { role: "user", content: &ins.user }],
            system: Some(ins.system.as_str()).filter(|s| !s.is_empty()),
        };

        log::debug!("anthropic: POST {} (model {})", url, self.model);

        let resp = client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", &self.api_version)
            .json(&body)
            .send()
            .await
            .context("anthropic request failed")?;

        let status = resp.status();
        let text = resp.text().await.context("anthropic read body failed")?;
        log::trace!("anthropic: raw body:\n{}", text);

        if !status.is_success() {
            return Err(ApiError { provider: "anthropic", status: status.as_u16(), body: text }.into());
        }

        response_text(&text)
    }
}
