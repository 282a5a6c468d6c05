use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{ApiError, Provider};
use crate::wire::Instruction;

pub struct Ollama {
    pub model: String,
    pub url: String,
    pub timeout: Duration,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Msg<'a>>,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<&'static str>,
    options: OllamaOptions,
}

#[derive(Serialize)]
struct OllamaOptions {
    temperature: f32,
}

#[derive(Serialize)]
struct Msg<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    message: MsgOut,
}

#[derive(Deserialize)]
struct MsgOut {
    content: String,
}

fn to_messages(ins: &Instruction) -> Vec<Msg<'_>> {
    vec![
        Msg { role: "system", content: &ins.system },
        Msg { role: "user", content: &ins.user },
    ]
}

/// Some Ollama builds answer with the bare model text; fall back to it.
fn response_text(body: String) -> String {
    match serde_json::from_str::<ChatResponse>(&body) {
        Ok(c) => c.message.content,
        Err(_) => body,
    }
}

#[async_trait]
impl Provider for Ollama {
    fn name(&self) -> &'static str {
        "ollama"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, ins: &Instruction) -> Result<String> {
        let url = format!("{}/api/chat", self.url.trim_end_matches('/'));
        let client = Client::builder().timeout(self.timeout).build()?;
        let body = ChatRequest {
            model: &self.model,
            messages: to_messages(ins),
            stream: false,
            format: ins.json_only.then_some("json"),
            options: OllamaOptions { temperature: ins.temperature },
        };

        log::debug!("ollama: POST {} (model {})", url, self.model);

        let resp = client
            .post(&url)
            .json(&body)
            .send()
            .await
            .context("ollama request failed")?;

        let status = resp.status();
        let text = resp.text().await.context("ollama read body failed")?;
        log::trace!("ollama: raw body:\n{}", text);

        if !status.is_success() {
            return Err(ApiError { provider: "ollama", status: status.as_u16(), body: text }.into());
        }

        Ok(response_text(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwraps_chat_message() {
        let body = r#"{"model":"llama3.1","message":{"role":"assistant","content":"{\"a\":1}"},"done":true}"#;
        assert_eq!(response_text(body.to_string()), "{\"a\":1}");
    }

    #[test]
    fn passes_through_bare_text() {
        assert_eq!(response_text("{\"a\":1}".to_string()), "{\"a\":1}");
    }
}
