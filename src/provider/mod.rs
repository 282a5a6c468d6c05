use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

use crate::cli::ProviderKind;
use crate::config::Config;
use crate::wire::Instruction;

pub mod anthropic;
pub mod ollama;
pub mod openai;

/// A chat-style model endpoint that turns one instruction into raw text.
#[async_trait]
pub trait Provider: Send + Sync {
    fn name(&self) -> &'static str;
    fn model(&self) -> &str;
    async fn complete(&self, ins: &Instruction) -> Result<String>;
}

pub type DynProvider = Box<dyn Provider + Send + Sync>;

/// Non-success HTTP status from a provider API.
#[derive(Error, Debug)]
#[error("{provider} API error ({status}): {body}")]
pub struct ApiError {
    pub provider: &'static str,
    pub status: u16,
    pub body: String,
}

impl ApiError {
    /// Rate limits and server-side failures are worth another attempt.
    pub fn is_transient(&self) -> bool {
        self.status == 429 || self.status == 529 || (500..600).contains(&self.status)
    }
}

fn is_transient(err: &anyhow::Error) -> bool {
    if let Some(api) = err.downcast_ref::<ApiError>() {
        return api.is_transient();
    }
    if let Some(http) = err.downcast_ref::<reqwest::Error>() {
        return http.is_timeout() || http.is_connect();
    }
    false
}

/// Retries transient failures with exponential backoff.
pub struct Retrying<P> {
    inner: P,
    max_retries: u32,
    base_delay: Duration,
}

impl<P: Provider> Retrying<P> {
    pub fn new(inner: P, max_retries: u32, base_delay: Duration) -> Self {
        Self { inner, max_retries, base_delay }
    }
}

#[async_trait]
impl<P: Provider> Provider for Retrying<P> {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn model(&self) -> &str {
        self.inner.model()
    }

    async fn complete(&self, ins: &Instruction) -> Result<String> {
        let mut attempt = 0u32;
        loop {
            match self.inner.complete(ins).await {
                Ok(text) => return Ok(text),
                Err(e) if attempt < self.max_retries && is_transient(&e) => {
                    let delay = self.base_delay * 2u32.saturating_pow(attempt);
                    log::warn!(
                        "{} call failed (attempt {}/{}): {:#}; retrying in {:?}",
                        self.inner.name(),
                        attempt + 1,
                        self.max_retries + 1,
                        e,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

fn api_key(kind: ProviderKind) -> Result<String> {
    match kind.api_key_var() {
        None => Ok(String::new()),
        Some(var) => std::env::var(var)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| anyhow!("{var} env var is not set")),
    }
}

pub fn make_provider(cfg: &Config) -> Result<DynProvider> {
    let timeout = Duration::from_secs(cfg.timeout_secs);
    let model = cfg.model().to_string();
    let base_delay = Duration::from_millis(500);

    let provider: DynProvider = match cfg.provider {
        ProviderKind::Anthropic => Box::new(Retrying::new(
            anthropic::Anthropic {
                model,
                api_key: api_key(cfg.provider)?,
                timeout,
                api_base: cfg.anthropic_base.clone(),
                api_version: cfg.anthropic_version.clone(),
                max_tokens: cfg.max_tokens,
            },
            cfg.max_retries,
            base_delay,
        )),
        ProviderKind::OpenAI => Box::new(Retrying::new(
            openai::OpenAIProvider::new(model, api_key(cfg.provider)?, cfg.openai_base.clone(), timeout),
            cfg.max_retries,
            base_delay,
        )),
        ProviderKind::Ollama => Box::new(Retrying::new(
            ollama::Ollama {
                model,
                url: cfg.ollama_url.clone(),
                timeout,
            },
            cfg.max_retries,
            base_delay,
        )),
    };
    Ok(provider)
}
