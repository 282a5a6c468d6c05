use anyhow::{Context, Result};
use fs_err as fs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::cli::{Args, ProviderKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub root: PathBuf,
    pub output_dir: PathBuf,
    pub provider: ProviderKind,
    /// `None` means the provider's default model.
    pub model: Option<String>,
    pub max_retries: u32,
    pub timeout_secs: u64,
    pub max_tokens: u32,
    pub anthropic_base: String,
    pub anthropic_version: String,
    pub openai_base: String,
    pub ollama_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: ".".into(),
            output_dir: "./generated".into(),
            provider: ProviderKind::Anthropic,
            model: None,
            max_retries: 3,
            timeout_secs: 120,
            max_tokens: 4096,
            anthropic_base: "https://api.anthropic.com".into(),
            anthropic_version: "2023-06-01".into(),
            openai_base: "https://api.openai.com".into(),
            ollama_url: "http://localhost:11434".into(),
        }
    }
}

impl Config {
    /// Defaults, then the TOML file (if any), then the process environment,
    /// then command-line flags.
    pub fn load(args: &Args) -> Result<Self> {
        let mut cfg = match &args.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        cfg.apply_env(|k| std::env::var(k).ok())?;
        cfg.apply_args(args);
        Ok(cfg)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        toml::from_str(&text).with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Overlay `AI_PROVIDER`, `AI_MODEL` and `AI_MAX_RETRIES`.
    pub fn apply_env<F>(&mut self, var: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(p) = var("AI_PROVIDER").filter(|s| !s.trim().is_empty()) {
            self.provider = p
                .trim()
                .parse()
                .map_err(|e| anyhow::anyhow!("AI_PROVIDER: {e}"))?;
        }
        if let Some(m) = var("AI_MODEL").filter(|s| !s.trim().is_empty()) {
            self.model = Some(m.trim().to_string());
        }
        if let Some(r) = var("AI_MAX_RETRIES").filter(|s| !s.trim().is_empty()) {
            self.max_retries = r
                .trim()
                .parse()
                .with_context(|| format!("AI_MAX_RETRIES must be a non-negative integer, got '{r}'"))?;
        }
        Ok(())
    }

    pub fn apply_args(&mut self, args: &Args) {
        if let Some(p) = args.provider {
            self.provider = p;
        }
        if let Some(m) = &args.model {
            self.model = Some(m.clone());
        }
        if let Some(t) = args.timeout_secs {
            self.timeout_secs = t;
        }
    }

    pub fn model(&self) -> &str {
        self.model
            .as_deref()
            .unwrap_or_else(|| self.provider.default_model())
    }
}
