//! Natural language to [`LandingPageSpec`] through a model provider.
//!
//! The parser owns prompt selection, transcript recording and the
//! extract-then-validate step. Retrying is left to the provider.

use serde_json::Value;

use crate::errors::WizError;
use crate::extract::{extract_json_object, extract_json_value, ExtractionError};
use crate::prompt;
use crate::provider::DynProvider;
use crate::spec::{validate, LandingPageSpec};
use crate::transcript::{self, Transcript};
use crate::wire::{Instruction, LlmRequest, LlmResponse, Mode, NaturalLanguageInput, Tx};

pub struct SpecificationParser {
    provider: DynProvider,
    transcript: Option<Transcript>,
}

impl SpecificationParser {
    pub fn new(provider: DynProvider) -> Self {
        Self { provider, transcript: None }
    }

    pub fn with_transcript(mut self, transcript: Transcript) -> Self {
        self.transcript = Some(transcript);
        self
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    pub fn model(&self) -> &str {
        self.provider.model()
    }

    /// Turn a business description into a validated specification.
    pub async fn parse(&self, input: &NaturalLanguageInput) -> Result<LandingPageSpec, WizError> {
        let text = self.call(Mode::Parse, prompt::parse_instruction(input)).await?;
        let value = extract_json_object(&text)?;
        Ok(validate(&value)?)
    }

    /// Ask the model to improve the copy of an existing (possibly partial)
    /// specification. Only the model's answer is validated.
    pub async fn enhance(&self, current: &Value) -> Result<LandingPageSpec, WizError> {
        let text = self.call(Mode::Enhance, prompt::enhance_instruction(current)).await?;
        let value = extract_json_object(&text)?;
        Ok(validate(&value)?)
    }

    /// Three alternative texts for one page section.
    pub async fn generate_copy(&self, section: &str, context: &Value) -> Result<Vec<String>, WizError> {
        let text = self.call(Mode::Copy, prompt::copy_instruction(section, context)).await?;
        let value = extract_json_value(&text)?;
        let items = match &value {
            Value::Array(items) => items,
            Value::Object(obj) => match obj.get("variations") {
                Some(Value::Array(items)) => items,
                _ => return Err(ExtractionError::from_text(&text).into()),
            },
            _ => return Err(ExtractionError::from_text(&text).into()),
        };
        let variations: Vec<String> = items
            .iter()
            .filter_map(|v| v.as_str())
            .map(str::to_string)
            .collect();
        if variations.is_empty() {
            return Err(ExtractionError::from_text(&text).into());
        }
        Ok(variations)
    }

    async fn call(&self, mode: Mode, ins: Instruction) -> Result<String, WizError> {
        log::info!(
            "{} request via {} ({})",
            mode.as_str(),
            self.provider.name(),
            self.provider.model()
        );
        let text = self.provider.complete(&ins).await?;
        self.record(mode, ins, &text);
        Ok(text)
    }

    /// Transcript failures are logged, never fatal.
    fn record(&self, mode: Mode, ins: Instruction, text: &str) {
        let Some(t) = self.transcript.as_ref().filter(|t| t.enabled()) else {
            return;
        };
        let req = LlmRequest {
            mode,
            transaction: Tx::new(t.tx),
            provider: self.provider.name().to_string(),
            model: self.provider.model().to_string(),
            instruction: ins,
        };
        let resp = LlmResponse {
            mode,
            transaction: Tx::new(t.tx),
            text: text.to_string(),
        };
        match t.save_stage(mode.as_str(), &req, &resp) {
            Ok(saved) => transcript::log_saved_paths(mode.as_str(), &saved),
            Err(e) => log::warn!("could not save {} transcript: {:#}", mode.as_str(), e),
        }
    }
}
