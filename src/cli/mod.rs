use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[value(alias = "claude")]
    Anthropic,
    #[value(name = "openai", alias = "open-ai")]
    OpenAI,
    Ollama,
}

impl ProviderKind {
    pub fn default_model(&self) -> &'static str {
        match self {
            ProviderKind::Anthropic => "claude-sonnet-4-5-20250929",
            ProviderKind::OpenAI => "gpt-4o",
            ProviderKind::Ollama => "llama3.1",
        }
    }

    /// Environment variable holding the API key, if the provider needs one.
    pub fn api_key_var(&self) -> Option<&'static str> {
        match self {
            ProviderKind::Anthropic => Some("ANTHROPIC_API_KEY"),
            ProviderKind::OpenAI => Some("OPENAI_API_KEY"),
            ProviderKind::Ollama => None,
        }
    }
}

impl std::str::FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <ProviderKind as ValueEnum>::from_str(s, true)
    }
}

#[derive(Parser, Debug)]
#[command(name = "webwiz", version, about = "AI-powered landing page generator from natural language")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Model provider (defaults to config, then AI_PROVIDER, then anthropic)
    #[arg(long, value_enum, global = true)]
    pub provider: Option<ProviderKind>,

    #[arg(long, global = true)]
    pub model: Option<String>,

    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, default_value_t = false, global = true)]
    pub save_request: bool,

    #[arg(long, default_value_t = false, global = true)]
    pub save_response: bool,

    #[arg(long, default_value_t = false, global = true)]
    pub debug: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new landing page from a natural language description
    Create {
        /// Business description (asked for interactively when absent)
        #[arg(short, long)]
        description: Option<String>,
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(long)]
        business_type: Option<String>,
        #[arg(long)]
        audience: Option<String>,
        #[arg(long)]
        context: Option<String>,
        /// Also write the validated specification to this file
        #[arg(long)]
        spec_out: Option<PathBuf>,
        /// Skip confirmation prompts
        #[arg(short, long, default_value_t = false)]
        yes: bool,
    },
    /// Enhance an existing specification with AI suggestions
    Enhance {
        spec_file: PathBuf,
        #[arg(short, long, default_value = "enhanced-spec.json")]
        output: PathBuf,
    },
    /// Validate a specification file offline
    Validate {
        spec_file: PathBuf,
        /// Rewrite the file with the normalized specification
        #[arg(long, default_value_t = false)]
        write: bool,
    },
    /// Scaffold a project from a specification file without calling a model
    Generate {
        spec_file: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Ask for three copy variations for one page section
    Copy {
        section: String,
        /// JSON object describing the business
        #[arg(long, default_value = "{}")]
        context: String,
    },
    /// List available templates
    Templates,
    /// List preset color themes, or show one by name
    Themes {
        name: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_create_with_globals_after_subcommand() {
        let args = Args::try_parse_from([
            "webwiz", "create", "-d", "A bakery", "--provider", "openai", "--yes",
        ])
        .unwrap();
        assert_eq!(args.provider, Some(ProviderKind::OpenAI));
        match args.command {
            Command::Create { description, yes, .. } => {
                assert_eq!(description.as_deref(), Some("A bakery"));
                assert!(yes);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn enhance_output_defaults() {
        let args = Args::try_parse_from(["webwiz", "enhance", "spec.json"]).unwrap();
        match args.command {
            Command::Enhance { output, .. } => assert_eq!(output, PathBuf::from("enhanced-spec.json")),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn provider_names_parse_case_insensitively() {
        assert_eq!("Claude".parse::<ProviderKind>().unwrap(), ProviderKind::Anthropic);
        assert_eq!("OPENAI".parse::<ProviderKind>().unwrap(), ProviderKind::OpenAI);
        assert!("bard".parse::<ProviderKind>().is_err());
    }
}
