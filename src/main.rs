use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::Colorize;
use fs_err as fs;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use uuid::Uuid;

mod cli;
mod config;
mod errors;
mod extract;
mod parser;
mod prompt;
mod provider;
mod scaffold;
mod spec;
mod theme;
mod transcript;
mod ux;
mod wire;

use cli::{Args, Command};
use config::Config;
use errors::WizError;
use parser::SpecificationParser;
use spec::LandingPageSpec;
use transcript::Transcript;
use wire::NaturalLanguageInput;

fn init_logging(debug: bool) {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_module("webwiz", log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

fn build_parser(cfg: &Config, args: &Args) -> Result<SpecificationParser> {
    let prov = provider::make_provider(cfg)?;
    let tx = Uuid::new_v4();
    if args.debug {
        log::debug!("transaction {tx}, transcripts under {}", transcript::tx_dir(&cfg.root, tx).display());
    }
    Ok(SpecificationParser::new(prov).with_transcript(Transcript::new(
        &cfg.root,
        tx,
        args.save_request,
        args.save_response,
    )))
}

fn read_json(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path)?;
    serde_json::from_str(&text).with_context(|| format!("{} is not valid JSON", path.display()))
}

fn write_spec(path: &Path, spec: &LandingPageSpec) -> Result<()> {
    let mut text = serde_json::to_string_pretty(spec)?;
    text.push('\n');
    fs::write(path, text)?;
    Ok(())
}

/// Validation and extraction failures are reported here; everything else is
/// handed back to `main`.
fn report(err: WizError) -> Result<ExitCode> {
    match err {
        WizError::Validation(v) => {
            ux::print_violations(&v);
            Ok(ExitCode::FAILURE)
        }
        WizError::Extraction(e) => {
            eprintln!("{} {}", "Model response unusable:".red().bold(), e);
            Ok(ExitCode::FAILURE)
        }
        WizError::Collaborator(e) => Err(e),
    }
}

fn scaffold_and_report(spec: &LandingPageSpec, out_dir: &Path) -> Result<()> {
    let pb = ux::spinner(format!("Writing project into {}", out_dir.display()));
    let res = scaffold::scaffold(spec, out_dir);
    pb.finish_and_clear();
    let summary = res?;
    ux::print_scaffold_dashboard(&summary);
    ux::print_next_steps(&summary.root);
    Ok(())
}

async fn run(args: Args) -> Result<ExitCode> {
    let cfg = Config::load(&args)?;
    log::debug!("config: {:?}", cfg);

    match &args.command {
        Command::Create {
            description,
            output,
            business_type,
            audience,
            context,
            spec_out,
            yes,
        } => {
            let description = match description {
                Some(d) => d.clone(),
                None => ux::read_description("Describe your business:")?,
            };
            if description.trim().is_empty() {
                bail!("a business description is required");
            }
            let mut input = NaturalLanguageInput::new(description.trim());
            input.business_type = business_type.clone();
            input.target_audience = audience.clone();
            input.additional_context = context.clone();

            let parser = build_parser(&cfg, &args)?;
            let pb = ux::spinner(format!(
                "Generating specification with {} ({})",
                parser.provider_name(),
                parser.model()
            ));
            let res = parser.parse(&input).await;
            pb.finish_and_clear();
            let spec = match res {
                Ok(s) => s,
                Err(e) => return report(e),
            };

            ux::show_spec_preview(&spec);
            if !yes && !ux::confirm("Generate the project?") {
                println!("Aborted by user.");
                return Ok(ExitCode::SUCCESS);
            }
            if let Some(path) = spec_out {
                write_spec(path, &spec)?;
                println!("{} {}", "Specification saved to".green(), path.display());
            }
            let out_dir = output.clone().unwrap_or_else(|| cfg.output_dir.clone());
            scaffold_and_report(&spec, &out_dir)?;
        }

        Command::Enhance { spec_file, output } => {
            let current = read_json(spec_file)?;
            let parser = build_parser(&cfg, &args)?;
            let pb = ux::spinner(format!("Enhancing {}", spec_file.display()));
            let res = parser.enhance(&current).await;
            pb.finish_and_clear();
            let spec = match res {
                Ok(s) => s,
                Err(e) => return report(e),
            };
            ux::show_spec_preview(&spec);
            write_spec(output, &spec)?;
            println!("{} {}", "Enhanced specification saved to".green(), output.display());
        }

        Command::Validate { spec_file, write } => {
            let value = read_json(spec_file)?;
            let spec = match spec::validate(&value) {
                Ok(s) => s,
                Err(v) => return report(v.into()),
            };
            ux::show_spec_preview(&spec);
            println!("{} {}", "✓".green().bold(), "Specification is valid".green());
            if *write {
                write_spec(spec_file, &spec)?;
                println!("Normalized specification written to {}", spec_file.display());
            }
        }

        Command::Generate { spec_file, output } => {
            let value = read_json(spec_file)?;
            let spec = match spec::validate(&value) {
                Ok(s) => s,
                Err(v) => return report(v.into()),
            };
            let out_dir: PathBuf = output.clone().unwrap_or_else(|| cfg.output_dir.clone());
            scaffold_and_report(&spec, &out_dir)?;
        }

        Command::Copy { section, context } => {
            let ctx: Value = serde_json::from_str(context).context("--context must be a JSON object")?;
            if !ctx.is_object() {
                bail!("--context must be a JSON object");
            }
            let parser = build_parser(&cfg, &args)?;
            let pb = ux::spinner(format!("Writing {section} copy"));
            let res = parser.generate_copy(section, &ctx).await;
            pb.finish_and_clear();
            match res {
                Ok(variations) => ux::print_copy_variations(section, &variations),
                Err(e) => return report(e),
            }
        }

        Command::Templates => ux::list_templates(),
        Command::Themes { name } => ux::list_themes(name.as_deref()),
    }

    Ok(ExitCode::SUCCESS)
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.debug);

    match run(args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
