//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use ideagen_core::request::{check_count, check_temperature};
use ideagen_core::{
    ExportFormat, IdeaOptions, Style, Tone, DEFAULT_NUM_IDEAS, DEFAULT_TEMPERATURE,
};

/// Quick, actionable content ideas for a topic
#[derive(Parser)]
#[command(name = "ideagen", about, version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format: text (human-readable) or json (machine-readable)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output for humans
    #[default]
    Text,
    /// Structured JSON for machine consumption
    Json,
}

/// Generation knobs shared by one-shot and session mode.
#[derive(Args, Clone, Debug)]
pub struct IdeaArgs {
    /// Ideas per generation (1-20)
    #[arg(short = 'n', long, default_value_t = DEFAULT_NUM_IDEAS, value_parser = parse_count)]
    pub count: usize,

    /// Style/template (general, listicle, how-to, twitter-thread, video-hook, newsletter-subject)
    #[arg(long, default_value = "general", value_parser = parse_style)]
    pub style: Style,

    /// Tone (practical, persuasive, funny, curious, controversial)
    #[arg(long, default_value = "practical", value_parser = parse_tone)]
    pub tone: Tone,

    /// Creativity (0.0-1.0)
    #[arg(short, long, default_value_t = DEFAULT_TEMPERATURE, value_parser = parse_temperature)]
    pub temperature: f32,

    /// Model to use. Uses IDEAGEN_MODEL env if not set (default: gpt-3.5-turbo)
    #[arg(short, long)]
    pub model: Option<String>,

    /// API key for this run; takes precedence over OPENAI_API_KEY
    #[arg(long)]
    pub api_key: Option<String>,
}

impl IdeaArgs {
    pub fn options(&self) -> IdeaOptions {
        IdeaOptions {
            count: self.count,
            style: self.style,
            tone: self.tone,
            temperature: self.temperature,
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate ideas for a topic and print or export them
    Generate {
        /// Topic, niche or keywords (e.g. "vegan breakfast recipes")
        topic: String,
        #[command(flatten)]
        args: IdeaArgs,
        /// Print (or, with --out, write) the list as csv or txt
        #[arg(short, long, value_parser = parse_format)]
        format: Option<ExportFormat>,
        /// Write the list to this file; format follows --format or the extension
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Start an interactive session (generate, append, export)
    Session {
        #[command(flatten)]
        args: IdeaArgs,
    },
    /// List the available styles and tones
    Styles,
    /// Configure ideagen settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Save an OpenAI API key to ~/.ideagen/env
    Api,
    /// Show effective settings and where the API key comes from
    Show {
        /// Key that would be passed with --api-key
        #[arg(long)]
        api_key: Option<String>,
    },
}

fn parse_count(s: &str) -> Result<usize, String> {
    let n: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("'{s}' is not a whole number"))?;
    check_count(n).map_err(|e| e.to_string())
}

fn parse_temperature(s: &str) -> Result<f32, String> {
    let t: f32 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{s}' is not a number"))?;
    check_temperature(t).map_err(|e| e.to_string())
}

fn parse_style(s: &str) -> Result<Style, String> {
    s.parse().map_err(|e: ideagen_core::OptionError| e.to_string())
}

fn parse_tone(s: &str) -> Result<Tone, String> {
    s.parse().map_err(|e: ideagen_core::OptionError| e.to_string())
}

fn parse_format(s: &str) -> Result<ExportFormat, String> {
    s.parse()
}
