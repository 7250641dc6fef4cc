use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the routegen binary.
#[derive(Parser, Debug)]
#[command(
    name = "routegen",
    version,
    about = "Resolve MVC controllers and Razor pages into a typed route model"
)]
pub struct CliArgs {
    /// Declaration dumps (`*.json`) or directories containing them.
    #[arg(required = true, value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,

    /// JSON configuration file with generator options.
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Override a generator option, e.g.
    /// `route_generator.generated_namespace=App.Routes`. Repeatable.
    #[arg(long = "option", value_name = "KEY=VALUE", value_parser = parse_option)]
    pub options: Vec<(String, String)>,

    /// Write the resolved model to this file instead of stdout.
    #[arg(short = 'o', long)]
    pub out: Option<PathBuf>,

    /// Emit single-line JSON.
    #[arg(long)]
    pub compact: bool,

    /// Only report diagnostics; do not write the resolved model.
    #[arg(long)]
    pub no_emit: bool,

    /// When to colorize diagnostics.
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

fn parse_option(value: &str) -> Result<(String, String), String> {
    let (key, value) = value
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, found '{value}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err("option key must not be empty".to_string());
    }
    Ok((key.to_string(), value.to_string()))
}
