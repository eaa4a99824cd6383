use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use stratus_form::CredentialForm;
use stratus_registry::config::default_config_path;
use stratus_registry::{SchemaConfig, SchemaRegistry, load_legacy_schema};
use tracing::{debug, warn};

mod render;

use render::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "stratus", version, about = "Credential fields required by each cloud provider")]
struct Cli {
    /// Enable debug logging.
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List known provider identifiers.
    Providers {
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Show the fields a provider asks for.
    Schema {
        provider: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
        /// Show the flat v1 layout instead.
        #[arg(long)]
        legacy: bool,
    },
    /// Prompt for a provider's fields and print the answers.
    Collect {
        provider: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,
        /// Print secret values instead of redacting them.
        #[arg(long)]
        show_secrets: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);
    let registry = load_registry(&default_config_path());
    // Prompts go to stderr so stdout carries only the result.
    let output = run(&registry, cli.command, io::stdin().lock(), io::stderr())?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    if !output.ends_with('\n') {
        writeln!(stdout)?;
    }
    Ok(())
}

fn init_tracing(debug: bool) {
    let default = if debug { "debug" } else { "info" };
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| default.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Built-in providers always resolve; an unreadable alias file only drops the aliases.
fn load_registry(path: &Path) -> SchemaRegistry {
    match SchemaConfig::load_from_path(path) {
        Ok(config) => SchemaRegistry::with_config(config),
        Err(error) => {
            warn!(path = %path.display(), %error, "ignoring provider alias configuration");
            SchemaRegistry::builtin()
        }
    }
}

fn run<R: BufRead, W: Write>(registry: &SchemaRegistry, command: Command, input: R, prompts: W) -> Result<String> {
    match command {
        Command::Providers { format } => render::providers(&registry.entries(), format),
        Command::Schema {
            provider,
            format,
            legacy,
        } => {
            if legacy {
                let schema = load_legacy_schema(&provider)?;
                return render::legacy_schema(&provider, schema, format);
            }
            let resolved = registry.resolve(&provider)?;
            debug!(%provider, resolved = %resolved.provider, "rendering schema");
            render::schema(&provider, resolved.schema, format)
        }
        Command::Collect {
            provider,
            format,
            show_secrets,
        } => {
            let resolved = registry.resolve(&provider)?;
            let mut form = CredentialForm::new(provider.as_str(), resolved.schema);
            let collected = form
                .collect(input, prompts)
                .with_context(|| format!("failed to collect values for {provider}"))?;
            let collected = if show_secrets { collected } else { collected.redacted() };
            render::collected(&collected, format)
        }
    }
}
