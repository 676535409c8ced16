//! Command-line shell for the behavior sandbox.
//!
//! Collects the four simulation inputs from flags or a scenario preset,
//! runs the engine, and renders the result as text or JSON. The engine
//! itself accepts empty inputs; the shell is the layer that rejects a
//! fully-empty invocation.

use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use sandbox_core::{simulate, Scenario, SimulationRequest, SimulationResult};

#[derive(Debug, Parser)]
#[command(
    name = "sandbox",
    version,
    about = "Deterministic agent behavior sandbox"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run a simulation from explicit inputs.
    Run {
        /// Free-text task description.
        #[arg(long, default_value = "")]
        task: String,

        /// Rules, one per line.
        #[arg(long, default_value = "")]
        rules: String,

        /// Free-text situational context.
        #[arg(long, default_value = "")]
        context: String,

        /// Drop the last soft preference to simulate behavioral drift.
        #[arg(long)]
        drift: bool,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Run a builtin preset by name, or a scenario YAML file by path.
    Scenario {
        name_or_path: String,

        /// Drop the last soft preference to simulate behavioral drift.
        #[arg(long)]
        drift: bool,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// List builtin scenario names.
    Scenarios,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Run {
            task,
            rules,
            context,
            drift,
            format,
        } => {
            if task.trim().is_empty() && rules.trim().is_empty() && context.trim().is_empty() {
                bail!("nothing to simulate: task, rules, and context are all empty");
            }
            let request = SimulationRequest::new(task, rules, context, drift);
            render(&simulate(&request), format)
        }

        Command::Scenario {
            name_or_path,
            drift,
            format,
        } => {
            let scenario = load_scenario(&name_or_path)?;
            let request = scenario.into_request(drift);
            render(&simulate(&request), format)
        }

        Command::Scenarios => {
            for name in Scenario::BUILTIN_NAMES {
                println!("{name}");
            }
            Ok(())
        }
    }
}

/// Builtin names take precedence; anything else is treated as a path.
fn load_scenario(name_or_path: &str) -> Result<Scenario> {
    if Scenario::BUILTIN_NAMES.contains(&name_or_path) {
        tracing::debug!(name = name_or_path, "loading builtin scenario");
        return Ok(Scenario::builtin(name_or_path)?);
    }
    tracing::debug!(path = name_or_path, "loading scenario file");
    Scenario::from_yaml_file(Path::new(name_or_path))
        .with_context(|| format!("failed to load scenario '{name_or_path}'"))
}

fn render(result: &SimulationResult, format: Format) -> Result<()> {
    match format {
        Format::Json => {
            println!("{}", serde_json::to_string_pretty(result)?);
        }
        Format::Text => {
            println!(
                "Behavior: {} ({})  [{}]",
                result.behavior.mode,
                result.behavior.style,
                result.behavior.tags.join(", ")
            );
            println!();

            print_list("Hard constraints", &result.hard_rules);
            print_list("Soft preferences", &result.soft_rules);
            print_list("Context signals", &result.signals);
            print_list("Task focus", &result.task_focus);

            println!("Decision:");
            println!("  {}", result.decision);
            if let Some(note) = &result.drift_note {
                println!();
                println!("  {note}");
            }

            println!();
            println!("Trace:");
            println!("{}", result.trace);
        }
    }
    Ok(())
}

fn print_list(label: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("{label}:");
    for item in items {
        println!("  - {item}");
    }
    println!();
}
