mod check;
mod completions;
mod plan;
mod render;

use std::path::PathBuf;

use check::CheckCommand;
use cimgen_model::{ConfigFile, RawModel, Target};
use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use plan::PlanCommand;
use render::RenderCommand;

use crate::target::TargetSupport;

/// Extension trait for exiting on config/model errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for cimgen_model::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "cimgen")]
#[command(version)]
#[command(about = "Plan CIM class models for ORM, data-class and wire-struct targets")]
pub(crate) struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Check(cmd) => cmd.run(),
            Commands::Plan(cmd) => cmd.run(),
            Commands::Render(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the class map and report what the target would emit
    Check(CheckCommand),

    /// Print per-class field plans for the target
    Plan(PlanCommand),

    /// Print the rendered attribute strings for the target
    Render(RenderCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Config and target selection shared by the model commands.
#[derive(Args)]
pub struct ProjectArgs {
    /// Path to cimgen.toml (defaults to ./cimgen.toml)
    #[arg(short, long, default_value = "cimgen.toml")]
    pub config: PathBuf,

    /// Target representation (overrides cimgen.toml setting)
    #[arg(short, long)]
    pub target: Option<Target>,
}

impl ProjectArgs {
    /// Open the config and its class map, exiting with a diagnostic on failure.
    pub fn open(&self) -> (RawModel, TargetSupport) {
        let file = ConfigFile::open(&self.config).unwrap_or_exit();
        let raw = file.load_model().unwrap_or_exit();
        let support = TargetSupport::resolve(file.config(), self.target);

        tracing::debug!(
            model = %file.model_path().display(),
            backend = %support.target,
            classes = raw.classes.len(),
            "loaded class map"
        );
        (raw, support)
    }
}
