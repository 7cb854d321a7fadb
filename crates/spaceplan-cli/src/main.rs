//! SpacePlan command-line front end.
//!
//! Loads or creates space programs and prints calculation results and
//! remote-work comparisons. Runs entirely in-process: no server, no
//! rendering beyond plain text or JSON on stdout.
//!
//! Usage:
//!   cargo run -p spaceplan-cli -- demo
//!   cargo run -p spaceplan-cli -- calculate data/acme.json --policy hybrid_light
//!   cargo run -p spaceplan-cli -- analyze data/acme.json --json
//!   RUST_LOG=debug cargo run -p spaceplan-cli -- list

mod report;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use spaceplan_core::config::{PlannerConfig, CONFIG_FILE};
use spaceplan_core::demo::demo_program;
use spaceplan_core::persistence::{self, ProgramStore};
use spaceplan_logic::calculator::SpaceCalculator;
use spaceplan_logic::remote::RemoteWorkAnalyzer;
use spaceplan_logic::{RemoteWorkPolicy, SpaceProgram};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "spaceplan", version, about = "Office space programming calculator")]
struct Cli {
    /// Configuration file
    #[arg(long, global = true, env = "SPACEPLAN_CONFIG", default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Calculate space requirements for a saved program
    Calculate {
        file: PathBuf,
        /// Override the program's remote-work policy
        #[arg(long)]
        policy: Option<RemoteWorkPolicy>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Compare every remote-work policy for a saved program
    Analyze {
        file: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Run both reports on the built-in demo program
    Demo {
        /// Also save the demo program into the data directory
        #[arg(long)]
        save: bool,
        #[arg(long)]
        json: bool,
    },
    /// Write a blank program using the configured defaults
    New {
        company: String,
        #[arg(long, default_value = "")]
        location: String,
        /// Output file (defaults to a generated name in the data directory)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// List saved programs in the data directory
    List,
    /// Show the remote-work policy table
    Policies,
    /// Show the default space standards
    Standards,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = PlannerConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    tracing::debug!(data_dir = %config.data_dir.display(), "configuration loaded");

    match cli.command {
        Command::Calculate { file, policy, json } => {
            let mut program = load_calculable(&file)?;
            if let Some(policy) = policy {
                program.remote_work_policy = policy;
            }
            let results = SpaceCalculator::new(&program).calculate_totals();
            emit(json, &results, report::render_totals)?;
        }
        Command::Analyze { file, json } => {
            let program = load_calculable(&file)?;
            let analysis = RemoteWorkAnalyzer::new(&program).analyze_scenarios();
            emit(json, &analysis, report::render_analysis)?;
        }
        Command::Demo { save, json } => {
            let program = demo_program();
            if save {
                let store = ProgramStore::open(&config.data_dir)?;
                let path = store.save(&program, Some("Acme_Technologies_demo.json"))?;
                eprintln!("Program data saved: {}", path.display());
            }
            let results = SpaceCalculator::new(&program).calculate_totals();
            let analysis = RemoteWorkAnalyzer::new(&program).analyze_scenarios();
            if json {
                let combined =
                    serde_json::json!({ "results": results, "remote_analysis": analysis });
                println!("{}", serde_json::to_string_pretty(&combined)?);
            } else {
                print!("{}", report::render_totals(&results));
                println!();
                print!("{}", report::render_analysis(&analysis));
            }
        }
        Command::New {
            company,
            location,
            output,
        } => {
            let mut program = config.new_program(&company);
            program.location = location;
            let path = match output {
                Some(path) => {
                    persistence::save_to_path(&path, &program)?;
                    path
                }
                None => ProgramStore::open(&config.data_dir)?.save(&program, None)?,
            };
            println!("{}", path.display());
        }
        Command::List => {
            let store = ProgramStore::open(&config.data_dir)?;
            print!("{}", report::render_listing(&store.list()?));
        }
        Command::Policies => print!("{}", report::render_policies()),
        Command::Standards => print!("{}", report::render_standards()),
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load a program and apply the boundary checks a calculation needs.
fn load_calculable(path: &Path) -> Result<SpaceProgram> {
    let program = persistence::load_from_path(path)
        .with_context(|| format!("loading program {}", path.display()))?;
    program
        .ensure_calculable()
        .with_context(|| format!("program {} cannot be calculated", path.display()))?;
    Ok(program)
}

fn emit<T: Serialize>(json: bool, value: &T, render: fn(&T) -> String) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        print!("{}", render(value));
    }
    Ok(())
}
