//! simcc CLI - Command line interface
//!
//! Compiles C snippets with the simulated compiler and manages the saved
//! program list. Configuration comes from an optional `simcc.json` in the
//! working directory, overridden by command-line flags.

use clap::{Parser, Subcommand};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;
use tracing::{debug, info};

mod config;
mod logging;
mod platform;

use crate::config::{build_run_config, read_project_file, LogConfig, Overrides};
use crate::logging::LogFormat;
use crate::platform::{
    confirm, print_compilation, print_program, print_program_list, DELETE_PROMPT,
};
use simcc_api::{
    compile_global, compile_value, get_config, init_config, CompilationResult, CompileRequest,
    FileStore, ProgramDraft, ProgramRepository, RunConfig, DEFAULT_PROGRAM,
};

/// Exit status for an error-kind compilation result
const EXIT_COMPILE_ERROR: i32 = 2;

#[derive(Parser)]
#[command(
    name = "simcc",
    about = "Simulated C compiler with a saved-program notebook",
    version
)]
struct Cli {
    /// Configuration file path (default: ./simcc.json, if present)
    #[arg(long, value_name = "CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Simulated compile latency in milliseconds
    #[arg(long, value_name = "MS", global = true)]
    latency_ms: Option<u64>,

    /// Directory holding saved programs
    #[arg(long, value_name = "DIR", global = true)]
    store_dir: Option<PathBuf>,

    /// Log level: silent, error, warn, info, debug, trace
    #[arg(long, value_name = "LEVEL", global = true)]
    log_level: Option<String>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Compact, global = true)]
    log_format: LogFormat,

    /// Also append logs to this file
    #[arg(long, value_name = "PATH", global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile a source file (stdin when absent or "-")
    Compile {
        file: Option<PathBuf>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
        /// Input is a JSON request: {"code": ...}
        #[arg(long)]
        request: bool,
    },
    /// Save a new program
    New {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Source file (defaults to a hello-world template)
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Change a saved program
    Edit {
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        index: u64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Delete a saved program
    Delete {
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        index: u64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// List saved programs
    List,
    /// Show a saved program with line numbers
    Show {
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        index: u64,
    },
    /// Compile a saved program
    Run {
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        index: u64,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let run_config = match setup(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    // Initialize API config (global singleton for convenience)
    init_config(run_config);

    match dispatch(cli.command, get_config()).await {
        Ok(0) => {}
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

/// Read the project file, build the run configuration, start logging
fn setup(cli: &Cli) -> Result<RunConfig, String> {
    let project = read_project_file(cli.config.as_deref())?;
    let overrides = Overrides {
        latency_ms: cli.latency_ms,
        store_dir: cli.store_dir.clone(),
        log_level: cli.log_level.clone(),
    };

    let log_config = LogConfig::from_project(&project, overrides.log_level.as_deref())?;
    logging::init_with_file(&log_config, cli.log_format, cli.log_file.as_deref())
        .map_err(|e| format!("Cannot initialize logging: {}", e))?;

    let run_config = build_run_config(&project, &overrides);
    debug!(target: "simcc::cli", ?run_config, "configuration resolved");
    Ok(run_config)
}

async fn dispatch(command: Command, config: &RunConfig) -> Result<i32, String> {
    match command {
        Command::Compile {
            file,
            json,
            request,
        } => handle_compile(file.as_deref(), json, request, config).await,
        Command::New {
            title,
            description,
            file,
        } => {
            let code = match file {
                Some(path) => read_source(&path)?,
                None => DEFAULT_PROGRAM.to_string(),
            };
            let mut repo = open_repository(config)?;
            let index = repo
                .add(ProgramDraft::new(title, description, code))
                .map_err(|e| e.to_string())?;
            println!("Saved program #{}", index + 1);
            Ok(0)
        }
        Command::Edit {
            index,
            title,
            description,
            file,
        } => {
            let index = to_index(index);
            let mut repo = open_repository(config)?;
            let mut draft = ProgramDraft::from_record(repo.require(index).map_err(|e| e.to_string())?);
            if let Some(title) = title {
                draft.title = title;
            }
            if let Some(description) = description {
                draft.description = description;
            }
            if let Some(path) = file {
                draft.code = read_source(&path)?;
            }
            repo.update(index, draft).map_err(|e| e.to_string())?;
            println!("Updated program #{}", index + 1);
            Ok(0)
        }
        Command::Delete { index, yes } => {
            let index = to_index(index);
            let mut repo = open_repository(config)?;
            repo.require(index).map_err(|e| e.to_string())?;

            if !yes {
                let confirmed = confirm(DELETE_PROMPT, &mut io::stdin().lock(), &mut io::stderr())
                    .map_err(|e| format!("Cannot read answer: {}", e))?;
                if !confirmed {
                    info!(target: "simcc::cli", index, "delete cancelled");
                    return Ok(0);
                }
            }

            let removed = repo.delete(index).map_err(|e| e.to_string())?;
            println!("Deleted \"{}\"", removed.title);
            Ok(0)
        }
        Command::List => {
            let repo = open_repository(config)?;
            print_program_list(repo.list(), &mut io::stdout()).map_err(|e| e.to_string())?;
            Ok(0)
        }
        Command::Show { index } => {
            let repo = open_repository(config)?;
            let program = repo.require(to_index(index)).map_err(|e| e.to_string())?;
            print_program(program, &mut io::stdout()).map_err(|e| e.to_string())?;
            Ok(0)
        }
        Command::Run { index, json } => {
            let repo = open_repository(config)?;
            let program = repo.require(to_index(index)).map_err(|e| e.to_string())?;
            info!(target: "simcc::cli", title = %program.title, "running saved program");
            eprintln!("Compiling...");
            let result = compile_global(&program.code).await;
            report(&result, json)
        }
    }
}

async fn handle_compile(
    file: Option<&Path>,
    json: bool,
    request: bool,
    config: &RunConfig,
) -> Result<i32, String> {
    let input = match file {
        Some(path) if path != Path::new("-") => read_source(path)?,
        _ => read_stdin()?,
    };

    eprintln!("Compiling...");
    let result = if request {
        let request: CompileRequest =
            serde_json::from_str(&input).map_err(|e| format!("Invalid compile request: {}", e))?;
        compile_value(&request.code, config).await
    } else {
        compile_global(&input).await
    };

    report(&result, json)
}

/// Print a result; error-kind results exit with status 2
fn report(result: &CompilationResult, json: bool) -> Result<i32, String> {
    if json {
        let text = serde_json::to_string_pretty(result).map_err(|e| e.to_string())?;
        println!("{}", text);
    } else {
        print_compilation(result, &mut io::stdout(), &mut io::stderr()).map_err(|e| e.to_string())?;
    }

    Ok(if result.is_success() { 0 } else { EXIT_COMPILE_ERROR })
}

fn open_repository(config: &RunConfig) -> Result<ProgramRepository<FileStore>, String> {
    let store = FileStore::new(&config.store.store_dir);
    ProgramRepository::open(store, config.store.storage_key.as_str()).map_err(|e| e.to_string())
}

fn read_source(path: &Path) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| format!("Cannot read '{}': {}", path.display(), e))
}

fn read_stdin() -> Result<String, String> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .map_err(|e| format!("Cannot read stdin: {}", e))?;
    Ok(input)
}

/// 1-based position from the command line to a list index
fn to_index(position: u64) -> usize {
    position.saturating_sub(1) as usize
}
