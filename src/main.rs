//! Chrome agent - dry-run driver
//!
//! Feeds commands and focus events to the agent against a recording host and
//! prints every host call as a JSON line.

use anyhow::{Context, Result};
use chrome_agent::agent::SUPPORTED_FEATURES;
use chrome_agent::host::HostCall;
use chrome_agent::{AppAgent, ChromeAgent, CommandRequest, Config, RecordingHost, WindowInfo};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Assistive-technology agent that drives Chrome with synthesized keys
#[derive(Parser)]
#[command(name = "chrome-agent")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a command and print the resulting host calls
    Run {
        /// Command identifier (e.g. `CmdZoomIn`)
        command: String,
        /// JSON argument passed along with the command
        #[arg(long)]
        arg: Option<String>,
    },
    /// Replay focus events and print the resulting host calls
    Focus {
        /// Events in order
        #[arg(value_enum, required = true)]
        events: Vec<FocusEvent>,
    },
    /// Request the context menu and print the resulting host calls
    ContextMenu,
    /// List the features whose widgets this agent enables
    Features,
    /// Show the effective configuration
    Config {
        /// Print the configuration file path instead
        #[arg(long)]
        path: bool,
    },
}

/// Focus events understood by `focus`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FocusEvent {
    /// Focus moved to a different browser window
    NewWindow,
    /// Focus changed within the same browser window
    FocusChanged,
    /// Focus moved to another application
    FocusLost,
}

fn main() -> Result<()> {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Let --help and --version exit normally
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                e.exit();
            }
            // For actual errors, show error + help
            eprintln!("error: {}\n", e.kind());
            Cli::command().print_help()?;
            std::process::exit(1);
        }
    };

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Run { command, arg } => cmd_run(config, &command, arg.as_deref()),
        Commands::Focus { events } => cmd_focus(config, &events),
        Commands::ContextMenu => cmd_context_menu(config),
        Commands::Features => {
            for feature in SUPPORTED_FEATURES {
                println!("{feature}");
            }
            Ok(())
        }
        Commands::Config { path } => {
            if path {
                let path = cli.config.unwrap_or_else(Config::default_path);
                println!("{}", path.display());
            } else {
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
            Ok(())
        }
    }
}

/// Log to `<tmp>/chrome-agent.log` - tail with: `tail -f /tmp/chrome-agent.log`.
/// Set DEBUG=0-3 to control verbosity (0=off, 1=warn, 2=info, 3=debug).
fn init_logging() {
    let debug_level = std::env::var("DEBUG")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(0);

    if debug_level == 0 {
        return;
    }

    let level = match debug_level {
        1 => tracing::Level::WARN,
        2 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };

    let log_path = chrome_agent::paths::log_path();
    // Clear the log file on startup
    if let Err(e) = std::fs::write(&log_path, "") {
        eprintln!("Warning: Failed to clear log file: {e}");
    }

    let directory = log_path
        .parent()
        .map_or_else(std::env::temp_dir, std::path::Path::to_path_buf);
    let file_appender = tracing_appender::rolling::never(directory, "chrome-agent.log");
    tracing_subscriber::fmt()
        .with_writer(file_appender)
        .with_max_level(level)
        .with_ansi(false)
        .init();
}

fn dry_run_agent(config: Config) -> ChromeAgent<RecordingHost> {
    let window = WindowInfo::new(1, config.process_name.clone(), "Dry run");
    ChromeAgent::with_config(RecordingHost::new(window), config)
}

fn print_calls(calls: &[HostCall]) -> Result<()> {
    for call in calls {
        println!("{}", serde_json::to_string(call)?);
    }
    Ok(())
}

fn cmd_run(config: Config, command: &str, arg: Option<&str>) -> Result<()> {
    let mut request = CommandRequest::from(command);
    if let Some(arg) = arg {
        let value = serde_json::from_str(arg).context("Failed to parse --arg as JSON")?;
        request = request.with_arg(value);
    }

    let mut agent = dry_run_agent(config);
    let handled = agent.on_run_command(request)?;
    print_calls(agent.host().calls())?;
    println!("{}", serde_json::json!({ "handled": handled }));
    Ok(())
}

fn cmd_focus(config: Config, events: &[FocusEvent]) -> Result<()> {
    let mut agent = dry_run_agent(config);
    let window = WindowInfo::new(1, agent.config().process_name.clone(), "Dry run");

    for event in events {
        match event {
            FocusEvent::NewWindow => {
                agent.on_focus_changed(&window.clone().new_window())?;
            }
            FocusEvent::FocusChanged => {
                agent.on_focus_changed(&window)?;
            }
            FocusEvent::FocusLost => agent.on_focus_lost(),
        }
    }

    print_calls(agent.host().calls())
}

fn cmd_context_menu(config: Config) -> Result<()> {
    let mut agent = dry_run_agent(config);
    let window = WindowInfo::new(1, agent.config().process_name.clone(), "Dry run");
    agent.on_context_menu_request(&window)?;
    print_calls(agent.host().calls())
}
