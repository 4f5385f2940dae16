use clap::{Parser, Subcommand};
use dronecam::commands;
use dronecam::config;
use dronecam::session::{RecordingSession, SessionError};
use dronecam::strings::StringTable;
use dronecam::tui;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "dronecam")]
#[command(
    about = "Drone camera settings menu",
    long_about = concat!(
        "Drone camera settings menu\n\n",
        "If no command is specified, the program starts in interactive mode."
    )
)]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// Make the camera session refuse every command (for trying out error reporting)
    #[arg(long, global = true)]
    fail_submissions: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List tabs, settings and their options
    Catalog,
    /// Apply one setting without starting the menu
    Set {
        /// Setting id (e.g. photo_mode, white_balance)
        setting: String,
        /// Option id (e.g. hdr, 1920x1080)
        option: String,
    },
    /// Display current configuration
    Config,
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command() {
    let cfg = config::read();

    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!("Configuration File: {} (Exists: {})", path_str, if exists { "yes" } else { "no" });
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!();
    println!("[display]");
    println!("use_unicode: {}", cfg.display.use_unicode);
    println!("selection_fg: {:?}", cfg.display.selection_fg);
    println!("unfocused_selection_fg: {:?}{}",
        cfg.display.unfocused_selection_fg(),
        if cfg.display.unfocused_selection_fg.is_none() { " (auto: 50% darker)" } else { "" }
    );
    println!("error_fg: {:?}", cfg.display.error_fg);
    if !cfg.strings.is_empty() {
        println!();
        println!("[strings]");
        let mut keys: Vec<&String> = cfg.strings.keys().collect();
        keys.sort();
        for key in keys {
            println!("{} = {:?}", key, cfg.strings[key]);
        }
    }
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

fn create_session(fail_submissions: bool) -> RecordingSession {
    if fail_submissions {
        RecordingSession::failing_with(SessionError::Disconnected)
    } else {
        RecordingSession::new()
    }
}

fn main() {
    let config = config::read();
    let cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    let session = create_session(cli.fail_submissions);
    let strings = StringTable::with_overrides(config.strings.clone());

    let Some(command) = cli.command else {
        if let Err(e) = tui::run(&config, session) {
            eprintln!("Error running TUI: {}", e);
            std::process::exit(1);
        }
        return;
    };

    let result = match command {
        Commands::Config => {
            handle_config_command();
            Ok(())
        }
        Commands::Catalog => {
            commands::catalog::run(&config.display, &strings);
            Ok(())
        }
        Commands::Set { setting, option } => {
            let mut session = session;
            commands::set::run(&mut session, &setting, &option, &strings)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
