use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use roster_config::{get_config_path, Config};
use roster_output::*;
use roster_store::{Authenticatable, RecordService};
use roster_types::*;
use tracing::info;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

const MAIN_HELP: &str = r#"Roster keeps a small in-memory list of user records. Records are looked up
by exact, case-sensitive name; the first match in insertion order wins.

Running `roster` with no command inserts a sample record for Alice and looks
it up again. `roster get`, `roster list` and `roster info` work on the seed
records from the config file (see `roster config`)."#;

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = MAIN_HELP)]
#[command(version)]
struct Cli {
    #[arg(long, global = true, help = "Output as JSON")]
    json: bool,

    #[arg(long, global = true, help = "Config file to use instead of the default")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Insert a sample record and look it up (default).")]
    Demo,

    #[command(about = "Look up the first seed record with the given name.")]
    Get {
        #[arg(help = "Exact, case-sensitive record name")]
        name: String,
    },

    #[command(about = "List seed records in insertion order.")]
    List,

    #[command(about = "Check whether a token would be accepted.")]
    Auth {
        #[arg(help = "Token to check")]
        token: String,
    },

    #[command(about = "Show record count and service defaults.")]
    Info,

    #[command(about = "Print config file location and contents.")]
    Config,
}

type LogHandle = reload::Handle<EnvFilter, Registry>;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_handle = init_logging();
    let config_path = cli.config.clone().unwrap_or_else(get_config_path);

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => handle_demo(cli.json),
        Commands::Get { name } => {
            let config = load_config(&config_path, &log_handle)?;
            handle_get(&config, cli.json, &name)
        }
        Commands::List => {
            let config = load_config(&config_path, &log_handle)?;
            handle_list(&config, cli.json)
        }
        Commands::Auth { token } => handle_auth(cli.json, &token),
        Commands::Info => {
            let config = load_config(&config_path, &log_handle)?;
            handle_info(&config, cli.json)
        }
        Commands::Config => handle_config(&config_path),
    }
}

/// Starts logging at `RUST_LOG` (or warn) so config loading is already covered.
/// The configured level is applied later through the returned handle.
fn init_logging() -> LogHandle {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let (filter, handle) = reload::Layer::new(filter);
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_ansi(false))
        .init();
    handle
}

fn load_config(path: &Path, log_handle: &LogHandle) -> Result<Config> {
    let config = Config::load_from(path)?;
    if std::env::var_os(EnvFilter::DEFAULT_ENV).is_none() {
        log_handle.reload(EnvFilter::new(&config.logging.level))?;
    }
    Ok(config)
}

fn seeded_service(config: &Config) -> RecordService {
    let service = RecordService::from_records(config.records.iter().cloned());
    info!("Seeded {} record(s) from config", service.len());
    service
}

fn print_record(record: Option<&Record>, json_output: bool) -> Result<()> {
    if json_output {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        println!("{}", format_record(record));
    }
    Ok(())
}

fn handle_demo(json_output: bool) -> Result<()> {
    let mut service = RecordService::new();
    service.add_record(record!("Alice", "alice@example.com"));
    print_record(service.get_record("Alice"), json_output)
}

fn handle_get(config: &Config, json_output: bool, name: &str) -> Result<()> {
    let service = seeded_service(config);
    print_record(service.get_record(name), json_output)
}

fn handle_list(config: &Config, json_output: bool) -> Result<()> {
    let service = seeded_service(config);
    if json_output {
        println!("{}", serde_json::to_string_pretty(service.records())?);
    } else {
        println!("{}", format_records(service.records()));
    }
    Ok(())
}

fn handle_auth(json_output: bool, token: &str) -> Result<()> {
    let service = RecordService::new();
    let result = AuthResult {
        authenticated: service.authenticate(token),
    };
    if json_output {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", format_auth_result(&result));
    }
    Ok(())
}

fn handle_info(config: &Config, json_output: bool) -> Result<()> {
    let service = seeded_service(config);
    let info = ServiceInfo {
        records: service.len(),
        adults: service.iter().filter(|r| r.is_adult()).count(),
        max_records: config.service.max_records,
        default_role: config.service.default_role,
        placeholder: Record::placeholder(),
    };
    if json_output {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("{}", format_info(&info));
    }
    Ok(())
}

fn handle_config(config_path: &Path) -> Result<()> {
    println!("Config file: {}", config_path.display());
    println!();

    if config_path.exists() {
        println!("{}", std::fs::read_to_string(config_path)?);
    } else {
        println!("(file does not exist, using defaults)");
    }
    Ok(())
}
