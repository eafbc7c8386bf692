use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use go_reqver::cli::orchestration::{self, CheckWorkflowArgs};
use go_reqver::{config, ui, GoVersion};

/// Environment variable holding a tracing filter, e.g. `GOREQVER_LOG=debug`
const LOG_ENV: &str = "GOREQVER_LOG";

#[derive(Parser)]
#[command(
    name = "go-reqver",
    version,
    about = "Check the installed Go toolchain against a version requirement"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, value_name = "VERSION", help = "Minimum accepted version, e.g. go1.18")]
    min: Option<String>,

    #[arg(long, value_name = "VERSION", help = "Maximum accepted version, e.g. go1.22.5")]
    max: Option<String>,

    #[arg(
        long,
        value_name = "STRING",
        help = "Check this version string instead of querying the go toolchain"
    )]
    version_string: Option<String>,

    #[arg(long, help = "Print the resolved version and exit")]
    show: bool,

    #[arg(long, help = "Enable debug logging")]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Compare two version strings with every predicate
    Compare { left: String, right: String },
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    if let Some(Command::Compare { left, right }) = &args.command {
        let left = parse_or_exit(left);
        let right = parse_or_exit(right);
        ui::display_comparison(&left, &right);
        return Ok(());
    }

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let workflow_args = CheckWorkflowArgs {
        minimum: args.min,
        maximum: args.max,
        version_string: args.version_string,
    };

    if args.show {
        match orchestration::resolve_version(&workflow_args, &config) {
            Ok(version) => println!("{}", version),
            Err(e) => {
                ui::display_error(&e.to_string());
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    let result = match orchestration::run_check_workflow(&workflow_args, &config) {
        Ok(result) => result,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    ui::display_report(&result.actual, &result.requirement, &result.status);
    if !result.status.is_satisfied() {
        std::process::exit(1);
    }

    Ok(())
}

fn parse_or_exit(raw: &str) -> GoVersion {
    match GoVersion::parse(raw) {
        Ok(version) => version,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }
}

fn setup_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
