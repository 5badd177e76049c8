//! pokedex CLI
//!
//! Browse the creature catalog and manage your box of caught Pokemon.

mod commands;
mod display;
mod error;
mod session;
mod spinner;

use std::io::Write;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use pokedex_client::ClientConfig;

use crate::commands::collection::{AddArgs, EditArgs, PokemonRef};
pub(crate) use crate::error::CliError;
use crate::session::Session;

#[derive(Parser)]
#[command(name = "pokedex")]
#[command(about = "Browse the Pokemon catalog and manage your box", long_about = None)]
struct Cli {
    /// Catalog/box API base URL (overrides config and POKEDEX_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Bearer token for box commands (overrides config and POKEDEX_TOKEN)
    #[arg(long, global = true)]
    token: Option<String>,

    /// Show request-level debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Hide spinners
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List one page of the catalog
    List {
        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },

    /// Show details for one Pokemon
    Show {
        /// Pokemon name (e.g., pikachu)
        name: String,
    },

    /// Manage your box of caught Pokemon (requires a token)
    Box {
        #[command(subcommand)]
        action: BoxAction,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum BoxAction {
    /// List every entry with its catalog details
    List,

    /// Catch a Pokemon
    Add {
        /// Pokemon name or catalog id
        pokemon: PokemonRef,

        #[command(flatten)]
        fields: AddFields,
    },

    /// Edit an existing entry
    Edit {
        /// Box entry id
        id: String,

        /// New level (1-100)
        #[arg(long)]
        level: Option<u8>,

        /// New location
        #[arg(long)]
        location: Option<String>,

        /// New notes (empty string clears them)
        #[arg(long)]
        notes: Option<String>,

        /// New catch time (ISO-8601, e.g. 2024-05-01T12:00:00Z)
        #[arg(long)]
        caught_at: Option<String>,
    },

    /// Release one entry
    Release {
        /// Box entry id
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Release every entry
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Fields collected when catching a Pokemon.
#[derive(Args)]
struct AddFields {
    /// Level (1-100)
    #[arg(short, long, default_value_t = 1)]
    level: u8,

    /// Where it was caught (e.g., "Route 1")
    #[arg(long)]
    location: String,

    /// Optional notes
    #[arg(long)]
    notes: Option<String>,

    /// Catch time (ISO-8601); defaults to now
    #[arg(long)]
    caught_at: Option<String>,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current settings and their sources
    Show,

    /// Save a bearer token (prompts if omitted; empty logs out)
    SetToken {
        token: Option<String>,
    },

    /// Print the config file path
    Path,
}

/// Log an empty line at info level.
pub(crate) fn log_blank() {
    log::info!("");
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .target(env_logger::Target::Stdout)
        .format(|buf, record| {
            if record.level() == log::Level::Info {
                writeln!(buf, "{}", record.args())
            } else {
                writeln!(
                    buf,
                    "[{} {}] {}",
                    record.level(),
                    record.target(),
                    record.args()
                )
            }
        })
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(
                "{} {}",
                "\u{2718}".if_supports_color(Stderr, |t| t.red()),
                e
            );
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let Cli {
        api_url,
        token,
        quiet,
        command,
        ..
    } = cli;

    let open_session = || -> Result<Session, CliError> {
        let config = ClientConfig::load()?.with_overrides(api_url.clone(), token.clone());
        Session::open(config)
    };

    match command {
        Commands::List { page } => commands::catalog::run_list(&open_session()?, page, quiet),
        Commands::Show { name } => commands::catalog::run_show(&open_session()?, &name, quiet),
        Commands::Box { action } => {
            let session = open_session()?;
            match action {
                BoxAction::List => commands::collection::run_box_list(&session, quiet),
                BoxAction::Add { pokemon, fields } => commands::collection::run_box_add(
                    &session,
                    AddArgs {
                        pokemon,
                        level: fields.level,
                        location: fields.location,
                        notes: fields.notes,
                        caught_at: fields.caught_at,
                    },
                    quiet,
                ),
                BoxAction::Edit {
                    id,
                    level,
                    location,
                    notes,
                    caught_at,
                } => commands::collection::run_box_edit(
                    &session,
                    EditArgs {
                        id,
                        level,
                        location,
                        notes,
                        caught_at,
                    },
                    quiet,
                ),
                BoxAction::Release { id, yes } => {
                    commands::collection::run_box_release(&session, &id, yes, quiet)
                }
                BoxAction::Clear { yes } => commands::collection::run_box_clear(&session, yes, quiet),
            }
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(),
            ConfigAction::SetToken { token } => commands::config::run_config_set_token(token),
            ConfigAction::Path => commands::config::run_config_path(),
        },
    }
}
