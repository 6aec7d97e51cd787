//! Player roster CLI — `roster` command.
//!
//! Adds, removes and annotates tracked players and lists them with their
//! name history, resolving names through the Mojang profile API.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use player_roster::config::DEFAULT_STORE_FILE;
use player_roster::{
    AddOutcome, DirectoryConfig, MojangDirectory, PlayerRef, ReasonOutcome, RosterConfig,
    RosterStore,
};

// ── CLI structure ─────────────────────────────────────────────────────────────

/// Player roster CLI — track players by UUID and follow their name changes.
#[derive(Parser, Debug)]
#[command(
    name = "roster",
    about = "Player roster CLI",
    version,
    arg_required_else_help = true,
    long_about = "roster — player roster CLI\n\nKeep a list of players keyed by UUID, with the reason they are listed\nand every name they have gone by."
)]
struct Cli {
    /// Roster file to read and write
    #[arg(long, global = true, default_value = DEFAULT_STORE_FILE)]
    store: PathBuf,

    /// Timeout for each directory lookup, in seconds
    #[arg(long, global = true, default_value_t = 10)]
    timeout_secs: u64,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a user to the list
    Add {
        /// Current username
        username: String,

        /// Why the user is on the list
        reason: Option<String>,
    },

    /// Remove a user from the list
    Remove {
        /// Current username
        username: String,
    },

    /// Add or change the reason for a user already on the list
    Reason {
        /// Current username, or a 32-character UUID
        username_or_uuid: String,

        /// New reason
        reason: String,
    },

    /// Add multiple users from a file
    ///
    /// One user per line: `name1,name2,...,current[|reason]`, oldest name first.
    Bulk {
        /// Path to the file, including its extension
        file_path: PathBuf,
    },

    /// List all users, updating names that changed since the last update
    List,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config = RosterConfig {
        store_path: cli.store.clone(),
    };
    let directory_config = DirectoryConfig::default().with_timeout_secs(cli.timeout_secs);
    let verbose = cli.verbose;

    let result = match cli.command {
        Commands::Add { username, reason } => {
            cmd_add(&config, &directory_config, &username, reason, verbose)
        }
        Commands::Remove { username } => cmd_remove(&config, &username, verbose),
        Commands::Reason {
            username_or_uuid,
            reason,
        } => cmd_reason(&config, &username_or_uuid, &reason, verbose),
        Commands::Bulk { file_path } => {
            cmd_bulk(&config, &directory_config, &file_path, verbose)
        }
        Commands::List => cmd_list(&config, &directory_config, verbose),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn open_store(config: &RosterConfig) -> Result<RosterStore> {
    log::debug!("opening roster {}", config.store_path.display());
    RosterStore::open(&config.store_path)
        .with_context(|| format!("failed to load roster {}", config.store_path.display()))
}

// ── Commands ──────────────────────────────────────────────────────────────────

/// `roster add USERNAME [REASON]`
fn cmd_add(
    config: &RosterConfig,
    directory_config: &DirectoryConfig,
    username: &str,
    reason: Option<String>,
    verbose: bool,
) -> Result<()> {
    let mut store = open_store(config)?;
    let directory = MojangDirectory::new(directory_config.clone());

    match store
        .add_player(&directory, username, reason)
        .context("failed to add player")?
    {
        AddOutcome::Added(id) => {
            println!("Added {username}");
            if verbose {
                println!("  UUID:  {id}");
                println!("  Store: {}", store.path().display());
            }
        }
        AddOutcome::Duplicate { name, .. } => println!("{name} is already on the list"),
        AddOutcome::Unresolved { name } => {
            println!("Could not find a UUID for {name}; nothing was added")
        }
    }

    Ok(())
}

/// `roster remove USERNAME`
fn cmd_remove(config: &RosterConfig, username: &str, verbose: bool) -> Result<()> {
    let mut store = open_store(config)?;

    match store
        .remove_player(username)
        .context("failed to remove player")?
    {
        Some(player) => {
            println!("Removed {username}");
            if verbose {
                println!("  UUID: {}", player.id);
            }
        }
        None => println!("Could not find {username}"),
    }

    Ok(())
}

/// `roster reason USERNAME_OR_UUID REASON`
fn cmd_reason(
    config: &RosterConfig,
    username_or_uuid: &str,
    reason: &str,
    verbose: bool,
) -> Result<()> {
    let mut store = open_store(config)?;

    match store
        .change_reason(username_or_uuid, Some(reason.to_string()))
        .context("failed to change reason")?
    {
        ReasonOutcome::Updated => {
            println!("Updated reason for {username_or_uuid}");
            if verbose {
                if let Some(player) = store.find(&PlayerRef::parse(username_or_uuid)) {
                    println!("  UUID:  {}", player.id);
                    println!("  Names: {}", player.names().join(", "));
                }
            }
        }
        ReasonOutcome::NotFound(target) => println!("{target} is not in the list."),
    }

    Ok(())
}

/// `roster bulk FILE_PATH`
fn cmd_bulk(
    config: &RosterConfig,
    directory_config: &DirectoryConfig,
    file_path: &Path,
    verbose: bool,
) -> Result<()> {
    let mut store = open_store(config)?;
    let directory = MojangDirectory::new(directory_config.clone());

    let report = store
        .bulk_add_players(&directory, file_path)
        .with_context(|| format!("failed to import {}", file_path.display()))?;

    for name in &report.duplicates {
        println!("{name} is already on the list");
    }
    for name in &report.unresolved {
        println!("Could not find a UUID for {name}");
    }
    for (line, problem) in &report.invalid {
        println!("Skipped line {line}: {problem}");
    }
    println!("Added {} player(s)", report.added.len());

    if verbose {
        for id in &report.added {
            println!("  + {id}");
        }
    }

    Ok(())
}

/// `roster list`
fn cmd_list(config: &RosterConfig, directory_config: &DirectoryConfig, verbose: bool) -> Result<()> {
    let mut store = open_store(config)?;
    let directory = MojangDirectory::new(directory_config.clone());

    let (report, players) = store
        .list_all_players(&directory)
        .context("failed to update player names")?;

    println!("Number of players on list: {}", players.len());
    for player in players {
        println!("{player}");
    }

    if verbose {
        for rename in &report.renamed {
            println!("  renamed: {} -> {} ({})", rename.from, rename.to, rename.id);
        }
        for id in &report.unresolved {
            println!("  could not look up: {id}");
        }
    }

    Ok(())
}
