//! roster CLI
//!
//! Command-line interface for managing the player roster database.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use roster_db::{
    Connection, DEFAULT_DB_FILE, PlayerUpdate, count_players, delete_player, find_player,
    insert_player, list_players, open_database, search_players, update_player, write_players,
};

mod error;

use error::CliError;

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Manage the player roster database", long_about = None)]
struct Cli {
    /// Database file (created on first use)
    #[arg(long, global = true, default_value = DEFAULT_DB_FILE)]
    db: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a player to the roster
    Add {
        /// Player aliases (e.g., PlayerOne,AliasOne)
        #[arg(short, long, value_delimiter = ',', required = true)]
        names: Vec<String>,

        /// Matchmaking rating
        #[arg(short, long)]
        mmr: i64,

        /// Lane preference weights (e.g., 0.7,0.3,0,0,0)
        #[arg(short, long, value_delimiter = ',')]
        lanes: Vec<f64>,
    },

    /// List all players
    List,

    /// Search players by name substring
    Search {
        /// Substring matched against the stored alias text
        query: String,
    },

    /// Show a single player
    Show {
        /// Player id
        id: i64,
    },

    /// Update fields of an existing player
    Update {
        /// Player id
        id: i64,

        /// Replace the alias list
        #[arg(short, long, value_delimiter = ',')]
        names: Option<Vec<String>>,

        /// Replace the matchmaking rating
        #[arg(short, long)]
        mmr: Option<i64>,

        /// Replace the lane preference weights
        #[arg(short, long, value_delimiter = ',')]
        lanes: Option<Vec<f64>>,
    },

    /// Delete a player
    Delete {
        /// Player id
        id: i64,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!(
            "{} {}",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            e,
        );
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    log::debug!("opening database at {}", cli.db.display());
    let conn = open_database(&cli.db)?;

    match cli.command {
        Commands::Add { names, mmr, lanes } => run_add(&conn, names, mmr, lanes),
        Commands::List => run_list(&conn),
        Commands::Search { query } => run_search(&conn, &query),
        Commands::Show { id } => run_show(&conn, id),
        Commands::Update {
            id,
            names,
            mmr,
            lanes,
        } => run_update(&conn, id, names, mmr, lanes),
        Commands::Delete { id } => run_delete(&conn, id),
    }
}

/// Run the add command.
fn run_add(
    conn: &Connection,
    names: Vec<String>,
    mmr: i64,
    lanes: Vec<f64>,
) -> Result<(), CliError> {
    let id = insert_player(conn, &names, mmr, &lanes)?;
    println!(
        "{} Added player {} ({})",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        id,
        names.join(", ").if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}

/// Run the list command.
fn run_list(conn: &Connection) -> Result<(), CliError> {
    let players = list_players(conn)?;
    let mut stdout = std::io::stdout();
    write_players(&mut stdout, &players)?;

    let total = count_players(conn)?;
    println!(
        "{}",
        format!("{} player(s) in roster", total).if_supports_color(Stdout, |t| t.dimmed()),
    );
    Ok(())
}

/// Run the search command.
fn run_search(conn: &Connection, query: &str) -> Result<(), CliError> {
    let players = search_players(conn, query)?;
    if players.is_empty() {
        println!(
            "{}",
            format!("No players matching '{}'", query).if_supports_color(Stdout, |t| t.dimmed()),
        );
        return Ok(());
    }

    let mut stdout = std::io::stdout();
    write_players(&mut stdout, &players)?;
    Ok(())
}

/// Run the show command.
fn run_show(conn: &Connection, id: i64) -> Result<(), CliError> {
    match find_player(conn, id)? {
        Some(player) => {
            let mut stdout = std::io::stdout();
            write_players(&mut stdout, std::slice::from_ref(&player))?;
            stdout.flush()?;
        }
        None => {
            println!(
                "{} No player with id {}",
                "?".if_supports_color(Stdout, |t| t.yellow()),
                id,
            );
        }
    }
    Ok(())
}

/// Run the update command.
fn run_update(
    conn: &Connection,
    id: i64,
    names: Option<Vec<String>>,
    mmr: Option<i64>,
    lanes: Option<Vec<f64>>,
) -> Result<(), CliError> {
    let update = PlayerUpdate {
        names,
        mmr,
        lane_pref: lanes,
    };

    if update.is_empty() {
        println!(
            "{}",
            "Nothing to update (pass --names, --mmr, or --lanes)"
                .if_supports_color(Stdout, |t| t.dimmed()),
        );
        return Ok(());
    }

    update_player(conn, id, &update)?;
    match find_player(conn, id)? {
        Some(player) => {
            println!(
                "{} Updated player {} ({})",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                id,
                player.names.join(", ").if_supports_color(Stdout, |t| t.cyan()),
            );
        }
        None => {
            println!(
                "{} No player with id {}, nothing updated",
                "?".if_supports_color(Stdout, |t| t.yellow()),
                id,
            );
        }
    }
    Ok(())
}

/// Run the delete command.
fn run_delete(conn: &Connection, id: i64) -> Result<(), CliError> {
    delete_player(conn, id)?;
    println!(
        "{} Deleted player {} (if present)",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        id,
    );
    Ok(())
}
