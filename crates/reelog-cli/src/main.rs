use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::eyre;
use commands::{build_app, config, lists, movie, shell};
use movie_track_config::PathManager;
use movie_track_models::{PersonalRating, WatchedFilter};

mod commands;
mod logging;
mod output;
mod routes;
mod views;

#[derive(Parser)]
#[command(name = "reelog")]
#[command(about = "reelog - Track the movies you want to watch and the ones you have seen")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show popular movies from the catalog
    Browse,
    /// Search the catalog by title
    Search {
        /// Search terms; empty shows popular movies
        query: Vec<String>,
    },
    /// Show your watchlist
    Watchlist,
    /// Show the movies you have watched
    Watched {
        /// all, favorites, or a star rating from 1 to 5
        #[arg(long, default_value = "all")]
        filter: WatchedFilter,
    },
    /// Show details for a catalog movie
    Details { tmdb_id: u64 },
    /// Add a catalog movie to your watchlist
    Add { tmdb_id: u64 },
    /// Mark a catalog movie as watched (moves it off the watchlist)
    Watch { tmdb_id: u64 },
    /// Rate one of your movies from 1 to 5 stars
    Rate { id: u64, stars: PersonalRating },
    /// Write a review; prompts with the current one when no text is given
    Review { id: u64, text: Vec<String> },
    /// Toggle the favorite flag on one of your movies
    Favorite { id: u64 },
    /// Remove one of your movies
    Delete {
        id: u64,

        /// Skip the confirmation prompt
        #[arg(long, action = ArgAction::SetTrue)]
        yes: bool,
    },
    /// Start the interactive shell
    Shell,
    #[command(long_about = "Manage reelog configuration. The TMDB API key is stored in the credentials file and can be overridden with REELOG_TMDB_API_KEY.")]
    Config {
        #[command(subcommand)]
        cmd: Option<ConfigCommands>,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    #[command(long_about = "Display the current configuration. The API key is masked unless --full is given.")]
    Show {
        #[arg(long, action = ArgAction::SetTrue)]
        full: bool,
    },

    #[command(long_about = "Configure the TMDB catalog. Without flags, prompts for each setting.")]
    Catalog {
        #[arg(long)]
        api_key: Option<String>,

        #[arg(long)]
        base_url: Option<String>,

        #[arg(long)]
        language: Option<String>,
    },

    #[command(long_about = "Configure the backend that stores your watchlist and watched movies.")]
    Backend {
        #[arg(long)]
        base_url: Option<String>,
    },
}

fn joined(words: Vec<String>) -> Option<String> {
    Some(words.join(" ")).filter(|s| !s.is_empty())
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    // The shell owns the terminal, so its logs go to a file
    let log_file = matches!(cli.command, Commands::Shell).then(|| PathManager::default().shell_log_file());
    logging::init_logging(cli.verbose, cli.quiet, log_file).map_err(|e| eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);

    if let Commands::Config { cmd } = cli.command {
        let cmd = cmd.unwrap_or(ConfigCommands::Show { full: false });
        return config::run_config(cmd, &output).await;
    }

    let app = build_app(&output)?;
    match cli.command {
        Commands::Browse => lists::run_browse(&app, &output).await,
        Commands::Search { query } => lists::run_search(&app, &query.join(" "), &output).await,
        Commands::Watchlist => lists::run_watchlist(&app, &output).await,
        Commands::Watched { filter } => lists::run_watched(&app, filter, &output).await,
        Commands::Details { tmdb_id } => lists::run_details(&app, tmdb_id, &output).await,
        Commands::Add { tmdb_id } => movie::run_add(&app, tmdb_id, &output).await,
        Commands::Watch { tmdb_id } => movie::run_watch(&app, tmdb_id, &output).await,
        Commands::Rate { id, stars } => movie::run_rate(&app, id, stars, &output).await,
        Commands::Review { id, text } => movie::run_review(&app, id, joined(text), &output).await,
        Commands::Favorite { id } => movie::run_favorite(&app, id, &output).await,
        Commands::Delete { id, yes } => movie::run_delete(&app, id, yes, &output).await,
        Commands::Shell => shell::run_shell(app, &output).await,
        Commands::Config { .. } => Ok(()),
    }
}
