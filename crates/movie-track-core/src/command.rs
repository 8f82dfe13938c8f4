//! Typed user actions and their dispatch onto the store.

use movie_track_models::{MovieUpdate, PersistedMovie, PersonalRating, WatchedFilter};
use std::str::FromStr;
use tracing::debug;

use crate::error::{CommandError, StoreError};
use crate::store::Store;

/// Every action a user can take from the views.
///
/// Movie ids are catalog ids for `AddToWatchlist`, `MarkAsWatched` and
/// `OpenDetails`; the list edits (`Rate`, `SaveReview`, `ToggleFavorite`,
/// `Delete`) take the local record id shown on the watchlist and watched views.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Search(String),
    LoadBrowse,
    AddToWatchlist(u64),
    MarkAsWatched(u64),
    OpenDetails(u64),
    CloseDetails,
    Rate { id: u64, rating: PersonalRating },
    SaveReview { id: u64, review: String },
    ToggleFavorite(u64),
    Delete(u64),
    SetFilter(WatchedFilter),
}

/// `(usage, description)` pairs for the shell's help text.
pub const COMMAND_HELP: &[(&str, &str)] = &[
    ("search <query>", "Search the catalog (blank shows popular movies)"),
    ("browse", "Show popular movies"),
    ("add <tmdb-id>", "Add a movie to your watchlist"),
    ("watch <tmdb-id>", "Mark a movie as watched"),
    ("details <tmdb-id>", "Show movie details"),
    ("close", "Close the details view"),
    ("rate <id> <1-5>", "Rate a watched movie"),
    ("review <id> <text>", "Save a review for a watched movie"),
    ("fav <id>", "Toggle favorite"),
    ("delete <id>", "Remove a movie from your lists"),
    ("filter <all|favorites|1-5>", "Filter the watched list"),
];

impl Command {
    /// Deletions ask for confirmation in interactive front ends.
    pub fn is_destructive(&self) -> bool {
        matches!(self, Command::Delete(_))
    }
}

fn parse_id(raw: &str) -> Result<u64, CommandError> {
    raw.trim()
        .parse()
        .map_err(|_| CommandError::InvalidId(raw.trim().to_string()))
}

fn require<'a>(args: &'a str, verb: &'static str, expected: &'static str) -> Result<&'a str, CommandError> {
    if args.is_empty() {
        Err(CommandError::MissingArgument { verb, expected })
    } else {
        Ok(args)
    }
}

fn no_args(args: &str, verb: &'static str, command: Command) -> Result<Command, CommandError> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(CommandError::UnexpectedArgument(verb))
    }
}

/// Splits `"<id> rest..."` into the id and the (possibly empty) rest.
fn id_and_rest(args: &str) -> Result<(u64, &str), CommandError> {
    let (id, rest) = args.split_once(char::is_whitespace).unwrap_or((args, ""));
    Ok((parse_id(id)?, rest.trim()))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let (verb, args) = input.split_once(char::is_whitespace).unwrap_or((input, ""));
        let args = args.trim();

        match verb.to_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "search" => Ok(Command::Search(args.to_string())),
            "browse" => no_args(args, "browse", Command::LoadBrowse),
            "add" => Ok(Command::AddToWatchlist(parse_id(require(args, "add", "a movie id")?)?)),
            "watch" => Ok(Command::MarkAsWatched(parse_id(require(args, "watch", "a movie id")?)?)),
            "details" => Ok(Command::OpenDetails(parse_id(require(args, "details", "a movie id")?)?)),
            "close" => no_args(args, "close", Command::CloseDetails),
            "rate" => {
                let (id, stars) = id_and_rest(require(args, "rate", "an id and a rating")?)?;
                let stars = require(stars, "rate", "an id and a rating")?;
                Ok(Command::Rate { id, rating: stars.parse()? })
            }
            "review" => {
                let (id, review) = id_and_rest(require(args, "review", "an id and review text")?)?;
                Ok(Command::SaveReview { id, review: review.to_string() })
            }
            "fav" | "favorite" => Ok(Command::ToggleFavorite(parse_id(require(args, "fav", "an id")?)?)),
            "delete" => Ok(Command::Delete(parse_id(require(args, "delete", "an id")?)?)),
            "filter" => Ok(Command::SetFilter(require(args, "filter", "all, favorites or 1-5")?.parse()?)),
            other => Err(CommandError::UnknownVerb(other.to_string())),
        }
    }
}

impl Store {
    /// Runs a command against the store.
    ///
    /// Failures that the store reports through its alert sink (add, update,
    /// delete) are also returned so callers can set an exit status. An add the
    /// backend refuses comes back as `Ok(())`; the alert already told the user.
    pub async fn dispatch(&self, command: Command) -> Result<(), StoreError> {
        debug!(?command, "Dispatching command");
        match command {
            Command::Search(query) => self.search(&query).await,
            Command::LoadBrowse => self.load_browse_list().await,
            Command::AddToWatchlist(catalog_id) => {
                let movie = self.resolve_catalog(catalog_id).await?;
                self.add_to_watchlist(&movie).await;
            }
            Command::MarkAsWatched(catalog_id) => {
                let movie = self.resolve_catalog(catalog_id).await?;
                self.mark_as_watched(&movie).await?;
            }
            Command::OpenDetails(catalog_id) => {
                self.open_movie_details(catalog_id).await;
            }
            Command::CloseDetails => self.close_movie_details(),
            Command::Rate { id, rating } => {
                self.require_watched(id)?;
                self.update_movie(id, &MovieUpdate::rating(rating)).await?;
            }
            Command::SaveReview { id, review } => {
                self.require_watched(id)?;
                self.update_movie(id, &MovieUpdate::review(review)).await?;
            }
            Command::ToggleFavorite(id) => {
                self.toggle_favorite(id).await?;
            }
            Command::Delete(id) => {
                self.require_listed(id)?;
                self.delete_movie(id).await?;
            }
            Command::SetFilter(filter) => self.set_watched_filter(filter),
        }
        Ok(())
    }

    fn require_listed(&self, id: u64) -> Result<(), StoreError> {
        self.find_by_id(id).map(|_| ()).ok_or(StoreError::NotFound(id))
    }

    /// Ratings and reviews only annotate watched movies.
    fn require_watched(&self, id: u64) -> Result<(), StoreError> {
        self.find_by_id(id)
            .filter(PersistedMovie::is_watched)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }
}
