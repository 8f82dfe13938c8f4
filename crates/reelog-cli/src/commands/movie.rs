use super::loading::with_spinner;
use super::prompts::{prompt_string, prompt_yes_no};
use super::App;
use crate::output::Output;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use movie_track_core::StoreError;
use movie_track_models::{MovieStatus, MovieUpdate, PersistedMovie, PersonalRating};
use serde_json::json;

pub const REVIEW_SAVED: &str = "Review saved!";

async fn load_lists(app: &App, output: &Output) {
    with_spinner("Loading your lists...", output, async {
        tokio::join!(app.store.load_watchlist(), app.store.load_watched())
    })
    .await;
}

/// Looks up a local record, loading the lists first.
async fn listed(app: &App, id: u64, output: &Output) -> Result<PersistedMovie> {
    load_lists(app, output).await;
    app.store.find_by_id(id).ok_or_else(|| StoreError::NotFound(id).into())
}

/// Like [`listed`], but only watched records can be rated or reviewed.
async fn watched(app: &App, id: u64, output: &Output) -> Result<PersistedMovie> {
    listed(app, id, output)
        .await
        .ok()
        .filter(PersistedMovie::is_watched)
        .ok_or_else(|| StoreError::NotFound(id).into())
}

fn report(output: &Output, message: String, movie: &PersistedMovie) {
    if output.is_json() {
        output.json(&json!({"type": "success", "message": message, "movie": movie}));
    } else {
        output.success(message);
    }
}

pub async fn run_add(app: &App, catalog_id: u64, output: &Output) -> Result<()> {
    load_lists(app, output).await;
    let movie = app.store.resolve_catalog(catalog_id).await?;

    // A refused add has already been reported through the alert sink.
    match app.store.add_to_watchlist(&movie).await {
        Some(saved) => {
            report(output, format!("Added \"{}\" to your watchlist", saved.title), &saved);
            Ok(())
        }
        None => Err(eyre!("\"{}\" was not added", movie.title)),
    }
}

pub async fn run_watch(app: &App, catalog_id: u64, output: &Output) -> Result<()> {
    load_lists(app, output).await;
    let movie = app.store.resolve_catalog(catalog_id).await?;
    let saved = app.store.mark_as_watched(&movie).await?;
    report(output, format!("Marked \"{}\" as watched", saved.title), &saved);
    Ok(())
}

pub async fn run_rate(app: &App, id: u64, rating: PersonalRating, output: &Output) -> Result<()> {
    watched(app, id, output).await?;
    let saved = app.store.update_movie(id, &MovieUpdate::rating(rating)).await?;
    report(output, format!("Rated \"{}\" {}", saved.title, rating.stars()), &saved);
    Ok(())
}

/// Saves `text`, or prompts with the current review prefilled when none is given.
pub async fn run_review(app: &App, id: u64, text: Option<String>, output: &Output) -> Result<()> {
    let movie = watched(app, id, output).await?;
    let review = match text {
        Some(text) => text,
        None => {
            if output.is_json() {
                return Err(eyre!("Review text is required with --output json"));
            }
            prompt_string(&format!("Review for \"{}\"", movie.title), movie.review.as_deref())?
        }
    };

    let saved = app.store.update_movie(id, &MovieUpdate::review(review)).await?;
    report(output, REVIEW_SAVED.to_string(), &saved);
    Ok(())
}

pub async fn run_favorite(app: &App, id: u64, output: &Output) -> Result<()> {
    listed(app, id, output).await?;
    let saved = app.store.toggle_favorite(id).await?;
    let message = if saved.is_favorite {
        format!("\"{}\" is now a favorite", saved.title)
    } else {
        format!("\"{}\" is no longer a favorite", saved.title)
    };
    report(output, message, &saved);
    Ok(())
}

pub fn delete_prompt(movie: &PersistedMovie) -> String {
    let list = match movie.status {
        MovieStatus::Watchlist => "watchlist",
        MovieStatus::Watched => "watched list",
    };
    format!("Are you sure you want to delete \"{}\" from your {}?", movie.title, list)
}

pub async fn run_delete(app: &App, id: u64, yes: bool, output: &Output) -> Result<()> {
    let movie = listed(app, id, output).await?;

    if !yes {
        if output.is_json() {
            return Err(eyre!("Pass --yes to delete with --output json"));
        }
        if !prompt_yes_no(&delete_prompt(&movie), Some(false))? {
            output.info("Nothing deleted");
            return Ok(());
        }
    }

    app.store.delete_movie(id).await?;
    if output.is_json() {
        output.json(&json!({"type": "success", "deleted": id}));
    } else {
        output.success(format!("Deleted \"{}\"", movie.title));
    }
    Ok(())
}
