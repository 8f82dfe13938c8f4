use super::loading::with_spinner;
use super::App;
use crate::output::Output;
use crate::views;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use movie_track_models::WatchedFilter;
use serde_json::json;

fn to_json<T: serde::Serialize>(value: &T) -> Result<serde_json::Value> {
    serde_json::to_value(value).map_err(|e| eyre!("Failed to serialize output: {}", e))
}

pub async fn run_browse(app: &App, output: &Output) -> Result<()> {
    with_spinner("Loading movies...", output, app.store.load_all()).await;
    let state = app.store.snapshot();

    if output.is_json() {
        output.json(&to_json(&state.browse_movies)?);
    } else {
        output.view(views::browse::render(&state));
    }
    Ok(())
}

/// Searches while the lists load so status badges are accurate.
pub async fn run_search(app: &App, query: &str, output: &Output) -> Result<()> {
    with_spinner("Searching...", output, async {
        tokio::join!(
            app.store.search(query),
            app.store.load_watchlist(),
            app.store.load_watched()
        )
    })
    .await;
    let state = app.store.snapshot();

    if output.is_json() {
        output.json(&json!({
            "query": state.search_query,
            "results": to_json(&state.browse_movies)?,
        }));
    } else {
        output.view(views::browse::render(&state));
    }
    Ok(())
}

pub async fn run_watchlist(app: &App, output: &Output) -> Result<()> {
    with_spinner("Loading watchlist...", output, app.store.load_watchlist()).await;
    let state = app.store.snapshot();

    if output.is_json() {
        output.json(&to_json(&state.watchlist)?);
    } else {
        output.view(views::watchlist::render(&state));
    }
    Ok(())
}

pub async fn run_watched(app: &App, filter: WatchedFilter, output: &Output) -> Result<()> {
    with_spinner("Loading watched movies...", output, app.store.load_watched()).await;
    app.store.set_watched_filter(filter);

    if output.is_json() {
        output.json(&json!({
            "filter": filter.to_string(),
            "total": app.store.snapshot().watched.len(),
            "movies": to_json(&app.store.filtered_watched())?,
        }));
    } else {
        output.view(views::watched::render(&app.store.snapshot()));
    }
    Ok(())
}

pub async fn run_details(app: &App, catalog_id: u64, output: &Output) -> Result<()> {
    let (_, _, details) = with_spinner("Loading movie details...", output, async {
        tokio::join!(
            app.store.load_watchlist(),
            app.store.load_watched(),
            app.store.open_movie_details(catalog_id)
        )
    })
    .await;
    let details = details.ok_or_else(|| eyre!("Could not load details for movie {}", catalog_id))?;

    if output.is_json() {
        output.json(&json!({
            "details": to_json(&details)?,
            "status": app.store.status_of(catalog_id).map(|s| s.to_string()),
            "record": to_json(&app.store.find_persisted(catalog_id))?,
        }));
    } else if let Some(rendered) = views::details::render(&app.store.snapshot(), &app.view) {
        output.view(rendered);
    }
    Ok(())
}
