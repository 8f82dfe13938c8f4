use movie_track_core::StoreState;
use movie_track_models::{backdrop_url, poster_url, MovieStatus};

use super::{status_badge, year_label, ViewContext};

/// The details overlay, or `None` when no movie is selected.
pub fn render(state: &StoreState, ctx: &ViewContext) -> Option<String> {
    let selected = state.selected_movie_id?;

    if state.is_loading_details {
        return Some("── Movie details ──\nLoading movie details...".to_string());
    }

    let Some(details) = &state.selected_movie_details else {
        return Some(format!(
            "── Movie details ──\nCould not load details for movie {}\nclose",
            selected
        ));
    };
    let movie = &details.movie;

    let mut lines = vec![format!("── {} ──", movie.title)];
    if let Some(tagline) = details.tagline.as_deref().filter(|t| !t.is_empty()) {
        lines.push(format!("\"{}\"", tagline));
    }

    let mut meta = vec![year_label(movie.release_year())];
    if let Some(runtime) = details.runtime {
        meta.push(format!("{} min", runtime));
    }
    meta.push(format!("⭐ {:.1}/10", movie.vote_average));
    lines.push(meta.join(" · "));

    let genres = details.genre_names();
    if !genres.is_empty() {
        lines.push(genres.join(", "));
    }
    lines.push(String::new());
    lines.push(movie.overview.clone());
    lines.push(String::new());
    lines.push(format!("Poster:   {}", poster_url(&ctx.poster_base_url, movie.poster_path.as_deref())));
    lines.push(format!(
        "Backdrop: {}",
        backdrop_url(&ctx.backdrop_base_url, details.backdrop_path.as_deref())
    ));

    let status = state.status_of(movie.id);
    if status.is_some() {
        lines.push(status_badge(status).to_string());
    }

    match state.find_persisted(movie.id).filter(|m| m.is_watched()) {
        Some(record) => {
            let rating = record
                .personal_rating
                .map(|r| r.stars())
                .unwrap_or_else(|| "not rated".to_string());
            lines.push(format!("Your rating: {}", rating));
            lines.push(format!("Your review: {}", record.review.as_deref().unwrap_or("-")));
            lines.push(if record.is_favorite { "⭐ Favorite".to_string() } else { "☆ Not a favorite".to_string() });
            lines.push(format!(
                "rate {id} <1-5> · review {id} <text> · fav {id} · delete {id} · close",
                id = record.id
            ));
        }
        None => {
            let mut actions = Vec::new();
            if status != Some(MovieStatus::Watchlist) {
                actions.push(format!("add {}", movie.id));
            }
            actions.push(format!("watch {}", movie.id));
            actions.push("close".to_string());
            lines.push(actions.join(" · "));
        }
    }

    Some(lines.join("\n"))
}
