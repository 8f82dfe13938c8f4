//! Pure renderers from a store snapshot to text.

pub mod browse;
pub mod details;
pub mod watched;
pub mod watchlist;

use comfy_table::{presets, Attribute, Cell, Table};
use movie_track_config::CatalogConfig;
use movie_track_core::StoreState;
use movie_track_models::images::{DEFAULT_BACKDROP_BASE_URL, DEFAULT_POSTER_BASE_URL};
use movie_track_models::MovieStatus;

use crate::routes::Route;

/// Image prefixes the details overlay resolves poster and backdrop paths against.
#[derive(Debug, Clone)]
pub struct ViewContext {
    pub poster_base_url: String,
    pub backdrop_base_url: String,
}

impl ViewContext {
    pub fn from_config(config: &CatalogConfig) -> Self {
        Self {
            poster_base_url: config.poster_base_url.clone(),
            backdrop_base_url: config.backdrop_base_url.clone(),
        }
    }
}

impl Default for ViewContext {
    fn default() -> Self {
        Self {
            poster_base_url: DEFAULT_POSTER_BASE_URL.to_string(),
            backdrop_base_url: DEFAULT_BACKDROP_BASE_URL.to_string(),
        }
    }
}

pub fn render_route(route: &Route, state: &StoreState) -> String {
    match route {
        Route::Browse => browse::render(state),
        Route::Watchlist => watchlist::render(state),
        Route::Watched => watched::render(state),
        Route::NotFound(_) => "404".to_string(),
    }
}

/// Navigation bar, the current page and the details overlay when one is open.
pub fn render_screen(route: &Route, state: &StoreState, ctx: &ViewContext) -> String {
    let mut screen = nav_bar(route, state);
    screen.push_str("\n\n");
    screen.push_str(&render_route(route, state));
    if let Some(overlay) = details::render(state, ctx) {
        screen.push_str("\n\n");
        screen.push_str(&overlay);
    }
    screen
}

fn nav_bar(route: &Route, state: &StoreState) -> String {
    let links = [
        (Route::Browse, "Browse".to_string()),
        (Route::Watchlist, format!("Watchlist ({})", state.watchlist.len())),
        (Route::Watched, format!("Watched ({})", state.watched.len())),
    ];
    let links: Vec<String> = links
        .into_iter()
        .map(|(target, label)| {
            if &target == route {
                format!("[{} {}]", target.path(), label)
            } else {
                format!(" {} {} ", target.path(), label)
            }
        })
        .collect();
    format!("🎬 reelog  {}", links.join(" "))
}

pub(crate) fn table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table.set_header(
        headers
            .iter()
            .map(|h| Cell::new(h).add_attribute(Attribute::Bold))
            .collect::<Vec<_>>(),
    );
    table
}

/// First `max` characters of `text`, with `...` when something was cut.
pub(crate) fn excerpt(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

pub(crate) fn year_label(year: Option<i32>) -> String {
    year.map(|y| y.to_string()).unwrap_or_else(|| "N/A".to_string())
}

pub(crate) fn vote_label(vote: Option<f64>) -> String {
    match vote {
        Some(v) if v > 0.0 => format!("⭐ {:.1}", v),
        _ => "⭐ N/A".to_string(),
    }
}

pub(crate) fn status_badge(status: Option<MovieStatus>) -> &'static str {
    match status {
        Some(MovieStatus::Watchlist) => "📝 In Watchlist",
        Some(MovieStatus::Watched) => "✅ Watched",
        None => "",
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::{NaiveDate, TimeZone, Utc};
    use movie_track_models::{CatalogMovie, MovieStatus, PersistedMovie, PersonalRating};

    pub fn catalog(id: u64, title: &str) -> CatalogMovie {
        CatalogMovie {
            id,
            title: title.to_string(),
            overview: format!("{} overview", title),
            poster_path: Some(format!("/{}.jpg", id)),
            release_date: "2010-07-15".to_string(),
            vote_average: 8.36,
        }
    }

    pub fn persisted(id: u64, catalog_id: u64, title: &str, status: MovieStatus) -> PersistedMovie {
        PersistedMovie {
            id,
            catalog_id,
            title: title.to_string(),
            poster_path: None,
            release_date: Some("1999-03-31".to_string()),
            vote_average: Some(8.2),
            overview: None,
            status,
            personal_rating: None,
            review: None,
            is_favorite: false,
            date_added: Utc.with_ymd_and_hms(2025, 1, 3, 10, 15, 0).unwrap(),
            date_watched: (status == MovieStatus::Watched).then(|| NaiveDate::from_ymd_opt(2025, 1, 4).unwrap()),
        }
    }

    pub fn rated(mut movie: PersistedMovie, stars: u8) -> PersistedMovie {
        movie.personal_rating = Some(PersonalRating::new(stars).unwrap());
        movie
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt() {
        assert_eq!(excerpt("short", 120), "short");
        assert_eq!(excerpt("abcdef", 3), "abc...");
        assert_eq!(excerpt("åäöåäö", 3), "åäö...");
        assert_eq!(excerpt("abc", 3), "abc");
    }

    #[test]
    fn test_labels() {
        assert_eq!(year_label(None), "N/A");
        assert_eq!(vote_label(Some(7.26)), "⭐ 7.3");
        assert_eq!(vote_label(Some(0.0)), "⭐ N/A");
    }

    #[test]
    fn test_unknown_route_renders_404() {
        let state = StoreState::default();
        assert_eq!(render_route(&Route::from_path("/settings"), &state), "404");
    }

    #[test]
    fn test_screen_marks_active_route() {
        let state = StoreState::default();
        let screen = render_screen(&Route::Watched, &state, &ViewContext::default());
        assert!(screen.contains("[/watched Watched (0)]"));
        assert!(screen.contains(" /browse Browse "));
        assert!(screen.contains("No watched movies yet"));
    }
}
