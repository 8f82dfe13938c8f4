use comfy_table::Cell;
use movie_track_core::StoreState;

use super::{excerpt, status_badge, table, vote_label, year_label};

const OVERVIEW_EXCERPT: usize = 120;

pub fn render(state: &StoreState) -> String {
    let mut out = String::from("Browse Movies\n");
    if state.search_query.is_empty() {
        out.push_str("Search: (popular movies)  ·  search <query>\n");
    } else {
        out.push_str(&format!("Search: \"{}\"  ·  browse to clear\n", state.search_query));
    }

    if state.is_loading {
        out.push_str("\nLoading movies...");
        return out;
    }

    if state.browse_movies.is_empty() {
        out.push_str("\nNo movies found");
        return out;
    }

    let mut movies = table(&["TMDB ID", "Title", "Year", "Rating", "Status", "Overview"]);
    for movie in &state.browse_movies {
        movies.add_row(vec![
            Cell::new(movie.id),
            Cell::new(&movie.title),
            Cell::new(year_label(movie.release_year())),
            Cell::new(vote_label(Some(movie.vote_average))),
            Cell::new(status_badge(state.status_of(movie.id))),
            Cell::new(excerpt(&movie.overview, OVERVIEW_EXCERPT)),
        ]);
    }
    out.push('\n');
    out.push_str(&movies.to_string());
    out.push_str("\nadd <tmdb-id> · watch <tmdb-id> · details <tmdb-id>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::fixtures::{catalog, persisted};
    use movie_track_models::MovieStatus;

    #[test]
    fn test_loading_hides_results() {
        let state = StoreState {
            is_loading: true,
            browse_movies: vec![catalog(1, "Heat")],
            ..StoreState::default()
        };
        let text = render(&state);
        assert!(text.contains("Loading movies..."));
        assert!(!text.contains("Heat"));
    }

    #[test]
    fn test_empty_results() {
        let state = StoreState {
            search_query: "zzzz".to_string(),
            ..StoreState::default()
        };
        let text = render(&state);
        assert!(text.contains("Search: \"zzzz\""));
        assert!(text.contains("No movies found"));
    }

    #[test]
    fn test_rows_carry_status_badges() {
        let mut heat = catalog(949, "Heat");
        heat.overview = "x".repeat(200);
        let state = StoreState {
            browse_movies: vec![heat, catalog(603, "The Matrix"), catalog(155, "The Dark Knight")],
            watchlist: vec![persisted(1, 949, "Heat", MovieStatus::Watchlist)],
            watched: vec![persisted(2, 603, "The Matrix", MovieStatus::Watched)],
            ..StoreState::default()
        };
        let text = render(&state);
        assert!(text.contains("📝 In Watchlist"));
        assert!(text.contains("✅ Watched"));
        assert!(text.contains("The Dark Knight"));
        assert!(text.contains(&format!("{}...", "x".repeat(120))));
        assert!(!text.contains(&"x".repeat(121)));
        assert!(text.contains("2010"));
        assert!(text.contains("⭐ 8.4"));
    }
}
