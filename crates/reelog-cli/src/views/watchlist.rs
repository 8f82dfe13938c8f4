use comfy_table::Cell;
use movie_track_core::StoreState;

use super::{table, vote_label, year_label};

pub fn render(state: &StoreState) -> String {
    let mut out = format!("My Watchlist\n{} movies\n", state.watchlist.len());

    if state.watchlist.is_empty() {
        out.push_str("\nYour watchlist is empty\nStart adding movies you want to watch! Go to /browse");
        return out;
    }

    let mut movies = table(&["ID", "TMDB ID", "Title", "Year", "Rating", "Added"]);
    for movie in &state.watchlist {
        movies.add_row(vec![
            Cell::new(movie.id),
            Cell::new(movie.catalog_id),
            Cell::new(&movie.title),
            Cell::new(year_label(movie.release_year())),
            Cell::new(vote_label(movie.vote_average)),
            Cell::new(format!("Added: {}", movie.date_added.format("%-d %b %Y"))),
        ]);
    }
    out.push('\n');
    out.push_str(&movies.to_string());
    out.push_str("\nwatch <tmdb-id> · details <tmdb-id> · delete <id>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::fixtures::persisted;
    use movie_track_models::MovieStatus;

    #[test]
    fn test_empty_watchlist() {
        let text = render(&StoreState::default());
        assert!(text.contains("0 movies"));
        assert!(text.contains("Your watchlist is empty"));
    }

    #[test]
    fn test_watchlist_rows() {
        let state = StoreState {
            watchlist: vec![
                persisted(7, 603, "The Matrix", MovieStatus::Watchlist),
                persisted(8, 949, "Heat", MovieStatus::Watchlist),
            ],
            ..StoreState::default()
        };
        let text = render(&state);
        assert!(text.contains("2 movies"));
        assert!(text.contains("The Matrix"));
        assert!(text.contains("Added: 3 Jan 2025"));
        assert!(text.contains("1999"));
    }
}
