use comfy_table::Cell;
use movie_track_core::StoreState;
use movie_track_models::{star_bar, WatchedFilter};

use super::{excerpt, table, year_label};

const REVIEW_EXCERPT: usize = 80;

fn filter_label(filter: WatchedFilter) -> String {
    match filter {
        WatchedFilter::All => "All".to_string(),
        WatchedFilter::Favorites => "⭐ Favorites".to_string(),
        WatchedFilter::Rating(rating) => format!("{} ⭐", rating),
    }
}

/// Every filter choice, the active one in brackets.
fn filter_bar(active: WatchedFilter) -> String {
    WatchedFilter::choices()
        .into_iter()
        .map(|f| {
            if f == active {
                format!("[{}]", filter_label(f))
            } else {
                format!(" {} ", filter_label(f))
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render(state: &StoreState) -> String {
    let shown = state.filtered_watched();
    let mut out = format!(
        "Watched Movies\n{} of {} movies\n{}\n",
        shown.len(),
        state.watched.len(),
        filter_bar(state.watched_filter)
    );

    if shown.is_empty() {
        if state.watched.is_empty() {
            out.push_str("\nNo watched movies yet\nStart watching movies and track your favorites! Go to /browse");
        } else {
            out.push_str("\nNo movies match this filter\nTry selecting a different filter: filter all");
        }
        return out;
    }

    let mut movies = table(&["ID", "Title", "Year", "Your rating", "Favorite", "Watched", "Review"]);
    for movie in shown {
        movies.add_row(vec![
            Cell::new(movie.id),
            Cell::new(&movie.title),
            Cell::new(year_label(movie.release_year())),
            Cell::new(star_bar(movie.personal_rating.map(|r| r.get()).unwrap_or(0))),
            Cell::new(if movie.is_favorite { "⭐ Favorite" } else { "" }),
            Cell::new(
                movie
                    .date_watched
                    .map(|d| d.format("%-d %b %Y").to_string())
                    .unwrap_or_default(),
            ),
            Cell::new(movie.review.as_deref().map(|r| excerpt(r, REVIEW_EXCERPT)).unwrap_or_default()),
        ]);
    }
    out.push('\n');
    out.push_str(&movies.to_string());
    out.push_str("\nrate <id> <1-5> · review <id> <text> · fav <id> · delete <id> · filter <all|favorites|1-5>");
    out
}
