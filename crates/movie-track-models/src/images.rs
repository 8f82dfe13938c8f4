pub const DEFAULT_POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";
pub const DEFAULT_BACKDROP_BASE_URL: &str = "https://image.tmdb.org/t/p/w1280";
pub const POSTER_PLACEHOLDER_URL: &str = "https://via.placeholder.com/500x750?text=No+Image";
pub const BACKDROP_PLACEHOLDER_URL: &str = "https://via.placeholder.com/1280x720?text=No+Image";

/// Full poster URL for a catalog image path, or the placeholder when there is none.
pub fn poster_url(base: &str, path: Option<&str>) -> String {
    resolve(base, path, POSTER_PLACEHOLDER_URL)
}

pub fn backdrop_url(base: &str, path: Option<&str>) -> String {
    resolve(base, path, BACKDROP_PLACEHOLDER_URL)
}

fn resolve(base: &str, path: Option<&str>, placeholder: &str) -> String {
    match path.map(str::trim).filter(|p| !p.is_empty()) {
        Some(path) => format!("{}{}", base.trim_end_matches('/'), path),
        None => placeholder.to_string(),
    }
}
