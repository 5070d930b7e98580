use common::{ApiError, BookDto, GenreDto, GenreWithBooksDto};

use crate::api_client;

/// Get all genres
pub async fn list() -> Result<Vec<GenreDto>, ApiError> {
    log::trace!("Fetching all genres");
    let result = api_client::get::<Vec<GenreDto>>("/genres").await;
    match &result {
        Ok(genres) => log::info!("Fetched {} genres", genres.len()),
        Err(e) => log::error!("Failed to fetch genres: {}", e),
    }
    result
}

/// Get all genres with their books attached
pub async fn with_books() -> Result<Vec<GenreWithBooksDto>, ApiError> {
    log::trace!("Fetching genres with books");
    api_client::get("/genres/with-books").await
}

/// Get the books of a genre, addressed by name
pub async fn books_by_name(name: &str) -> Result<Vec<BookDto>, ApiError> {
    log::trace!("Fetching books for genre: {}", name);
    let encoded = String::from(js_sys::encode_uri_component(name));
    api_client::get(&format!("/genres/name/{}/books", encoded)).await
}
