use common::{ApiError, AuthorDto, CreateAuthorRequest, UpdateAuthorRequest};

use crate::api_client;

/// Get all authors
pub async fn list() -> Result<Vec<AuthorDto>, ApiError> {
    log::trace!("Fetching all authors");
    let result = api_client::get::<Vec<AuthorDto>>("/authors").await;
    match &result {
        Ok(authors) => log::info!("Fetched {} authors", authors.len()),
        Err(e) => log::error!("Failed to fetch authors: {}", e),
    }
    result
}

/// Search authors by (partial) name
pub async fn search(name: &str) -> Result<Vec<AuthorDto>, ApiError> {
    log::trace!("Searching authors by name: {}", name);
    api_client::get_with_query("/authors", &[("name", name.to_string())]).await
}

/// Get a specific author by ID
pub async fn get(author_id: i64) -> Result<AuthorDto, ApiError> {
    log::trace!("Fetching author with ID: {}", author_id);
    api_client::get(&format!("/authors/{}", author_id)).await
}

/// Create a new author
pub async fn create(request: &CreateAuthorRequest) -> Result<AuthorDto, ApiError> {
    log::debug!("Creating new author: {}", request.name);
    let result = api_client::post::<AuthorDto, _>("/authors", request).await;
    match &result {
        Ok(author) => log::info!("Created author: {} (ID: {})", author.name, author.id),
        Err(e) => log::error!("Failed to create author '{}': {}", request.name, e),
    }
    result
}

/// Update an existing author
pub async fn update(author_id: i64, request: &UpdateAuthorRequest) -> Result<AuthorDto, ApiError> {
    log::debug!("Updating author ID: {}", author_id);
    api_client::put(&format!("/authors/{}", author_id), request).await
}

/// Delete an author. Fails with the backend's message when the author still
/// has associated books.
pub async fn delete(author_id: i64) -> Result<(), ApiError> {
    log::debug!("Deleting author ID: {}", author_id);
    api_client::delete(&format!("/authors/{}", author_id)).await
}
