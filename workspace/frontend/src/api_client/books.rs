use common::{ApiError, BookDetailsDto, BookDto, CreateBookRequest, RentRequest, UpdateBookRequest};

use crate::api_client;

/// One catalog filter applied to the book list.
#[derive(Debug, Clone, PartialEq)]
pub enum BookFilter {
    All,
    Available,
    Title(String),
    Year(i32),
    AuthorName(String),
}

impl BookFilter {
    fn query_params(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::All => Vec::new(),
            Self::Available => vec![("available", "true".to_string())],
            Self::Title(title) => vec![("title", title.clone())],
            Self::Year(year) => vec![("year", year.to_string())],
            Self::AuthorName(name) => vec![("authorPartName", name.clone())],
        }
    }
}

/// Get books matching a catalog filter
pub async fn list(filter: &BookFilter) -> Result<Vec<BookDto>, ApiError> {
    log::trace!("Fetching books with filter: {:?}", filter);
    let result =
        api_client::get_with_query::<Vec<BookDto>>("/books", &filter.query_params()).await;
    match &result {
        Ok(books) => log::info!("Fetched {} books", books.len()),
        Err(e) => log::error!("Failed to fetch books: {}", e),
    }
    result
}

/// Get a book with author and genre names resolved
pub async fn get_details(book_id: i64) -> Result<BookDetailsDto, ApiError> {
    log::trace!("Fetching details for book ID: {}", book_id);
    api_client::get(&format!("/books/{}/details", book_id)).await
}

/// Create a new book
pub async fn create(request: &CreateBookRequest) -> Result<BookDto, ApiError> {
    log::debug!("Creating new book: {}", request.title);
    let result = api_client::post::<BookDto, _>("/books", request).await;
    match &result {
        Ok(book) => log::info!("Created book: {} (ID: {})", book.title, book.id),
        Err(e) => log::error!("Failed to create book '{}': {}", request.title, e),
    }
    result
}

/// Update an existing book
pub async fn update(book_id: i64, request: &UpdateBookRequest) -> Result<BookDto, ApiError> {
    log::debug!("Updating book ID: {}", book_id);
    api_client::put(&format!("/books/{}", book_id), request).await
}

/// Delete a book
pub async fn delete(book_id: i64) -> Result<(), ApiError> {
    log::debug!("Deleting book ID: {}", book_id);
    api_client::delete(&format!("/books/{}", book_id)).await
}

/// Rent a book for a user
pub async fn rent(user_id: i64, book_id: i64) -> Result<(), ApiError> {
    log::debug!("User {} renting book {}", user_id, book_id);
    api_client::post_unit(&format!("/users/{}/rent", user_id), &RentRequest { book_id }).await
}

/// Return a borrowed book
pub async fn return_book(user_id: i64, book_id: i64) -> Result<(), ApiError> {
    log::debug!("User {} returning book {}", user_id, book_id);
    api_client::post_unit(&format!("/users/{}/return", user_id), &RentRequest { book_id }).await
}
