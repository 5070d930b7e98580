use common::{ApiError, BookingDto, CreateUserRequest, UpdateUserRequest, UserDto};
use serde::Deserialize;

use crate::api_client;

/// The search endpoint answers with a single user for an exact match and a
/// list otherwise; both shapes normalize to a list here.
#[derive(Deserialize)]
#[serde(untagged)]
enum SearchResult {
    Many(Vec<UserDto>),
    One(UserDto),
}

/// Get all users
pub async fn list() -> Result<Vec<UserDto>, ApiError> {
    log::trace!("Fetching all users");
    let result = api_client::get::<Vec<UserDto>>("/users").await;
    match &result {
        Ok(users) => log::info!("Fetched {} users", users.len()),
        Err(e) => log::error!("Failed to fetch users: {}", e),
    }
    result
}

/// Search users by name or email
pub async fn search(query: &str) -> Result<Vec<UserDto>, ApiError> {
    log::trace!("Searching users by: {}", query);
    let result =
        api_client::get_with_query::<SearchResult>("/users/search", &[("by", query.to_string())])
            .await?;
    Ok(match result {
        SearchResult::Many(users) => users,
        SearchResult::One(user) => vec![user],
    })
}

/// Get a specific user by ID
pub async fn get(user_id: i64) -> Result<UserDto, ApiError> {
    log::trace!("Fetching user with ID: {}", user_id);
    api_client::get(&format!("/users/{}", user_id)).await
}

/// Create a new user
pub async fn create(request: &CreateUserRequest) -> Result<UserDto, ApiError> {
    log::debug!("Creating new user: {}", request.email);
    let result = api_client::post::<UserDto, _>("/users", request).await;
    match &result {
        Ok(user) => log::info!("Created user: {} (ID: {})", user.name, user.id),
        Err(e) => log::error!("Failed to create user '{}': {}", request.email, e),
    }
    result
}

/// Update an existing user
pub async fn update(user_id: i64, request: &UpdateUserRequest) -> Result<UserDto, ApiError> {
    log::debug!("Updating user ID: {}", user_id);
    api_client::put(&format!("/users/{}", user_id), request).await
}

/// Activate a user account
pub async fn activate(user_id: i64) -> Result<(), ApiError> {
    log::debug!("Activating user ID: {}", user_id);
    api_client::post_empty(&format!("/users/{}/activate", user_id)).await
}

/// Deactivate a user account
pub async fn deactivate(user_id: i64) -> Result<(), ApiError> {
    log::debug!("Deactivating user ID: {}", user_id);
    api_client::post_empty(&format!("/users/{}/deactivate", user_id)).await
}

/// Get the bookings of a user
pub async fn bookings(user_id: i64) -> Result<Vec<BookingDto>, ApiError> {
    log::trace!("Fetching bookings for user ID: {}", user_id);
    let result = api_client::get::<Vec<BookingDto>>(&format!("/users/{}/bookings", user_id)).await;
    match &result {
        Ok(bookings) => log::info!("Fetched {} bookings for user ID: {}", bookings.len(), user_id),
        Err(e) => log::error!("Failed to fetch bookings for user {}: {}", user_id, e),
    }
    result
}

/// Pay the fine of a booking
pub async fn pay_fine(user_id: i64, booking_id: i64) -> Result<(), ApiError> {
    log::debug!("User {} paying fine for booking {}", user_id, booking_id);
    api_client::post_empty(&format!("/users/{}/bookings/{}/pay", user_id, booking_id)).await
}
