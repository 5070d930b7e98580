use common::{ApiError, CurrentUserDto, RegisterRequest};
use web_sys::FormData;

use crate::api_client;

/// Fetch the currently authenticated user. A non-success status means
/// "not authenticated" and is the caller's branch, not a hard failure.
pub async fn me() -> Result<CurrentUserDto, ApiError> {
    log::trace!("Fetching current user");
    let result = api_client::get::<CurrentUserDto>("/auth/me").await;
    match &result {
        Ok(user) => log::info!("Authenticated as {} (ID: {})", user.name, user.id),
        Err(e) => log::debug!("Not authenticated: {}", e),
    }
    result
}

/// Log in with the credentials form. The body is raw `FormData`, matching
/// the backend's form-login endpoint.
pub async fn login(form: FormData) -> Result<(), ApiError> {
    log::debug!("Submitting login form");
    let result = api_client::post_form("/auth/login", form).await;
    match &result {
        Ok(()) => log::info!("Login successful"),
        Err(e) => log::warn!("Login failed: {}", e),
    }
    result
}

pub async fn logout() -> Result<(), ApiError> {
    log::debug!("Logging out");
    api_client::post_empty("/auth/logout").await
}

pub async fn register(request: &RegisterRequest) -> Result<(), ApiError> {
    log::debug!("Registering new account for {}", request.email);
    let result = api_client::post_unit("/auth/register", request).await;
    match &result {
        Ok(()) => log::info!("Registration successful for {}", request.email),
        Err(e) => log::warn!("Registration failed: {}", e),
    }
    result
}
