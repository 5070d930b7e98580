pub mod auth;
pub mod authors;
pub mod books;
pub mod genres;
pub mod reports;
pub mod users;

use common::ApiError;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::FormData;

use crate::settings;

// API base is retrieved from settings
fn api_base() -> String {
    settings::get_settings().api_base_url()
}

fn network_error(method: &str, endpoint: &str, err: gloo_net::Error) -> ApiError {
    log::error!("{} {} - network error: {}", method, endpoint, err);
    ApiError::Network(err.to_string())
}

/// Collapses a non-success response into an [`ApiError::Status`], extracting
/// the backend's `message` field when the body parses as JSON.
async fn status_error(method: &str, endpoint: &str, response: Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let err = ApiError::from_status(status, &body);
    log::warn!("{} {} - {}", method, endpoint, err);
    err
}

async fn parse_body<T>(method: &str, endpoint: &str, response: Response) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    log::trace!("{} {} - Response received, parsing JSON", method, endpoint);
    response.json::<T>().await.map_err(|err| {
        log::error!("{} {} - failed to parse response: {}", method, endpoint, err);
        ApiError::Decode(err.to_string())
    })
}

/// Common GET request handler
pub async fn get<T>(endpoint: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|err| network_error("GET", endpoint, err))?;

    if !response.ok() {
        return Err(status_error("GET", endpoint, response).await);
    }

    let value = parse_body("GET", endpoint, response).await?;
    log::info!("GET {} - Success", endpoint);
    Ok(value)
}

/// GET with explicit query parameters (keys stay unencoded in the caller).
pub async fn get_with_query<T>(endpoint: &str, params: &[(&str, String)]) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("GET request to: {} with {} params", url, params.len());

    let response = Request::get(&url)
        .query(params.iter().map(|(key, value)| (*key, value.as_str())))
        .send()
        .await
        .map_err(|err| network_error("GET", endpoint, err))?;

    if !response.ok() {
        return Err(status_error("GET", endpoint, response).await);
    }

    let value = parse_body("GET", endpoint, response).await?;
    log::info!("GET {} - Success", endpoint);
    Ok(value)
}

/// Common POST request handler for JSON bodies returning a JSON value.
pub async fn post<T, B>(endpoint: &str, body: &B) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Serialize,
{
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("POST request to: {}", url);

    let response = Request::post(&url)
        .json(body)
        .map_err(|err| {
            log::error!("POST {} - failed to serialize request: {}", endpoint, err);
            ApiError::Decode(err.to_string())
        })?
        .send()
        .await
        .map_err(|err| network_error("POST", endpoint, err))?;

    if !response.ok() {
        return Err(status_error("POST", endpoint, response).await);
    }

    let value = parse_body("POST", endpoint, response).await?;
    log::info!("POST {} - Success", endpoint);
    Ok(value)
}

/// POST with a JSON body whose response body is not consumed.
pub async fn post_unit<B>(endpoint: &str, body: &B) -> Result<(), ApiError>
where
    B: Serialize,
{
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("POST request to: {}", url);

    let response = Request::post(&url)
        .json(body)
        .map_err(|err| {
            log::error!("POST {} - failed to serialize request: {}", endpoint, err);
            ApiError::Decode(err.to_string())
        })?
        .send()
        .await
        .map_err(|err| network_error("POST", endpoint, err))?;

    if !response.ok() {
        return Err(status_error("POST", endpoint, response).await);
    }

    log::info!("POST {} - Success", endpoint);
    Ok(())
}

/// POST without a request body (activate/deactivate, pay, logout).
pub async fn post_empty(endpoint: &str) -> Result<(), ApiError> {
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("POST request to: {}", url);

    let response = Request::post(&url)
        .send()
        .await
        .map_err(|err| network_error("POST", endpoint, err))?;

    if !response.ok() {
        return Err(status_error("POST", endpoint, response).await);
    }

    log::info!("POST {} - Success", endpoint);
    Ok(())
}

/// POST with a raw `FormData` body. No JSON content type is applied; the
/// browser sets the multipart boundary itself.
pub async fn post_form(endpoint: &str, form: FormData) -> Result<(), ApiError> {
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("POST form request to: {}", url);

    let response = Request::post(&url)
        .body(form)
        .map_err(|err| {
            log::error!("POST {} - failed to attach form body: {}", endpoint, err);
            ApiError::Decode(err.to_string())
        })?
        .send()
        .await
        .map_err(|err| network_error("POST", endpoint, err))?;

    if !response.ok() {
        return Err(status_error("POST", endpoint, response).await);
    }

    log::info!("POST {} - Success", endpoint);
    Ok(())
}

/// Common PUT request handler
pub async fn put<T, B>(endpoint: &str, body: &B) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Serialize,
{
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("PUT request to: {}", url);

    let response = Request::put(&url)
        .json(body)
        .map_err(|err| {
            log::error!("PUT {} - failed to serialize request: {}", endpoint, err);
            ApiError::Decode(err.to_string())
        })?
        .send()
        .await
        .map_err(|err| network_error("PUT", endpoint, err))?;

    if !response.ok() {
        return Err(status_error("PUT", endpoint, response).await);
    }

    let value = parse_body("PUT", endpoint, response).await?;
    log::info!("PUT {} - Success", endpoint);
    Ok(value)
}

/// Common DELETE request handler. The response body is not consumed.
pub async fn delete(endpoint: &str) -> Result<(), ApiError> {
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("DELETE request to: {}", url);

    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|err| network_error("DELETE", endpoint, err))?;

    if !response.ok() {
        return Err(status_error("DELETE", endpoint, response).await);
    }

    log::info!("DELETE {} - Success", endpoint);
    Ok(())
}
