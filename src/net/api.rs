//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/[`ApiError::Unavailable`] since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so auth/profile
//! fetch failures degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{Listing, ListingDraft, LoginRequest, User, UserProfile};

#[cfg(any(test, feature = "hydrate"))]
fn user_profile_endpoint(user_id: &str) -> String {
    format!("/api/users/{}/profile", urlencoding::encode(user_id))
}

#[cfg(any(test, feature = "hydrate"))]
fn listing_endpoint(listing_id: &str) -> String {
    format!("/api/listings/{}", urlencoding::encode(listing_id))
}

#[cfg(feature = "hydrate")]
fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

#[cfg(feature = "hydrate")]
async fn decode<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Whether a `/api/auth/me` status means "nobody is signed in" rather than a
/// backend failure.
pub fn is_signed_out_status(status: u16) -> bool {
    matches!(status, 401 | 403)
}

/// Fetch the currently authenticated user from `/api/auth/me`.
///
/// `Ok(None)` means the backend answered and there is no session (401/403).
///
/// # Errors
///
/// Returns an [`ApiError`] when the backend could not answer: network
/// failure, any other non-success status, or a malformed body. On the server
/// this is always [`ApiError::Unavailable`].
pub async fn fetch_current_user() -> Result<Option<User>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .map_err(network)?;
        if is_signed_out_status(resp.status()) {
            return Ok(None);
        }
        decode(resp).await.map(Some)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Sign in with email and password via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, credentials are rejected, or
/// the response is not a user.
pub async fn login(request: &LoginRequest) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(request)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await;
    }
}

/// Fetch the newest public listings from `/api/listings`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body is not a listing array.
pub async fn fetch_listings() -> Result<Vec<Listing>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/listings")
            .send()
            .await
            .map_err(network)?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch one listing for editing.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the listing does not exist.
pub async fn fetch_listing(listing_id: &str) -> Result<Listing, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&listing_endpoint(listing_id))
            .send()
            .await
            .map_err(network)?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = listing_id;
        Err(ApiError::Unavailable)
    }
}

/// Create a listing (`POST /api/listings`) or update one
/// (`PUT /api/listings/{id}`) when `listing_id` is given.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the server rejects the draft.
pub async fn save_listing(listing_id: Option<&str>, draft: &ListingDraft) -> Result<Listing, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = match listing_id {
            Some(id) => gloo_net::http::Request::put(&listing_endpoint(id)),
            None => gloo_net::http::Request::post("/api/listings"),
        };
        let resp = request
            .json(draft)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (listing_id, draft);
        Err(ApiError::Unavailable)
    }
}

/// Fetch a user's public profile from `/api/users/{user_id}/profile`.
pub async fn fetch_user_profile(user_id: &str) -> Option<UserProfile> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&user_profile_endpoint(user_id))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<UserProfile>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
        None
    }
}
