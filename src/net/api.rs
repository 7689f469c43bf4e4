//! REST helpers for the voting backend.
//!
//! Browser (csr): real HTTP calls via `gloo-net`.
//! Host target: stubs returning the workflow fallback message, since the
//! endpoints are only reachable from a browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, String>` where the error is already the
//! message to display: the server's `{error}` body when it carries one, the
//! per-workflow fallback otherwise. Transport failures, non-JSON bodies, and
//! bodies without a string `error` field all collapse to the fallback.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::net::types::{Candidate, Credentials, LoginResponse, RegisterRequest, VoteSubmission};

/// Base URL of the voting backend.
pub const API_BASE: &str = "http://localhost:5000/api";

/// Fallback shown when registration fails without a server message.
pub const REGISTER_FALLBACK: &str = "Registration failed";
/// Fallback shown when sign-in fails without a server message.
pub const LOGIN_FALLBACK: &str = "Login failed. Please check your credentials.";
/// Fallback shown when the candidate list cannot be loaded.
pub const CANDIDATES_FALLBACK: &str = "Failed to load candidates";
/// Fallback shown when a vote is rejected without a server message.
pub const VOTE_FALLBACK: &str = "Failed to submit vote";

/// Extract the display message from an error response body.
///
/// The backend's error bodies look like `{"error": "..."}`, but nothing
/// guarantees that shape, so the parse is lenient.
pub fn error_from_body(body: &str, fallback: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("error")
                .and_then(serde_json::Value::as_str)
                .map(str::to_owned)
        })
        .unwrap_or_else(|| fallback.to_owned())
}

#[cfg(feature = "csr")]
async fn display_error(resp: gloo_net::http::Response, fallback: &str) -> String {
    match resp.text().await {
        Ok(body) => error_from_body(&body, fallback),
        Err(_) => fallback.to_owned(),
    }
}

/// Create a delegate account via `POST /register`.
///
/// # Errors
///
/// Returns the message to display when the request fails.
pub async fn register(body: &RegisterRequest) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&format!("{API_BASE}/register"))
            .json(body)
            .map_err(|_| REGISTER_FALLBACK.to_owned())?
            .send()
            .await
            .map_err(|e| {
                log::warn!("register request failed: {e}");
                REGISTER_FALLBACK.to_owned()
            })?;
        if resp.ok() {
            Ok(())
        } else {
            Err(display_error(resp, REGISTER_FALLBACK).await)
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = body;
        Err(REGISTER_FALLBACK.to_owned())
    }
}

/// Sign a delegate in via `POST /login`.
///
/// # Errors
///
/// Returns the message to display when the request fails.
pub async fn login(credentials: &Credentials) -> Result<LoginResponse, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&format!("{API_BASE}/login"))
            .json(credentials)
            .map_err(|_| LOGIN_FALLBACK.to_owned())?
            .send()
            .await
            .map_err(|e| {
                log::warn!("login request failed: {e}");
                LOGIN_FALLBACK.to_owned()
            })?;
        if resp.ok() {
            resp.json::<LoginResponse>()
                .await
                .map_err(|_| LOGIN_FALLBACK.to_owned())
        } else {
            Err(display_error(resp, LOGIN_FALLBACK).await)
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = credentials;
        Err(LOGIN_FALLBACK.to_owned())
    }
}

/// Fetch the candidate list via `GET /candidates`.
///
/// The backend guards this route, so the stored token is attached as a
/// bearer credential when present.
///
/// # Errors
///
/// Returns the message to display when the request fails.
pub async fn fetch_candidates(token: Option<&str>) -> Result<Vec<Candidate>, String> {
    #[cfg(feature = "csr")]
    {
        let mut req = gloo_net::http::Request::get(&format!("{API_BASE}/candidates"));
        if let Some(token) = token {
            req = req.header("Authorization", &format!("Bearer {token}"));
        }
        let resp = req.send().await.map_err(|e| {
            log::warn!("candidate fetch failed: {e}");
            CANDIDATES_FALLBACK.to_owned()
        })?;
        if resp.ok() {
            resp.json::<Vec<Candidate>>()
                .await
                .map_err(|_| CANDIDATES_FALLBACK.to_owned())
        } else {
            Err(display_error(resp, CANDIDATES_FALLBACK).await)
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
        Err(CANDIDATES_FALLBACK.to_owned())
    }
}

/// Record a vote via `POST /vote`, with the bearer token attached when
/// present.
///
/// # Errors
///
/// Returns the message to display when the request fails.
pub async fn submit_vote(vote: &VoteSubmission, token: Option<&str>) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let mut req = gloo_net::http::Request::post(&format!("{API_BASE}/vote"));
        if let Some(token) = token {
            req = req.header("Authorization", &format!("Bearer {token}"));
        }
        let resp = req
            .json(vote)
            .map_err(|_| VOTE_FALLBACK.to_owned())?
            .send()
            .await
            .map_err(|e| {
                log::warn!("vote request failed: {e}");
                VOTE_FALLBACK.to_owned()
            })?;
        if resp.ok() {
            Ok(())
        } else {
            Err(display_error(resp, VOTE_FALLBACK).await)
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (vote, token);
        Err(VOTE_FALLBACK.to_owned())
    }
}
