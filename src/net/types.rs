//! JSON wire types for the voting backend.
//!
//! Field names are camelCase on the wire to match the backend's contract.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A delegate running for election, as returned by `GET /candidates`.
/// Read-only on the client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: i64,
    pub full_name: String,
    pub registration_number: String,
    pub school: String,
}

/// Body of `POST /register`. The confirmation password never leaves the
/// client, so it has no field here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub full_name: String,
    pub email_or_phone: String,
    pub registration_number: String,
    pub password: String,
    pub school: String,
    pub is_candidate: bool,
}

/// Body of `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub registration_number: String,
    pub password: String,
}

/// Success body of `POST /login`. The backend also returns a `student`
/// object the client does not consume.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Body of `POST /vote`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteSubmission {
    pub voter_reg_number: String,
    pub candidate_id: i64,
}
