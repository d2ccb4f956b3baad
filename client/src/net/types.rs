//! Wire and display types shared by pages and the REST client.
//!
//! DESIGN
//! ======
//! Field names follow the backend's JSON (`accessToken`, `password`) via serde
//! attributes so Rust-side names stay descriptive.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `POST /login`. The invitation code travels in `password`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    #[serde(rename = "password")]
    pub invitation_code: String,
}

/// Successful `POST /login` response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Themed room a post belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Room {
    Main,
    Ambient,
    Dark,
}

/// A shared audio link as rendered by a post card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub author: String,
    pub description: String,
    pub track_url: String,
    pub room: Room,
}
