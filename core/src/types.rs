//! Domain DTOs for the posts API.
//!
//! # Design
//! These types mirror the remote service's schema but are defined
//! independently of the mock-server crate. Integration tests catch any
//! schema drift between the two. The wire format uses camelCase for
//! `userId`; everything else maps one-to-one.

use serde::{Deserialize, Serialize};

/// A single post as returned by the API. Also the full-replacement payload
/// for `PUT /posts/{id}`, which submits every field including `id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub body: String,
    #[serde(rename = "userId")]
    pub user_id: u32,
}

/// Request payload for creating a new post. The service assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub body: String,
    #[serde(rename = "userId")]
    pub user_id: u32,
}
