//! In-process stand-in for the placeholder posts service.
//!
//! # Design
//! Mirrors the public behavior of the JSONPlaceholder `posts` resource so
//! the harness can run hermetically. The service is deliberately
//! non-persisting: `POST /posts` always assigns id 101 and remembers only
//! that one created post (so a follow-up GET or PUT on it succeeds), while
//! `PUT` and `DELETE` acknowledge without mutating anything. Seeded posts
//! with ids 1..=100 are computed on demand and never change.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

/// Ids `1..=SEED_POST_COUNT` exist on the service from the start.
pub const SEED_POST_COUNT: u64 = 100;

/// The id assigned to every created post, like the real placeholder service.
pub const CREATED_POST_ID: u64 = 101;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub body: String,
    #[serde(rename = "userId")]
    pub user_id: u32,
}

#[derive(Deserialize)]
pub struct NewPost {
    pub title: String,
    pub body: String,
    #[serde(rename = "userId")]
    pub user_id: u32,
}

/// The only mutable state: the post most recently accepted by `POST /posts`.
pub type Db = Arc<RwLock<Option<Post>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(None));
    Router::new()
        .route("/posts", post(create_post))
        .route(
            "/posts/{id}",
            get(get_post).put(update_post).delete(delete_post),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Deterministic seed data for ids `1..=SEED_POST_COUNT`.
fn seeded_post(id: u64) -> Option<Post> {
    if (1..=SEED_POST_COUNT).contains(&id) {
        Some(Post {
            id,
            title: format!("Seeded post {id}"),
            body: format!("Body of seeded post {id}"),
            user_id: ((id - 1) / 10 + 1) as u32,
        })
    } else {
        None
    }
}

async fn create_post(
    State(db): State<Db>,
    Json(input): Json<NewPost>,
) -> (StatusCode, Json<Post>) {
    let created = Post {
        id: CREATED_POST_ID,
        title: input.title,
        body: input.body,
        user_id: input.user_id,
    };
    *db.write().await = Some(created.clone());
    (StatusCode::CREATED, Json(created))
}

async fn get_post(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Post>, StatusCode> {
    if let Some(seeded) = seeded_post(id) {
        return Ok(Json(seeded));
    }
    let created = db.read().await;
    match created.as_ref() {
        Some(post) if post.id == id => Ok(Json(post.clone())),
        _ => Err(StatusCode::NOT_FOUND),
    }
}

async fn update_post(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(mut input): Json<Post>,
) -> Result<Json<Post>, StatusCode> {
    let known = seeded_post(id).is_some()
        || db.read().await.as_ref().is_some_and(|post| post.id == id);
    if !known {
        return Err(StatusCode::NOT_FOUND);
    }
    // The id is taken from the path; the echoed object is never stored.
    input.id = id;
    Ok(Json(input))
}

async fn delete_post(
    Path(_id): Path<u64>,
) -> Json<serde_json::Map<String, serde_json::Value>> {
    // Always 200 with an empty object; nothing is actually removed.
    Json(serde_json::Map::new())
}
