//! Post service: feeds, creation, deletion and likes.

#[cfg(test)]
#[path = "posts_test.rs"]
mod posts_test;

use serde::de::IgnoredAny;

use super::error::ApiError;
use super::http::{ApiClient, ApiRequest};
use super::types::{Post, PostCreate};

const COLLECTION_PATH: &str = "/posts/";

pub(crate) fn post_endpoint(id: i64) -> String {
    format!("/posts/{id}")
}

pub(crate) fn user_posts_endpoint(user_id: i64) -> String {
    format!("/posts/user/{user_id}")
}

pub(crate) fn community_posts_endpoint(community_id: i64) -> String {
    format!("/posts/community/{community_id}")
}

pub(crate) fn like_endpoint(id: i64) -> String {
    format!("/likes/post/{id}")
}

/// `GET /posts/`.
///
/// # Errors
///
/// Returns the normalized request error.
pub async fn list(api: &ApiClient) -> Result<Vec<Post>, ApiError> {
    api.send(ApiRequest::get(COLLECTION_PATH)).await
}

/// `GET /posts/announcements`.
///
/// # Errors
///
/// Returns the normalized request error.
pub async fn announcements(api: &ApiClient) -> Result<Vec<Post>, ApiError> {
    api.send(ApiRequest::get("/posts/announcements")).await
}

/// `GET /posts/user/{id}`.
///
/// # Errors
///
/// Returns the normalized request error.
pub async fn by_user(api: &ApiClient, user_id: i64) -> Result<Vec<Post>, ApiError> {
    api.send(ApiRequest::get(user_posts_endpoint(user_id))).await
}

/// `GET /posts/community/{id}`.
///
/// # Errors
///
/// Returns the normalized request error.
pub async fn by_community(api: &ApiClient, community_id: i64) -> Result<Vec<Post>, ApiError> {
    api.send(ApiRequest::get(community_posts_endpoint(community_id))).await
}

/// `POST /posts/`.
///
/// # Errors
///
/// Returns the normalized request error.
pub async fn create(api: &ApiClient, data: &PostCreate) -> Result<Post, ApiError> {
    api.send(ApiRequest::post(COLLECTION_PATH).json(data)?).await
}

/// `DELETE /posts/{id}`.
///
/// # Errors
///
/// Returns the normalized request error.
pub async fn delete(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    api.send::<IgnoredAny>(ApiRequest::delete(post_endpoint(id))).await?;
    Ok(())
}

/// `POST /likes/post/{id}`. The echoed post leaves `likes_count`/`is_liked` unset.
///
/// # Errors
///
/// Returns the normalized request error.
pub async fn like(api: &ApiClient, id: i64) -> Result<Post, ApiError> {
    api.send(ApiRequest::post(like_endpoint(id))).await
}

/// `DELETE /likes/post/{id}`. The echoed post leaves `likes_count`/`is_liked` unset.
///
/// # Errors
///
/// Returns the normalized request error.
pub async fn unlike(api: &ApiClient, id: i64) -> Result<Post, ApiError> {
    api.send(ApiRequest::delete(like_endpoint(id))).await
}

/// Like or unlike depending on the post's current state.
///
/// # Errors
///
/// Returns the normalized request error.
pub async fn toggle_like(api: &ApiClient, post: &Post) -> Result<Post, ApiError> {
    if post.is_liked { unlike(api, post.id).await } else { like(api, post.id).await }
}
