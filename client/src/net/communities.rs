//! Community service: listing, membership and admin operations.

#[cfg(test)]
#[path = "communities_test.rs"]
mod communities_test;

use super::error::ApiError;
use super::http::{ApiClient, ApiRequest};
use super::types::{Community, CommunityCreate, CommunityUpdate};

const COLLECTION_PATH: &str = "/communities/";

pub(crate) fn list_request(search: Option<&str>) -> ApiRequest {
    let request = ApiRequest::get(COLLECTION_PATH);
    match search.map(str::trim).filter(|term| !term.is_empty()) {
        Some(term) => request.query("search", term),
        None => request,
    }
}

pub(crate) fn community_endpoint(id: i64) -> String {
    format!("/communities/{id}")
}

pub(crate) fn slug_endpoint(slug: &str) -> String {
    format!("/communities/{slug}")
}

pub(crate) fn members_endpoint(id: i64) -> String {
    format!("/communities/{id}/members")
}

/// `GET /communities/`, optionally filtered by a search term.
///
/// # Errors
///
/// Returns the normalized request error.
pub async fn list(api: &ApiClient, search: Option<&str>) -> Result<Vec<Community>, ApiError> {
    api.send(list_request(search)).await
}

/// `GET /communities/my`: communities the session user belongs to.
///
/// # Errors
///
/// Returns the normalized request error.
pub async fn mine(api: &ApiClient) -> Result<Vec<Community>, ApiError> {
    api.send(ApiRequest::get("/communities/my")).await
}

/// `GET /communities/{slug}`.
///
/// # Errors
///
/// Returns the normalized request error.
pub async fn get_by_slug(api: &ApiClient, slug: &str) -> Result<Community, ApiError> {
    api.send(ApiRequest::get(slug_endpoint(slug))).await
}

/// `POST /communities/`.
///
/// # Errors
///
/// Returns the normalized request error.
pub async fn create(api: &ApiClient, data: &CommunityCreate) -> Result<Community, ApiError> {
    api.send(ApiRequest::post(COLLECTION_PATH).json(data)?).await
}

/// `PUT /communities/{id}`.
///
/// # Errors
///
/// Returns the normalized request error.
pub async fn update(api: &ApiClient, id: i64, data: &CommunityUpdate) -> Result<Community, ApiError> {
    api.send(ApiRequest::put(community_endpoint(id)).json(data)?).await
}

/// `POST /communities/{id}/members`: join as the session user.
///
/// # Errors
///
/// Returns the normalized request error.
pub async fn join(api: &ApiClient, id: i64) -> Result<Community, ApiError> {
    api.send(ApiRequest::post(members_endpoint(id))).await
}

/// `DELETE /communities/{id}/members`: leave as the session user.
///
/// # Errors
///
/// Returns the normalized request error.
pub async fn leave(api: &ApiClient, id: i64) -> Result<Community, ApiError> {
    api.send(ApiRequest::delete(members_endpoint(id))).await
}

/// `DELETE /communities/{id}` (admins only).
///
/// # Errors
///
/// Returns the normalized request error.
pub async fn delete(api: &ApiClient, id: i64) -> Result<Community, ApiError> {
    api.send(ApiRequest::delete(community_endpoint(id))).await
}
