//! REST DTOs for the client/API boundary.
//!
//! DESIGN
//! ======
//! These types mirror the API's snake_case JSON so serde round-trips stay
//! lossless. Fields the server marks optional are tolerated as missing or
//! `null`; counters and flags collapse to zero/false in that case.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// An account as returned inside auth responses and embedded in posts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    /// Login email address.
    pub email: String,
    /// Display name, if the user set one.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl User {
    /// Name to show in UI chrome; falls back to the email address.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(self.email.as_str())
    }
}

/// Body returned by `POST /auth/login` and `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub user: User,
}

/// Fields submitted to `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterData {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// A community with membership flags relative to the session user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Community {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub name: String,
    /// Unique URL-safe identifier used in routes.
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_private: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub created_by_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub members_count: i64,
    #[serde(default)]
    pub is_member: bool,
    #[serde(default)]
    pub is_admin: bool,
}

/// Community reference embedded in posts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityMinimal {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

/// Fields submitted to `POST /communities/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_private: bool,
}

/// Partial update submitted to `PUT /communities/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,
}

/// A post as returned by the `/posts` endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Post {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author_id: Option<i64>,
    #[serde(default)]
    pub author: Option<User>,
    #[serde(default)]
    pub community_id: Option<i64>,
    #[serde(default)]
    pub community: Option<CommunityMinimal>,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub likes_count: i64,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub comments_count: i64,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub is_liked: bool,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub is_announcement: bool,
    /// ISO 8601 creation timestamp.
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Post {
    /// Author display name, or `"Anonymous"` when the author is not embedded.
    pub fn author_name(&self) -> &str {
        self.author.as_ref().map_or("Anonymous", User::display_name)
    }
}

/// Fields submitted to `POST /posts/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostCreate {
    pub title: String,
    pub content: String,
    pub is_announcement: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub community_id: Option<i64>,
}

fn default_true() -> bool {
    true
}

fn default_token_type() -> String {
    "bearer".to_owned()
}

/// Counter fields may arrive as `null`; treat that as zero.
fn deserialize_count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(0),
        Some(value) => deserialize_i64_from_number(value).map_err(D::Error::custom),
    }
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
