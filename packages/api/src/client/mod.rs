//! HTTP client for the iGolf backend.
//!
//! [`CourseApi`] is the seam every flow goes through; [`HttpApi`] implements
//! it over reqwest on native targets and over the browser fetch API
//! (gloo-net) on wasm32. Tests substitute their own implementation.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use store::{Course, Region, UserProfile};

#[cfg(not(target_arch = "wasm32"))]
mod native;
#[cfg(target_arch = "wasm32")]
mod web;

/// Backend the deployed frontend talks to.
pub const DEFAULT_BASE_URL: &str = "https://igolf-backend.runasp.net";

/// Credentials sent to the login endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Payload for the registration endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub fullname: &'a str,
}

/// What a successful login returns.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub user: UserProfile,
    pub token: String,
}

/// A course submission: every course field except the server-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCourse {
    pub name: String,
    pub location: String,
    pub state: Region,
    pub holes: u32,
    pub par: u32,
    pub designer: String,
    pub rating: f32,
}

/// Remote operations of the course service.
pub trait CourseApi {
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse>;

    async fn register(
        &self,
        username: &str,
        password: &str,
        fullname: &str,
    ) -> Result<UserProfile>;

    /// Courses in the given region, sorted by name ascending.
    async fn list_courses(&self, region: Region) -> Result<Vec<Course>>;

    /// Submit a new course under an authenticated session.
    async fn create_course(&self, token: &str, course: &NewCourse) -> Result<Course>;

    async fn add_favorite(&self, token: &str, user_id: &str, course_id: i64) -> Result<()>;

    async fn remove_favorite(&self, token: &str, user_id: &str, course_id: i64) -> Result<()>;
}

/// HTTP implementation of [`CourseApi`].
#[derive(Debug, Clone)]
pub struct HttpApi {
    base_url: String,
    #[cfg(not(target_arch = "wasm32"))]
    client: reqwest::Client,
}

impl HttpApi {
    /// Client against [`DEFAULT_BASE_URL`].
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Client against a custom backend, e.g. a local development server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            #[cfg(not(target_arch = "wasm32"))]
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Default for HttpApi {
    fn default() -> Self {
        Self::new()
    }
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// The backend's `state` strings are display-cased, so the listing is
/// filtered here as well as server-side, then ordered by name ascending.
fn finish_course_list(mut courses: Vec<Course>, region: Region) -> Vec<Course> {
    courses.retain(|c| region.matches(&c.state));
    courses.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    courses
}
