//! Web HTTP backend over the browser fetch API, via gloo-net.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use super::{
    bearer, finish_course_list, CourseApi, HttpApi, LoginRequest, LoginResponse, NewCourse,
    RegisterRequest,
};
use crate::error::{ApiError, Result};
use store::{Course, Region, UserProfile};

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        tracing::warn!(status, "request failed");
        return Err(ApiError::status(status, body));
    }
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn expect_success(resp: Response) -> Result<()> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        tracing::warn!(status, "request failed");
        return Err(ApiError::status(status, body));
    }
    Ok(())
}

impl CourseApi for HttpApi {
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        let resp = Request::post(&self.url("/api/auth/login"))
            .json(&LoginRequest { username, password })?
            .send()
            .await?;
        decode(resp).await
    }

    async fn register(
        &self,
        username: &str,
        password: &str,
        fullname: &str,
    ) -> Result<UserProfile> {
        let resp = Request::post(&self.url("/api/auth/register"))
            .json(&RegisterRequest {
                username,
                password,
                fullname,
            })?
            .send()
            .await?;
        decode(resp).await
    }

    async fn list_courses(&self, region: Region) -> Result<Vec<Course>> {
        let resp = Request::get(&self.url("/api/courses"))
            .query([("state", region.slug())])
            .send()
            .await?;
        let courses = decode(resp).await?;
        Ok(finish_course_list(courses, region))
    }

    async fn create_course(&self, token: &str, course: &NewCourse) -> Result<Course> {
        let resp = Request::post(&self.url("/api/courses"))
            .header("Authorization", &bearer(token))
            .json(course)?
            .send()
            .await?;
        decode(resp).await
    }

    async fn add_favorite(&self, token: &str, user_id: &str, course_id: i64) -> Result<()> {
        let resp = Request::post(&self.url(&format!("/api/favorites/{user_id}/{course_id}")))
            .header("Authorization", &bearer(token))
            .send()
            .await?;
        expect_success(resp).await
    }

    async fn remove_favorite(&self, token: &str, user_id: &str, course_id: i64) -> Result<()> {
        let resp = Request::delete(&self.url(&format!("/api/favorites/{user_id}/{course_id}")))
            .header("Authorization", &bearer(token))
            .send()
            .await?;
        expect_success(resp).await
    }
}
