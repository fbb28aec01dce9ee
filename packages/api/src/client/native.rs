//! Native HTTP backend using reqwest.

use reqwest::header::AUTHORIZATION;
use reqwest::Response;
use serde::de::DeserializeOwned;

use super::{
    bearer, finish_course_list, CourseApi, HttpApi, LoginRequest, LoginResponse, NewCourse,
    RegisterRequest,
};
use crate::error::{ApiError, Result};
use store::{Course, Region, UserProfile};

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), "request failed");
        return Err(ApiError::status(status.as_u16(), body));
    }
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn expect_success(resp: Response) -> Result<()> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), "request failed");
        return Err(ApiError::status(status.as_u16(), body));
    }
    Ok(())
}

impl CourseApi for HttpApi {
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        let resp = self
            .client
            .post(self.url("/api/auth/login"))
            .json(&LoginRequest { username, password })
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
        let resp = self
            .client
            .post(self.url("/api/auth/register"))
            .json(&RegisterRequest {
                username,
                password,
                fullname,
            })
            .send()
            .await?;
        decode(resp).await
    }

    async fn list_courses(&self, region: Region) -> Result<Vec<Course>> {
        let resp = self
            .client
            .get(self.url("/api/courses"))
            .query(&[("state", region.slug())])
            .send()
            .await?;
        let courses = decode(resp).await?;
        Ok(finish_course_list(courses, region))
    }

    async fn create_course(&self, token: &str, course: &NewCourse) -> Result<Course> {
        let resp = self
            .client
            .post(self.url("/api/courses"))
            .header(AUTHORIZATION, bearer(token))
            .json(course)
            .send()
            .await?;
        decode(resp).await
    }

    async fn add_favorite(&self, token: &str, user_id: &str, course_id: i64) -> Result<()> {
        let resp = self
            .client
            .post(self.url(&format!("/api/favorites/{user_id}/{course_id}")))
            .header(AUTHORIZATION, bearer(token))
            .send()
            .await?;
        expect_success(resp).await
    }

    async fn remove_favorite(&self, token: &str, user_id: &str, course_id: i64) -> Result<()> {
        let resp = self
            .client
            .delete(self.url(&format!("/api/favorites/{user_id}/{course_id}")))
            .header(AUTHORIZATION, bearer(token))
            .send()
            .await?;
        expect_success(resp).await
    }
}
