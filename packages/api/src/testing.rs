//! Test doubles and fixtures shared by the flow tests.

use std::cell::RefCell;

use crate::client::{CourseApi, LoginResponse, NewCourse};
use crate::error::{ApiError, Result};
use store::{Course, Region, UserProfile};

pub(crate) fn sample_user() -> UserProfile {
    UserProfile {
        id: "u1".to_string(),
        username: "pete".to_string(),
        fullname: "Peter Parker".to_string(),
        favorite_courses: Vec::new(),
    }
}

pub(crate) fn sample_course(id: i64, name: &str, state: &str) -> Course {
    Course {
        id,
        name: name.to_string(),
        location: "Somewhere".to_string(),
        state: state.to_string(),
        holes: 18,
        par: 72,
        designer: "A. Designer".to_string(),
        rating: 4.2,
    }
}

/// In-memory [`CourseApi`] whose behavior is scripted per test.
pub(crate) struct FakeApi {
    /// When set, every call fails with this message and a 500.
    fail: Option<&'static str>,
    user: UserProfile,
    token: String,
    /// Calls in the order they were made.
    pub calls: RefCell<Vec<String>>,
}

impl FakeApi {
    /// A backend that accepts any credentials as this user.
    pub fn authenticating(user: UserProfile) -> Self {
        Self {
            fail: None,
            user,
            token: "tok-1".to_string(),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// A backend where every call fails with the given message.
    pub fn failing(message: &'static str) -> Self {
        Self {
            fail: Some(message),
            user: sample_user(),
            token: String::new(),
            calls: RefCell::new(Vec::new()),
        }
    }

    fn gate(&self, call: String) -> Result<()> {
        self.calls.borrow_mut().push(call);
        match self.fail {
            Some(message) => Err(ApiError::Status {
                status: 500,
                message: message.to_string(),
            }),
            None => Ok(()),
        }
    }
}

impl CourseApi for FakeApi {
    async fn login(&self, username: &str, _password: &str) -> Result<LoginResponse> {
        self.gate(format!("login {username}"))?;
        Ok(LoginResponse {
            user: self.user.clone(),
            token: self.token.clone(),
        })
    }

    async fn register(
        &self,
        username: &str,
        _password: &str,
        fullname: &str,
    ) -> Result<UserProfile> {
        self.gate(format!("register {username}"))?;
        Ok(UserProfile {
            id: "u-new".to_string(),
            username: username.to_string(),
            fullname: fullname.to_string(),
            favorite_courses: Vec::new(),
        })
    }

    async fn list_courses(&self, region: Region) -> Result<Vec<Course>> {
        self.gate(format!("list {}", region.slug()))?;
        Ok(Vec::new())
    }

    async fn create_course(&self, _token: &str, course: &NewCourse) -> Result<Course> {
        self.gate(format!("create {}", course.name))?;
        Ok(Course {
            id: 99,
            name: course.name.clone(),
            location: course.location.clone(),
            state: course.state.label().to_string(),
            holes: course.holes,
            par: course.par,
            designer: course.designer.clone(),
            rating: course.rating,
        })
    }

    async fn add_favorite(&self, _token: &str, user_id: &str, course_id: i64) -> Result<()> {
        self.gate(format!("fav {user_id}/{course_id}"))
    }

    async fn remove_favorite(&self, _token: &str, user_id: &str, course_id: i64) -> Result<()> {
        self.gate(format!("unfav {user_id}/{course_id}"))
    }
}
