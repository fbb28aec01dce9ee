//! # API crate — client for the remote iGolf backend
//!
//! Everything the frontend needs to talk to the course service: the
//! [`CourseApi`] trait with its dual-target [`HttpApi`] implementation
//! (reqwest on native targets, the browser fetch API via gloo-net on wasm32),
//! and the flows that keep the session state and its persisted copy in step
//! with the server.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | `CourseApi` trait, wire types, `HttpApi` |
//! | [`auth`] | login/logout wired to the persistence bridge |
//! | [`favorites`] | server-first favorite add/remove with exactly-once local mutation |
//! | [`error`] | [`ApiError`] and the crate `Result` alias |

#![allow(async_fn_in_trait)]

pub mod auth;
pub mod client;
pub mod error;
pub mod favorites;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{CourseApi, HttpApi, LoginResponse, NewCourse};
pub use error::{ApiError, Result};

pub use store::{Course, Region, UserProfile};
