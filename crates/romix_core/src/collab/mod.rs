//! Collaborator contracts consumed by the feed pipeline.
//!
//! # Responsibility
//! - Define the API, raw network and user-factory seams.
//! - Carry the wire DTOs returned by the API collaborator.
//!
//! # Invariants
//! - Collaborators are synchronous and side-effect free from core's view.
//! - Failures surface as `CollabError` and are propagated, never retried.
//!
//! # See also
//! - `collab::fake` for the in-process stand-ins.

use crate::model::user::{CoreUser, UserId};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod fake;

pub use fake::{FakeApiService, FakeNetworkClient, SequentialUserFactory};

pub type CollabResult<T> = Result<T, CollabError>;

/// User payload returned by `ApiService::get_user`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiUserDto {
    pub id: UserId,
    pub name: String,
    pub is_active: bool,
}

/// Post payload returned by `ApiService::get_posts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiPostDto {
    pub id: i64,
    pub user_id: UserId,
    pub title: String,
}

/// Request verb for raw network calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// Raw request handed to a `NetworkClient`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkRequest {
    pub path: String,
    pub method: HttpMethod,
    pub body: Option<String>,
}

impl NetworkRequest {
    /// Builds a body-less `GET` request.
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: HttpMethod::Get,
            body: None,
        }
    }
}

/// Raw response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkResponse {
    pub code: u16,
}

impl NetworkResponse {
    pub fn is_success(self) -> bool {
        (200..300).contains(&self.code)
    }
}

/// Collaborator failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollabError {
    /// Request could not be issued at all.
    InvalidRequest(String),
    /// Endpoint answered with a non-success status.
    Status { path: String, code: u16 },
}

impl Display for CollabError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRequest(message) => write!(f, "invalid request: {message}"),
            Self::Status { path, code } => write!(f, "request to `{path}` failed with {code}"),
        }
    }
}

impl Error for CollabError {}

/// Remote API returning users and their posts.
pub trait ApiService {
    fn get_user(&self, id: UserId) -> CollabResult<ApiUserDto>;
    fn get_posts(&self, id: UserId, page_size: u32) -> CollabResult<Vec<ApiPostDto>>;
}

/// Raw request executor.
pub trait NetworkClient {
    fn execute(&self, request: &NetworkRequest) -> CollabResult<NetworkResponse>;
}

/// Source of synthetic core users for demo flows.
pub trait UserFactory {
    fn create_user(&self, index: usize) -> CoreUser;
}

impl<T: ApiService + ?Sized> ApiService for &T {
    fn get_user(&self, id: UserId) -> CollabResult<ApiUserDto> {
        (**self).get_user(id)
    }

    fn get_posts(&self, id: UserId, page_size: u32) -> CollabResult<Vec<ApiPostDto>> {
        (**self).get_posts(id, page_size)
    }
}

impl<T: NetworkClient + ?Sized> NetworkClient for &T {
    fn execute(&self, request: &NetworkRequest) -> CollabResult<NetworkResponse> {
        (**self).execute(request)
    }
}
