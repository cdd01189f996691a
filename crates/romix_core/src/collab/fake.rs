//! In-process collaborator stand-ins.
//!
//! # Responsibility
//! - Answer API and network calls deterministically without I/O.
//! - Let tests force failure statuses per path.
//!
//! # Invariants
//! - Same input always produces the same DTOs.
//! - Paths must start with `/`; anything else is an invalid request.

use crate::collab::{
    ApiPostDto, ApiService, ApiUserDto, CollabError, CollabResult, NetworkClient, NetworkRequest,
    NetworkResponse, UserFactory,
};
use crate::model::user::{CoreUser, UserId};
use log::trace;
use std::cell::Cell;
use std::collections::BTreeMap;

const DEFAULT_STATUS: u16 = 200;
const POST_ID_STRIDE: i64 = 1000;

/// Network client answering every well-formed path with `200`.
#[derive(Debug, Default)]
pub struct FakeNetworkClient {
    routes: BTreeMap<String, u16>,
    executed: Cell<usize>,
}

impl FakeNetworkClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the status returned for one exact path.
    pub fn with_route(mut self, path: impl Into<String>, code: u16) -> Self {
        self.routes.insert(path.into(), code);
        self
    }

    /// Number of requests executed so far, including rejected ones.
    pub fn executed_count(&self) -> usize {
        self.executed.get()
    }
}

impl NetworkClient for FakeNetworkClient {
    fn execute(&self, request: &NetworkRequest) -> CollabResult<NetworkResponse> {
        self.executed.set(self.executed.get() + 1);

        let path = request.path.trim();
        if !path.starts_with('/') {
            return Err(CollabError::InvalidRequest(format!(
                "path must start with `/`, got `{path}`"
            )));
        }

        let code = self.routes.get(path).copied().unwrap_or(DEFAULT_STATUS);
        trace!(
            "event=fake_request module=collab method={} path={} code={}",
            request.method.as_str(),
            path,
            code
        );
        Ok(NetworkResponse { code })
    }
}

/// API service that round-trips through a network client and synthesizes DTOs.
#[derive(Debug)]
pub struct FakeApiService<N: NetworkClient> {
    network: N,
}

impl<N: NetworkClient> FakeApiService<N> {
    pub fn new(network: N) -> Self {
        Self { network }
    }

    pub fn network(&self) -> &N {
        &self.network
    }

    fn fetch(&self, path: String) -> CollabResult<()> {
        let response = self.network.execute(&NetworkRequest::get(path.as_str()))?;
        if !response.is_success() {
            return Err(CollabError::Status {
                path,
                code: response.code,
            });
        }
        Ok(())
    }
}

impl Default for FakeApiService<FakeNetworkClient> {
    fn default() -> Self {
        Self::new(FakeNetworkClient::new())
    }
}

impl<N: NetworkClient> ApiService for FakeApiService<N> {
    fn get_user(&self, id: UserId) -> CollabResult<ApiUserDto> {
        self.fetch(format!("/users/{id}"))?;
        Ok(ApiUserDto {
            id,
            name: format!("user-{id}"),
            is_active: id % 2 == 0,
        })
    }

    fn get_posts(&self, id: UserId, page_size: u32) -> CollabResult<Vec<ApiPostDto>> {
        self.fetch(format!("/users/{id}/posts?limit={page_size}"))?;
        Ok((0..i64::from(page_size))
            .map(|k| ApiPostDto {
                id: id.wrapping_mul(POST_ID_STRIDE).wrapping_add(k),
                user_id: id,
                title: format!("Post {k} by user-{id}"),
            })
            .collect())
    }
}

/// Factory producing `User-{i}` records; every third user is inactive.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialUserFactory;

impl UserFactory for SequentialUserFactory {
    fn create_user(&self, index: usize) -> CoreUser {
        CoreUser::new(index as UserId, format!("User-{index}"), index % 3 != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::{FakeApiService, FakeNetworkClient, SequentialUserFactory};
    use crate::collab::{ApiService, CollabError, NetworkClient, NetworkRequest, UserFactory};

    #[test]
    fn network_answers_ok_by_default_and_counts_requests() {
        let client = FakeNetworkClient::new();
        let response = client
            .execute(&NetworkRequest::get("/health"))
            .expect("well-formed path");
        assert_eq!(response.code, 200);
        assert_eq!(client.executed_count(), 1);
    }

    #[test]
    fn network_rejects_relative_paths() {
        let client = FakeNetworkClient::new();
        let err = client
            .execute(&NetworkRequest::get("health"))
            .expect_err("relative path must fail");
        assert!(matches!(err, CollabError::InvalidRequest(_)));
        assert_eq!(client.executed_count(), 1);
    }

    #[test]
    fn api_maps_non_success_status_to_error() {
        let api = FakeApiService::new(FakeNetworkClient::new().with_route("/users/3", 503));
        let err = api.get_user(3).expect_err("503 must fail");
        assert_eq!(
            err,
            CollabError::Status {
                path: "/users/3".to_string(),
                code: 503,
            }
        );
    }

    #[test]
    fn api_returns_requested_page_of_posts() {
        let api = FakeApiService::default();
        let posts = api.get_posts(2, 3).expect("posts");
        let ids: Vec<i64> = posts.iter().map(|post| post.id).collect();
        assert_eq!(ids, vec![2000, 2001, 2002]);
        assert!(posts.iter().all(|post| post.user_id == 2));
        assert_eq!(api.network().executed_count(), 1);
    }

    #[test]
    fn factory_marks_every_third_user_inactive() {
        let factory = SequentialUserFactory;
        let flags: Vec<bool> = (0..4).map(|i| factory.create_user(i).is_active).collect();
        assert_eq!(flags, vec![false, true, true, false]);
        assert_eq!(factory.create_user(2).name, "User-2");
    }
}
