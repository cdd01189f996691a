//! Feed use-case service.
//!
//! # Responsibility
//! - Compose repository fetches with UI mapping into screen states.
//! - Expose a raw network ping and a synthetic-user demo flow.
//!
//! # Invariants
//! - A snapshot without a user maps to the empty state.
//! - The fetched user's activity flag is carried into the feed row.
//! - `ping` returns the status code without interpreting it.

use crate::collab::{NetworkClient, NetworkRequest, UserFactory};
use crate::model::ui::UiState;
use crate::model::user::{CoreUser, UserId};
use crate::repo::feed_repo::{FeedRepository, FeedResult};
use crate::ui::mapper::UiMapper;
use log::{debug, warn};

/// Service wrapper composing repository, mapper and raw network access.
pub struct FeedService<R: FeedRepository, N: NetworkClient, F: UserFactory> {
    repository: R,
    mapper: UiMapper,
    network: N,
    factory: F,
    enable_logging: bool,
}

impl<R: FeedRepository, N: NetworkClient, F: UserFactory> FeedService<R, N, F> {
    pub fn new(repository: R, mapper: UiMapper, network: N, factory: F) -> Self {
        Self {
            repository,
            mapper,
            network,
            factory,
            enable_logging: true,
        }
    }

    /// Toggles diagnostic events for this service.
    pub fn with_logging(mut self, enable_logging: bool) -> Self {
        self.enable_logging = enable_logging;
        self
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn mapper(&self) -> &UiMapper {
        &self.mapper
    }

    /// Loads one user's snapshot and maps it into a screen state.
    ///
    /// # Contract
    /// - No fetched user -> `UiState::Empty`.
    /// - Otherwise exactly one feed row built from the fetched user.
    /// - Collaborator errors are returned unchanged.
    pub fn build_ui_for_user(&self, user_id: UserId) -> FeedResult<UiState> {
        let snapshot = self.repository.load_snapshot(user_id)?;
        let Some(dto) = snapshot.primary_user() else {
            if self.enable_logging {
                debug!(
                    "event=feed_built module=service feature={} user_id={} state=empty",
                    self.mapper.label(),
                    user_id
                );
            }
            return Ok(self.mapper.empty_state());
        };

        let user = CoreUser {
            id: dto.id,
            name: dto.name.clone(),
            email: None,
            is_active: dto.is_active,
        };
        let items = self.repository.to_feed_items(std::slice::from_ref(&user));

        if self.enable_logging {
            debug!(
                "event=feed_built module=service feature={} user_id={} state=loaded items={} hash={}",
                self.mapper.label(),
                user_id,
                items.len(),
                snapshot.raw_hash
            );
        }
        Ok(self.mapper.map_to_ui(&items))
    }

    /// Like `build_ui_for_user`, but folds failures into the error state.
    pub fn build_ui_or_error(&self, user_id: UserId) -> UiState {
        match self.build_ui_for_user(user_id) {
            Ok(state) => state,
            Err(err) => {
                if self.enable_logging {
                    warn!(
                        "event=feed_built module=service feature={} user_id={} state=error",
                        self.mapper.label(),
                        user_id
                    );
                }
                self.mapper.error_state(err.to_string())
            }
        }
    }

    /// Issues a raw `GET` and returns the status code.
    pub fn ping(&self, path: &str) -> FeedResult<u16> {
        let response = self.network.execute(&NetworkRequest::get(path))?;
        Ok(response.code)
    }

    /// Maps `users_count` factory users through the feed pipeline.
    pub fn demo_complex_flow(&self, users_count: usize) -> UiState {
        let users: Vec<CoreUser> = (0..users_count)
            .map(|index| self.factory.create_user(index))
            .collect();
        let items = self.repository.to_feed_items(&users);
        self.mapper.map_to_ui(&items)
    }
}
