//! Feed repository contracts and API-backed implementation.
//!
//! # Responsibility
//! - Fetch one user plus a page of posts and digest them into a snapshot.
//! - Project core users into summaries and positional feed items.
//!
//! # Invariants
//! - Inputs are borrowed and never mutated.
//! - `to_feed_items` output has the input's length and order; ids are the
//!   zero-based positions.
//! - Collaborator failures propagate unchanged.

use crate::checksum::{compute_checksum, snapshot_checksum};
use crate::collab::{ApiService, CollabError};
use crate::config::{ConfigError, FeatureConfig};
use crate::model::feed::{FeedItem, NetworkSnapshot, UserSummary};
use crate::model::user::{activity_label, CoreUser, UserId};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type FeedResult<T> = Result<T, FeedError>;

/// Error for feed pipeline operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedError {
    Collab(CollabError),
    Config(ConfigError),
}

impl Display for FeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Collab(err) => write!(f, "{err}"),
            Self::Config(err) => write!(f, "invalid feature config: {err}"),
        }
    }
}

impl Error for FeedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Collab(err) => Some(err),
            Self::Config(err) => Some(err),
        }
    }
}

impl From<CollabError> for FeedError {
    fn from(value: CollabError) -> Self {
        Self::Collab(value)
    }
}

impl From<ConfigError> for FeedError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

/// Repository interface for the feed pipeline.
pub trait FeedRepository {
    /// Fetches one user and its post page.
    fn load_snapshot(&self, user_id: UserId) -> FeedResult<NetworkSnapshot>;

    fn to_user_summary(&self, user: &CoreUser) -> UserSummary {
        summarize_user(user)
    }

    fn to_feed_items(&self, users: &[CoreUser]) -> Vec<FeedItem> {
        build_feed_items(users)
    }
}

impl<T: FeedRepository + ?Sized> FeedRepository for &T {
    fn load_snapshot(&self, user_id: UserId) -> FeedResult<NetworkSnapshot> {
        (**self).load_snapshot(user_id)
    }
}

/// Repository backed by an `ApiService` collaborator.
#[derive(Debug)]
pub struct ApiFeedRepository<A: ApiService> {
    api: A,
    config: FeatureConfig,
}

impl<A: ApiService> ApiFeedRepository<A> {
    /// Creates a repository after validating `config`.
    pub fn try_new(api: A, config: FeatureConfig) -> FeedResult<Self> {
        config.validate()?;
        Ok(Self { api, config })
    }

    pub fn config(&self) -> &FeatureConfig {
        &self.config
    }

    pub fn api(&self) -> &A {
        &self.api
    }
}

impl<A: ApiService> FeedRepository for ApiFeedRepository<A> {
    fn load_snapshot(&self, user_id: UserId) -> FeedResult<NetworkSnapshot> {
        let user = self.api.get_user(user_id)?;
        let posts = self.api.get_posts(user_id, self.config.page_size)?;
        let raw_hash = snapshot_checksum(&user, &posts);

        if self.config.enable_logging {
            debug!(
                "event=snapshot_loaded module=repo user_id={} posts={} hash={}",
                user_id,
                posts.len(),
                raw_hash
            );
        }

        Ok(NetworkSnapshot {
            users: vec![user],
            posts,
            raw_hash,
        })
    }
}

/// Projects one core user into a summary.
pub fn summarize_user(user: &CoreUser) -> UserSummary {
    UserSummary {
        id: user.id,
        name: user.name.clone(),
        checksum: compute_checksum(&user.name),
        is_active: user.is_active,
    }
}

/// Maps users to feed rows with positional ids.
pub fn build_feed_items(users: &[CoreUser]) -> Vec<FeedItem> {
    users
        .iter()
        .zip(0_i64..)
        .map(|(user, position)| {
            let summary = summarize_user(user);
            FeedItem {
                id: position,
                title: format!("User {}", summary.name),
                subtitle: Some(activity_label(summary.is_active).to_string()),
                user_summary: summary,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{build_feed_items, summarize_user, ApiFeedRepository, FeedError, FeedRepository};
    use crate::collab::{FakeApiService, FakeNetworkClient};
    use crate::config::{ConfigError, FeatureConfig};
    use crate::model::user::CoreUser;

    #[test]
    fn summary_copies_identity_and_activity() {
        let user = CoreUser::new(9, "Ada", false);
        let summary = summarize_user(&user);
        assert_eq!(summary.id, 9);
        assert_eq!(summary.name, "Ada");
        assert!(!summary.is_active);
        assert_eq!(summary.checksum, crate::checksum::compute_checksum("Ada"));
    }

    #[test]
    fn feed_ids_are_positions_not_user_ids() {
        let users = vec![CoreUser::new(40, "b", true), CoreUser::new(10, "a", false)];
        let items = build_feed_items(&users);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, 0);
        assert_eq!(items[1].id, 1);
        assert_eq!(items[0].title, "User b");
        assert_eq!(items[1].subtitle.as_deref(), Some("Inactive"));
        assert_eq!(items[1].user_summary.id, 10);
    }

    #[test]
    fn snapshot_wraps_single_user_and_full_page() {
        let repo = ApiFeedRepository::try_new(
            FakeApiService::default(),
            FeatureConfig::default().with_page_size(4),
        )
        .expect("valid config");
        let snapshot = repo.load_snapshot(5).expect("snapshot");
        assert_eq!(snapshot.users.len(), 1);
        assert_eq!(snapshot.posts.len(), 4);
        assert_eq!(
            snapshot.raw_hash,
            repo.load_snapshot(5).expect("snapshot").raw_hash
        );
    }

    #[test]
    fn rejects_invalid_config() {
        let err = ApiFeedRepository::try_new(
            FakeApiService::default(),
            FeatureConfig::default().with_page_size(0),
        )
        .expect_err("zero page size must fail");
        assert_eq!(err, FeedError::Config(ConfigError::InvalidPageSize(0)));
    }

    #[test]
    fn posts_failure_propagates() {
        let network = FakeNetworkClient::new().with_route("/users/1/posts?limit=20", 500);
        let repo = ApiFeedRepository::try_new(FakeApiService::new(network), FeatureConfig::default())
            .expect("valid config");
        let err = repo.load_snapshot(1).expect_err("500 must fail");
        assert!(matches!(err, FeedError::Collab(_)));
        assert!(err.to_string().contains("500"));
    }
}
