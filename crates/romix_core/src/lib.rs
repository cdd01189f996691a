//! Core feed pipeline for Romix feature modules.
//! This crate is the single source of truth for feed shaping rules.

pub mod checksum;
pub mod collab;
pub mod config;
pub mod logging;
pub mod model;
pub mod projection;
pub mod registry;
pub mod repo;
pub mod service;
pub mod ui;

pub use checksum::{compute_checksum, snapshot_checksum, Checksum};
pub use collab::{
    ApiPostDto, ApiService, ApiUserDto, CollabError, CollabResult, FakeApiService,
    FakeNetworkClient, HttpMethod, NetworkClient, NetworkRequest, NetworkResponse,
    SequentialUserFactory, UserFactory,
};
pub use config::{ConfigError, FeatureConfig};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::feed::{FeedItem, NetworkSnapshot, UserSummary};
pub use model::ui::{UiListItem, UiModel, UiState, UiText};
pub use model::user::{CoreUser, UserId};
pub use projection::{
    build_sequential_users, project_all, AnalyticsEvent, Projection, StateBlock, UserItem,
    UserProjection,
};
pub use registry::descriptor::{DescriptorError, FeatureDescriptor};
pub use registry::feature_registry::{FeatureRegistry, RegisteredFeature, RegistryError};
pub use repo::feed_repo::{ApiFeedRepository, FeedError, FeedRepository, FeedResult};
pub use service::feed_service::FeedService;
pub use ui::mapper::UiMapper;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
