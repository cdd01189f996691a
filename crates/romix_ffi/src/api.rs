//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level feed functions to Dart via FRB.
//! - Flatten core screen states into plain envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Failures are reported inside envelopes, never as Dart exceptions.

use log::warn;
use romix_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    FakeApiService, FakeNetworkClient, FeatureConfig, FeatureRegistry, SequentialUserFactory,
    UiListItem, UiMapper, UiModel, UiState,
};
use std::sync::OnceLock;

/// First and last module of the shipped feature range.
const FEATURE_RANGE_START: u32 = 539;
const FEATURE_RANGE_END: u32 = 601;
const DEMO_USERS_MAX: u32 = 1_000;
const FALLBACK_LABEL: &str = "Feed";

static FEATURE_REGISTRY: OnceLock<Result<FeatureRegistry, String>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// One feed row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedRow {
    pub id: i64,
    pub title: String,
    pub subtitle: Option<String>,
    pub selected: bool,
}

/// Screen envelope for one feature feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedUiResponse {
    /// Feature id echoed back after trimming.
    pub feature_id: String,
    pub header: String,
    pub items: Vec<FeedRow>,
    pub loading: bool,
    /// Set only for the error state.
    pub error: Option<String>,
}

/// Result of a raw network ping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedPingResponse {
    pub ok: bool,
    /// Raw status code when the request was issued.
    pub code: Option<u16>,
    pub message: String,
}

/// Lists registered feature ids in index order.
#[flutter_rust_bridge::frb(sync)]
pub fn feed_list_features() -> Vec<String> {
    match feature_registry() {
        Ok(registry) => registry.ids(),
        Err(_) => Vec::new(),
    }
}

/// Builds the feed screen for one user of one feature.
///
/// # FFI contract
/// - Sync call, in-process collaborators only.
/// - Unknown feature or collaborator failure -> error-state envelope.
#[flutter_rust_bridge::frb(sync)]
pub fn feed_build_ui(feature_id: String, user_id: i64) -> FeedUiResponse {
    let feature_id = feature_id.trim().to_string();
    let state = resolve_state(&feature_id, |service| service.build_ui_or_error(user_id));
    to_response(feature_id, state.into_model())
}

/// Runs the synthetic demo flow for one feature.
///
/// `users_count` is capped at 1000.
#[flutter_rust_bridge::frb(sync)]
pub fn feed_demo(feature_id: String, users_count: u32) -> FeedUiResponse {
    let feature_id = feature_id.trim().to_string();
    let count = users_count.min(DEMO_USERS_MAX) as usize;
    let state = resolve_state(&feature_id, |service| service.demo_complex_flow(count));
    to_response(feature_id, state.into_model())
}

/// Loading placeholder envelope for a feature.
#[flutter_rust_bridge::frb(sync)]
pub fn feed_loading(feature_id: String) -> FeedUiResponse {
    let feature_id = feature_id.trim().to_string();
    to_response(feature_id, UiState::Loading.into_model())
}

/// Issues a raw `GET` against the in-process network client.
#[flutter_rust_bridge::frb(sync)]
pub fn feed_ping(path: String) -> FeedPingResponse {
    let client = FakeNetworkClient::new();
    let service = romix_core::FeedService::new(
        NoSnapshotRepository,
        UiMapper::new(FALLBACK_LABEL),
        &client,
        SequentialUserFactory,
    );
    match service.ping(path.trim()) {
        Ok(code) => FeedPingResponse {
            ok: true,
            code: Some(code),
            message: format!("status {code}"),
        },
        Err(err) => FeedPingResponse {
            ok: false,
            code: None,
            message: format!("feed_ping failed: {err}"),
        },
    }
}

type FakeFeedService = romix_core::FeedService<
    romix_core::ApiFeedRepository<FakeApiService<FakeNetworkClient>>,
    FakeNetworkClient,
    SequentialUserFactory,
>;

fn resolve_state(feature_id: &str, run: impl FnOnce(&FakeFeedService) -> UiState) -> UiState {
    let registry = match feature_registry() {
        Ok(registry) => registry,
        Err(message) => return UiMapper::new(FALLBACK_LABEL).error_state(message.clone()),
    };
    let feature = match registry.get(feature_id) {
        Ok(feature) => feature,
        Err(err) => return UiMapper::new(FALLBACK_LABEL).error_state(err.to_string()),
    };
    match feature.build_service(
        FakeApiService::default(),
        FakeNetworkClient::new(),
        SequentialUserFactory,
    ) {
        Ok(service) => run(&service),
        Err(err) => feature.mapper().error_state(err.to_string()),
    }
}

fn feature_registry() -> &'static Result<FeatureRegistry, String> {
    FEATURE_REGISTRY.get_or_init(|| {
        let config = FeatureConfig::from_env().map_err(|err| {
            warn!("event=registry_init module=ffi status=error reason=config");
            format!("feature config rejected: {err}")
        })?;
        let mut registry = FeatureRegistry::new();
        registry
            .register_range(
                FEATURE_RANGE_START,
                FEATURE_RANGE_END - FEATURE_RANGE_START + 1,
                config,
            )
            .map_err(|err| format!("feature registry init failed: {err}"))?;
        Ok(registry)
    })
}

fn to_response(feature_id: String, model: UiModel) -> FeedUiResponse {
    FeedUiResponse {
        feature_id,
        header: model.header.0,
        items: model.items.into_iter().map(to_feed_row).collect(),
        loading: model.loading,
        error: model.error,
    }
}

fn to_feed_row(item: UiListItem) -> FeedRow {
    FeedRow {
        id: item.id,
        title: item.title,
        subtitle: item.subtitle,
        selected: item.selected,
    }
}

/// Repository stand-in for ping-only services; never consulted by `ping`.
struct NoSnapshotRepository;

impl romix_core::FeedRepository for NoSnapshotRepository {
    fn load_snapshot(
        &self,
        _user_id: romix_core::UserId,
    ) -> romix_core::FeedResult<romix_core::NetworkSnapshot> {
        Ok(romix_core::NetworkSnapshot {
            users: Vec::new(),
            posts: Vec::new(),
            raw_hash: romix_core::Checksum::new().finish(),
        })
    }
}
