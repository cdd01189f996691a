//! In-process registry of feature modules.

use crate::collab::{ApiService, NetworkClient, UserFactory};
use crate::config::{ConfigError, FeatureConfig};
use crate::registry::descriptor::{DescriptorError, FeatureDescriptor};
use crate::repo::feed_repo::{ApiFeedRepository, FeedResult};
use crate::service::feed_service::FeedService;
use crate::ui::mapper::UiMapper;
use log::debug;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Registered feature snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredFeature {
    pub descriptor: FeatureDescriptor,
    pub config: FeatureConfig,
}

impl RegisteredFeature {
    /// Mapper labelled with this feature.
    pub fn mapper(&self) -> UiMapper {
        UiMapper::new(self.descriptor.label.clone())
    }

    /// Wires a feed service for this feature over the given collaborators.
    pub fn build_service<A, N, F>(
        &self,
        api: A,
        network: N,
        factory: F,
    ) -> FeedResult<FeedService<ApiFeedRepository<A>, N, F>>
    where
        A: ApiService,
        N: NetworkClient,
        F: UserFactory,
    {
        let repository = ApiFeedRepository::try_new(api, self.config)?;
        Ok(FeedService::new(repository, self.mapper(), network, factory)
            .with_logging(self.config.enable_logging))
    }
}

/// Feature registry keyed by numeric index.
#[derive(Debug, Default)]
pub struct FeatureRegistry {
    entries: BTreeMap<u32, RegisteredFeature>,
}

impl FeatureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one feature after config validation.
    pub fn register(
        &mut self,
        descriptor: FeatureDescriptor,
        config: FeatureConfig,
    ) -> Result<(), RegistryError> {
        config
            .validate()
            .map_err(|err| RegistryError::InvalidConfig {
                feature_id: descriptor.id.clone(),
                source: err,
            })?;
        if self.entries.contains_key(&descriptor.index) {
            return Err(RegistryError::DuplicateFeatureId(descriptor.id));
        }

        debug!(
            "event=feature_registered module=registry feature={} page_size={}",
            descriptor.id, config.page_size
        );
        self.entries.insert(
            descriptor.index,
            RegisteredFeature { descriptor, config },
        );
        Ok(())
    }

    /// Registers `feat{start}` through `feat{start + count - 1}` with one config.
    ///
    /// Stops at the first failure; features registered before it remain.
    pub fn register_range(
        &mut self,
        start: u32,
        count: u32,
        config: FeatureConfig,
    ) -> Result<(), RegistryError> {
        let end = start
            .checked_add(count)
            .ok_or(RegistryError::RangeOverflow { start, count })?;
        for index in start..end {
            self.register(FeatureDescriptor::from_index(index), config)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up a feature by module id (`feat601`).
    pub fn get(&self, feature_id: &str) -> Result<&RegisteredFeature, RegistryError> {
        let descriptor = FeatureDescriptor::parse(feature_id).map_err(RegistryError::InvalidId)?;
        self.entries
            .get(&descriptor.index)
            .ok_or(RegistryError::FeatureNotFound(descriptor.id))
    }

    /// Module ids sorted by numeric index.
    pub fn ids(&self) -> Vec<String> {
        self.entries
            .values()
            .map(|entry| entry.descriptor.id.clone())
            .collect()
    }
}

/// Registry registration/lookup errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    InvalidId(DescriptorError),
    DuplicateFeatureId(String),
    FeatureNotFound(String),
    InvalidConfig {
        feature_id: String,
        source: ConfigError,
    },
    RangeOverflow {
        start: u32,
        count: u32,
    },
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidId(err) => write!(f, "{err}"),
            Self::DuplicateFeatureId(value) => write!(f, "feature already registered: {value}"),
            Self::FeatureNotFound(value) => write!(f, "feature not found: {value}"),
            Self::InvalidConfig { feature_id, source } => {
                write!(f, "invalid config for {feature_id}: {source}")
            }
            Self::RangeOverflow { start, count } => {
                write!(f, "feature range overflows: start={start} count={count}")
            }
        }
    }
}

impl Error for RegistryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidId(err) => Some(err),
            Self::InvalidConfig { source, .. } => Some(source),
            _ => None,
        }
    }
}
