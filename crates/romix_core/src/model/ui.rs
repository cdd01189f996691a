//! Presentation-facing records.
//!
//! # Responsibility
//! - Define the list-row and text records consumed by the UI toolkit.
//! - Model the four mutually exclusive screen states as one enum.
//!
//! # Invariants
//! - Only `UiState::Loaded` carries rows.
//! - `UiModel` is derived from `UiState`; `loading` and `error` are never
//!   both set.

use serde::{Deserialize, Serialize};

pub const EMPTY_HEADER: &str = "No data";
pub const LOADING_HEADER: &str = "Loading...";
pub const ERROR_HEADER: &str = "Error";

/// Plain display string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UiText(pub String);

impl UiText {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for UiText {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// One list row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiListItem {
    pub id: i64,
    pub title: String,
    pub subtitle: Option<String>,
    pub selected: bool,
}

/// Screen state for a feed view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum UiState {
    /// Rows are available.
    Loaded {
        header: UiText,
        items: Vec<UiListItem>,
    },
    /// Fetch in flight.
    Loading,
    /// Fetch succeeded without a user.
    Empty,
    /// Fetch failed; `message` is shown verbatim.
    Error { message: String },
}

impl UiState {
    /// Header text for the active state.
    pub fn header(&self) -> UiText {
        match self {
            Self::Loaded { header, .. } => header.clone(),
            Self::Loading => UiText::from(LOADING_HEADER),
            Self::Empty => UiText::from(EMPTY_HEADER),
            Self::Error { .. } => UiText::from(ERROR_HEADER),
        }
    }

    /// Rows for the active state. Empty outside `Loaded`.
    pub fn items(&self) -> &[UiListItem] {
        match self {
            Self::Loaded { items, .. } => items.as_slice(),
            Self::Loading | Self::Empty | Self::Error { .. } => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error { message } => Some(message.as_str()),
            _ => None,
        }
    }

    /// Flattens the state into the record shape used by the presentation layer.
    pub fn into_model(self) -> UiModel {
        let header = self.header();
        let loading = self.is_loading();
        match self {
            Self::Loaded { items, .. } => UiModel {
                header,
                items,
                loading,
                error: None,
            },
            Self::Error { message } => UiModel {
                header,
                items: Vec::new(),
                loading,
                error: Some(message),
            },
            Self::Loading | Self::Empty => UiModel {
                header,
                items: Vec::new(),
                loading,
                error: None,
            },
        }
    }
}

/// Flat screen model consumed by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiModel {
    pub header: UiText,
    pub items: Vec<UiListItem>,
    pub loading: bool,
    pub error: Option<String>,
}

impl From<UiState> for UiModel {
    fn from(value: UiState) -> Self {
        value.into_model()
    }
}
