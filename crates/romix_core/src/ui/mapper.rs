//! Builds `UiState` values from feed items.

use crate::model::feed::FeedItem;
use crate::model::ui::{UiListItem, UiState, UiText};

/// Pure mapper labelled with the owning feature (for example `Feat601`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiMapper {
    label: String,
}

impl UiMapper {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        self.label.as_str()
    }

    /// Builds the loaded state.
    ///
    /// Header is `{label} Feed ({count})`; row titles are prefixed with their
    /// one-based position and `selected` mirrors the summarized activity flag.
    pub fn map_to_ui(&self, items: &[FeedItem]) -> UiState {
        let rows = items
            .iter()
            .enumerate()
            .map(|(index, item)| UiListItem {
                id: item.id,
                title: format!("{}. {}", index + 1, item.title),
                subtitle: item.subtitle.clone(),
                selected: item.user_summary.is_active,
            })
            .collect();

        UiState::Loaded {
            header: UiText(format!("{} Feed ({})", self.label, items.len())),
            items: rows,
        }
    }

    pub fn empty_state(&self) -> UiState {
        UiState::Empty
    }

    pub fn loading_state(&self) -> UiState {
        UiState::Loading
    }

    pub fn error_state(&self, message: impl Into<String>) -> UiState {
        UiState::Error {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::UiMapper;
    use crate::model::ui::UiState;
    use crate::model::user::CoreUser;
    use crate::repo::feed_repo::build_feed_items;

    #[test]
    fn header_embeds_label_and_count() {
        let mapper = UiMapper::new("Feat601");
        let items = build_feed_items(&[CoreUser::new(1, "a", true)]);
        let state = mapper.map_to_ui(&items);
        assert_eq!(state.header().as_str(), "Feat601 Feed (1)");
    }

    #[test]
    fn rows_are_prefixed_with_one_based_positions() {
        let mapper = UiMapper::new("Feat539");
        let users = vec![
            CoreUser::new(1, "a", true),
            CoreUser::new(2, "b", false),
            CoreUser::new(3, "c", true),
        ];
        let state = mapper.map_to_ui(&build_feed_items(&users));
        let titles: Vec<&str> = state.items().iter().map(|row| row.title.as_str()).collect();
        assert_eq!(titles, vec!["1. User a", "2. User b", "3. User c"]);
        let selected: Vec<bool> = state.items().iter().map(|row| row.selected).collect();
        assert_eq!(selected, vec![true, false, true]);
    }

    #[test]
    fn empty_input_still_produces_loaded_state() {
        let state = UiMapper::new("Feat540").map_to_ui(&[]);
        assert!(matches!(state, UiState::Loaded { .. }));
        assert_eq!(state.header().as_str(), "Feat540 Feed (0)");
        assert!(state.items().is_empty());
    }

    #[test]
    fn constant_states_carry_no_rows() {
        let mapper = UiMapper::new("Feat541");
        assert!(mapper.empty_state().items().is_empty());
        assert!(mapper.loading_state().is_loading());
        assert!(!mapper.empty_state().is_loading());
        let error = mapper.error_state("offline");
        assert_eq!(error.error(), Some("offline"));
        assert!(!error.is_loading());
        assert!(error.items().is_empty());
    }
}
