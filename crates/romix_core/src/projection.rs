//! Thin projections over core users and screen models.
//!
//! # Responsibility
//! - Provide one generic user projection in place of per-feature copies.
//! - Offer small builders for analytics, state digests and bulk fixtures.
//!
//! # Invariants
//! - Bulk projections preserve input order and length.
//! - Builders are deterministic; repeated calls yield equal values.

use crate::checksum::compute_checksum;
use crate::model::feed::UserSummary;
use crate::model::ui::{UiListItem, UiModel, UiState, UiText};
use crate::model::user::{activity_label, CoreUser, UserId};
use crate::repo::feed_repo::summarize_user;
use log::info;
use serde::{Deserialize, Serialize};

/// Record shape derivable from a core user and its list position.
pub trait UserProjection: Sized {
    fn project(user: &CoreUser, index: usize) -> Self;
}

/// Projects every user into `P`, keeping order.
pub fn project_all<P: UserProjection>(users: &[CoreUser]) -> Vec<P> {
    users
        .iter()
        .enumerate()
        .map(|(index, user)| P::project(user, index))
        .collect()
}

/// User paired with a positional label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserItem {
    pub user: CoreUser,
    pub label: String,
}

impl UserProjection for UserItem {
    fn project(user: &CoreUser, index: usize) -> Self {
        Self {
            user: user.clone(),
            label: format!("User({}) idx={index}", user.id),
        }
    }
}

/// Minimal id/label/flag projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projection {
    pub id: UserId,
    pub label: String,
    pub active: bool,
}

impl UserProjection for Projection {
    fn project(user: &CoreUser, _index: usize) -> Self {
        Self {
            id: user.id,
            label: user.name.clone(),
            active: user.is_active,
        }
    }
}

impl UserProjection for UserSummary {
    fn project(user: &CoreUser, _index: usize) -> Self {
        summarize_user(user)
    }
}

impl UserProjection for UiText {
    fn project(user: &CoreUser, _index: usize) -> Self {
        UiText(format!("User: {}", user.name))
    }
}

/// Screen model paired with a digest of its header and error text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateBlock {
    pub state: UiModel,
    pub checksum: i32,
}

/// Name/value analytics pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    pub name: String,
    pub value: String,
}

impl AnalyticsEvent {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// `name:value`.
    pub fn log_line(&self) -> String {
        format!("{}:{}", self.name, self.value)
    }

    /// Writes the event to the log facade and returns the emitted line.
    pub fn emit(&self) -> String {
        let line = self.log_line();
        info!("event=analytics module=projection line={line}");
        line
    }
}

pub fn build_user_item(user: &CoreUser, index: usize) -> UserItem {
    UserItem::project(user, index)
}

/// Digests `header + error` of `model`.
pub fn build_state_block(model: &UiModel) -> StateBlock {
    let mut digest_source = model.header.as_str().to_string();
    digest_source.push_str(model.error.as_deref().unwrap_or(""));
    StateBlock {
        state: model.clone(),
        checksum: compute_checksum(&digest_source),
    }
}

pub fn transform_users_to_summaries(users: &[CoreUser]) -> Vec<UserSummary> {
    project_all(users)
}

/// Maps summaries to rows keyed by position.
pub fn map_summaries_to_ui_items(summaries: &[UserSummary]) -> Vec<UiListItem> {
    summaries
        .iter()
        .zip(0_i64..)
        .map(|(summary, position)| UiListItem {
            id: position,
            title: summary.name.clone(),
            subtitle: Some(activity_label(summary.is_active).to_string()),
            selected: summary.is_active,
        })
        .collect()
}

/// Fixture model with `count` rows; even positions are active.
pub fn create_large_ui_model(count: usize) -> UiModel {
    let summaries: Vec<UserSummary> = (0..count)
        .map(|i| UserSummary {
            id: i as UserId,
            name: format!("User-{i}"),
            checksum: (i as i32).wrapping_mul(17),
            is_active: i % 2 == 0,
        })
        .collect();

    UiState::Loaded {
        header: UiText(format!("Large model {count}")),
        items: map_summaries_to_ui_items(&summaries),
    }
    .into_model()
}

/// `User-{i}` users where every third one (starting at 0) is inactive.
pub fn build_sequential_users(count: usize) -> Vec<CoreUser> {
    (0..count)
        .map(|i| CoreUser::new(i as UserId, format!("User-{i}"), i % 3 != 0))
        .collect()
}

pub fn map_to_ui_text_list(users: &[CoreUser]) -> Vec<UiText> {
    project_all(users)
}

/// Builds `repeat` fixture models cycling through 1..=20 rows.
pub fn build_many_ui_models(repeat: usize) -> Vec<UiModel> {
    (0..repeat)
        .map(|i| create_large_ui_model((i % 20) + 1))
        .collect()
}

pub fn project_user(user: &CoreUser) -> Projection {
    Projection::project(user, 0)
}

pub fn bulk_project_users(users: &[CoreUser]) -> Vec<Projection> {
    project_all(users)
}

#[cfg(test)]
mod tests {
    use super::{
        build_many_ui_models, build_sequential_users, build_state_block, build_user_item,
        create_large_ui_model, project_all, AnalyticsEvent, Projection,
    };
    use crate::checksum::compute_checksum;
    use crate::model::ui::UiState;
    use crate::model::user::CoreUser;

    #[test]
    fn user_item_label_embeds_id_and_index() {
        let item = build_user_item(&CoreUser::new(12, "x", true), 3);
        assert_eq!(item.label, "User(12) idx=3");
    }

    #[test]
    fn state_block_digests_header_and_error() {
        let model = UiState::Error {
            message: "down".to_string(),
        }
        .into_model();
        let block = build_state_block(&model);
        assert_eq!(block.checksum, compute_checksum("Errordown"));

        let loaded = create_large_ui_model(2);
        assert_eq!(
            build_state_block(&loaded).checksum,
            compute_checksum("Large model 2")
        );
    }

    #[test]
    fn large_model_alternates_activity() {
        let model = create_large_ui_model(3);
        let selected: Vec<bool> = model.items.iter().map(|row| row.selected).collect();
        assert_eq!(selected, vec![true, false, true]);
        assert_eq!(model.items[1].title, "User-1");
        assert_eq!(model.items[1].subtitle.as_deref(), Some("Inactive"));
    }

    #[test]
    fn many_models_cycle_row_counts() {
        let models = build_many_ui_models(22);
        assert_eq!(models.len(), 22);
        assert_eq!(models[0].items.len(), 1);
        assert_eq!(models[19].items.len(), 20);
        assert_eq!(models[20].items.len(), 1);
    }

    #[test]
    fn generic_projection_preserves_order() {
        let users = build_sequential_users(4);
        let projected: Vec<Projection> = project_all(&users);
        let ids: Vec<i64> = projected.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
        assert!(!projected[0].active);
        assert!(projected[1].active);
    }

    #[test]
    fn analytics_line_joins_name_and_value() {
        let event = AnalyticsEvent::new("open", "feed");
        assert_eq!(event.log_line(), "open:feed");
        assert_eq!(event.emit(), "open:feed");
    }
}
