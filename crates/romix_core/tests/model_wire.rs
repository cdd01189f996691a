use romix_core::{CoreUser, FeatureConfig, UiListItem, UiState, UiText};

#[test]
fn ui_state_serializes_with_state_tag() {
    let state = UiState::Loaded {
        header: UiText::from("Feat601 Feed (1)"),
        items: vec![UiListItem {
            id: 0,
            title: "1. User a".to_string(),
            subtitle: Some("Active".to_string()),
            selected: true,
        }],
    };

    let json = serde_json::to_value(&state).unwrap();
    assert_eq!(json["state"], "loaded");
    assert_eq!(json["header"], "Feat601 Feed (1)");
    assert_eq!(json["items"][0]["title"], "1. User a");
    assert_eq!(json["items"][0]["selected"], true);

    let decoded: UiState = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, state);

    let error = serde_json::to_value(UiState::Error {
        message: "offline".to_string(),
    })
    .unwrap();
    assert_eq!(error["state"], "error");
    assert_eq!(error["message"], "offline");
}

#[test]
fn ui_model_uses_flat_wire_fields() {
    let model = UiState::Loading.into_model();
    let json = serde_json::to_value(&model).unwrap();
    assert_eq!(json["header"], "Loading...");
    assert_eq!(json["loading"], true);
    assert!(json["error"].is_null());
    assert_eq!(json["items"].as_array().map(Vec::len), Some(0));
}

#[test]
fn core_user_wire_fields_are_snake_case() {
    let user = CoreUser::new(3, "Ada", true);
    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(json["id"], 3);
    assert_eq!(json["is_active"], true);
    assert!(json["email"].is_null());
}

#[test]
fn feature_config_accepts_partial_json() {
    let config: FeatureConfig = serde_json::from_str(r#"{ "page_size": 5 }"#).unwrap();
    assert_eq!(config.page_size, 5);
    assert!(config.enable_logging);

    let config: FeatureConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, FeatureConfig::default());
}
