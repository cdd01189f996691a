use romix_core::{
    build_sequential_users, ApiFeedRepository, FakeApiService, FeatureConfig, FeedRepository,
    UiMapper, UiState,
};

#[test]
fn mapped_rows_are_numbered_from_one() {
    let repo = ApiFeedRepository::try_new(FakeApiService::default(), FeatureConfig::default())
        .expect("valid config");
    let items = repo.to_feed_items(&build_sequential_users(12));
    let state = UiMapper::new("Feat575").map_to_ui(&items);

    assert!(state.header().as_str().contains("12"));
    assert_eq!(state.items().len(), items.len());
    for (index, row) in state.items().iter().enumerate() {
        assert!(row.title.starts_with(&format!("{}. ", index + 1)));
    }
}

#[test]
fn constant_states_have_no_rows() {
    let mapper = UiMapper::new("Feat575");
    for state in [
        mapper.empty_state(),
        mapper.loading_state(),
        mapper.error_state("boom"),
    ] {
        assert!(state.items().is_empty());
    }

    let loading = mapper.loading_state().into_model();
    assert!(loading.loading);
    assert_eq!(loading.header.as_str(), "Loading...");

    let empty = mapper.empty_state().into_model();
    assert!(!empty.loading);
    assert_eq!(empty.error, None);

    let error = mapper.error_state("boom").into_model();
    assert!(!error.loading);
    assert_eq!(error.error.as_deref(), Some("boom"));
}

#[test]
fn every_state_is_handled_exhaustively() {
    let mapper = UiMapper::new("Feat575");
    let labels: Vec<&str> = [
        mapper.map_to_ui(&[]),
        mapper.loading_state(),
        mapper.empty_state(),
        mapper.error_state("x"),
    ]
    .iter()
    .map(|state| match state {
        UiState::Loaded { .. } => "loaded",
        UiState::Loading => "loading",
        UiState::Empty => "empty",
        UiState::Error { .. } => "error",
    })
    .collect();
    assert_eq!(labels, vec!["loaded", "loading", "empty", "error"]);
}
