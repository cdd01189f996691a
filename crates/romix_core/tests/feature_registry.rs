use romix_core::{
    FakeApiService, FakeNetworkClient, FeatureConfig, FeatureRegistry, RegistryError,
    SequentialUserFactory,
};

#[test]
fn registered_feature_builds_labelled_service() {
    let mut registry = FeatureRegistry::new();
    registry
        .register_range(539, 63, FeatureConfig::default().with_page_size(5))
        .expect("range registration");
    assert_eq!(registry.len(), 63);
    assert_eq!(registry.ids().first().map(String::as_str), Some("feat539"));
    assert_eq!(registry.ids().last().map(String::as_str), Some("feat601"));

    let feature = registry.get("feat560").expect("registered feature");
    assert_eq!(feature.descriptor.package, "com.romix.feature.feat560");

    let service = feature
        .build_service(
            FakeApiService::default(),
            FakeNetworkClient::new(),
            SequentialUserFactory,
        )
        .expect("service");
    let state = service.build_ui_for_user(2).expect("ui");
    assert_eq!(state.header().as_str(), "Feat560 Feed (1)");
    assert_eq!(service.repository().config().page_size, 5);
}

#[test]
fn unknown_feature_is_reported() {
    let registry = FeatureRegistry::new();
    let err = registry.get("feat1").expect_err("empty registry");
    assert_eq!(err, RegistryError::FeatureNotFound("feat1".to_string()));
    assert!(err.to_string().contains("feat1"));
}
