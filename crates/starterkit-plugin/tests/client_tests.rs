// SPDX-FileCopyrightText: 2026 StarterKit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end tests of the client against the in-memory contract.

use proptest::prelude::*;
use starterkit_config::ErrorsConfig;
use starterkit_core::{
    Address, CapabilityProbe, ConfigGateway, ErrorKind, InterfaceId, MetadataProvider,
    PluginConfig, StarterKitError,
};
use starterkit_plugin::interfaces::starterkit_interface_id;
use starterkit_plugin::RevertClassifier;
use starterkit_test_utils::harness::{
    OTHER_WEBSITE, OWNER, STRANGER, UNKNOWN_WEBSITE, WEBSITE,
};
use starterkit_test_utils::{sample_infos, TestHarness};

fn v(n: u64) -> starterkit_core::VersionIndex {
    TestHarness::version(n)
}

#[tokio::test]
async fn fresh_pair_has_empty_root_path() {
    let h = TestHarness::new();
    let config = h.client.get_config(&WEBSITE, v(0)).await.unwrap();
    assert!(config.root_path.is_empty());
    assert!(config.is_site_root());
}

#[tokio::test]
async fn set_then_get_round_trips() {
    let h = TestHarness::new();
    let config = PluginConfig::new(["apps", "dashboard"]);

    h.client.set_config(&WEBSITE, v(0), &config).await.unwrap();

    let read = h.client.get_config(&WEBSITE, v(0)).await.unwrap();
    assert_eq!(read.root_path, vec!["apps", "dashboard"]);
    assert_eq!(h.contract.stored_config(&WEBSITE, v(0)).await, Some(config));
}

#[tokio::test]
async fn repeated_identical_write_is_idempotent() {
    let h = TestHarness::new();
    let config = PluginConfig::new(["apps"]);

    h.client.set_config(&WEBSITE, v(1), &config).await.unwrap();
    let once = h.client.get_config(&WEBSITE, v(1)).await.unwrap();
    h.client.set_config(&WEBSITE, v(1), &config).await.unwrap();
    let twice = h.client.get_config(&WEBSITE, v(1)).await.unwrap();

    assert_eq!(once, twice);
    assert_eq!(h.contract.write_count().await, 2);
}

#[tokio::test]
async fn writes_are_scoped_to_their_pair() {
    let h = TestHarness::new();
    h.client
        .set_config(&WEBSITE, v(0), &PluginConfig::new(["a"]))
        .await
        .unwrap();

    assert!(h.client.get_config(&WEBSITE, v(1)).await.unwrap().root_path.is_empty());
    assert!(h
        .client
        .get_config(&OTHER_WEBSITE, v(0))
        .await
        .unwrap()
        .root_path
        .is_empty());
}

#[tokio::test]
async fn unauthorized_write_leaves_value_unchanged() {
    let h = TestHarness::new();
    let original = PluginConfig::new(["kept"]);
    h.client.set_config(&WEBSITE, v(0), &original).await.unwrap();

    h.contract.set_caller(STRANGER).await;
    let err = h
        .client
        .set_config(&WEBSITE, v(0), &PluginConfig::new(["stolen"]))
        .await
        .unwrap_err();

    assert!(matches!(err, StarterKitError::Unauthorized { .. }), "got {err:?}");
    assert_eq!(err.kind(), ErrorKind::Unauthorized);
    assert_eq!(h.client.get_config(&WEBSITE, v(0)).await.unwrap(), original);
    assert_eq!(h.contract.write_count().await, 1);
}

#[tokio::test]
async fn locked_website_rejects_owner_writes() {
    let h = TestHarness::new();
    h.contract.set_locked(&WEBSITE, true).await;
    let err = h
        .client
        .set_config(&WEBSITE, v(0), &PluginConfig::new(["x"]))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unauthorized);
}

#[tokio::test]
async fn missing_version_is_not_found() {
    let h = TestHarness::new();
    let err = h.client.get_config(&OTHER_WEBSITE, v(99)).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound, "got {err:?}");
}

#[tokio::test]
async fn missing_website_is_not_found() {
    let h = TestHarness::new();
    let err = h.client.get_config(&UNKNOWN_WEBSITE, v(0)).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let err = h
        .client
        .set_config(&UNKNOWN_WEBSITE, v(0), &PluginConfig::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn new_version_becomes_addressable() {
    let h = TestHarness::new();
    assert!(h.client.get_config(&OTHER_WEBSITE, v(1)).await.is_err());
    assert_eq!(h.contract.add_version(&OTHER_WEBSITE).await, Some(v(1)));
    assert!(h.client.get_config(&OTHER_WEBSITE, v(1)).await.is_ok());
}

#[tokio::test]
async fn slot_reads_and_writes_one_pair() {
    let h = TestHarness::new();
    let slot = h.client.slot(WEBSITE, v(1));
    slot.write(&PluginConfig::new(["docs"])).await.unwrap();

    assert_eq!(slot.read().await.unwrap().root_path, vec!["docs"]);
    assert!(h.client.get_config(&WEBSITE, v(0)).await.unwrap().root_path.is_empty());
}

#[tokio::test]
async fn last_write_wins() {
    let h = TestHarness::new();
    h.client
        .set_config(&WEBSITE, v(0), &PluginConfig::new(["first"]))
        .await
        .unwrap();
    h.client
        .set_config(&WEBSITE, v(0), &PluginConfig::new(["second"]))
        .await
        .unwrap();
    assert_eq!(
        h.client.get_config(&WEBSITE, v(0)).await.unwrap().root_path,
        vec!["second"]
    );
}

#[tokio::test]
async fn empty_root_path_can_be_written_back() {
    let h = TestHarness::new();
    h.client
        .set_config(&WEBSITE, v(0), &PluginConfig::new(["x"]))
        .await
        .unwrap();
    h.client
        .set_config(&WEBSITE, v(0), &PluginConfig::default())
        .await
        .unwrap();
    assert!(h.client.get_config(&WEBSITE, v(0)).await.unwrap().is_site_root());
}

#[tokio::test]
async fn supports_declared_interfaces_only() {
    let h = TestHarness::builder()
        .with_contract(|c| c.interface(starterkit_interface_id()))
        .build();

    assert!(h.client.supports_interface(InterfaceId::IERC165).await.unwrap());
    assert!(h.client.supports_interface(starterkit_interface_id()).await.unwrap());
    assert!(!h
        .client
        .supports_interface(InterfaceId([0x12, 0x34, 0x56, 0x78]))
        .await
        .unwrap());
    assert!(!h
        .client
        .supports_interface(InterfaceId([0xff; 4]))
        .await
        .unwrap());
}

#[tokio::test]
async fn metadata_is_decoded() {
    let h = TestHarness::new();
    let infos = h.client.infos().await.unwrap();
    assert_eq!(infos, sample_infos());
    assert_eq!(infos.admin_panels.len(), 2);

    assert_eq!(h.client.frontend().await.unwrap(), Address([0xf0; 20]));
    assert_eq!(h.client.oc_web_admin_plugin().await.unwrap(), Address([0xad; 20]));
    assert_eq!(h.client.static_frontend_plugin().await.unwrap(), Address([0x5f; 20]));
}

#[tokio::test]
async fn offline_node_is_a_transport_failure() {
    let h = TestHarness::new();
    h.contract.set_offline(true).await;

    let err = h.client.get_config(&WEBSITE, v(0)).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TransportFailure);
    let err = h.client.infos().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TransportFailure);

    h.contract.set_offline(false).await;
    assert!(h.client.get_config(&WEBSITE, v(0)).await.is_ok());
}

#[tokio::test]
async fn every_operation_reaches_the_contract() {
    let h = TestHarness::new();
    h.client.get_config(&WEBSITE, v(0)).await.unwrap();
    h.client.get_config(&WEBSITE, v(0)).await.unwrap();
    assert_eq!(h.contract.call_count().await, 2);
}

#[tokio::test]
async fn custom_classifier_changes_mapping() {
    let h = TestHarness::builder()
        .with_classifier(RevertClassifier::new(&ErrorsConfig {
            not_found_patterns: vec!["out of bounds".to_string()],
            unauthorized_patterns: vec!["nobody matches this".to_string()],
        }))
        .build();
    h.contract.set_caller(STRANGER).await;

    let err = h
        .client
        .set_config(&WEBSITE, v(0), &PluginConfig::new(["x"]))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Rejected);

    h.contract.set_caller(OWNER).await;
    h.client
        .set_config(&WEBSITE, v(0), &PluginConfig::new(["x"]))
        .await
        .unwrap();
}

#[tokio::test]
#[tracing_test::traced_test]
async fn committed_write_is_logged() {
    let h = TestHarness::new();
    h.client
        .set_config(&WEBSITE, v(0), &PluginConfig::new(["logged"]))
        .await
        .unwrap();
    assert!(logs_contain("configuration committed"));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn arbitrary_root_paths_round_trip(segments in prop::collection::vec(".{0,12}", 0..6)) {
        let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let read = rt.block_on(async {
            let h = TestHarness::new();
            let config = PluginConfig::new(segments.clone());
            h.client.set_config(&WEBSITE, v(1), &config).await.unwrap();
            h.client.get_config(&WEBSITE, v(1)).await.unwrap()
        });
        prop_assert_eq!(read.root_path, segments);
    }
}
