// SPDX-FileCopyrightText: 2026 StarterKit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the StarterKit plugin client.
//!
//! This crate provides the domain types, the error taxonomy and the
//! component traits (metadata provider, configuration gateway, capability
//! probe) shared by the codec, the transports and the client.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::{ErrorKind, StarterKitError, TransportError};
pub use types::{
    Address, AdminPanel, AdminPanelType, InterfaceId, PluginConfig, PluginInfo, PluginRef,
    VersionIndex, WebsiteHandle,
};

pub use traits::{
    CapabilityProbe, ConfigGateway, ConfigSlot, ContractTransport, MetadataProvider,
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn error_kinds_match_variants() {
        let cases = [
            (
                StarterKitError::NotFound { reason: "x".into() },
                ErrorKind::NotFound,
            ),
            (
                StarterKitError::Unauthorized { reason: "x".into() },
                ErrorKind::Unauthorized,
            ),
            (
                StarterKitError::transport("down", std::io::Error::other("refused")),
                ErrorKind::TransportFailure,
            ),
            (
                StarterKitError::MalformedInput("x".into()),
                ErrorKind::MalformedInput,
            ),
            (
                StarterKitError::Rejected { reason: "x".into() },
                ErrorKind::Rejected,
            ),
            (StarterKitError::Abi("x".into()), ErrorKind::Abi),
            (StarterKitError::Config("x".into()), ErrorKind::Config),
            (StarterKitError::Internal("x".into()), ErrorKind::Internal),
        ];
        for (err, kind) in cases {
            assert_eq!(err.kind(), kind, "{err}");
        }
    }

    #[test]
    fn error_messages_name_the_failure() {
        let err = StarterKitError::NotFound {
            reason: "version out of bounds".into(),
        };
        assert_eq!(
            err.to_string(),
            "configuration target not found: version out of bounds"
        );

        let err = StarterKitError::Unauthorized {
            reason: "Unauthorized".into(),
        };
        assert!(err.to_string().starts_with("write rejected: insufficient permission"));
    }

    #[test]
    fn error_kind_display_is_snake_case() {
        assert_eq!(ErrorKind::TransportFailure.to_string(), "transport_failure");
        assert_eq!(
            ErrorKind::from_str("malformed_input").unwrap(),
            ErrorKind::MalformedInput
        );
    }

    #[test]
    fn reverted_display_without_reason() {
        let err = TransportError::Reverted {
            data: vec![],
            message: None,
        };
        assert_eq!(err.to_string(), "execution reverted: no reason given");
    }

    #[test]
    fn address_parses_and_displays_lowercase() {
        let addr = Address::from_str("0xAbCdEf0123456789abcdef0123456789ABCDEF01").unwrap();
        assert_eq!(addr.to_string(), "0xabcdef0123456789abcdef0123456789abcdef01");
        assert!(!addr.is_zero());
        assert!(Address::ZERO.is_zero());
    }

    #[test]
    fn address_rejects_bad_input() {
        assert!(matches!(
            Address::from_str("0x1234"),
            Err(StarterKitError::MalformedInput(_))
        ));
        assert!(matches!(
            Address::from_str("0xzz00000000000000000000000000000000000000"),
            Err(StarterKitError::MalformedInput(_))
        ));
    }

    #[test]
    fn address_serde_uses_hex_string() {
        let addr = Address([0x11; 20]);
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, "\"0x1111111111111111111111111111111111111111\"");
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, addr);
    }

    #[test]
    fn version_index_parses_non_negative_integers() {
        assert_eq!(VersionIndex::from_str("0").unwrap(), VersionIndex(0));
        assert_eq!(VersionIndex::from_str(" 42 ").unwrap(), VersionIndex(42));
    }

    #[test]
    fn version_index_past_u64_is_not_found() {
        for big in [
            "18446744073709551616",
            "115792089237316195423570985008687907853269984665640564039457584007913129639935",
        ] {
            let err = VersionIndex::from_str(big).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::NotFound, "input {big}");
        }
        // One past the largest uint256 is not a valid index at all.
        let err = VersionIndex::from_str(
            "115792089237316195423570985008687907853269984665640564039457584007913129639936",
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
    }

    #[test]
    fn version_index_rejects_negative_and_fractional() {
        for bad in ["-1", "1.5", "abc", "", "1e3"] {
            let err = VersionIndex::from_str(bad).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MalformedInput, "input {bad:?}");
        }
        let err = VersionIndex::from_str("-1").unwrap_err();
        assert!(err.to_string().contains("negative"));
        let err = VersionIndex::from_str("1.5").unwrap_err();
        assert!(err.to_string().contains("integer"));
    }

    #[test]
    fn interface_id_from_selectors_is_xor() {
        let id = InterfaceId::from_selectors([[0xff, 0x00, 0x0f, 0x01], [0x0f, 0x00, 0xff, 0x01]]);
        assert_eq!(id, InterfaceId([0xf0, 0x00, 0xf0, 0x00]));

        // A single-function interface equals that function's selector.
        let erc165 = InterfaceId::from_selectors([[0x01, 0xff, 0xc9, 0xa7]]);
        assert_eq!(erc165, InterfaceId::IERC165);
    }

    #[test]
    fn interface_id_text_form() {
        let id = InterfaceId::from_str("0x01FFC9A7").unwrap();
        assert_eq!(id, InterfaceId::IERC165);
        assert_eq!(id.to_string(), "0x01ffc9a7");
        assert!(InterfaceId::from_str("0x01ffc9").is_err());
    }

    #[test]
    fn plugin_config_serializes_root_path_camel_case() {
        let config = PluginConfig::new(["apps", "dashboard"]);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"rootPath":["apps","dashboard"]}"#);
        assert!(!config.is_site_root());
        assert!(PluginConfig::default().is_site_root());
    }

    #[test]
    fn admin_panel_type_discriminants() {
        assert_eq!(AdminPanelType::from(0), AdminPanelType::Primary);
        assert_eq!(AdminPanelType::from(1), AdminPanelType::Secondary);
        assert_eq!(AdminPanelType::from(7), AdminPanelType::Unknown(7));
        assert_eq!(u8::from(AdminPanelType::Unknown(7)), 7);
        assert_eq!(AdminPanelType::Secondary.to_string(), "secondary");
    }

    #[test]
    fn all_component_traits_are_exported() {
        fn _assert_transport<T: ContractTransport>() {}
        fn _assert_gateway<T: ConfigGateway>() {}
        fn _assert_metadata<T: MetadataProvider>() {}
        fn _assert_probe<T: CapabilityProbe>() {}
        _assert_transport::<std::sync::Arc<dyn ContractTransport>>();
    }

    mod slot {
        use super::*;
        use async_trait::async_trait;
        use std::collections::HashMap;
        use std::sync::Mutex;

        #[derive(Default)]
        struct MemoryGateway {
            records: Mutex<HashMap<(WebsiteHandle, VersionIndex), PluginConfig>>,
        }

        #[async_trait]
        impl ConfigGateway for MemoryGateway {
            async fn get_config(
                &self,
                website: &WebsiteHandle,
                version: VersionIndex,
            ) -> Result<PluginConfig, StarterKitError> {
                Ok(self
                    .records
                    .lock()
                    .unwrap()
                    .get(&(*website, version))
                    .cloned()
                    .unwrap_or_default())
            }

            async fn set_config(
                &self,
                website: &WebsiteHandle,
                version: VersionIndex,
                config: &PluginConfig,
            ) -> Result<(), StarterKitError> {
                self.records
                    .lock()
                    .unwrap()
                    .insert((*website, version), config.clone());
                Ok(())
            }
        }

        #[tokio::test]
        async fn slot_reads_and_writes_its_own_pair() {
            let gateway = MemoryGateway::default();
            let website = WebsiteHandle(Address([1; 20]));
            let slot = gateway.slot(website, VersionIndex(0));
            let other = gateway.slot(website, VersionIndex(1));

            slot.write(&PluginConfig::new(["docs"])).await.unwrap();

            assert_eq!(slot.read().await.unwrap().root_path, vec!["docs"]);
            assert!(other.read().await.unwrap().is_site_root());
            assert_eq!(slot.version(), VersionIndex(0));
            assert_eq!(slot.website(), &website);
        }
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn version_index_text_round_trips(n in any::<u64>()) {
                let parsed = VersionIndex::from_str(&n.to_string()).unwrap();
                prop_assert_eq!(parsed, VersionIndex(n));
            }

            #[test]
            fn address_text_round_trips(bytes in any::<[u8; 20]>()) {
                let addr = Address(bytes);
                prop_assert_eq!(Address::from_str(&addr.to_string()).unwrap(), addr);
            }
        }
    }
}
