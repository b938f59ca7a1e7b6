// SPDX-FileCopyrightText: 2026 StarterKit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Byte-exact checks of the StarterKit contract wire format.

use pretty_assertions::assert_eq;
use starterkit_abi::contract::{
    decode_config_output, decode_infos_output, encode_config_output, encode_infos_output,
};
use starterkit_abi::{StarterKitCall, StarterKitFunction};
use starterkit_core::{
    Address, AdminPanel, AdminPanelType, PluginConfig, PluginInfo, PluginRef, VersionIndex,
    WebsiteHandle,
};

fn words(hex_words: &[&str]) -> Vec<u8> {
    hex_words
        .iter()
        .flat_map(|w| hex::decode(w).expect("test vector is hex"))
        .collect()
}

#[test]
fn selectors_match_the_deployed_interface() {
    let expected = [
        (StarterKitFunction::Frontend, "frontend()", "7d27f98a"),
        (StarterKitFunction::Infos, "infos()", "9a88be2f"),
        (StarterKitFunction::OcWebAdminPlugin, "ocWebAdminPlugin()", "d0e29a9d"),
        (StarterKitFunction::StaticFrontendPlugin, "staticFrontendPlugin()", "a63a391d"),
        (StarterKitFunction::GetConfig, "getConfig(address,uint256)", "530f451a"),
        (
            StarterKitFunction::SetConfig,
            "setConfig(address,uint256,(string[]))",
            "95268839",
        ),
        (StarterKitFunction::SupportsInterface, "supportsInterface(bytes4)", "01ffc9a7"),
    ];
    for (function, signature, selector) in expected {
        assert_eq!(function.signature(), signature);
        assert_eq!(hex::encode(function.selector()), selector, "{signature}");
    }
}

#[test]
fn set_config_calldata_layout() {
    let call = StarterKitCall::SetConfig {
        website: WebsiteHandle(Address([0x11; 20])),
        version: VersionIndex(1),
        config: PluginConfig::new(["apps", "dashboard"]),
    };

    let mut expected = hex::decode("95268839").unwrap();
    expected.extend(words(&[
        "0000000000000000000000001111111111111111111111111111111111111111",
        "0000000000000000000000000000000000000000000000000000000000000001",
        "0000000000000000000000000000000000000000000000000000000000000060",
        "0000000000000000000000000000000000000000000000000000000000000020",
        "0000000000000000000000000000000000000000000000000000000000000002",
        "0000000000000000000000000000000000000000000000000000000000000040",
        "0000000000000000000000000000000000000000000000000000000000000080",
        "0000000000000000000000000000000000000000000000000000000000000004",
        "6170707300000000000000000000000000000000000000000000000000000000",
        "0000000000000000000000000000000000000000000000000000000000000009",
        "64617368626f6172640000000000000000000000000000000000000000000000",
    ]));

    assert_eq!(hex::encode(call.encode()), hex::encode(&expected));
}

#[test]
fn get_config_calldata_layout() {
    let call = StarterKitCall::GetConfig {
        website: WebsiteHandle(Address([0x11; 20])),
        version: VersionIndex(99),
    };
    let mut expected = hex::decode("530f451a").unwrap();
    expected.extend(words(&[
        "0000000000000000000000001111111111111111111111111111111111111111",
        "0000000000000000000000000000000000000000000000000000000000000063",
    ]));
    assert_eq!(call.encode(), expected);
}

#[test]
fn get_config_return_data_layout() {
    let data = words(&[
        "0000000000000000000000000000000000000000000000000000000000000020",
        "0000000000000000000000000000000000000000000000000000000000000020",
        "0000000000000000000000000000000000000000000000000000000000000002",
        "0000000000000000000000000000000000000000000000000000000000000040",
        "0000000000000000000000000000000000000000000000000000000000000080",
        "0000000000000000000000000000000000000000000000000000000000000004",
        "6170707300000000000000000000000000000000000000000000000000000000",
        "0000000000000000000000000000000000000000000000000000000000000009",
        "64617368626f6172640000000000000000000000000000000000000000000000",
    ]);
    let config = decode_config_output(&data).unwrap();
    assert_eq!(config, PluginConfig::new(["apps", "dashboard"]));
    assert_eq!(encode_config_output(&config), data);
}

#[test]
fn empty_root_path_return_data() {
    let data = words(&[
        "0000000000000000000000000000000000000000000000000000000000000020",
        "0000000000000000000000000000000000000000000000000000000000000020",
        "0000000000000000000000000000000000000000000000000000000000000000",
    ]);
    assert_eq!(decode_config_output(&data).unwrap(), PluginConfig::default());
}

#[test]
fn infos_survive_the_wire() {
    let info = PluginInfo {
        name: "starterKit".into(),
        version: "0.1.0".into(),
        title: "Starter Kit".into(),
        sub_title: "A starter kit for your own plugin".into(),
        author: "nand".into(),
        homepage: "web3://example.eth/".into(),
        dependencies: vec![PluginRef(Address([0xaa; 20])), PluginRef(Address([0xbb; 20]))],
        admin_panels: vec![
            AdminPanel {
                title: "Starter Kit".into(),
                url: "/admin.umd.js".into(),
                module_for_global_admin_panel: PluginRef(Address::ZERO),
                panel_type: AdminPanelType::Primary,
            },
            AdminPanel {
                title: "Settings".into(),
                url: "/settings.umd.js".into(),
                module_for_global_admin_panel: PluginRef(Address([0xcc; 20])),
                panel_type: AdminPanelType::Unknown(5),
            },
        ],
    };
    let decoded = decode_infos_output(&encode_infos_output(&info)).unwrap();
    assert_eq!(decoded, info);
}

mod props {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn root_path_order_and_content_are_preserved(
            segments in proptest::collection::vec(".{0,40}", 0..8),
            version in any::<u64>(),
        ) {
            let call = StarterKitCall::SetConfig {
                website: WebsiteHandle(Address([0x22; 20])),
                version: VersionIndex(version),
                config: PluginConfig::new(segments.clone()),
            };
            let data = call.encode();
            prop_assert_eq!((data.len() - 4) % 32, 0);
            match StarterKitCall::decode(&data).unwrap() {
                StarterKitCall::SetConfig { config, version: v, .. } => {
                    prop_assert_eq!(config.root_path, segments);
                    prop_assert_eq!(v, VersionIndex(version));
                }
                other => prop_assert!(false, "decoded wrong call {:?}", other),
            }
        }
    }
}
